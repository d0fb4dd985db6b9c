//! Ordered key collections and call-scoped snapshots

use crate::key::{KEY_PATH_SEPARATOR, Key};

/// Ordered collection of keys with unique names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeySet {
    keys: Vec<Key>,
}

impl KeySet {
    /// Create an empty keyset
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a keyset from keys, later keys replacing earlier ones of the same name
    pub fn with_keys(keys: impl IntoIterator<Item = Key>) -> Self {
        let mut keyset = Self::new();
        for key in keys {
            keyset.append(key);
        }
        keyset
    }

    /// Append a key
    ///
    /// A key with the same name is replaced in place, keeping its position.
    pub fn append(&mut self, key: Key) -> &mut Self {
        match self.keys.iter_mut().find(|k| k.name() == key.name()) {
            Some(existing) => *existing = key,
            None => self.keys.push(key),
        }
        self
    }

    /// Find a key by name
    pub fn lookup(&self, name: &str) -> Option<&Key> {
        self.keys.iter().find(|k| k.name() == name)
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Check if the keyset has no keys
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterate keys in order
    pub fn iter(&self) -> impl Iterator<Item = &Key> {
        self.keys.iter()
    }

    /// Take an order-preserving view of the keys for the duration of a call
    pub fn snapshot(&self) -> KeySetSnapshot<'_> {
        KeySetSnapshot {
            keys: self.keys.iter().collect(),
        }
    }

    /// Deepest name that is equal to or an ancestor of every key name
    pub fn common_parent_name(&self) -> Option<String> {
        self.snapshot().common_parent_name()
    }
}

impl FromIterator<Key> for KeySet {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        Self::with_keys(iter)
    }
}

impl<'a> IntoIterator for &'a KeySet {
    type Item = &'a Key;
    type IntoIter = std::slice::Iter<'a, Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}

/// Shallow, stable view of a keyset
///
/// The keyset cannot be mutated while a snapshot borrows it, so size and
/// order stay fixed for the whole serialization call.
#[derive(Debug, Clone)]
pub struct KeySetSnapshot<'a> {
    keys: Vec<&'a Key>,
}

impl<'a> KeySetSnapshot<'a> {
    /// Number of keys
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Check if the snapshot has no keys
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Key at a position
    pub fn get(&self, index: usize) -> Option<&'a Key> {
        self.keys.get(index).copied()
    }

    /// Iterate keys in order
    pub fn iter(&self) -> impl Iterator<Item = &'a Key> + '_ {
        self.keys.iter().copied()
    }

    /// Deepest name that is equal to or an ancestor of every key name
    ///
    /// Returns `None` for an empty snapshot and when the keys share no
    /// ancestor, e.g. because they live in different namespaces.
    pub fn common_parent_name(&self) -> Option<String> {
        let mut keys = self.keys.iter();
        let mut parent = keys.next()?.name();

        for key in keys {
            while !is_below_or_same(parent, key.name()) {
                parent = parent_name(parent)?;
            }
        }

        if parent.is_empty() {
            None
        } else {
            Some(parent.to_string())
        }
    }
}

fn is_below_or_same(parent: &str, name: &str) -> bool {
    match name.strip_prefix(parent) {
        Some("") => true,
        Some(rest) => {
            parent.as_bytes().last() == Some(&KEY_PATH_SEPARATOR)
                || rest.as_bytes().first() == Some(&KEY_PATH_SEPARATOR)
        }
        None => false,
    }
}

/// Name one level up; a namespace root such as `system:/` keeps its separator
fn parent_name(name: &str) -> Option<&str> {
    let trimmed = name.trim_end_matches(char::from(KEY_PATH_SEPARATOR));
    let cut = trimmed.rfind(char::from(KEY_PATH_SEPARATOR))?;
    let parent = &trimmed[..cut];

    if parent.is_empty() || parent.ends_with(':') {
        Some(&trimmed[..=cut])
    } else {
        Some(parent)
    }
}
