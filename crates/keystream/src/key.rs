//! Key data model
//!
//! A [`Key`] is a named entry with an optional value and comment. Names are
//! hierarchical paths such as `system:/sw/xorg/Monitor` where `/` separates
//! the levels and the part before `:/` is the namespace.

use crate::error::{StreamError, StreamResult};
use std::borrow::Cow;
use tracing::warn;

/// Separator between the levels of a key name
pub const KEY_PATH_SEPARATOR: u8 = b'/';

/// Maximum length of a resolved key name, terminator included
pub const MAX_PATH_LENGTH: usize = 4096;

const USER_NAMESPACE: &str = "user:";

/// Value held by a key
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum KeyValue {
    /// No value
    #[default]
    None,
    /// Text value
    String(String),
    /// Raw bytes, may contain zero bytes
    Binary(Vec<u8>),
}

/// A single named entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    name: String,
    value: KeyValue,
    comment: Option<String>,
    owner: Option<String>,
    uid: u32,
    needs_sync: bool,
}

impl Key {
    /// Create a key without value or comment
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: KeyValue::None,
            comment: None,
            owner: None,
            uid: 0,
            needs_sync: false,
        }
    }

    /// Set a string value
    pub fn with_string(mut self, value: impl Into<String>) -> Self {
        self.value = KeyValue::String(value.into());
        self
    }

    /// Set a binary value
    pub fn with_binary(mut self, value: impl Into<Vec<u8>>) -> Self {
        self.value = KeyValue::Binary(value.into());
        self
    }

    /// Set the comment
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Set the owner used to qualify `user:` names
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Set the numeric owner id
    pub fn with_uid(mut self, uid: u32) -> Self {
        self.uid = uid;
        self
    }

    /// Mark the key as changed since it was last stored
    pub fn with_needs_sync(mut self, needs_sync: bool) -> Self {
        self.needs_sync = needs_sync;
        self
    }

    /// Stored name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value
    pub fn value(&self) -> &KeyValue {
        &self.value
    }

    /// Replace the value
    pub fn set_value(&mut self, value: KeyValue) {
        self.value = value;
    }

    /// Comment, if any
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Replace the comment
    pub fn set_comment(&mut self, comment: Option<String>) {
        self.comment = comment;
    }

    /// Owner name, if any
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    /// Numeric owner id
    pub fn uid(&self) -> u32 {
        self.uid
    }

    /// Whether the key holds a value of any kind
    pub fn has_value(&self) -> bool {
        !matches!(self.value, KeyValue::None)
    }

    /// Whether the value is binary
    pub fn is_binary(&self) -> bool {
        matches!(self.value, KeyValue::Binary(_))
    }

    /// Whether the value is a string
    pub fn is_string(&self) -> bool {
        matches!(self.value, KeyValue::String(_))
    }

    /// Whether the key changed since it was last stored
    pub fn needs_sync(&self) -> bool {
        self.needs_sync
    }

    /// Name size including the terminator
    pub fn name_size(&self) -> usize {
        self.name.len() + 1
    }

    /// Value size: string length plus terminator, raw length for binary, 0 when absent
    pub fn value_size(&self) -> usize {
        match &self.value {
            KeyValue::None => 0,
            KeyValue::String(s) => s.len() + 1,
            KeyValue::Binary(data) => data.len(),
        }
    }

    /// Comment size including the terminator, 0 when absent
    pub fn comment_size(&self) -> usize {
        self.comment.as_ref().map_or(0, |c| c.len() + 1)
    }

    /// Resolve the full name of the key
    ///
    /// Keys in the `user:` namespace are qualified with their owner, so
    /// `user:/sw/app` owned by `alice` resolves to `user:alice/sw/app`. With
    /// `numeric_owner` the uid is used in place of the owner name. Every other
    /// key resolves to its stored name.
    pub fn full_name(&self, numeric_owner: bool) -> StreamResult<Cow<'_, str>> {
        let resolved = match (self.name.strip_prefix(USER_NAMESPACE), &self.owner) {
            (Some(rest), Some(owner)) => {
                let owner = if numeric_owner {
                    Cow::Owned(self.uid.to_string())
                } else {
                    Cow::Borrowed(owner.as_str())
                };
                Cow::Owned(format!("{USER_NAMESPACE}{owner}{rest}"))
            }
            _ => Cow::Borrowed(self.name.as_str()),
        };

        let len = resolved.len() + 1;
        if len > MAX_PATH_LENGTH {
            warn!("Resolved name of {} needs {} bytes", self.name, len);
            return Err(StreamError::NameTooLong {
                name: self.name.clone(),
                len,
                max: MAX_PATH_LENGTH,
            });
        }

        Ok(resolved)
    }
}
