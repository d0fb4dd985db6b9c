//! Formatting options
//!
//! Options can be given either as raw [`StreamFlags`] bits or as the typed
//! [`StreamOptions`] struct. Both carry the same switches; the writers only
//! consume [`StreamOptions`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw option bits, independently combinable with `|`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StreamFlags {
    /// Raw flag value
    pub value: u32,
}

impl StreamFlags {
    /// No options
    pub const NONE: u32 = 0;

    /// Use numeric owner ids instead of owner names
    pub const NUMBERS: u32 = 1 << 0;

    /// Drop cosmetic whitespace from XML output
    pub const CONDENSED: u32 = 1 << 1;

    /// Write resolved key names instead of stored names
    pub const FULLNAME: u32 = 1 << 2;

    /// Use common-parent/basename layout for keysets
    pub const HIER: u32 = 1 << 3;

    /// XML prolog and schema header, or count line for debug dumps
    pub const HEADER: u32 = 1 << 4;

    /// Suppress the XML prolog and schema even if `HEADER` is set
    pub const XMLHEADERS: u32 = 1 << 5;

    /// Prefix debug lines with their index
    pub const SHOWINDICES: u32 = 1 << 6;

    /// Append type and sync flag codes to debug lines
    pub const SHOWFLAGS: u32 = 1 << 7;

    /// Force the meta separator on debug lines
    pub const SHOWMETA: u32 = 1 << 8;

    /// Print values on debug lines
    pub const KEY_VALUE: u32 = 1 << 9;

    /// Print comments on debug lines
    pub const KEY_META: u32 = 1 << 10;

    /// Create flags from a raw value
    pub const fn new(value: u32) -> Self {
        Self { value }
    }

    /// Check if flag is set
    pub const fn has(&self, flag: u32) -> bool {
        (self.value & flag) != 0
    }

    /// Set flag
    pub fn set(&mut self, flag: u32) {
        self.value |= flag;
    }

    /// Clear flag
    pub fn clear(&mut self, flag: u32) {
        self.value &= !flag;
    }
}

impl From<u32> for StreamFlags {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for StreamFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(u32, &str); 11] = [
            (StreamFlags::NUMBERS, "NUMBERS"),
            (StreamFlags::CONDENSED, "CONDENSED"),
            (StreamFlags::FULLNAME, "FULLNAME"),
            (StreamFlags::HIER, "HIER"),
            (StreamFlags::HEADER, "HEADER"),
            (StreamFlags::XMLHEADERS, "XMLHEADERS"),
            (StreamFlags::SHOWINDICES, "SHOWINDICES"),
            (StreamFlags::SHOWFLAGS, "SHOWFLAGS"),
            (StreamFlags::SHOWMETA, "SHOWMETA"),
            (StreamFlags::KEY_VALUE, "KEY_VALUE"),
            (StreamFlags::KEY_META, "KEY_META"),
        ];

        let set: Vec<&str> = NAMES
            .iter()
            .filter(|(flag, _)| self.has(*flag))
            .map(|(_, name)| *name)
            .collect();

        if set.is_empty() {
            write!(f, "NONE")
        } else {
            write!(f, "{}", set.join("|"))
        }
    }
}

/// Typed formatting options for one call
///
/// Every field defaults to `false`, so a partial configuration document only
/// needs to name the switches it turns on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamOptions {
    /// Use the numeric uid when qualifying resolved names
    pub numbers: bool,
    /// Omit cosmetic newlines and indentation in XML output
    pub condensed: bool,
    /// Write resolved names (`user:<owner>/...`) instead of stored names
    pub full_name: bool,
    /// Common-parent/basename layout for keysets
    pub hierarchical: bool,
    /// XML prolog and schema header, or count line for debug dumps
    pub header: bool,
    /// Suppress prolog and schema even when `header` is set
    pub suppress_xml_headers: bool,
    /// Prefix debug lines with `[index]`
    pub show_indices: bool,
    /// Append `Flags: ...` to debug lines
    pub show_flags: bool,
    /// Force the ` : ` separator on debug lines
    pub show_meta: bool,
    /// Print values on debug lines
    pub key_value: bool,
    /// Print comments on debug lines
    pub key_meta: bool,
}

impl StreamOptions {
    /// Create options with every switch off
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for a human-readable XML export with header and parent compression
    pub fn xml_export() -> Self {
        Self::new().with_header(true).with_hierarchical(true)
    }

    /// Options for a full debug dump
    pub fn debug_dump() -> Self {
        Self::new()
            .with_header(true)
            .with_show_indices(true)
            .with_show_flags(true)
            .with_key_value(true)
            .with_key_meta(true)
    }

    /// Set numeric owner ids
    pub fn with_numbers(mut self, enabled: bool) -> Self {
        self.numbers = enabled;
        self
    }

    /// Set condensed output
    pub fn with_condensed(mut self, enabled: bool) -> Self {
        self.condensed = enabled;
        self
    }

    /// Set resolved names
    pub fn with_full_name(mut self, enabled: bool) -> Self {
        self.full_name = enabled;
        self
    }

    /// Set hierarchical layout
    pub fn with_hierarchical(mut self, enabled: bool) -> Self {
        self.hierarchical = enabled;
        self
    }

    /// Set header output
    pub fn with_header(mut self, enabled: bool) -> Self {
        self.header = enabled;
        self
    }

    /// Set XML header suppression
    pub fn with_suppress_xml_headers(mut self, enabled: bool) -> Self {
        self.suppress_xml_headers = enabled;
        self
    }

    /// Set debug line indices
    pub fn with_show_indices(mut self, enabled: bool) -> Self {
        self.show_indices = enabled;
        self
    }

    /// Set debug flag codes
    pub fn with_show_flags(mut self, enabled: bool) -> Self {
        self.show_flags = enabled;
        self
    }

    /// Set debug meta separator
    pub fn with_show_meta(mut self, enabled: bool) -> Self {
        self.show_meta = enabled;
        self
    }

    /// Set debug value output
    pub fn with_key_value(mut self, enabled: bool) -> Self {
        self.key_value = enabled;
        self
    }

    /// Set debug comment output
    pub fn with_key_meta(mut self, enabled: bool) -> Self {
        self.key_meta = enabled;
        self
    }

    /// Whether a keyset document starts with the XML prolog and schema
    pub fn emits_xml_header(&self) -> bool {
        self.header && !self.suppress_xml_headers
    }

    /// Convert back to raw bits
    pub fn to_flags(&self) -> StreamFlags {
        let mut flags = StreamFlags::default();
        let pairs = [
            (self.numbers, StreamFlags::NUMBERS),
            (self.condensed, StreamFlags::CONDENSED),
            (self.full_name, StreamFlags::FULLNAME),
            (self.hierarchical, StreamFlags::HIER),
            (self.header, StreamFlags::HEADER),
            (self.suppress_xml_headers, StreamFlags::XMLHEADERS),
            (self.show_indices, StreamFlags::SHOWINDICES),
            (self.show_flags, StreamFlags::SHOWFLAGS),
            (self.show_meta, StreamFlags::SHOWMETA),
            (self.key_value, StreamFlags::KEY_VALUE),
            (self.key_meta, StreamFlags::KEY_META),
        ];
        for (enabled, flag) in pairs {
            if enabled {
                flags.set(flag);
            }
        }
        flags
    }
}

impl From<StreamFlags> for StreamOptions {
    fn from(flags: StreamFlags) -> Self {
        Self {
            numbers: flags.has(StreamFlags::NUMBERS),
            condensed: flags.has(StreamFlags::CONDENSED),
            full_name: flags.has(StreamFlags::FULLNAME),
            hierarchical: flags.has(StreamFlags::HIER),
            header: flags.has(StreamFlags::HEADER),
            suppress_xml_headers: flags.has(StreamFlags::XMLHEADERS),
            show_indices: flags.has(StreamFlags::SHOWINDICES),
            show_flags: flags.has(StreamFlags::SHOWFLAGS),
            show_meta: flags.has(StreamFlags::SHOWMETA),
            key_value: flags.has(StreamFlags::KEY_VALUE),
            key_meta: flags.has(StreamFlags::KEY_META),
        }
    }
}
