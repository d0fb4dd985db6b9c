//! XML exchange format for keys and keysets
//!
//! A keyset is written as one `<keyset>` root element holding a `<key>`
//! element per key. The layout is stable, including the whitespace written
//! when [`StreamOptions::condensed`] is off:
//!
//! ```text
//! <keyset>
//! <key name="system:/sw/xorg/Monitor/Monitor0/Name">
//!
//!      <value><![CDATA[Samsung TFT panel]]></value>
//!      <comment><![CDATA[My monitor]]></comment>
//! </key>
//!
//! </keyset>
//! ```
//!
//! String values of at most 16 bytes without a newline are written as a
//! `value` attribute, longer ones as a CDATA `<value>` element. Binary values
//! are base64 encoded inside `<value>`. CDATA content is not escaped, so a
//! value containing `]]>` produces a document that XML parsers reject.
//!
//! # Example
//!
//! ```
//! use keystream::xml::keyset_to_string;
//! use keystream::{Key, KeySet, StreamOptions};
//!
//! let keyset = KeySet::with_keys([
//!     Key::new("user:/sw/app/host").with_string("localhost"),
//!     Key::new("user:/sw/app/port").with_string("8080"),
//! ]);
//!
//! let options = StreamOptions::new().with_hierarchical(true).with_condensed(true);
//! let xml = keyset_to_string(&keyset, &options).expect("Test operation should succeed");
//! assert!(xml.contains("parent=\"user:/sw/app\""));
//! assert!(xml.contains("<key basename=\"port\" value=\"8080\"/>"));
//! ```

mod key;
mod keyset;

pub use key::{MAX_ATTRIBUTE_VALUE_LEN, key_to_stream, key_to_stream_basename};
pub use keyset::{KEYSET_NAMESPACE, SCHEMA_LOCATION, XSI_NAMESPACE, keyset_to_stream};

use crate::error::StreamResult;
use crate::key::Key;
use crate::keyset::KeySet;
use crate::options::StreamOptions;
use std::io::{BufWriter, Write};

/// Writes keys to a sink with fixed options, counting bytes across calls
pub struct KeyWriter<W: Write> {
    writer: BufWriter<W>,
    options: StreamOptions,
    written: usize,
}

impl<W: Write> KeyWriter<W> {
    /// Create a new writer
    pub fn new(writer: W, options: StreamOptions) -> Self {
        Self {
            writer: BufWriter::new(writer),
            options,
            written: 0,
        }
    }

    /// Write a key with its full name
    pub fn write_key(&mut self, key: &Key) -> StreamResult<usize> {
        let n = key_to_stream(key, &mut self.writer, &self.options)?;
        self.written += n;
        Ok(n)
    }

    /// Write a key relative to `parent`
    pub fn write_key_basename(
        &mut self,
        key: &Key,
        parent: &str,
        parent_size: usize,
    ) -> StreamResult<usize> {
        let n = key_to_stream_basename(
            key,
            &mut self.writer,
            Some(parent),
            parent_size,
            &self.options,
        )?;
        self.written += n;
        Ok(n)
    }

    /// Total bytes written by this writer
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush and get the inner writer
    pub fn into_inner(self) -> Result<W, std::io::Error> {
        self.writer
            .into_inner()
            .map_err(std::io::IntoInnerError::into_error)
    }
}

/// Writes keyset documents to a sink with fixed options
pub struct KeySetWriter<W: Write> {
    writer: BufWriter<W>,
    options: StreamOptions,
    written: usize,
}

impl<W: Write> KeySetWriter<W> {
    /// Create a new writer
    pub fn new(writer: W, options: StreamOptions) -> Self {
        Self {
            writer: BufWriter::new(writer),
            options,
            written: 0,
        }
    }

    /// Write a complete keyset document
    pub fn write_keyset(&mut self, keyset: &KeySet) -> StreamResult<usize> {
        let n = keyset_to_stream(keyset, &mut self.writer, &self.options)?;
        self.writer.flush()?;
        self.written += n;
        Ok(n)
    }

    /// Total bytes written by this writer
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush and get the inner writer
    pub fn into_inner(self) -> Result<W, std::io::Error> {
        self.writer
            .into_inner()
            .map_err(std::io::IntoInnerError::into_error)
    }
}

/// Format a single key to a string
pub fn key_to_string(key: &Key, options: &StreamOptions) -> StreamResult<String> {
    let mut buffer = Vec::new();
    key_to_stream(key, &mut buffer, options)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Format a keyset document to a string
pub fn keyset_to_string(keyset: &KeySet, options: &StreamOptions) -> StreamResult<String> {
    let mut buffer = Vec::new();
    keyset_to_stream(keyset, &mut buffer, options)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Write a keyset document to a file
pub fn write_to_file<P: AsRef<std::path::Path>>(
    path: P,
    keyset: &KeySet,
    options: &StreamOptions,
) -> StreamResult<usize> {
    let file = std::fs::File::create(path)?;
    let mut writer = KeySetWriter::new(file, *options);
    writer.write_keyset(keyset)
}
