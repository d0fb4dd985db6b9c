//! XML and debug text serializers for hierarchical key-value sets
//!
//! A [`KeySet`] is an ordered collection of [`Key`]s, each with a
//! hierarchical name, an optional string or binary value and an optional
//! comment. This crate writes them out in two shapes:
//!
//! - **XML**: a `<keyset>` document used as an exchange format, either flat
//!   or compressed relative to the common parent of all keys. See [`xml`].
//! - **Debug dump**: one line per key for humans. See [`debug`].
//!
//! Every writer borrows its input, writes incrementally to any
//! [`std::io::Write`] sink and returns the number of bytes written. Options
//! are passed per call as [`StreamOptions`], or as raw [`StreamFlags`] bits.
//!
//! # Example
//!
//! ```
//! use keystream::{Key, KeySet, StreamFlags, StreamOptions};
//!
//! let keyset = KeySet::with_keys([
//!     Key::new("system:/sw/xorg/Monitor/Monitor0/Name")
//!         .with_string("Samsung TFT panel")
//!         .with_comment("My monitor"),
//! ]);
//!
//! let options = StreamOptions::from(StreamFlags::new(StreamFlags::CONDENSED));
//! let mut out = Vec::new();
//! let written = keystream::xml::keyset_to_stream(&keyset, &mut out, &options)
//!     .expect("Test operation should succeed");
//! assert_eq!(written, out.len());
//! ```

#![warn(missing_docs)]

pub mod debug;
mod error;
mod key;
mod keyset;
mod options;
mod sink;
pub mod xml;

pub use error::{StreamError, StreamResult};
pub use key::{KEY_PATH_SEPARATOR, Key, KeyValue, MAX_PATH_LENGTH};
pub use keyset::{KeySet, KeySetSnapshot};
pub use options::{StreamFlags, StreamOptions};

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
pub(crate) mod test_utils;
