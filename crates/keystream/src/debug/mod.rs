//! Line-per-key debug dump
//!
//! Meant for human eyes while debugging. The layout is not stable and should
//! not be parsed.
//!
//! ```
//! use keystream::debug::keyset_output_string;
//! use keystream::{Key, KeySet, StreamOptions};
//!
//! let keyset = KeySet::with_keys([Key::new("user:/a").with_string("hello")]);
//! let options = StreamOptions::new().with_key_value(true);
//! let dump = keyset_output_string(&keyset, &options).expect("Test operation should succeed");
//! assert_eq!(dump, "Name[8]: user:/a : String[6]: hello : \n");
//! ```

mod line;
mod set;

pub use line::key_output;
pub use set::{keyset_output, keyset_output_string};
