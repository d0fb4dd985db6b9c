//! Shared fixtures and render helpers for unit tests

use crate::key::Key;
use crate::keyset::KeySet;
use crate::options::StreamOptions;
use crate::xml::{key_to_stream, key_to_stream_basename, keyset_to_stream};

/// The monitor name key used throughout the format documentation
pub fn monitor_key() -> Key {
    Key::new("system:/sw/xorg/Monitor/Monitor0/Name")
        .with_string("Samsung TFT panel")
        .with_comment("My monitor")
        .with_owner("root")
}

/// Three keys below `system:/sw/xorg`
pub fn xorg_keyset() -> KeySet {
    KeySet::with_keys([
        monitor_key(),
        Key::new("system:/sw/xorg/Monitor/Monitor0/Vendor").with_string("Samsung"),
        Key::new("system:/sw/xorg/Devices/Card0"),
    ])
}

/// Render a key and check the returned byte count against the output
pub fn render_key(key: &Key, options: &StreamOptions) -> String {
    let mut buffer = Vec::new();
    let written = key_to_stream(key, &mut buffer, options).expect("Test operation should succeed");
    assert_eq!(written, buffer.len());
    String::from_utf8(buffer).expect("Test operation should succeed")
}

/// Render a key relative to `parent`
pub fn render_key_basename(
    key: &Key,
    parent: &str,
    parent_size: usize,
    options: &StreamOptions,
) -> String {
    let mut buffer = Vec::new();
    let written = key_to_stream_basename(key, &mut buffer, Some(parent), parent_size, options)
        .expect("Test operation should succeed");
    assert_eq!(written, buffer.len());
    String::from_utf8(buffer).expect("Test operation should succeed")
}

/// Render a keyset document
pub fn render_keyset(keyset: &KeySet, options: &StreamOptions) -> String {
    let mut buffer = Vec::new();
    let written =
        keyset_to_stream(keyset, &mut buffer, options).expect("Test operation should succeed");
    assert_eq!(written, buffer.len());
    String::from_utf8(buffer).expect("Test operation should succeed")
}
