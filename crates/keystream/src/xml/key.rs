use crate::error::StreamResult;
use crate::key::{KEY_PATH_SEPARATOR, Key, KeyValue};
use crate::options::StreamOptions;
use crate::sink::CountingSink;
use base64::{Engine as _, engine::general_purpose};
use std::borrow::Cow;
use std::io::Write;
use tracing::trace;

/// Longest string value written as a `value` attribute
pub const MAX_ATTRIBUTE_VALUE_LEN: usize = 16;

/// Write `key` as a single `<key>` element
///
/// Returns the number of bytes written.
pub fn key_to_stream<W: Write + ?Sized>(
    key: &Key,
    sink: &mut W,
    options: &StreamOptions,
) -> StreamResult<usize> {
    key_to_stream_basename(key, sink, None, 0, options)
}

/// Write `key` as a `<key>` element named relative to `parent`
///
/// The first `parent_size` bytes of `parent` (all of it when 0) are compared
/// with the key name. On a match the prefix and any following separators are
/// stripped and the rest is written as the `basename` attribute. Keys that do
/// not match, or whose basename would be empty, get a `name` attribute.
pub fn key_to_stream_basename<W: Write + ?Sized>(
    key: &Key,
    sink: &mut W,
    parent: Option<&str>,
    parent_size: usize,
    options: &StreamOptions,
) -> StreamResult<usize> {
    let condensed = options.condensed;
    let basename = parent.and_then(|parent| strip_parent(key.name(), parent, parent_size));

    // resolve before the first write so a failing key leaves no partial element
    let name = match basename {
        Some(_) => None,
        None if options.full_name => Some(key.full_name(options.numbers)?),
        None => Some(Cow::Borrowed(key.name())),
    };

    let mut out = CountingSink::new(sink);

    if let Some(name) = name {
        write!(out, "<key name=\"{name}\"")?;
    } else if let Some(basename) = basename {
        trace!("Writing {} relative to parent", key.name());
        out.write_all(b"<key basename=\"")?;
        out.write_all(basename)?;
        out.write_all(b"\"")?;
    }

    let comment = key.comment();

    match key.value() {
        KeyValue::None if comment.is_none() => {
            out.write_all(b"/>")?;
            out.cosmetic(condensed, b"\n\n")?;
            return Ok(out.written());
        }
        KeyValue::None => {
            out.write_all(b">")?;
            out.cosmetic(condensed, b"\n")?;
        }
        KeyValue::String(value) if fits_attribute(value) => {
            let lead: &[u8] = if condensed { b" " } else { b"\n\t" };
            out.write_all(lead)?;
            write!(out, "value=\"{value}\"")?;

            if comment.is_none() {
                out.write_all(b"/>")?;
                out.cosmetic(condensed, b"\n")?;
                return Ok(out.written());
            }
            out.write_all(b">")?;
            out.cosmetic(condensed, b"\n")?;
        }
        KeyValue::String(value) => {
            out.write_all(b">")?;
            out.cosmetic(condensed, b"\n\n     ")?;
            out.write_all(b"<value><![CDATA[")?;
            out.write_all(value.as_bytes())?;
            out.write_all(b"]]></value>")?;
        }
        KeyValue::Binary(data) => {
            out.write_all(b">")?;
            out.cosmetic(condensed, b"\n\n     ")?;
            out.write_all(b"<value>")?;
            out.cosmetic(condensed, b"\n")?;
            out.write_all(general_purpose::STANDARD.encode(data).as_bytes())?;
            out.cosmetic(condensed, b"\n")?;
            out.write_all(b"</value>")?;
        }
    }

    if !condensed {
        out.write_all(b"\n")?;
        if comment.is_some() {
            out.write_all(b"     ")?;
        }
    }

    if let Some(comment) = comment {
        write!(out, "<comment><![CDATA[{comment}]]></comment>")?;
        out.cosmetic(condensed, b"\n")?;
    }

    out.write_all(b"</key>")?;
    out.cosmetic(condensed, b"\n\n")?;

    Ok(out.written())
}

/// Short single-line strings are written as an attribute
fn fits_attribute(value: &str) -> bool {
    value.len() <= MAX_ATTRIBUTE_VALUE_LEN && !value.contains('\n')
}

/// Basename of `name` below `parent`, or `None` when it does not match or is empty
fn strip_parent<'a>(name: &'a str, parent: &str, parent_size: usize) -> Option<&'a [u8]> {
    let skip = if parent_size == 0 {
        parent.len()
    } else {
        parent_size
    };

    let prefix = parent.as_bytes().get(..skip)?;
    let name = name.as_bytes();
    if name.get(..skip)? != prefix {
        return None;
    }

    let rest = &name[skip..];
    let start = rest
        .iter()
        .position(|&b| b != KEY_PATH_SEPARATOR)
        .unwrap_or(rest.len());

    match &rest[start..] {
        [] => None,
        basename => Some(basename),
    }
}
