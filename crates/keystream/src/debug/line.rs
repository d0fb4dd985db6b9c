use crate::error::StreamResult;
use crate::key::{Key, KeyValue};
use crate::options::StreamOptions;
use crate::sink::CountingSink;
use std::io::Write;

/// Write one line describing `key`
///
/// Sizes are storage sizes, so string names, values and comments count their
/// terminator. Flag codes are `b` for binary, `s` for string and another `s`
/// for a key that needs sync; a changed string key therefore shows `ss`.
/// Returns the number of bytes written.
pub fn key_output<W: Write + ?Sized>(
    key: &Key,
    sink: &mut W,
    options: &StreamOptions,
) -> StreamResult<usize> {
    let mut out = CountingSink::new(sink);

    let name_size = key.name_size();
    if name_size > 1 {
        write!(out, "Name[{name_size}]: {} : ", key.name())?;
    }

    let value_size = key.value_size();
    if options.key_value && value_size > 1 {
        match key.value() {
            KeyValue::Binary(data) => {
                let text = data.split(|&b| b == 0).next().unwrap_or_default();
                write!(out, "Binary[{value_size}]: ")?;
                out.write_all(text)?;
                out.write_all(b" : ")?;
            }
            KeyValue::String(value) => write!(out, "String[{value_size}]: {value} : ")?,
            KeyValue::None => {}
        }
    }

    let comment_size = key.comment_size();
    if options.key_meta
        && comment_size > 1
        && let Some(comment) = key.comment()
    {
        write!(out, "Comment[{comment_size}]: {comment} : ")?;
    }

    if options.show_meta {
        out.write_all(b" : ")?;
    }

    if options.show_flags {
        if !options.show_meta {
            out.write_all(b" ")?;
        }
        out.write_all(b"Flags: ")?;
        if key.is_binary() {
            out.write_all(b"b")?;
        }
        if key.is_string() {
            out.write_all(b"s")?;
        }
        if key.needs_sync() {
            out.write_all(b"s")?;
        }
    }

    out.write_all(b"\n")?;
    Ok(out.written())
}
