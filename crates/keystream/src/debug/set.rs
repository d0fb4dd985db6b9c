use crate::debug::line::key_output;
use crate::error::StreamResult;
use crate::keyset::KeySet;
use crate::options::StreamOptions;
use crate::sink::CountingSink;
use std::io::Write;
use tracing::debug;

/// Write every key of `keyset` as one debug line
///
/// With `header` the keyset size is written first; with `show_indices` each
/// line starts with its zero-based position. Returns the number of bytes
/// written.
pub fn keyset_output<W: Write + ?Sized>(
    keyset: &KeySet,
    sink: &mut W,
    options: &StreamOptions,
) -> StreamResult<usize> {
    let snapshot = keyset.snapshot();
    let mut out = CountingSink::new(sink);

    debug!("Dumping keyset of {} keys", snapshot.len());

    if options.header {
        writeln!(out, "Output keyset of size {}", snapshot.len())?;
    }

    for (index, key) in snapshot.iter().enumerate() {
        if options.show_indices {
            write!(out, "[{index}] ")?;
        }
        key_output(key, &mut out, options)?;
    }

    Ok(out.written())
}

/// Dump a keyset to a string
pub fn keyset_output_string(keyset: &KeySet, options: &StreamOptions) -> StreamResult<String> {
    let mut buffer = Vec::new();
    keyset_output(keyset, &mut buffer, options)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::key::Key;
    use pretty_assertions::assert_eq;

    fn keyset() -> KeySet {
        KeySet::with_keys([
            Key::new("user:/a").with_string("hello"),
            Key::new("user:/b").with_binary(b"xyz".to_vec()),
        ])
    }

    #[test]
    fn test_plain_dump() {
        let output = keyset_output_string(&keyset(), &StreamOptions::new()).unwrap();
        assert_eq!(output, "Name[8]: user:/a : \nName[8]: user:/b : \n");
    }

    #[test]
    fn test_header_and_indices() {
        let options = StreamOptions::new()
            .with_header(true)
            .with_show_indices(true)
            .with_key_value(true);
        let output = keyset_output_string(&keyset(), &options).unwrap();
        assert_eq!(
            output,
            "Output keyset of size 2\n\
             [0] Name[8]: user:/a : String[6]: hello : \n\
             [1] Name[8]: user:/b : Binary[3]: xyz : \n"
        );
    }

    #[test]
    fn test_empty_keyset_with_header() {
        let options = StreamOptions::new().with_header(true);
        let output = keyset_output_string(&KeySet::new(), &options).unwrap();
        assert_eq!(output, "Output keyset of size 0\n");
    }

    #[test]
    fn test_returns_byte_count() {
        let mut buffer = Vec::new();
        let written = keyset_output(&keyset(), &mut buffer, &StreamOptions::debug_dump()).unwrap();
        assert_eq!(written, buffer.len());
    }
}
