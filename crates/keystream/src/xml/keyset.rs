use crate::error::StreamResult;
use crate::keyset::KeySet;
use crate::options::StreamOptions;
use crate::sink::CountingSink;
use crate::xml::key::{key_to_stream, key_to_stream_basename};
use std::io::Write;
use tracing::debug;

/// Namespace of the keyset schema
pub const KEYSET_NAMESPACE: &str = "https://www.libelektra.org";

/// XML Schema instance namespace
pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Location hint for the keyset schema
pub const SCHEMA_LOCATION: &str = "https://www.libelektra.org elektra.xsd";

/// Write `keyset` as a `<keyset>` document
///
/// Without `hierarchical` every key is written with its full name. With it,
/// the common parent of all keys goes into the `parent` attribute of the root
/// element and keys below it are written by basename. Returns the number of
/// bytes written.
pub fn keyset_to_stream<W: Write + ?Sized>(
    keyset: &KeySet,
    sink: &mut W,
    options: &StreamOptions,
) -> StreamResult<usize> {
    let snapshot = keyset.snapshot();
    let condensed = options.condensed;
    let mut out = CountingSink::new(sink);

    if options.emits_xml_header() {
        write!(out, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
        if !condensed {
            write!(
                out,
                "\n<!-- Generated by keystream. Total of {} keys. -->\n",
                snapshot.len()
            )?;
        }

        let separator = if condensed { " " } else { "\n\t" };
        write!(
            out,
            "<keyset xmlns=\"{KEYSET_NAMESPACE}\"{separator}\
             xmlns:xsi=\"{XSI_NAMESPACE}\"{separator}\
             xsi:schemaLocation=\"{SCHEMA_LOCATION}\""
        )?;
        out.cosmetic(condensed, b"\n")?;
    } else {
        out.write_all(b"<keyset")?;
    }

    let parent = if options.hierarchical {
        snapshot.common_parent_name()
    } else {
        None
    };

    debug!(
        "Writing keyset of {} keys, common parent {:?}",
        snapshot.len(),
        parent
    );

    if let Some(parent) = parent {
        writeln!(out, "        parent=\"{parent}\">")?;
        for key in snapshot.iter() {
            key_to_stream_basename(key, &mut out, Some(parent.as_str()), 0, options)?;
        }
    } else {
        out.write_all(b">\n")?;
        for key in snapshot.iter() {
            key_to_stream(key, &mut out, options)?;
        }
    }

    out.write_all(b"</keyset>\n")?;

    Ok(out.written())
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::key::Key;
    use crate::test_utils::{render_keyset, xorg_keyset};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_keyset_hier_without_header() {
        let options = StreamOptions::new().with_hierarchical(true);
        assert_eq!(render_keyset(&KeySet::new(), &options), "<keyset>\n</keyset>\n");
        assert_eq!(
            render_keyset(&KeySet::new(), &options.with_condensed(true)),
            "<keyset>\n</keyset>\n"
        );
    }

    #[test]
    fn test_flat_layout() {
        let ks = KeySet::with_keys([
            Key::new("user:/a").with_string("1"),
            Key::new("user:/b"),
        ]);
        let output = render_keyset(&ks, &StreamOptions::new().with_condensed(true));
        assert_eq!(
            output,
            "<keyset>\n\
             <key name=\"user:/a\" value=\"1\"/>\
             <key name=\"user:/b\"/>\
             </keyset>\n"
        );
    }

    #[test]
    fn test_hierarchical_layout() {
        let options = StreamOptions::new()
            .with_hierarchical(true)
            .with_condensed(true);
        let output = render_keyset(&xorg_keyset(), &options);
        assert_eq!(
            output,
            "<keyset        parent=\"system:/sw/xorg\">\n\
             <key basename=\"Monitor/Monitor0/Name\"><value><![CDATA[Samsung TFT panel]]></value>\
             <comment><![CDATA[My monitor]]></comment></key>\
             <key basename=\"Monitor/Monitor0/Vendor\" value=\"Samsung\"/>\
             <key basename=\"Devices/Card0\"/>\
             </keyset>\n"
        );
    }

    #[test]
    fn test_hierarchical_parent_key_keeps_name() {
        let ks = KeySet::with_keys([Key::new("user:/app"), Key::new("user:/app/a")]);
        let options = StreamOptions::new()
            .with_hierarchical(true)
            .with_condensed(true);
        assert_eq!(
            render_keyset(&ks, &options),
            "<keyset        parent=\"user:/app\">\n\
             <key name=\"user:/app\"/>\
             <key basename=\"a\"/>\
             </keyset>\n"
        );
    }

    #[test]
    fn test_hierarchical_without_common_parent() {
        let ks = KeySet::with_keys([Key::new("system:/a"), Key::new("user:/a")]);
        let options = StreamOptions::new()
            .with_hierarchical(true)
            .with_condensed(true);
        assert_eq!(
            render_keyset(&ks, &options),
            "<keyset>\n<key name=\"system:/a\"/><key name=\"user:/a\"/></keyset>\n"
        );
    }

    #[test]
    fn test_header() {
        let ks = KeySet::with_keys([Key::new("user:/a")]);
        let output = render_keyset(&ks, &StreamOptions::new().with_header(true));
        assert_eq!(
            output,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <!-- Generated by keystream. Total of 1 keys. -->\n\
             <keyset xmlns=\"https://www.libelektra.org\"\n\
             \txmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\"\n\
             \txsi:schemaLocation=\"https://www.libelektra.org elektra.xsd\"\n\
             >\n\
             <key name=\"user:/a\"/>\n\n\
             </keyset>\n"
        );
    }

    #[test]
    fn test_header_condensed() {
        let options = StreamOptions::new().with_header(true).with_condensed(true);
        assert_eq!(
            render_keyset(&KeySet::new(), &options),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
             <keyset xmlns=\"https://www.libelektra.org\" \
             xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" \
             xsi:schemaLocation=\"https://www.libelektra.org elektra.xsd\">\n\
             </keyset>\n"
        );
    }

    #[test]
    fn test_header_suppressed() {
        let options = StreamOptions::new()
            .with_header(true)
            .with_suppress_xml_headers(true);
        assert_eq!(render_keyset(&KeySet::new(), &options), "<keyset>\n</keyset>\n");
    }

    #[test]
    fn test_returns_byte_count() {
        let options = StreamOptions::xml_export();
        let mut buffer = Vec::new();
        let written = keyset_to_stream(&xorg_keyset(), &mut buffer, &options).unwrap();
        assert_eq!(written, buffer.len());
    }
}
