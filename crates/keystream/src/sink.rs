//! Byte-counting sink adapter

use std::io::{self, Write};

/// Wraps a borrowed sink and counts the bytes accepted by it
pub(crate) struct CountingSink<'a, W: Write + ?Sized> {
    inner: &'a mut W,
    written: usize,
}

impl<'a, W: Write + ?Sized> CountingSink<'a, W> {
    pub(crate) fn new(inner: &'a mut W) -> Self {
        Self { inner, written: 0 }
    }

    /// Bytes accepted so far
    pub(crate) fn written(&self) -> usize {
        self.written
    }

    /// Write `text` unless the output is condensed
    pub(crate) fn cosmetic(&mut self, condensed: bool, text: &[u8]) -> io::Result<()> {
        if condensed {
            Ok(())
        } else {
            self.write_all(text)
        }
    }
}

impl<W: Write + ?Sized> Write for CountingSink<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.written += n;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_formatted_writes() {
        let mut buffer = Vec::new();
        let mut sink = CountingSink::new(&mut buffer);
        write!(sink, "<key name=\"{}\"", "a").unwrap();
        sink.cosmetic(true, b"\n\n").unwrap();
        sink.cosmetic(false, b"/>").unwrap();
        assert_eq!(sink.written(), 15);
        assert_eq!(buffer, b"<key name=\"a\"/>");
    }
}
