/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use core::fmt;

/// Inserts `prefix` before the first byte written and after every `'\n'`.
///
/// State carries across writes, so a line break at the end of one write
/// prefixes the start of the next. Empty writes emit nothing.
///
/// ```
/// use core::fmt::Write;
/// use multi_err_tree::IndentWriter;
///
/// let mut out = String::new();
/// let mut indent = IndentWriter::new(&mut out, "* ");
/// indent.write_str("a\n").unwrap();
/// indent.write_str("b\nc").unwrap();
/// assert_eq!(out, "* a\n* b\n* c");
/// ```
#[derive(Debug)]
pub struct IndentWriter<'p, W> {
    inner: W,
    prefix: &'p str,
    pending_prefix: bool,
}

impl<'p, W> IndentWriter<'p, W> {
    pub fn new(inner: W, prefix: &'p str) -> Self {
        Self {
            inner,
            prefix,
            pending_prefix: true,
        }
    }

    pub fn prefix(&self) -> &'p str {
        self.prefix
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: fmt::Write> fmt::Write for IndentWriter<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for line in s.split_inclusive('\n') {
            if self.pending_prefix {
                self.inner.write_str(self.prefix)?;
            }
            self.inner.write_str(line)?;
            self.pending_prefix = line.ends_with('\n');
        }
        Ok(())
    }
}

/// Reports the input length as written; the prefix bytes are not counted.
#[cfg(feature = "std")]
impl<W: std::io::Write> std::io::Write for IndentWriter<'_, W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        for line in buf.split_inclusive(|b| *b == b'\n') {
            if self.pending_prefix {
                self.inner.write_all(self.prefix.as_bytes())?;
            }
            self.inner.write_all(line)?;
            self.pending_prefix = line.last() == Some(&b'\n');
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use core::fmt::Write;

    use super::*;

    #[test]
    fn write_nothing() {
        let mut out = String::new();
        let mut indent = IndentWriter::new(&mut out, "* ");
        indent.write_str("").unwrap();
        assert_eq!(out, "");
    }

    #[test]
    fn chunked_matches_whole() {
        let mut chunked = String::new();
        let mut indent = IndentWriter::new(&mut chunked, "* ");
        indent.write_str("a\n").unwrap();
        indent.write_str("b\n").unwrap();
        indent.write_str("c").unwrap();

        let mut whole = String::new();
        IndentWriter::new(&mut whole, "* ")
            .write_str("a\nb\nc")
            .unwrap();

        assert_eq!(chunked, "* a\n* b\n* c");
        assert_eq!(chunked, whole);
    }

    #[test]
    fn empty_lines() {
        let mut out = String::new();
        IndentWriter::new(&mut out, "> ")
            .write_str("\n\nx\n")
            .unwrap();
        assert_eq!(out, "> \n> \n> x\n");
    }

    #[test]
    fn split_mid_line() {
        let mut out = String::new();
        let mut indent = IndentWriter::new(&mut out, "│   ");
        indent.write_str("hel").unwrap();
        indent.write_str("lo\nwor").unwrap();
        indent.write_str("ld").unwrap();
        assert_eq!(out, "│   hello\n│   world");
    }

    #[test]
    fn nested_writers() {
        let mut out = String::new();
        let mut outer = IndentWriter::new(&mut out, "a ");
        IndentWriter::new(&mut outer, "b ")
            .write_str("x\ny\n")
            .unwrap();
        assert_eq!(out, "a b x\na b y\n");
    }

    #[cfg(feature = "std")]
    mod io {
        use alloc::{string::ToString, vec::Vec};
        use std::io::{self, Write};

        use super::super::IndentWriter;

        #[test]
        fn counts_input_bytes() {
            let mut out = Vec::new();
            let mut indent = IndentWriter::new(&mut out, "* ");
            assert_eq!(indent.write(b"a\nb").unwrap(), 3);
            assert_eq!(indent.write(b"").unwrap(), 0);
            assert_eq!(indent.write(b"\nc").unwrap(), 2);
            indent.flush().unwrap();
            assert_eq!(out, b"* a\n* b\n* c");
        }

        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("sink closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        #[test]
        fn propagates_failure() {
            let mut indent = IndentWriter::new(Broken, "* ");
            let err = indent.write(b"a").unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::Other);
            assert_eq!(err.to_string(), "sink closed");
        }
    }
}
