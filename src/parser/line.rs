//! Line classification and permissive line reading
//!
//! IGC files are read one physical line at a time. `\n`, `\r\n` and a bare
//! `\r` all end a line. Bytes that are not valid UTF-8 are replaced with
//! U+FFFD rather than failing the parse.

use std::io::{self, BufRead};

/// IGC record kinds the parser cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// `H` record: file header
    Header,
    /// `B` record: position fix
    Fix,
    /// Any other record type (A, C, E, F, G, I, J, K, L, ...) or blank line
    Other,
}

/// Classify an already trimmed line by its leading record-type character
pub fn classify_line(line: &str) -> RecordKind {
    match line.as_bytes().first() {
        Some(b'H') => RecordKind::Header,
        Some(b'B') => RecordKind::Fix,
        _ => RecordKind::Other,
    }
}

/// Iterator over trimmed, lossily decoded lines of a buffered reader.
///
/// Only the current line is held in memory.
pub struct IgcLines<R> {
    reader: R,
    buf: Vec<u8>,
    // Previous line ended with `\r`; a leading `\n` belongs to it
    skip_lf: bool,
}

impl<R: BufRead> IgcLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            skip_lf: false,
        }
    }

    /// Read the next line into `buf` without its terminator.
    ///
    /// Returns the number of bytes consumed for this line, 0 at end of input.
    fn read_line_bytes(&mut self) -> io::Result<usize> {
        let mut consumed = 0;
        loop {
            let available = match self.reader.fill_buf() {
                Ok(available) => available,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if available.is_empty() {
                return Ok(consumed);
            }

            if self.skip_lf {
                self.skip_lf = false;
                if available[0] == b'\n' {
                    self.reader.consume(1);
                    continue;
                }
            }

            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(end) => {
                    self.skip_lf = available[end] == b'\r';
                    self.buf.extend_from_slice(&available[..end]);
                    self.reader.consume(end + 1);
                    return Ok(consumed + end + 1);
                }
                None => {
                    let len = available.len();
                    self.buf.extend_from_slice(available);
                    self.reader.consume(len);
                    consumed += len;
                }
            }
        }
    }
}

impl<R: BufRead> Iterator for IgcLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.read_line_bytes() {
            Ok(0) => None,
            Ok(_) => Some(Ok(String::from_utf8_lossy(&self.buf).trim().to_string())),
            Err(e) => Some(Err(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_line() {
        assert_eq!(classify_line("HFPLTPILOT:Jane"), RecordKind::Header);
        assert_eq!(classify_line("B0830004740123N00832456EA0123401300"), RecordKind::Fix);
        assert_eq!(classify_line("AXCT12345"), RecordKind::Other);
        assert_eq!(classify_line("G1234ABCD"), RecordKind::Other);
        assert_eq!(classify_line(""), RecordKind::Other);
    }

    #[test]
    fn test_classify_is_case_sensitive() {
        assert_eq!(classify_line("hfpltpilot:jane"), RecordKind::Other);
        assert_eq!(classify_line("b083000"), RecordKind::Other);
    }

    #[test]
    fn test_lines_are_trimmed() {
        let data: &[u8] = b"  HFPLTPILOT:Jane  \r\nB083000\r\n\n";
        let lines: Vec<String> = IgcLines::new(data).map(|l| l.unwrap()).collect();
        assert_eq!(lines, vec!["HFPLTPILOT:Jane", "B083000", ""]);
    }

    #[test]
    fn test_last_line_without_newline() {
        let data: &[u8] = b"AXCT\nB094515";
        let lines: Vec<String> = IgcLines::new(data).map(|l| l.unwrap()).collect();
        assert_eq!(lines, vec!["AXCT", "B094515"]);
    }

    #[test]
    fn test_bare_carriage_return_ends_line() {
        let data: &[u8] = b"HFPLTPILOT:Jane\rB083000\r";
        let lines: Vec<String> = IgcLines::new(data).map(|l| l.unwrap()).collect();
        assert_eq!(lines, vec!["HFPLTPILOT:Jane", "B083000"]);
    }

    #[test]
    fn test_crlf_is_one_terminator_across_buffer_refills() {
        // Capacity 4 splits "\r\n" pairs across fill_buf calls
        let data: &[u8] = b"AXC\r\nHFDTE010125\r\n\r\nB083000\rB094515";
        let reader = io::BufReader::with_capacity(4, data);
        let lines: Vec<String> = IgcLines::new(reader).map(|l| l.unwrap()).collect();
        assert_eq!(lines, vec!["AXC", "HFDTE010125", "", "B083000", "B094515"]);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let data: &[u8] = b"HFPLTPILOT:J\xffrg\nB083000\n";
        let lines: Vec<String> = IgcLines::new(data).map(|l| l.unwrap()).collect();
        assert_eq!(lines[0], "HFPLTPILOT:J\u{FFFD}rg");
        assert_eq!(lines[1], "B083000");
    }
}
