//! Blocking line input for the interactive loop.

use std::io::{self, BufRead};

/// Result of one blocking read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// User submitted a full line (terminator stripped).
    Line(String),
    /// End-of-file (`Ctrl-D` / closed stdin).
    Eof,
}

/// Read one line, stripping only the trailing `\n` or `\r\n`.
///
/// Invalid UTF-8 is replaced with `U+FFFD` instead of failing the read.
pub fn read_line<R: BufRead + ?Sized>(input: &mut R) -> io::Result<ReadOutcome> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(ReadOutcome::Eof);
    }
    let mut line = String::from_utf8_lossy(&buf).into_owned();
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(ReadOutcome::Line(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_lines_until_eof() {
        let mut input = Cursor::new("add\r\n  buy milk \nlast");
        assert_eq!(read_line(&mut input).unwrap(), ReadOutcome::Line("add".into()));
        assert_eq!(
            read_line(&mut input).unwrap(),
            ReadOutcome::Line("  buy milk ".into())
        );
        assert_eq!(read_line(&mut input).unwrap(), ReadOutcome::Line("last".into()));
        assert_eq!(read_line(&mut input).unwrap(), ReadOutcome::Eof);
    }

    #[test]
    fn empty_line_is_not_eof() {
        let mut input = Cursor::new("\n");
        assert_eq!(read_line(&mut input).unwrap(), ReadOutcome::Line(String::new()));
        assert_eq!(read_line(&mut input).unwrap(), ReadOutcome::Eof);
    }

    #[test]
    fn invalid_utf8_is_replaced_not_an_error() {
        let mut input = Cursor::new(b"caf\xe9\r\nok\n".to_vec());
        assert_eq!(
            read_line(&mut input).unwrap(),
            ReadOutcome::Line("caf\u{fffd}".into())
        );
        assert_eq!(read_line(&mut input).unwrap(), ReadOutcome::Line("ok".into()));
        assert_eq!(read_line(&mut input).unwrap(), ReadOutcome::Eof);
    }
}
