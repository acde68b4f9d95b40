//! Input helpers for the interactive table.

use std::io::BufRead;

/// Reads a line of input from a buffered reader, blocking until available.
///
/// Whitespace is trimmed. Returns `None` on EOF or a read error, which the
/// play loop treats the same as quitting.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// # use twentyone_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new(b"  hit \n");
/// assert_eq!(read_stdin_line(&mut input), Some("hit".to_string()));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}
