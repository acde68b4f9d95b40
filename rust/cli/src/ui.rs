//! UI helper functions for terminal output formatting.
//!
//! This module provides utility functions for consistent user interface output
//! across CLI commands, including error messages, warnings, and the prompt.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Print the action prompt without a trailing newline and flush it
pub fn prompt(out: &mut dyn Write, choices: &str) -> std::io::Result<()> {
    write!(out, "Enter action ({}): ", choices)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_and_warnings_are_prefixed() {
        let mut err = Vec::new();
        write_error(&mut err, "boom").unwrap();
        display_warning(&mut err, "careful").unwrap();
        let text = String::from_utf8(err).unwrap();
        assert_eq!(text, "Error: boom\nWARNING: careful\n");
    }

    #[test]
    fn prompt_has_no_newline() {
        let mut out = Vec::new();
        prompt(&mut out, "h/s/q").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Enter action (h/s/q): ");
    }
}
