// LogSift - platform/fs.rs
//
// Blocking file reading helpers.

use std::io;
use std::path::Path;

/// Trailing characters dropped from every line: Unicode whitespace plus the
/// ASCII file/group/record/unit separators (`\x1c`..=`\x1f`).
fn is_line_padding(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Read every line of a UTF-8 text file with trailing whitespace removed.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. Trailing whitespace goes;
/// leading and inner whitespace is kept. The whole file is read before
/// returning and the handle is closed on every exit path.
///
/// Invalid UTF-8 surfaces as `io::ErrorKind::InvalidData`.
pub fn read_trimmed_lines(path: &Path) -> io::Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    let normalised = content.replace("\r\n", "\n").replace('\r', "\n");

    Ok(normalised
        .lines()
        .map(|line| line.trim_end_matches(is_line_padding).to_string())
        .collect())
}
