// LogSift - core/export.rs
//
// Writes the distinct line set to the output file, one line per entry.
//
// The output file is truncated and rewritten in place. There is no
// temp-file-and-rename step, so an interrupted write leaves a partial file.

use crate::core::model::LineSet;
use crate::util::error::ExportError;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write each line followed by `\n` to `writer`.
///
/// An empty set writes nothing. Returns the number of lines written.
pub fn write_lines<W: Write>(lines: &LineSet, mut writer: W) -> io::Result<usize> {
    let mut count = 0;
    for line in lines {
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}

/// Create (or truncate) `path` and write `lines` into it.
pub fn write_output_file(path: &Path, lines: &LineSet) -> Result<usize, ExportError> {
    let to_export_err = |source: io::Error| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = std::fs::File::create(path).map_err(to_export_err)?;
    let count = write_lines(lines, BufWriter::new(file)).map_err(to_export_err)?;

    tracing::debug!(path = %path.display(), lines = count, "Output written");
    Ok(count)
}
