//! Result writer - point-list serialization
//!
//! Writes one `[ <size>, <duration> ],` fragment per line. The file as a
//! whole is deliberately NOT valid JSON: every line keeps its trailing
//! comma and there are no enclosing brackets. The plotting setup consuming
//! these files pastes them into an array literal, so "fixing" the format
//! here would break it. Wrap in `[ ... ]` and strip the last comma if a
//! real JSON document is ever needed.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::runner::Sample;
use crate::Result;

/// Write `samples` to `path`, one fragment line per sample, in order.
///
/// Creates or truncates the file. The buffer is explicitly flushed before
/// returning, so a successful return means every line reached the OS.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if the file cannot be created
/// or any write fails; the file is left in whatever truncated state the
/// failed write produced.
pub fn write_points(path: impl AsRef<Path>, samples: &[Sample]) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for sample in samples {
        writeln!(writer, "{sample}")?;
    }
    writer.flush()?;
    Ok(())
}
