use std::{fs::File, io::BufWriter, io::Write, path::Path};

use serde::Serialize;
use tracing::info;

use crate::Result;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// A single pretty-printed array.
    #[default]
    Json,
    /// One compact record per line.
    JsonLines,
}

/// Writes `records` to `path`, replacing whatever was there. Non-ASCII text
/// is written as-is.
pub fn write_results<T: Serialize>(records: &[T], path: &Path, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let mut out = BufWriter::new(File::create(path)?);
            serde_json::to_writer_pretty(&mut out, records)?;
            out.write_all(b"\n")?;
            out.flush()?;
        }
        OutputFormat::JsonLines => serde_jsonlines::write_json_lines(path, records)?,
    }

    info!(records = records.len(), path = %path.display(), ?format, "wrote results");
    Ok(())
}
