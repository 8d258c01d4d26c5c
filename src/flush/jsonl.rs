use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::model::{HistorySample, Snapshot};

/// Write an iterator of serializable items to a JSONL file (one JSON object per line).
fn write_jsonl<T: Serialize>(path: &Path, items: impl Iterator<Item = T>) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for item in items {
        serde_json::to_writer(&mut writer, &item)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Write the counter time series to `<output_dir>/history.jsonl`, one
/// sample per line, for an external plotter. Creates the directory if needed
/// and returns the file path.
pub fn flush_history_to_jsonl(history: &[HistorySample], output_dir: &Path) -> io::Result<PathBuf> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join("history.jsonl");
    write_jsonl(&path, history.iter())?;
    Ok(path)
}

/// Write render snapshots to `path`, one frame per line.
pub fn write_snapshots_jsonl<'a>(
    path: &Path,
    frames: impl IntoIterator<Item = &'a Snapshot>,
) -> io::Result<()> {
    write_jsonl(path, frames.into_iter())
}
