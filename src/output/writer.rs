// src/output/writer.rs

//! Writes merged SVG documents into the output directory.

use crate::core_types::FileRecord;
use crate::errors::{io_error_with_path, Result};
use log::info;
use std::fs;
use std::path::Path;

/// Writes each merged record to `out_dir`, creating it if needed.
///
/// The destination is `out_dir` joined with the record's path relative to
/// its base (for merged records, the `<name>.svg` file name). If two records
/// resolve to the same destination the later write wins; upstream grouping
/// iterates names in sorted order, so the outcome is deterministic.
pub fn write_output(records: &[FileRecord], out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir).map_err(|e| io_error_with_path(e, out_dir))?;

    for record in records {
        let target = out_dir.join(record.relative_path());
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| io_error_with_path(e, parent))?;
        }
        let bytes = record.contents.as_buffer().unwrap_or_default();
        fs::write(&target, bytes).map_err(|e| io_error_with_path(e, &target))?;
        info!("Wrote {}", target.display());
    }

    Ok(())
}
