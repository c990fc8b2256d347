// src/output/dry_run.rs

use crate::core_types::FileRecord;
use crate::errors::{io_error_with_path, Result};
use log::debug;
use std::io::Write;
use std::path::Path;

/// Writes the output for a dry run (-D).
///
/// This function lists the destination paths that would be written, in the
/// order of the provided slice, without writing anything.
pub fn write_dry_run_output(
    writer: &mut dyn Write,
    records: &[FileRecord],
    out_dir: &Path,
) -> Result<()> {
    debug!("Executing dry run output...");
    let mut emit = || -> std::io::Result<()> {
        writeln!(writer, "\n--- Dry Run: Files that would be written ---")?;
        for record in records {
            writeln!(writer, "- {}", out_dir.join(record.relative_path()).display())?;
        }
        writeln!(writer, "--- End Dry Run ---")?;
        writer.flush()
    };
    emit().map_err(|e| io_error_with_path(e, out_dir))
}
