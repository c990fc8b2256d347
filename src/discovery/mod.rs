//! Discovers SVG files and reads them into [`FileRecord`]s.
//!
//! The walk runs in parallel using the `ignore` crate's walker; records are
//! funneled back over a channel and sorted by path so a run is
//! deterministic. Per-entry failures are logged and skipped, the walk
//! continues.

use crate::config::DiscoveryConfig;
use crate::core_types::{Contents, FileRecord};
use crate::errors::{io_error_with_path, Result};
use crossbeam_channel::unbounded;
use ignore::{DirEntry, WalkState};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

mod walker;

use walker::build_walker;

/// Walks `input_path` and returns one record per SVG file found.
///
/// Contents are read eagerly on the walker threads: zero-length files yield
/// records with [`Contents::Empty`] (which the grouper later drops), all
/// others buffered bytes. The records' base is the input directory itself,
/// or the containing directory when the input is a single file.
pub fn discover_records(input_path: &Path, config: &DiscoveryConfig) -> Result<Vec<FileRecord>> {
    let base: PathBuf = if input_path.is_file() {
        input_path.parent().unwrap_or(Path::new("")).to_path_buf()
    } else {
        input_path.to_path_buf()
    };

    let walker = build_walker(input_path, config);
    let (tx, rx) = unbounded();

    walker.run(move || {
        // This factory closure is called once per walker thread.
        let tx = tx.clone();
        let base = base.clone();

        Box::new(move |entry_result| {
            let entry = match entry_result {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("Skipping unreadable entry: {}", e);
                    return WalkState::Continue;
                }
            };
            match read_entry(&entry, &base) {
                Ok(Some(record)) => {
                    if tx.send(record).is_err() {
                        log::error!("Receiver dropped, quitting discovery walk.");
                        return WalkState::Quit;
                    }
                }
                Ok(None) => { /* Entry was filtered out, do nothing */ }
                Err(e) => {
                    log::warn!("{}", e);
                }
            }
            WalkState::Continue
        })
    });

    let mut records: Vec<FileRecord> = rx.iter().collect();
    // Walker thread scheduling is nondeterministic; pin the record order.
    records.sort_by(|a, b| a.path.cmp(&b.path));

    debug!("Discovery complete. SVG files: {}", records.len());
    Ok(records)
}

/// Turns one walked entry into a record, or `None` when it is not an SVG file.
fn read_entry(entry: &DirEntry, base: &Path) -> Result<Option<FileRecord>> {
    if !entry.file_type().is_some_and(|ft| ft.is_file()) {
        return Ok(None);
    }
    let path = entry.path();
    let is_svg = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
    if !is_svg {
        return Ok(None);
    }

    let bytes = fs::read(path).map_err(|e| io_error_with_path(e, path))?;
    let contents = if bytes.is_empty() {
        Contents::Empty
    } else {
        Contents::Buffer(bytes)
    };
    Ok(Some(FileRecord {
        path: path.to_path_buf(),
        base: base.to_path_buf(),
        contents,
    }))
}
