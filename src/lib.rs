//! `svgcombine` is a library and command-line tool that merges per-variant
//! SVG icon files into single multi-variant SVG documents.
//!
//! Icon sets are commonly authored as one file per rendering variant, laid
//! out as `<class>/<name>.svg` (e.g. `medium/checkmark.svg` and
//! `large/checkmark.svg`). `svgcombine` derives an icon *name* and a
//! variant *class* from each file's path, groups all files sharing a name,
//! and emits one SVG per icon containing every variant keyed by its class.
//!
//! As a library, it provides a modular three-stage pipeline:
//! 1.  **Discover**: find the SVG files under an input directory and read
//!     them into [`FileRecord`]s.
//! 2.  **Combine**: group records by derived (name, class) and merge each
//!     group into one record.
//! 3.  **Write**: place the merged documents in an output directory.
//!
//! This design allows programmatic use of its components, such as feeding
//! the grouper records from another source or substituting a custom
//! [`Combiner`].
//!
//! # Example: Library Usage
//!
//! ```
//! use svgcombine::{combine_records, discover, write_output, ConfigBuilder, MarkupCombiner};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! // 1. Set up a directory with two variants of the same icon.
//! let temp_dir = tempdir().unwrap();
//! fs::create_dir_all(temp_dir.path().join("medium")).unwrap();
//! fs::create_dir_all(temp_dir.path().join("large")).unwrap();
//! fs::write(
//!     temp_dir.path().join("medium/checkmark.svg"),
//!     r#"<svg viewBox="0 0 12 12"><path d="M0 0"/></svg>"#,
//! )
//! .unwrap();
//! fs::write(
//!     temp_dir.path().join("large/checkmark.svg"),
//!     r#"<svg viewBox="0 0 16 16"><path d="M1 1"/></svg>"#,
//! )
//! .unwrap();
//!
//! // 2. Create a Config programmatically using the builder.
//! let out_dir = temp_dir.path().join("dist");
//! let config = ConfigBuilder::new()
//!     .input_path(temp_dir.path())
//!     .out_dir(&out_dir)
//!     .build()
//!     .unwrap();
//!
//! // 3. Execute the pipeline stage by stage.
//! let records = discover(&config).unwrap();
//! let merged = combine_records(&records, &config.grouping, &MarkupCombiner).unwrap();
//! write_output(&merged, &config).unwrap();
//!
//! // Both variants ended up in one document.
//! let combined = fs::read_to_string(out_dir.join("checkmark.svg")).unwrap();
//! assert!(combined.contains(r#"<g class="checkmark medium""#));
//! assert!(combined.contains(r#"<g class="checkmark large""#));
//! ```

// Make modules public if they contain public types used in the API
pub mod cli;
pub mod combine;
pub mod config;
pub mod core_types;
pub mod derive;
pub mod discovery;
pub mod errors;
pub mod grouper;
pub mod output;

// Re-export key public types for easier use as a library
pub use combine::{Combiner, MarkupCombiner};
pub use config::{Config, ConfigBuilder};
pub use core_types::{Contents, FileRecord};
pub use grouper::IconGrouper;

use crate::config::GroupingConfig;
use crate::errors::{Error, Result};
use std::io;

/// Discovers SVG files based on the provided configuration.
///
/// This is the first stage of the pipeline. It walks the filesystem
/// according to the rules in the `Config` (respecting .gitignore, ignore
/// globs, recursion) and returns the matching files as [`FileRecord`]s with
/// their contents read, sorted by path.
pub fn discover(config: &Config) -> Result<Vec<FileRecord>> {
    discovery::discover_records(&config.input_path, &config.discovery)
}

/// Groups records by derived (name, class) and merges each group.
///
/// This is the second stage of the pipeline. Records without content are
/// dropped silently; records with streamed content are dropped with a
/// warning (their rejection does not abort the run). Returns one merged
/// record per distinct icon name, or an empty vector when no record carried
/// content.
///
/// # Errors
/// Propagates combiner failures. The per-record
/// [`UnsupportedMode`](Error::UnsupportedMode) rejection is reported via the
/// log and never aborts the run; drive [`IconGrouper`] directly to observe
/// it per record.
pub fn combine_records(
    records: &[FileRecord],
    grouping: &GroupingConfig,
    combiner: &dyn Combiner,
) -> Result<Vec<FileRecord>> {
    let mut grouper = IconGrouper::new(grouping);
    for record in records {
        match grouper.accept(record) {
            Ok(()) => {}
            Err(e @ Error::UnsupportedMode) => {
                log::warn!("Skipping '{}': {}", record.path.display(), e);
            }
            Err(e) => return Err(e),
        }
    }
    grouper.finish(combiner)
}

/// Writes the merged records into the configured output directory.
///
/// This is the final stage of the pipeline for a normal run.
pub fn write_output(records: &[FileRecord], config: &Config) -> Result<()> {
    output::write_output(records, &config.out_dir)
}

/// Executes the complete pipeline: discover, combine, and write.
///
/// This is the primary entry point for running the tool's logic
/// programmatically in a way that mirrors the command-line execution. For
/// more granular control, use the individual [`discover`],
/// [`combine_records`], and [`write_output`] functions directly, as shown in
/// the crate-level documentation example.
///
/// # Errors
/// Returns [`Error::NoIconsFound`] if no merged record came out of the
/// combine stage. Other errors are propagated from the underlying stages.
pub fn run(config: &Config) -> Result<()> {
    let records = discover(config)?;
    let merged = combine_records(&records, &config.grouping, &MarkupCombiner)?;

    if merged.is_empty() {
        return Err(Error::NoIconsFound);
    }

    if config.dry_run {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        output::write_dry_run_output(&mut lock, &merged, &config.out_dir)
    } else {
        write_output(&merged, config)
    }
}
