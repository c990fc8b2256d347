//! Defines the core `Config` struct and related types for application configuration.
//!
//! This module consolidates all the settings parsed and validated from the CLI,
//! making them available to the rest of the pipeline in a structured and
//! type-safe manner.

use crate::derive::{BasenameStem, KeyDerivation, ParentDirName};
use std::fmt;
use std::path::PathBuf;

pub use builder::ConfigBuilder;
mod builder;
mod parsing;

/// Configuration options related to file discovery.
#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Whether to respect `.gitignore`, `.ignore`, and other VCS ignore files.
    pub use_gitignore: bool,
    /// List of glob patterns for files/directories to skip, provided via `--ignore`.
    pub ignore_patterns: Option<Vec<String>>,
}

/// Configuration options for the grouping/combining stage.
#[derive(Clone)]
pub struct GroupingConfig {
    /// Derives the icon name (the grouping key) from a file path.
    pub derive_name: Box<dyn KeyDerivation>,
    /// Derives the variant class label from a file path.
    pub derive_class: Box<dyn KeyDerivation>,
    /// When `true`, groups holding a single variant pass their original
    /// content through unmerged instead of running the combiner.
    pub skip_single: bool,
}

// Custom Debug implementation, as the derivation objects only expose a name.
impl fmt::Debug for GroupingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupingConfig")
            .field("derive_name", &self.derive_name)
            .field("derive_class", &self.derive_class)
            .field("skip_single", &self.skip_single)
            .finish()
    }
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            derive_name: Box::new(BasenameStem),
            derive_class: Box::new(ParentDirName),
            skip_single: false,
        }
    }
}

/// The resolved application configuration.
///
/// This struct holds all the settings parsed and validated from the CLI,
/// ready to be used by the core logic (discovery, grouping, output).
#[derive(Debug, Clone)]
pub struct Config {
    /// The directory (or single file) to discover SVG files under.
    pub input_path: PathBuf,
    /// Configuration for the discovery stage.
    pub discovery: DiscoveryConfig,
    /// Configuration for the grouping stage.
    pub grouping: GroupingConfig,
    /// The directory merged SVG documents are written into.
    pub out_dir: PathBuf,
    /// If `true`, list the files that would be written without writing them.
    pub dry_run: bool,
}

impl Config {
    /// Creates a default `Config` for testing purposes.
    ///
    /// This function is hidden from public documentation and is intended for
    /// use in tests and doc tests only.
    #[doc(hidden)]
    pub fn new_for_test() -> Self {
        Self {
            input_path: PathBuf::from("."),
            discovery: DiscoveryConfig {
                recursive: true,
                use_gitignore: true,
                ignore_patterns: None,
            },
            grouping: GroupingConfig::default(),
            out_dir: PathBuf::from("."),
            dry_run: false,
        }
    }
}
