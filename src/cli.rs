// src/cli.rs

use clap::Parser;

/// Combines per-variant SVG icon files into multi-variant SVG documents.
///
/// svgcombine walks a directory of individually-authored SVG icons, derives an
/// icon name and a variant class label from each file's path (by default the
/// filename without extension and the containing directory name), and merges
/// all files sharing a name into one SVG document containing every variant,
/// keyed by its class. One file goes out per distinct icon name.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the directory (or single file) containing SVG icon variants.
    #[arg(default_value = ".")]
    pub input_path: String,

    /// Directory to write the combined SVG documents into.
    #[arg(short = 'o', long, value_name = "DIR", default_value = ".")]
    pub out_dir: String,

    // --- Grouping Options ---
    /// Emit single-variant icons with their original content, unmerged.
    #[arg(short = 's', long, action = clap::ArgAction::SetTrue)]
    pub skip_single: bool,

    /// Rewrite the derived icon name with this regex (see --name-rewrite).
    #[arg(long, value_name = "REGEX")]
    pub name_regex: Option<String>,

    /// Replacement template for --name-regex matches (defaults to "$1").
    #[arg(long, value_name = "TEMPLATE", requires = "name_regex")]
    pub name_rewrite: Option<String>,

    /// Prepend this prefix to every derived icon name.
    #[arg(long, value_name = "PREFIX")]
    pub name_prefix: Option<String>,

    /// Prepend this prefix to every derived variant class label.
    #[arg(long, value_name = "PREFIX")]
    pub class_prefix: Option<String>,

    // --- Discovery Options ---
    /// Do not recurse into subdirectories.
    #[arg(short = 'n', long, action = clap::ArgAction::SetTrue)]
    pub no_recursive: bool,

    /// Ignore files/directories matching these glob patterns (relative to the
    /// input path, repeatable).
    #[arg(short = 'i', long = "ignore", value_name = "GLOB", num_args = 1..)]
    pub ignore_patterns: Option<Vec<String>>,

    /// Do not respect .gitignore, .ignore, or other VCS ignore files.
    #[arg(short = 't', long, action = clap::ArgAction::SetTrue)]
    pub no_gitignore: bool,

    // --- Execution Control ---
    /// Perform a dry run. Print the files that would be written but do not write them.
    #[arg(short = 'D', long, action = clap::ArgAction::SetTrue)]
    pub dry_run: bool,
}
