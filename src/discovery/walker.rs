use crate::config::DiscoveryConfig;
use glob::Pattern;
use ignore::WalkBuilder;
use log::debug;
use std::path::Path;

/// Configures and builds the parallel walker based on `DiscoveryConfig`.
pub(super) fn build_walker(input_path: &Path, config: &DiscoveryConfig) -> ignore::WalkParallel {
    let mut walker_builder = WalkBuilder::new(input_path);

    if config.use_gitignore {
        walker_builder.standard_filters(true);
        debug!("Configuring WalkBuilder: standard_filters enabled.");
    } else {
        walker_builder.standard_filters(false);
        debug!("Configuring WalkBuilder: standard_filters disabled (gitignore usage off).");
    }
    // Ensure .gitignore files are processed even if the tree is not a full
    // git repository (e.g. in test environments).
    walker_builder.require_git(false);

    if !config.recursive {
        // Max depth 1 means only the immediate children of the input path.
        // If the input path is a file, the walker yields just that file.
        walker_builder.max_depth(Some(1));
        debug!("Recursion disabled (max depth: 1).");
    }

    // --- Add custom filter ONLY if custom ignore patterns are provided ---
    if let Some(ignore_patterns) = &config.ignore_patterns {
        let custom_ignore_globs: Vec<Pattern> = ignore_patterns
            .iter()
            .filter_map(|p| match Pattern::new(p) {
                Ok(glob) => {
                    debug!("Compiled custom ignore glob: {}", p);
                    Some(glob)
                }
                Err(e) => {
                    log::warn!("Invalid ignore glob pattern '{}': {}", p, e);
                    None // Skip invalid patterns
                }
            })
            .collect();

        if !custom_ignore_globs.is_empty() {
            let input_path = input_path.to_path_buf();
            walker_builder.filter_entry(move |entry| {
                // Match globs against the path relative to the input path,
                // falling back to the full path if stripping fails.
                let path = entry.path();
                let candidate = path.strip_prefix(&input_path).unwrap_or(path);
                if custom_ignore_globs
                    .iter()
                    .any(|glob| glob.matches_path(candidate))
                {
                    debug!("Skipping {:?}: matches custom ignore glob", path);
                    return false;
                }
                true
            });
        }
    }

    walker_builder.build_parallel()
}
