use super::{parsing::compile_regex, Config, DiscoveryConfig, GroupingConfig};
use crate::cli::Cli;
use crate::derive::{BasenameStem, KeyDerivation, ParentDirName, Prefixed, RegexRewrite};
use anyhow::{anyhow, Result};
use std::path::PathBuf;

/// A fluent builder for [`Config`].
///
/// Mirrors the CLI options while also allowing programmatic use, including
/// supplying custom [`KeyDerivation`] objects directly.
///
/// # Examples
///
/// ```
/// use svgcombine::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .input_path("icons")
///     .out_dir("dist")
///     .skip_single(true)
///     .build()
///     .unwrap();
/// assert!(config.grouping.skip_single);
/// ```
#[derive(Default)]
pub struct ConfigBuilder {
    input_path: Option<PathBuf>,
    out_dir: Option<PathBuf>,
    no_recursive: bool,
    no_gitignore: bool,
    ignore_patterns: Option<Vec<String>>,
    skip_single: bool,
    name_regex: Option<String>,
    name_rewrite: Option<String>,
    name_prefix: Option<String>,
    class_prefix: Option<String>,
    derive_name: Option<Box<dyn KeyDerivation>>,
    derive_class: Option<Box<dyn KeyDerivation>>,
    dry_run: bool,
}

impl ConfigBuilder {
    /// Creates a builder with all options at their defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-populated from parsed CLI arguments.
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            input_path: Some(PathBuf::from(cli.input_path)),
            out_dir: Some(PathBuf::from(cli.out_dir)),
            no_recursive: cli.no_recursive,
            no_gitignore: cli.no_gitignore,
            ignore_patterns: cli.ignore_patterns,
            skip_single: cli.skip_single,
            name_regex: cli.name_regex,
            name_rewrite: cli.name_rewrite,
            name_prefix: cli.name_prefix,
            class_prefix: cli.class_prefix,
            derive_name: None,
            derive_class: None,
            dry_run: cli.dry_run,
        }
    }

    /// Sets the directory to discover SVG files under.
    pub fn input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = Some(path.into());
        self
    }

    /// Sets the directory merged documents are written into.
    pub fn out_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.out_dir = Some(path.into());
        self
    }

    /// Disables recursion into subdirectories.
    pub fn no_recursive(mut self, value: bool) -> Self {
        self.no_recursive = value;
        self
    }

    /// Disables `.gitignore` handling during discovery.
    pub fn no_gitignore(mut self, value: bool) -> Self {
        self.no_gitignore = value;
        self
    }

    /// Sets glob patterns for files/directories to skip during discovery.
    pub fn ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.ignore_patterns = Some(patterns);
        self
    }

    /// Passes single-variant groups through unmerged.
    pub fn skip_single(mut self, value: bool) -> Self {
        self.skip_single = value;
        self
    }

    /// Sets a regex applied to the derived icon name.
    pub fn name_regex(mut self, pattern: impl Into<String>) -> Self {
        self.name_regex = Some(pattern.into());
        self
    }

    /// Sets the replacement template used with [`Self::name_regex`].
    pub fn name_rewrite(mut self, template: impl Into<String>) -> Self {
        self.name_rewrite = Some(template.into());
        self
    }

    /// Sets a fixed prefix prepended to every derived icon name.
    pub fn name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.name_prefix = Some(prefix.into());
        self
    }

    /// Sets a fixed prefix prepended to every derived class label.
    pub fn class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Replaces the name derivation entirely with a custom one.
    ///
    /// Regex/prefix options still wrap the custom derivation.
    pub fn derive_name(mut self, derivation: Box<dyn KeyDerivation>) -> Self {
        self.derive_name = Some(derivation);
        self
    }

    /// Replaces the class derivation entirely with a custom one.
    pub fn derive_class(mut self, derivation: Box<dyn KeyDerivation>) -> Self {
        self.derive_class = Some(derivation);
        self
    }

    /// Enables dry-run mode: list outputs without writing them.
    pub fn dry_run(mut self, value: bool) -> Self {
        self.dry_run = value;
        self
    }

    /// Validates the collected options and produces a [`Config`].
    pub fn build(self) -> Result<Config> {
        if self.name_rewrite.is_some() && self.name_regex.is_none() {
            return Err(anyhow!(
                "Invalid configuration: --name-rewrite requires --name-regex"
            ));
        }

        let mut derive_name: Box<dyn KeyDerivation> =
            self.derive_name.unwrap_or_else(|| Box::new(BasenameStem));
        if let Some(pattern) = compile_regex(self.name_regex, "name")? {
            // Without an explicit template the first capture group is kept.
            let rewrite = self.name_rewrite.unwrap_or_else(|| "$1".to_string());
            derive_name = Box::new(RegexRewrite::new(
                derive_name,
                pattern,
                rewrite,
                self.name_prefix,
            ));
        } else if let Some(prefix) = self.name_prefix {
            derive_name = Box::new(Prefixed::new(derive_name, prefix));
        }

        let mut derive_class: Box<dyn KeyDerivation> =
            self.derive_class.unwrap_or_else(|| Box::new(ParentDirName));
        if let Some(prefix) = self.class_prefix {
            derive_class = Box::new(Prefixed::new(derive_class, prefix));
        }

        Ok(Config {
            input_path: self.input_path.unwrap_or_else(|| PathBuf::from(".")),
            discovery: DiscoveryConfig {
                recursive: !self.no_recursive,
                use_gitignore: !self.no_gitignore,
                ignore_patterns: self.ignore_patterns,
            },
            grouping: GroupingConfig {
                derive_name,
                derive_class,
                skip_single: self.skip_single,
            },
            out_dir: self.out_dir.unwrap_or_else(|| PathBuf::from(".")),
            dry_run: self.dry_run,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::Path;

    #[test]
    fn test_basic_config_creation() -> Result<()> {
        let cli = Cli::parse_from(["svgcombine", "icons", "-o", "dist"]);
        let config = ConfigBuilder::from_cli(cli).build()?;
        assert_eq!(config.input_path, PathBuf::from("icons"));
        assert_eq!(config.out_dir, PathBuf::from("dist"));
        assert!(config.discovery.recursive);
        assert!(config.discovery.use_gitignore);
        assert!(!config.grouping.skip_single);
        assert!(!config.dry_run);
        Ok(())
    }

    #[test]
    fn test_default_derivations() -> Result<()> {
        let config = ConfigBuilder::new().build()?;
        let path = Path::new("icons/medium/Checkmark_12@1x.svg");
        assert_eq!(config.grouping.derive_name.derive(path), "Checkmark_12@1x");
        assert_eq!(config.grouping.derive_class.derive(path), "medium");
        Ok(())
    }

    #[test]
    fn test_name_regex_and_prefixes() -> Result<()> {
        let config = ConfigBuilder::new()
            .name_regex(r"S_UI(.*?)_.*")
            .name_prefix("spectrum-css-icon-")
            .class_prefix("spectrum-UIIcon--")
            .build()?;
        let path = Path::new("test/medium/S_UICornerTriangle_5_N@1x.svg");
        assert_eq!(
            config.grouping.derive_name.derive(path),
            "spectrum-css-icon-CornerTriangle"
        );
        assert_eq!(
            config.grouping.derive_class.derive(path),
            "spectrum-UIIcon--medium"
        );
        Ok(())
    }

    #[test]
    fn test_name_rewrite_without_regex_is_rejected() {
        let result = ConfigBuilder::new().name_rewrite("$1").build();
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("requires --name-regex"));
    }

    #[test]
    fn test_skip_single_flag() -> Result<()> {
        let cli = Cli::parse_from(["svgcombine", ".", "--skip-single"]);
        let config = ConfigBuilder::from_cli(cli).build()?;
        assert!(config.grouping.skip_single);
        Ok(())
    }

    #[test]
    fn test_name_rewrite_requires_regex_clap() {
        // Caught by clap's `requires` attribute before the builder runs.
        let result = Cli::try_parse_from(["svgcombine", ".", "--name-rewrite", "$1"]);
        assert!(result.is_err());
        let error_message = result.unwrap_err().to_string();
        assert!(
            error_message.contains("--name-regex"),
            "Expected error message to mention '--name-regex', but got: {}",
            error_message
        );
    }
}
