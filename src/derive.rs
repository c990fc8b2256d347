//! Derivation of grouping keys from file paths.
//!
//! Every input file is classified by two derived strings: an icon *name*
//! (the logical icon, shared by all of its variants) and a variant *class*
//! (the size/density rendition). Both are computed from the file's path by
//! a [`KeyDerivation`], held as a trait object in the configuration so the
//! policy is swappable.

use dyn_clone::DynClone;
use regex::Regex;
use std::fmt;
use std::path::Path;

/// A pure path-to-string derivation.
///
/// Implementations must be deterministic: repeated calls on the same path
/// yield the same key.
pub trait KeyDerivation: Send + Sync + DynClone {
    /// Derives a grouping key from the given path.
    fn derive(&self, path: &Path) -> String;
    /// Returns a descriptive name for the derivation.
    fn name(&self) -> &'static str;
}

dyn_clone::clone_trait_object!(KeyDerivation);

// Implement Debug manually for Box<dyn KeyDerivation> by using the name method.
impl fmt::Debug for Box<dyn KeyDerivation> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("KeyDerivation").field(&self.name()).finish()
    }
}

// --- Derivation Implementations ---

/// Derives the filename without its extension (the default *name* policy).
#[derive(Debug, Clone)]
pub struct BasenameStem;

impl KeyDerivation for BasenameStem {
    fn derive(&self, path: &Path) -> String {
        path.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
    fn name(&self) -> &'static str {
        "BasenameStem"
    }
}

/// Derives the last path segment of the containing directory (the default
/// *class* policy).
#[derive(Debug, Clone)]
pub struct ParentDirName;

impl KeyDerivation for ParentDirName {
    fn derive(&self, path: &Path) -> String {
        path.parent()
            .and_then(Path::file_name)
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
    fn name(&self) -> &'static str {
        "ParentDirName"
    }
}

/// Wraps another derivation with a regex rewrite and an optional prefix.
///
/// The wrapped derivation's output is run through `Regex::replace` with the
/// given template, then the prefix (if any) is prepended. This mirrors the
/// common icon-workshop convention of extracting a display name out of an
/// export filename such as `S_UICheckboxCheckmark_12_N@1x.svg`.
#[derive(Debug, Clone)]
pub struct RegexRewrite {
    inner: Box<dyn KeyDerivation>,
    pattern: Regex,
    rewrite: String,
    prefix: Option<String>,
}

impl RegexRewrite {
    /// Creates a rewrite around `inner`, replacing the first `pattern`
    /// match with `rewrite` and prepending `prefix` when given.
    pub fn new(
        inner: Box<dyn KeyDerivation>,
        pattern: Regex,
        rewrite: impl Into<String>,
        prefix: Option<String>,
    ) -> Self {
        Self {
            inner,
            pattern,
            rewrite: rewrite.into(),
            prefix,
        }
    }
}

impl KeyDerivation for RegexRewrite {
    fn derive(&self, path: &Path) -> String {
        let raw = self.inner.derive(path);
        let rewritten = self.pattern.replace(&raw, self.rewrite.as_str());
        match &self.prefix {
            Some(prefix) => format!("{prefix}{rewritten}"),
            None => rewritten.into_owned(),
        }
    }
    fn name(&self) -> &'static str {
        "RegexRewrite"
    }
}

/// Prepends a fixed prefix to another derivation's output.
#[derive(Debug, Clone)]
pub struct Prefixed {
    inner: Box<dyn KeyDerivation>,
    prefix: String,
}

impl Prefixed {
    /// Creates a derivation that yields `prefix` + `inner`'s key.
    pub fn new(inner: Box<dyn KeyDerivation>, prefix: impl Into<String>) -> Self {
        Self {
            inner,
            prefix: prefix.into(),
        }
    }
}

impl KeyDerivation for Prefixed {
    fn derive(&self, path: &Path) -> String {
        format!("{}{}", self.prefix, self.inner.derive(path))
    }
    fn name(&self) -> &'static str {
        "Prefixed"
    }
}
