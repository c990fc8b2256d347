// src/config/parsing.rs

use anyhow::{Context, Result};
use regex::Regex;

/// Compiles an optional pattern string into a `Regex`.
pub(super) fn compile_regex(pattern: Option<String>, name: &str) -> Result<Option<Regex>> {
    pattern
        .map(|p| Regex::new(&p).with_context(|| format!("Invalid {} regex: '{}'", name, p)))
        .transpose()
}
