//! Defines core data structures used throughout the application pipeline.
//!
//! A [`FileRecord`] is the unit flowing through the pipeline: discovery
//! produces one per source file, the grouper consumes them, and one merged
//! record per icon comes back out.

use std::path::{Path, PathBuf};

/// The content carried by a [`FileRecord`].
///
/// Discovery yields `Buffer` for readable files and `Empty` for zero-length
/// ones. `Stream` models content that is not fully materialized in memory
/// (e.g. a record handed over by a pipeline that reads lazily); the grouper
/// rejects it per record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Contents {
    /// No content. Such records are silently dropped by the grouper.
    #[default]
    Empty,
    /// Fully buffered raw bytes.
    Buffer(Vec<u8>),
    /// Content is being streamed and is not available as a buffer.
    Stream,
}

impl Contents {
    /// Returns `true` if there is no content at all.
    pub fn is_empty(&self) -> bool {
        matches!(self, Contents::Empty)
    }

    /// Returns `true` if the content is streamed rather than buffered.
    pub fn is_stream(&self) -> bool {
        matches!(self, Contents::Stream)
    }

    /// The buffered bytes, if the content is buffered.
    pub fn as_buffer(&self) -> Option<&[u8]> {
        match self {
            Contents::Buffer(bytes) => Some(bytes),
            _ => None,
        }
    }
}

/// A single file flowing through the pipeline.
///
/// # Examples
///
/// ```
/// use svgcombine::core_types::{Contents, FileRecord};
/// use std::path::PathBuf;
///
/// let record = FileRecord {
///     path: PathBuf::from("icons/medium/arrow.svg"),
///     base: PathBuf::from("icons"),
///     contents: Contents::Buffer(b"<svg/>".to_vec()),
/// };
///
/// assert_eq!(record.file_name(), Some("arrow.svg"));
/// assert!(!record.contents.is_stream());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FileRecord {
    /// The full path of the file.
    pub path: PathBuf,
    /// The base directory the file was discovered under. Merged output
    /// records are addressed relative to the base of their representative
    /// input record.
    pub base: PathBuf,
    /// The record's content.
    pub contents: Contents,
}

impl FileRecord {
    /// Creates a record with buffered content.
    pub fn buffered(path: impl Into<PathBuf>, base: impl Into<PathBuf>, bytes: Vec<u8>) -> Self {
        Self {
            path: path.into(),
            base: base.into(),
            contents: Contents::Buffer(bytes),
        }
    }

    /// Clones this record's path metadata, discarding its content.
    ///
    /// This is how merged output records are derived from a representative
    /// input record before their combined content is attached.
    pub fn clone_without_contents(&self) -> Self {
        Self {
            path: self.path.clone(),
            base: self.base.clone(),
            contents: Contents::Empty,
        }
    }

    /// The final component of the record's path, if it is valid UTF-8.
    pub fn file_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|n| n.to_str())
    }

    /// The record's path relative to its base, falling back to the file
    /// name when the path does not live under the base.
    pub fn relative_path(&self) -> &Path {
        self.path
            .strip_prefix(&self.base)
            .unwrap_or_else(|_| Path::new(self.path.file_name().unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_without_contents_discards_buffer() {
        let record = FileRecord::buffered("icons/a.svg", "icons", b"<svg/>".to_vec());
        let clone = record.clone_without_contents();
        assert_eq!(clone.path, record.path);
        assert_eq!(clone.base, record.base);
        assert!(clone.contents.is_empty());
    }

    #[test]
    fn test_relative_path_strips_base() {
        let record = FileRecord::buffered("icons/medium/a.svg", "icons", Vec::new());
        assert_eq!(record.relative_path(), Path::new("medium/a.svg"));
    }

    #[test]
    fn test_relative_path_falls_back_to_file_name() {
        let record = FileRecord::buffered("elsewhere/a.svg", "icons", Vec::new());
        assert_eq!(record.relative_path(), Path::new("a.svg"));
    }
}
