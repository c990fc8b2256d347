//! The accumulation/flush core of the pipeline.
//!
//! An [`IconGrouper`] is fed one [`FileRecord`] per input file via
//! [`IconGrouper::accept`] and, once the input is exhausted, drained via
//! [`IconGrouper::finish`], which emits one merged record per distinct icon
//! name. `finish` consumes the grouper, so an instance can never be reused
//! for a second run.

use crate::combine::Combiner;
use crate::config::GroupingConfig;
use crate::core_types::{Contents, FileRecord};
use crate::errors::{Error, Result};
use log::debug;
use std::collections::BTreeMap;

/// All variants collected so far for one icon name.
struct IconGroup {
    /// Variant markup keyed by class label. A later record with the same
    /// class overwrites the earlier content.
    variants: BTreeMap<String, String>,
    /// The most recently accepted record for this name. It supplies the
    /// path metadata of the merged output record.
    representative: FileRecord,
}

/// Groups per-variant records by derived (name, class) and merges each group
/// into a single output record on completion.
pub struct IconGrouper<'a> {
    config: &'a GroupingConfig,
    groups: BTreeMap<String, IconGroup>,
    accepted_any: bool,
}

impl<'a> IconGrouper<'a> {
    /// Creates an empty grouper for one run.
    pub fn new(config: &'a GroupingConfig) -> Self {
        Self {
            config,
            groups: BTreeMap::new(),
            accepted_any: false,
        }
    }

    /// Accepts one input record.
    ///
    /// Records without content are silently dropped. Streamed records are
    /// rejected with [`Error::UnsupportedMode`] without touching grouper
    /// state; the caller reports the error and keeps feeding records.
    pub fn accept(&mut self, record: &FileRecord) -> Result<()> {
        let bytes = match &record.contents {
            Contents::Empty => {
                debug!("Skipping record without content: {}", record.path.display());
                return Ok(());
            }
            Contents::Stream => return Err(Error::UnsupportedMode),
            Contents::Buffer(bytes) => bytes,
        };

        let name = self.config.derive_name.derive(&record.path);
        let class = self.config.derive_class.derive(&record.path);
        debug!(
            "Accepted '{}' as icon '{}', class '{}'",
            record.path.display(),
            name,
            class
        );

        let markup = String::from_utf8_lossy(bytes).into_owned();
        self.groups
            .entry(name)
            .and_modify(|group| {
                group.representative = record.clone();
            })
            .or_insert_with(|| IconGroup {
                variants: BTreeMap::new(),
                representative: record.clone(),
            })
            .variants
            .insert(class, markup);
        self.accepted_any = true;

        Ok(())
    }

    /// Drains all groups, emitting one merged record per distinct icon name.
    ///
    /// If no record was ever accepted, no records are emitted. Output paths
    /// are `<representative base>/<name>.svg`. With `skip_single` enabled,
    /// a lone-variant group bypasses the combiner and passes its original
    /// content through verbatim; otherwise the combiner is invoked, even for
    /// a solo variant. A combiner failure propagates.
    pub fn finish(self, combiner: &dyn Combiner) -> Result<Vec<FileRecord>> {
        if !self.accepted_any {
            return Ok(Vec::new());
        }

        let mut merged_records = Vec::with_capacity(self.groups.len());
        for (name, group) in self.groups {
            let variant_count = group.variants.len();
            let mut merged = group.representative.clone_without_contents();
            merged.path = group.representative.base.join(format!("{name}.svg"));

            if self.config.skip_single && variant_count < 2 {
                merged.contents = group.representative.contents.clone();
            } else {
                let markup = combiner.combine(&name, &group.variants)?;
                merged.contents = Contents::Buffer(markup.into_bytes());
            }

            debug!(
                "Merged {} variant(s) of icon '{}' into {}",
                variant_count,
                name,
                merged.path.display()
            );
            merged_records.push(merged);
        }

        Ok(merged_records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GroupingConfig;
    use std::path::PathBuf;

    /// Deterministic stand-in combiner that records how it was called.
    struct StubCombiner;

    impl Combiner for StubCombiner {
        fn combine(&self, name: &str, variants: &BTreeMap<String, String>) -> Result<String> {
            let parts: Vec<String> = variants
                .iter()
                .map(|(class, markup)| format!("{class}={markup}"))
                .collect();
            Ok(format!("combined[{name}|{}]", parts.join(",")))
        }
    }

    fn record(path: &str, base: &str, content: &str) -> FileRecord {
        FileRecord::buffered(path, base, content.as_bytes().to_vec())
    }

    fn streamed(path: &str, base: &str) -> FileRecord {
        FileRecord {
            path: PathBuf::from(path),
            base: PathBuf::from(base),
            contents: Contents::Stream,
        }
    }

    #[test]
    fn test_two_classes_one_output() -> Result<()> {
        let config = GroupingConfig::default();
        let mut grouper = IconGrouper::new(&config);
        grouper.accept(&record("icons/medium/Checkmark_12@1x.svg", "icons", "<svg>m</svg>"))?;
        grouper.accept(&record("icons/large/Checkmark_12@1x.svg", "icons", "<svg>l</svg>"))?;

        let out = grouper.finish(&StubCombiner)?;
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].path, PathBuf::from("icons/Checkmark_12@1x.svg"));
        assert_eq!(
            out[0].contents.as_buffer(),
            Some("combined[Checkmark_12@1x|large=<svg>l</svg>,medium=<svg>m</svg>]".as_bytes())
        );
        Ok(())
    }

    #[test]
    fn test_input_order_does_not_change_output() -> Result<()> {
        let config = GroupingConfig::default();
        let a = record("icons/medium/arrow.svg", "icons", "<svg>m</svg>");
        let b = record("icons/large/arrow.svg", "icons", "<svg>l</svg>");

        let mut forward = IconGrouper::new(&config);
        forward.accept(&a)?;
        forward.accept(&b)?;
        let mut reverse = IconGrouper::new(&config);
        reverse.accept(&b)?;
        reverse.accept(&a)?;

        let forward_out = forward.finish(&StubCombiner)?;
        let reverse_out = reverse.finish(&StubCombiner)?;
        assert_eq!(
            forward_out[0].contents.as_buffer(),
            reverse_out[0].contents.as_buffer()
        );
        Ok(())
    }

    #[test]
    fn test_solo_variant_still_runs_combiner_by_default() -> Result<()> {
        let config = GroupingConfig::default();
        let mut grouper = IconGrouper::new(&config);
        grouper.accept(&record("icons/medium/arrow.svg", "icons", "<svg>m</svg>"))?;

        let out = grouper.finish(&StubCombiner)?;
        assert_eq!(out.len(), 1);
        assert_eq!(
            out[0].contents.as_buffer(),
            Some("combined[arrow|medium=<svg>m</svg>]".as_bytes())
        );
        Ok(())
    }

    #[test]
    fn test_skip_single_passes_original_bytes_through() -> Result<()> {
        let config = GroupingConfig {
            skip_single: true,
            ..GroupingConfig::default()
        };
        let mut grouper = IconGrouper::new(&config);
        grouper.accept(&record("icons/medium/arrow.svg", "icons", "<svg>m</svg>"))?;

        let out = grouper.finish(&StubCombiner)?;
        assert_eq!(out.len(), 1);
        // Byte-for-byte the input, with no combiner wrapping.
        assert_eq!(out[0].contents.as_buffer(), Some("<svg>m</svg>".as_bytes()));
        Ok(())
    }

    #[test]
    fn test_skip_single_does_not_apply_to_two_variants() -> Result<()> {
        let config = GroupingConfig {
            skip_single: true,
            ..GroupingConfig::default()
        };
        let mut grouper = IconGrouper::new(&config);
        grouper.accept(&record("icons/medium/arrow.svg", "icons", "<svg>m</svg>"))?;
        grouper.accept(&record("icons/large/arrow.svg", "icons", "<svg>l</svg>"))?;

        let out = grouper.finish(&StubCombiner)?;
        assert_eq!(out.len(), 1);
        assert_eq!(
            out[0].contents.as_buffer(),
            Some("combined[arrow|large=<svg>l</svg>,medium=<svg>m</svg>]".as_bytes())
        );
        Ok(())
    }

    #[test]
    fn test_later_record_with_same_class_overwrites_content() -> Result<()> {
        let config = GroupingConfig::default();
        let mut grouper = IconGrouper::new(&config);
        grouper.accept(&record("icons/medium/arrow.svg", "icons", "<svg>old</svg>"))?;
        grouper.accept(&record("icons/medium/arrow.svg", "icons", "<svg>new</svg>"))?;

        let out = grouper.finish(&StubCombiner)?;
        assert_eq!(
            out[0].contents.as_buffer(),
            Some("combined[arrow|medium=<svg>new</svg>]".as_bytes())
        );
        Ok(())
    }

    #[test]
    fn test_last_record_wins_output_base() -> Result<()> {
        // Easily mis-implemented as first-wins; the output path must come
        // from the most recently accepted record for the name.
        let config = GroupingConfig::default();
        let mut grouper = IconGrouper::new(&config);
        grouper.accept(&record("first/medium/arrow.svg", "first", "<svg>m</svg>"))?;
        grouper.accept(&record("second/large/arrow.svg", "second", "<svg>l</svg>"))?;

        let out = grouper.finish(&StubCombiner)?;
        assert_eq!(out[0].path, PathBuf::from("second/arrow.svg"));
        assert_eq!(out[0].base, PathBuf::from("second"));
        Ok(())
    }

    #[test]
    fn test_empty_record_is_dropped_without_error() -> Result<()> {
        let config = GroupingConfig::default();
        let mut grouper = IconGrouper::new(&config);
        let empty = FileRecord {
            path: PathBuf::from("icons/medium/arrow.svg"),
            base: PathBuf::from("icons"),
            contents: Contents::Empty,
        };
        grouper.accept(&empty)?;

        assert!(grouper.finish(&StubCombiner)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_streamed_record_is_rejected_and_run_continues() -> Result<()> {
        let config = GroupingConfig::default();
        let mut grouper = IconGrouper::new(&config);

        let err = grouper
            .accept(&streamed("icons/medium/arrow.svg", "icons"))
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedMode));
        assert_eq!(err.to_string(), "Streaming not supported");

        // The offending record left no trace; later records still group.
        grouper.accept(&record("icons/large/arrow.svg", "icons", "<svg>l</svg>"))?;
        let out = grouper.finish(&StubCombiner)?;
        assert_eq!(out.len(), 1);
        assert_eq!(
            out[0].contents.as_buffer(),
            Some("combined[arrow|large=<svg>l</svg>]".as_bytes())
        );
        Ok(())
    }

    #[test]
    fn test_only_streamed_input_emits_nothing() -> Result<()> {
        let config = GroupingConfig::default();
        let mut grouper = IconGrouper::new(&config);
        assert!(grouper.accept(&streamed("icons/medium/arrow.svg", "icons")).is_err());
        assert!(grouper.finish(&StubCombiner)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_no_records_no_output() -> Result<()> {
        let config = GroupingConfig::default();
        let grouper = IconGrouper::new(&config);
        assert!(grouper.finish(&StubCombiner)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_distinct_names_emit_independent_records() -> Result<()> {
        let config = GroupingConfig::default();
        let mut grouper = IconGrouper::new(&config);
        grouper.accept(&record("icons/medium/arrow.svg", "icons", "<svg>a</svg>"))?;
        grouper.accept(&record("icons/medium/star.svg", "icons", "<svg>s</svg>"))?;

        let out = grouper.finish(&StubCombiner)?;
        assert_eq!(out.len(), 2);
        let paths: Vec<_> = out.iter().map(|r| r.path.clone()).collect();
        assert!(paths.contains(&PathBuf::from("icons/arrow.svg")));
        assert!(paths.contains(&PathBuf::from("icons/star.svg")));
        Ok(())
    }
}
