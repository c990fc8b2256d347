//! Merging variant SVG documents into one multi-variant document.
//!
//! The [`Combiner`] trait is the seam between the grouping core and the
//! markup-level merge; [`MarkupCombiner`] is the built-in implementation.
//! Callers with their own merge format can substitute any other
//! implementation.

use crate::errors::{Error, Result};
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};
use std::collections::BTreeMap;
use std::io::Cursor;

/// The SVG namespace declared on every combined root element.
const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Merges an icon name and a class-to-markup mapping into one document.
///
/// Implementations are synchronous and side-effect-free. The variant map is
/// ordered, so a given input always produces the same output.
pub trait Combiner: Send + Sync {
    /// Produces the merged markup for the icon `name` from its variants.
    fn combine(&self, name: &str, variants: &BTreeMap<String, String>) -> Result<String>;
}

/// The built-in markup combiner.
///
/// Emits a single `<svg>` document containing one `<g>` per variant, in
/// ascending class order. Each `<g>` carries `class="{name} {class}"` plus
/// the variant root's own attributes (minus namespace declarations and any
/// original `class`), and wraps the variant's child markup verbatim.
#[derive(Debug, Clone, Default)]
pub struct MarkupCombiner;

impl Combiner for MarkupCombiner {
    fn combine(&self, name: &str, variants: &BTreeMap<String, String>) -> Result<String> {
        let mut writer = Writer::new(Cursor::new(Vec::new()));

        let mut root = BytesStart::new("svg");
        root.push_attribute(("xmlns", SVG_NS));
        writer
            .write_event(Event::Start(root))
            .map_err(|e| combine_error(name, e))?;

        for (class, markup) in variants {
            write_variant(&mut writer, name, class, markup)?;
        }

        writer
            .write_event(Event::End(BytesEnd::new("svg")))
            .map_err(|e| combine_error(name, e))?;

        String::from_utf8(writer.into_inner().into_inner())
            .map_err(|e| combine_error(name, e))
    }
}

fn combine_error(name: &str, source: impl std::error::Error + Send + Sync + 'static) -> Error {
    Error::Combine {
        name: name.to_string(),
        source: Box::new(source),
    }
}

/// Writes one variant as a `<g>` wrapper into `writer`.
///
/// The variant's root `<svg>` element is located first; everything before it
/// (XML declaration, doctype, comments) is dropped. Its children are then
/// streamed through unchanged until the matching close tag.
fn write_variant(
    writer: &mut Writer<Cursor<Vec<u8>>>,
    name: &str,
    class: &str,
    markup: &str,
) -> Result<()> {
    let mut reader = Reader::from_str(markup);
    let mut depth = 0usize;
    let mut in_root = false;

    loop {
        let event = reader.read_event().map_err(|e| combine_error(name, e))?;
        match event {
            Event::Start(elem) if !in_root => {
                if elem.name().as_ref() != b"svg" {
                    return Err(combine_error(
                        name,
                        std::io::Error::new(
                            std::io::ErrorKind::InvalidData,
                            format!("variant '{class}' does not start with an <svg> element"),
                        ),
                    ));
                }
                let group = variant_group(name, class, &elem).map_err(|e| combine_error(name, e))?;
                writer
                    .write_event(Event::Start(group))
                    .map_err(|e| combine_error(name, e))?;
                in_root = true;
                depth = 1;
            }
            Event::Empty(elem) if !in_root => {
                // A childless root like <svg .../> yields an empty wrapper.
                let group = variant_group(name, class, &elem).map_err(|e| combine_error(name, e))?;
                writer
                    .write_event(Event::Empty(group))
                    .map_err(|e| combine_error(name, e))?;
                return Ok(());
            }
            Event::Start(elem) => {
                depth += 1;
                writer
                    .write_event(Event::Start(elem))
                    .map_err(|e| combine_error(name, e))?;
            }
            Event::End(elem) if in_root => {
                depth -= 1;
                if depth == 0 {
                    writer
                        .write_event(Event::End(BytesEnd::new("g")))
                        .map_err(|e| combine_error(name, e))?;
                    return Ok(());
                }
                writer
                    .write_event(Event::End(elem))
                    .map_err(|e| combine_error(name, e))?;
            }
            Event::Eof => {
                if in_root {
                    return Err(combine_error(
                        name,
                        std::io::Error::new(
                            std::io::ErrorKind::UnexpectedEof,
                            format!("variant '{class}' has an unclosed <svg> element"),
                        ),
                    ));
                }
                // Nothing but prologue: emit an empty wrapper.
                let group = empty_group(name, class);
                writer
                    .write_event(Event::Empty(group))
                    .map_err(|e| combine_error(name, e))?;
                return Ok(());
            }
            other if in_root => {
                writer
                    .write_event(other)
                    .map_err(|e| combine_error(name, e))?;
            }
            _ => { /* prologue before the root element, dropped */ }
        }
    }
}

/// Builds the `<g>` wrapper for a variant, carrying over the variant root's
/// attributes except namespace declarations and its original `class`.
fn variant_group<'a>(
    name: &str,
    class: &str,
    root: &'a BytesStart<'a>,
) -> std::result::Result<BytesStart<'a>, quick_xml::events::attributes::AttrError> {
    let mut group = empty_group(name, class);
    for attr in root.attributes().with_checks(false) {
        let attr = attr?;
        let key = attr.key.as_ref();
        if key == b"xmlns" || key.starts_with(b"xmlns:") || key == b"class" {
            continue;
        }
        // Raw byte pairs keep the source's own escaping intact.
        group.push_attribute((key, attr.value.as_ref()));
    }
    Ok(group)
}

fn empty_group(name: &str, class: &str) -> BytesStart<'static> {
    let classes = format!("{name} {class}");
    let mut group = BytesStart::new("g");
    group.push_attribute(("class", classes.as_str()));
    group.into_owned()
}
