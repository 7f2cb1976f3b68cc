//! # Area Document Parsing
//!
//! Two-phase parsing of hand-authored rubric documents.
//!
//! 1. **Line classification** (`classify`): each line is trimmed (tabs and
//!    spaces are both accepted and ignored) and classified into a
//!    [`LineClass`] from its local shape alone, first match wins in header
//!    priority order.
//! 2. **Tree construction** (`builder`): a [`RubricBuilder`] consumes the
//!    classified lines, accumulating questions and level descriptors and
//!    flushing buffered sections/actions at every boundary.
//!
//! The assembled tree is then checked against the area's registered expected
//! structure (`registry`, `validate`) and only a fully valid
//! [`AreaQuestions`] is returned. A malformed document never produces a
//! partial result: downstream consumers index sections positionally, so a
//! truncated tree would misalign everything after the gap.

pub mod builder;
pub mod classify;
pub mod registry;
pub mod validate;

use thiserror::Error;

pub use builder::RubricBuilder;
pub use classify::{LineClass, classify};
pub use registry::{AreaRegistry, ExpectedStructure, builtin_registry};

use crate::models::AreaQuestions;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Caller/configuration mismatch, raised before any line is scanned.
    #[error("unknown area '{area}', expected one of: {known}")]
    UnknownArea { area: String, known: String },

    #[error(
        "validation failed for area '{area}': expected {expected} acciones, found {found} \
         (distribution by objetivo: {distribution})"
    )]
    AccionCount {
        area: String,
        expected: usize,
        found: usize,
        distribution: String,
    },

    #[error("validation failed for area '{area}': {count} acciones without 4 sections: {details}")]
    SectionShape {
        area: String,
        count: usize,
        details: String,
    },

    #[error(
        "validation failed for area '{area}': expected {expected} total sections, found {found}"
    )]
    SectionTotal {
        area: String,
        expected: usize,
        found: usize,
    },
}

/// Parses an area document against the builtin area registry.
///
/// Pure function of `(content, area)`: no I/O, no shared state, safe to call
/// concurrently.
pub fn parse(content: &str, area: &str) -> Result<AreaQuestions, ParseError> {
    parse_with_registry(content, area, builtin_registry())
}

/// Parses an area document against a caller-supplied registry.
pub fn parse_with_registry(
    content: &str,
    area: &str,
    registry: &AreaRegistry,
) -> Result<AreaQuestions, ParseError> {
    let expected = registry.get(area).ok_or_else(|| ParseError::UnknownArea {
        area: area.to_string(),
        known: registry.known_areas().join(", "),
    })?;

    let mut builder = RubricBuilder::new();
    for line in content.lines() {
        builder.push(classify(line.trim()));
    }
    let acciones = builder.finish();

    validate::check(area, expected, &acciones)?;

    let total_sections = acciones.iter().map(|accion| accion.sections.len()).sum();
    Ok(AreaQuestions {
        area: area.to_string(),
        acciones,
        total_sections,
    })
}
