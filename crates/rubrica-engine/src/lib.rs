//! Core engine for parsing transformation-assessment rubric documents.
//!
//! An area document encodes a hierarchy of objectives → actions → evaluation
//! dimensions → questions and maturity levels in an informal, hand-authored
//! format. [`parsing::parse`] reconstructs it as a strict, validated
//! [`AreaQuestions`] tree; [`flatten::flatten`] linearizes the tree for
//! sequential consumers; [`rows::rubric_rows`] projects it onto the flat row
//! contract used by import tooling.

pub mod flatten;
pub mod io;
pub mod models;
pub mod parsing;
pub mod rows;

// Re-export key types for easier usage
pub use flatten::{FlatSection, flatten};
pub use models::{Accion, AccionSection, AreaQuestions, Level, LevelOption, SectionType};
pub use parsing::{
    AreaRegistry, ExpectedStructure, ParseError, builtin_registry, parse, parse_with_registry,
};
pub use rows::{RubricRow, rubric_rows};
