use serde::{Deserialize, Serialize};
use std::fmt;

use super::level::LevelOption;

/// The kind of a section within an action: the action's own open-question
/// block, or one of the three evaluation dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionType {
    Accion,
    Cobertura,
    Frecuencia,
    Profundidad,
}

impl SectionType {
    pub const DIMENSIONS: [SectionType; 3] = [
        SectionType::Cobertura,
        SectionType::Frecuencia,
        SectionType::Profundidad,
    ];

    /// Stable wire name, matching the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            SectionType::Accion => "accion",
            SectionType::Cobertura => "cobertura",
            SectionType::Frecuencia => "frecuencia",
            SectionType::Profundidad => "profundidad",
        }
    }

    /// Whether this section type carries maturity-level descriptors.
    pub fn is_dimension(self) -> bool {
        self != SectionType::Accion
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the four sub-blocks belonging to an action.
///
/// `levels` is populated only for dimension sections; for the `accion`
/// section it stays empty and is omitted from serialized output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccionSection {
    #[serde(rename = "type")]
    pub section_type: SectionType,
    pub questions: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub levels: Vec<LevelOption>,
}
