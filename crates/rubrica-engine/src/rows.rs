use serde::{Deserialize, Serialize};

use crate::models::{AreaQuestions, LevelOption, SectionType};

/// One persisted rubric row as the import tooling stores it: keyed by
/// `(area, objetivo, accion, dimension)` and carrying the dimension's level
/// descriptors and question list. Only dimension sections become rows; the
/// `accion` question blocks are interview material, not rubric entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RubricRow {
    pub area: String,
    pub objetivo_number: u32,
    pub accion_number: u32,
    pub dimension: SectionType,
    pub objetivo_title: String,
    pub accion_description: String,
    pub questions: Vec<String>,
    pub levels: Vec<LevelOption>,
}

/// Projects a validated tree onto the flat row contract, document order
/// preserved.
pub fn rubric_rows(doc: &AreaQuestions) -> Vec<RubricRow> {
    let mut rows = Vec::new();
    for accion in &doc.acciones {
        for section in &accion.sections {
            if !section.section_type.is_dimension() {
                continue;
            }
            rows.push(RubricRow {
                area: doc.area.clone(),
                objetivo_number: accion.objetivo_number,
                accion_number: accion.accion_number,
                dimension: section.section_type,
                objetivo_title: accion.objetivo_title.clone(),
                accion_description: accion.accion_description.clone(),
                questions: section.questions.clone(),
                levels: section.levels.clone(),
            });
        }
    }
    rows
}
