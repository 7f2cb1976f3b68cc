use serde::{Deserialize, Serialize};

use crate::models::{AccionSection, AreaQuestions};

/// One section paired with its action context, positioned by a dense index
/// over the whole document. Produced by [`flatten`] for sequential consumers
/// (wizards, import tooling) that step through sections one at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatSection {
    pub section_index: usize,
    pub accion_id: String,
    pub objetivo_number: u32,
    pub accion_number: u32,
    pub objetivo_title: String,
    pub accion_description: String,
    pub section: AccionSection,
}

/// Linearizes a validated tree into document order: actions in order, and
/// within each action its sections in order. Stateless and total; no
/// reordering, filtering, or deduplication.
pub fn flatten(doc: &AreaQuestions) -> Vec<FlatSection> {
    let mut flattened = Vec::with_capacity(doc.total_sections);
    for accion in &doc.acciones {
        for section in &accion.sections {
            flattened.push(FlatSection {
                section_index: flattened.len(),
                accion_id: accion.id.clone(),
                objetivo_number: accion.objetivo_number,
                accion_number: accion.accion_number,
                objetivo_title: accion.objetivo_title.clone(),
                accion_description: accion.accion_description.clone(),
                section: section.clone(),
            });
        }
    }
    flattened
}
