use serde::{Deserialize, Serialize};

use super::section::AccionSection;

/// One evaluable unit within an objective, decomposed into exactly four
/// sections once validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accion {
    /// Derived key, unique within a document: `objetivo{N}_accion{M}`.
    pub id: String,
    pub objetivo_number: u32,
    pub accion_number: u32,
    pub objetivo_title: String,
    pub accion_description: String,
    pub sections: Vec<AccionSection>,
}

impl Accion {
    /// The derived key for an (objective, action) number pair.
    pub fn derive_id(objetivo_number: u32, accion_number: u32) -> String {
        format!("objetivo{objetivo_number}_accion{accion_number}")
    }
}

/// Whole-document parse result. Constructed only by the parser and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaQuestions {
    pub area: String,
    pub acciones: Vec<Accion>,
    /// Sum of section counts over all actions; `4 × acciones.len()` in any
    /// validated result.
    pub total_sections: usize,
}
