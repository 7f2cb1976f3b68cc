use tracing::debug;

use super::classify::LineClass;
use crate::models::{Accion, AccionSection, Level, LevelOption, SectionType};

/// Phase 2 of parsing: consumes classified lines and assembles the action
/// tree, flushing buffered state at each section/action boundary.
///
/// All scratch state lives here and dies with the builder; `finish` performs
/// the final end-of-document flush.
#[derive(Debug, Default)]
pub struct RubricBuilder {
    objetivo_number: u32,
    objetivo_title: String,
    accion_number: u32,
    accion_description: String,
    section_type: Option<SectionType>,
    questions: Vec<String>,
    levels: Vec<LevelOption>,
    sections: Vec<AccionSection>,
    acciones: Vec<Accion>,
    in_preguntas_abiertas: bool,
    in_autoevaluacion: bool,
}

impl RubricBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, class: LineClass) {
        match class {
            LineClass::Objetivo { number, title } => {
                self.flush_section_if_content();
                self.flush_accion();
                self.reset_accion_scratch();
                self.objetivo_number = number;
                self.objetivo_title = title;
            }
            LineClass::Accion {
                number,
                description,
            } => {
                self.flush_section_if_content();
                self.flush_accion();
                self.reset_accion_scratch();
                self.accion_number = number;
                self.accion_description = description;
            }
            LineClass::Dimension(section_type) => {
                // Unlike the objective/action boundaries, a dimension header
                // closes whatever section is open even if it is still empty.
                self.flush_section();
                self.section_type = Some(section_type);
                self.questions.clear();
                self.levels.clear();
                self.in_preguntas_abiertas = false;
                self.in_autoevaluacion = false;
            }
            LineClass::PreguntasAbiertas { inline } => {
                // A PREGUNTAS ABIERTAS after a dimension's self-assessment
                // belongs to the next section, so the dimension closes here.
                if self.in_autoevaluacion
                    && self.section_type.is_some_and(SectionType::is_dimension)
                {
                    self.flush_section();
                }
                // Right after an ACCIÓN header this block is the action's own
                // question section.
                if self.section_type.is_none() && !self.accion_description.is_empty() {
                    self.section_type = Some(SectionType::Accion);
                    self.questions.clear();
                    self.levels.clear();
                }
                self.in_preguntas_abiertas = true;
                self.in_autoevaluacion = false;
                if let Some(text) = inline {
                    self.push_question(&text);
                }
            }
            LineClass::Autoevaluacion => {
                // The upcoming level descriptors belong to the next dimension
                // section, so an open accion question block closes now.
                if self.section_type == Some(SectionType::Accion) && !self.questions.is_empty() {
                    self.flush_section();
                }
                self.in_preguntas_abiertas = false;
                self.in_autoevaluacion = true;
            }
            LineClass::Text(text) => {
                if self.in_preguntas_abiertas {
                    self.push_question(&text);
                } else if self.in_autoevaluacion {
                    if let Some((level, description)) = Level::parse_descriptor(&text) {
                        self.levels.push(LevelOption::new(level, description));
                    }
                }
                // Outside both modes, stray text is tolerated and dropped.
            }
            LineClass::Blank | LineClass::Ignored => {}
        }
    }

    /// End-of-document flush; returns the assembled actions in document order.
    pub fn finish(mut self) -> Vec<Accion> {
        self.flush_section_if_content();
        self.flush_accion();
        self.acciones
    }

    /// Normalizes a question line to `¿{text}?` regardless of the punctuation
    /// the source carried. Empty remainders are dropped.
    fn push_question(&mut self, raw: &str) {
        let text = raw.strip_prefix('¿').unwrap_or(raw);
        let text = text.strip_suffix('?').unwrap_or(text).trim();
        if !text.is_empty() {
            self.questions.push(format!("¿{text}?"));
        }
    }

    /// Closes the open section unconditionally.
    fn flush_section(&mut self) {
        if let Some(section_type) = self.section_type.take() {
            self.sections.push(AccionSection {
                section_type,
                questions: std::mem::take(&mut self.questions),
                levels: std::mem::take(&mut self.levels),
            });
        }
    }

    /// Closes the open section only if it accumulated any content. An empty
    /// section buffer at an objective/action boundary is discarded with the
    /// rest of the scratch state.
    fn flush_section_if_content(&mut self) {
        if !self.questions.is_empty() || !self.levels.is_empty() {
            self.flush_section();
        }
    }

    /// Appends the in-flight action if it has a description and at least one
    /// section.
    fn flush_accion(&mut self) {
        if self.accion_description.is_empty() || self.sections.is_empty() {
            return;
        }
        let accion = Accion {
            id: Accion::derive_id(self.objetivo_number, self.accion_number),
            objetivo_number: self.objetivo_number,
            accion_number: self.accion_number,
            objetivo_title: self.objetivo_title.clone(),
            accion_description: std::mem::take(&mut self.accion_description),
            sections: std::mem::take(&mut self.sections),
        };
        debug!(id = %accion.id, sections = accion.sections.len(), "accion flushed");
        self.acciones.push(accion);
    }

    fn reset_accion_scratch(&mut self) {
        self.accion_number = 0;
        self.accion_description.clear();
        self.section_type = None;
        self.questions.clear();
        self.levels.clear();
        self.sections.clear();
        self.in_preguntas_abiertas = false;
        self.in_autoevaluacion = false;
    }
}
