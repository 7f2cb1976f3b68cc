use std::collections::BTreeMap;
use tracing::warn;

use super::ParseError;
use super::registry::ExpectedStructure;
use crate::models::{Accion, Level};

/// Every validated action carries its question block plus the three
/// dimensions.
pub const SECTIONS_PER_ACCION: usize = 4;

/// Whole-document structural validation, run after assembly. Fail-fast: the
/// first violated check aborts the parse; no partial result escapes.
pub fn check(
    area: &str,
    expected: &ExpectedStructure,
    acciones: &[Accion],
) -> Result<(), ParseError> {
    let distribution = objetivo_distribution(acciones);

    if acciones.len() != expected.total_acciones {
        return Err(ParseError::AccionCount {
            area: area.to_string(),
            expected: expected.total_acciones,
            found: acciones.len(),
            distribution: format_distribution(&distribution),
        });
    }

    let malformed: Vec<String> = acciones
        .iter()
        .filter(|accion| accion.sections.len() != SECTIONS_PER_ACCION)
        .map(|accion| {
            let types: Vec<&str> = accion
                .sections
                .iter()
                .map(|section| section.section_type.name())
                .collect();
            format!(
                "{}: {} sections ({})",
                accion.id,
                accion.sections.len(),
                types.join(", ")
            )
        })
        .collect();
    if !malformed.is_empty() {
        return Err(ParseError::SectionShape {
            area: area.to_string(),
            count: malformed.len(),
            details: malformed.join("; "),
        });
    }

    let found_sections: usize = acciones.iter().map(|accion| accion.sections.len()).sum();
    let expected_sections = expected.total_acciones * SECTIONS_PER_ACCION;
    if found_sections != expected_sections {
        return Err(ParseError::SectionTotal {
            area: area.to_string(),
            expected: expected_sections,
            found: found_sections,
        });
    }

    // Auxiliary diagnostics, not gates: the import format has always been
    // lenient about these, so they surface as warnings only.
    for (objetivo, expected_count) in &expected.distribution {
        let found = distribution.get(objetivo).copied().unwrap_or(0);
        if found != *expected_count {
            warn!(
                area,
                objetivo,
                expected = expected_count,
                found,
                "objetivo action count drifts from the registered distribution"
            );
        }
    }
    for objetivo in distribution.keys() {
        if !expected.distribution.contains_key(objetivo) {
            warn!(area, objetivo, "objetivo not present in the registered distribution");
        }
    }
    for accion in acciones {
        for section in &accion.sections {
            if section.section_type.is_dimension() && section.levels.len() != Level::ALL.len() {
                warn!(
                    area,
                    accion = %accion.id,
                    section = %section.section_type,
                    levels = section.levels.len(),
                    "dimension section does not carry all four maturity levels"
                );
            }
        }
    }

    Ok(())
}

/// Actual action count per objective, in objective order.
pub fn objetivo_distribution(acciones: &[Accion]) -> BTreeMap<u32, usize> {
    let mut distribution = BTreeMap::new();
    for accion in acciones {
        *distribution.entry(accion.objetivo_number).or_insert(0) += 1;
    }
    distribution
}

fn format_distribution(distribution: &BTreeMap<u32, usize>) -> String {
    let entries: Vec<String> = distribution
        .iter()
        .map(|(objetivo, count)| format!("{objetivo}: {count}"))
        .collect();
    format!("{{{}}}", entries.join(", "))
}
