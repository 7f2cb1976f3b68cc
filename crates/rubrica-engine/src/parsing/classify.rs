use regex::Regex;
use std::sync::OnceLock;

use crate::models::SectionType;

/// Classification of a single trimmed line containing only local facts.
///
/// This is phase 1 of parsing: each line is classified independently, without
/// reference to the surrounding document state. What a `Text` line means (open
/// question, level descriptor, or nothing) is decided by the builder from the
/// block it currently has open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// Whitespace-only line.
    Blank,
    /// `OBJETIVO {n}: {title}`
    Objetivo { number: u32, title: String },
    /// `ACCIÓN {m}: {description}`, keyword matched case-insensitively.
    Accion { number: u32, description: String },
    /// `COBERTURA` / `FRECUENCIA` / `PROFUNDIDAD`, trailing colon optional.
    Dimension(SectionType),
    /// `PREGUNTAS ABIERTAS`, optionally with the first question inline after
    /// the colon.
    PreguntasAbiertas { inline: Option<String> },
    /// `AUTOEVALUACIÓN`
    Autoevaluacion,
    /// Carries a header keyword without forming a well-formed header. Never
    /// treated as question text.
    Ignored,
    /// Anything else that is non-blank and keyword-free.
    Text(String),
}

fn objetivo_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^OBJETIVO (\d+):\s*(.+)$").expect("invalid objetivo regex"))
}

fn accion_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^ACCIÓN (\d+):\s*(.+)$").expect("invalid acción regex"))
}

fn accion_keyword_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^ACCIÓN \d+:").expect("invalid acción keyword regex"))
}

fn preguntas_inline_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^PREGUNTAS ABIERTAS:\s*(.+)$").expect("invalid preguntas regex")
    })
}

/// Classifies a trimmed line. First match wins, in header-priority order:
/// objective > action > dimension > open-questions > self-assessment, then
/// keyword noise, then free text.
pub fn classify(trimmed: &str) -> LineClass {
    if trimmed.is_empty() {
        return LineClass::Blank;
    }

    if trimmed.starts_with("OBJETIVO ") {
        if let Some(caps) = objetivo_re().captures(trimmed)
            && let Ok(number) = caps[1].parse()
        {
            return LineClass::Objetivo {
                number,
                title: caps[2].trim().to_string(),
            };
        }
        return LineClass::Ignored;
    }

    if accion_keyword_re().is_match(trimmed) {
        if let Some(caps) = accion_re().captures(trimmed)
            && let Ok(number) = caps[1].parse()
        {
            return LineClass::Accion {
                number,
                description: caps[2].trim().to_string(),
            };
        }
        return LineClass::Ignored;
    }

    match trimmed {
        "COBERTURA" | "COBERTURA:" => return LineClass::Dimension(SectionType::Cobertura),
        "FRECUENCIA" | "FRECUENCIA:" => return LineClass::Dimension(SectionType::Frecuencia),
        "PROFUNDIDAD" | "PROFUNDIDAD:" => return LineClass::Dimension(SectionType::Profundidad),
        _ => {}
    }

    if trimmed.starts_with("PREGUNTAS ABIERTAS") || trimmed == "Preguntas Abiertas:" {
        let inline = preguntas_inline_re()
            .captures(trimmed)
            .map(|caps| caps[1].trim().to_string())
            .filter(|text| !text.is_empty());
        return LineClass::PreguntasAbiertas { inline };
    }

    if trimmed.starts_with("AUTOEVALUACIÓN") {
        return LineClass::Autoevaluacion;
    }

    // Keyword-prefixed lines that didn't form a header are tolerated noise,
    // never question text.
    if ["OBJETIVO", "COBERTURA", "FRECUENCIA", "PROFUNDIDAD"]
        .iter()
        .any(|keyword| trimmed.starts_with(keyword))
    {
        return LineClass::Ignored;
    }

    LineClass::Text(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn blank_lines() {
        assert_eq!(classify(""), LineClass::Blank);
    }

    #[test]
    fn objetivo_header_captures_number_and_title() {
        assert_eq!(
            classify("OBJETIVO 3: Evaluación formativa"),
            LineClass::Objetivo {
                number: 3,
                title: "Evaluación formativa".to_string()
            }
        );
    }

    #[rstest]
    #[case("ACCIÓN 2: Implementar entrevistas")]
    #[case("Acción 2: Implementar entrevistas")]
    #[case("acción 2: Implementar entrevistas")]
    fn accion_keyword_is_case_insensitive(#[case] line: &str) {
        assert_eq!(
            classify(line),
            LineClass::Accion {
                number: 2,
                description: "Implementar entrevistas".to_string()
            }
        );
    }

    #[rstest]
    #[case("COBERTURA", SectionType::Cobertura)]
    #[case("COBERTURA:", SectionType::Cobertura)]
    #[case("FRECUENCIA", SectionType::Frecuencia)]
    #[case("FRECUENCIA:", SectionType::Frecuencia)]
    #[case("PROFUNDIDAD", SectionType::Profundidad)]
    #[case("PROFUNDIDAD:", SectionType::Profundidad)]
    fn dimension_headers_with_optional_colon(#[case] line: &str, #[case] expected: SectionType) {
        assert_eq!(classify(line), LineClass::Dimension(expected));
    }

    #[test]
    fn preguntas_abiertas_without_inline_question() {
        assert_eq!(
            classify("PREGUNTAS ABIERTAS"),
            LineClass::PreguntasAbiertas { inline: None }
        );
        // The mixed-case spelling appears in some source documents.
        assert_eq!(
            classify("Preguntas Abiertas:"),
            LineClass::PreguntasAbiertas { inline: None }
        );
    }

    #[test]
    fn preguntas_abiertas_with_inline_question() {
        assert_eq!(
            classify("PREGUNTAS ABIERTAS: ¿Qué modelo usan?"),
            LineClass::PreguntasAbiertas {
                inline: Some("¿Qué modelo usan?".to_string())
            }
        );
    }

    #[test]
    fn autoevaluacion_matches_by_prefix() {
        assert_eq!(classify("AUTOEVALUACIÓN"), LineClass::Autoevaluacion);
        assert_eq!(classify("AUTOEVALUACIÓN:"), LineClass::Autoevaluacion);
    }

    #[rstest]
    #[case("OBJETIVO 1")]
    #[case("OBJETIVO sin número")]
    #[case("OBJETIVOS de la escuela")]
    #[case("ACCIÓN 2:")]
    #[case("COBERTURA extra")]
    #[case("FRECUENCIA y más")]
    #[case("PROFUNDIDAD media")]
    fn keyword_noise_is_never_question_text(#[case] line: &str) {
        assert_eq!(classify(line), LineClass::Ignored);
    }

    #[test]
    fn accion_without_number_is_plain_text() {
        // Only the `ACCIÓN {n}:` form is a header; anything else falls through.
        assert_eq!(
            classify("ACCIÓN sin número"),
            LineClass::Text("ACCIÓN sin número".to_string())
        );
    }

    #[test]
    fn free_text_is_preserved_verbatim() {
        assert_eq!(
            classify("¿Con qué frecuencia revisan el plan?"),
            LineClass::Text("¿Con qué frecuencia revisan el plan?".to_string())
        );
    }

    #[test]
    fn header_priority_objetivo_beats_text() {
        // A title containing a keyword still classifies as the outer header.
        assert_eq!(
            classify("OBJETIVO 1: COBERTURA del plan"),
            LineClass::Objetivo {
                number: 1,
                title: "COBERTURA del plan".to_string()
            }
        );
    }
}
