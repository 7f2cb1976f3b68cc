use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four fixed maturity levels, in increasing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Incipiente,
    EnDesarrollo,
    Avanzado,
    Consolidado,
}

impl Level {
    pub const ALL: [Level; 4] = [
        Level::Incipiente,
        Level::EnDesarrollo,
        Level::Avanzado,
        Level::Consolidado,
    ];

    /// Stable wire value, matching the serialized form.
    pub fn value(self) -> &'static str {
        match self {
            Level::Incipiente => "incipiente",
            Level::EnDesarrollo => "en_desarrollo",
            Level::Avanzado => "avanzado",
            Level::Consolidado => "consolidado",
        }
    }

    /// Display label as it appears in source documents.
    pub fn label(self) -> &'static str {
        match self {
            Level::Incipiente => "Incipiente",
            Level::EnDesarrollo => "En desarrollo",
            Level::Avanzado => "Avanzado",
            Level::Consolidado => "Consolidado",
        }
    }

    /// Matches a self-assessment descriptor line (`Incipiente: {text}` etc.)
    /// against the four fixed label prefixes.
    ///
    /// Returns the level and the trimmed trailing description. Lines with an
    /// unrecognized label, or with nothing at all after the label, don't match.
    pub fn parse_descriptor(line: &str) -> Option<(Level, String)> {
        for level in Level::ALL {
            if let Some(rest) = line.strip_prefix(level.label())
                && let Some(rest) = rest.strip_prefix(':')
                && !rest.is_empty()
            {
                return Some((level, rest.trim().to_string()));
            }
        }
        None
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One maturity-level descriptor within a dimension section.
///
/// Serializes with the `label` field the downstream row contract expects;
/// in memory the label is derived from the level, so the 1:1 pairing can't
/// drift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "LevelOptionWire", into = "LevelOptionWire")]
pub struct LevelOption {
    pub level: Level,
    pub description: String,
}

#[derive(Serialize, Deserialize)]
struct LevelOptionWire {
    value: Level,
    #[serde(default)]
    label: String,
    description: String,
}

impl From<LevelOptionWire> for LevelOption {
    fn from(wire: LevelOptionWire) -> Self {
        Self {
            level: wire.value,
            description: wire.description,
        }
    }
}

impl From<LevelOption> for LevelOptionWire {
    fn from(option: LevelOption) -> Self {
        Self {
            value: option.level,
            label: option.level.label().to_string(),
            description: option.description,
        }
    }
}

impl LevelOption {
    pub fn new(level: Level, description: impl Into<String>) -> Self {
        Self {
            level,
            description: description.into(),
        }
    }

    /// Display label, 1:1 with the level value.
    pub fn label(&self) -> &'static str {
        self.level.label()
    }
}
