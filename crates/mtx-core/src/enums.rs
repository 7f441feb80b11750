//! Status enums for use cases and architecture decisions.
//!
//! Both enums serialize as their `snake_case` string. Deserialization never
//! fails: an unrecognized string is kept in the `Unknown` variant so the rule
//! evaluator can report it instead of the loader rejecting the whole document.

use std::borrow::Cow;
use std::fmt;

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// UseCaseStatus
// ---------------------------------------------------------------------------

/// Lifecycle of a use case.
///
/// ```text
/// planned → in_progress → implemented → deprecated
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UseCaseStatus {
    Planned,
    InProgress,
    Implemented,
    Deprecated,
    /// A value outside the four known states, kept verbatim.
    Unknown(String),
}

impl UseCaseStatus {
    /// The four valid states, in lifecycle order.
    pub const KNOWN: [Self; 4] = [
        Self::Planned,
        Self::InProgress,
        Self::Implemented,
        Self::Deprecated,
    ];

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Planned => "planned",
            Self::InProgress => "in_progress",
            Self::Implemented => "implemented",
            Self::Deprecated => "deprecated",
            Self::Unknown(raw) => raw,
        }
    }

    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl From<String> for UseCaseStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "planned" => Self::Planned,
            "in_progress" => Self::InProgress,
            "implemented" => Self::Implemented,
            "deprecated" => Self::Deprecated,
            _ => Self::Unknown(value),
        }
    }
}

impl From<UseCaseStatus> for String {
    fn from(value: UseCaseStatus) -> Self {
        match value {
            UseCaseStatus::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for UseCaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl JsonSchema for UseCaseStatus {
    fn schema_name() -> Cow<'static, str> {
        "UseCaseStatus".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "string",
            "examples": ["planned", "in_progress", "implemented", "deprecated"]
        })
    }
}

// ---------------------------------------------------------------------------
// DecisionStatus
// ---------------------------------------------------------------------------

/// Status of an architecture decision record.
///
/// ```text
/// proposed → accepted → superseded
///                     → deprecated
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DecisionStatus {
    Proposed,
    Accepted,
    Superseded,
    Deprecated,
    /// A value outside the four known states, kept verbatim.
    Unknown(String),
}

impl DecisionStatus {
    pub const KNOWN: [Self; 4] = [
        Self::Proposed,
        Self::Accepted,
        Self::Superseded,
        Self::Deprecated,
    ];

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Proposed => "proposed",
            Self::Accepted => "accepted",
            Self::Superseded => "superseded",
            Self::Deprecated => "deprecated",
            Self::Unknown(raw) => raw,
        }
    }

    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl From<String> for DecisionStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "proposed" => Self::Proposed,
            "accepted" => Self::Accepted,
            "superseded" => Self::Superseded,
            "deprecated" => Self::Deprecated,
            _ => Self::Unknown(value),
        }
    }
}

impl From<DecisionStatus> for String {
    fn from(value: DecisionStatus) -> Self {
        match value {
            DecisionStatus::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for DecisionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl JsonSchema for DecisionStatus {
    fn schema_name() -> Cow<'static, str> {
        "DecisionStatus".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "string",
            "examples": ["proposed", "accepted", "superseded", "deprecated"]
        })
    }
}
