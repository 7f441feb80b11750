//! Closed set of integrity rule codes.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Every rule the evaluator can report under.
///
/// The serialized form is the short code (`CR-03`, `NO_FAKE`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
pub enum RuleCode {
    /// The document could not be loaded at all.
    #[serde(rename = "LOAD")]
    Load,
    #[serde(rename = "CR-01")]
    Structure,
    #[serde(rename = "CR-02")]
    Stack,
    #[serde(rename = "CR-03")]
    ImplementedComplete,
    #[serde(rename = "CR-04")]
    DeprecatedComplete,
    #[serde(rename = "CR-05")]
    UseCaseId,
    #[serde(rename = "CR-06")]
    UseCaseStatus,
    #[serde(rename = "CR-07")]
    UseCaseTitle,
    #[serde(rename = "CR-08")]
    VisualId,
    #[serde(rename = "VALUE_STATEMENT")]
    ValueStatement,
    #[serde(rename = "NO_DUPLICATE")]
    NoDuplicate,
    #[serde(rename = "NO_FAKE")]
    NoFake,
    #[serde(rename = "ADR")]
    DecisionRecord,
    #[serde(rename = "RULES")]
    RuleDocuments,
}

impl RuleCode {
    pub const ALL: [Self; 14] = [
        Self::Load,
        Self::Structure,
        Self::Stack,
        Self::ImplementedComplete,
        Self::DeprecatedComplete,
        Self::UseCaseId,
        Self::UseCaseStatus,
        Self::UseCaseTitle,
        Self::VisualId,
        Self::ValueStatement,
        Self::NoDuplicate,
        Self::NoFake,
        Self::DecisionRecord,
        Self::RuleDocuments,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Load => "LOAD",
            Self::Structure => "CR-01",
            Self::Stack => "CR-02",
            Self::ImplementedComplete => "CR-03",
            Self::DeprecatedComplete => "CR-04",
            Self::UseCaseId => "CR-05",
            Self::UseCaseStatus => "CR-06",
            Self::UseCaseTitle => "CR-07",
            Self::VisualId => "CR-08",
            Self::ValueStatement => "VALUE_STATEMENT",
            Self::NoDuplicate => "NO_DUPLICATE",
            Self::NoFake => "NO_FAKE",
            Self::DecisionRecord => "ADR",
            Self::RuleDocuments => "RULES",
        }
    }

    /// One-line description for listings.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Load => "Matrix document loads",
            Self::Structure => "Required document structure",
            Self::Stack => "Technology stack declared",
            Self::ImplementedComplete => "Implemented use cases are complete",
            Self::DeprecatedComplete => "Deprecated use cases are complete",
            Self::UseCaseId => "Use case ids are unique and well-formed",
            Self::UseCaseStatus => "Use case status is valid",
            Self::UseCaseTitle => "Use case has a title",
            Self::VisualId => "Visual ids are well-formed and unique",
            Self::ValueStatement => "Use case states its business value",
            Self::NoDuplicate => "No duplicate functions or endpoints",
            Self::NoFake => "No fake implementations",
            Self::DecisionRecord => "Architecture decisions are well-formed",
            Self::RuleDocuments => "Rule documents are present",
        }
    }
}

impl fmt::Display for RuleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
