use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::DecisionStatus;

/// An architecture decision record (ADR).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ArchitectureDecision {
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub status: Option<DecisionStatus>,
    pub decision: Option<String>,
    pub context: Option<String>,
    pub alternatives: Vec<String>,
    pub consequences: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}
