use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::graph::{DbTable, Endpoint, FunctionEntity};
use crate::enums::UseCaseStatus;

/// A named unit of user-facing value with a lifecycle status and the
/// functions that implement it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct UseCase {
    pub id: Option<String>,
    pub title: Option<String>,
    /// Business value statement ("so that ...").
    #[serde(alias = "value")]
    pub value_statement: Option<String>,
    pub status: Option<UseCaseStatus>,
    pub actor: Option<String>,
    pub preconditions: Vec<String>,
    pub postconditions: Vec<String>,
    pub functions: Vec<FunctionRecord>,
    /// Rule documents the implementer declares to have applied.
    pub applied_rules: Vec<String>,
    /// Visual element this use case is surfaced through, or `"pending"`.
    pub visual_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecation_reason: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tables: Vec<DbTable>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub endpoints: Vec<Endpoint>,
    /// Functions discovered in code for this use case.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub discovered_functions: Vec<FunctionEntity>,
}

impl UseCase {
    /// The id, or a placeholder for use in messages.
    #[must_use]
    pub fn label(&self) -> &str {
        self.id.as_deref().unwrap_or("<no id>")
    }

    #[must_use]
    pub fn has_status(&self, status: &UseCaseStatus) -> bool {
        self.status.as_ref() == Some(status)
    }

    #[must_use]
    pub fn is_implemented(&self) -> bool {
        self.has_status(&UseCaseStatus::Implemented)
    }

    #[must_use]
    pub fn is_deprecated(&self) -> bool {
        self.has_status(&UseCaseStatus::Deprecated)
    }

    /// Look up a function record by exact name.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<&FunctionRecord> {
        self.functions
            .iter()
            .find(|record| record.name.as_deref() == Some(name))
    }
}

/// A function implementing (part of) a use case, as recorded in the matrix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct FunctionRecord {
    pub name: Option<String>,
    /// Source file, relative to the project root.
    pub file: Option<String>,
    pub line: Option<i64>,
    /// `"METHOD /path"`, when the function serves an HTTP route.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    pub tables: Vec<String>,
    pub auth_required: Option<bool>,
    pub roles: Vec<String>,
    pub last_modified: Option<String>,
}

impl FunctionRecord {
    #[must_use]
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("<unnamed>")
    }
}
