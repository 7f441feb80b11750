use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::use_case::{FunctionRecord, UseCase};
use crate::SCHEMA_VERSION;
use crate::errors::CoreError;

/// Metadata linking a source element back to its use case.
///
/// Serialized as a single-line JSON object and injected into source text as
/// an attribute value. Every key is always present so the shape stays flat and
/// stable; absent values serialize as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AnnotationPayload {
    pub use_case_id: String,
    pub use_case_title: String,
    pub function: String,
    pub file: String,
    pub line: Option<i64>,
    pub endpoint: Option<String>,
    pub tables: Vec<String>,
    pub auth_required: Option<bool>,
    /// Date the link was last verified, `YYYY-MM-DD`.
    pub verified: String,
    pub schema_version: String,
    /// Visual id of the annotated element itself.
    pub element_id: Option<String>,
}

impl AnnotationPayload {
    /// Build a payload from a use case and one of its function records.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the use case has no id or the
    /// function record has no name.
    pub fn from_record(
        use_case: &UseCase,
        function: &FunctionRecord,
        verified: impl Into<String>,
    ) -> Result<Self, CoreError> {
        let use_case_id = use_case
            .id
            .clone()
            .ok_or_else(|| CoreError::Validation("use case has no id".into()))?;
        let name = function.name.clone().ok_or_else(|| {
            CoreError::Validation(format!("function record in {use_case_id} has no name"))
        })?;

        Ok(Self {
            use_case_title: use_case.title.clone().unwrap_or_default(),
            use_case_id,
            function: name,
            file: function.file.clone().unwrap_or_default(),
            line: function.line,
            endpoint: function.endpoint.clone(),
            tables: function.tables.clone(),
            auth_required: function.auth_required,
            verified: verified.into(),
            schema_version: SCHEMA_VERSION.to_string(),
            element_id: use_case.visual_id.clone(),
        })
    }

    /// Single-line JSON safe to wrap in single quotes.
    ///
    /// `'` is written as the JSON escape `\u0027`, which decodes back to the
    /// same character.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Parse`] if serialization fails.
    pub fn to_inline_json(&self) -> Result<String, CoreError> {
        let json = serde_json::to_string(self)?;
        Ok(json.replace('\'', "\\u0027"))
    }
}
