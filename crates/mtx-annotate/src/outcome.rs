use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::InjectError;

/// A successful injection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Injected {
    pub new_text: String,
    /// 1-based.
    pub line_number: usize,
    /// A `data-matrix` attribute was already on the line and got replaced.
    pub had_prior_annotation: bool,
    /// False when the prior annotation was byte-identical to the new one.
    pub changed: bool,
    /// Tag name the attribute was attached to.
    pub tag: String,
}

/// Flat outcome shape used on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct InjectReport {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_number: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub had_prior_annotation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl From<Result<Injected, InjectError>> for InjectReport {
    fn from(outcome: Result<Injected, InjectError>) -> Self {
        match outcome {
            Ok(injected) => Self {
                success: true,
                new_text: Some(injected.new_text),
                line_number: Some(injected.line_number),
                had_prior_annotation: Some(injected.had_prior_annotation),
                reason: None,
            },
            Err(error) => Self {
                success: false,
                new_text: None,
                line_number: None,
                had_prior_annotation: None,
                reason: Some(error.to_string()),
            },
        }
    }
}
