//! Entity structs for the Matrix document.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema`. Record
//! fields are deliberately lenient (`Option` or defaulted) so that a missing
//! value reaches the rule evaluator as an absence to report, not as a parse
//! failure.

mod decision;
mod document;
mod graph;
mod payload;
mod project;
mod use_case;

pub use decision::ArchitectureDecision;
pub use document::{Document, RejectedUseCase, UseCaseEntries, UseCaseList, UseCaseSlot};
pub use graph::{DbTable, Endpoint, FunctionEntity, Retention, normalize_route};
pub use payload::AnnotationPayload;
pub use project::{ProjectInfo, Stack};
pub use use_case::{FunctionRecord, UseCase};

/// True when the value is present and not only whitespace.
pub(crate) fn is_filled(value: Option<&str>) -> bool {
    value.is_some_and(|text| !text.trim().is_empty())
}
