//! # mtx-rules
//!
//! Consistency checks over a Matrix [`Document`](mtx_core::Document).
//!
//! Two pure entry points share the same shape: walk the document, append
//! classified findings, never fail.
//!
//! - [`evaluate`] runs the integrity rules and returns a [`Report`] of errors,
//!   warnings, and passes. Its only outside capability is a [`FileChecker`].
//! - [`classify`] inspects the table/endpoint/function graph and returns
//!   [`GraphFinding`]s with a per-entity [`Severity`] used to colour graph nodes.

pub mod code;
pub mod evaluator;
pub mod files;
pub mod report;
pub mod violations;

pub use code::RuleCode;
pub use evaluator::{evaluate, evaluate_loaded};
pub use files::{FileChecker, ProjectFiles};
pub use report::{Finding, Level, Report, ReportSummary};
pub use violations::{
    EntityKind, GraphFinding, Severity, ViolationCode, classify, findings_for_entity,
    severity_by_entity, worst_severity,
};
