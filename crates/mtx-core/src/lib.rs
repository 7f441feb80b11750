//! # mtx-core
//!
//! Document model, status enums, ID patterns, and error types for the Matrix ledger.
//!
//! This crate provides the foundational types shared across all Matrix crates:
//! - The `Document` root record and its nested records (use cases, function
//!   records, architecture decisions, stack)
//! - Graph entities (tables, endpoints, functions) and the merged `Graph` view
//! - Status enums that tolerate unknown values so rules can report them
//! - ID and date pattern helpers
//! - The `AnnotationPayload` injected into source files
//! - Fixed project-relative paths for the matrix file and rule documents
//! - Loading and saving errors

pub mod entities;
pub mod enums;
pub mod errors;
pub mod graph;
pub mod ids;
pub mod paths;

pub use entities::{
    AnnotationPayload, ArchitectureDecision, DbTable, Document, Endpoint, FunctionEntity,
    FunctionRecord, ProjectInfo, Retention, Stack, UseCase, UseCaseList,
};
pub use errors::CoreError;
pub use graph::Graph;

/// Schema version stamped into freshly written documents and annotation payloads.
pub const SCHEMA_VERSION: &str = "1.0";
