//! # mtx-schema
//!
//! JSON Schema registry for the Matrix ledger.
//!
//! Model types are defined in `mtx-core`, `mtx-rules`, and `mtx-annotate` with
//! `#[derive(JsonSchema)]`. This crate collects their schemas under stable
//! names for export (`mtx schema`) and validates raw JSON against them before
//! it is trusted, e.g. annotation payloads arriving over `mtx rpc`.

pub mod error;
pub mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
