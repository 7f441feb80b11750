//! # mtx-annotate
//!
//! Text-level annotation injector. Given the contents of one source file, an
//! element name, and an [`AnnotationPayload`](mtx_core::AnnotationPayload),
//! [`inject`] finds the line to annotate and writes a
//! `data-matrix='{...}'` attribute right after the tag name.
//!
//! There is no parser. The element is located by three ordered heuristics:
//!
//! 1. A direct usage `<Element` followed by whitespace, `/` or `>`.
//! 2. A `function Element` / `const|let|var Element` declaration, then the
//!    first opening tag within [`SEARCH_WINDOW`] lines starting there.
//! 3. Otherwise, a failure naming the element.
//!
//! The first match wins. Nothing here touches the filesystem.

mod attribute;
mod error;
mod inject;
mod locate;
mod outcome;

pub use attribute::{extract, strip};
pub use error::InjectError;
pub use inject::inject;
pub use locate::{Location, locate};
pub use outcome::{InjectReport, Injected};

/// Attribute key carrying the payload.
pub const ANNOTATION_ATTRIBUTE: &str = "data-matrix";

/// Lines scanned from a declaration (inclusive) looking for an opening tag.
pub const SEARCH_WINDOW: usize = 80;
