//! Integrity rule evaluator.
//!
//! Each check module inspects the document independently and appends to the
//! shared [`Report`]. Checks are total: a missing optional field is itself a
//! finding, never a reason to stop. Check order only affects report order.

mod decisions;
mod deprecated;
mod duplicates;
mod implemented;
mod no_fake;
mod rule_documents;
mod stack;
mod structure;
mod use_cases;
mod visual;

use mtx_core::{CoreError, Document};

use crate::files::FileChecker;
use crate::report::Report;

/// Evaluate every integrity rule against `document`.
///
/// `files` is consulted for referenced source files (once per distinct path)
/// and for the fixed rule-document paths.
pub fn evaluate<F: FileChecker + ?Sized>(document: &Document, files: &F) -> Report {
    let _span = tracing::debug_span!("evaluate").entered();
    let mut report = Report::default();

    run("structure", &mut report, |report| {
        structure::check(document, files, report);
    });
    run("stack", &mut report, |report| stack::check(document, report));
    run("use_cases", &mut report, |report| {
        use_cases::check(document, report);
    });
    run("duplicates", &mut report, |report| {
        duplicates::check(document, report);
    });
    run("implemented", &mut report, |report| {
        implemented::check(document, files, report);
    });
    run("deprecated", &mut report, |report| {
        deprecated::check(document, report);
    });
    run("visual", &mut report, |report| visual::check(document, report));
    run("no_fake", &mut report, |report| no_fake::check(document, report));
    run("decisions", &mut report, |report| {
        decisions::check(document, report);
    });
    run("rule_documents", &mut report, |report| {
        rule_documents::check(files, report);
    });

    let summary = report.summary();
    tracing::debug!(
        errors = summary.errors,
        warnings = summary.warnings,
        passes = summary.passes,
        "evaluation finished"
    );
    report
}

/// Evaluate the outcome of loading a document.
///
/// A load failure short-circuits into a single `LOAD` error; otherwise this is
/// [`evaluate`].
pub fn evaluate_loaded<F: FileChecker + ?Sized>(
    loaded: Result<Document, CoreError>,
    files: &F,
) -> Report {
    match loaded {
        Ok(document) => evaluate(&document, files),
        Err(error) => {
            tracing::warn!(%error, "matrix document failed to load; skipping rules");
            Report::load_failure(error.to_string())
        }
    }
}

fn run(name: &'static str, report: &mut Report, check: impl FnOnce(&mut Report)) {
    let before = report.summary();
    check(report);
    let after = report.summary();
    tracing::debug!(
        check = name,
        errors = after.errors - before.errors,
        warnings = after.warnings - before.warnings,
        passes = after.passes - before.passes,
        "check finished"
    );
}

/// Trimmed text, when present and not blank.
fn filled(value: Option<&String>) -> Option<&str> {
    value.map(|text| text.trim()).filter(|text| !text.is_empty())
}
