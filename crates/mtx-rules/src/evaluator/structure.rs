use mtx_core::entities::UseCaseList;
use mtx_core::paths::MATRIX_FILE;
use mtx_core::{Document, ids};

use super::filled;
use crate::code::RuleCode;
use crate::files::FileChecker;
use crate::report::Report;

const RULE: RuleCode = RuleCode::Structure;

pub(super) fn check<F: FileChecker + ?Sized>(document: &Document, files: &F, report: &mut Report) {
    match filled(document.schema_version.as_ref()) {
        Some(version) => report.pass(RULE, None, format!("schema_version is {version}")),
        None => report.error(RULE, None, "missing required field `schema_version`"),
    }

    let project_name = document
        .project
        .as_ref()
        .and_then(|project| filled(project.name.as_ref()));
    match project_name {
        Some(name) => report.pass(RULE, None, format!("project name is {name}")),
        None => report.error(RULE, None, "missing required field `project.name`"),
    }

    match filled(document.last_updated.as_ref()) {
        Some(date) if ids::is_iso_date(date) => {
            report.pass(RULE, None, format!("last_updated is {date}"));
        }
        Some(date) => report.error(
            RULE,
            None,
            format!("`last_updated` must be YYYY-MM-DD, found `{date}`"),
        ),
        None => report.error(RULE, None, "missing required field `last_updated`"),
    }

    match &document.use_cases {
        Some(UseCaseList::List(entries)) if entries.rejected.is_empty() => report.pass(
            RULE,
            None,
            format!("use_cases is a list of {} entries", entries.len()),
        ),
        Some(UseCaseList::List(entries)) => {
            for rejected in &entries.rejected {
                report.error(
                    RULE,
                    rejected.id(),
                    format!(
                        "use_cases[{}] is not a valid use case record and was skipped: {}",
                        rejected.index, rejected.error
                    ),
                );
            }
        }
        Some(UseCaseList::Malformed(value)) => report.error(
            RULE,
            None,
            format!(
                "`use_cases` must be a list of use case records, found {}",
                json_kind(value)
            ),
        ),
        None => report.error(RULE, None, "missing required field `use_cases`"),
    }

    if files.exists(MATRIX_FILE) {
        report.pass(RULE, None, format!("{MATRIX_FILE} is present"));
    } else {
        report.warn(
            RULE,
            None,
            format!("{MATRIX_FILE} not found; the document was loaded from elsewhere"),
        );
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "a list",
        serde_json::Value::Object(_) => "an object",
    }
}
