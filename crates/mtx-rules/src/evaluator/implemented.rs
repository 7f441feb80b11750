use std::collections::HashSet;

use mtx_core::{Document, UseCase};

use super::filled;
use crate::code::RuleCode;
use crate::files::FileChecker;
use crate::report::Report;

const RULE: RuleCode = RuleCode::ImplementedComplete;

/// Implemented use cases must list their functions, each with a name, file
/// and line, and every referenced file must exist. Each distinct file path is
/// checked once, in first-seen order.
pub(super) fn check<F: FileChecker + ?Sized>(document: &Document, files: &F, report: &mut Report) {
    let implemented: Vec<&UseCase> = document
        .active_use_cases()
        .iter()
        .filter(|use_case| use_case.is_implemented())
        .collect();

    for use_case in &implemented {
        check_functions(use_case, report);
    }

    let mut seen = HashSet::new();
    for use_case in &implemented {
        for function in &use_case.functions {
            let Some(path) = filled(function.file.as_ref()) else {
                continue;
            };
            if !seen.insert(path) {
                continue;
            }
            if files.exists(path) {
                report.pass(RULE, use_case.id.as_deref(), format!("{path} exists"));
            } else {
                report.error(
                    RULE,
                    use_case.id.as_deref(),
                    format!("{path} referenced by {} does not exist", use_case.label()),
                );
            }
        }
    }
}

fn check_functions(use_case: &UseCase, report: &mut Report) {
    let id = use_case.id.as_deref();
    let label = use_case.label();

    if use_case.functions.is_empty() {
        report.error(
            RULE,
            id,
            format!("{label} is implemented but lists no functions"),
        );
        return;
    }

    let before = report.errors.len();
    for (index, function) in use_case.functions.iter().enumerate() {
        let name = filled(function.name.as_ref());
        let which = name.map_or_else(|| format!("functions[{index}]"), str::to_string);

        if name.is_none() {
            report.error(RULE, id, format!("{label} functions[{index}] has no name"));
        }
        if filled(function.file.as_ref()).is_none() {
            report.error(RULE, id, format!("{label} {which} has no file"));
        }
        if function.line.is_none() {
            report.error(RULE, id, format!("{label} {which} has no line number"));
        }
        if function.auth_required.is_none() {
            report.warn(RULE, id, format!("{label} {which} does not declare auth_required"));
        }
        if filled(function.last_modified.as_ref()).is_none() {
            report.warn(RULE, id, format!("{label} {which} has no last_modified date"));
        }
    }

    if report.errors.len() == before {
        report.pass(
            RULE,
            id,
            format!("{label} lists {} complete functions", use_case.functions.len()),
        );
    }
}
