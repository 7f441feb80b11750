use mtx_core::{Document, FunctionRecord};

use crate::code::RuleCode;
use crate::report::Report;

const RULE: RuleCode = RuleCode::NoFake;

/// Tag an implemented use case must carry in `applied_rules`.
pub const REQUIRED_TAG: &str = "NO_FAKE";

/// Lowercase tokens that mark a function name as a stand-in.
pub const STUB_TOKENS: [&str; 10] = [
    "todo",
    "fixme",
    "stub",
    "placeholder",
    "dummy",
    "mock",
    "fake",
    "tbd",
    "xxx",
    "notimplemented",
];

/// Heuristics against implemented use cases that are not really implemented.
pub(super) fn check(document: &Document, report: &mut Report) {
    for use_case in document
        .active_use_cases()
        .iter()
        .filter(|use_case| use_case.is_implemented())
    {
        let id = use_case.id.as_deref();
        let label = use_case.label();
        let before = (report.errors.len(), report.warnings.len());

        if !use_case.applied_rules.iter().any(|rule| rule == REQUIRED_TAG) {
            report.warn(
                RULE,
                id,
                format!("{label} does not list {REQUIRED_TAG} in applied_rules"),
            );
        }

        for function in &use_case.functions {
            check_function(label, id, function, report);
        }

        if (report.errors.len(), report.warnings.len()) == before {
            report.pass(RULE, id, format!("{label} shows no sign of fake implementation"));
        }
    }
}

fn check_function(label: &str, id: Option<&str>, function: &FunctionRecord, report: &mut Report) {
    let name = function.name.as_deref().map(str::trim).unwrap_or_default();

    if name.is_empty() {
        report.error(RULE, id, format!("{label} has a function with an empty name"));
    } else if let Some(token) = stub_token(name) {
        report.error(
            RULE,
            id,
            format!("{label} function {name} looks like a stub (contains {token:?})"),
        );
    }

    let shown = function.label();
    if function.line.is_none_or(|line| line <= 0) {
        report.warn(RULE, id, format!("{label} {shown} has no real line number"));
    }
    if function.auth_required.is_none() {
        report.error(
            RULE,
            id,
            format!("{label} {shown} must declare auth_required explicitly"),
        );
    }
}

/// First stub token found in `name`, compared case-insensitively.
#[must_use]
pub fn stub_token(name: &str) -> Option<&'static str> {
    let lowered = name.to_lowercase();
    STUB_TOKENS
        .into_iter()
        .find(|token| lowered.contains(token))
}
