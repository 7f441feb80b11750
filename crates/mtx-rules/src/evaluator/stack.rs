use mtx_core::{Document, Stack};

use crate::code::RuleCode;
use crate::report::Report;

const RULE: RuleCode = RuleCode::Stack;

pub(super) fn check(document: &Document, report: &mut Report) {
    let stack = match &document.stack {
        Some(stack) if !stack.is_undeclared() => stack,
        _ => {
            report.warn(RULE, None, "stack is not declared: every stack field is null");
            return;
        }
    };

    for (name, value) in stack.fields() {
        match value.map(str::trim).filter(|text| !text.is_empty()) {
            Some(value) => report.pass(RULE, None, format!("stack.{name} is {value}")),
            None if Stack::REQUIRED.contains(&name) => {
                report.warn(RULE, None, format!("stack.{name} is not declared"));
            }
            None => {}
        }
    }
}
