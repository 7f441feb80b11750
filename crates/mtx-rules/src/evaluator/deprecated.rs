use mtx_core::Document;

use super::filled;
use crate::code::RuleCode;
use crate::report::Report;

const RULE: RuleCode = RuleCode::DeprecatedComplete;

/// Deprecated use cases need a date and a reason, and belong in the
/// deprecated list rather than the active one.
pub(super) fn check(document: &Document, report: &mut Report) {
    for use_case in &document.deprecated {
        let id = use_case.id.as_deref();
        let label = use_case.label();
        let mut complete = true;

        if filled(use_case.deprecated_date.as_ref()).is_none() {
            complete = false;
            report.error(RULE, id, format!("{label} has no deprecated_date"));
        }
        if filled(use_case.deprecation_reason.as_ref()).is_none() {
            complete = false;
            report.error(RULE, id, format!("{label} has no deprecation_reason"));
        }
        if !use_case.is_deprecated() {
            let status = use_case
                .status
                .as_ref()
                .map_or("<missing>", |status| status.as_str());
            report.warn(
                RULE,
                id,
                format!("{label} is in the deprecated list with status {status}"),
            );
        }

        if complete {
            report.pass(RULE, id, format!("{label} deprecation is documented"));
        }
    }

    for use_case in document.active_use_cases() {
        if use_case.is_deprecated() {
            report.warn(
                RULE,
                use_case.id.as_deref(),
                format!(
                    "{} is deprecated but still in use_cases; move it to deprecated",
                    use_case.label()
                ),
            );
        }
    }
}
