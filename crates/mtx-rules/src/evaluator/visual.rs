use std::collections::HashMap;

use mtx_core::Document;
use mtx_core::ids::{VISUAL_ID_PENDING, is_visual_id};

use crate::code::RuleCode;
use crate::report::Report;

const RULE: RuleCode = RuleCode::VisualId;

/// Visual ids are `Screen.Element`, or `pending`, and each one belongs to a
/// single use case.
pub(super) fn check(document: &Document, report: &mut Report) {
    let mut owners: HashMap<&str, &str> = HashMap::new();

    for use_case in document.all_use_cases() {
        let id = use_case.id.as_deref();
        let label = use_case.label();
        let Some(visual) = use_case.visual_id.as_deref() else {
            report.pass(RULE, id, format!("{label} has no visual element"));
            continue;
        };
        if visual == VISUAL_ID_PENDING {
            report.pass(RULE, id, format!("{label} visual element is pending"));
            continue;
        }
        if !is_visual_id(visual) {
            report.warn(
                RULE,
                id,
                format!("{label} visual_id {visual:?} is not of the form Screen.Element"),
            );
            continue;
        }
        if let Some(first) = owners.get(visual) {
            report.error(
                RULE,
                id,
                format!("visual_id {visual} is used by both {first} and {label}"),
            );
            continue;
        }
        owners.insert(visual, label);
        report.pass(RULE, id, format!("{label} visual_id {visual} is valid"));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn run(json: &str) -> Report {
        let document = Document::from_json_str(json).unwrap();
        let mut report = Report::default();
        check(&document, &mut report);
        report
    }

    #[test]
    fn null_and_pending_pass() {
        let report = run(
            r#"{"use_cases": [{"id": "UC-001", "visual_id": null}, {"id": "UC-002", "visual_id": "pending"}]}"#,
        );
        assert_eq!(report.passes.len(), 2);
        assert!(report.errors.is_empty());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn malformed_id_warns() {
        let report = run(r#"{"use_cases": [{"id": "UC-001", "visual_id": "loginPage.submit"}]}"#);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.passes.is_empty());
    }

    #[test]
    fn shared_id_is_an_error_naming_both() {
        let report = run(
            r#"{
                "use_cases": [{"id": "UC-001", "visual_id": "Login.Submit"}],
                "deprecated": [{"id": "UC-002", "visual_id": "Login.Submit"}]
            }"#,
        );
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].detail.contains("UC-001"));
        assert!(report.errors[0].detail.contains("UC-002"));
        assert_eq!(report.passes.len(), 1);
    }
}
