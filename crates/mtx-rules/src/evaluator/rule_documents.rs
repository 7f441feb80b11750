use mtx_core::paths::{REQUIRED_RULE_FILES, rule_file_path};

use crate::code::RuleCode;
use crate::files::FileChecker;
use crate::report::Report;

const RULE: RuleCode = RuleCode::RuleDocuments;

pub(super) fn check<F: FileChecker + ?Sized>(files: &F, report: &mut Report) {
    for name in REQUIRED_RULE_FILES {
        let path = rule_file_path(name);
        if files.exists(&path) {
            report.pass(RULE, None, format!("{path} is present"));
        } else {
            report.warn(RULE, None, format!("{path} is missing"));
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn one_finding_per_rule_document() {
        let files = |path: &str| path.ends_with("NO_FAKE_v1.md");
        let mut report = Report::default();
        check(&files, &mut report);
        assert_eq!(report.passes.len(), 1);
        assert_eq!(report.warnings.len(), 3);
        assert!(report.errors.is_empty());
    }
}
