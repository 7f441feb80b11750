//! Fixed project-relative locations.
//!
//! Everything the evaluator asks the file checker about is one of these
//! constants joined onto a relative path; nothing else is hardcoded.

/// Directory holding Matrix state inside a project root.
pub const MATRIX_DIR: &str = ".matrix";

/// The matrix document, relative to the project root.
pub const MATRIX_FILE: &str = ".matrix/matrix.json";

/// Directory of the rule documents that every project must carry.
pub const RULES_DIR: &str = ".matrix/rules";

/// Version of the rule-document set below.
pub const RULES_VERSION: u32 = 1;

/// Rule documents expected under [`RULES_DIR`].
pub const REQUIRED_RULE_FILES: [&str; 4] = [
    "CONSISTENCY_RULES_v1.md",
    "NO_FAKE_v1.md",
    "VALUE_STATEMENT_v1.md",
    "ADR_GUIDE_v1.md",
];

/// Project-relative path of a rule document.
#[must_use]
pub fn rule_file_path(file_name: &str) -> String {
    format!("{RULES_DIR}/{file_name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_paths_live_under_rules_dir() {
        for file in REQUIRED_RULE_FILES {
            let path = rule_file_path(file);
            assert!(path.starts_with(".matrix/rules/"));
            assert!(path.contains(&format!("_v{RULES_VERSION}")));
        }
    }

    #[test]
    fn matrix_file_is_inside_matrix_dir() {
        assert!(MATRIX_FILE.starts_with(MATRIX_DIR));
    }
}
