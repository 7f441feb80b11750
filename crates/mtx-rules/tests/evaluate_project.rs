//! End-to-end evaluation against documents on disk.

use std::cell::RefCell;
use std::fs;
use std::path::Path;

use mtx_core::paths::{MATRIX_FILE, REQUIRED_RULE_FILES, rule_file_path};
use mtx_core::{CoreError, Document};
use mtx_rules::{Level, ProjectFiles, Report, RuleCode, evaluate, evaluate_loaded};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const CLEAN: &str = r#"{
    "schema_version": "1.0",
    "project": {"name": "shop", "description": "Storefront"},
    "last_updated": "2026-03-14",
    "stack": {"runtime": "node", "framework": "next", "language": "typescript", "database": "postgres"},
    "use_cases": [{
        "id": "UC-001",
        "title": "Checkout",
        "value_statement": "So that customers can pay for their cart",
        "status": "implemented",
        "applied_rules": ["NO_FAKE"],
        "visual_id": "Checkout.PayButton",
        "functions": [{
            "name": "submitOrder",
            "file": "src/checkout.ts",
            "line": 12,
            "endpoint": "POST /orders",
            "tables": ["orders"],
            "auth_required": true,
            "last_modified": "2026-03-01"
        }]
    }],
    "deprecated": [{
        "id": "UC-000",
        "title": "Legacy checkout",
        "status": "deprecated",
        "deprecated_date": "2026-01-01",
        "deprecation_reason": "replaced by UC-001"
    }],
    "decisions": [{
        "id": "ADR-001",
        "status": "accepted",
        "decision": "Use Postgres",
        "context": "Orders are relational",
        "alternatives": ["SQLite"]
    }]
}"#;

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn project(document: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    write(dir.path(), MATRIX_FILE, document);
    write(dir.path(), "src/checkout.ts", "export function submitOrder() {}\n");
    for name in REQUIRED_RULE_FILES {
        write(dir.path(), &rule_file_path(name), "# rule\n");
    }
    dir
}

fn evaluate_project(dir: &TempDir) -> Report {
    let files = ProjectFiles::new(dir.path());
    evaluate_loaded(Document::load(&dir.path().join(MATRIX_FILE)), &files)
}

#[test]
fn clean_project_has_no_errors_or_warnings() {
    let dir = project(CLEAN);
    let report = evaluate_project(&dir);

    assert_eq!(report.errors, vec![]);
    assert_eq!(report.warnings, vec![]);
    for rule in [
        RuleCode::Structure,
        RuleCode::Stack,
        RuleCode::ImplementedComplete,
        RuleCode::NoFake,
        RuleCode::RuleDocuments,
    ] {
        assert!(
            report.by_rule(Level::Pass, rule).next().is_some(),
            "expected a pass for {rule}"
        );
    }
}

#[test]
fn missing_source_file_and_rule_document_are_reported() {
    let dir = project(CLEAN);
    fs::remove_file(dir.path().join("src/checkout.ts")).unwrap();
    fs::remove_file(dir.path().join(rule_file_path("ADR_GUIDE_v1.md"))).unwrap();

    let report = evaluate_project(&dir);

    let missing: Vec<_> = report
        .by_rule(Level::Error, RuleCode::ImplementedComplete)
        .collect();
    assert_eq!(missing.len(), 1);
    assert!(missing[0].detail.contains("src/checkout.ts"));
    assert_eq!(
        report.by_rule(Level::Warning, RuleCode::RuleDocuments).count(),
        1
    );
}

#[test]
fn unreadable_document_short_circuits_into_one_load_error() {
    let dir = project("{ not json");
    let report = evaluate_project(&dir);

    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].rule, RuleCode::Load);
    assert!(report.warnings.is_empty());
    assert!(report.passes.is_empty());
}

#[test]
fn missing_document_is_a_load_error() {
    let dir = TempDir::new().unwrap();
    let loaded = Document::load(&dir.path().join(MATRIX_FILE));
    assert!(matches!(loaded, Err(CoreError::NotFound { .. })));

    let report = evaluate_loaded(loaded, &ProjectFiles::new(dir.path()));
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].rule, RuleCode::Load);
}

#[test]
fn duplicate_ids_yield_one_error_per_id() {
    let document = Document::from_json_str(
        r#"{"use_cases": [
            {"id": "UC-001", "title": "a", "status": "planned", "value_statement": "v"},
            {"id": "UC-001", "title": "b", "status": "planned", "value_statement": "v"},
            {"id": "UC-002", "title": "c", "status": "planned", "value_statement": "v"},
            {"id": "UC-002", "title": "d", "status": "planned", "value_statement": "v"},
            {"id": "UC-002", "title": "e", "status": "planned", "value_statement": "v"}
        ]}"#,
    )
    .unwrap();
    let report = evaluate(&document, &|_: &str| true);

    let duplicates: Vec<_> = report
        .by_rule(Level::Error, RuleCode::UseCaseId)
        .collect();
    assert_eq!(duplicates.len(), 2);
    assert!(duplicates[1].detail.contains("3 times"));
}

#[test]
fn empty_implemented_use_case_never_passes_completeness() {
    let document = Document::from_json_str(
        r#"{"use_cases": [{"id": "UC-001", "title": "a", "status": "implemented",
            "value_statement": "v", "functions": []}]}"#,
    )
    .unwrap();
    let report = evaluate(&document, &|_: &str| true);

    assert_eq!(
        report.by_rule(Level::Error, RuleCode::ImplementedComplete).count(),
        1
    );
    assert!(
        report
            .by_rule(Level::Pass, RuleCode::ImplementedComplete)
            .all(|finding| finding.target.as_deref() != Some("UC-001"))
    );
}

#[test]
fn stub_function_name_is_cited() {
    let document = Document::from_json_str(
        r#"{"use_cases": [{"id": "UC-001", "title": "a", "status": "implemented",
            "value_statement": "v", "applied_rules": ["NO_FAKE"],
            "functions": [{"name": "todoHandler", "file": "src/a.ts", "line": 3, "auth_required": false}]}]}"#,
    )
    .unwrap();
    let report = evaluate(&document, &|_: &str| true);

    let stubs: Vec<_> = report.by_rule(Level::Error, RuleCode::NoFake).collect();
    assert_eq!(stubs.len(), 1);
    assert!(stubs[0].detail.contains("todoHandler"));
}

#[test]
fn referenced_files_are_checked_once_each() {
    let document = Document::from_json_str(
        r#"{"use_cases": [
            {"id": "UC-001", "status": "implemented", "functions": [
                {"name": "a", "file": "src/shared.ts", "line": 1},
                {"name": "b", "file": "./src/other.ts", "line": 2}]},
            {"id": "UC-002", "status": "implemented", "functions": [
                {"name": "c", "file": "src/shared.ts", "line": 3}]}
        ]}"#,
    )
    .unwrap();
    let asked = RefCell::new(Vec::new());
    let files = |path: &str| {
        asked.borrow_mut().push(path.to_string());
        true
    };
    evaluate(&document, &files);

    let asked = asked.into_inner();
    let source: Vec<_> = asked
        .iter()
        .filter(|path| path.contains("src/"))
        .map(String::as_str)
        .collect();
    assert_eq!(source, vec!["src/shared.ts", "./src/other.ts"]);
}

#[test]
fn one_mistyped_entry_does_not_hide_the_rest_of_the_list() {
    let dir = project(
        r#"{
            "schema_version": "1.0",
            "project": {"name": "shop"},
            "last_updated": "2026-03-14",
            "use_cases": [
                {"id": "UC-001", "title": "Checkout", "value_statement": "So that customers pay",
                 "status": "implemented", "functions": []},
                {"id": "UC-001", "title": "Refund", "status": "planned",
                 "functions": [{"name": "refund", "line": "12"}]}
            ]
        }"#,
    );
    let report = evaluate_project(&dir);

    let skipped: Vec<_> = report.by_rule(Level::Error, RuleCode::Structure).collect();
    assert_eq!(skipped.len(), 1);
    assert!(skipped[0].detail.starts_with("use_cases[1] "));

    let duplicate_ids: Vec<_> = report.by_rule(Level::Error, RuleCode::UseCaseId).collect();
    assert_eq!(duplicate_ids.len(), 1);
    assert!(duplicate_ids[0].detail.contains("2 times"));

    assert_eq!(
        report
            .by_rule(Level::Error, RuleCode::ImplementedComplete)
            .count(),
        1
    );
    assert_eq!(report.by_rule(Level::Pass, RuleCode::NoDuplicate).count(), 0);
    assert_eq!(report.by_rule(Level::Pass, RuleCode::UseCaseId).count(), 0);
}
