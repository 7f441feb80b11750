use anyhow::bail;
use mtx_rules::{Finding, Level, Report, RuleCode, evaluate_loaded};

use crate::cli::root_commands::CheckArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output;

/// Handle `mtx check`.
pub fn handle(args: &CheckArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let report = evaluate_loaded(ctx.load_document(), &ctx.files());
    let show_passes = args.show_passes || ctx.config.check.show_passes;

    match flags.format {
        OutputFormat::Table => println!("{}", render_table(&report, show_passes)),
        format => output::output(&report, format)?,
    }

    let summary = report.summary();
    let fail_on_warnings = args.strict || ctx.config.check.fail_on_warnings;
    if !report.is_clean() {
        bail!(
            "matrix check failed: {} errors, {} warnings",
            summary.errors,
            summary.warnings
        );
    }
    if fail_on_warnings && summary.warnings > 0 {
        bail!(
            "matrix check failed: {} warnings (warnings are fatal)",
            summary.warnings
        );
    }
    Ok(())
}

fn render_table(report: &Report, show_passes: bool) -> String {
    let mut rows = Vec::new();
    let mut levels = vec![Level::Error, Level::Warning];
    if show_passes {
        levels.push(Level::Pass);
    }
    for level in levels {
        rows.extend(report.findings(level).iter().map(|finding| row(level, finding)));
    }

    let mut sections = vec![output::table(&["level", "rule", "target", "detail"], &rows)];
    let failing = failing_rules(report);
    if !failing.is_empty() {
        sections.push(output::table(&["rule", "check", "errors", "warnings"], &failing));
    }

    let summary = report.summary();
    sections.push(format!(
        "{} errors, {} warnings, {} passes",
        summary.errors, summary.warnings, summary.passes
    ));
    sections.join("\n\n")
}

/// One row per rule with errors or warnings, in rule order.
fn failing_rules(report: &Report) -> Vec<Vec<String>> {
    RuleCode::ALL
        .into_iter()
        .filter_map(|rule| {
            let errors = report.by_rule(Level::Error, rule).count();
            let warnings = report.by_rule(Level::Warning, rule).count();
            (errors + warnings > 0).then(|| {
                vec![
                    rule.to_string(),
                    rule.title().to_string(),
                    errors.to_string(),
                    warnings.to_string(),
                ]
            })
        })
        .collect()
}

fn row(level: Level, finding: &Finding) -> Vec<String> {
    let level = match level {
        Level::Error => "error",
        Level::Warning => "warning",
        Level::Pass => "pass",
    };
    vec![
        level.to_string(),
        finding.rule.to_string(),
        finding.target.clone().unwrap_or_else(|| "-".to_string()),
        finding.detail.clone(),
    ]
}

#[cfg(test)]
mod tests {
    use mtx_rules::RuleCode;

    use super::*;

    fn sample() -> Report {
        let mut report = Report::default();
        report.error(RuleCode::UseCaseTitle, Some("UC-002"), "UC-002 has no title");
        report.pass(RuleCode::Structure, None, "schema_version is 1.0");
        report
    }

    #[test]
    fn passes_are_hidden_by_default() {
        let table = render_table(&sample(), false);
        assert!(table.contains("CR-07"));
        assert!(!table.contains("schema_version"));
        assert!(table.ends_with("1 errors, 0 warnings, 1 passes"));
    }

    #[test]
    fn failing_rules_are_summarized_with_their_title() {
        let mut report = sample();
        report.warn(RuleCode::Stack, None, "stack.orm is not declared");

        let rows = failing_rules(&report);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["CR-02", "Technology stack declared", "0", "1"]);
        assert_eq!(rows[1], vec!["CR-07", "Use case has a title", "1", "0"]);
    }

    #[test]
    fn passes_are_listed_on_request() {
        let table = render_table(&sample(), true);
        assert!(table.contains("schema_version is 1.0"));
    }
}
