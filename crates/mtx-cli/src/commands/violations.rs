use std::collections::BTreeMap;

use anyhow::Context;
use mtx_rules::{
    GraphFinding, Severity, classify, findings_for_entity, severity_by_entity, worst_severity,
};
use serde::Serialize;

use crate::cli::root_commands::ViolationsArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output;

#[derive(Debug, Serialize)]
struct EntityViolations<'a> {
    entity: &'a str,
    severity: Option<Severity>,
    findings: Vec<&'a GraphFinding>,
}

#[derive(Debug, Serialize)]
struct AllViolations<'a> {
    findings: &'a [GraphFinding],
    severity_by_entity: BTreeMap<String, Severity>,
}

/// Handle `mtx violations`.
pub fn handle(args: &ViolationsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let document = ctx
        .load_document()
        .with_context(|| format!("failed to load {}", ctx.matrix_path().display()))?;
    let findings = classify(&document);

    if let Some(entity) = args.entity.as_deref() {
        let response = for_entity(&findings, entity);
        return match flags.format {
            OutputFormat::Table => {
                println!(
                    "{}\n\n{}",
                    output::table(HEADERS, &rows(response.findings.iter().copied())),
                    response.summary_line()
                );
                Ok(())
            }
            format => output::output(&response, format),
        };
    }

    let response = AllViolations {
        severity_by_entity: severity_by_entity(&findings),
        findings: &findings,
    };
    match flags.format {
        OutputFormat::Table => {
            println!("{}", output::table(HEADERS, &rows(findings.iter())));
            if !response.severity_by_entity.is_empty() {
                let summary = response
                    .severity_by_entity
                    .iter()
                    .map(|(entity, severity)| vec![entity.clone(), severity.to_string()])
                    .collect::<Vec<_>>();
                println!("\n{}", output::table(&["entity", "severity"], &summary));
            }
            Ok(())
        }
        format => output::output(&response, format),
    }
}

fn for_entity<'a>(findings: &'a [GraphFinding], entity: &'a str) -> EntityViolations<'a> {
    let selected = findings_for_entity(findings, entity);
    EntityViolations {
        entity,
        severity: worst_severity(selected.iter().copied()),
        findings: selected,
    }
}

impl EntityViolations<'_> {
    fn summary_line(&self) -> String {
        let severity = self.severity.map_or("none", Severity::as_str);
        format!("{}: {severity}", self.entity)
    }
}

const HEADERS: &[&str] = &["severity", "code", "entity", "detail", "fix"];

fn rows<'a>(findings: impl Iterator<Item = &'a GraphFinding>) -> Vec<Vec<String>> {
    findings
        .map(|finding| {
            vec![
                finding.severity.to_string(),
                finding.code.to_string(),
                finding.entity_id.clone(),
                finding.detail.clone(),
                finding.fix.clone().unwrap_or_else(|| "-".to_string()),
            ]
        })
        .collect()
}
