//! Evaluation report: three ordered lists of findings.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::code::RuleCode;

/// How a finding is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Error,
    Warning,
    Pass,
}

/// A single observation made by a rule. Findings never reference each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Finding {
    pub rule: RuleCode,
    pub detail: String,
    /// Id of the entity the finding is about, when there is one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

/// Accumulated findings of one evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Report {
    pub errors: Vec<Finding>,
    pub warnings: Vec<Finding>,
    pub passes: Vec<Finding>,
}

/// Finding counts per level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReportSummary {
    pub errors: usize,
    pub warnings: usize,
    pub passes: usize,
}

impl Report {
    /// Report for a document that could not be loaded. No rule runs after this.
    #[must_use]
    pub fn load_failure(reason: impl Into<String>) -> Self {
        let mut report = Self::default();
        report.error(RuleCode::Load, None, reason);
        report
    }

    pub fn push(&mut self, level: Level, finding: Finding) {
        match level {
            Level::Error => self.errors.push(finding),
            Level::Warning => self.warnings.push(finding),
            Level::Pass => self.passes.push(finding),
        }
    }

    pub fn error(&mut self, rule: RuleCode, target: Option<&str>, detail: impl Into<String>) {
        self.record(Level::Error, rule, target, detail);
    }

    pub fn warn(&mut self, rule: RuleCode, target: Option<&str>, detail: impl Into<String>) {
        self.record(Level::Warning, rule, target, detail);
    }

    pub fn pass(&mut self, rule: RuleCode, target: Option<&str>, detail: impl Into<String>) {
        self.record(Level::Pass, rule, target, detail);
    }

    fn record(&mut self, level: Level, rule: RuleCode, target: Option<&str>, detail: impl Into<String>) {
        self.push(
            level,
            Finding {
                rule,
                detail: detail.into(),
                target: target.map(str::to_string),
            },
        );
    }

    #[must_use]
    pub fn findings(&self, level: Level) -> &[Finding] {
        match level {
            Level::Error => &self.errors,
            Level::Warning => &self.warnings,
            Level::Pass => &self.passes,
        }
    }

    /// Findings of one level raised by one rule.
    pub fn by_rule(&self, level: Level, rule: RuleCode) -> impl Iterator<Item = &Finding> {
        self.findings(level)
            .iter()
            .filter(move |finding| finding.rule == rule)
    }

    /// True when no error was reported.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            errors: self.errors.len(),
            warnings: self.warnings.len(),
            passes: self.passes.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn load_failure_is_a_single_error() {
        let report = Report::load_failure("expected value at line 1 column 1");
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].rule, RuleCode::Load);
        assert!(report.warnings.is_empty());
        assert!(report.passes.is_empty());
        assert!(!report.is_clean());
    }

    #[test]
    fn findings_land_in_their_level() {
        let mut report = Report::default();
        report.error(RuleCode::Structure, None, "missing");
        report.warn(RuleCode::Stack, None, "undeclared");
        report.pass(RuleCode::NoFake, Some("UC-001"), "ok");

        assert_eq!(
            report.summary(),
            ReportSummary {
                errors: 1,
                warnings: 1,
                passes: 1
            }
        );
        assert_eq!(report.passes[0].target.as_deref(), Some("UC-001"));
        assert_eq!(report.by_rule(Level::Warning, RuleCode::Stack).count(), 1);
    }

    #[test]
    fn target_is_omitted_from_json_when_absent() {
        let mut report = Report::default();
        report.error(RuleCode::Structure, None, "missing");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["errors"][0]["rule"], "CR-01");
        assert!(json["errors"][0].get("target").is_none());
    }
}
