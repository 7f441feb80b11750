//! Graph violation classifier.
//!
//! Classifies data-governance risk on the flattened graph of tables,
//! endpoints, and discovered functions. Every finding carries a fixed
//! severity derived from its code, so display layers can collapse findings
//! per entity with [`worst_severity`].

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use mtx_core::entities::normalize_route;
use mtx_core::{DbTable, Document, Endpoint, FunctionEntity, Graph, Retention};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Ordered so that `max` picks the worst.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Table,
    Endpoint,
    Function,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ViolationCode {
    #[serde(rename = "NO_OWNER")]
    NoOwner,
    #[serde(rename = "PII_WITHOUT_AUDIT")]
    PiiWithoutAudit,
    #[serde(rename = "NO_RETENTION")]
    NoRetention,
    #[serde(rename = "RETENTION_INDEFINITE")]
    RetentionIndefinite,
    #[serde(rename = "GHOST_ENDPOINT")]
    GhostEndpoint,
    #[serde(rename = "GHOST_FUNCTION")]
    GhostFunction,
}

impl ViolationCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoOwner => "NO_OWNER",
            Self::PiiWithoutAudit => "PII_WITHOUT_AUDIT",
            Self::NoRetention => "NO_RETENTION",
            Self::RetentionIndefinite => "RETENTION_INDEFINITE",
            Self::GhostEndpoint => "GHOST_ENDPOINT",
            Self::GhostFunction => "GHOST_FUNCTION",
        }
    }

    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::NoOwner | Self::PiiWithoutAudit => Severity::Critical,
            Self::NoRetention | Self::GhostEndpoint | Self::GhostFunction => Severity::Warning,
            Self::RetentionIndefinite => Severity::Info,
        }
    }
}

impl fmt::Display for ViolationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One risk observed on a graph entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GraphFinding {
    pub code: ViolationCode,
    pub severity: Severity,
    pub entity_id: String,
    pub entity_kind: EntityKind,
    pub detail: String,
    /// Suggested remedy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix: Option<String>,
}

impl GraphFinding {
    fn new(code: ViolationCode, kind: EntityKind, id: &str, detail: String) -> Self {
        Self {
            code,
            severity: code.severity(),
            entity_id: id.to_string(),
            entity_kind: kind,
            detail,
            fix: None,
        }
    }

    fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }
}

/// Classify every table, endpoint, and discovered function in `document`.
///
/// Findings come out in graph order: tables, then endpoints, then functions.
#[must_use]
pub fn classify(document: &Document) -> Vec<GraphFinding> {
    let graph = Graph::collect(document);

    let mut served = HashSet::new();
    let mut named = HashSet::new();
    for use_case in document.all_use_cases() {
        for function in &use_case.functions {
            if let Some(endpoint) = function.endpoint.as_deref() {
                served.insert(normalize_route(endpoint));
            }
            if let Some(name) = function.name.as_deref() {
                named.insert(name.trim());
            }
        }
    }

    let mut findings = Vec::new();
    for table in &graph.tables {
        classify_table(table, &mut findings);
    }
    for endpoint in &graph.endpoints {
        classify_endpoint(endpoint, &served, &mut findings);
    }
    for function in &graph.functions {
        classify_function(function, &named, &mut findings);
    }

    tracing::debug!(findings = findings.len(), "classified graph");
    findings
}

fn classify_table(table: &DbTable, findings: &mut Vec<GraphFinding>) {
    let id = table.id.as_str();
    let label = table.label();

    if table.owner.as_deref().is_none_or(|owner| owner.trim().is_empty()) {
        findings.push(
            GraphFinding::new(
                ViolationCode::NoOwner,
                EntityKind::Table,
                id,
                format!("table {label} has no owner"),
            )
            .with_fix(format!(
                "set \"owner\" on {id} to the team accountable for its data"
            )),
        );
    }

    if !table.pii_fields.is_empty() && !table.audit {
        findings.push(
            GraphFinding::new(
                ViolationCode::PiiWithoutAudit,
                EntityKind::Table,
                id,
                format!(
                    "table {label} holds PII ({}) without an audit trail",
                    table.pii_fields.join(", ")
                ),
            )
            .with_fix(format!("enable auditing on {id}")),
        );
    }

    match table.retention_days {
        Retention::Unset => findings.push(
            GraphFinding::new(
                ViolationCode::NoRetention,
                EntityKind::Table,
                id,
                format!("table {label} has no retention policy"),
            )
            .with_fix(format!(
                "set \"retention_days\" on {id}, or null to keep rows indefinitely"
            )),
        ),
        Retention::NoPolicy => findings.push(GraphFinding::new(
            ViolationCode::RetentionIndefinite,
            EntityKind::Table,
            id,
            format!("table {label} keeps rows indefinitely"),
        )),
        Retention::Days(_) => {}
    }
}

fn classify_endpoint(
    endpoint: &Endpoint,
    served: &HashSet<String>,
    findings: &mut Vec<GraphFinding>,
) {
    let route = normalize_route(&endpoint.route);
    if served.contains(&route) {
        return;
    }
    findings.push(
        GraphFinding::new(
            ViolationCode::GhostEndpoint,
            EntityKind::Endpoint,
            &endpoint.id,
            format!("endpoint {route} is not served by any use case function"),
        )
        .with_fix(format!(
            "link {route} to a function record, or remove the endpoint"
        )),
    );
}

fn classify_function(
    function: &FunctionEntity,
    named: &HashSet<&str>,
    findings: &mut Vec<GraphFinding>,
) {
    if named.contains(function.name.trim()) {
        return;
    }
    findings.push(GraphFinding::new(
        ViolationCode::GhostFunction,
        EntityKind::Function,
        &function.id,
        format!(
            "function {} is not listed by any use case",
            function.name.trim()
        ),
    ));
}

/// Findings about one entity, in classification order.
#[must_use]
pub fn findings_for_entity<'a>(findings: &'a [GraphFinding], id: &str) -> Vec<&'a GraphFinding> {
    findings
        .iter()
        .filter(|finding| finding.entity_id == id)
        .collect()
}

/// The single severity to display for a set of findings: the worst one, or
/// `None` when there are no findings.
pub fn worst_severity<'a, I>(findings: I) -> Option<Severity>
where
    I: IntoIterator<Item = &'a GraphFinding>,
{
    findings.into_iter().map(|finding| finding.severity).max()
}

/// Worst severity per entity id, for every entity with at least one finding.
#[must_use]
pub fn severity_by_entity(findings: &[GraphFinding]) -> BTreeMap<String, Severity> {
    let mut worst: BTreeMap<String, Severity> = BTreeMap::new();
    for finding in findings {
        worst
            .entry(finding.entity_id.clone())
            .and_modify(|severity| *severity = (*severity).max(finding.severity))
            .or_insert(finding.severity);
    }
    worst
}
