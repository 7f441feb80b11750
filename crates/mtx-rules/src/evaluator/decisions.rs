use mtx_core::Document;
use mtx_core::enums::DecisionStatus;
use mtx_core::ids::is_decision_id;

use super::filled;
use crate::code::RuleCode;
use crate::report::Report;

const RULE: RuleCode = RuleCode::DecisionRecord;

/// Architecture decision records need an id, the decision, and its context.
pub(super) fn check(document: &Document, report: &mut Report) {
    for (index, decision) in document.decisions.iter().enumerate() {
        let id = decision.id.as_deref();
        let label = id.map_or_else(|| format!("decisions[{index}]"), str::to_string);
        let mut complete = true;

        match id {
            None => {
                complete = false;
                report.error(RULE, None, format!("{label} has no id"));
            }
            Some(value) if !is_decision_id(value) => {
                report.warn(RULE, id, format!("{value:?} is not of the form ADR-NNN"));
            }
            Some(_) => {}
        }

        if filled(decision.decision.as_ref()).is_none() {
            complete = false;
            report.error(RULE, id, format!("{label} does not state the decision"));
        }
        if filled(decision.context.as_ref()).is_none() {
            complete = false;
            report.error(RULE, id, format!("{label} has no context"));
        }

        match &decision.status {
            None => report.warn(RULE, id, format!("{label} has no status")),
            Some(status) if !status.is_known() => {
                let known: Vec<&str> = DecisionStatus::KNOWN
                    .iter()
                    .map(DecisionStatus::as_str)
                    .collect();
                report.warn(
                    RULE,
                    id,
                    format!(
                        "{label} status {:?} is not one of {}",
                        status.as_str(),
                        known.join(", ")
                    ),
                );
            }
            Some(_) => {}
        }

        if decision.alternatives.is_empty() {
            report.warn(RULE, id, format!("{label} lists no alternatives considered"));
        }

        if complete {
            report.pass(RULE, id, format!("{label} is recorded"));
        }
    }
}
