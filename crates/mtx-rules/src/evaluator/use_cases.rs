use std::collections::HashMap;

use mtx_core::entities::UseCaseSlot;
use mtx_core::enums::UseCaseStatus;
use mtx_core::{Document, ids};

use super::filled;
use crate::code::RuleCode;
use crate::report::Report;

pub(super) fn check(document: &Document, report: &mut Report) {
    check_ids(document, report);

    for use_case in document.active_use_cases() {
        let target = use_case.id.as_deref();
        let label = use_case.label();

        match &use_case.status {
            None => report.error(
                RuleCode::UseCaseStatus,
                target,
                format!("{label} has no status"),
            ),
            Some(UseCaseStatus::Unknown(raw)) => report.error(
                RuleCode::UseCaseStatus,
                target,
                format!(
                    "{label} has status `{raw}`; expected one of {}",
                    known_statuses()
                ),
            ),
            Some(_) => {}
        }

        if filled(use_case.title.as_ref()).is_none() {
            report.error(
                RuleCode::UseCaseTitle,
                target,
                format!("{label} has no title"),
            );
        }

        if filled(use_case.value_statement.as_ref()).is_some() {
            report.pass(
                RuleCode::ValueStatement,
                target,
                format!("{label} states its business value"),
            );
        } else {
            report.error(
                RuleCode::ValueStatement,
                target,
                format!("{label} has no value statement: say who benefits and why"),
            );
        }
    }
}

/// Ids must be present, unique across active and deprecated lists, and shaped `UC-NNN`.
fn check_ids(document: &Document, report: &mut Report) {
    let mut order: Vec<&str> = Vec::new();
    let mut slots: HashMap<&str, Vec<UseCaseSlot>> = HashMap::new();

    // Entries that failed to parse still claim their id.
    let mut located: Vec<(UseCaseSlot, Option<&str>)> = document
        .located_use_cases()
        .map(|(slot, use_case)| (slot, filled(use_case.id.as_ref())))
        .chain(document.rejected_use_cases().iter().filter_map(|rejected| {
            rejected
                .id()
                .map(|id| (UseCaseSlot::Active(rejected.index), Some(id)))
        }))
        .collect();
    located.sort_by_key(|(slot, _)| *slot);

    for (slot, id) in located {
        let Some(id) = id else {
            report.error(
                RuleCode::UseCaseId,
                None,
                format!("use case at {slot} has no id"),
            );
            continue;
        };

        if !ids::is_use_case_id(id) {
            report.warn(
                RuleCode::UseCaseId,
                Some(id),
                format!("{id} does not match the UC-NNN id format"),
            );
        }

        slots
            .entry(id)
            .or_insert_with(|| {
                order.push(id);
                Vec::new()
            })
            .push(slot);
    }

    let mut duplicated = 0usize;
    for id in &order {
        let places = &slots[id];
        if places.len() > 1 {
            duplicated += 1;
            let listed = places
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            report.error(
                RuleCode::UseCaseId,
                Some(id),
                format!(
                    "duplicate use case id {id} appears {} times: {listed}",
                    places.len()
                ),
            );
        }
    }

    let complete = document.rejected_use_cases().is_empty();
    if duplicated == 0 && complete && !order.is_empty() {
        report.pass(
            RuleCode::UseCaseId,
            None,
            format!("{} use case ids are unique", order.len()),
        );
    }
}

fn known_statuses() -> String {
    UseCaseStatus::KNOWN
        .iter()
        .map(UseCaseStatus::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
