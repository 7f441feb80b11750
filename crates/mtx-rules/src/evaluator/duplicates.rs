use std::collections::HashMap;

use mtx_core::Document;
use mtx_core::entities::normalize_route;

use super::filled;
use crate::code::RuleCode;
use crate::report::Report;

const RULE: RuleCode = RuleCode::NoDuplicate;

/// Function names and endpoint strings must be unique across the whole
/// document, deprecated use cases included. A repeat inside the same use case
/// is reported too.
pub(super) fn check(document: &Document, report: &mut Report) {
    let mut names: HashMap<&str, &str> = HashMap::new();
    let mut routes: HashMap<String, &str> = HashMap::new();
    let mut name_dupes = 0usize;
    let mut route_dupes = 0usize;

    for use_case in document.all_use_cases() {
        let owner = use_case.label();
        for function in &use_case.functions {
            if let Some(name) = filled(function.name.as_ref()) {
                match names.get(name) {
                    Some(first) if *first == owner => {
                        name_dupes += 1;
                        report.error(
                            RULE,
                            use_case.id.as_deref(),
                            format!("function {name} is listed twice in {owner}"),
                        );
                    }
                    Some(first) => {
                        name_dupes += 1;
                        report.error(
                            RULE,
                            use_case.id.as_deref(),
                            format!("function {name} is claimed by both {first} and {owner}"),
                        );
                    }
                    None => {
                        names.insert(name, owner);
                    }
                }
            }

            if let Some(endpoint) = filled(function.endpoint.as_ref()) {
                let route = normalize_route(endpoint);
                match routes.get(&route) {
                    Some(first) => {
                        route_dupes += 1;
                        let detail = if *first == owner {
                            format!("endpoint {route} is served twice in {owner}")
                        } else {
                            format!("endpoint {route} is served by both {first} and {owner}")
                        };
                        report.error(RULE, use_case.id.as_deref(), detail);
                    }
                    None => {
                        routes.insert(route, owner);
                    }
                }
            }
        }
    }

    // Skipped entries may hide duplicates, so uniqueness is not claimed.
    if !document.rejected_use_cases().is_empty() {
        return;
    }
    if name_dupes == 0 {
        report.pass(
            RULE,
            None,
            format!("{} function names are unique", names.len()),
        );
    }
    if route_dupes == 0 {
        report.pass(RULE, None, format!("{} endpoints are unique", routes.len()));
    }
}
