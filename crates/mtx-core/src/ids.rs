//! ID and date pattern helpers.
//!
//! | Kind | Pattern | Example |
//! |------|---------|---------|
//! | Use case | `UC-` + 3 or more digits | `UC-007` |
//! | Decision | `ADR-` + 3 or more digits | `ADR-012` |
//! | Visual element | `Screen.Element`, both capitalized | `LoginPage.SubmitButton` |
//! | Date | `YYYY-MM-DD` | `2026-03-14` |

use std::sync::LazyLock;

use regex::Regex;

/// Visual id placeholder for elements that exist in the design but not yet in code.
pub const VISUAL_ID_PENDING: &str = "pending";

static USE_CASE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^UC-\d{3,}$").expect("use case id pattern compiles"));

static DECISION_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ADR-\d{3,}$").expect("decision id pattern compiles"));

static VISUAL_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z][A-Za-z0-9]*\.[A-Z][A-Za-z0-9]*$").expect("visual id pattern compiles")
});

static ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date pattern compiles"));

#[must_use]
pub fn is_use_case_id(value: &str) -> bool {
    USE_CASE_ID.is_match(value)
}

#[must_use]
pub fn is_decision_id(value: &str) -> bool {
    DECISION_ID.is_match(value)
}

/// True for the two-segment capitalized form. `pending` is handled by callers.
#[must_use]
pub fn is_visual_id(value: &str) -> bool {
    VISUAL_ID.is_match(value)
}

/// Shape check only; `2026-13-45` passes.
#[must_use]
pub fn is_iso_date(value: &str) -> bool {
    ISO_DATE.is_match(value)
}
