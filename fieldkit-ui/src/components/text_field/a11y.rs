//! Accessibility wiring: element ids, description links, and stable labels
//!
//! The label strings below are relied on by screen-reader users and by test
//! suites that look controls up by accessible name. Changing them is a
//! breaking change.

use std::sync::atomic::{AtomicU64, Ordering};

pub const CLEAR_INPUT_LABEL: &str = "Clear input";
pub const SHOW_PASSWORD_LABEL: &str = "Show password";
pub const HIDE_PASSWORD_LABEL: &str = "Hide password";
pub const LOADING_LABEL: &str = "Loading";

/// Counter for generating unique field IDs
static FIELD_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Fresh id for a newly mounted field. Call once per mount (`use_hook`).
pub fn generate_instance_id() -> String {
    let id = FIELD_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("text-field-{}", id)
}

/// Ids of the input and its two description elements
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FieldIds {
    pub input: String,
    pub error: String,
    pub helper: String,
}

/// An explicit, non-empty id wins over the generated one.
pub fn bind_ids(explicit: Option<&str>, generated: &str) -> FieldIds {
    let input = explicit
        .filter(|id| !id.is_empty())
        .unwrap_or(generated)
        .to_string();
    FieldIds {
        error: format!("{input}-error"),
        helper: format!("{input}-helper"),
        input,
    }
}

/// Target for `aria-describedby`. Error wins over helper; they never combine.
pub fn described_by(show_error: bool, show_helper: bool, ids: &FieldIds) -> Option<String> {
    if show_error {
        Some(ids.error.clone())
    } else if show_helper {
        Some(ids.helper.clone())
    } else {
        None
    }
}

/// Accessible name of the visibility toggle for the current reveal state
pub fn toggle_label(revealed: bool) -> &'static str {
    if revealed {
        HIDE_PASSWORD_LABEL
    } else {
        SHOW_PASSWORD_LABEL
    }
}
