//! Which embedded affordances a text field shows, and whether it accepts input

use super::config::FieldConfig;
use tracing::debug;

/// Affordances visible for one render pass
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Affordances {
    pub loading: bool,
    pub clear: bool,
    pub toggle: bool,
}

impl Affordances {
    pub fn any(&self) -> bool {
        self.loading || self.clear || self.toggle
    }
}

/// Loading takes exclusive priority; clear and toggle also hide on disabled fields.
pub fn visible_affordances(config: &FieldConfig, has_value: bool) -> Affordances {
    if config.loading {
        return Affordances {
            loading: true,
            clear: false,
            toggle: false,
        };
    }

    Affordances {
        loading: false,
        clear: config.show_clear_button && has_value && !config.disabled,
        toggle: config.kind.is_password() && config.show_password_toggle && !config.disabled,
    }
}

pub fn is_interactive(disabled: bool, loading: bool) -> bool {
    !(disabled || loading)
}

/// Space reserved on the right of the input for embedded affordances
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RightPadding {
    None,
    Single,
    Double,
}

impl RightPadding {
    /// Reserved from eligibility rather than momentary visibility, so text does
    /// not reflow when the value empties or the field is disabled.
    pub fn for_config(config: &FieldConfig) -> Self {
        let toggle_eligible = config.kind.is_password() && config.show_password_toggle;
        if !config.loading && config.show_clear_button && toggle_eligible {
            RightPadding::Double
        } else if config.loading || config.show_clear_button || toggle_eligible {
            RightPadding::Single
        } else {
            RightPadding::None
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            RightPadding::None => "",
            RightPadding::Single => "pr-10",
            RightPadding::Double => "pr-16",
        }
    }
}

/// Ask the owner to empty the field. Returns whether the request was sent.
pub fn request_clear(interactive: bool, notify: impl FnOnce(String)) -> bool {
    if !interactive {
        debug!("clear ignored on non-interactive field");
        return false;
    }
    debug!("clearing text field value");
    notify(String::new());
    true
}

/// Forward one change event from the input to the owner.
pub fn forward_input(interactive: bool, value: String, notify: impl FnOnce(String)) -> bool {
    if !interactive {
        return false;
    }
    notify(value);
    true
}
