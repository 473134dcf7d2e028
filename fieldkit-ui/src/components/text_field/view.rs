//! Derived presentation for one render pass
//!
//! `FieldView::derive` is the single synchronous pass that turns props and
//! internal state into everything the renderer needs. It is pure, so the
//! whole decision surface is testable without a rendering environment.

use super::a11y::{bind_ids, described_by, toggle_label};
use super::affordance::{is_interactive, visible_affordances, Affordances, RightPadding};
use super::config::{non_empty, FieldConfig};
use super::state::FieldState;
use super::style::{resolve_style, StyleBucket};
use tracing::trace;

/// A description paragraph under the input (error or helper)
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FieldMessage {
    pub id: String,
    pub text: String,
}

#[derive(Clone, PartialEq, Debug)]
pub struct FieldView {
    pub input_id: String,
    pub label: String,
    pub required: bool,
    pub value: String,
    pub placeholder: Option<String>,
    pub name: Option<String>,
    pub autocomplete: Option<String>,
    /// `type` attribute of the input
    pub input_type: &'static str,
    pub interactive: bool,
    /// Tracks `invalid` directly, with or without a message
    pub aria_invalid: bool,
    pub described_by: Option<String>,
    pub busy: bool,
    /// Set only when the error text is visible
    pub error: Option<FieldMessage>,
    /// Set only when the helper text is visible
    pub helper: Option<FieldMessage>,
    pub affordances: Affordances,
    pub revealed: bool,
    pub toggle_label: &'static str,
    pub style: StyleBucket,
    pub padding: RightPadding,
}

impl FieldView {
    pub fn derive(config: &FieldConfig, state: &FieldState, generated_id: &str) -> Self {
        let ids = bind_ids(config.id.as_deref(), generated_id);
        let has_value = config.has_value();
        let show_error = config.show_error();
        let show_helper = config.show_helper();
        let interactive = is_interactive(config.disabled, config.loading);
        let rendered_kind = state.rendered_kind_for(config.kind);
        let revealed = config.kind.is_password() && rendered_kind != config.kind;

        let style = resolve_style(
            config.variant,
            config.size,
            !interactive,
            state.focused(),
            show_error,
        );
        let affordances = visible_affordances(config, has_value);

        trace!(
            id = %ids.input,
            interactive,
            show_error,
            show_helper,
            ?affordances,
            "derived text field view"
        );

        let error = show_error
            .then(|| non_empty(config.error_message.as_deref()))
            .flatten()
            .map(|text| FieldMessage {
                id: ids.error.clone(),
                text: text.to_string(),
            });
        let helper = show_helper
            .then(|| non_empty(config.helper_text.as_deref()))
            .flatten()
            .map(|text| FieldMessage {
                id: ids.helper.clone(),
                text: text.to_string(),
            });

        FieldView {
            described_by: described_by(show_error, show_helper, &ids),
            input_id: ids.input,
            label: config.label.clone(),
            required: config.required,
            value: config.value.clone(),
            placeholder: config.placeholder.clone(),
            name: config.name.clone(),
            autocomplete: config.autocomplete.clone(),
            input_type: rendered_kind.input_type(),
            interactive,
            aria_invalid: config.invalid,
            busy: affordances.loading,
            error,
            helper,
            affordances,
            revealed,
            toggle_label: toggle_label(revealed),
            style,
            padding: RightPadding::for_config(config),
        }
    }

    pub fn input_class(&self) -> String {
        self.style.input_class(self.padding)
    }
}
