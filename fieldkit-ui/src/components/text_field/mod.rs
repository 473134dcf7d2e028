//! Labeled single-line text field
//!
//! Fully controlled: the parent passes `value` and receives every requested
//! change through `on_change`. The field only keeps focus and password-reveal
//! state of its own.
//!
//! ```ignore
//! let mut password = use_signal(String::new);
//!
//! rsx! {
//!     TextField {
//!         label: "Password",
//!         value: password(),
//!         on_change: move |v| password.set(v),
//!         kind: FieldKind::Password,
//!         show_password_toggle: true,
//!         show_clear_button: true,
//!     }
//! }
//! ```

pub mod a11y;
pub mod affordance;
pub mod config;
pub mod state;
pub mod style;
pub mod view;

use std::rc::Rc;

use crate::components::icons::{EyeIcon, EyeOffIcon, LoaderIcon, XIcon};
use a11y::{generate_instance_id, CLEAR_INPUT_LABEL, LOADING_LABEL};
use affordance::{forward_input, is_interactive, request_clear};
use config::{FieldConfig, FieldKind, FieldSize, FieldVariant};
use dioxus::prelude::*;
use state::FieldState;
use view::FieldView;

#[derive(Clone, PartialEq, Props)]
pub struct TextFieldProps {
    /// Current value, owned by the parent
    #[props(default, into)]
    pub value: String,
    /// Called with the candidate value on every keystroke and on clear
    pub on_change: EventHandler<String>,
    #[props(into)]
    pub label: String,
    #[props(default, into)]
    pub placeholder: Option<String>,
    #[props(default, into)]
    pub helper_text: Option<String>,
    /// Shown only while `invalid` is set
    #[props(default, into)]
    pub error_message: Option<String>,
    #[props(default)]
    pub disabled: bool,
    #[props(default)]
    pub invalid: bool,
    #[props(default)]
    pub loading: bool,
    #[props(default)]
    pub variant: FieldVariant,
    #[props(default)]
    pub size: FieldSize,
    #[props(default)]
    pub kind: FieldKind,
    #[props(default)]
    pub show_clear_button: bool,
    #[props(default)]
    pub show_password_toggle: bool,
    #[props(default)]
    pub required: bool,
    /// Explicit input id; generated per instance when absent
    #[props(default, into)]
    pub id: Option<String>,
    #[props(default, into)]
    pub name: Option<String>,
    #[props(default, into)]
    pub autocomplete: Option<String>,
    /// Focus the input once it is mounted
    #[props(default)]
    pub autofocus: bool,
    /// Extra classes for the outer wrapper
    #[props(default, into)]
    pub class: Option<String>,
}

impl TextFieldProps {
    pub fn config(&self) -> FieldConfig {
        FieldConfig {
            value: self.value.clone(),
            label: self.label.clone(),
            placeholder: self.placeholder.clone(),
            helper_text: self.helper_text.clone(),
            error_message: self.error_message.clone(),
            disabled: self.disabled,
            invalid: self.invalid,
            loading: self.loading,
            variant: self.variant,
            size: self.size,
            kind: self.kind,
            show_clear_button: self.show_clear_button,
            show_password_toggle: self.show_password_toggle,
            required: self.required,
            id: self.id.clone(),
            name: self.name.clone(),
            autocomplete: self.autocomplete.clone(),
        }
    }
}

/// Text field with label, description text, and optional clear/reveal affordances
#[component]
pub fn TextField(props: TextFieldProps) -> Element {
    let generated_id = use_hook(generate_instance_id);
    let mut state = use_signal(|| FieldState::new(props.kind));
    let mut input_handle: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    // Kind watcher: an external kind change drops any reveal in progress
    let kind = props.kind;
    use_effect(use_reactive!(|(kind,)| {
        if state.peek().kind() != kind {
            state.write().sync_kind(kind);
        }
    }));

    // A disabled input may never see `blur`, so focus is dropped here instead
    let interactive = is_interactive(props.disabled, props.loading);
    use_effect(use_reactive!(|(interactive,)| {
        if !interactive && state.peek().focused() {
            state.write().sync_interactive(interactive);
        }
    }));

    let view = FieldView::derive(&props.config(), &state.read(), &generated_id);

    let on_change = props.on_change;
    let autofocus = props.autofocus;
    let input_class = view.input_class();
    let label_class = view.style.label_class();
    let icon_class = view.style.icon_class();
    let error_class = view.style.error_class();
    let helper_class = view.style.helper_class();
    let wrapper_class = match &props.class {
        Some(extra) => format!("w-full {extra}"),
        None => "w-full".to_string(),
    };

    rsx! {
        div { class: "{wrapper_class}",
            label { r#for: "{view.input_id}", class: "{label_class}",
                "{view.label}"
                if view.required {
                    span { class: "ml-0.5 text-red-400", aria_hidden: "true", "*" }
                }
            }
            div { class: "relative",
                input {
                    id: "{view.input_id}",
                    class: "{input_class}",
                    r#type: view.input_type,
                    value: "{view.value}",
                    name: view.name.as_deref(),
                    placeholder: view.placeholder.as_deref(),
                    autocomplete: view.autocomplete.as_deref(),
                    disabled: !interactive,
                    required: view.required,
                    aria_required: if view.required { Some("true") } else { None },
                    aria_invalid: if view.aria_invalid { "true" } else { "false" },
                    aria_describedby: view.described_by.as_deref(),
                    aria_busy: if view.busy { Some("true") } else { None },
                    oninput: move |e| {
                        forward_input(interactive, e.value(), |v| on_change.call(v));
                    },
                    onfocus: move |_| state.write().on_focus(),
                    onblur: move |_| state.write().on_blur(),
                    onmounted: move |event| async move {
                        let handle = event.data();
                        input_handle.set(Some(handle.clone()));
                        if autofocus {
                            let _ = handle.set_focus(true).await;
                        }
                    },
                }
                if view.affordances.any() {
                    div { class: "absolute inset-y-0 right-0 flex items-center gap-1 pr-2",
                        if view.affordances.loading {
                            span {
                                role: "status",
                                aria_label: LOADING_LABEL,
                                class: "inline-flex text-gray-400 animate-spin",
                                LoaderIcon { class: icon_class }
                            }
                        }
                        if view.affordances.clear {
                            AffordanceButton {
                                label: CLEAR_INPUT_LABEL,
                                onclick: move |_| {
                                    if request_clear(interactive, |v| on_change.call(v)) {
                                        spawn(async move {
                                            let handle = input_handle.peek().clone();
                                            if let Some(handle) = handle {
                                                let _ = handle.set_focus(true).await;
                                            }
                                        });
                                    }
                                },
                                XIcon { class: icon_class }
                            }
                        }
                        if view.affordances.toggle {
                            AffordanceButton {
                                label: view.toggle_label,
                                pressed: Some(view.revealed),
                                onclick: move |_| state.write().toggle_visibility(),
                                if view.revealed {
                                    EyeOffIcon { class: icon_class }
                                } else {
                                    EyeIcon { class: icon_class }
                                }
                            }
                        }
                    }
                }
            }
            if let Some(error) = &view.error {
                p {
                    id: "{error.id}",
                    role: "alert",
                    class: "{error_class}",
                    "{error.text}"
                }
            } else if let Some(helper) = &view.helper {
                p { id: "{helper.id}", class: "{helper_class}", "{helper.text}" }
            }
        }
    }
}

/// Icon button embedded in the field.
///
/// Mouse-down is swallowed so clicking it does not steal focus from the input.
#[component]
fn AffordanceButton(
    label: &'static str,
    #[props(default)] pressed: Option<bool>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: "p-0.5 rounded text-gray-400 hover:text-white transition-colors focus:outline-none focus-visible:ring-1 focus-visible:ring-accent/50",
            aria_label: label,
            title: label,
            aria_pressed: pressed.map(|p| if p { "true" } else { "false" }),
            onmousedown: move |e: MouseEvent| e.prevent_default(),
            onclick: move |e| onclick.call(e),
            {children}
        }
    }
}
