//! TextField mock component

use super::framework::{ControlRegistryBuilder, MockPanel, Preset};
use crate::Route;
use dioxus::prelude::*;
use fieldkit_ui::{FieldKind, FieldSize, FieldVariant, ParseOptionError, TextField};
use std::str::FromStr;
use tracing::warn;

/// Parse a control value, falling back to the default on unknown names
fn parse_or_default<T>(raw: &str) -> T
where
    T: FromStr<Err = ParseOptionError> + Default,
{
    raw.parse().unwrap_or_else(|e: ParseOptionError| {
        warn!("{}, using default", e);
        T::default()
    })
}

#[component]
pub fn TextFieldMock(initial_state: Option<String>) -> Element {
    let registry = ControlRegistryBuilder::new()
        .enum_control(
            "variant",
            "Variant",
            "outlined",
            vec![
                ("filled", "Filled"),
                ("outlined", "Outlined"),
                ("ghost", "Ghost"),
            ],
        )
        .enum_control(
            "size",
            "Size",
            "medium",
            vec![("small", "Small"), ("medium", "Medium"), ("large", "Large")],
        )
        .enum_control(
            "kind",
            "Kind",
            "text",
            vec![
                ("text", "Text"),
                ("password", "Password"),
                ("email", "Email"),
                ("number", "Number"),
            ],
        )
        .string_control("label", "Label", "Email address")
        .string_control("helper", "Helper text", "We'll never share your email")
        .string_control("error", "Error message", "Enter a valid email address")
        .bool_control("disabled", "Disabled", false)
        .bool_control("invalid", "Invalid", false)
        .doc("Error text only shows when a message is set; aria-invalid follows this flag alone")
        .bool_control("loading", "Loading", false)
        .bool_control("required", "Required", false)
        .bool_control("clear", "Clear button", true)
        .bool_control("toggle", "Password toggle", true)
        .visible_when("kind", "password")
        .with_presets(vec![
            Preset::new("Default"),
            Preset::new("Password")
                .set_string("kind", "password")
                .set_string("label", "Password")
                .set_string("helper", "At least 12 characters"),
            Preset::new("Error")
                .set_bool("invalid", true)
                .set_bool("required", true),
            Preset::new("Invalid, no message")
                .set_bool("invalid", true)
                .set_string("error", ""),
            Preset::new("Loading").set_bool("loading", true),
            Preset::new("Disabled").set_bool("disabled", true),
            Preset::new("Ghost Search")
                .set_string("variant", "ghost")
                .set_string("label", "Search")
                .set_string("helper", ""),
        ])
        .build(initial_state);

    registry.use_url_sync(|state| Route::MockTextField { state });

    let variant: FieldVariant = parse_or_default(&registry.get_string("variant"));
    let size: FieldSize = parse_or_default(&registry.get_string("size"));
    let kind: FieldKind = parse_or_default(&registry.get_string("kind"));
    let label = registry.get_string("label");
    let helper = registry.get_text("helper");
    let error = registry.get_text("error");
    let disabled = registry.get_bool("disabled");
    let invalid = registry.get_bool("invalid");
    let loading = registry.get_bool("loading");
    let required = registry.get_bool("required");
    let clear = registry.get_bool("clear");
    let toggle = registry.get_bool("toggle");

    let mut value = use_signal(|| "listener@example.com".to_string());
    let mut change_count = use_signal(|| 0usize);
    let current_value = value();
    let notifications = change_count();

    rsx! {
        MockPanel { title: "TextField".to_string(), registry,
            div { class: "p-8 bg-gray-900 min-h-full",
                // Interactive demo
                div { class: "mb-8",
                    h3 { class: "text-sm text-gray-400 mb-3", "Interactive Demo" }
                    div { class: "max-w-md",
                        TextField {
                            label,
                            value: current_value.clone(),
                            on_change: move |v| {
                                value.set(v);
                                change_count += 1;
                            },
                            placeholder: "you@example.com",
                            helper_text: helper,
                            error_message: error,
                            variant,
                            size,
                            kind,
                            disabled,
                            invalid,
                            loading,
                            required,
                            show_clear_button: clear,
                            show_password_toggle: toggle,
                            name: "email",
                            autocomplete: "email",
                        }
                    }
                    p { class: "mt-3 text-xs text-gray-500 font-mono",
                        "value = {current_value:?}, change notifications = {notifications}"
                    }
                }

                // All variants
                div { class: "mb-8",
                    h3 { class: "text-sm text-gray-400 mb-3", "Variants" }
                    div { class: "grid grid-cols-3 gap-4",
                        for v in FieldVariant::ALL {
                            TextField {
                                label: v.to_string(),
                                value: "The Midnight Signal",
                                on_change: move |_| {},
                                variant: v,
                                size,
                            }
                        }
                    }
                }

                // Sizes
                div { class: "mb-8",
                    h3 { class: "text-sm text-gray-400 mb-3", "Sizes" }
                    div { class: "space-y-3 max-w-md",
                        for s in FieldSize::ALL {
                            TextField {
                                label: s.to_string(),
                                value: "",
                                on_change: move |_| {},
                                placeholder: "Search artist or album...",
                                helper_text: "Helper text scales with the field",
                                variant,
                                size: s,
                            }
                        }
                    }
                }

                // Use case: sign-in form
                div { class: "mb-8",
                    h3 { class: "text-sm text-gray-400 mb-3", "Use Case: Sign In" }
                    SignInExample { variant }
                }
            }
        }
    }
}

/// Two fields wired to local state, showing the password toggle and validation
#[component]
fn SignInExample(variant: FieldVariant) -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let email_invalid = !email().is_empty() && !email().contains('@');

    rsx! {
        div { class: "bg-gray-800/20 rounded-lg p-4 max-w-md space-y-4",
            TextField {
                label: "Email",
                value: email(),
                on_change: move |v| email.set(v),
                kind: FieldKind::Email,
                variant,
                required: true,
                invalid: email_invalid,
                error_message: "Missing @",
                autocomplete: "username",
                show_clear_button: true,
            }
            TextField {
                label: "Password",
                value: password(),
                on_change: move |v| password.set(v),
                kind: FieldKind::Password,
                variant,
                required: true,
                autocomplete: "current-password",
                show_password_toggle: true,
                show_clear_button: true,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_parse() {
        assert_eq!(parse_or_default::<FieldVariant>("ghost"), FieldVariant::Ghost);
        assert_eq!(parse_or_default::<FieldSize>("large"), FieldSize::Large);
        assert_eq!(parse_or_default::<FieldKind>("password"), FieldKind::Password);
    }

    #[test]
    fn unknown_names_use_defaults() {
        assert_eq!(parse_or_default::<FieldVariant>("neon"), FieldVariant::Outlined);
        assert_eq!(parse_or_default::<FieldSize>(""), FieldSize::Medium);
        assert_eq!(parse_or_default::<FieldKind>("tel"), FieldKind::Text);
    }
}
