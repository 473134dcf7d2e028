//! Rendered markup of the text field.
//!
//! Each case mounts a `TextField` in a `VirtualDom` and checks the HTML
//! produced by `dioxus_ssr`. Explicit ids keep the output deterministic.
use dioxus::prelude::*;
use fieldkit_ui::{FieldKind, TextField};

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn label_targets_explicit_input_id() {
    let html = render(|| {
        rsx! {
            TextField {
                label: "Email",
                value: "",
                on_change: |_| {},
                id: "signup-email",
            }
        }
    });
    assert!(html.contains(r#"for="signup-email""#), "{html}");
    assert!(html.contains(r#"id="signup-email""#), "{html}");
    assert!(html.contains(">Email"), "{html}");
    assert!(html.contains(r#"aria-invalid="false""#), "{html}");
}

#[test]
fn error_text_is_an_alert_linked_to_the_input() {
    let html = render(|| {
        rsx! {
            TextField {
                label: "Email",
                value: "nobody",
                on_change: |_| {},
                id: "signup-email",
                invalid: true,
                error_message: "Enter a valid email",
                helper_text: "Work address preferred",
            }
        }
    });
    assert!(html.contains(r#"role="alert""#), "{html}");
    assert!(html.contains(r#"id="signup-email-error""#), "{html}");
    assert!(html.contains("Enter a valid email"), "{html}");
    assert!(html.contains(r#"aria-invalid="true""#), "{html}");
    assert!(
        html.contains(r#"aria-describedby="signup-email-error""#),
        "{html}"
    );
    assert!(!html.contains("Work address preferred"), "{html}");
}

#[test]
fn invalid_without_message_has_no_description() {
    let html = render(|| {
        rsx! {
            TextField {
                label: "Email",
                value: "nobody",
                on_change: |_| {},
                id: "signup-email",
                invalid: true,
            }
        }
    });
    assert!(html.contains(r#"aria-invalid="true""#), "{html}");
    assert!(!html.contains("aria-describedby"), "{html}");
    assert!(!html.contains(r#"role="alert""#), "{html}");
}

#[test]
fn helper_text_describes_the_input() {
    let html = render(|| {
        rsx! {
            TextField {
                label: "Bio",
                value: "",
                on_change: |_| {},
                id: "bio",
                helper_text: "Markdown supported",
            }
        }
    });
    assert!(html.contains(r#"id="bio-helper""#), "{html}");
    assert!(html.contains("Markdown supported"), "{html}");
    assert!(html.contains(r#"aria-describedby="bio-helper""#), "{html}");
    assert!(!html.contains(r#"role="alert""#), "{html}");
}

#[test]
fn loading_shows_status_and_hides_buttons() {
    let html = render(|| {
        rsx! {
            TextField {
                label: "Password",
                value: "secret",
                on_change: |_| {},
                id: "pw",
                kind: FieldKind::Password,
                loading: true,
                show_clear_button: true,
                show_password_toggle: true,
            }
        }
    });
    assert!(html.contains(r#"role="status""#), "{html}");
    assert!(html.contains(r#"aria-label="Loading""#), "{html}");
    assert!(html.contains(r#"aria-busy="true""#), "{html}");
    assert!(html.contains(r#"value="secret""#), "{html}");
    assert!(!html.contains("Clear input"), "{html}");
    assert!(!html.contains("Show password"), "{html}");
    assert!(!html.contains("<button"), "{html}");
}

#[test]
fn password_with_both_buttons() {
    let html = render(|| {
        rsx! {
            TextField {
                label: "Password",
                value: "hunter22",
                on_change: |_| {},
                id: "pw",
                kind: FieldKind::Password,
                show_clear_button: true,
                show_password_toggle: true,
            }
        }
    });
    assert!(html.contains(r#"type="password""#), "{html}");
    assert!(html.contains("pr-16"), "{html}");
    assert!(html.contains(r#"aria-label="Clear input""#), "{html}");
    assert!(html.contains(r#"aria-label="Show password""#), "{html}");
    assert!(html.contains(r#"aria-pressed="false""#), "{html}");
    // decorative icons stay out of the accessibility tree
    assert!(html.contains(r#"aria-hidden="true""#), "{html}");
    assert!(!html.contains("aria-busy"), "{html}");
}

#[test]
fn empty_value_hides_clear_button() {
    let html = render(|| {
        rsx! {
            TextField {
                label: "Search",
                value: "",
                on_change: |_| {},
                id: "search",
                show_clear_button: true,
            }
        }
    });
    assert!(!html.contains("Clear input"), "{html}");
    // space stays reserved so typing does not shift the text
    assert!(html.contains("pr-10"), "{html}");
}

#[test]
fn required_marks_label_and_input() {
    let html = render(|| {
        rsx! {
            TextField {
                label: "Full name",
                value: "",
                on_change: |_| {},
                id: "name",
                required: true,
            }
        }
    });
    assert!(html.contains(r#"aria-required="true""#), "{html}");
    assert!(html.contains(r#"aria-hidden="true">*</span>"#), "{html}");

    let optional = render(|| {
        rsx! {
            TextField {
                label: "Nickname",
                value: "",
                on_change: |_| {},
                id: "nick",
            }
        }
    });
    assert!(!optional.contains("aria-required"), "{optional}");
    assert!(!optional.contains("*</span>"), "{optional}");
}
