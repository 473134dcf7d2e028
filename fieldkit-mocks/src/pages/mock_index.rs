//! Mock pages with URL state persistence

use crate::mocks::TextFieldMock;
use crate::Route;
use dioxus::prelude::*;
use fieldkit_ui::{FieldKind, FieldSize, FieldVariant, TextField};

#[component]
pub fn MockIndex() -> Element {
    rsx! {
        div { class: "min-h-screen bg-gray-900 text-white p-8",
            h1 { class: "text-2xl font-bold mb-6", "fieldkit mocks" }

            h2 { class: "text-lg font-semibold text-gray-400 mb-3", "Design System" }
            div { class: "grid grid-cols-3 gap-4 mb-8",
                SpecimenCard {
                    title: "TextField",
                    to: Route::MockTextField { state: None },
                    div { class: "space-y-2",
                        TextField {
                            label: "Artist",
                            value: "Sample text",
                            on_change: |_| {},
                            size: FieldSize::Small,
                        }
                        TextField {
                            label: "Password",
                            value: "hunter22",
                            on_change: |_| {},
                            size: FieldSize::Small,
                            variant: FieldVariant::Filled,
                            kind: FieldKind::Password,
                            show_password_toggle: true,
                        }
                        TextField {
                            label: "Email",
                            value: "nobody",
                            on_change: |_| {},
                            size: FieldSize::Small,
                            variant: FieldVariant::Ghost,
                            invalid: true,
                            error_message: "Enter a valid email address",
                        }
                    }
                }
            }

            h2 { class: "text-lg font-semibold text-gray-400 mb-3", "Components" }
            div { class: "space-y-2",
                LinkCard {
                    to: Route::MockTextField { state: None },
                    title: "TextField",
                    description: "Variants, sizes, validation, loading, clear and password affordances",
                }
            }
        }
    }
}

/// A card showing specimen samples with a link to the full page
#[component]
fn SpecimenCard(title: &'static str, to: Route, children: Element) -> Element {
    rsx! {
        Link {
            to,
            class: "block bg-gray-950 rounded-lg p-4 hover:bg-gray-900 transition-colors border border-gray-800",
            h3 { class: "text-sm font-medium text-gray-300 mb-3", "{title}" }
            div { class: "pointer-events-none", {children} }
        }
    }
}

/// A card-style navigation link with title and description
#[component]
fn LinkCard(to: Route, title: &'static str, description: &'static str) -> Element {
    rsx! {
        Link {
            to,
            class: "block p-4 bg-gray-800 rounded-lg hover:bg-gray-700 transition-colors",
            div { class: "font-medium", "{title}" }
            div { class: "text-sm text-gray-400", "{description}" }
        }
    }
}

// ============================================================================
// TextField page wrapper
// ============================================================================

#[component]
pub fn MockTextField(state: Option<String>) -> Element {
    rsx! {
        TextFieldMock { initial_state: state }
    }
}
