//! fieldkit mocks - Component gallery
//!
//! Renders fieldkit-ui components under interactive controls whose state is
//! kept in the URL, so any configuration can be shared as a link.

pub mod mocks;
pub mod pages;

use dioxus::prelude::*;
use pages::{MockIndex, MockTextField};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    MockIndex {},
    #[route("/text-field?:state")]
    MockTextField { state: Option<String> },
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}
