//! fieldkit-ui - Text field component for dioxus apps
//!
//! The rendering lives in [`components::text_field`]; its decision logic
//! (state, style, affordances, accessibility) is split into pure submodules
//! that can be exercised without a renderer.

pub mod components;

pub use components::*;
