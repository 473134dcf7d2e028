//! State presets for quick configuration switching

use super::registry::{ControlRegistry, ControlValue};
use dioxus::prelude::*;
use std::collections::HashMap;

/// A named preset with predefined control values
#[derive(Clone, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub values: HashMap<String, ControlValue>,
}

impl Preset {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            values: HashMap::new(),
        }
    }

    pub fn set_bool(mut self, key: &'static str, value: bool) -> Self {
        self.values
            .insert(key.to_string(), ControlValue::Bool(value));
        self
    }

    pub fn set_string(mut self, key: &'static str, value: &'static str) -> Self {
        self.values
            .insert(key.to_string(), ControlValue::String(value.to_string()));
        self
    }

    /// Check if this preset matches the current registry state.
    /// A preset matches if all controls have their expected values:
    /// - Controls specified in the preset must match the preset's value
    /// - Controls not in the preset must be at their default value
    pub fn matches(&self, registry: &ControlRegistry) -> bool {
        registry.controls.iter().all(|control| {
            let current = registry.values.get(control.key).map(|s| (*s.read()).clone());
            let expected = self.values.get(control.key).unwrap_or(&control.default);
            current.as_ref() == Some(expected)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::framework::ControlRegistryBuilder;
    use crate::mocks::url_state::build_state;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn highlights_only_the_preset_matching_current_state() {
        let html = render(|| {
            let registry = ControlRegistryBuilder::new()
                .enum_control(
                    "kind",
                    "Kind",
                    "text",
                    vec![("text", "Text"), ("password", "Password")],
                )
                .bool_control("loading", "Loading", false)
                .build(Some(build_state(&[(
                    "kind".to_string(),
                    "password".to_string(),
                )])));
            let password = Preset::new("Password").set_string("kind", "password");
            let loading = Preset::new("Loading").set_bool("loading", true);
            let default = Preset::new("Default");
            let matched = format!(
                "password={} loading={} default={}",
                password.matches(&registry),
                loading.matches(&registry),
                default.matches(&registry)
            );
            rsx! { "{matched}" }
        });
        assert!(
            html.contains("password=true loading=false default=false"),
            "{html}"
        );
    }

    #[test]
    fn builder_records_values() {
        let preset = Preset::new("Password")
            .set_string("kind", "password")
            .set_bool("toggle", true);
        assert_eq!(preset.name, "Password");
        assert_eq!(
            preset.values.get("kind"),
            Some(&ControlValue::String("password".into()))
        );
        assert_eq!(preset.values.get("toggle"), Some(&ControlValue::Bool(true)));
        assert!(!preset.values.contains_key("loading"));
    }
}
