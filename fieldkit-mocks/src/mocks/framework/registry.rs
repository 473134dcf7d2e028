//! Control registry for typed control management with URL sync

use super::preset::Preset;
use crate::mocks::url_state::{parse_state, StateBuilder};
use crate::Route;
use dioxus::prelude::*;
use std::collections::HashMap;

/// Value stored in the control registry
#[derive(Clone, Debug, PartialEq)]
pub enum ControlValue {
    Bool(bool),
    String(String),
}

/// Definition of a control with metadata
#[derive(Clone, PartialEq)]
pub struct ControlDef {
    pub key: &'static str,
    pub label: &'static str,
    pub default: ControlValue,
    pub doc: Option<&'static str>,
    pub enum_options: Option<Vec<(&'static str, &'static str)>>, // (value, label) for enums
    /// Conditions that must all be true for this control to be visible.
    /// Each tuple is (control_key, required_value) - the referenced control must have that value.
    pub visible_when: Vec<(&'static str, &'static str)>,
}

impl ControlDef {
    fn new(key: &'static str, label: &'static str, default: ControlValue) -> Self {
        Self {
            key,
            label,
            default,
            doc: None,
            enum_options: None,
            visible_when: Vec::new(),
        }
    }

    /// Check if this control should be visible given the current registry state.
    pub fn is_visible(&self, registry: &ControlRegistry) -> bool {
        self.visible_when
            .iter()
            .all(|(key, value)| registry.get_string(key) == *value)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self.default, ControlValue::Bool(_))
    }

    /// Free-form text control (a string control without enum options)
    pub fn is_text(&self) -> bool {
        matches!(self.default, ControlValue::String(_)) && self.enum_options.is_none()
    }
}

/// Builder for creating a ControlRegistry
pub struct ControlRegistryBuilder {
    controls: Vec<ControlDef>,
    presets: Vec<Preset>,
}

impl ControlRegistryBuilder {
    pub fn new() -> Self {
        Self {
            controls: Vec::new(),
            presets: Vec::new(),
        }
    }

    /// Add a boolean control
    pub fn bool_control(mut self, key: &'static str, label: &'static str, default: bool) -> Self {
        self.controls
            .push(ControlDef::new(key, label, ControlValue::Bool(default)));
        self
    }

    /// Add an enum control (represented as string internally)
    pub fn enum_control(
        mut self,
        key: &'static str,
        label: &'static str,
        default: &'static str,
        options: Vec<(&'static str, &'static str)>,
    ) -> Self {
        let mut def = ControlDef::new(key, label, ControlValue::String(default.to_string()));
        def.enum_options = Some(options);
        self.controls.push(def);
        self
    }

    /// Add a free-form string control
    pub fn string_control(mut self, key: &'static str, label: &'static str, default: &str) -> Self {
        self.controls.push(ControlDef::new(
            key,
            label,
            ControlValue::String(default.to_string()),
        ));
        self
    }

    /// Add documentation to the last control
    pub fn doc(mut self, doc: &'static str) -> Self {
        if let Some(last) = self.controls.last_mut() {
            last.doc = Some(doc);
        }
        self
    }

    /// Add a visibility condition to the last control.
    /// Multiple calls create an AND condition (all must match).
    pub fn visible_when(mut self, key: &'static str, value: &'static str) -> Self {
        if let Some(last) = self.controls.last_mut() {
            last.visible_when.push((key, value));
        }
        self
    }

    /// Add state presets
    pub fn with_presets(mut self, presets: Vec<Preset>) -> Self {
        self.presets = presets;
        self
    }

    /// Build the registry - must be called inside a component (uses hooks)
    pub fn build(self, initial_state: Option<String>) -> ControlRegistry {
        validate_conditions(&self.controls);

        let state_pairs = initial_state
            .as_deref()
            .map(parse_state)
            .unwrap_or_default();

        let mut values: HashMap<&'static str, Signal<ControlValue>> = HashMap::new();

        for def in &self.controls {
            let initial = initial_value(def, &state_pairs);
            // Use use_signal to properly hook into Dioxus reactive system
            let signal = use_signal(|| initial);
            values.insert(def.key, signal);
        }

        ControlRegistry {
            controls: self.controls,
            values,
            presets: self.presets,
        }
    }
}

impl Default for ControlRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Every visible_when condition must reference a known control and, for enums, a valid value
fn validate_conditions(controls: &[ControlDef]) {
    for control in controls {
        for (ref_key, ref_value) in &control.visible_when {
            let ref_control = controls.iter().find(|c| c.key == *ref_key);
            match ref_control {
                None => panic!(
                    "visible_when on '{}' references unknown control '{}'",
                    control.key, ref_key
                ),
                Some(ref_ctrl) => {
                    if let Some(options) = &ref_ctrl.enum_options {
                        if !options.iter().any(|(v, _)| v == ref_value) {
                            panic!(
                                "visible_when on '{}' references invalid value '{}' for control '{}'. Valid values: {:?}",
                                control.key, ref_value, ref_key,
                                options.iter().map(|(v, _)| *v).collect::<Vec<_>>()
                            );
                        }
                    }
                }
            }
        }
    }
}

/// Value from the URL state when present, otherwise the control's default
fn initial_value(def: &ControlDef, state_pairs: &[(String, String)]) -> ControlValue {
    let from_state = state_pairs.iter().find(|(k, _)| k == def.key).map(|(_, v)| v);
    match &def.default {
        ControlValue::Bool(default) => {
            ControlValue::Bool(from_state.map(|v| v == "1" || v == "true").unwrap_or(*default))
        }
        ControlValue::String(default) => {
            let allowed = |v: &&String| match &def.enum_options {
                Some(options) => options.iter().any(|(opt, _)| *opt == v.as_str()),
                None => true,
            };
            ControlValue::String(
                from_state
                    .filter(allowed)
                    .cloned()
                    .unwrap_or_else(|| default.clone()),
            )
        }
    }
}

/// Registry holding all controls and their current values
#[derive(Clone)]
pub struct ControlRegistry {
    pub controls: Vec<ControlDef>,
    pub values: HashMap<&'static str, Signal<ControlValue>>,
    pub presets: Vec<Preset>,
}

impl PartialEq for ControlRegistry {
    fn eq(&self, other: &Self) -> bool {
        self.controls == other.controls
            && self.values == other.values
            && self.presets == other.presets
    }
}

impl ControlRegistry {
    /// Get a boolean value (reads signal, creating subscription)
    pub fn get_bool(&self, key: &'static str) -> bool {
        self.values
            .get(key)
            .map(|s| match &*s.read() {
                ControlValue::Bool(b) => *b,
                _ => false,
            })
            .unwrap_or(false)
    }

    /// Get a string value (reads signal, creating subscription)
    pub fn get_string(&self, key: &'static str) -> String {
        self.values
            .get(key)
            .map(|s| match &*s.read() {
                ControlValue::String(s) => s.clone(),
                _ => String::new(),
            })
            .unwrap_or_default()
    }

    /// Non-empty string value, or None
    pub fn get_text(&self, key: &'static str) -> Option<String> {
        Some(self.get_string(key)).filter(|s| !s.is_empty())
    }

    /// Set a boolean value
    pub fn set_bool(&self, key: &'static str, value: bool) {
        if let Some(mut signal) = self.values.get(key).copied() {
            signal.set(ControlValue::Bool(value));
        }
    }

    /// Set a string value (for enums and text)
    pub fn set_string(&self, key: &'static str, value: String) {
        if let Some(mut signal) = self.values.get(key).copied() {
            signal.set(ControlValue::String(value));
        }
    }

    /// Apply a preset - resets all controls to defaults, then applies preset values
    pub fn apply_preset(&self, preset: &Preset) {
        for control in &self.controls {
            if let Some(mut signal) = self.values.get(control.key).copied() {
                signal.set(control.default.clone());
            }
        }
        for (key, value) in &preset.values {
            if let Some(mut signal) = self.values.get(key.as_str()).copied() {
                signal.set(value.clone());
            }
        }
    }

    /// Build URL state string from current values
    pub fn build_state(&self) -> Option<String> {
        let mut builder = StateBuilder::new();

        for def in &self.controls {
            if let Some(signal) = self.values.get(def.key) {
                let value = signal.read();
                match (&*value, &def.default) {
                    (ControlValue::Bool(v), ControlValue::Bool(default)) => {
                        builder.set_bool(def.key, *v, *default);
                    }
                    (ControlValue::String(v), ControlValue::String(default)) => {
                        if v != default {
                            builder.set_string(def.key, v);
                        }
                    }
                    _ => {}
                }
            }
        }

        builder.build_option()
    }

    /// Keep the page URL in sync with the controls.
    ///
    /// `to_route` maps the encoded state to the page's own route.
    pub fn use_url_sync(&self, to_route: fn(Option<String>) -> Route) {
        let registry = self.clone();
        let mut is_mounted = use_signal(|| false);

        use_effect(move || {
            // Read all values to subscribe to changes
            for signal in registry.values.values() {
                let _ = signal.read();
            }

            if !*is_mounted.peek() {
                is_mounted.set(true);
                return;
            }

            navigator().replace(to_route(registry.build_state()));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_control() -> ControlDef {
        let mut def = ControlDef::new("kind", "Kind", ControlValue::String("text".into()));
        def.enum_options = Some(vec![("text", "Text"), ("password", "Password")]);
        def
    }

    #[test]
    fn initial_value_prefers_url_state() {
        let pairs = vec![
            ("kind".to_string(), "password".to_string()),
            ("loading".to_string(), "1".to_string()),
        ];
        assert_eq!(
            initial_value(&kind_control(), &pairs),
            ControlValue::String("password".into())
        );
        let loading = ControlDef::new("loading", "Loading", ControlValue::Bool(false));
        assert_eq!(initial_value(&loading, &pairs), ControlValue::Bool(true));
    }

    #[test]
    fn unknown_enum_value_falls_back_to_default() {
        let pairs = vec![("kind".to_string(), "tel".to_string())];
        assert_eq!(
            initial_value(&kind_control(), &pairs),
            ControlValue::String("text".into())
        );
    }

    #[test]
    fn text_controls_accept_any_value() {
        let label = ControlDef::new("label", "Label", ControlValue::String("Email".into()));
        assert!(label.is_text());
        let pairs = vec![("label".to_string(), "Work email".to_string())];
        assert_eq!(
            initial_value(&label, &pairs),
            ControlValue::String("Work email".into())
        );
    }

    #[test]
    #[should_panic(expected = "unknown control")]
    fn condition_on_missing_control_panics() {
        let mut toggle = ControlDef::new("toggle", "Toggle", ControlValue::Bool(false));
        toggle.visible_when.push(("kind", "password"));
        validate_conditions(&[toggle]);
    }

    #[test]
    #[should_panic(expected = "invalid value")]
    fn condition_on_missing_option_panics() {
        let mut toggle = ControlDef::new("toggle", "Toggle", ControlValue::Bool(false));
        toggle.visible_when.push(("kind", "secret"));
        validate_conditions(&[kind_control(), toggle]);
    }
}
