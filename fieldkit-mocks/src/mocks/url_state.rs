//! URL state persistence for mock pages
//!
//! Serializes control state as base64-encoded JSON in the query string,
//! keeping URLs opaque and avoiding conflicts with query parameter names.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use std::collections::BTreeMap;
use tracing::warn;

/// Decode a state string from a URL query parameter into key-value pairs.
///
/// Anything undecodable yields no pairs, so the page falls back to defaults.
pub fn parse_state(encoded: &str) -> Vec<(String, String)> {
    if encoded.is_empty() {
        return Vec::new();
    }

    let json_bytes = match URL_SAFE_NO_PAD.decode(encoded) {
        Ok(b) => b,
        Err(e) => {
            warn!("Ignoring mock state that is not base64: {}", e);
            return Vec::new();
        }
    };

    let map: BTreeMap<String, String> = match serde_json::from_slice(&json_bytes) {
        Ok(m) => m,
        Err(e) => {
            warn!("Ignoring mock state that is not a JSON object: {}", e);
            return Vec::new();
        }
    };

    map.into_iter().collect()
}

/// Encode key-value pairs into a base64 state string for the URL.
pub fn build_state(pairs: &[(String, String)]) -> String {
    let map: BTreeMap<&str, &str> = pairs
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    let json = serde_json::to_string(&map).expect("state map is always serializable");
    URL_SAFE_NO_PAD.encode(json.as_bytes())
}

/// Builder to collect state changes and produce an encoded state string
pub struct StateBuilder {
    pairs: Vec<(String, String)>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Only recorded when it differs from the default, keeping URLs short
    pub fn set_bool(&mut self, key: &str, value: bool, default: bool) {
        if value != default {
            self.pairs
                .push((key.to_string(), if value { "1" } else { "0" }.to_string()));
        }
    }

    pub fn set_string(&mut self, key: &str, value: &str) {
        self.pairs.push((key.to_string(), value.to_string()));
    }

    pub fn build_option(self) -> Option<String> {
        if self.pairs.is_empty() {
            None
        } else {
            Some(build_state(&self.pairs))
        }
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_survives_the_url() {
        let mut builder = StateBuilder::new();
        builder.set_string("variant", "ghost");
        builder.set_bool("loading", true, false);
        let encoded = builder.build_option().expect("non-default state");

        assert!(!encoded.contains('='));
        let pairs = parse_state(&encoded);
        assert_eq!(
            pairs,
            vec![
                ("loading".to_string(), "1".to_string()),
                ("variant".to_string(), "ghost".to_string()),
            ]
        );
    }

    #[test]
    fn defaults_produce_no_state() {
        let mut builder = StateBuilder::new();
        builder.set_bool("disabled", false, false);
        builder.set_bool("required", true, true);
        assert_eq!(builder.build_option(), None);
    }

    #[test]
    fn garbage_falls_back_to_nothing() {
        assert!(parse_state("").is_empty());
        assert!(parse_state("%%%not-base64").is_empty());
        // valid base64 of a JSON array, not an object
        let array = URL_SAFE_NO_PAD.encode(b"[1,2,3]");
        assert!(parse_state(&array).is_empty());
    }
}
