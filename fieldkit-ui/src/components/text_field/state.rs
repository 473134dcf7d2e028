//! Internal UI state owned by a single text field instance

use super::config::FieldKind;
use tracing::{debug, trace};

/// Focus and password-reveal flags for one mounted field.
///
/// Lives in a dioxus `Signal` owned by the component; nothing else writes it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FieldState {
    focused: bool,
    revealed: bool,
    /// Last externally supplied kind, used to detect kind changes
    kind: FieldKind,
}

impl FieldState {
    pub fn new(kind: FieldKind) -> Self {
        Self {
            focused: false,
            revealed: false,
            kind,
        }
    }

    pub fn on_focus(&mut self) {
        trace!("text field focused");
        self.focused = true;
    }

    pub fn on_blur(&mut self) {
        trace!("text field blurred");
        self.focused = false;
    }

    /// Flip between masked and plain text. No-op unless the field is a password.
    pub fn toggle_visibility(&mut self) {
        if !self.kind.is_password() {
            debug!(kind = %self.kind, "ignoring visibility toggle on non-password field");
            return;
        }
        self.revealed = !self.revealed;
        debug!(revealed = self.revealed, "password visibility toggled");
    }

    pub fn focused(&self) -> bool {
        self.focused
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Adopt a new externally supplied kind, dropping any in-progress reveal.
    pub fn sync_kind(&mut self, kind: FieldKind) {
        if self.kind == kind {
            return;
        }
        debug!(from = %self.kind, to = %kind, "field kind changed, resetting reveal");
        self.kind = kind;
        self.revealed = false;
    }

    /// Drop focus when the field stops accepting input; a disabled input
    /// does not reliably fire `blur`.
    pub fn sync_interactive(&mut self, interactive: bool) {
        if !interactive && self.focused {
            debug!("text field became non-interactive while focused, clearing focus");
            self.focused = false;
        }
    }

    /// Kind the input element should currently render as
    pub fn rendered_kind(&self) -> FieldKind {
        if self.kind.is_password() && self.revealed {
            FieldKind::Text
        } else {
            self.kind
        }
    }

    /// Rendered kind for this pass given the external kind.
    ///
    /// The watcher runs after render, so for one pass the stored kind can lag
    /// behind the prop. A stale reveal must never leak into that pass.
    pub fn rendered_kind_for(&self, external: FieldKind) -> FieldKind {
        if self.kind == external {
            self.rendered_kind()
        } else {
            external
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_blurred_and_masked() {
        let state = FieldState::new(FieldKind::Password);
        assert!(!state.focused());
        assert!(!state.revealed());
        assert_eq!(state.rendered_kind(), FieldKind::Password);
    }

    #[test]
    fn focus_and_blur_are_direct_assignments() {
        let mut state = FieldState::new(FieldKind::Text);
        state.on_focus();
        state.on_focus();
        assert!(state.focused());
        state.on_blur();
        assert!(!state.focused());
        state.on_blur();
        assert!(!state.focused());
    }

    #[test]
    fn toggle_flips_password_reveal() {
        let mut state = FieldState::new(FieldKind::Password);
        state.toggle_visibility();
        assert!(state.revealed());
        assert_eq!(state.rendered_kind(), FieldKind::Text);
        state.toggle_visibility();
        assert!(!state.revealed());
        assert_eq!(state.rendered_kind(), FieldKind::Password);
    }

    #[test]
    fn toggle_ignored_for_other_kinds() {
        for kind in [FieldKind::Text, FieldKind::Email, FieldKind::Number] {
            let mut state = FieldState::new(kind);
            state.toggle_visibility();
            assert!(!state.revealed());
            assert_eq!(state.rendered_kind(), kind);
        }
    }

    #[test]
    fn kind_change_overrides_reveal() {
        let mut state = FieldState::new(FieldKind::Password);
        state.toggle_visibility();
        assert!(state.revealed());

        state.sync_kind(FieldKind::Text);
        assert!(!state.revealed());
        assert_eq!(state.rendered_kind(), FieldKind::Text);

        state.sync_kind(FieldKind::Password);
        assert_eq!(state.rendered_kind(), FieldKind::Password);
    }

    #[test]
    fn same_kind_keeps_reveal() {
        let mut state = FieldState::new(FieldKind::Password);
        state.toggle_visibility();
        state.sync_kind(FieldKind::Password);
        assert!(state.revealed());
    }

    #[test]
    fn lagging_kind_uses_external_kind() {
        let mut state = FieldState::new(FieldKind::Password);
        state.toggle_visibility();
        assert_eq!(state.rendered_kind_for(FieldKind::Email), FieldKind::Email);
        assert_eq!(state.rendered_kind_for(FieldKind::Password), FieldKind::Text);
    }

    #[test]
    fn losing_interactivity_clears_focus() {
        let mut state = FieldState::new(FieldKind::Text);
        state.on_focus();
        state.sync_interactive(true);
        assert!(state.focused());
        state.sync_interactive(false);
        assert!(!state.focused());
        state.sync_interactive(true);
        assert!(!state.focused());
    }

    #[test]
    fn focus_survives_kind_change() {
        let mut state = FieldState::new(FieldKind::Password);
        state.on_focus();
        state.sync_kind(FieldKind::Text);
        assert!(state.focused());
    }
}
