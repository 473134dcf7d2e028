//! Shared UI components

pub mod icons;
pub mod text_field;

pub use icons::{EyeIcon, EyeOffIcon, LoaderIcon, XIcon};
pub use text_field::a11y::{
    CLEAR_INPUT_LABEL, HIDE_PASSWORD_LABEL, LOADING_LABEL, SHOW_PASSWORD_LABEL,
};
pub use text_field::config::{FieldConfig, FieldKind, FieldSize, FieldVariant, ParseOptionError};
pub use text_field::state::FieldState;
pub use text_field::view::{FieldMessage, FieldView};
pub use text_field::{TextField, TextFieldProps};
