//! Text field configuration: the externally supplied half of the control

use std::fmt;
use std::str::FromStr;

/// Error returned when a variant, size, or kind name is not recognized
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseOptionError {
    #[error("unknown field variant `{0}`")]
    Variant(String),
    #[error("unknown field size `{0}`")]
    Size(String),
    #[error("unknown field kind `{0}`")]
    Kind(String),
}

/// Field chrome style
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum FieldVariant {
    /// Solid background, no border
    Filled,
    /// Bordered box
    #[default]
    Outlined,
    /// Bottom border only
    Ghost,
}

impl FieldVariant {
    pub const ALL: [FieldVariant; 3] = [Self::Filled, Self::Outlined, Self::Ghost];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Filled => "filled",
            Self::Outlined => "outlined",
            Self::Ghost => "ghost",
        }
    }
}

impl FromStr for FieldVariant {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "filled" => Ok(Self::Filled),
            "outlined" => Ok(Self::Outlined),
            "ghost" => Ok(Self::Ghost),
            other => Err(ParseOptionError::Variant(other.to_string())),
        }
    }
}

/// Field size
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum FieldSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FieldSize {
    pub const ALL: [FieldSize; 3] = [Self::Small, Self::Medium, Self::Large];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl FromStr for FieldSize {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            other => Err(ParseOptionError::Size(other.to_string())),
        }
    }
}

/// What the field holds, which decides the rendered `type` attribute
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum FieldKind {
    #[default]
    Text,
    Password,
    Email,
    Number,
}

impl FieldKind {
    pub const ALL: [FieldKind; 4] = [Self::Text, Self::Password, Self::Email, Self::Number];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
            Self::Email => "email",
            Self::Number => "number",
        }
    }

    /// Value for the input's `type` attribute
    pub fn input_type(self) -> &'static str {
        self.as_str()
    }

    pub fn is_password(self) -> bool {
        matches!(self, Self::Password)
    }
}

impl FromStr for FieldKind {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "password" => Ok(Self::Password),
            "email" => Ok(Self::Email),
            "number" => Ok(Self::Number),
            other => Err(ParseOptionError::Kind(other.to_string())),
        }
    }
}

impl fmt::Display for FieldVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for FieldSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the parent supplies for one render, minus the change callback.
///
/// The field is fully controlled: `value` is read here and never written back.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct FieldConfig {
    pub value: String,
    pub label: String,
    pub placeholder: Option<String>,
    pub helper_text: Option<String>,
    pub error_message: Option<String>,
    pub disabled: bool,
    pub invalid: bool,
    pub loading: bool,
    pub variant: FieldVariant,
    pub size: FieldSize,
    pub kind: FieldKind,
    pub show_clear_button: bool,
    pub show_password_toggle: bool,
    pub required: bool,
    pub id: Option<String>,
    pub name: Option<String>,
    pub autocomplete: Option<String>,
}

impl FieldConfig {
    pub fn has_value(&self) -> bool {
        !self.value.is_empty()
    }

    /// Visible error text. Only true when there is a message to show;
    /// `invalid` alone still marks the input for assistive technology.
    pub fn show_error(&self) -> bool {
        self.invalid && non_empty(self.error_message.as_deref()).is_some()
    }

    pub fn show_helper(&self) -> bool {
        !self.show_error() && non_empty(self.helper_text.as_deref()).is_some()
    }
}

pub(crate) fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.is_empty())
}
