//! Component mocks with interactive controls

pub mod framework;
mod text_field;
pub mod url_state;

pub use text_field::TextFieldMock;
