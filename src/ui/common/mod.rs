//! Common reusable UI components

pub mod form;
pub mod message;
pub mod spinner;

pub use form::FormField;
pub use message::{ErrorMessage, SuccessMessage};
pub use spinner::{InlineSpinner, LoadingButton};
