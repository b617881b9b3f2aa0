//! Validation services for the application layer.

pub mod form_validator;

pub use form_validator::{FormBindings, FormValidator, IndicatorSet};
