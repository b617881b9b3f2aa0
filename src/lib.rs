//! # Form Guard
//!
//! Client-side validation for the product sign-up form: first name, last
//! name, email and a product URL restricted to an allow-list of shop domains.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Value types and the host traits the validator is wired into
//! - **Application Layer** ([`application`]) - [`FormValidator`] and its event handlers
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory page host and email checkers
//!
//! ## Behavior
//!
//! - Submitting an invalid form is cancelled and each invalid field's error
//!   indicator is shown
//! - Editing any control hides all four indicators until the next submit
//!
//! ## Quick Start
//!
//! ```
//! use form_guard::prelude::*;
//!
//! let mut page = HtmlPage::signup_form();
//! let validator = FormValidator::new(AllowList::default(), HtmlEmailChecker::default());
//! let bindings = validator.install(&mut page)?;
//!
//! page.input(bindings.first_name, "Jane")?;
//! page.input(bindings.last_name, "Doe")?;
//! page.input(bindings.email, "jane@example.com")?;
//! page.input(bindings.url, "https://www.asos.com/prd/123")?;
//!
//! assert!(page.submit().is_submitted());
//! # Ok::<(), form_guard::FormError>(())
//! ```
//!
//! ## Configuration
//!
//! The `form-check` binary reads its settings via [`config::Config`].

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod utils;

pub use application::services::FormValidator;
pub use error::FormError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{FormBindings, FormValidator};
    pub use crate::domain::email::EmailChecker;
    pub use crate::domain::entities::{AllowList, DisplayStyle, FieldKind, ValidityReport};
    pub use crate::domain::form::{
        ControlLocator, ControlType, FormView, ObservableForm, SubmitDecision,
    };
    pub use crate::error::FormError;
    pub use crate::infrastructure::email::{HtmlEmailChecker, RfcEmailChecker};
    pub use crate::infrastructure::page::{ControlSpec, HtmlPage, PageLayout, SubmitOutcome};
    pub use crate::utils::extract_domain;
}
