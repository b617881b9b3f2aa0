//! Application layer services.
//!
//! Services consume the host traits from [`crate::domain::form`] and never
//! depend on a concrete page.
//!
//! # Available Services
//!
//! - [`services::form_validator::FormValidator`] - Field validation and submit gating

pub mod services;
