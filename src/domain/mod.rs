//! Core types and the host-facing traits.
//!
//! - [`entities`] - fields, indicator styles, the allow-list and validity reports
//! - [`form`] - the observable form capability the validator is wired into
//! - [`email`] - the pluggable email format check

pub mod email;
pub mod entities;
pub mod form;
