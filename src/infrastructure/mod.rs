//! Concrete hosts and email checkers.
//!
//! - [`page`] - in-memory page implementing the observable form traits
//! - [`email`] - browser-rule and `validator`-backed email checks

pub mod email;
pub mod page;
