//! Standalone string helpers.

pub mod extract_domain;

pub use extract_domain::extract_domain;
