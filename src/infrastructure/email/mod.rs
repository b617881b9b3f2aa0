//! [`EmailChecker`](crate::domain::email::EmailChecker) implementations.

mod html;
mod rfc;

pub use html::HtmlEmailChecker;
pub use rfc::RfcEmailChecker;
