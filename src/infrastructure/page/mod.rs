//! In-memory [`ObservableForm`](crate::domain::form::ObservableForm) host.

mod html_page;
mod layout;

pub use html_page::{FormData, HtmlPage, SubmitOutcome};
pub use layout::{ControlSpec, IndicatorSpec, PageLayout};
