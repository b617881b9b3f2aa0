//! Value types shared by the validator and its hosts.

pub mod allow_list;
pub mod field;
pub mod indicator;
pub mod validity;

pub use allow_list::AllowList;
pub use field::FieldKind;
pub use indicator::DisplayStyle;
pub use validity::ValidityReport;
