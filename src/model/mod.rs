//! Input data model for transparency reports.
//!
//! A [`Product`] carries a name, the owning company, free-form disclosure
//! [`Metadata`] and optional questionnaire answers. Everything downstream
//! (scoring, categorization, rendering) is derived from these values.

mod metadata;
mod product;

pub use metadata::{is_present_value, value_to_string, Metadata};
pub use product::{Product, QuestionAnswer};
