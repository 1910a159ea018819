//! Answer values, stores, and answer sheet files.
//!
//! Three layers, outermost first:
//! - [`AnswerSheet`]: a parsed JSON answers file, raw scalars keyed by
//!   question id.
//! - [`AnswerValue`]: a typed answer matched to its question's kind, checked
//!   and clamped at the mutation boundary.
//! - [`AnswerStore`]: the ordered id-to-value map a session owns.

mod sheet;
mod store;
mod value;

pub use sheet::{AnswerSheet, RawAnswer};
pub use store::AnswerStore;
pub use value::{AnswerValue, NUMBER_MAX, SCALE_MIN};

pub(crate) use value::clamp_number;
