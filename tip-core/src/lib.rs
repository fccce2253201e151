pub mod calc;
pub mod field;
pub mod selection;
pub mod session;

pub use calc::{SplitAmounts, compute, round_half_up};
pub use field::{FieldConstraints, FieldError, NumericField, filter_edit, validate};
pub use selection::{TipChoice, TipSelection};
pub use session::SplitSession;
