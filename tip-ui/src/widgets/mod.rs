pub mod amount;
pub mod numeric;

pub use amount::amount_row;
pub use numeric::numeric_field;
