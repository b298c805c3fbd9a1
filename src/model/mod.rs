pub mod record;
pub mod visit;

pub use record::{
    TransactionRecord, TransactionTable, BENEFIT_TYPE_COLUMN, LUNCH_MARKER, PLACE_COLUMN,
};
pub use visit::Visit;
