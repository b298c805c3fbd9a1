pub mod filter;
pub mod reader;
pub mod writer;

pub use filter::{normalize_place, prepare_for_anonymization, prepare_visits};
pub use reader::{read_table, read_table_file};
pub use writer::{table_to_quoted_csv, write_output};
