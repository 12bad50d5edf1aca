pub mod delimited_import;
pub mod table;

pub use delimited_import::{DelimitedImporter, ImportOutcome, SkippedRow};
pub use table::AwardTable;
