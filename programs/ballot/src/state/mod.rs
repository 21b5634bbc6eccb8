pub mod ballot_ledger;
pub mod voter_record;

pub use ballot_ledger::*;
pub use voter_record::*;
