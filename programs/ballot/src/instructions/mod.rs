pub mod cast_vote;
pub mod init_ballot_ledger;

pub use cast_vote::*;
pub use init_ballot_ledger::*;
