#![allow(ambiguous_glob_reexports)]
#![allow(unexpected_cfgs)] // See: https://solana.stackexchange.com/a/19845

pub mod error;
pub mod instructions;
pub mod state;


use anchor_lang::prelude::*;

pub use instructions::*;
pub use state::*;

declare_id!("9gLZU45mvXXjKopVuNRAXgcabuMQBs25Aik1HTm1RDWZ");

#[program]
pub mod ballot {
    use super::*;

    pub fn init_ballot_ledger(
        ctx: Context<InitBallotLedger>,
        candidate_names: Vec<String>,
    ) -> Result<()> {
        init_ballot_ledger::handler(ctx, candidate_names)
    }

    pub fn cast_vote(ctx: Context<CastVote>, candidate_name: String) -> Result<()> {
        cast_vote::handler(ctx, candidate_name)
    }
}
