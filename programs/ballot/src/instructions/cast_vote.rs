use anchor_lang::prelude::*;

use crate::{BallotLedger, VoterRecord};

#[derive(Accounts)]
pub struct CastVote<'info> {
    #[account(mut)]
    pub voter: Signer<'info>,
    #[account(
        mut,
        seeds = [b"BallotLedger".as_ref()],
        bump = ballot_ledger.bump
    )]
    pub ballot_ledger: Box<Account<'info, BallotLedger>>,
    #[account(
        init_if_needed,
        seeds = [
            b"VoterRecord".as_ref(),
            voter.key().as_ref()
        ],
        bump,
        payer = voter,
        space = 8 + VoterRecord::INIT_SPACE
    )]
    pub voter_record: Box<Account<'info, VoterRecord>>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<CastVote>, candidate_name: String) -> Result<()> {
    let voter_record = &mut ctx.accounts.voter_record;
    let ballot_ledger = &mut ctx.accounts.ballot_ledger;

    // A freshly created record carries has_voted = false; on a repeat vote
    // the existing record is loaded instead.
    voter_record.bump = ctx.bumps.voter_record;
    voter_record.voter = ctx.accounts.voter.key();

    // Both writes commit together or not at all; any rejection below
    // aborts the transaction with no state change.
    voter_record.mark_voted()?;
    ballot_ledger.record_vote(&candidate_name)?;

    Ok(())
}
