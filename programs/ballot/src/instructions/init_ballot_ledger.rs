use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode,
    state::ballot_ledger::{MAX_CANDIDATES, MAX_CANDIDATE_NAME_LEN},
    BallotLedger, Candidate,
};

#[derive(Accounts)]
pub struct InitBallotLedger<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,
    /// Recorded on the ledger as admin. Grants no privileges.
    pub admin: Signer<'info>,
    #[account(
        init,
        seeds = [b"BallotLedger".as_ref()],
        bump,
        payer = payer,
        space = 8 + BallotLedger::INIT_SPACE
    )]
    pub ballot_ledger: Box<Account<'info, BallotLedger>>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitBallotLedger>, candidate_names: Vec<String>) -> Result<()> {
    require!(
        candidate_names.len() <= MAX_CANDIDATES,
        ErrorCode::TooManyCandidates
    );
    require!(
        candidate_names
            .iter()
            .all(|name| name.len() <= MAX_CANDIDATE_NAME_LEN),
        ErrorCode::CandidateNameTooLong
    );

    // Empty and duplicate-bearing lists are accepted unless the strict
    // build opts in. An empty list makes every vote fail validity; a
    // duplicated name splits its count across entries.
    #[cfg(feature = "strict-candidates")]
    {
        require!(!candidate_names.is_empty(), ErrorCode::NoCandidates);
        for (i, name) in candidate_names.iter().enumerate() {
            require!(
                !candidate_names[..i].contains(name),
                ErrorCode::DuplicateCandidate
            );
        }
    }

    let ballot_ledger = &mut ctx.accounts.ballot_ledger;
    ballot_ledger.bump = ctx.bumps.ballot_ledger;
    ballot_ledger.admin = ctx.accounts.admin.key();
    ballot_ledger.candidates = candidate_names.into_iter().map(Candidate::new).collect();

    Ok(())
}
