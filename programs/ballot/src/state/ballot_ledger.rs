use anchor_lang::prelude::*;

use crate::error::ErrorCode;

pub const MAX_CANDIDATES: usize = 32;
pub const MAX_CANDIDATE_NAME_LEN: usize = 64;

#[account]
#[derive(InitSpace, Debug)]
pub struct BallotLedger {
    /// Bump seed for the PDA
    pub bump: u8,
    /// The identity that constructed the ledger. Recorded only, gates nothing.
    pub admin: Pubkey,
    /// Fixed candidate list in construction order.
    #[max_len(MAX_CANDIDATES)]
    pub candidates: Vec<Candidate>,
}

impl BallotLedger {
    pub fn pda() -> (Pubkey, u8) {
        Pubkey::find_program_address(&[b"BallotLedger"], &crate::ID)
    }

    /// Tally for an exact-match candidate name. An unknown name reads as
    /// zero, same as a candidate nobody has voted for.
    pub fn votes_for(&self, candidate_name: &str) -> u64 {
        self.candidates
            .iter()
            .find(|candidate| candidate.name == candidate_name)
            .map_or(0, |candidate| candidate.tally)
    }

    pub fn total_votes(&self) -> u64 {
        self.candidates
            .iter()
            .map(|candidate| candidate.tally)
            .sum()
    }

    /// Increments the tally for `candidate_name`. The first exact match
    /// receives the vote if the list carries duplicate names.
    pub fn record_vote(&mut self, candidate_name: &str) -> Result<()> {
        let candidate = self
            .candidates
            .iter_mut()
            .find(|candidate| candidate.name == candidate_name)
            .ok_or(ErrorCode::InvalidCandidate)?;

        candidate.tally = candidate
            .tally
            .checked_add(1)
            .ok_or(ErrorCode::VoteCountOverflow)?;

        Ok(())
    }
}

/// Inner struct of BallotLedger
#[derive(Debug, AnchorSerialize, AnchorDeserialize, Clone, InitSpace, PartialEq)]
pub struct Candidate {
    /// Candidate name, matched byte-for-byte when voting.
    #[max_len(MAX_CANDIDATE_NAME_LEN)]
    pub name: String,
    /// The number of votes for this candidate. Each vote is equally weighted.
    pub tally: u64,
}

impl Candidate {
    pub fn new(name: String) -> Self {
        Self { name, tally: 0 }
    }
}
