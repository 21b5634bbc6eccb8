use anchor_lang::prelude::*;

use crate::error::ErrorCode;

#[account]
#[derive(InitSpace, Debug)]
pub struct VoterRecord {
    /// Bump seed for the PDA
    pub bump: u8,
    /// The voter this record tracks.
    pub voter: Pubkey,
    /// Set once by a successful vote, never cleared.
    pub has_voted: bool,
}

impl VoterRecord {
    pub fn pda(voter: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[b"VoterRecord", voter.as_ref()], &crate::ID)
    }

    pub fn fresh(voter: Pubkey, bump: u8) -> Self {
        Self {
            bump,
            voter,
            has_voted: false,
        }
    }

    /// NotVoted -> Voted. Terminal once reached.
    pub fn mark_voted(&mut self) -> Result<()> {
        require!(!self.has_voted, ErrorCode::AlreadyVoted);
        self.has_voted = true;
        Ok(())
    }
}
