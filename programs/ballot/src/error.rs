use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Voter has already voted")]
    AlreadyVoted,
    #[msg("Candidate is not on the ballot")]
    InvalidCandidate,
    #[msg("Too many candidates")]
    TooManyCandidates,
    #[msg("Candidate name too long")]
    CandidateNameTooLong,
    #[msg("Vote count overflow")]
    VoteCountOverflow,
    #[msg("Candidate list is empty")]
    NoCandidates,
    #[msg("Duplicate candidate name")]
    DuplicateCandidate,
}
