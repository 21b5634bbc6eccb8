use anchor_client::{
    anchor_lang::system_program,
    solana_sdk::{
        pubkey::Pubkey,
        signature::{Keypair, Signature},
        signer::Signer,
    },
    ClientError, Program,
};
use ballot::{accounts, instruction, BallotLedger, VoterRecord};

pub fn send_init_ballot_ledger(
    program: &Program<&Keypair>,
    admin: &Keypair,
    candidate_names: Vec<String>,
) -> Result<Signature, ClientError> {
    program
        .request()
        .accounts(accounts::InitBallotLedger {
            payer: program.payer(),
            admin: admin.pubkey(),
            ballot_ledger: BallotLedger::pda().0,
            system_program: system_program::ID,
        })
        .args(instruction::InitBallotLedger { candidate_names })
        .signer(admin)
        .send()
}

pub fn send_cast_vote(
    program: &Program<&Keypair>,
    voter: &Keypair,
    candidate_name: String,
) -> Result<Signature, ClientError> {
    program
        .request()
        .accounts(accounts::CastVote {
            voter: voter.pubkey(),
            ballot_ledger: BallotLedger::pda().0,
            voter_record: VoterRecord::pda(&voter.pubkey()).0,
            system_program: system_program::ID,
        })
        .args(instruction::CastVote { candidate_name })
        .signer(voter)
        .send()
}

pub fn fetch_ballot_ledger(program: &Program<&Keypair>) -> Result<BallotLedger, ClientError> {
    program.account(BallotLedger::pda().0)
}

/// A voter with no record on chain has not voted.
pub fn fetch_has_voted(program: &Program<&Keypair>, voter: &Pubkey) -> Result<bool, ClientError> {
    match program.account::<VoterRecord>(VoterRecord::pda(voter).0) {
        Ok(record) => Ok(record.has_voted),
        Err(ClientError::AccountNotFound) => Ok(false),
        Err(e) => Err(e),
    }
}
