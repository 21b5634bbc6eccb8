use std::{thread, time::Duration};

use anchor_client::{
    solana_sdk::{
        commitment_config::CommitmentConfig,
        native_token::LAMPORTS_PER_SOL,
        pubkey::Pubkey,
        signature::Keypair,
        signer::Signer,
    },
    Client, Cluster, Program,
};
use cli::utils::{fetch_ballot_ledger, fetch_has_voted, send_cast_vote, send_init_ballot_ledger};

use crate::utils::assert_client_err;

fn airdrop(program: &Program<&Keypair>, to: &Pubkey, lamports: u64) {
    let sig = program.rpc().request_airdrop(to, lamports).unwrap();
    while !program.rpc().confirm_transaction(&sig).unwrap() {
        thread::sleep(Duration::from_millis(200));
    }
}

#[test]
#[ignore = "requires a local validator with the ballot program deployed"]
fn test_full_ballot_flow() {
    let payer = Keypair::new();
    let client = Client::new_with_options(Cluster::Localnet, &payer, CommitmentConfig::confirmed());
    let program = client.program(ballot::id()).unwrap();

    airdrop(&program, &payer.pubkey(), 10 * LAMPORTS_PER_SOL);

    let candidates = vec![
        "Alice".to_string(),
        "Bob".to_string(),
        "Charlie".to_string(),
    ];
    send_init_ballot_ledger(&program, &payer, candidates.clone()).unwrap();

    let ledger = fetch_ballot_ledger(&program).unwrap();
    assert_eq!(ledger.admin, payer.pubkey());
    assert_eq!(ledger.candidates.len(), candidates.len());
    for candidate in &ledger.candidates {
        assert_eq!(candidate.tally, 0);
    }

    let voter_x = Keypair::new();
    let voter_y = Keypair::new();
    airdrop(&program, &voter_x.pubkey(), LAMPORTS_PER_SOL);
    airdrop(&program, &voter_y.pubkey(), LAMPORTS_PER_SOL);

    // First vote is accepted and flags the voter.
    send_cast_vote(&program, &voter_x, "Bob".to_string()).unwrap();
    let ledger = fetch_ballot_ledger(&program).unwrap();
    assert_eq!(ledger.votes_for("Bob"), 1);
    assert!(fetch_has_voted(&program, &voter_x.pubkey()).unwrap());

    // Second vote from the same voter fails whatever the candidate.
    assert_client_err(
        send_cast_vote(&program, &voter_x, "Alice".to_string()),
        "AlreadyVoted",
    );
    let ledger = fetch_ballot_ledger(&program).unwrap();
    assert_eq!(ledger.votes_for("Alice"), 0);

    // Unknown candidate fails and leaves tallies and flags unchanged.
    assert_client_err(
        send_cast_vote(&program, &voter_y, "Dave".to_string()),
        "InvalidCandidate",
    );
    let ledger = fetch_ballot_ledger(&program).unwrap();
    assert_eq!(ledger.total_votes(), 1);
    assert!(!fetch_has_voted(&program, &voter_y.pubkey()).unwrap());

    // The rejected voter still holds their one vote and can retry.
    send_cast_vote(&program, &voter_y, "Charlie".to_string()).unwrap();
    let ledger = fetch_ballot_ledger(&program).unwrap();
    assert!(fetch_has_voted(&program, &voter_y.pubkey()).unwrap());
    assert_eq!(ledger.votes_for("Charlie"), 1);
    assert_eq!(ledger.total_votes(), 2);
}
