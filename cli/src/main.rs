use anchor_client::{
    solana_sdk::{
        commitment_config::CommitmentConfig,
        pubkey::Pubkey,
        signature::{read_keypair_file, Keypair},
        signer::Signer,
    },
    Client,
};
use anyhow::{anyhow, Result};
use clap::Parser;
use cli::{config::NetworkConfig, utils::*};
use log::info;
use std::path::PathBuf;
use std::{thread, time::Duration};

#[derive(Clone, Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(short, long, env, default_value = "~/.config/solana/id.json")]
    pub payer_path: PathBuf,

    #[arg(long, env, default_value = "devnet")]
    pub network: String,

    #[arg(short, long, env, help = "RPC endpoint, required when --network custom")]
    pub rpc_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Clone)]
pub enum Commands {
    InitLedger {
        #[arg(long, value_delimiter = ',', help = "Candidate names in ballot order")]
        candidates: Vec<String>,
    },
    Vote {
        #[arg(long)]
        candidate: String,
    },
    Tally {
        #[arg(long)]
        candidate: String,
    },
    HasVoted {
        #[arg(long, value_parser = parse_pubkey, help = "Defaults to the payer identity")]
        voter: Option<Pubkey>,
    },
    Candidates,
    Results {
        #[arg(long, help = "Re-poll and re-render on an interval")]
        watch: bool,

        #[arg(long, default_value = "5")]
        interval_secs: u64,
    },
}

fn main() -> Result<()> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .is_test(false)
        .try_init();

    let cli = Cli::parse();
    let network = NetworkConfig::resolve(&cli.network, cli.rpc_url.as_deref())?;
    let payer = read_keypair_file(&cli.payer_path)
        .map_err(|e| anyhow!("failed to read keypair {}: {e}", cli.payer_path.display()))?;

    let client: Client<&Keypair> = Client::new_with_options(
        network.cluster.clone(),
        &payer,
        CommitmentConfig::confirmed(),
    );
    let program = client.program(network.program_id)?;

    match cli.command {
        Commands::InitLedger { candidates } => {
            let tx = send_init_ballot_ledger(&program, &payer, candidates.clone())?;
            info!("Transaction sent: {}", tx);
            info!("== Ballot ledger initialized at {} ==", network.ledger_address);
            info!("Candidates: {}", candidates.join(", "));
        }
        Commands::Vote { candidate } => {
            let tx = send_cast_vote(&program, &payer, candidate.clone())?;
            info!("Transaction sent: {}", tx);
            info!("== Vote for {} confirmed ==", candidate);
        }
        Commands::Tally { candidate } => {
            let ledger = fetch_ballot_ledger(&program)?;
            println!("{}: {}", candidate, ledger.votes_for(&candidate));
        }
        Commands::HasVoted { voter } => {
            let voter = voter.unwrap_or_else(|| payer.pubkey());
            println!("{}: {}", voter, fetch_has_voted(&program, &voter)?);
        }
        Commands::Candidates => {
            let ledger = fetch_ballot_ledger(&program)?;
            for candidate in &ledger.candidates {
                println!("{}", candidate.name);
            }
        }
        Commands::Results {
            watch,
            interval_secs,
        } => loop {
            let ledger = fetch_ballot_ledger(&program)?;
            for candidate in &ledger.candidates {
                println!("{}: {}", candidate.name, candidate.tally);
            }
            println!("total: {}", ledger.total_votes());
            if !watch {
                break;
            }
            thread::sleep(Duration::from_secs(interval_secs));
        },
    }

    Ok(())
}
