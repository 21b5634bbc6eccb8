use anchor_client::{solana_sdk::pubkey::Pubkey, Cluster};
use anyhow::{anyhow, bail, Result};
use ballot::BallotLedger;

/// Where a command talks to: one ledger instance per network, selected
/// explicitly instead of through ambient process-wide state.
#[derive(Clone, Debug)]
pub struct NetworkConfig {
    pub cluster: Cluster,
    pub program_id: Pubkey,
    /// Address of the ledger instance on this network.
    pub ledger_address: Pubkey,
}

impl NetworkConfig {
    pub fn resolve(network: &str, rpc_url: Option<&str>) -> Result<Self> {
        let cluster = match network {
            "devnet" => Cluster::Devnet,
            "mainnet" => Cluster::Mainnet,
            "localnet" => Cluster::Localnet,
            "custom" => {
                let url = rpc_url.ok_or_else(|| anyhow!("--rpc-url required for custom network"))?;
                Cluster::Custom(url.to_string(), url.to_string())
            }
            other => bail!("unknown network: {other}"),
        };

        Ok(Self {
            cluster,
            program_id: ballot::id(),
            ledger_address: BallotLedger::pda().0,
        })
    }
}
