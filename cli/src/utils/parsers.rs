use anchor_client::solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

pub fn parse_pubkey(s: &str) -> Result<Pubkey, String> {
    Pubkey::from_str(s).map_err(|e| format!("invalid pubkey: {e}"))
}
