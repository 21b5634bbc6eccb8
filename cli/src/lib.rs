pub mod config;
pub mod utils;

pub use config::*;
pub use utils::*;
