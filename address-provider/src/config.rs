//! Chain configuration for the bundled RPC client.

use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::errors::Report;

/// Default RPC request timeout, in seconds.
pub const DEFAULT_TIMEOUT: f64 = 20.0;
/// Cosmos coin type 118 derivation path.
pub const DERIVATION_PATH: &str = "m/44'/118'/0'/0/0";

fn default_gas_prices() -> f64 {
    0.025
}

fn default_gas_adjustment() -> f64 {
    1.5
}

fn default_rpc_timeout_seconds() -> f64 {
    DEFAULT_TIMEOUT
}

fn default_derivation_path() -> String {
    DERIVATION_PATH.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainConfig {
    pub chain_id: String,
    pub prefix: String,
    pub denom: String,
    pub rpc_endpoint: Url,
    /// Address of the deployed address provider contract.
    pub address_provider: String,
    #[serde(default = "default_gas_prices")]
    pub gas_prices: f64,
    #[serde(default = "default_gas_adjustment")]
    pub gas_adjustment: f64,
    #[serde(default = "default_rpc_timeout_seconds")]
    pub rpc_timeout_seconds: f64,
    #[serde(default = "default_derivation_path")]
    pub derivation_path: String,
}

impl ChainConfig {
    pub fn from_pwd() -> Result<Self, Report> {
        let pwd = std::env::current_dir()?;
        Self::from_file(pwd.join("config.yaml"))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Report> {
        let config = std::fs::read_to_string(path)?;
        Self::from_yaml(&config)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, Report> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}
