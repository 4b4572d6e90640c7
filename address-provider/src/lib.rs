//!
//! Typed client for the Mars address provider contract.
//!
//! [`AddressProviderQueryClient`] wraps any [`CosmWasmQuerier`] for read-only
//! queries, [`AddressProviderClient`] wraps a [`SigningCosmWasmClient`] and adds
//! the owner-only executions. [`rpc::RpcClient`] is a ready made chain client
//! talking Tendermint RPC.
//!

// Export tokio for convenience
pub use tokio;

// Our modules
pub mod client;
pub mod config;
pub mod errors;
pub mod fee;
pub mod logging;
pub mod msg;
pub mod pagination;
pub mod rpc;
pub mod utils;

pub use client::{
    AddressProviderClient, AddressProviderExecute, AddressProviderQueryClient,
    AddressProviderReadOnly, CosmWasmQuerier, SigningCosmWasmClient,
};
pub use fee::{ExecuteOptions, Fee, StdFee};
pub use msg::{AddressResponseItem, ExecuteMsg, InstantiateMsg, MarsContract, QueryMsg};
