//!
//! Tendermint RPC implementation of the chain client traits, built on
//! [cosm-orc](https://crates.io/crates/cosm-orc).
//!

pub mod client;

pub use client::{derive_account_id, RpcClient};
