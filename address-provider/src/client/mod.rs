//!
//! Typed clients for the address provider contract, generic over the chain client
//! that actually talks to the node.
//!

mod full_client;
mod interface;
mod query_client;
mod wasm;

#[cfg(test)]
pub(crate) mod mock;

pub use full_client::AddressProviderClient;
pub use interface::{AddressProviderExecute, AddressProviderReadOnly};
pub use query_client::AddressProviderQueryClient;
pub use wasm::{CosmWasmQuerier, SigningCosmWasmClient};
