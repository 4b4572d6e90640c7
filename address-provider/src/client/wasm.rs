use async_trait::async_trait;
use color_eyre::Report;
use cosmwasm_std::Coin;
use serde::{de::DeserializeOwned, Serialize};

use crate::fee::Fee;

///
/// A chain client able to run smart queries against any contract.
///
#[async_trait]
pub trait CosmWasmQuerier: Send + Sync {
    /// Serialize `msg` to JSON, query `contract_addr` with it and parse the JSON answer.
    async fn query_contract_smart<M, T>(&self, contract_addr: &str, msg: &M) -> Result<T, Report>
    where
        M: Serialize + Sync,
        T: DeserializeOwned + Send;
}

///
/// A chain client that can also sign and broadcast contract executions.
///
#[async_trait]
pub trait SigningCosmWasmClient: CosmWasmQuerier {
    /// Whatever the client hands back once the transaction is confirmed.
    type TxResponse: Send;

    async fn execute<M>(
        &self,
        sender: &str,
        contract_addr: &str,
        msg: &M,
        fee: &Fee,
        memo: Option<&str>,
        funds: &[Coin],
    ) -> Result<Self::TxResponse, Report>
    where
        M: Serialize + Sync;
}
