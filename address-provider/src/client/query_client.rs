use std::sync::Arc;

use async_trait::async_trait;
use color_eyre::Report;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::interface::AddressProviderReadOnly;
use super::wasm::CosmWasmQuerier;
use crate::msg::{AddressResponseItem, InstantiateMsg, MarsContract, QueryMsg};

///
/// Read-only client for one deployed address provider.
///
pub struct AddressProviderQueryClient<C> {
    pub(crate) client: Arc<C>,
    contract_address: String,
}

impl<C> AddressProviderQueryClient<C> {
    pub fn new(client: Arc<C>, contract_address: impl Into<String>) -> Self {
        Self {
            client,
            contract_address: contract_address.into(),
        }
    }

    /// The chain client this contract client sends through.
    pub fn client(&self) -> &Arc<C> {
        &self.client
    }
}

impl<C> Clone for AddressProviderQueryClient<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            contract_address: self.contract_address.clone(),
        }
    }
}

impl<C> std::fmt::Debug for AddressProviderQueryClient<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AddressProviderQueryClient")
            .field("contract_address", &self.contract_address)
            .finish()
    }
}

impl<C: CosmWasmQuerier> AddressProviderQueryClient<C> {
    async fn query<T>(&self, msg: QueryMsg) -> Result<T, Report>
    where
        T: DeserializeOwned + Send,
    {
        debug!(contract = %self.contract_address, ?msg, "Querying address provider");
        self.client
            .query_contract_smart(&self.contract_address, &msg)
            .await
    }
}

#[async_trait]
impl<C: CosmWasmQuerier> AddressProviderReadOnly for AddressProviderQueryClient<C> {
    fn contract_address(&self) -> &str {
        &self.contract_address
    }

    async fn config(&self) -> Result<InstantiateMsg, Report> {
        self.query(QueryMsg::Config {}).await
    }

    async fn address(&self) -> Result<AddressResponseItem, Report> {
        self.query(QueryMsg::Address {}).await
    }

    async fn addresses(&self) -> Result<Vec<AddressResponseItem>, Report> {
        self.query(QueryMsg::Addresses {}).await
    }

    async fn all_addresses(
        &self,
        limit: Option<u32>,
        start_after: Option<MarsContract>,
    ) -> Result<Vec<AddressResponseItem>, Report> {
        self.query(QueryMsg::AllAddresses { limit, start_after })
            .await
    }
}
