use std::sync::Arc;

use async_trait::async_trait;
use color_eyre::Report;
use tracing::debug;

use super::interface::{AddressProviderExecute, AddressProviderReadOnly};
use super::query_client::AddressProviderQueryClient;
use super::wasm::SigningCosmWasmClient;
use crate::fee::ExecuteOptions;
use crate::msg::{AddressResponseItem, ExecuteMsg, InstantiateMsg, MarsContract};

///
/// Signing client for one deployed address provider, acting as `sender`.
///
/// Queries go through the embedded [`AddressProviderQueryClient`], which shares
/// the same chain client.
///
pub struct AddressProviderClient<C> {
    querier: AddressProviderQueryClient<C>,
    sender: String,
}

impl<C> AddressProviderClient<C> {
    pub fn new(
        client: Arc<C>,
        sender: impl Into<String>,
        contract_address: impl Into<String>,
    ) -> Self {
        Self {
            querier: AddressProviderQueryClient::new(client, contract_address),
            sender: sender.into(),
        }
    }

    pub fn querier(&self) -> &AddressProviderQueryClient<C> {
        &self.querier
    }

    pub fn client(&self) -> &Arc<C> {
        self.querier.client()
    }
}

impl<C> Clone for AddressProviderClient<C> {
    fn clone(&self) -> Self {
        Self {
            querier: self.querier.clone(),
            sender: self.sender.clone(),
        }
    }
}

impl<C> std::fmt::Debug for AddressProviderClient<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AddressProviderClient")
            .field("querier", &self.querier)
            .field("sender", &self.sender)
            .finish()
    }
}

impl<C: SigningCosmWasmClient> AddressProviderClient<C> {
    async fn execute(
        &self,
        msg: ExecuteMsg,
        options: ExecuteOptions,
    ) -> Result<C::TxResponse, Report> {
        let ExecuteOptions { fee, memo, funds } = options;
        let contract_address = self.querier.contract_address();
        debug!(
            contract = %contract_address,
            sender = %self.sender,
            ?msg,
            ?fee,
            "Executing on address provider"
        );
        self.querier
            .client
            .execute(
                &self.sender,
                contract_address,
                &msg,
                &fee,
                memo.as_deref(),
                &funds,
            )
            .await
    }
}

#[async_trait]
impl<C: SigningCosmWasmClient> AddressProviderReadOnly for AddressProviderClient<C> {
    fn contract_address(&self) -> &str {
        self.querier.contract_address()
    }

    async fn config(&self) -> Result<InstantiateMsg, Report> {
        self.querier.config().await
    }

    async fn address(&self) -> Result<AddressResponseItem, Report> {
        self.querier.address().await
    }

    async fn addresses(&self) -> Result<Vec<AddressResponseItem>, Report> {
        self.querier.addresses().await
    }

    async fn all_addresses(
        &self,
        limit: Option<u32>,
        start_after: Option<MarsContract>,
    ) -> Result<Vec<AddressResponseItem>, Report> {
        self.querier.all_addresses(limit, start_after).await
    }
}

#[async_trait]
impl<C: SigningCosmWasmClient> AddressProviderExecute for AddressProviderClient<C> {
    type TxResponse = C::TxResponse;

    fn sender(&self) -> &str {
        &self.sender
    }

    async fn set_address(
        &self,
        address: String,
        contract: MarsContract,
        options: ExecuteOptions,
    ) -> Result<Self::TxResponse, Report> {
        self.execute(ExecuteMsg::SetAddress { address, contract }, options)
            .await
    }

    async fn transfer_ownership(
        &self,
        new_owner: String,
        options: ExecuteOptions,
    ) -> Result<Self::TxResponse, Report> {
        self.execute(ExecuteMsg::TransferOwnership { new_owner }, options)
            .await
    }
}
