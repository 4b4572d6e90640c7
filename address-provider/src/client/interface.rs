use async_trait::async_trait;
use color_eyre::Report;

use crate::fee::ExecuteOptions;
use crate::msg::{AddressResponseItem, InstantiateMsg, MarsContract};

///
/// Read-only side of the address provider.
///
#[async_trait]
pub trait AddressProviderReadOnly {
    fn contract_address(&self) -> &str;

    async fn config(&self) -> Result<InstantiateMsg, Report>;

    async fn address(&self) -> Result<AddressResponseItem, Report>;

    async fn addresses(&self) -> Result<Vec<AddressResponseItem>, Report>;

    /// One page of registered addresses, starting after `start_after`.
    ///
    /// When `limit` is `None` the contract picks its own page size.
    async fn all_addresses(
        &self,
        limit: Option<u32>,
        start_after: Option<MarsContract>,
    ) -> Result<Vec<AddressResponseItem>, Report>;
}

///
/// Mutating side of the address provider, every call is one signed transaction.
///
#[async_trait]
pub trait AddressProviderExecute: AddressProviderReadOnly {
    type TxResponse: Send;

    fn sender(&self) -> &str;

    async fn set_address(
        &self,
        address: String,
        contract: MarsContract,
        options: ExecuteOptions,
    ) -> Result<Self::TxResponse, Report>;

    async fn transfer_ownership(
        &self,
        new_owner: String,
        options: ExecuteOptions,
    ) -> Result<Self::TxResponse, Report>;
}
