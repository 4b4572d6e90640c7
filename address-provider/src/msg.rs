//!
//! Messages and responses of the address provider contract, in their wire shape.
//!

use std::fmt;

use cosmwasm_schema::{cw_serde, QueryResponses};

/// Instantiation parameters, also returned by the `config` query.
#[cw_serde]
pub struct InstantiateMsg {
    /// Contract owner, the only account allowed to execute.
    pub owner: String,
    /// Bech32 prefix the contract validates stored addresses against.
    pub prefix: String,
}

/// Roles the address provider keeps an address for.
#[cw_serde]
#[derive(Copy, Eq, Hash, PartialOrd, Ord)]
pub enum MarsContract {
    Incentives,
    Oracle,
    RedBank,
    RewardsCollector,
    ProtocolAdmin,
    FeeCollector,
    SafetyFund,
    Rover,
}

impl MarsContract {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarsContract::Incentives => "incentives",
            MarsContract::Oracle => "oracle",
            MarsContract::RedBank => "red_bank",
            MarsContract::RewardsCollector => "rewards_collector",
            MarsContract::ProtocolAdmin => "protocol_admin",
            MarsContract::FeeCollector => "fee_collector",
            MarsContract::SafetyFund => "safety_fund",
            MarsContract::Rover => "rover",
        }
    }
}

impl fmt::Display for MarsContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cw_serde]
pub enum ExecuteMsg {
    SetAddress {
        address: String,
        contract: MarsContract,
    },
    TransferOwnership {
        new_owner: String,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(InstantiateMsg)]
    Config {},
    #[returns(AddressResponseItem)]
    Address {},
    #[returns(Vec<AddressResponseItem>)]
    Addresses {},
    #[returns(Vec<AddressResponseItem>)]
    AllAddresses {
        limit: Option<u32>,
        start_after: Option<MarsContract>,
    },
}

/// An address registered under a role.
#[cw_serde]
pub struct AddressResponseItem {
    pub address: String,
    pub contract: MarsContract,
}

pub type ArrayOfAddressResponseItem = Vec<AddressResponseItem>;
