//!
//! Transaction controls attached to every execute call.
//!

use cosmwasm_std::Coin;
use serde::{Deserialize, Serialize};

/// An explicit fee: the coins paid and the gas limit they buy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StdFee {
    pub amount: Vec<Coin>,
    pub gas: u64,
}

/// How the signing client should pay for a transaction.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fee {
    /// Let the signing client simulate and price the transaction.
    #[default]
    Auto,
    /// Use exactly this fee.
    Fixed(StdFee),
    /// Simulate the gas, then price it at this gas price.
    Estimated(f64),
}

/// Fee, memo and funds of an execute call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExecuteOptions {
    pub fee: Fee,
    pub memo: Option<String>,
    pub funds: Vec<Coin>,
}

impl ExecuteOptions {
    pub fn fee(mut self, fee: Fee) -> Self {
        self.fee = fee;
        self
    }

    pub fn memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }

    pub fn funds(mut self, funds: Vec<Coin>) -> Self {
        self.funds = funds;
        self
    }
}
