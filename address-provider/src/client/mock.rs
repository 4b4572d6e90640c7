//!
//! Recording chain client for tests: remembers every payload and replays primed answers.
//!

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use color_eyre::{eyre::eyre, Report};
use cosmwasm_std::Coin;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use super::wasm::{CosmWasmQuerier, SigningCosmWasmClient};
use crate::fee::Fee;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockError(pub String);

impl std::fmt::Display for MockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for MockError {}

#[derive(Debug, Clone)]
pub struct SentQuery {
    pub contract: String,
    pub msg: Value,
}

#[derive(Debug, Clone)]
pub struct SentTx {
    pub sender: String,
    pub contract: String,
    pub msg: Value,
    pub fee: Fee,
    pub memo: Option<String>,
    pub funds: Vec<Coin>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockTxResponse {
    pub tx_hash: String,
}

#[derive(Default)]
pub struct MockChainClient {
    answers: Mutex<VecDeque<Result<Value, MockError>>>,
    queries: Mutex<Vec<SentQuery>>,
    txs: Mutex<Vec<SentTx>>,
}

impl MockChainClient {
    /// Queue a JSON answer for the next call.
    pub fn respond(&self, answer: Value) {
        self.answers.lock().unwrap().push_back(Ok(answer));
    }

    /// Queue a failure for the next call.
    pub fn fail(&self, reason: &str) {
        self.answers
            .lock()
            .unwrap()
            .push_back(Err(MockError(reason.to_string())));
    }

    pub fn queries(&self) -> Vec<SentQuery> {
        self.queries.lock().unwrap().clone()
    }

    pub fn txs(&self) -> Vec<SentTx> {
        self.txs.lock().unwrap().clone()
    }

    fn next_answer(&self) -> Result<Value, Report> {
        match self.answers.lock().unwrap().pop_front() {
            Some(Ok(answer)) => Ok(answer),
            Some(Err(err)) => Err(Report::new(err)),
            None => Err(eyre!("no answer primed")),
        }
    }
}

#[async_trait]
impl CosmWasmQuerier for MockChainClient {
    async fn query_contract_smart<M, T>(&self, contract_addr: &str, msg: &M) -> Result<T, Report>
    where
        M: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        self.queries.lock().unwrap().push(SentQuery {
            contract: contract_addr.to_string(),
            msg: serde_json::to_value(msg)?,
        });
        let answer = self.next_answer()?;
        Ok(serde_json::from_value(answer)?)
    }
}

#[async_trait]
impl SigningCosmWasmClient for MockChainClient {
    type TxResponse = MockTxResponse;

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
        M: Serialize + Sync,
    {
        self.txs.lock().unwrap().push(SentTx {
            sender: sender.to_string(),
            contract: contract_addr.to_string(),
            msg: serde_json::to_value(msg)?,
            fee: fee.clone(),
            memo: memo.map(str::to_string),
            funds: funds.to_vec(),
        });
        let answer = self.next_answer()?;
        Ok(MockTxResponse {
            tx_hash: serde_json::from_value(answer)?,
        })
    }
}
