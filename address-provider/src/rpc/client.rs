use std::collections::HashMap;
use std::future::Future;
use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use bip39::Mnemonic;
use color_eyre::{eyre::eyre, Report};
use cosm_orc::config::cfg::Config as CosmOrcConfig;
use cosm_orc::config::ChainConfig as CosmOrcChainConfig;
use cosm_orc::orchestrator::{cosm_orc::CosmOrc, Address, Denom, SigningKey, TendermintRPC};
use cosm_orc::orchestrator::{ChainTxResponse, Coin, Key};
use cosm_tome::chain::fee::{Fee as ChainFee, Gas};
use cosm_tome::chain::request::TxOptions;
use cosm_tome::modules::cosmwasm::model::ExecRequest;
use cosmrs::{bip32, AccountId};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::time::timeout;

use crate::client::{CosmWasmQuerier, SigningCosmWasmClient};
use crate::config::ChainConfig;
use crate::fee::{Fee, StdFee};
use crate::logging::{info, warn};
use crate::utils::normalize_rpc_url;

/// A Tendermint RPC client able to query and execute any contract.
#[derive(Clone)]
pub struct RpcClient {
    cfg: ChainConfig,
    rpc_url: String,
    client: CosmOrc<TendermintRPC>,
    key: Option<SigningKey>,
    account_id: Option<AccountId>,
    timeout: Duration,
}

impl std::fmt::Debug for RpcClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcClient")
            .field("chain_id", &self.cfg.chain_id)
            .field("rpc_url", &self.rpc_url)
            .field("account_id", &self.account_id)
            .finish()
    }
}

impl RpcClient {
    /// Create a new query-only [`RpcClient`].
    pub fn new(cfg: &ChainConfig) -> Result<Self, Report> {
        let timeout = Duration::try_from_secs_f64(cfg.rpc_timeout_seconds).map_err(|e| {
            eyre!(
                "Invalid rpc_timeout_seconds {}: {}",
                cfg.rpc_timeout_seconds,
                e
            )
        })?;
        let rpc_url = normalize_rpc_url(cfg.rpc_endpoint.as_str());
        let client = Self::cosm_orc(cfg, &rpc_url, cfg.gas_prices)?;
        info!("[{}] RPC client ready @ {}", cfg.chain_id, rpc_url);

        Ok(Self {
            cfg: cfg.clone(),
            rpc_url,
            client,
            key: None,
            account_id: None,
            timeout,
        })
    }

    /// Attach the signing key derived from `mnemonic`.
    pub fn with_mnemonic(mut self, mnemonic: &str) -> Result<Self, Report> {
        let account_id = derive_account_id(mnemonic, &self.cfg.derivation_path, &self.cfg.prefix)?;
        info!("[{}] Signing as {}", self.cfg.chain_id, account_id);

        self.key = Some(SigningKey {
            name: "address-provider".to_string(),
            key: Key::Mnemonic(mnemonic.to_string()),
            derivation_path: self.cfg.derivation_path.clone(),
        });
        self.account_id = Some(account_id);
        Ok(self)
    }

    /// The account executions are signed with, if a key is attached.
    pub fn account_id(&self) -> Option<&AccountId> {
        self.account_id.as_ref()
    }

    fn cosm_orc(
        cfg: &ChainConfig,
        rpc_url: &str,
        gas_price: f64,
    ) -> Result<CosmOrc<TendermintRPC>, Report> {
        let config = CosmOrcConfig {
            chain_cfg: CosmOrcChainConfig {
                denom: cfg.denom.clone(),
                prefix: cfg.prefix.clone(),
                chain_id: cfg.chain_id.clone(),
                rpc_endpoint: Some(rpc_url.to_string()),
                grpc_endpoint: None,
                gas_price,
                gas_adjustment: cfg.gas_adjustment,
                derivation_path: cfg.derivation_path.clone(),
            },
            contract_deploy_info: HashMap::new(),
        };
        Ok(CosmOrc::new_tendermint_rpc(config, false)?)
    }

    async fn timed<F, T, E>(&self, action: &str, fut: F) -> Result<T, Report>
    where
        F: Future<Output = Result<T, E>>,
        Report: From<E>,
    {
        let secs = self.timeout.as_secs_f64();
        match timeout(self.timeout, fut).await {
            Ok(res) => Ok(res?),
            Err(_) => {
                warn!("[{}] Timeout ({}s) while {}", self.cfg.chain_id, secs, action);
                Err(eyre!("Timeout ({}s) while {}", secs, action))
            }
        }
    }
}

#[async_trait]
impl CosmWasmQuerier for RpcClient {
    async fn query_contract_smart<M, T>(&self, contract_addr: &str, msg: &M) -> Result<T, Report>
    where
        M: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        let address = contract_addr.parse::<Address>()?;
        let response = self
            .timed("querying contract", self.client.client.wasm_query(address, msg))
            .await?;

        let data = response
            .data()
            .map_err(|e| eyre!("Failed to deserialize response data: {}", e))?;
        Ok(data)
    }
}

#[async_trait]
impl SigningCosmWasmClient for RpcClient {
    type TxResponse = ChainTxResponse;

    async fn execute<M>(
        &self,
        sender: &str,
        contract_addr: &str,
        msg: &M,
        fee: &Fee,
        memo: Option<&str>,
        funds: &[cosmwasm_std::Coin],
    ) -> Result<Self::TxResponse, Report>
    where
        M: Serialize + Sync,
    {
        let (key, account_id) = match (&self.key, &self.account_id) {
            (Some(key), Some(account_id)) => (key, account_id),
            _ => return Err(eyre!("No signing key set")),
        };
        if account_id.as_ref() != sender {
            return Err(eyre!(
                "Sender {} does not match signing key account {}",
                sender,
                account_id
            ));
        }

        let address = contract_addr.parse::<Address>()?;
        let funds = funds
            .iter()
            .map(to_chain_coin)
            .collect::<Result<Vec<_>, Report>>()?;

        // A custom gas price needs its own orchestrator, simulation reads it from the chain config.
        let repriced = match fee {
            Fee::Estimated(_) => Some(Self::cosm_orc(
                &self.cfg,
                &self.rpc_url,
                gas_price_for(fee, &self.cfg),
            )?),
            Fee::Auto | Fee::Fixed(_) => None,
        };
        let client = repriced.as_ref().unwrap_or(&self.client);
        let options = tx_options(fee, memo)?;

        let response = self
            .timed(
                "executing contract",
                client.client.wasm_execute(
                    ExecRequest {
                        address,
                        msg,
                        funds,
                    },
                    key,
                    &options,
                ),
            )
            .await?;

        Ok(response.res)
    }
}

/// Derive the bech32 account of `mnemonic` at `derivation_path`.
pub fn derive_account_id(
    mnemonic: &str,
    derivation_path: &str,
    prefix: &str,
) -> Result<AccountId, Report> {
    let mnemonic =
        Mnemonic::parse(mnemonic).map_err(|err| eyre!("Invalid mnemonic: {}", err))?;
    let path = derivation_path
        .parse::<bip32::DerivationPath>()
        .map_err(|err| eyre!("Invalid derivation path {}: {}", derivation_path, err))?;
    let xprv = bip32::XPrv::derive_from_path(mnemonic.to_seed(""), &path)
        .map_err(|err| eyre!("Failed to derive key: {}", err))?;

    let signing_key: cosmrs::crypto::secp256k1::SigningKey = xprv.into();
    let account_id = signing_key.public_key().account_id(prefix)?;
    Ok(account_id)
}

/// Gas price the transaction is simulated at.
fn gas_price_for(fee: &Fee, cfg: &ChainConfig) -> f64 {
    match fee {
        Fee::Estimated(gas_price) => *gas_price,
        Fee::Auto | Fee::Fixed(_) => cfg.gas_prices,
    }
}

/// Explicit fee and memo of the transaction. No fee means simulate.
fn tx_options(fee: &Fee, memo: Option<&str>) -> Result<TxOptions, Report> {
    Ok(TxOptions {
        fee: match fee {
            Fee::Fixed(std_fee) => Some(to_chain_fee(std_fee)?),
            Fee::Auto | Fee::Estimated(_) => None,
        },
        memo: memo.unwrap_or_default().to_string(),
        ..Default::default()
    })
}

fn to_chain_coin(coin: &cosmwasm_std::Coin) -> Result<Coin, Report> {
    Ok(Coin {
        denom: Denom::from_str(&coin.denom)?,
        amount: coin.amount.u128(),
    })
}

fn to_chain_fee(fee: &StdFee) -> Result<ChainFee, Report> {
    Ok(ChainFee {
        amount: fee.amount.iter().map(to_chain_coin).collect::<Result<_, _>>()?,
        gas_limit: Gas::from(fee.gas),
        payer: None,
        granter: None,
    })
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::coin;
    use url::Url;

    use super::*;

    const MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    fn chain_config() -> ChainConfig {
        ChainConfig {
            chain_id: "osmo-test-5".to_string(),
            prefix: "osmo".to_string(),
            denom: "uosmo".to_string(),
            rpc_endpoint: Url::parse("http://localhost:26657").unwrap(),
            address_provider: "osmo1addressprovider".to_string(),
            gas_prices: 0.025,
            gas_adjustment: 1.5,
            rpc_timeout_seconds: 1.0,
            derivation_path: crate::config::DERIVATION_PATH.to_string(),
        }
    }

    #[test]
    fn derives_prefixed_account() {
        let account = derive_account_id(MNEMONIC, crate::config::DERIVATION_PATH, "osmo").unwrap();

        assert!(account.as_ref().starts_with("osmo1"));
    }

    #[test]
    fn rejects_bad_mnemonic() {
        let err = derive_account_id("not a mnemonic", crate::config::DERIVATION_PATH, "osmo")
            .unwrap_err();

        assert!(err.to_string().contains("Invalid mnemonic"));
    }

    #[test]
    fn converts_funds_and_fees() {
        let chain_coin = to_chain_coin(&coin(42, "umars")).unwrap();
        assert_eq!(chain_coin.amount, 42);

        let fee = to_chain_fee(&StdFee {
            amount: vec![coin(5000, "uosmo")],
            gas: 200_000,
        })
        .unwrap();
        assert_eq!(fee.amount.len(), 1);
        assert_eq!(fee.amount[0].amount, 5000);
    }

    #[test]
    fn rejects_unusable_timeouts() {
        for secs in [-1.0, f64::NAN, f64::INFINITY] {
            let cfg = ChainConfig {
                rpc_timeout_seconds: secs,
                ..chain_config()
            };

            let err = RpcClient::new(&cfg).unwrap_err();

            assert!(err.to_string().starts_with("Invalid rpc_timeout_seconds"));
        }
    }

    #[test]
    fn picks_gas_price_per_fee() {
        let cfg = chain_config();
        let fixed = Fee::Fixed(StdFee {
            amount: vec![coin(5000, "uosmo")],
            gas: 200_000,
        });

        assert_eq!(gas_price_for(&Fee::Auto, &cfg), 0.025);
        assert_eq!(gas_price_for(&fixed, &cfg), 0.025);
        assert_eq!(gas_price_for(&Fee::Estimated(0.04), &cfg), 0.04);
    }

    #[test]
    fn simulates_unless_fee_is_fixed() {
        let auto = tx_options(&Fee::Auto, None).unwrap();
        assert!(auto.fee.is_none());
        assert_eq!(auto.memo, "");

        let estimated = tx_options(&Fee::Estimated(0.04), Some("rotate oracle")).unwrap();
        assert!(estimated.fee.is_none());
        assert_eq!(estimated.memo, "rotate oracle");

        let fixed = tx_options(
            &Fee::Fixed(StdFee {
                amount: vec![coin(5000, "uosmo")],
                gas: 200_000,
            }),
            Some("handover"),
        )
        .unwrap();
        let fee = fixed.fee.unwrap();
        assert_eq!(fee.amount.len(), 1);
        assert_eq!(fee.amount[0].amount, 5000);
        assert_eq!(fixed.memo, "handover");
    }

    #[tokio::test]
    async fn times_out_stalled_requests() {
        let cfg = ChainConfig {
            rpc_timeout_seconds: 0.05,
            ..chain_config()
        };
        let client = RpcClient::new(&cfg).unwrap();

        let err = client
            .timed(
                "querying contract",
                futures_util::future::pending::<Result<(), Report>>(),
            )
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Timeout (0.05s) while querying contract");
    }

    #[tokio::test]
    async fn passes_request_errors_through_timer() {
        let client = RpcClient::new(&chain_config()).unwrap();

        let err = client
            .timed("querying contract", async {
                Err::<(), Report>(eyre!("connection refused"))
            })
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "connection refused");
    }

    #[tokio::test]
    async fn refuses_to_execute_without_key() {
        let client = RpcClient::new(&chain_config()).unwrap();

        let err = client
            .execute(
                "osmo1owner",
                "osmo1addressprovider",
                &serde_json::json!({ "transfer_ownership": { "new_owner": "osmo1new" } }),
                &Fee::Auto,
                None,
                &[],
            )
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "No signing key set");
    }

    #[tokio::test]
    async fn refuses_foreign_sender() {
        let client = RpcClient::new(&chain_config())
            .unwrap()
            .with_mnemonic(MNEMONIC)
            .unwrap();
        assert!(client.account_id().is_some());

        let err = client
            .execute(
                "osmo1someoneelse",
                "osmo1addressprovider",
                &serde_json::json!({ "transfer_ownership": { "new_owner": "osmo1new" } }),
                &Fee::Auto,
                None,
                &[],
            )
            .await
            .unwrap_err();

        assert!(err.to_string().contains("does not match signing key account"));
    }
}
