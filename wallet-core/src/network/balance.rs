// wallet-core/src/network/balance.rs
//
// Balance Fetcher
//
//   Solana:   getBalance([address])             → lamports / 10^9
//   Ethereum: eth_getBalance([address,"latest"]) → hex wei  / 10^18
//
// `fetch_balance` reports every failure. The `*_or_zero` family keeps the
// legacy zero-on-error contract: failures are logged and read as 0.

use super::models::Balance;
use super::rpc::HttpRpcClient;
use super::traits::RpcTransport;
use crate::chains::evm::EvmAddress;
use crate::chains::solana::SolanaKeypair;
use crate::chains::Network;
use crate::config::WalletConfig;
use crate::error::{NetworkError, WalletResult};
use num_bigint::BigUint;
use serde_json::{json, Value};

pub struct BalanceFetcher {
    solana: Box<dyn RpcTransport>,
    ethereum: Box<dyn RpcTransport>,
}

impl std::fmt::Debug for BalanceFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BalanceFetcher")
            .field("solana", &self.solana.endpoint())
            .field("ethereum", &self.ethereum.endpoint())
            .finish()
    }
}

impl BalanceFetcher {
    pub fn new(solana: Box<dyn RpcTransport>, ethereum: Box<dyn RpcTransport>) -> Self {
        Self { solana, ethereum }
    }

    /// HTTP clients for both endpoints named in `config`
    pub fn from_config(config: &WalletConfig) -> WalletResult<Self> {
        let timeout = config.rpc_timeout();
        Ok(Self::new(
            Box::new(HttpRpcClient::new(config.solana_rpc_url.clone(), timeout)?),
            Box::new(HttpRpcClient::new(config.ethereum_rpc_url.clone(), timeout)?),
        ))
    }

    // =========================================================================
    // RESULT-TYPED API
    // =========================================================================

    pub async fn fetch_balance(&self, address: &str, network: Network) -> WalletResult<Balance> {
        match network {
            Network::Solana => self.solana_balance(address).await,
            Network::Ethereum => self.ethereum_balance(address).await,
        }
    }

    async fn solana_balance(&self, address: &str) -> WalletResult<Balance> {
        if !SolanaKeypair::is_valid_address(address) {
            return Err(NetworkError::InvalidAddress(address.to_string()).into());
        }

        let result = self.solana.call("getBalance", json!([address])).await?;
        let lamports = parse_lamports(&result)?;
        tracing::debug!(address, lamports, "solana balance");
        Ok(Balance::from_lamports(lamports))
    }

    async fn ethereum_balance(&self, address: &str) -> WalletResult<Balance> {
        if !EvmAddress::is_valid(address) {
            return Err(NetworkError::InvalidAddress(address.to_string()).into());
        }

        let result = self
            .ethereum
            .call("eth_getBalance", json!([address, "latest"]))
            .await?;
        let hex = result.as_str().ok_or_else(|| {
            NetworkError::MalformedResponse(format!("expected hex string, got {}", result))
        })?;
        let wei = parse_wei(hex)?;
        tracing::debug!(address, %wei, "ethereum balance");
        Ok(Balance::from_wei(&wei))
    }

    // =========================================================================
    // ZERO-ON-ERROR API
    // =========================================================================

    pub async fn fetch_balance_or_zero(&self, address: &str, network: Network) -> f64 {
        match self.fetch_balance(address, network).await {
            Ok(balance) => balance.as_f64(),
            Err(e) => {
                tracing::warn!(%network, address, error = %e, "balance fetch failed, reporting 0");
                0.0
            }
        }
    }

    pub async fn fetch_solana_balance(&self, address: &str) -> f64 {
        self.fetch_balance_or_zero(address, Network::Solana).await
    }

    pub async fn fetch_ethereum_balance(&self, address: &str) -> f64 {
        self.fetch_balance_or_zero(address, Network::Ethereum).await
    }
}

/// `getBalance` returns `{context, value}`; some nodes return the bare integer.
fn parse_lamports(result: &Value) -> WalletResult<u64> {
    result
        .get("value")
        .unwrap_or(result)
        .as_u64()
        .ok_or_else(|| {
            NetworkError::MalformedResponse(format!("expected lamports, got {}", result)).into()
        })
}

/// `0x`-prefixed quantity → wei, without any precision loss
pub fn parse_wei(hex: &str) -> WalletResult<BigUint> {
    let digits = hex
        .strip_prefix("0x")
        .or_else(|| hex.strip_prefix("0X"))
        .ok_or_else(|| NetworkError::MalformedResponse(format!("'{}' is not 0x-prefixed", hex)))?;

    BigUint::parse_bytes(digits.as_bytes(), 16)
        .ok_or_else(|| NetworkError::MalformedResponse(format!("'{}' is not a hex quantity", hex)).into())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WalletError;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    const SOL_ADDRESS: &str = "11111111111111111111111111111111";
    const ETH_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

    enum Reply {
        Result(Value),
        Rpc(i64, &'static str),
        Down,
    }

    struct FakeTransport {
        reply: Reply,
        calls: Mutex<Vec<(String, Value)>>,
    }

    impl FakeTransport {
        fn new(reply: Reply) -> Arc<Self> {
            Arc::new(Self {
                reply,
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<(String, Value)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RpcTransport for FakeTransport {
        fn endpoint(&self) -> &str {
            "fake"
        }

        async fn call(&self, method: &str, params: Value) -> WalletResult<Value> {
            self.calls.lock().unwrap().push((method.to_string(), params));
            match &self.reply {
                Reply::Result(value) => Ok(value.clone()),
                Reply::Rpc(code, message) => Err(NetworkError::Rpc {
                    code: *code,
                    message: message.to_string(),
                }
                .into()),
                Reply::Down => Err(NetworkError::Transport {
                    url: "fake".to_string(),
                    reason: "connection refused".to_string(),
                }
                .into()),
            }
        }
    }

    fn fetcher(solana: Arc<FakeTransport>, ethereum: Arc<FakeTransport>) -> BalanceFetcher {
        BalanceFetcher::new(Box::new(solana), Box::new(ethereum))
    }

    #[tokio::test]
    async fn test_ethereum_one_ether() {
        let eth = FakeTransport::new(Reply::Result(json!("0xde0b6b3a7640000")));
        let fetcher = fetcher(FakeTransport::new(Reply::Down), eth.clone());

        assert_eq!(fetcher.fetch_ethereum_balance(ETH_ADDRESS).await, 1.0);
        assert_eq!(
            eth.calls(),
            vec![("eth_getBalance".to_string(), json!([ETH_ADDRESS, "latest"]))]
        );
    }

    #[tokio::test]
    async fn test_solana_lamports() {
        let sol = FakeTransport::new(Reply::Result(
            json!({"context": {"slot": 1}, "value": 2_500_000_000u64}),
        ));
        let fetcher = fetcher(sol.clone(), FakeTransport::new(Reply::Down));

        assert_eq!(fetcher.fetch_solana_balance(SOL_ADDRESS).await, 2.5);
        assert_eq!(
            sol.calls(),
            vec![("getBalance".to_string(), json!([SOL_ADDRESS]))]
        );
    }

    #[tokio::test]
    async fn test_solana_bare_integer_result() {
        let sol = FakeTransport::new(Reply::Result(json!(1_000_000_000u64)));
        let fetcher = fetcher(sol, FakeTransport::new(Reply::Down));

        let balance = fetcher.fetch_balance(SOL_ADDRESS, Network::Solana).await.unwrap();
        assert_eq!(balance.formatted, "1");
        assert_eq!(balance.symbol, "SOL");
    }

    #[tokio::test]
    async fn test_failure_collapses_to_zero() {
        let fetcher = fetcher(FakeTransport::new(Reply::Down), FakeTransport::new(Reply::Down));

        assert_eq!(fetcher.fetch_solana_balance(SOL_ADDRESS).await, 0.0);
        assert_eq!(fetcher.fetch_ethereum_balance(ETH_ADDRESS).await, 0.0);
    }

    #[tokio::test]
    async fn test_failure_is_reported_by_result_api() {
        let fetcher = fetcher(FakeTransport::new(Reply::Down), FakeTransport::new(Reply::Down));

        let result = fetcher.fetch_balance(ETH_ADDRESS, Network::Ethereum).await;
        assert!(matches!(
            result,
            Err(WalletError::Network(NetworkError::Transport { .. }))
        ));
    }

    #[tokio::test]
    async fn test_rpc_error_object() {
        let eth = FakeTransport::new(Reply::Rpc(-32000, "header not found"));
        let fetcher = fetcher(FakeTransport::new(Reply::Down), eth);

        assert_eq!(
            fetcher.fetch_balance(ETH_ADDRESS, Network::Ethereum).await,
            Err(WalletError::Network(NetworkError::Rpc {
                code: -32000,
                message: "header not found".to_string(),
            }))
        );
        assert_eq!(fetcher.fetch_ethereum_balance(ETH_ADDRESS).await, 0.0);
    }

    #[tokio::test]
    async fn test_invalid_solana_address_skips_request() {
        let sol = FakeTransport::new(Reply::Result(json!({"value": 5})));
        let fetcher = fetcher(sol.clone(), FakeTransport::new(Reply::Down));

        assert_eq!(
            fetcher.fetch_balance("not-an-address", Network::Solana).await,
            Err(WalletError::Network(NetworkError::InvalidAddress(
                "not-an-address".to_string()
            )))
        );
        assert!(sol.calls().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_ethereum_address_skips_request() {
        let eth = FakeTransport::new(Reply::Result(json!("0x1")));
        let fetcher = fetcher(FakeTransport::new(Reply::Down), eth.clone());

        assert_eq!(
            fetcher.fetch_balance("0x123", Network::Ethereum).await,
            Err(WalletError::Network(NetworkError::InvalidAddress(
                "0x123".to_string()
            )))
        );
        assert_eq!(fetcher.fetch_ethereum_balance("0x123").await, 0.0);
        assert!(eth.calls().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_ethereum_result() {
        let eth = FakeTransport::new(Reply::Result(json!(12345)));
        let fetcher = fetcher(FakeTransport::new(Reply::Down), eth);

        assert!(matches!(
            fetcher.fetch_balance(ETH_ADDRESS, Network::Ethereum).await,
            Err(WalletError::Network(NetworkError::MalformedResponse(_)))
        ));
    }

    #[test]
    fn test_parse_wei() {
        assert_eq!(parse_wei("0x0").unwrap(), BigUint::from(0u8));
        assert_eq!(
            parse_wei("0xde0b6b3a7640000").unwrap(),
            BigUint::from(1_000_000_000_000_000_000u64)
        );
        // 2^80, beyond u64
        assert_eq!(
            parse_wei("0x100000000000000000000").unwrap(),
            BigUint::from(1u8) << 80usize
        );
        assert!(parse_wei("de0b6b3a7640000").is_err());
        assert!(parse_wei("0xzz").is_err());
        assert!(parse_wei("0x").is_err());
    }
}
