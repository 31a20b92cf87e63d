// wallet-core/src/network/rpc.rs
//
// HTTP JSON-RPC client (reqwest).

use super::traits::RpcTransport;
use crate::error::{NetworkError, WalletResult};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

/// Request id sent with every call; responses are matched one-to-one per
/// HTTP exchange so a fixed id is enough.
const REQUEST_ID: u64 = 1;

pub struct HttpRpcClient {
    url: String,
    client: Client,
}

impl std::fmt::Debug for HttpRpcClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpRpcClient").field("url", &self.url).finish()
    }
}

impl HttpRpcClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> WalletResult<Self> {
        let url = url.into();
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            NetworkError::Transport {
                url: url.clone(),
                reason: e.to_string(),
            }
        })?;
        Ok(Self { url, client })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// JSON-RPC 2.0 request envelope
pub fn request_body(method: &str, params: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "method": method,
        "params": params,
        "id": REQUEST_ID,
    })
}

/// Pull `result` out of a response envelope, surfacing an `error` member.
pub fn extract_result(mut response: Value) -> WalletResult<Value> {
    if let Some(error) = response.get("error").filter(|e| !e.is_null()) {
        let code = error.get("code").and_then(Value::as_i64).unwrap_or(0);
        let message = error
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("Unknown error")
            .to_string();
        return Err(NetworkError::Rpc { code, message }.into());
    }

    match response.get_mut("result").map(Value::take) {
        Some(Value::Null) | None => {
            Err(NetworkError::MalformedResponse("missing `result` member".to_string()).into())
        }
        Some(result) => Ok(result),
    }
}

#[async_trait]
impl RpcTransport for HttpRpcClient {
    fn endpoint(&self) -> &str {
        &self.url
    }

    async fn call(&self, method: &str, params: Value) -> WalletResult<Value> {
        tracing::debug!(url = %self.url, method, "rpc request");

        let response = self
            .client
            .post(&self.url)
            .json(&request_body(method, params))
            .send()
            .await
            .map_err(|e| NetworkError::Transport {
                url: self.url.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(NetworkError::HttpStatus(status.as_u16()).into());
        }

        let json: Value = response
            .json()
            .await
            .map_err(|e| NetworkError::MalformedResponse(e.to_string()))?;

        extract_result(json)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WalletError;

    #[test]
    fn test_request_body_shape() {
        let body = request_body("eth_getBalance", json!(["0xabc", "latest"]));
        assert_eq!(
            body,
            json!({
                "jsonrpc": "2.0",
                "method": "eth_getBalance",
                "params": ["0xabc", "latest"],
                "id": 1,
            })
        );
    }

    #[test]
    fn test_extract_result() {
        let response = json!({"jsonrpc": "2.0", "id": 1, "result": "0x1"});
        assert_eq!(extract_result(response).unwrap(), json!("0x1"));
    }

    #[test]
    fn test_extract_error_object() {
        let response = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": {"code": -32602, "message": "invalid params"},
        });
        assert_eq!(
            extract_result(response),
            Err(WalletError::Network(NetworkError::Rpc {
                code: -32602,
                message: "invalid params".to_string(),
            }))
        );
    }

    #[test]
    fn test_extract_missing_result() {
        let response = json!({"jsonrpc": "2.0", "id": 1});
        assert!(matches!(
            extract_result(response),
            Err(WalletError::Network(NetworkError::MalformedResponse(_)))
        ));
    }

    #[test]
    fn test_client_keeps_url() {
        let client = HttpRpcClient::new("http://127.0.0.1:8545", Duration::from_secs(5)).unwrap();
        assert_eq!(client.endpoint(), "http://127.0.0.1:8545");
        assert_eq!(client.url(), "http://127.0.0.1:8545");
    }
}
