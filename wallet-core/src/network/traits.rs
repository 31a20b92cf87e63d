// wallet-core/src/network/traits.rs
//
// Transport seam between the balance fetcher and the JSON-RPC endpoints.
// Production code talks HTTP through `HttpRpcClient`; tests plug in fakes.

use crate::error::WalletResult;
use async_trait::async_trait;
use serde_json::Value;

/// A JSON-RPC 2.0 endpoint
#[async_trait]
pub trait RpcTransport: Send + Sync {
    /// URL or label used in logs and error messages
    fn endpoint(&self) -> &str;

    /// Call `method` with `params` and return the `result` member of the
    /// response. An `error` member, a missing `result`, a non-2xx status and
    /// transport failures are all reported as `WalletError::Network`.
    async fn call(&self, method: &str, params: Value) -> WalletResult<Value>;
}

#[async_trait]
impl<T: RpcTransport + ?Sized> RpcTransport for std::sync::Arc<T> {
    fn endpoint(&self) -> &str {
        (**self).endpoint()
    }

    async fn call(&self, method: &str, params: Value) -> WalletResult<Value> {
        (**self).call(method, params).await
    }
}
