// wallet-core/src/network/mod.rs
//
// Balance lookups over JSON-RPC
//
// - traits:  `RpcTransport`, the seam between fetcher and endpoint
// - rpc:     reqwest-backed `HttpRpcClient`
// - balance: `BalanceFetcher` for Solana and Ethereum
// - models:  `Balance`, `NetworkInfo`

pub mod balance;
pub mod models;
pub mod rpc;
pub mod traits;

pub use balance::BalanceFetcher;
pub use models::{Balance, NetworkInfo};
pub use rpc::HttpRpcClient;
pub use traits::RpcTransport;
