use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use wallet_core::{Network, WalletConfig};

#[derive(Parser)]
#[command(name = "wallet-cli")]
#[command(about = "Solana / Ethereum wallet onboarding", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub global: GlobalArgs,
}

#[derive(Args)]
pub struct GlobalArgs {
    /// Tracing filter, e.g. `debug` or `wallet_core=trace` (overrides RUST_LOG)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Solana JSON-RPC endpoint (overrides SOLANA_RPC_URL)
    #[arg(long, global = true)]
    pub solana_rpc: Option<String>,

    /// Ethereum JSON-RPC endpoint (overrides ETHEREUM_RPC_URL)
    #[arg(long, global = true)]
    pub ethereum_rpc: Option<String>,

    /// RPC request timeout in seconds (overrides RPC_TIMEOUT_SECS)
    #[arg(long, global = true)]
    pub rpc_timeout: Option<u64>,

    /// Keep wizard state in this JSON file (overrides WALLET_SESSION_FILE)
    #[arg(long, global = true)]
    pub session_file: Option<PathBuf>,
}

impl GlobalArgs {
    /// Environment config with command line overrides applied
    pub fn apply(&self, mut config: WalletConfig) -> WalletConfig {
        if let Some(url) = &self.solana_rpc {
            config.solana_rpc_url = url.clone();
        }
        if let Some(url) = &self.ethereum_rpc {
            config.ethereum_rpc_url = url.clone();
        }
        if let Some(secs) = self.rpc_timeout.filter(|s| *s > 0) {
            config.rpc_timeout_secs = secs;
        }
        if let Some(path) = &self.session_file {
            config.session_file = Some(path.clone());
        }
        config
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive setup → network → accounts wizard (default)
    Wizard,
    /// Print a fresh 12-word recovery phrase
    Generate,
    /// Derive accounts from WALLET_MNEMONIC (or a phrase read from stdin)
    Derive {
        #[arg(long)]
        network: Network,
        #[arg(long, default_value_t = 1)]
        count: u32,
        /// Also print private keys
        #[arg(long)]
        show_keys: bool,
    },
    /// Native balance of an address
    Balance {
        #[arg(long)]
        network: Network,
        address: String,
    },
    /// Write a recovery phrase backup file for WALLET_MNEMONIC (or stdin)
    Backup {
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_derive() {
        let cli = Cli::parse_from([
            "wallet-cli",
            "derive",
            "--network",
            "solana",
            "--count",
            "3",
        ]);
        match cli.command {
            Some(Commands::Derive {
                network,
                count,
                show_keys,
            }) => {
                assert_eq!(network, Network::Solana);
                assert_eq!(count, 3);
                assert!(!show_keys);
            }
            _ => panic!("expected derive"),
        }
    }

    #[test]
    fn test_default_is_wizard() {
        let cli = Cli::parse_from(["wallet-cli"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_overrides_apply() {
        let cli = Cli::parse_from([
            "wallet-cli",
            "--ethereum-rpc",
            "http://localhost:8545",
            "--rpc-timeout",
            "3",
            "balance",
            "--network",
            "eth",
            "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266",
        ]);
        let config = cli.global.apply(WalletConfig::default());
        assert_eq!(config.ethereum_rpc_url, "http://localhost:8545");
        assert_eq!(config.rpc_timeout_secs, 3);
        assert_eq!(config.solana_rpc_url, WalletConfig::default().solana_rpc_url);
    }
}
