mod cli;
mod interactive;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use cli::{Cli, Commands};
use tracing::info;
use tracing_subscriber::EnvFilter;
use wallet_core::account::derive_accounts;
use wallet_core::wizard::write_backup;
use wallet_core::{api, BalanceFetcher, FileStore, MemoryStore, RecoveryPhrase, WalletConfig, Wizard};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.global.log_level.as_deref());

    let config = cli.global.apply(WalletConfig::from_env());

    match cli.command.unwrap_or(Commands::Wizard) {
        Commands::Wizard => run_wizard(&config).await,
        Commands::Generate => {
            let phrase = api::create_wallet();
            println!("{}", phrase.phrase());
            Ok(())
        }
        Commands::Derive {
            network,
            count,
            show_keys,
        } => {
            let phrase = read_phrase()?;
            for account in derive_accounts(&phrase, network, count)? {
                println!(
                    "{}\t{}\t{}",
                    account.index(),
                    account.derivation_path(),
                    account.address()
                );
                if show_keys {
                    println!("\t{}", account.private_key_hex().as_str());
                }
            }
            Ok(())
        }
        Commands::Balance { network, address } => {
            let balance = api::get_balance(&config, &address, network).await?;
            println!("{}", balance);
            Ok(())
        }
        Commands::Backup { out } => {
            let phrase = read_phrase()?;
            let path = write_backup(&phrase, &out, &Local::now())?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run_wizard(config: &WalletConfig) -> Result<()> {
    let fetcher = BalanceFetcher::from_config(config)?;
    match &config.session_file {
        Some(path) => {
            let store = FileStore::open(path)
                .with_context(|| format!("opening session file {}", path.display()))?;
            info!(path = %path.display(), "resuming wizard from session file");
            interactive::run(Wizard::start(store)?, &fetcher).await
        }
        None => {
            info!("wizard session kept in memory");
            interactive::run(Wizard::start(MemoryStore::new())?, &fetcher).await
        }
    }
}

/// `WALLET_MNEMONIC`, or one line from stdin
fn read_phrase() -> Result<RecoveryPhrase> {
    let raw = match std::env::var("WALLET_MNEMONIC") {
        Ok(raw) if !raw.trim().is_empty() => raw,
        _ => interactive::prompt("Recovery phrase: ")?.context("no recovery phrase given")?,
    };
    Ok(RecoveryPhrase::from_phrase(&raw)?)
}
