use anyhow::{Context, Result};
use chrono::Local;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::info;
use wallet_core::network::BalanceFetcher;
use wallet_core::wizard::{write_backup, BalanceState, Screen, Wizard};
use wallet_core::{Network, SessionStore};

/// Read one trimmed line; `None` on end of input.
pub fn prompt(label: &str) -> Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn notice(result: wallet_core::WalletResult<impl Sized>) {
    if let Err(e) = result {
        println!("  ✗ {}", e);
    }
}

/// Drive the three screens until the user finishes or quits.
pub async fn run<S: SessionStore>(mut wizard: Wizard<S>, fetcher: &BalanceFetcher) -> Result<()> {
    loop {
        let keep_going = match wizard.screen() {
            Screen::Setup => setup_screen(&mut wizard)?,
            Screen::SelectNetwork => network_screen(&mut wizard)?,
            Screen::GenerateAccounts => accounts_screen(&mut wizard, fetcher).await?,
        };
        if !keep_going {
            info!(screen = %wizard.screen(), "wizard loop ended");
            return Ok(());
        }
    }
}

// =============================================================================
// SETUP
// =============================================================================

fn setup_screen<S: SessionStore>(wizard: &mut Wizard<S>) -> Result<bool> {
    println!("\n=== Wallet Setup ===");
    let setup = wizard.setup();
    match setup.phrase() {
        Some(phrase) if setup.is_revealed() => {
            for (i, word) in phrase.words().iter().enumerate() {
                println!("  {:>2}. {}", i + 1, word);
            }
        }
        Some(_) => println!("  Recovery phrase: ************ (hidden)"),
        None => println!("  No wallet created yet."),
    }

    if setup.is_import_open() {
        println!("\n  Import: {}/12 words entered", setup.slots().filled());
        for (i, word) in setup.slots().words().iter().enumerate() {
            if !word.is_empty() {
                println!("    {:>2}. {}", i + 1, word);
            }
        }
        println!("  w <n> <word>  set word n     p  paste 12 words");
        println!("  f <path>      load from file  s  submit import");
        println!("  c             cancel import");
    }
    println!("\n  1. Create new wallet   2. Import wallet   3. Show/hide phrase");
    println!("  4. Save backup file    n. Next            q. Quit");

    let line = match prompt("> ")? {
        Some(line) => line,
        None => return Ok(end_of_input()),
    };
    let mut parts = line.splitn(3, ' ');
    let setup = wizard.setup_mut();
    match (parts.next().unwrap_or(""), parts.next(), parts.next()) {
        ("1", _, _) => {
            setup.create_new_wallet();
            println!("  ✓ New wallet created. Write the words down before continuing.");
        }
        ("2", _, _) => setup.toggle_import(),
        ("3", _, _) => {
            setup.toggle_reveal();
        }
        ("4", _, _) => match setup.phrase() {
            Some(phrase) => {
                let dir = prompt("Directory [.]: ")?.unwrap_or_default();
                let dir = if dir.is_empty() { "." } else { dir.as_str() };
                match write_backup(phrase, Path::new(dir), &Local::now()) {
                    Ok(path) => println!("  ✓ Saved to {}", path.display()),
                    Err(e) => println!("  ✗ {}", e),
                }
            }
            None => println!("  ✗ Create or import a wallet first"),
        },
        ("w", Some(slot), Some(word)) => match slot.parse::<usize>() {
            Ok(n) if n >= 1 => match setup.set_import_word(n - 1, word) {
                Ok(true) => {}
                Ok(false) => println!("  ! '{}' is not in the BIP-39 word list", word.trim()),
                Err(e) => println!("  ✗ {}", e),
            },
            _ => println!("  ✗ Word number must be 1-12"),
        },
        ("p", _, _) => {
            let text = prompt("Paste phrase: ")?.unwrap_or_default();
            notice(setup.paste_import(&text));
        }
        ("f", Some(path), rest) => {
            let path = match rest {
                Some(rest) => format!("{} {}", path, rest),
                None => path.to_string(),
            };
            match std::fs::read_to_string(&path) {
                Ok(content) => notice(setup.load_import_file(&content)),
                Err(e) => println!("  ✗ Failed to read {}: {}", path, e),
            }
        }
        ("s", _, _) => notice(setup.submit_import()),
        ("c", _, _) => setup.cancel_import(),
        ("n", _, _) => notice(wizard.next()),
        ("q", _, _) => return quit(wizard),
        _ => println!("  ✗ Unknown choice"),
    }
    Ok(true)
}

// =============================================================================
// SELECT NETWORK
// =============================================================================

fn network_screen<S: SessionStore>(wizard: &mut Wizard<S>) -> Result<bool> {
    println!("\n=== Select Network ===");
    for (i, network) in Network::ALL.iter().enumerate() {
        let marker = if wizard.chosen_network() == Some(*network) { "*" } else { " " };
        println!(
            "  {}{}. {:<9} {}",
            marker,
            i + 1,
            network.display_name(),
            network.tagline()
        );
    }
    println!("\n  b. Back   n. Next   q. Quit");

    let line = match prompt("> ")? {
        Some(line) => line,
        None => return Ok(end_of_input()),
    };
    match line.as_str() {
        "b" => notice(wizard.back()),
        "n" => notice(wizard.next()),
        "q" => return quit(wizard),
        other => match other.parse::<usize>().ok().and_then(|n| n.checked_sub(1)) {
            Some(i) if i < Network::ALL.len() => wizard.choose_network(Network::ALL[i]),
            _ => println!("  ✗ Unknown choice"),
        },
    }
    Ok(true)
}

// =============================================================================
// GENERATE ACCOUNTS
// =============================================================================

async fn accounts_screen<S: SessionStore>(wizard: &mut Wizard<S>, fetcher: &BalanceFetcher) -> Result<bool> {
    let screen = wizard
        .accounts()
        .context("accounts screen opened without state")?;

    println!("\n=== {} Accounts ===", screen.network().display_name());
    if screen.accounts().is_empty() {
        println!("  No accounts yet.");
    }
    for account in screen.accounts() {
        let selected = screen.view().selected() == Some(account.index());
        println!(
            "  {}#{}  {}  ({})",
            if selected { ">" } else { " " },
            account.index(),
            account.address(),
            account.derivation_path()
        );
        if screen.is_private_key_revealed(account.index()) {
            println!("       private key: {}", account.private_key_hex().as_str());
        }
    }
    match screen.view().state() {
        BalanceState::Idle => {}
        BalanceState::Loading => println!("\n  Balance: loading..."),
        BalanceState::Loaded(balance) => println!("\n  Balance: {}", balance),
        BalanceState::Failed(reason) => println!("\n  Balance unavailable: {}", reason),
    }
    println!("\n  g. Generate account   s <n>. Select account   k <n>. Show/hide key");
    println!("  r. Refresh balance    c. Change network       d. Done   q. Quit");

    let line = match prompt("> ")? {
        Some(line) => line,
        None => return Ok(end_of_input()),
    };
    let mut parts = line.split_whitespace();
    let command = parts.next().unwrap_or("");
    let index = parts.next().and_then(|n| n.parse::<u32>().ok());

    match (command, index) {
        ("c", _) => notice(wizard.change_network()),
        ("d", _) => {
            if let Some(done) = wizard.finish()? {
                println!("  ✓ {} {} account(s) created.", done.accounts().len(), done.network());
            }
            return Ok(false);
        }
        ("q", _) => return quit(wizard),
        (command, index) => {
            let screen = wizard
                .accounts_mut()
                .context("accounts screen opened without state")?;
            match (command, index) {
                ("g", _) => match screen.generate_account() {
                    Ok(account) => println!("  ✓ Account #{} {}", account.index(), account.address()),
                    Err(e) => println!("  ✗ {}", e),
                },
                ("k", Some(i)) => notice(screen.toggle_private_key(i)),
                ("s", Some(i)) => match screen.select_account(i) {
                    Ok(request) => {
                        let result = fetcher.fetch_balance(&request.address, request.network).await;
                        screen.complete_balance(&request, result);
                    }
                    Err(e) => println!("  ✗ {}", e),
                },
                ("r", _) => notice(screen.refresh_selected_balance(fetcher).await),
                _ => println!("  ✗ Unknown choice"),
            }
        }
    }
    Ok(true)
}

/// Stdin closed: stop without clearing, so a session file can be resumed.
fn end_of_input() -> bool {
    info!("end of input, session left in place");
    false
}

fn quit<S: SessionStore>(wizard: &mut Wizard<S>) -> Result<bool> {
    wizard.cancel()?;
    println!("Session cleared.");
    Ok(false)
}
