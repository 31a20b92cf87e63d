// wallet-core/src/wizard/backup.rs
//
// Plain-text recovery phrase backup.

use crate::crypto::RecoveryPhrase;
use crate::error::WalletResult;
use chrono::{DateTime, Local, NaiveDate, TimeZone};
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use zeroize::Zeroizing;

/// `wallet-recovery-phrase-YYYY-MM-DD.txt`
pub fn backup_file_name(date: NaiveDate) -> String {
    format!("wallet-recovery-phrase-{}.txt", date.format("%Y-%m-%d"))
}

/// Backup document with numbered words.
///
/// # Security
/// The result contains the phrase in clear text and is zeroized on drop.
pub fn render_backup<Tz>(phrase: &RecoveryPhrase, created: &DateTime<Tz>) -> Zeroizing<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let numbered = Zeroizing::new(
        phrase
            .words()
            .iter()
            .enumerate()
            .map(|(i, word)| format!("{}. {}", i + 1, word))
            .collect::<Vec<_>>()
            .join("\n"),
    );

    Zeroizing::new(format!(
        "Multi-Chain Wallet Recovery Phrase\n\n\
         Created: {}\n\n\
         IMPORTANT: Keep this phrase SECURE and NEVER share it with anyone!\n\n\
         Your 12-word recovery phrase:\n\
         {}\n\n\
         Instructions:\n\
         1. Write down these words in exact order\n\
         2. Store in a secure location (offline)\n\
         3. Never share with anyone\n\
         4. Use to restore wallet if needed",
        created.format("%-m/%-d/%Y, %-I:%M:%S %p"),
        numbered.as_str()
    ))
}

/// Write the backup for `now` into `dir`, returning the file path.
pub fn write_backup(phrase: &RecoveryPhrase, dir: &Path, now: &DateTime<Local>) -> WalletResult<PathBuf> {
    let path = dir.join(backup_file_name(now.date_naive()));
    fs::write(&path, render_backup(phrase, now).as_bytes())?;
    tracing::info!(path = %path.display(), "recovery phrase backup written");
    Ok(path)
}
