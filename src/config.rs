use anyhow::{Context, Result, anyhow};
use dotenv::dotenv;

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::models::Player;
use crate::uhapi::client::DEFAULT_API_BASE;

pub const DEFAULT_PLAYERS: &str = "Eu:339:Gabriel;Amigo:460:Amigo";
pub const DEFAULT_SUMMARY_FILE: &str = "README.md";
pub const DEFAULT_DETAIL_FILE: &str = "detalhes.md";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub players: Vec<Player>,
    pub api_base: String,
    pub output_dir: PathBuf,
    pub summary_file: String,
    pub detail_file: String,
    pub timeout: Duration,
}

impl Config {
    /// Reads `.env` (if any) and then the `PLACAR_*` environment variables.
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let var_or = |key: &str, default: &str| env::var(key).unwrap_or_else(|_| default.to_string());

        let timeout_secs = match env::var("PLACAR_HTTP_TIMEOUT_SECS") {
            Ok(raw) => raw.parse::<u64>()
                .with_context(|| format!("PLACAR_HTTP_TIMEOUT_SECS must be a number of seconds, got '{}'", raw))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            players: parse_players(&var_or("PLACAR_PLAYERS", DEFAULT_PLAYERS))?,
            api_base: var_or("PLACAR_API_BASE", DEFAULT_API_BASE),
            output_dir: PathBuf::from(var_or("PLACAR_OUTPUT_DIR", ".")),
            summary_file: var_or("PLACAR_SUMMARY_FILE", DEFAULT_SUMMARY_FILE),
            detail_file: var_or("PLACAR_DETAIL_FILE", DEFAULT_DETAIL_FILE),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Parses `Name:userId:folder` entries separated by `;`.
pub fn parse_players(raw: &str) -> Result<Vec<Player>> {
    raw.split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(parse_player)
        .collect()
}

fn parse_player(entry: &str) -> Result<Player> {
    let fields = entry.split(':').map(str::trim).collect::<Vec<_>>();
    let &[display_name, user_id, folder] = fields.as_slice() else {
        return Err(anyhow!("Expected 'Name:userId:folder', got '{}'", entry));
    };

    if display_name.is_empty() || folder.is_empty() {
        return Err(anyhow!("Player entry '{}' needs a name and a folder.", entry));
    }

    Ok(Player {
        display_name: display_name.to_string(),
        user_id: user_id.parse()
            .with_context(|| format!("Invalid user id '{}' for {}", user_id, display_name))?,
        folder: folder.to_string(),
    })
}
