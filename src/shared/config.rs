//! Configuration loading.
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! environment variables, then CLI overrides. Every layer goes through the
//! same validation in [`ConfigLoader::resolve`].

use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::shared::errors::ConfigError;
use crate::shared::types::{Symbol, SymbolSet};

pub const ENV_INTERVAL: &str = "CHECK_INTERVAL_SECONDS";
pub const ENV_TOKEN: &str = "TELEGRAM_TOKEN";
pub const ENV_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

pub const DEFAULT_INTERVAL_SECS: u64 = 60;
pub const DEFAULT_WARMUP_SECS: u64 = 5;
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 20;
pub const DEFAULT_BOT_NAME: &str = "SniperPro";

pub const DEFAULT_CURRENCIES: &[&str] = &["EURUSD=X", "EURCAD=X", "EURJPY=X"];
pub const DEFAULT_EQUITIES: &[&str] = &["AAPL", "TSLA", "AMZN"];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MonitorSection {
    pub interval_secs: Option<u64>,
    pub warmup_secs: Option<u64>,
    pub fetch_timeout_secs: Option<u64>,
    pub bot_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SymbolsSection {
    pub currencies: Option<Vec<String>>,
    pub equities: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TelegramSection {
    pub token: Option<String>,
    pub chat_id: Option<String>,
}

/// On-disk configuration, every field optional
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub monitor: MonitorSection,
    pub symbols: SymbolsSection,
    pub telegram: TelegramSection,
}

/// Fully resolved runtime configuration
#[derive(Clone)]
pub struct BotConfig {
    pub interval: Duration,
    pub warmup: Duration,
    pub fetch_timeout: Duration,
    pub bot_name: String,
    pub symbols: SymbolSet,
    pub telegram_token: String,
    pub chat_id: Option<String>,
}

impl BotConfig {
    /// Title prefixed to every report
    pub fn report_title(&self) -> String {
        format!("{} signals", self.bot_name)
    }
}

// The token stays out of logs.
impl std::fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotConfig")
            .field("interval", &self.interval)
            .field("warmup", &self.warmup)
            .field("fetch_timeout", &self.fetch_timeout)
            .field("bot_name", &self.bot_name)
            .field("symbols", &self.symbols)
            .field("chat_id", &self.chat_id)
            .finish_non_exhaustive()
    }
}

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the optional file, the process environment
    /// and an interval given on the command line
    pub fn load(path: Option<&Path>, cli_interval: Option<u64>) -> Result<BotConfig, ConfigError> {
        let file = match path {
            Some(path) => Self::from_file(path)?,
            None => FileConfig::default(),
        };
        Self::resolve(file, move |key: &str| match (key, cli_interval) {
            (ENV_INTERVAL, Some(secs)) => Some(secs.to_string()),
            _ => std::env::var(key).ok(),
        })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<FileConfig, ConfigError> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::Read(format!("{}: {}", path.as_ref().display(), e)))?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Merge file values with variables looked up through `env`
    pub fn resolve<F>(file: FileConfig, env: F) -> Result<BotConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_value = |key: &str| env(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let interval_secs = match env_value(ENV_INTERVAL) {
            Some(raw) => raw.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                name: ENV_INTERVAL,
                value: raw.clone(),
            })?,
            None => file.monitor.interval_secs.unwrap_or(DEFAULT_INTERVAL_SECS),
        };
        if interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                name: ENV_INTERVAL,
                value: "0".to_string(),
            });
        }

        let fetch_timeout_secs = file
            .monitor
            .fetch_timeout_secs
            .unwrap_or(DEFAULT_FETCH_TIMEOUT_SECS);
        if fetch_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                name: "fetch_timeout_secs",
                value: "0".to_string(),
            });
        }

        let telegram_token = env_value(ENV_TOKEN)
            .or(file.telegram.token.filter(|t| !t.trim().is_empty()))
            .ok_or(ConfigError::MissingCredential(ENV_TOKEN))?;

        let chat_id = env_value(ENV_CHAT_ID).or(file.telegram.chat_id.filter(|c| !c.trim().is_empty()));

        let currencies = to_symbols(file.symbols.currencies, DEFAULT_CURRENCIES);
        let equities = to_symbols(file.symbols.equities, DEFAULT_EQUITIES);
        let symbols = SymbolSet::new(currencies, equities)?;

        Ok(BotConfig {
            interval: Duration::from_secs(interval_secs),
            warmup: Duration::from_secs(file.monitor.warmup_secs.unwrap_or(DEFAULT_WARMUP_SECS)),
            fetch_timeout: Duration::from_secs(fetch_timeout_secs),
            bot_name: file
                .monitor
                .bot_name
                .unwrap_or_else(|| DEFAULT_BOT_NAME.to_string()),
            symbols,
            telegram_token,
            chat_id,
        })
    }
}

fn to_symbols(configured: Option<Vec<String>>, defaults: &[&str]) -> Vec<Symbol> {
    match configured {
        Some(values) => values.into_iter().map(|s| Symbol::new(s.trim())).collect(),
        None => defaults.iter().map(|s| Symbol::from(*s)).collect(),
    }
}
