//! Runtime settings read from the environment.

use std::env;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;
use url::Url;

use crate::cache::DEFAULT_REFRESH_INTERVAL;

pub const DEFAULT_SOURCES: [&str; 3] = [
    "https://www.vogue.com/fashion",
    "https://www.elle.com/fashion",
    "https://www.harpersbazaar.com/fashion",
];

const DEFAULT_LISTEN_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 5000);
const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    ListenAddr { var: &'static str, value: String },
    #[error("{var} must be a whole number of seconds, got {value}")]
    Seconds { var: &'static str, value: String },
    #[error("invalid source URL {value}: {source}")]
    SourceUrl { value: String, source: url::ParseError },
    #[error("{0} must list at least one source")]
    NoSources(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub listen_addr: SocketAddr,
    pub refresh_interval: Duration,
    pub fetch_timeout: Duration,
    pub sources: Vec<String>,
}

impl AppConfig {
    /// Reads `TREND_SCOPE_*` variables from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let listen_addr = match lookup("TREND_SCOPE_LISTEN_ADDR") {
            Some(value) => value.trim().parse::<SocketAddr>().map_err(|_| ConfigError::ListenAddr {
                var: "TREND_SCOPE_LISTEN_ADDR",
                value,
            })?,
            None => SocketAddr::from(DEFAULT_LISTEN_ADDR),
        };

        let refresh_interval =
            seconds(&lookup, "TREND_SCOPE_REFRESH_SECS")?.unwrap_or(DEFAULT_REFRESH_INTERVAL);
        let fetch_timeout =
            seconds(&lookup, "TREND_SCOPE_FETCH_TIMEOUT_SECS")?.unwrap_or(DEFAULT_FETCH_TIMEOUT);

        let sources = match lookup("TREND_SCOPE_SOURCES") {
            Some(list) => {
                let sources = list
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(|s| {
                        Url::parse(s).map(|url| url.to_string()).map_err(|source| {
                            ConfigError::SourceUrl { value: s.to_string(), source }
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                if sources.is_empty() {
                    return Err(ConfigError::NoSources("TREND_SCOPE_SOURCES"));
                }
                sources
            }
            None => DEFAULT_SOURCES.iter().map(|s| s.to_string()).collect(),
        };

        Ok(Self { listen_addr, refresh_interval, fetch_timeout, sources })
    }
}

fn seconds(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<Duration>, ConfigError> {
    lookup(var)
        .map(|value| {
            value
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::Seconds { var, value })
        })
        .transpose()
}
