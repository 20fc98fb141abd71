//! Runtime configuration loaded from environment variables.
//!
//! Every value has a default, so an empty environment yields a working
//! configuration pointed at the public PokeAPI.

use std::str::FromStr;
use std::time::Duration;

use crate::errors::{ConfigError, ConfigResult};

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Knobs for the multi-type counter search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterSearchOptions {
    /// A candidate must belong to at least this many super-effective types.
    pub min_match_types: usize,
    /// Number of candidates returned (and detail-fetched).
    pub max_results: usize,
    /// Member names requested per effective type.
    pub type_member_cap: usize,
    /// Candidates kept after ranking, before detail fetching.
    pub candidate_cap: usize,
}

impl Default for CounterSearchOptions {
    fn default() -> Self {
        Self {
            min_match_types: 2,
            max_results: 24,
            type_member_cap: 250,
            candidate_cap: 100,
        }
    }
}

impl CounterSearchOptions {
    pub fn with_min_match_types(mut self, min_match_types: usize) -> Self {
        self.min_match_types = min_match_types.max(1);
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}

/// Complete configuration for the data-source client and the search defaults.
#[derive(Debug, Clone)]
pub struct AtlasConfig {
    /// Base URL of the data service, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout.
    pub request_timeout: Duration,
    /// User-Agent header sent with every request.
    pub user_agent: String,
    /// Defaults for counter searches.
    pub counters: CounterSearchOptions,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            request_timeout: Duration::from_secs(15),
            user_agent: default_user_agent(),
            counters: CounterSearchOptions::default(),
        }
    }
}

impl AtlasConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional variables:
    /// - `POKEAPI_BASE_URL` -- data service base URL (default `https://pokeapi.co/api/v2`)
    /// - `POKEAPI_TIMEOUT_SECS` -- request timeout in seconds (default 15)
    /// - `POKEAPI_USER_AGENT` -- User-Agent header (default `pokemon-atlas/<version>`)
    /// - `ATLAS_TYPE_MEMBER_CAP` -- names fetched per effective type (default 250)
    /// - `ATLAS_CANDIDATE_CAP` -- candidates kept before detail fetch (default 100)
    /// - `ATLAS_MAX_COUNTERS` -- counters returned (default 24)
    /// - `ATLAS_MIN_MATCH_TYPES` -- minimum matched types per counter (default 2)
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AtlasConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let base_url = lookup("POKEAPI_BASE_URL")
            .map(|url| url.trim().trim_end_matches('/').to_owned())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.base_url);

        let timeout_secs: u64 = parse_or(&lookup, "POKEAPI_TIMEOUT_SECS", 15)?;

        let user_agent = lookup("POKEAPI_USER_AGENT")
            .filter(|ua| !ua.trim().is_empty())
            .unwrap_or(defaults.user_agent);

        let counters = CounterSearchOptions {
            min_match_types: parse_or(&lookup, "ATLAS_MIN_MATCH_TYPES", 2)?,
            max_results: parse_or(&lookup, "ATLAS_MAX_COUNTERS", 24)?,
            type_member_cap: parse_or(&lookup, "ATLAS_TYPE_MEMBER_CAP", 250)?,
            candidate_cap: parse_or(&lookup, "ATLAS_CANDIDATE_CAP", 100)?,
        };

        if counters.min_match_types == 0 {
            return Err(ConfigError::InvalidValue {
                key: "ATLAS_MIN_MATCH_TYPES",
                value: "0".to_owned(),
                reason: "must be at least 1".to_owned(),
            });
        }

        Ok(Self {
            base_url,
            request_timeout: Duration::from_secs(timeout_secs),
            user_agent,
            counters,
        })
    }
}

fn default_user_agent() -> String {
    format!("pokemon-atlas/{}", env!("CARGO_PKG_VERSION"))
}

/// Parse an optional variable, falling back to `default` when unset.
fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> ConfigResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidValue {
                key,
                value: raw.clone(),
                reason: e.to_string(),
            }),
    }
}
