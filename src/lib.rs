//! Pokemon Atlas
//!
//! Team-building helpers over public creature data: attack-type ranking,
//! multi-type counter search, evolution chains flattened into stages, and a
//! plain-text set notation with a six-slot team roster.

// --- MODULE DECLARATIONS ---
pub mod config;
pub mod counters;
pub mod creature_set;
pub mod data_source;
pub mod effectiveness;
pub mod errors;
pub mod evolution;
pub mod mcp_interface;
pub mod names;
pub mod set_codec;
pub mod teams;

#[cfg(test)]
mod tests;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{Nature, PokemonType, StatType, MAX_EV, MAX_IV, TYPE_CHART, TYPE_COUNT};

// --- From this crate's modules (`src/`) ---
pub use config::{AtlasConfig, CounterSearchOptions};
pub use counters::{find_counters, CounterCandidate};
pub use creature_set::CreatureSet;
pub use data_source::{DataSource, PokeApiClient};
pub use effectiveness::{rank_against, rank_attack_types, EffectivenessResult, RankedType};
pub use evolution::{evolution_stages_for_species, flatten_chain, resolve_connector, EvoForm, EvoStage};
pub use set_codec::{parse_into, parse_set, serialize_set};
pub use teams::{TeamRoster, MAX_TEAM_SIZE};

// Crate-specific error and result types.
pub use errors::{ConfigError, ConfigResult, DataSourceError, DataSourceResult, TeamError};
