//! The read-only data service the derivations pull records from.
//!
//! The core only depends on the [`DataSource`] trait. [`PokeApiClient`] is the
//! HTTP implementation; tests substitute in-memory fakes.

pub mod pokeapi;
pub mod records;

use async_trait::async_trait;

use crate::errors::DataSourceResult;
use crate::names;

pub use pokeapi::PokeApiClient;
pub use records::{
    AbilityEntry, ChainLink, CreatureDetail, EvolutionChainRecord, EvolutionDetail, MoveEntry,
    NamedResource, ResourceRef, SpeciesRecord, StatEntry, TypeMember, TypeRecord, TypeSlot,
    Variety,
};

/// Record lookups needed by the counter search and the evolution flattener.
///
/// Each call is independent and may fail on its own; callers decide whether a
/// failure is fatal.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Full creature detail by name or numeric id.
    async fn creature(&self, name_or_id: &str) -> DataSourceResult<CreatureDetail>;

    /// Species record by name or numeric id.
    async fn species(&self, name_or_id: &str) -> DataSourceResult<SpeciesRecord>;

    /// Species record from a resource URL found inside another record.
    async fn species_by_url(&self, url: &str) -> DataSourceResult<SpeciesRecord>;

    /// Evolution chain from the URL a species record points at.
    async fn evolution_chain_by_url(&self, url: &str) -> DataSourceResult<EvolutionChainRecord>;

    /// Names of creatures belonging to `type_name`, at most `cap` of them.
    async fn type_member_names(&self, type_name: &str, cap: usize)
        -> DataSourceResult<Vec<String>>;

    /// Every creature name the source knows, in source order.
    async fn creature_names(&self) -> DataSourceResult<Vec<String>>;

    /// Case-insensitive substring search over [`DataSource::creature_names`].
    async fn search_names(&self, query: &str, limit: usize) -> DataSourceResult<Vec<String>> {
        let needle = names::normalize_key(query);
        let all = self.creature_names().await?;
        Ok(all
            .into_iter()
            .filter(|name| names::normalize_key(name).contains(&needle))
            .take(limit)
            .collect())
    }
}
