use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::data_source::{
    ChainLink, CreatureDetail, DataSource, EvolutionChainRecord, EvolutionDetail, NamedResource,
    ResourceRef, SpeciesRecord, TypeSlot, Variety,
};
use crate::errors::{DataSourceError, DataSourceResult};
use crate::names;

const API: &str = "https://pokeapi.co/api/v2";

/// An in-memory [`DataSource`] with per-key failure injection.
///
/// Every request is recorded as `"<kind>:<key>"` so tests can assert which
/// lookups were made.
#[derive(Default)]
pub struct FakeSource {
    creatures: HashMap<String, CreatureDetail>,
    species: HashMap<String, SpeciesRecord>,
    chains: HashMap<String, EvolutionChainRecord>,
    type_members: HashMap<String, Vec<String>>,
    failures: HashSet<String>,
    requests: Mutex<Vec<String>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_creature(mut self, name: &str, id: u32, types: &[&str]) -> Self {
        let detail = CreatureDetail {
            id,
            name: name.to_owned(),
            species: NamedResource::new(name, species_url(id)),
            types: types
                .iter()
                .enumerate()
                .map(|(i, ty)| TypeSlot {
                    slot: i as u8 + 1,
                    type_: NamedResource::new(*ty, ""),
                })
                .collect(),
            ..Default::default()
        };
        self.creatures.insert(names::normalize_key(name), detail);
        self
    }

    pub fn with_type_members(mut self, type_name: &str, members: &[&str]) -> Self {
        self.type_members.insert(
            names::normalize_key(type_name),
            members.iter().map(|m| m.to_string()).collect(),
        );
        self
    }

    /// Register a species pointing at chain `chain_id`, with extra variety
    /// names after its default form.
    pub fn with_species(mut self, name: &str, id: u32, chain_id: u32, varieties: &[(&str, u32)]) -> Self {
        let mut all = vec![Variety {
            is_default: true,
            pokemon: NamedResource::new(name, format!("{API}/pokemon/{id}/")),
        }];
        all.extend(varieties.iter().map(|(form, form_id)| Variety {
            is_default: false,
            pokemon: NamedResource::new(*form, format!("{API}/pokemon/{form_id}/")),
        }));
        let record = SpeciesRecord {
            id,
            name: name.to_owned(),
            evolution_chain: Some(ResourceRef {
                url: chain_url(chain_id),
            }),
            varieties: all,
        };
        self.species.insert(names::normalize_key(name), record);
        self
    }

    pub fn with_chain(mut self, chain_id: u32, root: ChainLink) -> Self {
        self.chains.insert(
            chain_url(chain_id),
            EvolutionChainRecord {
                id: chain_id,
                chain: Some(root),
            },
        );
        self
    }

    /// Make the request recorded as `key` (e.g. `"type:water"`) fail.
    pub fn failing(mut self, key: &str) -> Self {
        self.failures.insert(key.to_owned());
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_of(&self, kind: &str) -> Vec<String> {
        let prefix = format!("{kind}:");
        self.requests()
            .into_iter()
            .filter_map(|r| r.strip_prefix(&prefix).map(str::to_owned))
            .collect()
    }

    fn record(&self, kind: &str, key: &str) -> DataSourceResult<()> {
        let entry = format!("{kind}:{key}");
        self.requests.lock().unwrap().push(entry.clone());
        if self.failures.contains(&entry) {
            return Err(DataSourceError::Status {
                url: entry,
                status: 500,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl DataSource for FakeSource {
    async fn creature(&self, name_or_id: &str) -> DataSourceResult<CreatureDetail> {
        let key = names::normalize_key(name_or_id);
        self.record("creature", &key)?;
        self.creatures
            .get(&key)
            .cloned()
            .ok_or(DataSourceError::NotFound(key))
    }

    async fn species(&self, name_or_id: &str) -> DataSourceResult<SpeciesRecord> {
        let key = names::normalize_key(name_or_id);
        self.record("species", &key)?;
        self.species
            .get(&key)
            .cloned()
            .ok_or(DataSourceError::NotFound(key))
    }

    async fn species_by_url(&self, url: &str) -> DataSourceResult<SpeciesRecord> {
        self.record("species_url", url)?;
        self.species
            .values()
            .find(|s| Some(s.id) == names::id_from_url(url))
            .cloned()
            .ok_or_else(|| DataSourceError::NotFound(url.to_owned()))
    }

    async fn evolution_chain_by_url(&self, url: &str) -> DataSourceResult<EvolutionChainRecord> {
        self.record("chain", url)?;
        self.chains
            .get(url)
            .cloned()
            .ok_or_else(|| DataSourceError::NotFound(url.to_owned()))
    }

    async fn type_member_names(&self, type_name: &str, cap: usize) -> DataSourceResult<Vec<String>> {
        let key = names::normalize_key(type_name);
        self.record("type", &key)?;
        Ok(self
            .type_members
            .get(&key)
            .map(|members| members.iter().take(cap).cloned().collect())
            .unwrap_or_default())
    }

    async fn creature_names(&self) -> DataSourceResult<Vec<String>> {
        self.record("names", "all")?;
        let mut all: Vec<String> = self.creatures.values().map(|c| c.name.clone()).collect();
        all.sort();
        Ok(all)
    }
}

pub fn species_url(id: u32) -> String {
    format!("{API}/pokemon-species/{id}/")
}

pub fn chain_url(id: u32) -> String {
    format!("{API}/evolution-chain/{id}/")
}

/// A chain node for species `name` with id `id`.
pub fn chain_node(name: &str, id: u32, details: Vec<EvolutionDetail>, evolves_to: Vec<ChainLink>) -> ChainLink {
    ChainLink {
        species: NamedResource::new(name, species_url(id)),
        evolves_to,
        evolution_details: details,
    }
}

pub fn level_up(level: u8) -> Vec<EvolutionDetail> {
    vec![EvolutionDetail {
        min_level: Some(level),
        trigger: Some(NamedResource::new("level-up", "")),
        ..Default::default()
    }]
}

pub fn use_item(item: &str) -> Vec<EvolutionDetail> {
    vec![EvolutionDetail {
        item: Some(NamedResource::new(item, "")),
        trigger: Some(NamedResource::new("use-item", "")),
        ..Default::default()
    }]
}
