//! Multi-type counter search.
//!
//! A counter is a creature whose own types cover two or more of the attacking
//! types that are super effective against the defender. Membership lists come
//! from the data source one type at a time; any single failed lookup just
//! drops that type's (or that creature's) contribution.

use std::collections::{BTreeSet, HashMap};

use schema::PokemonType;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::CounterSearchOptions;
use crate::data_source::{CreatureDetail, DataSource};
use crate::effectiveness::rank_attack_types;
use crate::names;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterCandidate {
    /// Normalized creature name; unique within one result list.
    pub name: String,
    /// Super-effective attacking types the creature belongs to, ascending by name.
    pub matching_types: Vec<PokemonType>,
    /// The creature's own declared types; empty when its detail was unavailable.
    pub types: Vec<String>,
    pub sprite_url: String,
}

impl CounterCandidate {
    pub fn matching_count(&self) -> usize {
        self.matching_types.len()
    }

    /// `"FIRE, ROCK"`
    pub fn matching_summary(&self) -> String {
        self.matching_types
            .iter()
            .map(|ty| ty.name().to_uppercase())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// `"WATER/GROUND"`, or `"-"` when the types are unknown.
    pub fn types_summary(&self) -> String {
        if self.types.is_empty() {
            return "-".to_owned();
        }
        self.types
            .iter()
            .map(|ty| ty.to_uppercase())
            .collect::<Vec<_>>()
            .join("/")
    }

    pub fn display_name(&self) -> String {
        names::capitalize(&self.name)
    }
}

/// Find creatures that are super effective against `defender_types` along at
/// least `options.min_match_types` independent attacking types.
pub async fn find_counters<S, D>(
    source: &D,
    defender_types: &[S],
    options: &CounterSearchOptions,
) -> Vec<CounterCandidate>
where
    S: AsRef<str>,
    D: DataSource + ?Sized,
{
    let effective = rank_attack_types(defender_types).super_effective_types();
    if effective.is_empty() {
        debug!("no super-effective attacking types; nothing to search");
        return Vec::new();
    }

    let index = build_membership_index(source, &effective, options.type_member_cap).await;
    let candidates = rank_candidates(index, options.min_match_types.max(1), options.candidate_cap);
    debug!(
        effective = effective.len(),
        candidates = candidates.len(),
        "counter candidates ranked"
    );

    let shown: Vec<(String, BTreeSet<PokemonType>)> =
        candidates.into_iter().take(options.max_results).collect();
    let shown_names: Vec<&str> = shown.iter().map(|(name, _)| name.as_str()).collect();
    let details = fetch_details(source, shown_names).await;

    shown
        .into_iter()
        .map(|(name, matched)| {
            let detail = details.get(&name);
            let mut matching_types: Vec<PokemonType> = matched.into_iter().collect();
            matching_types.sort_by_key(|ty| ty.name());
            CounterCandidate {
                types: detail.map(CreatureDetail::type_names).unwrap_or_default(),
                sprite_url: detail.map(CreatureDetail::sprite_url).unwrap_or_default(),
                name,
                matching_types,
            }
        })
        .collect()
}

/// Normalized creature name -> effective types it belongs to.
async fn build_membership_index<D>(
    source: &D,
    effective: &[PokemonType],
    cap: usize,
) -> HashMap<String, BTreeSet<PokemonType>>
where
    D: DataSource + ?Sized,
{
    let mut index: HashMap<String, BTreeSet<PokemonType>> = HashMap::new();
    for attacking in effective {
        let members = match source.type_member_names(attacking.name(), cap).await {
            Ok(members) => members,
            Err(e) => {
                warn!(attacking_type = attacking.name(), error = %e, "skipping type: member fetch failed");
                continue;
            }
        };
        for member in members {
            let key = names::normalize_key(&member);
            if key.is_empty() {
                continue;
            }
            index.entry(key).or_default().insert(*attacking);
        }
    }
    index
}

/// Keep names with enough matches, most matches first, then by name.
fn rank_candidates(
    index: HashMap<String, BTreeSet<PokemonType>>,
    min_match_types: usize,
    candidate_cap: usize,
) -> Vec<(String, BTreeSet<PokemonType>)> {
    let mut candidates: Vec<(String, BTreeSet<PokemonType>)> = index
        .into_iter()
        .filter(|(_, matched)| matched.len() >= min_match_types)
        .collect();
    candidates.sort_by(|(a_name, a_set), (b_name, b_set)| {
        b_set.len().cmp(&a_set.len()).then_with(|| a_name.cmp(b_name))
    });
    candidates.truncate(candidate_cap);
    candidates
}

async fn fetch_details<'a, D, I>(source: &D, names: I) -> HashMap<String, CreatureDetail>
where
    D: DataSource + ?Sized,
    I: IntoIterator<Item = &'a str>,
{
    let mut details = HashMap::new();
    for name in names {
        match source.creature(name).await {
            Ok(detail) => {
                details.insert(name.to_owned(), detail);
            }
            Err(e) => warn!(creature = name, error = %e, "skipping detail: fetch failed"),
        }
    }
    details
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(types: &[PokemonType]) -> BTreeSet<PokemonType> {
        types.iter().copied().collect()
    }

    #[test]
    fn test_rank_candidates_orders_by_count_then_name() {
        use PokemonType::*;
        let mut index = HashMap::new();
        index.insert("onix".to_owned(), set(&[Rock, Ground]));
        index.insert("geodude".to_owned(), set(&[Rock, Ground]));
        index.insert("vulpix".to_owned(), set(&[Fire]));
        index.insert("golem".to_owned(), set(&[Rock, Ground, Fire]));

        let ranked = rank_candidates(index, 2, 100);
        let order: Vec<&str> = ranked.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(order, vec!["golem", "geodude", "onix"]);
    }

    #[test]
    fn test_rank_candidates_respects_cap() {
        use PokemonType::*;
        let index: HashMap<String, BTreeSet<PokemonType>> = (0..10)
            .map(|i| (format!("mon{i:02}"), set(&[Rock, Ice])))
            .collect();
        let ranked = rank_candidates(index, 1, 3);
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].0, "mon00");
    }

    #[test]
    fn test_summaries() {
        let candidate = CounterCandidate {
            name: "golem".to_owned(),
            matching_types: vec![PokemonType::Ground, PokemonType::Rock],
            types: vec!["rock".to_owned(), "ground".to_owned()],
            sprite_url: String::new(),
        };
        assert_eq!(candidate.matching_count(), 2);
        assert_eq!(candidate.matching_summary(), "GROUND, ROCK");
        assert_eq!(candidate.types_summary(), "ROCK/GROUND");
        assert_eq!(candidate.display_name(), "Golem");

        let unknown = CounterCandidate {
            types: Vec::new(),
            ..candidate
        };
        assert_eq!(unknown.types_summary(), "-");
    }
}
