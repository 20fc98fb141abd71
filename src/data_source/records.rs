//! Record shapes returned by the data service.
//!
//! Only the fields the crate reads are modelled; everything else in the JSON
//! is ignored. Every field defaults so partially-populated records still decode.

use schema::{PokemonType, StatType};
use serde::{Deserialize, Serialize};

use crate::names;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

impl NamedResource {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// True when the resource carries a non-blank name.
    pub fn is_named(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceRef {
    pub url: String,
}

// --- Creature detail ---

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub type_: NamedResource,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatEntry {
    pub base_stat: u16,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbilityEntry {
    pub ability: NamedResource,
    pub is_hidden: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoveEntry {
    #[serde(rename = "move")]
    pub move_: NamedResource,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatureDetail {
    pub id: u32,
    pub name: String,
    pub species: NamedResource,
    pub types: Vec<TypeSlot>,
    pub stats: Vec<StatEntry>,
    pub abilities: Vec<AbilityEntry>,
    pub moves: Vec<MoveEntry>,
}

impl CreatureDetail {
    /// Declared type names in slot order.
    pub fn type_names(&self) -> Vec<String> {
        let mut slots: Vec<&TypeSlot> = self.types.iter().collect();
        slots.sort_by_key(|slot| slot.slot);
        slots
            .into_iter()
            .filter(|slot| slot.type_.is_named())
            .map(|slot| names::normalize_key(&slot.type_.name))
            .collect()
    }

    /// Declared types that map onto the 18-type chart.
    pub fn pokemon_types(&self) -> Vec<PokemonType> {
        self.type_names()
            .iter()
            .filter_map(|name| PokemonType::from_name(name))
            .collect()
    }

    /// Base value for `stat`, or 0 when the record omits it.
    pub fn base_stat(&self, stat: StatType) -> u16 {
        self.stats
            .iter()
            .find(|entry| entry.stat.name == stat.record_name())
            .map(|entry| entry.base_stat)
            .unwrap_or(0)
    }

    pub fn sprite_url(&self) -> String {
        if self.id == 0 {
            String::new()
        } else {
            names::sprite_url(self.id)
        }
    }

    pub fn display_name(&self) -> String {
        names::capitalize(&self.name)
    }

    /// Distinct ability names (case-insensitive), first occurrence wins.
    pub fn ability_names(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        self.abilities
            .iter()
            .filter(|entry| entry.ability.is_named())
            .filter(|entry| seen.insert(names::normalize_key(&entry.ability.name)))
            .map(|entry| entry.ability.name.clone())
            .collect()
    }

    /// Distinct move names, sorted ascending.
    pub fn move_names(&self) -> Vec<String> {
        let mut moves: Vec<String> = self
            .moves
            .iter()
            .filter(|entry| entry.move_.is_named())
            .map(|entry| names::normalize_key(&entry.move_.name))
            .collect();
        moves.sort();
        moves.dedup();
        moves
    }
}

// --- Species ---

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Variety {
    pub is_default: bool,
    pub pokemon: NamedResource,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeciesRecord {
    pub id: u32,
    pub name: String,
    pub evolution_chain: Option<ResourceRef>,
    pub varieties: Vec<Variety>,
}

// --- Type membership ---

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeMember {
    pub pokemon: NamedResource,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeRecord {
    pub name: String,
    pub pokemon: Vec<TypeMember>,
}

impl TypeRecord {
    pub fn member_names(&self, cap: usize) -> Vec<String> {
        self.pokemon
            .iter()
            .filter(|member| member.pokemon.is_named())
            .map(|member| member.pokemon.name.clone())
            .take(cap)
            .collect()
    }
}

// --- Evolution chains ---

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionChainRecord {
    pub id: u32,
    pub chain: Option<ChainLink>,
}

/// One node of an evolution tree. `evolution_details` describes the edge
/// leading *into* this node from its parent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainLink {
    pub species: NamedResource,
    pub evolves_to: Vec<ChainLink>,
    pub evolution_details: Vec<EvolutionDetail>,
}

/// Raw transition predicates for one way of crossing an evolution edge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionDetail {
    pub min_level: Option<u8>,
    pub item: Option<NamedResource>,
    pub trigger: Option<NamedResource>,
    pub held_item: Option<NamedResource>,
    pub time_of_day: Option<String>,
    pub location: Option<NamedResource>,
    pub known_move_type: Option<NamedResource>,
    pub trade_species: Option<NamedResource>,
    pub min_happiness: Option<u8>,
    pub min_beauty: Option<u8>,
    pub min_affection: Option<u8>,
    pub needs_overworld_rain: Option<bool>,
    pub turn_upside_down: Option<bool>,
    /// -1: Atk < Def, 0: Atk = Def, 1: Atk > Def.
    pub relative_physical_stats: Option<i8>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_creature_detail_decodes_service_json() {
        let json = r#"{
            "id": 6,
            "name": "charizard",
            "species": {"name": "charizard", "url": "https://pokeapi.co/api/v2/pokemon-species/6/"},
            "types": [
                {"slot": 2, "type": {"name": "flying", "url": ""}},
                {"slot": 1, "type": {"name": "fire", "url": ""}}
            ],
            "stats": [
                {"base_stat": 84, "effort": 0, "stat": {"name": "attack", "url": ""}},
                {"base_stat": 109, "effort": 3, "stat": {"name": "special-attack", "url": ""}}
            ],
            "abilities": [
                {"ability": {"name": "blaze", "url": ""}, "is_hidden": false, "slot": 1},
                {"ability": {"name": "solar-power", "url": ""}, "is_hidden": true, "slot": 3}
            ],
            "moves": [
                {"move": {"name": "slash", "url": ""}, "version_group_details": []},
                {"move": {"name": "air-slash", "url": ""}, "version_group_details": []}
            ],
            "height": 17
        }"#;
        let detail: CreatureDetail = serde_json::from_str(json).unwrap();

        assert_eq!(detail.type_names(), vec!["fire", "flying"]);
        assert_eq!(
            detail.pokemon_types(),
            vec![PokemonType::Fire, PokemonType::Flying]
        );
        assert_eq!(detail.base_stat(StatType::SpA), 109);
        assert_eq!(detail.base_stat(StatType::Spe), 0);
        assert_eq!(detail.ability_names(), vec!["blaze", "solar-power"]);
        assert_eq!(detail.move_names(), vec!["air-slash", "slash"]);
        assert!(detail.sprite_url().ends_with("/6.png"));
        assert_eq!(detail.display_name(), "Charizard");
    }

    #[test]
    fn test_evolution_detail_tolerates_nulls_and_empty_strings() {
        let json = r#"{
            "min_level": null,
            "item": {"name": "thunder-stone", "url": ""},
            "trigger": {"name": "use-item", "url": ""},
            "time_of_day": "",
            "needs_overworld_rain": false,
            "gender": null
        }"#;
        let detail: EvolutionDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.min_level, None);
        assert_eq!(detail.item.as_ref().map(|i| i.name.as_str()), Some("thunder-stone"));
        assert_eq!(detail.time_of_day.as_deref(), Some(""));
        assert_eq!(detail.needs_overworld_rain, Some(false));
    }

    #[test]
    fn test_type_record_member_names_are_capped() {
        let record = TypeRecord {
            name: "fire".to_owned(),
            pokemon: ["charmander", "vulpix", "growlithe"]
                .iter()
                .map(|name| TypeMember {
                    pokemon: NamedResource::new(*name, ""),
                })
                .collect(),
        };
        assert_eq!(record.member_names(2), vec!["charmander", "vulpix"]);
    }
}
