//! Attack-type ranking against a one- or two-type defender.

use std::cmp::Reverse;
use std::fmt;

use ordered_float::OrderedFloat;
use schema::{PokemonType, TYPE_COUNT};
use serde::{Deserialize, Serialize};

/// Threshold at which an attacking type counts as super effective.
pub const SUPER_EFFECTIVE: f32 = 2.0;

/// One attacking type and its combined multiplier against the defender.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankedType {
    pub attacking: PokemonType,
    pub multiplier: f32,
}

impl RankedType {
    pub fn is_super_effective(&self) -> bool {
        self.multiplier >= SUPER_EFFECTIVE
    }

    /// Compact label, e.g. `"GROUND  x4"` or `"FIRE  x0.5"`.
    pub fn label(&self) -> String {
        format!(
            "{}  x{}",
            self.attacking.name().to_uppercase(),
            format_multiplier(self.multiplier)
        )
    }
}

impl fmt::Display for RankedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Combined multipliers for all 18 attacking types, ordered by descending
/// multiplier and then ascending type name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectivenessResult {
    entries: Vec<RankedType>,
}

impl EffectivenessResult {
    pub fn entries(&self) -> &[RankedType] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Combined multiplier for `attacking`.
    pub fn multiplier(&self, attacking: PokemonType) -> f32 {
        self.entries
            .iter()
            .find(|entry| entry.attacking == attacking)
            .map(|entry| entry.multiplier)
            .unwrap_or(1.0)
    }

    /// Attacking types at or above 2x, in ranking order.
    pub fn super_effective_types(&self) -> Vec<PokemonType> {
        self.entries
            .iter()
            .filter(|entry| entry.is_super_effective())
            .map(|entry| entry.attacking)
            .collect()
    }
}

/// Rank every attacking type against the defender's types.
///
/// Blank or unknown defender names are skipped; with no usable defender type
/// every multiplier is 1.
pub fn rank_attack_types<S: AsRef<str>>(defender_types: &[S]) -> EffectivenessResult {
    let defenders: Vec<PokemonType> = defender_types
        .iter()
        .filter_map(|name| PokemonType::from_name(name.as_ref()))
        .collect();
    rank_against(&defenders)
}

/// Same as [`rank_attack_types`] for already-parsed types.
pub fn rank_against(defenders: &[PokemonType]) -> EffectivenessResult {
    let mut entries: Vec<RankedType> = Vec::with_capacity(TYPE_COUNT);
    for attacking in PokemonType::ALL {
        let multiplier = defenders
            .iter()
            .map(|defending| PokemonType::type_effectiveness(attacking, *defending))
            .product();
        entries.push(RankedType {
            attacking,
            multiplier,
        });
    }

    entries.sort_by_key(|entry| (Reverse(OrderedFloat(entry.multiplier)), entry.attacking.name()));
    EffectivenessResult { entries }
}

fn format_multiplier(multiplier: f32) -> String {
    let rendered = format!("{:.2}", multiplier);
    rendered
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_owned()
}
