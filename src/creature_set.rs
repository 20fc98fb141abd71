use schema::{Nature, StatType, MAX_EV, MAX_IV};
use serde::{Deserialize, Serialize};

use crate::data_source::CreatureDetail;
use crate::names;

pub const MAX_MOVES: usize = 4;
pub const DEFAULT_LEVEL: u8 = 50;
/// Level assumed by the text format when no `Level:` line is present.
pub const TEXT_DEFAULT_LEVEL: u8 = 100;

/// A fully configured creature, the unit the set codec reads and writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureSet {
    pub species: String,          // Normalized key, e.g. "mr-mime"
    pub nickname: Option<String>, // Shown instead of the capitalized species
    pub item: Option<String>,
    pub ability: String,        // Empty when unset
    pub nature: Option<Nature>,
    pub level: u8,              // 1..=100
    pub evs: [u8; 6],           // HP, ATK, DEF, SP.ATK, SP.DEF, SPD
    pub ivs: [u8; 6],           // HP, ATK, DEF, SP.ATK, SP.DEF, SPD
    pub moves: Vec<String>,     // Up to 4, in slot order
    pub shiny: bool,
}

impl Default for CreatureSet {
    fn default() -> Self {
        Self {
            species: String::new(),
            nickname: None,
            item: None,
            ability: String::new(),
            nature: None,
            level: DEFAULT_LEVEL,
            evs: [0; 6],
            ivs: [MAX_IV; 6],
            moves: Vec::new(),
            shiny: false,
        }
    }
}

impl CreatureSet {
    pub fn new(species: &str) -> Self {
        Self {
            species: names::normalize_key(species),
            ..Self::default()
        }
    }

    /// The set a pasted block starts from before its lines are applied.
    pub fn import_baseline() -> Self {
        Self {
            level: TEXT_DEFAULT_LEVEL,
            ..Self::default()
        }
    }

    /// A reasonable starting set for a freshly looked-up creature.
    ///
    /// Leans the spread toward whichever attacking stat is higher and picks a
    /// speed nature when the creature is fastest at speed.
    pub fn seeded_from(detail: &CreatureDetail) -> Self {
        let species = names::normalize_key(&detail.name);
        let atk = detail.base_stat(StatType::Atk);
        let spa = detail.base_stat(StatType::SpA);
        let spe = detail.base_stat(StatType::Spe);

        let nature = if spe >= atk.max(spa) {
            Nature::Jolly
        } else if atk >= spa {
            Nature::Adamant
        } else {
            Nature::Modest
        };

        let mut evs = [0; 6];
        evs[StatType::Hp.index()] = 4;
        evs[StatType::Spe.index()] = MAX_EV;
        let attacking = if atk >= spa { StatType::Atk } else { StatType::SpA };
        evs[attacking.index()] = MAX_EV;

        Self {
            nickname: Some(names::capitalize(&species)),
            ability: detail.ability_names().into_iter().next().unwrap_or_default(),
            nature: Some(nature),
            evs,
            moves: detail.move_names().into_iter().take(MAX_MOVES).collect(),
            species,
            ..Self::default()
        }
    }

    /// Nickname when set, otherwise the capitalized species.
    pub fn display_name(&self) -> String {
        match self.nickname.as_deref().map(str::trim) {
            Some(nickname) if !nickname.is_empty() => nickname.to_owned(),
            _ => names::capitalize(&self.species),
        }
    }

    pub fn ev(&self, stat: StatType) -> u8 {
        self.evs[stat.index()]
    }

    pub fn iv(&self, stat: StatType) -> u8 {
        self.ivs[stat.index()]
    }

    pub fn set_ev(&mut self, stat: StatType, value: u16) {
        self.evs[stat.index()] = value.min(MAX_EV as u16) as u8;
    }

    pub fn set_iv(&mut self, stat: StatType, value: u16) {
        self.ivs[stat.index()] = value.min(MAX_IV as u16) as u8;
    }

    /// Replace the move list, keeping the first four non-blank names.
    pub fn set_moves<I, S>(&mut self, moves: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.moves = moves
            .into_iter()
            .map(|name| name.as_ref().trim().to_owned())
            .filter(|name| !name.is_empty())
            .take(MAX_MOVES)
            .collect();
    }
}
