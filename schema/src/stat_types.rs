use serde::{Deserialize, Serialize};
use std::fmt;

/// The six permanent stats, in the canonical order used by effort/innate
/// value arrays: HP, ATK, DEF, SP.ATK, SP.DEF, SPD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatType {
    Hp,
    Atk,
    Def,
    SpA,
    SpD,
    Spe,
}

pub const MAX_EV: u8 = 252;
pub const MAX_IV: u8 = 31;

impl StatType {
    pub const ALL: [StatType; 6] = [
        StatType::Hp,
        StatType::Atk,
        StatType::Def,
        StatType::SpA,
        StatType::SpD,
        StatType::Spe,
    ];

    /// Position in a `[u8; 6]` stat array.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Short label used by the team-set text format.
    pub fn label(self) -> &'static str {
        match self {
            StatType::Hp => "HP",
            StatType::Atk => "Atk",
            StatType::Def => "Def",
            StatType::SpA => "SpA",
            StatType::SpD => "SpD",
            StatType::Spe => "Spe",
        }
    }

    /// Stat name as it appears in creature detail records.
    pub fn record_name(self) -> &'static str {
        match self {
            StatType::Hp => "hp",
            StatType::Atk => "attack",
            StatType::Def => "defense",
            StatType::SpA => "special-attack",
            StatType::SpD => "special-defense",
            StatType::Spe => "speed",
        }
    }
}

impl fmt::Display for StatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
