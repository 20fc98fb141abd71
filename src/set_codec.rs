//! Plain-text team-set notation.
//!
//! ```text
//! Sparky (Pikachu) @ Light Ball
//! Ability: static
//! Level: 50
//! Shiny: No
//! EVs: 4 HP / 252 SpA / 252 Spe
//! Timid Nature
//! IVs: 0 Atk
//! - thunderbolt
//! - volt-switch
//! ```
//!
//! Parsing is best-effort: each line is classified on its own, lines that fit
//! no pattern are dropped and fields the text does not mention keep their
//! previous values.

use schema::{Nature, StatType, MAX_IV};
use tracing::debug;

use crate::creature_set::{CreatureSet, TEXT_DEFAULT_LEVEL};
use crate::names;

/// Render `set` as a set block. No trailing newline.
pub fn serialize_set(set: &CreatureSet) -> String {
    let mut lines: Vec<String> = Vec::new();

    let mut header = set.display_name();
    if !set.species.trim().is_empty() {
        header = format!("{} ({})", header, names::capitalize(&set.species));
    }
    if let Some(item) = set.item.as_deref().map(str::trim).filter(|i| !i.is_empty()) {
        header = format!("{} @ {}", header, item);
    }
    lines.push(header);

    if !set.ability.trim().is_empty() {
        lines.push(format!("Ability: {}", set.ability.trim()));
    }
    if set.level != TEXT_DEFAULT_LEVEL {
        lines.push(format!("Level: {}", set.level));
    }
    lines.push(format!("Shiny: {}", if set.shiny { "Yes" } else { "No" }));

    if let Some(evs) = stat_line(&set.evs, |value| value != 0) {
        lines.push(format!("EVs: {}", evs));
    }
    if let Some(nature) = set.nature {
        lines.push(format!("{} Nature", nature));
    }
    if let Some(ivs) = stat_line(&set.ivs, |value| value != MAX_IV) {
        lines.push(format!("IVs: {}", ivs));
    }

    for name in &set.moves {
        let name = name.trim();
        if !name.is_empty() {
            lines.push(format!("- {}", name));
        }
    }

    lines.join("\n").trim_end().to_owned()
}

fn stat_line(values: &[u8; 6], shown: impl Fn(u8) -> bool) -> Option<String> {
    let clauses: Vec<String> = StatType::ALL
        .iter()
        .filter(|stat| shown(values[stat.index()]))
        .map(|stat| format!("{} {}", values[stat.index()], stat.label()))
        .collect();
    if clauses.is_empty() {
        None
    } else {
        Some(clauses.join(" / "))
    }
}

/// Parse a fresh block on top of [`CreatureSet::import_baseline`].
pub fn parse_set(text: &str) -> CreatureSet {
    let mut set = CreatureSet::import_baseline();
    parse_into(&mut set, text);
    set
}

/// Merge the fields present in `text` into `set`.
///
/// The header always replaces species, nickname and item. Any move line
/// replaces the whole move list; without move lines the moves are kept.
pub fn parse_into(set: &mut CreatureSet, text: &str) {
    let mut lines = text.lines().map(str::trim).filter(|line| !line.is_empty());

    let Some(header) = lines.next() else {
        return;
    };
    apply_header(set, header);

    let mut moves: Vec<String> = Vec::new();
    for line in lines {
        match classify(line) {
            Line::Ability(ability) => set.ability = ability.to_owned(),
            Line::Level(raw) => match raw.parse::<u8>() {
                Ok(level) if (1..=100).contains(&level) => set.level = level,
                _ => debug!(line, "ignoring out-of-range level"),
            },
            Line::Shiny(value) => set.shiny = value.to_lowercase().contains("yes"),
            Line::Evs(spread) => {
                for (stat, value) in stat_clauses(spread) {
                    set.set_ev(stat, value);
                }
            }
            Line::Ivs(spread) => {
                for (stat, value) in stat_clauses(spread) {
                    set.set_iv(stat, value);
                }
            }
            Line::Nature(name) => match Nature::from_name(&name) {
                Some(nature) => set.nature = Some(nature),
                None => debug!(line, "ignoring unknown nature"),
            },
            Line::Move(name) => moves.push(name.to_owned()),
            Line::Unknown => debug!(line, "ignoring unrecognized line"),
        }
    }

    if !moves.is_empty() {
        set.set_moves(moves);
    }
}

enum Line<'a> {
    Ability(&'a str),
    Level(&'a str),
    Shiny(&'a str),
    Evs(&'a str),
    Ivs(&'a str),
    Nature(String),
    Move(&'a str),
    Unknown,
}

// Move lines come first so a move such as "Nature Power" is not read as a nature.
fn classify(line: &str) -> Line<'_> {
    if line.starts_with('-') {
        let name = line.trim_start_matches(|c: char| c == '-' || c.is_whitespace());
        return if name.is_empty() {
            Line::Unknown
        } else {
            Line::Move(name.trim_end())
        };
    }

    if let Some(rest) = strip_prefix_ignore_case(line, "Ability:") {
        return Line::Ability(rest.trim());
    }
    if let Some(rest) = strip_prefix_ignore_case(line, "Level:") {
        return Line::Level(rest.trim());
    }
    if let Some(rest) = strip_prefix_ignore_case(line, "Shiny:") {
        return Line::Shiny(rest.trim());
    }
    if let Some(rest) = strip_prefix_ignore_case(line, "EVs:") {
        return Line::Evs(rest.trim());
    }
    if let Some(rest) = strip_prefix_ignore_case(line, "IVs:") {
        return Line::Ivs(rest.trim());
    }

    if line.split_whitespace().any(is_nature_word) {
        let name = line
            .split_whitespace()
            .filter(|word| !is_nature_word(word))
            .collect::<Vec<_>>()
            .join(" ");
        return Line::Nature(name);
    }

    Line::Unknown
}

fn is_nature_word(word: &str) -> bool {
    word.eq_ignore_ascii_case("nature")
}

fn strip_prefix_ignore_case<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let head = line.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        line.get(prefix.len()..)
    } else {
        None
    }
}

/// `Nickname (Species) @ Item`, `Species @ Item` or a bare species.
fn apply_header(set: &mut CreatureSet, header: &str) {
    let header = header.trim();
    let (name_part, item) = match header.rsplit_once(" @ ") {
        Some((name, item)) => (name.trim(), non_empty(item)),
        None => (header.strip_suffix(" @").unwrap_or(header).trim(), None),
    };
    let name_part = strip_gender_marker(name_part);

    let (nickname, species) = match split_nickname(name_part) {
        Some((nickname, species)) => (non_empty(nickname), species),
        None => (None, name_part),
    };

    set.species = names::normalize_key(species);
    set.nickname = nickname;
    set.item = item;
}

/// `"Sparky (Pikachu)"` -> `("Sparky", "Pikachu")`.
fn split_nickname(name_part: &str) -> Option<(&str, &str)> {
    let inner = name_part.strip_suffix(')')?;
    let open = inner.rfind('(')?;
    let species = inner[open + 1..].trim();
    if species.is_empty() {
        return None;
    }
    Some((inner[..open].trim(), species))
}

/// Drop a trailing `(M)` / `(F)` gender marker.
fn strip_gender_marker(name_part: &str) -> &str {
    for marker in ["(M)", "(F)"] {
        if let Some(rest) = name_part.strip_suffix(marker) {
            return rest.trim_end();
        }
    }
    name_part
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// `"4 HP / 252 Sp. Atk"` -> `[(Hp, 4), (SpA, 252)]`. Clauses that do not
/// read as `<number> <stat>` are skipped.
fn stat_clauses(spread: &str) -> Vec<(StatType, u16)> {
    spread
        .split('/')
        .filter_map(|clause| {
            let (value, token) = clause.trim().split_once(char::is_whitespace)?;
            let value: u16 = value.parse().ok()?;
            Some((stat_alias(token)?, value))
        })
        .collect()
}

/// Map a stat token to its slot, ignoring case, dots, dashes and spaces.
pub fn stat_alias(token: &str) -> Option<StatType> {
    let key: String = token
        .chars()
        .filter(|c| !matches!(c, '.' | '-' | '_') && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    match key.as_str() {
        "hp" => Some(StatType::Hp),
        "atk" | "attack" => Some(StatType::Atk),
        "def" | "defense" => Some(StatType::Def),
        "spa" | "spatk" | "specialattack" => Some(StatType::SpA),
        "spd" | "spdef" | "specialdefense" => Some(StatType::SpD),
        "spe" | "speed" => Some(StatType::Spe),
        _ => None,
    }
}
