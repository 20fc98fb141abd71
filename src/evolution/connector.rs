//! Human-readable labels for evolution edges.

use crate::data_source::{EvolutionDetail, NamedResource};
use crate::names::{display_name, item_name};

const ITEM_SCORE: u32 = 100;
const LEVEL_SCORE: u32 = 80;
const TRADE_SPECIES_SCORE: u32 = 60;
const TRIGGER_SCORE: u32 = 20;
const TIME_OF_DAY_SCORE: u32 = 10;
const LOCATION_SCORE: u32 = 10;

fn named(resource: &Option<NamedResource>) -> Option<&str> {
    resource
        .as_ref()
        .map(|r| r.name.trim())
        .filter(|name| !name.is_empty())
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn score(detail: &EvolutionDetail) -> u32 {
    let mut total = 0;
    if named(&detail.item).is_some() {
        total += ITEM_SCORE;
    }
    if detail.min_level.is_some() {
        total += LEVEL_SCORE;
    }
    if named(&detail.trade_species).is_some() {
        total += TRADE_SPECIES_SCORE;
    }
    if named(&detail.trigger).is_some() {
        total += TRIGGER_SCORE;
    }
    if non_blank(&detail.time_of_day).is_some() {
        total += TIME_OF_DAY_SCORE;
    }
    if named(&detail.location).is_some() {
        total += LOCATION_SCORE;
    }
    total
}

/// The most informative predicate set; the first one wins ties.
fn best_detail(details: &[EvolutionDetail]) -> Option<&EvolutionDetail> {
    let mut best: Option<(&EvolutionDetail, u32)> = None;
    for detail in details {
        let candidate = score(detail);
        match best {
            Some((_, best_score)) if candidate <= best_score => {}
            _ => best = Some((detail, candidate)),
        }
    }
    best.map(|(detail, _)| detail)
}

fn primary_clause(detail: &EvolutionDetail) -> Option<String> {
    if let Some(item) = named(&detail.item) {
        return Some(item_name(item));
    }
    if let Some(level) = detail.min_level {
        return Some(format!("Lv {}", level));
    }
    if let Some(species) = named(&detail.trade_species) {
        return Some(format!("Trade for {}", display_name(species)));
    }
    match named(&detail.trigger) {
        Some(trigger) if trigger.eq_ignore_ascii_case("trade") => Some("Trade".to_owned()),
        Some(trigger) => Some(display_name(trigger)),
        None => None,
    }
}

fn render(detail: &EvolutionDetail) -> String {
    let mut parts: Vec<String> = Vec::new();
    parts.extend(primary_clause(detail));

    if let Some(time) = non_blank(&detail.time_of_day) {
        parts.push(format!("({})", display_name(time)));
    }
    if let Some(location) = named(&detail.location) {
        parts.push(format!("@{}", display_name(location)));
    }
    if let Some(move_type) = named(&detail.known_move_type) {
        parts.push(format!("with {} move", display_name(move_type)));
    }
    if let Some(happiness) = detail.min_happiness {
        parts.push(format!("Happiness ≥ {}", happiness));
    }
    if let Some(beauty) = detail.min_beauty {
        parts.push(format!("Beauty ≥ {}", beauty));
    }
    if let Some(affection) = detail.min_affection {
        parts.push(format!("Affection ≥ {}", affection));
    }
    if detail.needs_overworld_rain == Some(true) {
        parts.push("while raining".to_owned());
    }
    if detail.turn_upside_down == Some(true) {
        parts.push("hold console upside-down".to_owned());
    }
    match detail.relative_physical_stats {
        Some(-1) => parts.push("Atk < Def".to_owned()),
        Some(0) => parts.push("Atk = Def".to_owned()),
        Some(1) => parts.push("Atk > Def".to_owned()),
        _ => {}
    }

    parts.join(" ")
}

/// Label for one evolution edge, built from its raw predicate sets.
/// An edge without predicates gets an empty label.
pub fn resolve_connector(details: &[EvolutionDetail]) -> String {
    best_detail(details).map(render).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn resource(name: &str) -> Option<NamedResource> {
        Some(NamedResource::new(name, ""))
    }

    #[test]
    fn test_level_only() {
        let detail = EvolutionDetail {
            min_level: Some(16),
            ..Default::default()
        };
        assert_eq!(resolve_connector(&[detail]), "Lv 16");
    }

    #[test]
    fn test_item_only() {
        let detail = EvolutionDetail {
            item: resource("leaf-stone"),
            ..Default::default()
        };
        assert_eq!(resolve_connector(&[detail]), "Leaf Stone");
    }

    #[test]
    fn test_item_wins_over_level_in_the_same_predicate() {
        let detail = EvolutionDetail {
            item: resource("leaf-stone"),
            min_level: Some(30),
            ..Default::default()
        };
        assert_eq!(resolve_connector(&[detail]), "Leaf Stone");
    }

    #[test]
    fn test_item_predicate_outscores_level_predicate() {
        let by_level = EvolutionDetail {
            min_level: Some(30),
            trigger: resource("level-up"),
            ..Default::default()
        };
        let by_item = EvolutionDetail {
            item: resource("water-stone"),
            trigger: resource("use-item"),
            ..Default::default()
        };
        assert_eq!(resolve_connector(&[by_level, by_item]), "Water Stone");
    }

    #[test]
    fn test_first_seen_wins_ties() {
        let first = EvolutionDetail {
            trigger: resource("level-up"),
            location: resource("mossy-rock"),
            ..Default::default()
        };
        let second = EvolutionDetail {
            trigger: resource("level-up"),
            location: resource("icy-rock"),
            ..Default::default()
        };
        assert_eq!(resolve_connector(&[first, second]), "Level up @Mossy rock");
    }

    #[test]
    fn test_empty_predicate_list_gives_empty_label() {
        assert_eq!(resolve_connector(&[]), "");
    }

    #[rstest]
    #[case("trade", None, "Trade")]
    #[case("trade", Some("shelmet"), "Trade for Shelmet")]
    #[case("shed", None, "Shed")]
    #[case("three-critical-hits", None, "Three critical hits")]
    fn test_trade_and_trigger_clauses(
        #[case] trigger: &str,
        #[case] trade_species: Option<&str>,
        #[case] expected: &str,
    ) {
        let detail = EvolutionDetail {
            trigger: resource(trigger),
            trade_species: trade_species.and_then(resource),
            ..Default::default()
        };
        assert_eq!(resolve_connector(&[detail]), expected);
    }

    #[test]
    fn test_secondary_clauses_render_in_fixed_order() {
        let detail = EvolutionDetail {
            trigger: resource("level-up"),
            time_of_day: Some("night".to_owned()),
            location: resource("mount-coronet"),
            known_move_type: resource("fairy"),
            min_happiness: Some(160),
            min_beauty: Some(170),
            min_affection: Some(2),
            needs_overworld_rain: Some(true),
            turn_upside_down: Some(true),
            relative_physical_stats: Some(1),
            ..Default::default()
        };
        assert_eq!(
            resolve_connector(&[detail]),
            "Level up (Night) @Mount coronet with Fairy move Happiness ≥ 160 Beauty ≥ 170 \
             Affection ≥ 2 while raining hold console upside-down Atk > Def"
        );
    }

    #[rstest]
    #[case(-1, "Lv 20 Atk < Def")]
    #[case(0, "Lv 20 Atk = Def")]
    #[case(1, "Lv 20 Atk > Def")]
    #[case(7, "Lv 20")]
    fn test_relative_physical_stats(#[case] comparator: i8, #[case] expected: &str) {
        let detail = EvolutionDetail {
            min_level: Some(20),
            relative_physical_stats: Some(comparator),
            ..Default::default()
        };
        assert_eq!(resolve_connector(&[detail]), expected);
    }

    #[test]
    fn test_blank_fields_count_as_absent() {
        let detail = EvolutionDetail {
            min_level: Some(22),
            time_of_day: Some(String::new()),
            needs_overworld_rain: Some(false),
            item: resource(" "),
            ..Default::default()
        };
        assert_eq!(resolve_connector(&[detail]), "Lv 22");
    }
}
