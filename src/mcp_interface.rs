//! Text-producing entry points shared by the CLI and the MCP server.
//!
//! Each function runs one lookup end to end and renders a plain-text answer,
//! so both front ends stay thin.

use crate::config::CounterSearchOptions;
use crate::counters::find_counters;
use crate::creature_set::CreatureSet;
use crate::data_source::DataSource;
use crate::effectiveness::rank_attack_types;
use crate::evolution::{evolution_stages_for_species, EvoStage};
use crate::names;
use crate::set_codec::serialize_set;
use crate::teams::{TeamRoster, MAX_TEAM_SIZE};

fn defender_label<S: AsRef<str>>(defender_types: &[S]) -> String {
    let label = defender_types
        .iter()
        .map(|ty| ty.as_ref().trim().to_uppercase())
        .filter(|ty| !ty.is_empty())
        .collect::<Vec<_>>()
        .join("/");
    if label.is_empty() {
        "(no type)".to_owned()
    } else {
        label
    }
}

/// Every attacking type ranked against the defender, one per line.
pub fn rank_display<S: AsRef<str>>(defender_types: &[S]) -> String {
    let result = rank_attack_types(defender_types);
    let mut output = format!("Attack types vs {}:\n", defender_label(defender_types));
    for entry in result.entries() {
        output.push_str(&format!("  {}\n", entry.label()));
    }
    output
}

/// Ranked counters with their own types and matched attacking types.
pub async fn counters_display<S, D>(
    source: &D,
    defender_types: &[S],
    options: &CounterSearchOptions,
) -> String
where
    S: AsRef<str>,
    D: DataSource + ?Sized,
{
    let label = defender_label(defender_types);
    let effective = rank_attack_types(defender_types).super_effective_types();
    if effective.is_empty() {
        return format!("Nothing is super effective against {}.", label);
    }

    let counters = find_counters(source, defender_types, options).await;
    if counters.is_empty() {
        return format!(
            "No creature covers {} or more super-effective types against {}.",
            options.min_match_types, label
        );
    }

    let mut output = format!("Counters for {}:\n", label);
    for (i, candidate) in counters.iter().enumerate() {
        output.push_str(&format!(
            "  {:>2}. {:<16} {:<18} {} match(es): {}\n",
            i + 1,
            candidate.display_name(),
            candidate.types_summary(),
            candidate.matching_count(),
            candidate.matching_summary()
        ));
    }
    output
}

fn stage_line(index: usize, stage: &EvoStage) -> String {
    let forms = stage
        .forms
        .iter()
        .map(|form| match &form.connector {
            Some(connector) => format!("{} ({})", form.display_name(), connector),
            None => form.display_name(),
        })
        .collect::<Vec<_>>()
        .join(", ");
    let marker = if stage.is_terminal { " [final]" } else { "" };
    format!("Stage {}{}: {}", index + 1, marker, forms)
}

/// The evolution family of `species_name`, one stage per line.
pub async fn evolution_display<D>(source: &D, species_name: &str) -> String
where
    D: DataSource + ?Sized,
{
    let stages = evolution_stages_for_species(source, species_name).await;
    if stages.is_empty() {
        return format!(
            "No evolution data available for {}.",
            names::display_name(species_name)
        );
    }
    stages
        .iter()
        .enumerate()
        .map(|(i, stage)| stage_line(i, stage))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Creature names containing `query`.
pub async fn search_display<D>(source: &D, query: &str, limit: usize) -> String
where
    D: DataSource + ?Sized,
{
    match source.search_names(query, limit).await {
        Ok(hits) if hits.is_empty() => format!("No creature names contain \"{}\".", query.trim()),
        Ok(hits) => hits.join("\n"),
        Err(e) => format!("Search failed: {}", e),
    }
}

/// A starting set for `name`, in set notation.
pub async fn export_set_display<D>(source: &D, name: &str) -> String
where
    D: DataSource + ?Sized,
{
    match source.creature(name).await {
        Ok(detail) => serialize_set(&CreatureSet::seeded_from(&detail)),
        Err(e) => format!("Could not load {}: {}", names::display_name(name), e),
    }
}

/// Parse pasted set blocks and echo them back normalized.
pub fn import_set_display(text: &str) -> String {
    let roster = TeamRoster::import(text);
    if roster.is_empty() {
        return "No sets found in the pasted text.".to_owned();
    }
    format!(
        "Imported {} of at most {} set(s):\n\n{}",
        roster.len(),
        MAX_TEAM_SIZE,
        roster.export()
    )
}
