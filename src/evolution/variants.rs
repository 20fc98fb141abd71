//! Mega and Gigantamax forms appended after the main chain.

use super::flatten::{mark_terminal, EvoForm, EvoStage};
use crate::data_source::SpeciesRecord;
use crate::names;

include!(concat!(env!("OUT_DIR"), "/generated_data.rs"));

const GMAX_LABEL: &str = "Max Soup";

/// True when a hyphen-separated segment after the base name is `marker`.
fn has_form_segment(key: &str, marker: &str) -> bool {
    key.split('-').skip(1).any(|segment| segment == marker)
}

fn is_variant_form(name: &str) -> bool {
    let key = names::normalize_key(name);
    has_form_segment(&key, "mega") || has_form_segment(&key, "gmax")
}

/// Label for a variant form: its catalyst item when known, `Max Soup` for
/// Gigantamax forms, otherwise the form's display name.
pub fn variant_label(form_name: &str) -> String {
    let key = names::normalize_key(form_name);
    if let Some(item) = VARIANT_CATALYSTS.get(key.as_str()) {
        return (*item).to_owned();
    }
    if has_form_segment(&key, "gmax") {
        return GMAX_LABEL.to_owned();
    }
    names::display_name(&key)
}

/// One stage holding every variant variety of `species`, sorted by name, or
/// `None` when it has none.
pub fn variant_stage(species: &SpeciesRecord) -> Option<EvoStage> {
    let mut varieties: Vec<_> = species
        .varieties
        .iter()
        .filter(|variety| !variety.is_default)
        .map(|variety| &variety.pokemon)
        .filter(|pokemon| pokemon.is_named() && is_variant_form(&pokemon.name))
        .collect();
    if varieties.is_empty() {
        return None;
    }
    varieties.sort_by(|a, b| a.name.cmp(&b.name));

    let forms = varieties
        .into_iter()
        .map(|pokemon| EvoForm::from_resource(pokemon, Some(variant_label(&pokemon.name))))
        .collect();
    Some(EvoStage::new(forms))
}

/// Append the variant stage of `final_species`, if any, and re-mark the
/// terminal stage.
pub fn with_variant_stage(mut stages: Vec<EvoStage>, final_species: &SpeciesRecord) -> Vec<EvoStage> {
    if let Some(stage) = variant_stage(final_species) {
        stages.push(stage);
        mark_terminal(&mut stages);
    }
    stages
}
