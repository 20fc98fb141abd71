//! Evolution chains flattened into display stages.

pub mod connector;
pub mod flatten;
pub mod variants;

use tracing::{debug, warn};

use crate::data_source::{DataSource, NamedResource, SpeciesRecord};
use crate::names;

pub use connector::resolve_connector;
pub use flatten::{flatten_chain, EvoForm, EvoStage};
pub use variants::{variant_label, variant_stage, with_variant_stage};

/// Stages for the evolution family `species_name` belongs to, with the final
/// species' variant forms appended.
///
/// Returns an empty list when the species or its chain cannot be fetched; a
/// failed final-species lookup only drops the variant stage.
pub async fn evolution_stages_for_species<D>(source: &D, species_name: &str) -> Vec<EvoStage>
where
    D: DataSource + ?Sized,
{
    let species = match source.species(species_name).await {
        Ok(species) => species,
        Err(e) => {
            warn!(species = species_name, error = %e, "species lookup failed");
            return Vec::new();
        }
    };

    let chain_url = match species.evolution_chain.as_ref().map(|r| r.url.as_str()) {
        Some(url) if !url.trim().is_empty() => url.to_owned(),
        _ => {
            debug!(species = %species.name, "species has no evolution chain");
            return Vec::new();
        }
    };

    let root = match source.evolution_chain_by_url(&chain_url).await {
        Ok(record) => match record.chain {
            Some(root) => root,
            None => {
                debug!(url = %chain_url, "evolution chain has no root");
                return Vec::new();
            }
        },
        Err(e) => {
            warn!(url = %chain_url, error = %e, "evolution chain lookup failed");
            return Vec::new();
        }
    };

    let stages = flatten_chain(&root);

    // The last stage's first form is the end of the first-child path.
    let mut last = &root;
    while let Some(next) = last.evolves_to.first() {
        last = next;
    }

    match final_species(source, &species, &last.species).await {
        Some(final_species) => with_variant_stage(stages, &final_species),
        None => stages,
    }
}

async fn final_species<D>(
    source: &D,
    requested: &SpeciesRecord,
    last: &NamedResource,
) -> Option<SpeciesRecord>
where
    D: DataSource + ?Sized,
{
    if names::normalize_key(&requested.name) == names::normalize_key(&last.name) {
        return Some(requested.clone());
    }
    let lookup = if last.url.trim().is_empty() {
        source.species(&last.name).await
    } else {
        source.species_by_url(&last.url).await
    };
    match lookup {
        Ok(species) => Some(species),
        Err(e) => {
            warn!(species = %last.name, error = %e, "final species lookup failed; skipping variants");
            None
        }
    }
}
