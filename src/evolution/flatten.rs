//! Turns a branching evolution tree into display columns.

use serde::{Deserialize, Serialize};

use super::connector::resolve_connector;
use crate::data_source::{ChainLink, NamedResource};
use crate::names;

/// One creature shown inside a stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvoForm {
    /// Species or form identifier.
    pub name: String,
    pub sprite_url: String,
    /// Label for the transition *into* this form; `None` for the root and for
    /// edges without conditions.
    pub connector: Option<String>,
}

impl EvoForm {
    pub(crate) fn from_resource(resource: &NamedResource, connector: Option<String>) -> Self {
        Self {
            name: resource.name.clone(),
            sprite_url: names::sprite_url_for_resource(&resource.url),
            connector: connector.filter(|label| !label.is_empty()),
        }
    }

    pub fn display_name(&self) -> String {
        names::display_name(&self.name)
    }
}

/// A column of the flattened chain: one form, or several side by side when
/// the chain branches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvoStage {
    pub forms: Vec<EvoForm>,
    /// Set on the last stage only.
    pub is_terminal: bool,
}

impl EvoStage {
    pub(crate) fn new(forms: Vec<EvoForm>) -> Self {
        Self {
            forms,
            is_terminal: false,
        }
    }
}

/// Flatten the chain rooted at `root`.
///
/// Stage 0 is the root alone. Each following stage holds every child of the
/// previous stage's first form; only that first child is followed further,
/// so sibling branches are shown but their own descendants are not.
pub fn flatten_chain(root: &ChainLink) -> Vec<EvoStage> {
    let mut stages = vec![EvoStage::new(vec![EvoForm::from_resource(&root.species, None)])];

    let mut cursor = root;
    while let Some(next) = cursor.evolves_to.first() {
        let forms = cursor
            .evolves_to
            .iter()
            .map(|child| {
                let label = resolve_connector(&child.evolution_details);
                EvoForm::from_resource(&child.species, Some(label))
            })
            .collect();
        stages.push(EvoStage::new(forms));
        cursor = next;
    }

    mark_terminal(&mut stages);
    stages
}

/// Flag the last stage terminal and every other stage not.
pub(crate) fn mark_terminal(stages: &mut [EvoStage]) {
    let last = stages.len().saturating_sub(1);
    for (index, stage) in stages.iter_mut().enumerate() {
        stage.is_terminal = index == last;
    }
}
