use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::creature_set::CreatureSet;
use crate::errors::TeamError;
use crate::set_codec::{parse_set, serialize_set};

pub const MAX_TEAM_SIZE: usize = 6;

/// Up to six set snapshots, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRoster {
    sets: Vec<CreatureSet>,
}

impl TeamRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sets(&self) -> &[CreatureSet] {
        &self.sets
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.sets.len() >= MAX_TEAM_SIZE
    }

    /// Store a snapshot of `set`; later edits to the caller's copy do not
    /// reach the roster.
    pub fn add(&mut self, set: &CreatureSet) -> Result<(), TeamError> {
        if self.is_full() {
            return Err(TeamError::Full(MAX_TEAM_SIZE));
        }
        self.sets.push(set.clone());
        Ok(())
    }

    pub fn remove_last(&mut self) -> Option<CreatureSet> {
        self.sets.pop()
    }

    /// Every set as a block, blocks separated by one blank line.
    pub fn export(&self) -> String {
        self.sets
            .iter()
            .map(serialize_set)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Build a roster from pasted blocks separated by blank lines. Blocks past
    /// the sixth are dropped.
    pub fn import(text: &str) -> Self {
        let blocks = split_blocks(text);
        if blocks.len() > MAX_TEAM_SIZE {
            debug!(
                blocks = blocks.len(),
                kept = MAX_TEAM_SIZE,
                "dropping blocks past the team limit"
            );
        }
        Self {
            sets: blocks
                .iter()
                .take(MAX_TEAM_SIZE)
                .map(|block| parse_set(block))
                .collect(),
        }
    }
}

fn split_blocks(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current.join("\n"));
    }
    blocks
}
