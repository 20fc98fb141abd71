// Pokemon Atlas Schema - Shared type definitions
// This crate holds the small fixed vocabularies (types, stats, natures) shared
// between the main pokemon-atlas crate and its binaries.

// Re-export the main types
pub use natures::*;
pub use pokemon_types::*;
pub use stat_types::*;

pub mod natures;
pub mod pokemon_types;
pub mod stat_types;
