//! Data-driven biome definitions for Loam.
//!
//! Biomes are declared in an external sheet and loaded into an ordered,
//! append-only [`BiomeRegistry`]. Declaration order is semantically
//! meaningful: ids are assigned in listed order and range classification is
//! first-match-wins, so overlapping ranges resolve to whichever biome was
//! declared first.

mod biome;
mod error;
mod registry;

pub use biome::{Band, BiomeDef, BiomeId};
pub use error::RegistryError;
pub use registry::{BiomeRegistry, Registry};
