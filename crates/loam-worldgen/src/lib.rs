//! Deterministic tiled-world generation for Loam.
//!
//! A [`ChunkPipeline`] built from a config sheet runs an ordered list of
//! [`GenerationLayer`]s over each [`Chunk`]: initialize buffers, synthesize
//! elevation and moisture from multi-octave coherent noise, then classify
//! every cell against the biome registry. Generation is a pure function of
//! (seed, configuration, chunk coordinate), so rebuilding the pipeline from
//! the same inputs reproduces the world bit for bit.

mod chunk;
mod error;
mod field;
mod layer;
mod noise_sampler;
mod pipeline;
mod world;

pub use chunk::{Chunk, UNCLASSIFIED_SENTINEL};
pub use error::WorldGenError;
pub use field::OctaveField;
pub use layer::{FieldLayer, GenerationLayer};
pub use noise_sampler::NoiseSampler;
pub use pipeline::ChunkPipeline;
pub use world::World;
