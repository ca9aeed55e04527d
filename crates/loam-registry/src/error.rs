//! Registry load error types.

use loam_config::ConfigError;

/// Errors that can occur while loading biome data.
///
/// Any of these aborts the entire load; a registry is never left partially
/// populated.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The ordered `biomes` list itself was missing or unreadable.
    #[error("biome list unreadable: {0}")]
    BiomeList(#[source] ConfigError),

    /// An attribute of a listed biome was missing or unparseable.
    #[error("biome data corrupt for {biome:?}: {source}")]
    BiomeAttribute {
        /// Short id of the biome whose block failed.
        biome: String,
        #[source]
        source: ConfigError,
    },

    /// A biome's display color was not a valid CSS color string.
    #[error("invalid color {value:?} for biome {biome:?}")]
    InvalidColor {
        /// Short id of the biome.
        biome: String,
        /// The rejected color text.
        value: String,
    },
}
