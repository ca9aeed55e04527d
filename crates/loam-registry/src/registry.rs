//! The ordered biome registry and its owning [`Registry`] container.

use loam_config::ConfigSheet;

use crate::{Band, BiomeDef, BiomeId, RegistryError};

/// Append-only, ordered table of biome definitions.
///
/// Ids are assigned strictly in registration order and never reused or
/// renumbered within one load. Ranges may overlap arbitrarily; overlap is
/// resolved by [`BiomeRegistry::classify`]'s first-match rule, which makes
/// declaration order part of the data's meaning.
#[derive(Clone, Debug, Default)]
pub struct BiomeRegistry {
    biomes: Vec<BiomeDef>,
}

impl BiomeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a biome definition, returning its assigned id.
    pub fn register(&mut self, def: BiomeDef) -> BiomeId {
        let id = BiomeId(self.biomes.len() as u16);
        tracing::info!(biome = %def.string_id, id = id.0, "registered biome");
        self.biomes.push(def);
        id
    }

    /// Returns the definition for a previously assigned id.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this registry — ids are only
    /// produced by [`BiomeRegistry::register`], so an out-of-range id is a
    /// programming error.
    pub fn get(&self, id: BiomeId) -> &BiomeDef {
        &self.biomes[id.0 as usize]
    }

    /// Looks up a biome id by its stable short id, scanning in registration
    /// order.
    pub fn find_id(&self, string_id: &str) -> Option<BiomeId> {
        self.biomes
            .iter()
            .position(|b| b.string_id == string_id)
            .map(|idx| BiomeId(idx as u16))
    }

    /// Classifies a cell by its moisture and elevation.
    ///
    /// Scans entries in registration order and returns the first whose
    /// moisture and elevation bands both contain the query values, bounds
    /// inclusive on both ends. Returns `None` when no biome covers the
    /// point; coverage gaps are expected and have no fallback.
    pub fn classify(&self, moisture: f32, elevation: f32) -> Option<BiomeId> {
        self.biomes
            .iter()
            .position(|b| b.moisture.contains(moisture) && b.elevation.contains(elevation))
            .map(|idx| BiomeId(idx as u16))
    }

    /// Builds a registry from a biome data sheet.
    ///
    /// The `biomes` key holds a whitespace-separated ordered list of short
    /// ids; each listed biome is registered in that order from its
    /// `<id>.name`, `<id>.color`, `<id>.elevation.start/.end` and
    /// `<id>.moisture.start/.end` keys. Ids are therefore fully determined
    /// by declaration order in the sheet.
    ///
    /// # Errors
    ///
    /// Any missing or malformed field fails the whole construction; callers
    /// get either a complete registry or none at all.
    pub fn from_sheet(sheet: &ConfigSheet) -> Result<Self, RegistryError> {
        let listed = sheet.get("biomes").map_err(RegistryError::BiomeList)?;
        tracing::info!(biomes = listed.as_str(), "loading listed biomes");

        let mut registry = Self::new();
        for string_id in listed.as_str().split_whitespace() {
            let def = Self::read_biome(sheet, string_id)?;
            registry.register(def);
        }
        Ok(registry)
    }

    fn read_biome(sheet: &ConfigSheet, string_id: &str) -> Result<BiomeDef, RegistryError> {
        let attribute = |err| RegistryError::BiomeAttribute {
            biome: string_id.to_string(),
            source: err,
        };

        let name = sheet
            .get(&format!("{string_id}.name"))
            .map_err(attribute)?
            .as_str()
            .to_string();
        let color_text = sheet
            .get(&format!("{string_id}.color"))
            .map_err(attribute)?
            .as_str();
        let color = csscolorparser::parse(color_text).map_err(|_| {
            tracing::error!(biome = string_id, color = color_text, "invalid biome color");
            RegistryError::InvalidColor {
                biome: string_id.to_string(),
                value: color_text.to_string(),
            }
        })?;

        let band = |axis: &str| -> Result<Band, RegistryError> {
            let start = sheet
                .get(&format!("{string_id}.{axis}.start"))
                .and_then(|v| v.parse::<f32>())
                .map_err(attribute)?;
            let end = sheet
                .get(&format!("{string_id}.{axis}.end"))
                .and_then(|v| v.parse::<f32>())
                .map_err(attribute)?;
            Ok(Band { start, end })
        };

        Ok(BiomeDef {
            string_id: string_id.to_string(),
            name,
            color,
            elevation: band("elevation")?,
            moisture: band("moisture")?,
        })
    }

    /// Returns the number of registered biomes.
    pub fn len(&self) -> usize {
        self.biomes.len()
    }

    /// Returns `true` when no biomes are registered.
    pub fn is_empty(&self) -> bool {
        self.biomes.is_empty()
    }

    /// Iterates definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &BiomeDef> {
        self.biomes.iter()
    }
}

/// Owning container for all data-driven registries.
///
/// Currently holds only the biome registry; other registries slot in beside
/// it as the data model grows. A load either fully succeeds, replacing all
/// entries, or fully fails and leaves the previous entries visible.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    biomes: BiomeRegistry,
}

impl Registry {
    /// Creates a registry container with no entries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the biome registry.
    pub fn biomes(&self) -> &BiomeRegistry {
        &self.biomes
    }

    /// Replaces the biome registry from a data sheet.
    ///
    /// # Errors
    ///
    /// On failure the previous entries remain exactly as they were.
    pub fn load(&mut self, sheet: &ConfigSheet) -> Result<(), RegistryError> {
        self.biomes = BiomeRegistry::from_sheet(sheet)?;
        Ok(())
    }
}
