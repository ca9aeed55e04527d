//! Ordered pipeline stages that build up a chunk's buffers.

use loam_config::ConfigSheet;
use loam_registry::Registry;

use crate::{Chunk, OctaveField, WorldGenError};

/// Seed offset added to the master seed for the terrain field.
const TERRAIN_SEED_OFFSET: i32 = 8021;
/// Seed offset added to the master seed for the moisture field.
const MOISTURE_SEED_OFFSET: i32 = 4712;

/// One stage of the chunk pipeline.
///
/// Every variant mutates the chunk through the same `apply` signature;
/// whether a stage reuses the existing buffers is purely a storage
/// optimization, not a semantic distinction.
#[derive(Clone, Debug)]
pub enum GenerationLayer {
    /// Sizes the buffers and resets every cell to its pre-generation value:
    /// elevation and moisture 0.5, biome unclassified.
    Initialize {
        /// Cell count per row.
        width: usize,
        /// Cell count per column.
        height: usize,
        /// Master seed stamped onto the chunk.
        master_seed: i32,
    },
    /// Writes elevation from an octave field keyed by the chunk coordinate.
    TerrainField(FieldLayer),
    /// Writes moisture from an independently seeded octave field.
    MoistureField(FieldLayer),
    /// Classifies every cell against the biome registry. Requires the
    /// terrain and moisture stages to have run first.
    Classify,
}

/// An octave field plus the map scale it is sampled at.
#[derive(Clone, Debug)]
pub struct FieldLayer {
    field: OctaveField,
    map_scale: f32,
}

impl FieldLayer {
    /// Builds a field layer from the keys under `namespace.`.
    ///
    /// Reads `<ns>.scale` (multiplied by the shared `global_map_scale`),
    /// `<ns>.fudge`, `<ns>.octaves`, the optional `<ns>.redistribution`
    /// (default 1.0), and `<ns>.frequency{i}` / `<ns>.amplitude{i}` for
    /// octave indices 1 through `<ns>.octaves`. The field's base seed is
    /// the shared `seed` plus `seed_offset`, which keeps fields with
    /// different offsets decorrelated even under one master seed.
    fn from_sheet(
        sheet: &ConfigSheet,
        namespace: &str,
        seed_offset: i32,
    ) -> Result<Self, WorldGenError> {
        let global_map_scale = sheet.get("global_map_scale")?.parse::<f32>()?;
        let map_scale = sheet.get(&format!("{namespace}.scale"))?.parse::<f32>()? * global_map_scale;
        let redistribution = sheet
            .try_get(&format!("{namespace}.redistribution"))
            .map_or(1.0, |v| v.parse_or(1.0));
        let fudge = sheet.get(&format!("{namespace}.fudge"))?.parse::<f32>()?;
        let octaves = sheet.get(&format!("{namespace}.octaves"))?.parse::<u32>()?;
        let seed = sheet.get("seed")?.parse::<i32>()? + seed_offset;

        let mut frequencies = Vec::with_capacity(octaves as usize);
        let mut amplitudes = Vec::with_capacity(octaves as usize);
        for i in 1..=octaves {
            frequencies.push(sheet.get(&format!("{namespace}.frequency{i}"))?.parse()?);
            amplitudes.push(sheet.get(&format!("{namespace}.amplitude{i}"))?.parse()?);
        }

        let field = OctaveField::new(frequencies, amplitudes, seed, fudge, redistribution)?;
        Ok(Self { field, map_scale })
    }
}

impl GenerationLayer {
    /// Builds the initialize layer from the shared `chunk_side_length` and
    /// `seed` keys.
    pub fn initialize_from_sheet(sheet: &ConfigSheet) -> Result<Self, WorldGenError> {
        let side = sheet.get("chunk_side_length")?.parse::<usize>()?;
        let master_seed = sheet.get("seed")?.parse::<i32>()?;
        Ok(Self::Initialize {
            width: side,
            height: side,
            master_seed,
        })
    }

    /// Builds the terrain layer from the `terrain.` namespace.
    pub fn terrain_from_sheet(sheet: &ConfigSheet) -> Result<Self, WorldGenError> {
        FieldLayer::from_sheet(sheet, "terrain", TERRAIN_SEED_OFFSET).map(Self::TerrainField)
    }

    /// Builds the moisture layer from the `moisture.` namespace.
    pub fn moisture_from_sheet(sheet: &ConfigSheet) -> Result<Self, WorldGenError> {
        FieldLayer::from_sheet(sheet, "moisture", MOISTURE_SEED_OFFSET).map(Self::MoistureField)
    }

    /// Runs this stage over the chunk.
    ///
    /// Later stages observe only what earlier stages in the same run have
    /// written; classify reads the elevation and moisture buffers and the
    /// shared read-only registry.
    pub fn apply(&self, chunk: &mut Chunk, registry: &Registry) {
        match self {
            Self::Initialize {
                width,
                height,
                master_seed,
            } => {
                chunk.width = *width;
                chunk.height = *height;
                chunk.master_seed = *master_seed;
                let len = width * height;
                reset_buffer(&mut chunk.elevation, len, 0.5);
                reset_buffer(&mut chunk.moisture, len, 0.5);
                reset_buffer(&mut chunk.biome, len, None);
            }
            Self::TerrainField(layer) => {
                layer.field.sample_region(
                    chunk.x as f32,
                    chunk.y as f32,
                    chunk.width,
                    chunk.height,
                    layer.map_scale,
                    &mut chunk.elevation,
                );
            }
            Self::MoistureField(layer) => {
                layer.field.sample_region(
                    chunk.x as f32,
                    chunk.y as f32,
                    chunk.width,
                    chunk.height,
                    layer.map_scale,
                    &mut chunk.moisture,
                );
            }
            Self::Classify => {
                let biomes = registry.biomes();
                for idx in 0..chunk.len() {
                    chunk.biome[idx] = biomes.classify(chunk.moisture[idx], chunk.elevation[idx]);
                }
            }
        }
    }
}

/// Refills `buf` with `value`, reallocating only when its length differs
/// from `len`.
fn reset_buffer<T: Copy>(buf: &mut Vec<T>, len: usize, value: T) {
    if buf.len() == len {
        buf.fill(value);
    } else {
        *buf = vec![value; len];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_sheet() -> ConfigSheet {
        ConfigSheet::parse_str(
            "seed = 1337\n\
             global_map_scale = 2.0\n\
             terrain.scale = 3.0\n\
             terrain.fudge = 1.1\n\
             terrain.octaves = 2\n\
             terrain.frequency1 = 1.0\n\
             terrain.amplitude1 = 1.0\n\
             terrain.frequency2 = 2.0\n\
             terrain.amplitude2 = 0.5\n",
        )
        .unwrap()
    }

    #[test]
    fn test_field_layer_reads_namespaced_keys() {
        let layer = FieldLayer::from_sheet(&field_sheet(), "terrain", TERRAIN_SEED_OFFSET).unwrap();
        assert_eq!(layer.field.octaves(), 2);
        assert!((layer.map_scale - 6.0).abs() < 1e-6, "scale * global_map_scale");
    }

    #[test]
    fn test_field_layer_redistribution_defaults_to_one() {
        let mut sheet = field_sheet();
        let with_default =
            FieldLayer::from_sheet(&sheet, "terrain", TERRAIN_SEED_OFFSET).unwrap();
        sheet.set("terrain.redistribution", "1.0");
        let explicit = FieldLayer::from_sheet(&sheet, "terrain", TERRAIN_SEED_OFFSET).unwrap();

        let mut out_a = vec![0.0f32; 16];
        let mut out_b = vec![0.0f32; 16];
        with_default.field.sample_region(0.0, 0.0, 4, 4, 1.0, &mut out_a);
        explicit.field.sample_region(0.0, 0.0, 4, 4, 1.0, &mut out_b);
        assert_eq!(out_a, out_b);
    }

    #[test]
    fn test_field_layer_missing_octave_pair_fails() {
        let mut sheet = field_sheet();
        sheet.set("terrain.octaves", "3");
        let err = FieldLayer::from_sheet(&sheet, "terrain", TERRAIN_SEED_OFFSET).unwrap_err();
        assert!(err.to_string().contains("terrain.frequency3"), "{err}");
    }

    #[test]
    fn test_initialize_resets_all_buffers() {
        let layer = GenerationLayer::Initialize {
            width: 3,
            height: 2,
            master_seed: 9,
        };
        let registry = Registry::new();
        let mut chunk = Chunk::new(1, 2);
        chunk.elevation = vec![0.9; 6];

        layer.apply(&mut chunk, &registry);
        assert_eq!(chunk.master_seed, 9);
        assert_eq!(chunk.elevation, vec![0.5; 6]);
        assert_eq!(chunk.moisture, vec![0.5; 6]);
        assert_eq!(chunk.biome, vec![None; 6]);
    }
}
