//! Biome definition: id, display metadata, and the ranges it claims.

use csscolorparser::Color;

/// Dense identifier for a registered biome, equal to its 0-based
/// registration position.
///
/// "Unclassified" is deliberately not representable here; classification
/// returns `Option<BiomeId>` so that a missing match can never be confused
/// with a valid id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BiomeId(pub u16);

/// An inclusive `[start, end]` interval in one classification axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Band {
    /// Lower bound, inclusive.
    pub start: f32,
    /// Upper bound, inclusive.
    pub end: f32,
}

impl Band {
    /// Returns `true` when `v` lies inside the band, both ends inclusive.
    pub fn contains(&self, v: f32) -> bool {
        v >= self.start && v <= self.end
    }
}

/// Full descriptor for one biome.
#[derive(Clone, Debug)]
pub struct BiomeDef {
    /// Stable short id used in the data file (e.g. "ocean").
    pub string_id: String,
    /// Human-readable display name.
    pub name: String,
    /// Display color, validated at load but otherwise opaque to generation;
    /// the renderer decides what to do with it.
    pub color: Color,
    /// Elevation band this biome claims.
    pub elevation: Band,
    /// Moisture band this biome claims.
    pub moisture: Band,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_bounds_inclusive() {
        let band = Band { start: 0.35, end: 0.38 };
        assert!(band.contains(0.35));
        assert!(band.contains(0.38));
        assert!(band.contains(0.36));
        assert!(!band.contains(0.34));
        assert!(!band.contains(0.39));
    }
}
