//! The addressable unit of generated world state.

use loam_registry::BiomeId;

/// Integer the renderer-facing view uses for "no biome covers this cell".
pub const UNCLASSIFIED_SENTINEL: i32 = -1;

/// A fixed-size rectangular tile of generated world data.
///
/// Addressed by integer grid coordinates; the top-left chunk is `(0, 0)`.
/// Once initialized, the elevation, moisture, and biome buffers all hold
/// exactly `width * height` cells in row-major order. Chunks are created and
/// refreshed only by the pipeline; they have no lifecycle of their own.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Chunk {
    /// Grid x coordinate.
    pub x: i32,
    /// Grid y coordinate.
    pub y: i32,
    /// Cell count per row.
    pub width: usize,
    /// Cell count per column.
    pub height: usize,
    /// Master seed the chunk was generated from.
    pub master_seed: i32,
    /// Per-cell elevation, nominally in `[0, 1]` after redistribution.
    pub elevation: Vec<f32>,
    /// Per-cell moisture, same range as elevation.
    pub moisture: Vec<f32>,
    /// Per-cell biome classification; `None` where no registered biome
    /// covers the cell.
    pub biome: Vec<Option<BiomeId>>,
}

impl Chunk {
    /// Creates an empty chunk at the given grid coordinate. The pipeline's
    /// initialize layer sizes and fills the buffers.
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }

    /// Number of cells in the chunk.
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// Returns `true` when the chunk holds no cells.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Row-major buffer index for cell `(cx, cy)`.
    pub fn cell_index(&self, cx: usize, cy: usize) -> usize {
        cy * self.width + cx
    }

    /// Biome buffer as plain integers for the renderer, with
    /// [`UNCLASSIFIED_SENTINEL`] standing in for unclassified cells.
    pub fn biome_sentinels(&self) -> Vec<i32> {
        self.biome
            .iter()
            .map(|b| b.map_or(UNCLASSIFIED_SENTINEL, |id| i32::from(id.0)))
            .collect()
    }
}
