//! Row-major grid of chunks covering the whole world.

use loam_registry::Registry;

use crate::{Chunk, ChunkPipeline};

/// All generated chunks, stored row-major over the world's chunk grid.
///
/// Chunks are generated independently; the grid exists so a configuration
/// reload can sweep every chunk in a fixed traversal order and reuse their
/// buffers in place.
#[derive(Clone, Debug, Default)]
pub struct World {
    chunks: Vec<Chunk>,
    chunks_x: usize,
    chunks_y: usize,
}

impl World {
    /// Creates a world with no chunks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates a fresh `chunks_x` x `chunks_y` grid, row by row.
    pub fn generate(
        pipeline: &ChunkPipeline,
        registry: &Registry,
        chunks_x: usize,
        chunks_y: usize,
    ) -> Self {
        let mut chunks = Vec::with_capacity(chunks_x * chunks_y);
        for i in 0..chunks_y {
            for j in 0..chunks_x {
                chunks.push(pipeline.generate(registry, j as i32, i as i32));
            }
        }
        Self {
            chunks,
            chunks_x,
            chunks_y,
        }
    }

    /// Re-runs the pipeline over the whole grid.
    ///
    /// When the grid shape is unchanged every chunk is regenerated in
    /// place, reusing its buffers; otherwise the grid is rebuilt from
    /// scratch at the new shape.
    pub fn regenerate(
        &mut self,
        pipeline: &ChunkPipeline,
        registry: &Registry,
        chunks_x: usize,
        chunks_y: usize,
    ) {
        let shape_matches = self.chunks_x == chunks_x
            && self.chunks_y == chunks_y
            && self.chunks.len() == chunks_x * chunks_y;
        if !shape_matches {
            *self = Self::generate(pipeline, registry, chunks_x, chunks_y);
            return;
        }

        let mut idx = 0;
        for i in 0..chunks_y {
            for j in 0..chunks_x {
                pipeline.regenerate(registry, j as i32, i as i32, &mut self.chunks[idx]);
                idx += 1;
            }
        }
    }

    /// All chunks in row-major order.
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// The chunk at grid coordinate `(x, y)`, if the grid covers it.
    pub fn chunk(&self, x: usize, y: usize) -> Option<&Chunk> {
        if x < self.chunks_x && y < self.chunks_y {
            self.chunks.get(y * self.chunks_x + x)
        } else {
            None
        }
    }

    /// Grid dimensions as `(chunks_x, chunks_y)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.chunks_x, self.chunks_y)
    }
}
