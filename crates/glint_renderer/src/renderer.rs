//! Framebuffer and the render entry point.

use rayon::prelude::*;

use crate::scene::Scene;
use crate::tile::{generate_tiles, render_tile, TileGrid, TileResult};
use crate::Color;

/// Image buffer holding one unclamped color per pixel.
///
/// Allocated once before rendering starts and never resized. During a
/// render each cell is written exactly once, by the worker that owns the
/// tile containing it.
pub struct Framebuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl Framebuffer {
    /// Create a new framebuffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Copy a rendered tile into its window of the framebuffer.
    fn blit(&mut self, result: &TileResult) {
        let tile = result.tile;
        for local_y in 0..tile.height {
            let row_start = (local_y * tile.width) as usize;
            let row = &result.pixels[row_start..row_start + tile.width as usize];
            let dst_start = ((tile.y + local_y) * self.width + tile.x) as usize;
            self.pixels[dst_start..dst_start + row.len()].copy_from_slice(row);
        }
    }
}

/// Render the scene into a new framebuffer.
///
/// Partitions the image per `grid`, renders every tile as an independent
/// fork-join worker, and blocks until all have finished. The output is
/// bit-identical across granularities; the grid only controls
/// parallelism.
pub fn render(scene: &Scene, width: u32, height: u32, grid: TileGrid) -> Framebuffer {
    let tiles = generate_tiles(width, height, grid);
    log::info!(
        "rendering {}x{} with {} tile(s)",
        width,
        height,
        tiles.len()
    );

    let results: Vec<TileResult> = tiles
        .par_iter()
        .map(|tile| TileResult::new(*tile, render_tile(tile, scene, width, height)))
        .collect();

    let mut framebuffer = Framebuffer::new(width, height);
    for result in &results {
        framebuffer.blit(result);
    }

    log::debug!("render complete, {} pixels", framebuffer.pixels.len());
    framebuffer
}
