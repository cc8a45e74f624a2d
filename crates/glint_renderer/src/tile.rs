//! Tile-based partitioning of the framebuffer.
//!
//! Divides the image into an n-by-n grid of disjoint rectangles that can
//! be rendered independently and in parallel. Partitioning is purely a
//! performance concern: the rendered pixels are identical under every
//! granularity.

use crate::camera::pixel_to_ray;
use crate::scene::Scene;
use crate::shader::ray_color;
use crate::Color;

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// X coordinate of the tile's top-left corner
    pub x: u32,
    /// Y coordinate of the tile's top-left corner
    pub y: u32,
    /// Width of the tile in pixels
    pub width: u32,
    /// Height of the tile in pixels
    pub height: u32,
}

impl Tile {
    /// Create a new tile.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Get the total number of pixels in this tile.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }
}

/// Grid granularity for the tile scheduler.
///
/// Determines how many independent workers render the image: one, four,
/// or sixteen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileGrid {
    /// One tile covering the whole image
    Single,
    /// 2x2 grid, four workers
    Quarters,
    /// 4x4 grid, sixteen workers
    Sixteenths,
}

impl TileGrid {
    /// Number of grid cells along each axis.
    pub fn cells_per_axis(self) -> u32 {
        match self {
            TileGrid::Single => 1,
            TileGrid::Quarters => 2,
            TileGrid::Sixteenths => 4,
        }
    }

    /// Total number of tiles (and workers).
    pub fn worker_count(self) -> u32 {
        let n = self.cells_per_axis();
        n * n
    }
}

/// Generate the grid of tiles for an image.
///
/// Cell boundaries are computed by integer range splitting, so the tiles
/// cover the image exactly and disjointly for any dimensions, divisible
/// by the grid size or not.
pub fn generate_tiles(width: u32, height: u32, grid: TileGrid) -> Vec<Tile> {
    let n = grid.cells_per_axis();
    let mut tiles = Vec::with_capacity((n * n) as usize);

    for row in 0..n {
        let y0 = row * height / n;
        let y1 = (row + 1) * height / n;
        for col in 0..n {
            let x0 = col * width / n;
            let x1 = (col + 1) * width / n;
            tiles.push(Tile::new(x0, y0, x1 - x0, y1 - y0));
        }
    }

    tiles
}

/// Render a single tile to a vector of colors.
///
/// Pixels are produced in row-major order within the tile. Each pixel is
/// mapped to its primary ray, resolved against the scene, and shaded.
pub fn render_tile(tile: &Tile, scene: &Scene, image_width: u32, image_height: u32) -> Vec<Color> {
    let mut pixels = Vec::with_capacity(tile.pixel_count() as usize);

    for local_y in 0..tile.height {
        for local_x in 0..tile.width {
            let ray = pixel_to_ray(tile.x + local_x, tile.y + local_y, image_width, image_height);
            pixels.push(ray_color(&ray, scene));
        }
    }

    pixels
}

/// Result of rendering a tile.
#[derive(Debug, Clone)]
pub struct TileResult {
    /// The tile that was rendered
    pub tile: Tile,
    /// Pixel colors in row-major order
    pub pixels: Vec<Color>,
}

impl TileResult {
    /// Create a new tile result.
    pub fn new(tile: Tile, pixels: Vec<Color>) -> Self {
        Self { tile, pixels }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_exact_cover(width: u32, height: u32, grid: TileGrid) {
        let tiles = generate_tiles(width, height, grid);
        assert_eq!(tiles.len(), grid.worker_count() as usize);

        // Every pixel is owned by exactly one tile
        let mut owners = vec![0u32; (width * height) as usize];
        for tile in &tiles {
            for y in tile.y..tile.y + tile.height {
                for x in tile.x..tile.x + tile.width {
                    owners[(y * width + x) as usize] += 1;
                }
            }
        }
        assert!(owners.iter().all(|&count| count == 1));
    }

    #[test]
    fn test_single_tile_covers_image() {
        let tiles = generate_tiles(800, 800, TileGrid::Single);
        assert_eq!(tiles, vec![Tile::new(0, 0, 800, 800)]);
    }

    #[test]
    fn test_grid_covers_exactly_when_divisible() {
        assert_exact_cover(800, 800, TileGrid::Quarters);
        assert_exact_cover(800, 800, TileGrid::Sixteenths);
    }

    #[test]
    fn test_grid_covers_exactly_when_not_divisible() {
        assert_exact_cover(101, 67, TileGrid::Quarters);
        assert_exact_cover(101, 67, TileGrid::Sixteenths);
        assert_exact_cover(3, 5, TileGrid::Sixteenths);
    }

    #[test]
    fn test_non_square_grid_cover() {
        assert_exact_cover(200, 100, TileGrid::Quarters);
    }

    #[test]
    fn test_worker_counts() {
        assert_eq!(TileGrid::Single.worker_count(), 1);
        assert_eq!(TileGrid::Quarters.worker_count(), 4);
        assert_eq!(TileGrid::Sixteenths.worker_count(), 16);
    }

    #[test]
    fn test_render_tile_pixel_count() {
        let scene = Scene::reference();
        let tile = Tile::new(10, 20, 8, 4);
        let pixels = render_tile(&tile, &scene, 80, 80);
        assert_eq!(pixels.len(), 32);
    }
}
