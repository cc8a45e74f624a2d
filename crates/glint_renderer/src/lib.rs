//! Glint renderer - CPU ray tracing
//!
//! A single-bounce ray tracer with local Phong shading. One primary ray
//! is cast per pixel, tested against every shape in the scene, and the
//! nearest hit is shaded from a single fixed point light. The image is
//! partitioned into disjoint tiles that render independently in parallel.

mod camera;
mod ppm;
mod renderer;
mod scene;
mod shader;
mod shape;
mod tile;

pub use camera::pixel_to_ray;
pub use ppm::{color_to_rgb, save_ppm, write_ppm, RenderError};
pub use renderer::{render, Framebuffer};
pub use scene::{Hit, Scene};
pub use shader::{ray_color, shade_hit, BACKGROUND, LIGHT_INTENSITY, LIGHT_POSITION};
pub use shape::{MaterialSample, Plane, Shape, Sphere};
pub use tile::{generate_tiles, render_tile, Tile, TileGrid, TileResult};

/// Re-export Vec3 and the ray type from glint_math
pub use glint_math::{Ray, Vec3};

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;
