//! Local Phong shading.
//!
//! A single fixed point light, a diffuse term and a specular term. No
//! ambient light, no shadow rays, no bounces; the summed color is left
//! unclamped until image serialization.

use glint_math::{Ray, Vec3};

use crate::scene::Scene;
use crate::shape::Shape;
use crate::Color;

/// Position of the scene's only light.
pub const LIGHT_POSITION: Vec3 = Vec3::new(20.0, 20.0, 0.0);

/// Light intensity (white).
pub const LIGHT_INTENSITY: Vec3 = Vec3::new(1.0, 1.0, 1.0);

/// Background color for rays that hit nothing (opaque white).
pub const BACKGROUND: Color = Color::ONE;

/// Shade a known hit at ray parameter `t` on `shape`.
pub fn shade_hit(ray: &Ray, t: f32, shape: &Shape) -> Color {
    let p0 = ray.at(t);
    let sample = shape.shade_material(p0);

    // Shapes may return an unnormalized normal
    let normal = sample.normal.normalize();
    let light_dir = (LIGHT_POSITION - p0).normalize();

    let diffuse = sample.diffuse * LIGHT_INTENSITY * light_dir.dot(normal).max(0.0);

    let reflection = (2.0 * light_dir.dot(normal) * normal - light_dir).normalize();
    let view_dir = (ray.origin - p0).normalize();
    let highlight = reflection.dot(view_dir).max(0.0).powi(sample.shininess);
    let specular = sample.specular * LIGHT_INTENSITY * highlight;

    diffuse + specular
}

/// Compute the color seen by a primary ray.
///
/// Resolves the nearest hit in the scene and shades it, or returns the
/// background color on a miss.
pub fn ray_color(ray: &Ray, scene: &Scene) -> Color {
    match scene.nearest_hit(ray) {
        Some(hit) => shade_hit(ray, hit.t, &scene.shapes()[hit.shape]),
        None => BACKGROUND,
    }
}
