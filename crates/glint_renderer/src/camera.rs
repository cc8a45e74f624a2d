//! Camera for ray generation.
//!
//! The camera is fixed at the origin looking down -Z with a 90 degree
//! vertical field of view, so ray generation is a pure function of the
//! pixel coordinate and the image dimensions.

use glint_math::{Ray, Vec3};

/// Vertical field of view in degrees.
const VFOV_DEGREES: f32 = 90.0;

/// Generate the primary ray for pixel (i, j).
///
/// The pixel center is normalized to [0, 1], remapped to [-1, 1] with the
/// vertical axis flipped so row 0 is up, scaled by the aspect ratio and
/// tan(vfov / 2), and placed on the view plane at z = -1. The returned
/// direction is unit length. Identical inputs always yield the identical
/// ray.
pub fn pixel_to_ray(i: u32, j: u32, width: u32, height: u32) -> Ray {
    // Pixel center in [0, 1]
    let ndc_x = (i as f32 + 0.5) / width as f32;
    let ndc_y = (j as f32 + 0.5) / height as f32;

    let aspect_ratio = width as f32 / height as f32;
    let fov_scale = (VFOV_DEGREES.to_radians() / 2.0).tan();

    // Remap to [-1, 1], flipping y so image row 0 is up
    let screen_x = (2.0 * ndc_x - 1.0) * aspect_ratio * fov_scale;
    let screen_y = (1.0 - 2.0 * ndc_y) * fov_scale;

    // View plane sits one unit in front of the camera
    let point_camera_space = Vec3::new(screen_x, screen_y, -1.0);

    Ray::new(Vec3::ZERO, point_camera_space.normalize())
}
