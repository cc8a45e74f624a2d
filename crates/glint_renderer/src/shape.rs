//! Geometric primitives and ray intersection tests.

use glint_math::{Ray, Vec3};

use crate::Color;

/// Rays closer to parallel than this never hit a plane.
const PLANE_PARALLEL_EPSILON: f32 = 1e-6;

/// Surface properties sampled at a hit point.
///
/// Returned by value from [`Shape::shade_material`]; nothing is cached
/// between pixels. The normal is whatever the shape naturally produces
/// and is not guaranteed to be unit length - the shader normalizes it.
#[derive(Debug, Clone, Copy)]
pub struct MaterialSample {
    /// Surface normal at the hit point (possibly unnormalized)
    pub normal: Vec3,
    /// Diffuse reflectance color
    pub diffuse: Color,
    /// Specular reflectance color
    pub specular: Color,
    /// Phong shininess exponent (0 = no highlight)
    pub shininess: i32,
}

/// An infinite plane.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    position: Vec3,
    normal: Vec3,
    color: Color,
}

impl Plane {
    /// Create a new plane through `position` with the given unit `normal`.
    pub fn new(position: Vec3, normal: Vec3, color: Color) -> Self {
        Self {
            position,
            normal,
            color,
        }
    }

    fn intersect(&self, ray: &Ray) -> Option<f32> {
        let denom = ray.direction.dot(self.normal);
        if denom.abs() < PLANE_PARALLEL_EPSILON {
            // Parallel to the plane: degenerate, not an error
            return None;
        }

        let t = (self.position - ray.origin).dot(self.normal) / denom;
        if t >= 0.0 {
            Some(t)
        } else {
            None
        }
    }

    fn shade_material(&self) -> MaterialSample {
        // Matte floor: dull grey diffuse, no highlight
        MaterialSample {
            normal: self.normal,
            diffuse: Color::new(0.35, 0.35, 0.35),
            specular: self.color,
            shininess: 0,
        }
    }
}

/// A sphere.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    color: Color,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, color: Color) -> Self {
        Self {
            center,
            radius,
            color,
        }
    }

    fn intersect(&self, ray: &Ray) -> Option<f32> {
        let l = self.center - ray.origin;
        let tca = l.dot(ray.direction);
        if tca < 0.0 {
            // Sphere is entirely behind the ray origin
            return None;
        }

        let s2 = l.dot(l) - tca * tca;
        if s2.sqrt() > self.radius {
            return None;
        }

        let thc = (self.radius * self.radius - s2).sqrt();
        // Near root only; the far root is never considered. The near root
        // can be negative when the origin is inside the sphere - callers
        // are expected to keep the camera outside every sphere.
        Some(tca - thc)
    }

    fn shade_material(&self, hit_point: Vec3) -> MaterialSample {
        // Glossy surface: own color diffuse, light-grey highlight
        MaterialSample {
            normal: hit_point - self.center,
            diffuse: self.color,
            specular: Color::new(0.65, 0.65, 0.76),
            shininess: 128,
        }
    }
}

/// A scene primitive.
///
/// Closed set of shape variants dispatched by pattern matching.
#[derive(Debug, Clone, Copy)]
pub enum Shape {
    Plane(Plane),
    Sphere(Sphere),
}

impl Shape {
    /// Test the ray against this shape.
    ///
    /// Returns the ray parameter `t` of the hit point, or `None` on a miss.
    /// The ray direction must be unit length.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        match self {
            Shape::Plane(plane) => plane.intersect(ray),
            Shape::Sphere(sphere) => sphere.intersect(ray),
        }
    }

    /// Sample the surface material at a hit point on this shape.
    pub fn shade_material(&self, hit_point: Vec3) -> MaterialSample {
        match self {
            Shape::Plane(plane) => plane.shade_material(),
            Shape::Sphere(sphere) => sphere.shade_material(hit_point),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_hit_through_center() {
        let center = Vec3::new(0.0, 0.0, -10.0);
        let sphere = Shape::Sphere(Sphere::new(center, 2.0, Color::ONE));

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let t = sphere.intersect(&ray).expect("ray through center must hit");

        // Hit point lies on the sphere surface
        let hit_point = ray.at(t);
        assert!((hit_point.distance(center) - 2.0).abs() < 1e-4);
        assert!((t - 8.0).abs() < 1e-4);
    }

    #[test]
    fn test_sphere_behind_ray_misses() {
        // tca < 0: sphere entirely behind the origin, radius is irrelevant
        for radius in [0.5, 5.0, 50.0] {
            let sphere = Shape::Sphere(Sphere::new(
                Vec3::new(0.0, 0.0, 10.0),
                radius,
                Color::ONE,
            ));
            let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
            assert!(sphere.intersect(&ray).is_none());
        }
    }

    #[test]
    fn test_sphere_grazing_miss() {
        let sphere = Shape::Sphere(Sphere::new(Vec3::new(0.0, 3.0, -10.0), 2.0, Color::ONE));
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_plane_hit_from_above() {
        let plane = Shape::Plane(Plane::new(
            Vec3::new(0.0, -5.0, 0.0),
            Vec3::Y,
            Color::splat(0.2),
        ));

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, -1.0, 0.0));
        let t = plane.intersect(&ray).expect("downward ray must hit floor");
        assert!((t - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_plane_parallel_ray_misses() {
        let plane = Shape::Plane(Plane::new(
            Vec3::new(0.0, -5.0, 0.0),
            Vec3::Y,
            Color::splat(0.2),
        ));

        // Direction exactly perpendicular to the normal (dot == 0)
        let ray = Ray::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0));
        assert!(plane.intersect(&ray).is_none());
    }

    #[test]
    fn test_plane_behind_ray_misses() {
        let plane = Shape::Plane(Plane::new(
            Vec3::new(0.0, -5.0, 0.0),
            Vec3::Y,
            Color::splat(0.2),
        ));

        // Looking up, away from the floor
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert!(plane.intersect(&ray).is_none());
    }

    #[test]
    fn test_plane_material() {
        let plane = Shape::Plane(Plane::new(
            Vec3::new(0.0, -5.0, 0.0),
            Vec3::Y,
            Color::new(0.2, 0.2, 0.2),
        ));

        let sample = plane.shade_material(Vec3::new(1.0, -5.0, -3.0));
        assert_eq!(sample.normal, Vec3::Y);
        assert_eq!(sample.diffuse, Color::new(0.35, 0.35, 0.35));
        assert_eq!(sample.specular, Color::new(0.2, 0.2, 0.2));
        assert_eq!(sample.shininess, 0);
    }

    #[test]
    fn test_sphere_material_normal_points_outward() {
        let center = Vec3::new(1.0, 0.0, -20.0);
        let sphere = Shape::Sphere(Sphere::new(center, 3.0, Color::new(0.35, 1.0, 0.35)));

        let hit_point = center + Vec3::new(0.0, 3.0, 0.0);
        let sample = sphere.shade_material(hit_point);

        // Unnormalized hit_point - center
        assert_eq!(sample.normal, Vec3::new(0.0, 3.0, 0.0));
        assert_eq!(sample.diffuse, Color::new(0.35, 1.0, 0.35));
        assert_eq!(sample.shininess, 128);
    }
}
