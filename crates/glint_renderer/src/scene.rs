//! Scene description and nearest-hit resolution.

use glint_math::{Ray, Vec3};

use crate::shape::{Plane, Shape, Sphere};
use crate::Color;

/// Record of the nearest ray-scene intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Ray parameter of the hit point
    pub t: f32,
    /// Index of the hit shape in the scene
    pub shape: usize,
}

/// An ordered, immutable collection of shapes.
pub struct Scene {
    shapes: Vec<Shape>,
}

impl Scene {
    /// Create a scene from an ordered list of shapes.
    pub fn new(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }

    /// The fixed reference scene: a grey floor plane and four colored
    /// spheres of decreasing size.
    pub fn reference() -> Self {
        Self::new(vec![
            // Floor - dark grey
            Shape::Plane(Plane::new(
                Vec3::new(0.0, -5.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
                Color::new(0.2, 0.2, 0.2),
            )),
            // Spheres - red, green, blue, yellow
            Shape::Sphere(Sphere::new(
                Vec3::new(-10.0, 0.0, -20.0),
                4.0,
                Color::new(1.0, 0.35, 0.35),
            )),
            Shape::Sphere(Sphere::new(
                Vec3::new(1.0, 0.0, -20.0),
                3.0,
                Color::new(0.35, 1.0, 0.35),
            )),
            Shape::Sphere(Sphere::new(
                Vec3::new(9.0, 0.0, -20.0),
                2.0,
                Color::new(0.35, 0.35, 1.0),
            )),
            Shape::Sphere(Sphere::new(
                Vec3::new(14.0, 0.0, -20.0),
                1.0,
                Color::new(1.0, 1.0, 0.35),
            )),
        ])
    }

    /// Get the shapes in iteration order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Get the number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Find the nearest shape hit by the ray.
    ///
    /// Scans every shape in order and keeps the smallest `t`. On an exact
    /// tie the earlier shape wins. Returns `None` if nothing is hit.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<Hit> {
        let mut nearest: Option<Hit> = None;
        let mut closest_so_far = f32::INFINITY;

        for (index, shape) in self.shapes.iter().enumerate() {
            if let Some(t) = shape.intersect(ray) {
                // Strict comparison keeps the earlier shape on equal t
                if t < closest_so_far {
                    closest_so_far = t;
                    nearest = Some(Hit { t, shape: index });
                }
            }
        }

        nearest
    }
}
