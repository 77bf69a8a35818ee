// src/math/vec2d.rs

use crate::types::Vec2d;

impl Vec2d {
  /// Magnitude of the vector.
  #[inline]
  #[must_use]
  pub fn mag(&self) -> f64 {
    (self.x * self.x + self.y * self.y).sqrt()
  }

  /// Intersection of the line through `p0`/`p1` with the line through
  /// `p2`/`p3`. The lines must not be parallel.
  ///
  /// The line parameter is kept in single precision so that intersection
  /// points land where existing H3 consumers expect them.
  #[must_use]
  pub(crate) fn intersect(p0: &Vec2d, p1: &Vec2d, p2: &Vec2d, p3: &Vec2d) -> Vec2d {
    let s1 = Vec2d {
      x: p1.x - p0.x,
      y: p1.y - p0.y,
    };
    let s2 = Vec2d {
      x: p3.x - p2.x,
      y: p3.y - p2.y,
    };

    let t = ((s2.x * (p0.y - p2.y) - s2.y * (p0.x - p2.x)) / (-s2.x * s1.y + s1.x * s2.y)) as f32;
    let t = f64::from(t);

    Vec2d {
      x: p0.x + t * s1.x,
      y: p0.y + t * s1.y,
    }
  }

  /// Component-wise equality within single precision epsilon.
  #[inline]
  #[must_use]
  pub(crate) fn almost_equals(&self, other: &Vec2d) -> bool {
    let eps = f64::from(f32::EPSILON);
    (self.x - other.x).abs() < eps && (self.y - other.y).abs() < eps
  }
}
