// src/math/vec3d.rs

use crate::types::{LatLng, Vec3d};

#[inline]
fn square(x: f64) -> f64 {
  x * x
}

impl Vec3d {
  /// Point on the unit sphere for a latitude/longitude in radians.
  #[inline]
  #[must_use]
  pub fn from_geo(geo: &LatLng) -> Vec3d {
    let r = geo.lat.cos();

    Vec3d {
      x: geo.lng.cos() * r,
      y: geo.lng.sin() * r,
      z: geo.lat.sin(),
    }
  }

  /// Square of the euclidean distance to `other`.
  #[inline]
  #[must_use]
  pub fn square_dist(&self, other: &Vec3d) -> f64 {
    square(self.x - other.x) + square(self.y - other.y) + square(self.z - other.z)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::{EPSILON_RAD, M_PI_2};

  #[test]
  fn test_square_dist() {
    let origin = Vec3d::default();
    let cases = [((1.0, 0.0, 0.0), 1.0), ((0.0, 1.0, 1.0), 2.0), ((1.0, 1.0, 1.0), 3.0), ((1.0, 1.0, 2.0), 6.0)];
    for ((x, y, z), expected) in cases {
      let v = Vec3d { x, y, z };
      assert!((origin.square_dist(&v) - expected).abs() < f64::EPSILON, "distance to {v:?}");
    }
    assert!(origin.square_dist(&origin).abs() < f64::EPSILON, "distance to self is 0");
  }

  #[test]
  fn test_from_geo() {
    let origin = Vec3d::default();

    let p1 = Vec3d::from_geo(&LatLng { lat: 0.0, lng: 0.0 });
    assert!((origin.square_dist(&p1) - 1.0).abs() < EPSILON_RAD, "(0,0) is on the unit sphere");
    assert!((p1.x - 1.0).abs() < f64::EPSILON);

    let p2 = Vec3d::from_geo(&LatLng { lat: M_PI_2, lng: 0.0 });
    assert!((origin.square_dist(&p2) - 1.0).abs() < EPSILON_RAD, "north pole is on the unit sphere");
    assert!((p2.z - 1.0).abs() < f64::EPSILON);

    assert!((p1.square_dist(&p2) - 2.0).abs() < EPSILON_RAD, "equator to pole");
  }
}
