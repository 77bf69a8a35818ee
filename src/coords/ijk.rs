// src/coords/ijk.rs

use crate::constants::{M_ONESEVENTH, M_RSIN60, M_SQRT3_2};
use crate::types::{CoordIJK, Direction, Vec2d};
use std::ops::{Add, Sub};

/// IJK unit vectors corresponding to the 7 H3 digits (0-6).
#[rustfmt::skip]
pub(crate) const UNIT_VECS: [CoordIJK; 7] = [
  CoordIJK { i: 0, j: 0, k: 0 }, // CENTER
  CoordIJK { i: 0, j: 0, k: 1 }, // K
  CoordIJK { i: 0, j: 1, k: 0 }, // J
  CoordIJK { i: 0, j: 1, k: 1 }, // JK
  CoordIJK { i: 1, j: 0, k: 0 }, // I
  CoordIJK { i: 1, j: 0, k: 1 }, // IK
  CoordIJK { i: 1, j: 1, k: 0 }, // IJ
];

impl Add for CoordIJK {
  type Output = CoordIJK;

  #[inline]
  fn add(self, rhs: CoordIJK) -> CoordIJK {
    CoordIJK {
      i: self.i.saturating_add(rhs.i),
      j: self.j.saturating_add(rhs.j),
      k: self.k.saturating_add(rhs.k),
    }
  }
}

impl Sub for CoordIJK {
  type Output = CoordIJK;

  #[inline]
  fn sub(self, rhs: CoordIJK) -> CoordIJK {
    CoordIJK {
      i: self.i.saturating_sub(rhs.i),
      j: self.j.saturating_sub(rhs.j),
      k: self.k.saturating_sub(rhs.k),
    }
  }
}

/// Rounds half away from zero, like C `lround`.
#[inline]
fn lround(val: f64) -> i32 {
  val.round() as i32
}

impl CoordIJK {
  /// Builds a coordinate from its components.
  #[inline]
  #[must_use]
  pub const fn new(i: i32, j: i32, k: i32) -> Self {
    Self { i, j, k }
  }

  /// Uniformly scale by a scalar, in place.
  #[inline]
  pub(crate) fn scale(&mut self, factor: i32) {
    self.i = self.i.saturating_mul(factor);
    self.j = self.j.saturating_mul(factor);
    self.k = self.k.saturating_mul(factor);
  }

  /// Normalizes in place so that all components are non-negative and at
  /// least one of them is zero.
  pub(crate) fn normalize(&mut self) {
    if self.i < 0 {
      self.j = self.j.saturating_sub(self.i);
      self.k = self.k.saturating_sub(self.i);
      self.i = 0;
    }
    if self.j < 0 {
      self.i = self.i.saturating_sub(self.j);
      self.k = self.k.saturating_sub(self.j);
      self.j = 0;
    }
    if self.k < 0 {
      self.i = self.i.saturating_sub(self.k);
      self.j = self.j.saturating_sub(self.k);
      self.k = 0;
    }

    let min = self.i.min(self.j).min(self.k);
    if min > 0 {
      self.i -= min;
      self.j -= min;
      self.k -= min;
    }
  }

  /// Normalized copy.
  #[inline]
  #[must_use]
  pub(crate) fn normalized(mut self) -> Self {
    self.normalize();
    self
  }

  /// The digit matching this unit vector, or `InvalidDigit` when it is not
  /// a unit vector.
  #[must_use]
  pub(crate) fn to_digit(self) -> Direction {
    let c = self.normalized();
    UNIT_VECS
      .iter()
      .position(|unit| *unit == c)
      .map_or(Direction::InvalidDigit, |digit| Direction::from_bits(digit as u64))
  }

  /// Moves one hex in the `digit` direction, in place. Center and invalid
  /// digits leave the coordinate untouched.
  #[inline]
  pub(crate) fn step(&mut self, digit: Direction) {
    if digit.is_axial() {
      *self = (*self + UNIT_VECS[digit as usize]).normalized();
    }
  }

  /// Determine the containing hex in IJK+ coordinates for a 2D cartesian
  /// coordinate vector (from DGGRID).
  #[must_use]
  pub(crate) fn from_hex2d(v: &Vec2d) -> Self {
    let mut h = CoordIJK::default();

    // quantize into the ij system and then normalize
    let a1 = v.x.abs();
    let a2 = v.y.abs();

    // first do a reverse conversion
    let x2 = a2 * M_RSIN60;
    let x1 = a1 + x2 / 2.0;

    // check if we have the center of a hex
    let m1 = x1 as i32;
    let m2 = x2 as i32;

    // otherwise round correctly
    let r1 = x1 - f64::from(m1);
    let r2 = x2 - f64::from(m2);

    if r1 < 0.5 {
      if r1 < 1.0 / 3.0 {
        h.i = m1;
        h.j = if r2 < (1.0 + r1) / 2.0 { m2 } else { m2 + 1 };
      } else {
        h.j = if r2 < (1.0 - r1) { m2 } else { m2 + 1 };
        h.i = if (1.0 - r1) <= r2 && r2 < (2.0 * r1) { m1 + 1 } else { m1 };
      }
    } else if r1 < 2.0 / 3.0 {
      h.j = if r2 < (1.0 - r1) { m2 } else { m2 + 1 };
      h.i = if (2.0 * r1 - 1.0) < r2 && r2 < (1.0 - r1) { m1 } else { m1 + 1 };
    } else {
      h.i = m1 + 1;
      h.j = if r2 < (r1 / 2.0) { m2 } else { m2 + 1 };
    }

    // now fold across the axes if necessary
    if v.x < 0.0 {
      if h.j % 2 == 0 {
        let axisi = i64::from(h.j) / 2;
        let diff = i64::from(h.i) - axisi;
        h.i = (i64::from(h.i) - 2 * diff) as i32;
      } else {
        let axisi = (i64::from(h.j) + 1) / 2;
        let diff = i64::from(h.i) - axisi;
        h.i = (i64::from(h.i) - (2 * diff + 1)) as i32;
      }
    }

    if v.y < 0.0 {
      h.i -= (2 * h.j + 1) / 2;
      h.j = -h.j;
    }

    h.normalized()
  }

  /// Center point of the hex in 2D cartesian coordinates.
  #[must_use]
  pub(crate) fn to_hex2d(self) -> Vec2d {
    let i = self.i - self.k;
    let j = self.j - self.k;

    Vec2d {
      x: f64::from(i) - 0.5 * f64::from(j),
      y: f64::from(j) * M_SQRT3_2,
    }
  }

  /// Re-expresses the coordinate through the images of the three unit axes,
  /// then normalizes.
  #[inline]
  fn transform(&mut self, i_vec: CoordIJK, j_vec: CoordIJK, k_vec: CoordIJK) {
    let mut i_vec = i_vec;
    let mut j_vec = j_vec;
    let mut k_vec = k_vec;
    i_vec.scale(self.i);
    j_vec.scale(self.j);
    k_vec.scale(self.k);
    *self = (i_vec + j_vec + k_vec).normalized();
  }

  /// Replaces the coordinate with its indexing parent in a counter-clockwise
  /// aperture 7 grid.
  pub(crate) fn up_ap7(&mut self) {
    let i = f64::from(self.i - self.k);
    let j = f64::from(self.j - self.k);

    self.i = lround((3.0 * i - j) * M_ONESEVENTH);
    self.j = lround((i + 2.0 * j) * M_ONESEVENTH);
    self.k = 0;
    self.normalize();
  }

  /// Replaces the coordinate with its indexing parent in a clockwise
  /// aperture 7 grid.
  pub(crate) fn up_ap7r(&mut self) {
    let i = f64::from(self.i - self.k);
    let j = f64::from(self.j - self.k);

    self.i = lround((2.0 * i + j) * M_ONESEVENTH);
    self.j = lround((3.0 * j - i) * M_ONESEVENTH);
    self.k = 0;
    self.normalize();
  }

  /// Center of the cell in the next finer counter-clockwise aperture 7 grid.
  pub(crate) fn down_ap7(&mut self) {
    self.transform(CoordIJK::new(3, 0, 1), CoordIJK::new(1, 3, 0), CoordIJK::new(0, 1, 3));
  }

  /// Center of the cell in the next finer clockwise aperture 7 grid.
  pub(crate) fn down_ap7r(&mut self) {
    self.transform(CoordIJK::new(3, 1, 0), CoordIJK::new(0, 3, 1), CoordIJK::new(1, 0, 3));
  }

  /// Center of the cell in the next finer counter-clockwise aperture 3 grid.
  pub(crate) fn down_ap3(&mut self) {
    self.transform(CoordIJK::new(2, 0, 1), CoordIJK::new(1, 2, 0), CoordIJK::new(0, 1, 2));
  }

  /// Center of the cell in the next finer clockwise aperture 3 grid.
  pub(crate) fn down_ap3r(&mut self) {
    self.transform(CoordIJK::new(2, 1, 0), CoordIJK::new(0, 2, 1), CoordIJK::new(1, 0, 2));
  }

  /// Rotates 60 degrees counter-clockwise, in place.
  pub(crate) fn rotate60_ccw(&mut self) {
    self.transform(CoordIJK::new(1, 1, 0), CoordIJK::new(0, 1, 1), CoordIJK::new(1, 0, 1));
  }

  /// Rotates 60 degrees clockwise, in place.
  pub(crate) fn rotate60_cw(&mut self) {
    self.transform(CoordIJK::new(1, 0, 1), CoordIJK::new(1, 1, 0), CoordIJK::new(0, 1, 1));
  }
}

/// Rotates an H3 digit 60 degrees counter-clockwise.
#[inline]
#[must_use]
pub(crate) fn rotate60_ccw(digit: Direction) -> Direction {
  match digit {
    Direction::KAxes => Direction::IkAxes,
    Direction::IkAxes => Direction::IAxes,
    Direction::IAxes => Direction::IjAxes,
    Direction::IjAxes => Direction::JAxes,
    Direction::JAxes => Direction::JkAxes,
    Direction::JkAxes => Direction::KAxes,
    other => other,
  }
}

/// Rotates an H3 digit 60 degrees clockwise.
#[inline]
#[must_use]
pub(crate) fn rotate60_cw(digit: Direction) -> Direction {
  match digit {
    Direction::KAxes => Direction::JkAxes,
    Direction::JkAxes => Direction::JAxes,
    Direction::JAxes => Direction::IjAxes,
    Direction::IjAxes => Direction::IAxes,
    Direction::IAxes => Direction::IkAxes,
    Direction::IkAxes => Direction::KAxes,
    other => other,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_normalize() {
    let mut c = CoordIJK::new(2, 3, 4);
    c.normalize();
    assert_eq!(c, CoordIJK::new(0, 1, 2));

    let mut c = CoordIJK::new(-1, 0, 0);
    c.normalize();
    assert_eq!(c, CoordIJK::new(0, 1, 1), "negative i folds onto j and k");
  }

  #[test]
  fn test_unit_vectors_to_digit() {
    for (digit, unit) in UNIT_VECS.iter().enumerate() {
      assert_eq!(unit.to_digit() as usize, digit);
    }
    assert_eq!(CoordIJK::new(2, 0, 0).to_digit(), Direction::InvalidDigit);
    assert_eq!(CoordIJK::new(1, 1, 1).to_digit(), Direction::Center);
  }

  #[test]
  fn test_step() {
    let mut c = CoordIJK::default();
    c.step(Direction::Center);
    assert_eq!(c, CoordIJK::default(), "center step is a no-op");
    c.step(Direction::InvalidDigit);
    assert_eq!(c, CoordIJK::default(), "invalid step is a no-op");
    c.step(Direction::IAxes);
    assert_eq!(c, UNIT_VECS[Direction::IAxes as usize]);
    c.step(Direction::KAxes);
    assert_eq!(c, CoordIJK::new(1, 0, 1));
  }

  #[test]
  fn test_hex2d_round_trip() {
    let origin = CoordIJK::default();
    assert_eq!(CoordIJK::from_hex2d(&origin.to_hex2d()), origin);
    for unit in &UNIT_VECS {
      assert_eq!(CoordIJK::from_hex2d(&unit.to_hex2d()), *unit, "unit vector {unit:?}");
    }
    let far = CoordIJK::new(5, 0, 3);
    assert_eq!(CoordIJK::from_hex2d(&far.to_hex2d()), far);
  }

  #[test]
  fn test_hex2d_near_origin() {
    for (x, y) in [(0.1, 0.1), (-0.1, -0.1), (0.1, -0.1), (-0.1, 0.1)] {
      assert_eq!(CoordIJK::from_hex2d(&Vec2d { x, y }), CoordIJK::default());
    }
    let j_axis = Vec2d { x: -0.5, y: M_SQRT3_2 };
    assert_eq!(CoordIJK::from_hex2d(&j_axis), CoordIJK::new(0, 1, 0));
  }

  #[test]
  fn test_aperture7_round_trip() {
    for unit in &UNIT_VECS {
      let mut c = *unit;
      c.down_ap7();
      c.up_ap7();
      assert_eq!(c, *unit, "ccw aperture 7 round trip for {unit:?}");

      let mut c = *unit;
      c.down_ap7r();
      c.up_ap7r();
      assert_eq!(c, *unit, "cw aperture 7 round trip for {unit:?}");
    }
  }

  #[test]
  fn test_down_ap3() {
    let mut c = UNIT_VECS[Direction::IAxes as usize];
    c.down_ap3();
    assert_eq!(c, CoordIJK::new(2, 0, 1));

    let mut c = UNIT_VECS[Direction::IAxes as usize];
    c.down_ap3r();
    assert_eq!(c, CoordIJK::new(2, 1, 0));
  }

  #[test]
  fn test_rotations_agree_with_digits() {
    for digit in Direction::AXES {
      let mut c = UNIT_VECS[digit as usize];
      c.rotate60_ccw();
      assert_eq!(c.to_digit(), rotate60_ccw(digit));

      let mut c = UNIT_VECS[digit as usize];
      c.rotate60_cw();
      assert_eq!(c.to_digit(), rotate60_cw(digit));
      assert_eq!(rotate60_cw(rotate60_ccw(digit)), digit);
    }
    assert_eq!(rotate60_ccw(Direction::Center), Direction::Center);
  }
}
