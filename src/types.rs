//! Value types shared by cells and vertexes.

use crate::constants::MAX_CELL_BNDRY_VERTS;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};

/// An H3 cell index or vertex index. Both share one 64-bit layout and are
/// told apart by their mode bits; raw values are totally ordered.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct H3Index(pub u64);

/// Invalid H3 index, used for absent vertexes and failed lookups.
pub const H3_NULL: H3Index = H3Index(0);

impl std::fmt::LowerHex for H3Index {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    std::fmt::LowerHex::fmt(&self.0, f)
  }
}

/// A point on the sphere, in radians.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LatLng {
  /// Latitude in radians.
  pub lat: f64,
  /// Longitude in radians.
  pub lng: f64,
}

/// The boundary of an H3 cell, vertices in counter-clockwise order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CellBoundary {
  /// Count of meaningful entries in `verts`.
  pub num_verts: usize,
  /// Vertices; entries past `num_verts` are not significant.
  pub verts: [LatLng; MAX_CELL_BNDRY_VERTS],
}

impl Default for CellBoundary {
  fn default() -> Self {
    Self {
      num_verts: 0,
      verts: [LatLng::default(); MAX_CELL_BNDRY_VERTS],
    }
  }
}

impl CellBoundary {
  /// The significant vertices.
  #[must_use]
  pub fn as_slice(&self) -> &[LatLng] {
    &self.verts[..self.num_verts]
  }

  pub(crate) fn push(&mut self, vert: LatLng) {
    if self.num_verts < MAX_CELL_BNDRY_VERTS {
      self.verts[self.num_verts] = vert;
      self.num_verts += 1;
    }
  }
}

/// Error codes, numbered like the H3 C API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[repr(u32)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum H3Error {
  /// Generic failure, such as an owner that cannot be resolved.
  #[error("operation failed")]
  Failed = 1,
  /// An argument, such as a vertex number, is out of range.
  #[error("argument out of range")]
  Domain = 2,
  /// Non-finite or out-of-range latitude or longitude.
  #[error("latitude or longitude out of range")]
  LatLngDomain = 3,
  /// Resolution outside 0..=15.
  #[error("resolution out of range")]
  ResDomain = 4,
  /// The index is not a valid cell.
  #[error("invalid cell index")]
  CellInvalid = 5,
  /// The index is not a valid vertex.
  #[error("invalid vertex index")]
  VertexInvalid = 8,
  /// Traversal ran into the deleted K subsequence of a pentagon.
  #[error("pentagon distortion encountered")]
  Pentagon = 9,
  /// Cell arguments had incompatible resolutions.
  #[error("resolution mismatch")]
  ResMismatch = 12,
}

/// Hexagon coordinates on three axes 120 degrees apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoordIJK {
  /// I component.
  pub i: i32,
  /// J component.
  pub j: i32,
  /// K component.
  pub k: i32,
}

/// IJK coordinates on one icosahedron face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FaceIJK {
  /// Face, 0 to 19.
  pub face: i32,
  /// Position on the face.
  pub coord: CoordIJK,
}

/// Point on a face plane.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec2d {
  /// X component.
  pub x: f64,
  /// Y component.
  pub y: f64,
}

/// Point in 3D space, usually on the unit sphere.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec3d {
  /// X component.
  pub x: f64,
  /// Y component.
  pub y: f64,
  /// Z component.
  pub z: f64,
}

/// One index digit: a unit step on the IJK+ axes (0-6), or 7 for none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum Direction {
  /// No step.
  #[default]
  Center = 0,
  /// Along +k.
  KAxes = 1,
  /// Along +j.
  JAxes = 2,
  /// Along +j and +k.
  JkAxes = 3,
  /// Along +i.
  IAxes = 4,
  /// Along +i and +k.
  IkAxes = 5,
  /// Along +i and +j.
  IjAxes = 6,
  /// Unused digit, or no direction.
  InvalidDigit = 7,
}

impl Direction {
  /// The six axial directions, in digit order.
  pub const AXES: [Direction; 6] = [
    Direction::KAxes,
    Direction::JAxes,
    Direction::JkAxes,
    Direction::IAxes,
    Direction::IkAxes,
    Direction::IjAxes,
  ];

  /// Maps the low three bits of `bits` to a digit. Every 3-bit pattern is a
  /// `Direction`, so this cannot fail.
  #[inline]
  #[must_use]
  pub(crate) const fn from_bits(bits: u64) -> Direction {
    match bits & 0b111 {
      0 => Direction::Center,
      1 => Direction::KAxes,
      2 => Direction::JAxes,
      3 => Direction::JkAxes,
      4 => Direction::IAxes,
      5 => Direction::IkAxes,
      6 => Direction::IjAxes,
      _ => Direction::InvalidDigit,
    }
  }

  /// True for the six axial directions.
  #[inline]
  #[must_use]
  pub const fn is_axial(self) -> bool {
    !matches!(self, Direction::Center | Direction::InvalidDigit)
  }
}

impl TryFrom<u8> for Direction {
  type Error = H3Error;

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    if value > 7 {
      return Err(H3Error::Domain);
    }
    Ok(Direction::from_bits(u64::from(value)))
  }
}
