// src/indexing/from_h3.rs

use crate::constants::{NUM_HEX_VERTS, NUM_PENT_VERTS};
use crate::h3_index::{get_resolution, h3_to_face_ijk, is_pentagon, is_valid_cell};
use crate::types::{CellBoundary, H3Error, H3Index, LatLng};

/// Finds the center point of the given cell.
///
/// # Errors
/// `CellInvalid` if `cell` is not a valid cell index.
pub fn cell_to_lat_lng(cell: H3Index) -> Result<LatLng, H3Error> {
  if !is_valid_cell(cell) {
    return Err(H3Error::CellInvalid);
  }
  let fijk = h3_to_face_ijk(cell)?;
  Ok(fijk.to_geo(get_resolution(cell)))
}

/// Finds the boundary of the given cell, counter-clockwise. Class III cells
/// carry extra vertices where their edges cross icosahedron edges.
///
/// # Errors
/// `CellInvalid` if `cell` is not a valid cell index.
pub fn cell_to_boundary(cell: H3Index) -> Result<CellBoundary, H3Error> {
  if !is_valid_cell(cell) {
    return Err(H3Error::CellInvalid);
  }
  let fijk = h3_to_face_ijk(cell)?;
  let res = get_resolution(cell);
  Ok(if is_pentagon(cell) {
    fijk.pent_to_cell_boundary(res, 0, NUM_PENT_VERTS)
  } else {
    fijk.to_cell_boundary(res, 0, NUM_HEX_VERTS)
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::{EPSILON_RAD, H3_DIRECTEDEDGE_MODE, MAX_CELL_BNDRY_VERTS, M_PI_2};
  use crate::h3_index::{get_pentagons, set_mode};
  use crate::indexing::lat_lng_to_cell;
  use crate::latlng::geo_almost_equal_threshold;
  use crate::types::H3_NULL;

  #[test]
  fn test_invalid_input() {
    assert_eq!(cell_to_lat_lng(H3_NULL), Err(H3Error::CellInvalid));
    assert_eq!(cell_to_boundary(H3_NULL), Err(H3Error::CellInvalid));

    let mut edge = H3Index(0x85283473fffffff);
    set_mode(&mut edge, H3_DIRECTEDEDGE_MODE);
    assert_eq!(cell_to_lat_lng(edge), Err(H3Error::CellInvalid));
    assert_eq!(cell_to_boundary(edge), Err(H3Error::CellInvalid));
  }

  #[test]
  fn test_known_center_and_boundary() {
    let cell = H3Index(0x85283473fffffff);
    let center = cell_to_lat_lng(cell).unwrap();
    assert!(geo_almost_equal_threshold(
      &center,
      &LatLng::from_degrees(37.345_793_375_368, -121.976_375_972_551),
      1e-9
    ));

    let expected = [
      (37.271_355_867, -121.915_080_327),
      (37.353_926_451, -121.862_223_289),
      (37.428_341_186, -121.923_549_996),
      (37.420_128_678, -122.037_734_964),
      (37.337_556_084, -122.090_428_929),
      (37.263_197_975, -122.029_101_309),
    ];
    let boundary = cell_to_boundary(cell).unwrap();
    assert_eq!(boundary.num_verts, expected.len());
    for (vert, &(lat, lng)) in boundary.as_slice().iter().zip(&expected) {
      assert!(geo_almost_equal_threshold(vert, &LatLng::from_degrees(lat, lng), 1e-9), "{vert:?}");
    }
  }

  #[test]
  fn test_pentagon_boundary_vertex_counts() {
    for res in 0..=4 {
      for pentagon in get_pentagons(res).unwrap() {
        let boundary = cell_to_boundary(pentagon).unwrap();
        // Class III pentagons gain a crossing vertex on every edge
        let expected = if res % 2 == 1 { 10 } else { 5 };
        assert_eq!(boundary.num_verts, expected, "{pentagon:x}");
      }
    }
  }

  #[test]
  fn test_center_round_trip_and_boundary_sanity() {
    let geo = LatLng::from_degrees(37.779, -122.419);
    for res in 0..=10 {
      let cell = lat_lng_to_cell(&geo, res).unwrap();
      let center = cell_to_lat_lng(cell).unwrap();
      assert_eq!(lat_lng_to_cell(&center, res), Ok(cell), "center re-indexes at res {res}");

      let boundary = cell_to_boundary(cell).unwrap();
      assert!((NUM_HEX_VERTS..=MAX_CELL_BNDRY_VERTS).contains(&boundary.num_verts));
      for vert in boundary.as_slice() {
        assert!(vert.lat.is_finite() && vert.lng.is_finite(), "{cell:x} res {res}");
        assert!(vert.lat.abs() <= M_PI_2 + EPSILON_RAD, "{cell:x} res {res}");
      }
    }
  }
}
