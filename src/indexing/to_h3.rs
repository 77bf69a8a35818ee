// src/indexing/to_h3.rs

use crate::constants::{EPSILON_RAD, MAX_H3_RES, M_PI_2};
use crate::h3_index::face_ijk_to_h3;
use crate::types::{FaceIJK, H3Error, H3Index, LatLng, H3_NULL};

/// Finds the cell containing the given point at the specified resolution.
///
/// # Arguments
/// * `geo` - The point, in radians.
/// * `res` - The resolution (0-15).
///
/// # Errors
/// `ResDomain` for a resolution out of range, `LatLngDomain` for a
/// non-finite coordinate or a latitude past the poles.
pub fn lat_lng_to_cell(geo: &LatLng, res: i32) -> Result<H3Index, H3Error> {
  if !(0..=MAX_H3_RES).contains(&res) {
    return Err(H3Error::ResDomain);
  }
  // longitude wraps on its own; latitude must stay within the poles
  if !geo.lat.is_finite() || !geo.lng.is_finite() || geo.lat.abs() > M_PI_2 + EPSILON_RAD {
    return Err(H3Error::LatLngDomain);
  }

  let fijk = FaceIJK::from_geo(geo, res);
  match face_ijk_to_h3(&fijk, res) {
    H3_NULL => {
      log::debug!("no cell for {geo:?} at res {res}: {fijk:?} is off its face");
      Err(H3Error::Failed)
    }
    h => Ok(h),
  }
}
