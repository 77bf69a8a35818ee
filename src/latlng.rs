// src/latlng.rs

use crate::constants::{EPSILON, EPSILON_RAD, M_180_PI, M_2PI, M_PI, M_PI_180, M_PI_2};
use crate::types::LatLng;

/// Normalizes radians to a value between `0.0` and `2 * PI`.
#[inline]
#[must_use]
pub(crate) fn pos_angle_rads(rads: f64) -> f64 {
  let mut tmp = if rads < 0.0 { rads + M_2PI } else { rads };
  if rads >= M_2PI {
    tmp -= M_2PI;
  }
  tmp
}

/// Determines if the components of two spherical coordinates are within some
/// threshold distance of each other.
#[inline]
#[must_use]
pub fn geo_almost_equal_threshold(p1: &LatLng, p2: &LatLng, threshold: f64) -> bool {
  (p1.lat - p2.lat).abs() < threshold && (p1.lng - p2.lng).abs() < threshold
}

/// Determines if the components of two spherical coordinates are within
/// roughly 0.1mm of each other.
#[inline]
#[must_use]
pub fn geo_almost_equal(p1: &LatLng, p2: &LatLng) -> bool {
  geo_almost_equal_threshold(p1, p2, EPSILON_RAD)
}

impl LatLng {
  /// Coordinates from decimal degrees.
  #[inline]
  #[must_use]
  pub fn from_degrees(lat_degs: f64, lng_degs: f64) -> LatLng {
    LatLng {
      lat: degs_to_rads(lat_degs),
      lng: degs_to_rads(lng_degs),
    }
  }
}

/// Normalizes longitude into `[-PI, PI]`.
#[inline]
#[must_use]
pub(crate) fn constrain_lng(mut lng: f64) -> f64 {
  while lng > M_PI {
    lng -= M_2PI;
  }
  while lng < -M_PI {
    lng += M_2PI;
  }
  lng
}

/// Azimuth from `p1` to `p2` in radians.
#[must_use]
pub(crate) fn geo_azimuth_rads(p1: &LatLng, p2: &LatLng) -> f64 {
  let dlng = p2.lng - p1.lng;
  (p2.lat.cos() * dlng.sin()).atan2(p1.lat.cos() * p2.lat.sin() - p1.lat.sin() * p2.lat.cos() * dlng.cos())
}

/// Snaps a latitude within `EPSILON` of a pole onto it.
#[inline]
fn at_pole(lat: f64) -> Option<LatLng> {
  if (lat - M_PI_2).abs() < EPSILON {
    Some(LatLng { lat: M_PI_2, lng: 0.0 })
  } else if (lat + M_PI_2).abs() < EPSILON {
    Some(LatLng { lat: -M_PI_2, lng: 0.0 })
  } else {
    None
  }
}

/// Computes the point on the sphere a specified azimuth and distance from
/// another point.
///
/// # Arguments
/// * `p1` - The first spherical coordinates.
/// * `az` - The desired azimuth from `p1`.
/// * `distance` - The desired distance from `p1`, must be non-negative.
///
/// # Returns
/// The spherical coordinates at the desired azimuth and distance from `p1`.
#[must_use]
pub(crate) fn geo_az_distance_rads(p1: &LatLng, az: f64, distance: f64) -> LatLng {
  if distance < EPSILON {
    return *p1;
  }

  let az = pos_angle_rads(az);

  // due north or south
  if az < EPSILON || (az - M_PI).abs() < EPSILON {
    let lat = if az < EPSILON {
      p1.lat + distance
    } else {
      p1.lat - distance
    };
    return at_pole(lat).unwrap_or(LatLng {
      lat,
      lng: constrain_lng(p1.lng),
    });
  }

  let sinlat = (p1.lat.sin() * distance.cos() + p1.lat.cos() * distance.sin() * az.cos()).clamp(-1.0, 1.0);
  let lat = sinlat.asin();
  if let Some(pole) = at_pole(lat) {
    return pole;
  }

  let invcosp2lat = 1.0 / lat.cos();
  let sinlng = (az.sin() * distance.sin() * invcosp2lat).clamp(-1.0, 1.0);
  let coslng = ((distance.cos() - p1.lat.sin() * lat.sin()) / p1.lat.cos() * invcosp2lat).clamp(-1.0, 1.0);

  LatLng {
    lat,
    lng: constrain_lng(p1.lng + sinlng.atan2(coslng)),
  }
}

/// Converts degrees to radians.
#[inline]
#[must_use]
pub fn degs_to_rads(degrees: f64) -> f64 {
  degrees * M_PI_180
}

/// Converts radians to degrees.
#[inline]
#[must_use]
pub fn rads_to_degs(radians: f64) -> f64 {
  radians * M_180_PI
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::EPSILON_DEG;

  #[test]
  fn test_pos_angle_rads() {
    assert!((pos_angle_rads(0.0) - 0.0).abs() < f64::EPSILON);
    assert!((pos_angle_rads(M_PI) - M_PI).abs() < f64::EPSILON);
    assert!((pos_angle_rads(M_PI * 2.0) - 0.0).abs() < f64::EPSILON, "wraps");
    assert!((pos_angle_rads(M_PI * 2.5) - M_PI * 0.5).abs() < f64::EPSILON);
    assert!((pos_angle_rads(-M_PI_2) - M_PI * 1.5).abs() < f64::EPSILON);
    assert!((pos_angle_rads(-M_PI) - M_PI).abs() < f64::EPSILON);
  }

  #[test]
  fn test_geo_almost_equal_threshold() {
    let a = LatLng::from_degrees(15.0, 10.0);
    let mut b = a;
    assert!(geo_almost_equal_threshold(&a, &b, EPSILON_RAD / 2.0), "same point");

    b.lat = (15.0 + EPSILON_DEG * 2.0) * M_PI_180;
    b.lng = (10.0 + EPSILON_DEG * 2.0) * M_PI_180;
    assert!(geo_almost_equal_threshold(&a, &b, EPSILON_RAD * 3.0), "differences under threshold");

    b.lng = 10.0 * M_PI_180;
    assert!(!geo_almost_equal_threshold(&a, &b, EPSILON_RAD), "lat over threshold");
  }

  #[test]
  fn test_constrain_lng() {
    assert!((constrain_lng(0.0)).abs() < f64::EPSILON);
    assert!((constrain_lng(M_PI) - M_PI).abs() < f64::EPSILON);
    assert!((constrain_lng(M_2PI)).abs() < f64::EPSILON);
    assert!((constrain_lng(3.0 * M_PI) - M_PI).abs() < f64::EPSILON);
    assert!((constrain_lng(-3.0 * M_PI) + M_PI).abs() < f64::EPSILON);
  }

  #[test]
  fn test_az_distance_noop() {
    let start = LatLng::from_degrees(15.0, 10.0);
    let out = geo_az_distance_rads(&start, 0.0, 0.0);
    assert!(geo_almost_equal(&start, &out), "0 distance produces same point");
  }

  #[test]
  fn test_az_distance_due_north_south() {
    let start = LatLng::from_degrees(45.0, 1.0);
    let north_pole = geo_az_distance_rads(&start, 0.0, degs_to_rads(45.0));
    assert!(geo_almost_equal(&north_pole, &LatLng::from_degrees(90.0, 0.0)), "due north to north pole");

    let south_pole = geo_az_distance_rads(&start, M_PI, degs_to_rads(45.0 + 90.0));
    assert!(geo_almost_equal(&south_pole, &LatLng::from_degrees(-90.0, 0.0)), "due south to south pole");

    let equator = geo_az_distance_rads(&start, M_PI, degs_to_rads(45.0));
    assert!(geo_almost_equal(&equator, &LatLng::from_degrees(0.0, 1.0)), "due south to equator");
  }

  #[test]
  fn test_azimuth_then_distance_lands_on_target() {
    let a = LatLng::from_degrees(10.0, 20.0);
    let b = LatLng::from_degrees(11.0, 21.5);
    let az = geo_azimuth_rads(&a, &b);
    let dist = {
      let sin_lat = ((b.lat - a.lat) / 2.0).sin();
      let sin_lng = ((b.lng - a.lng) / 2.0).sin();
      let h = sin_lat * sin_lat + a.lat.cos() * b.lat.cos() * sin_lng * sin_lng;
      2.0 * h.sqrt().atan2((1.0 - h).sqrt())
    };
    let landed = geo_az_distance_rads(&a, az, dist);
    assert!(geo_almost_equal_threshold(&landed, &b, 1e-9), "landed at {landed:?}");
  }
}
