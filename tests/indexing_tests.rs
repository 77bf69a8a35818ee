// tests/indexing_tests.rs

use h3_vertex::{h3_index::set_mode, *};

#[test]
fn test_cli_lat_lng_to_cell() {
  // "latLngToCell --lat 20 --lng 123 -r 2 -f newline" "824b9ffffffffff"
  let geo = LatLng::from_degrees(20.0, 123.0);
  match lat_lng_to_cell(&geo, 2) {
    Ok(h) => assert_eq!(h, H3Index(0x824b9ffffffffff)),
    Err(e) => panic!("lat_lng_to_cell failed: {e:?}"),
  }
}

#[test]
fn test_lat_lng_to_cell_errors() {
  let geo = LatLng::from_degrees(20.0, 123.0);
  assert_eq!(lat_lng_to_cell(&geo, 16), Err(H3Error::ResDomain));
  assert_eq!(lat_lng_to_cell(&geo, -1), Err(H3Error::ResDomain));
  let nan = LatLng { lat: f64::NAN, lng: 0.0 };
  assert_eq!(lat_lng_to_cell(&nan, 5), Err(H3Error::LatLngDomain));
}

#[test]
fn test_cli_cell_to_lat_lng() {
  // "cellToLatLng -c 8928342e20fffff -f wkt" "POINT(-122.5003039349 37.5012466151)"
  let cell = H3Index(0x8928342e20fffff);
  match cell_to_lat_lng(cell) {
    Ok(center) => {
      let lng = rads_to_degs(center.lng);
      let lat = rads_to_degs(center.lat);
      assert!((lng - -122.5003039349).abs() < 1e-9, "longitude {lng}");
      assert!((lat - 37.5012466151).abs() < 1e-9, "latitude {lat}");
    }
    Err(e) => panic!("cell_to_lat_lng failed: {e:?}"),
  }
}

#[test]
fn test_cli_invalid_cell_to_lat_lng() {
  // "cellToLatLng -c asdf 2>&1" "Error 5: Cell argument was not valid"
  let mut h = H3Index(0x8001fffffffffff);
  set_mode(&mut h, 0);
  assert_eq!(cell_to_lat_lng(h), Err(H3Error::CellInvalid));
  assert_eq!(cell_to_boundary(h), Err(H3Error::CellInvalid));
}

#[test]
fn test_cli_cell_to_boundary() {
  // "cellToBoundary -c 8928342e20fffff -f wkt"
  // "POLYGON((-122.4990471431 37.4997389893, -122.4979805011 37.5014245698, ...))"
  let cell = H3Index(0x8928342e20fffff);
  let boundary = cell_to_boundary(cell).unwrap();
  assert_eq!(boundary.num_verts, 6);
  let first = boundary.verts[0];
  assert!((rads_to_degs(first.lng) - -122.4990471431).abs() < 1e-9);
  assert!((rads_to_degs(first.lat) - 37.4997389893).abs() < 1e-9);
  let second = boundary.verts[1];
  assert!((rads_to_degs(second.lng) - -122.4979805011).abs() < 1e-9);
  assert!((rads_to_degs(second.lat) - 37.5014245698).abs() < 1e-9);
}

#[test]
fn test_cell_round_trips_through_center() {
  for res in 0..=MAX_H3_RES {
    let cell = lat_lng_to_cell(&LatLng::from_degrees(37.779_265, -122.419_277), res).unwrap();
    let center = cell_to_lat_lng(cell).unwrap();
    assert_eq!(lat_lng_to_cell(&center, res), Ok(cell), "resolution {res}");
  }
}
