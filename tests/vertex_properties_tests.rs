// tests/vertex_properties_tests.rs

use h3_vertex::h3_index::set_index_digit;
use h3_vertex::*;
use proptest::prelude::*;
use std::f64::consts::PI;

/// Any cell, from a point on the globe.
fn any_cell() -> impl Strategy<Value = H3Index> {
  (-90.0f64..=90.0, -180.0f64..180.0, 0i32..=MAX_H3_RES)
    .prop_map(|(lat, lng, res)| lat_lng_to_cell(&LatLng::from_degrees(lat, lng), res).unwrap())
}

/// Cells under a pentagon base cell, where rotations are least regular.
fn pentagon_descendant() -> impl Strategy<Value = H3Index> {
  (0usize..12, 0i32..=6, prop::collection::vec(0u8..7, 6)).prop_filter_map(
    "deleted K subsequence",
    |(pentagon, res, digits)| {
      let mut cell = get_pentagons(res).ok()?[pentagon];
      for (r, &digit) in (1..=res).zip(&digits) {
        set_index_digit(&mut cell, r, Direction::try_from(digit).ok()?);
      }
      is_valid_cell(cell).then_some(cell)
    },
  )
}

fn cells() -> impl Strategy<Value = H3Index> {
  prop_oneof![3 => any_cell(), 1 => pentagon_descendant()]
}

/// The cells around vertex `v` of `origin`: itself and its neighbors across
/// the edges starting and ending there.
fn sharing_cells(origin: H3Index, v: usize) -> Vec<H3Index> {
  let n = cell_vertex_count(origin);
  let mut out = vec![origin];
  for w in [v, (v + n - 1) % n] {
    let dir = direction_for_vertex_num(origin, w);
    out.push(h3_neighbor_rotations(origin, dir, 0).unwrap().0);
  }
  out
}

fn same_point(a: &LatLng, b: &LatLng) -> bool {
  let dlng = (a.lng - b.lng).rem_euclid(2.0 * PI);
  (a.lat - b.lat).abs() < 1e-9 && dlng.min(2.0 * PI - dlng) * a.lat.cos().max(1e-9) < 1e-9
}

proptest! {
  #[test]
  fn prop_direction_vertex_inverse(cell in cells()) {
    for dir in Direction::AXES {
      match vertex_num_for_direction(cell, dir) {
        Some(v) => prop_assert_eq!(direction_for_vertex_num(cell, v), dir),
        None => prop_assert!(is_pentagon(cell) && dir == Direction::KAxes),
      }
    }
  }

  #[test]
  fn prop_vertex_numbers_fit_shape(cell in cells()) {
    let n = cell_vertex_count(cell);
    let mut seen: Vec<usize> = Direction::AXES.into_iter().filter_map(|dir| vertex_num_for_direction(cell, dir)).collect();
    prop_assert!(seen.iter().all(|&v| v < n));
    seen.sort_unstable();
    seen.dedup();
    prop_assert_eq!(seen.len(), n, "every vertex has exactly one direction");
    prop_assert_eq!(direction_for_vertex_num(cell, n), Direction::InvalidDigit);
    if is_pentagon(cell) {
      prop_assert_eq!(vertex_num_for_direction(cell, Direction::KAxes), None);
    }
  }

  #[test]
  fn prop_sharing_cells_agree_on_vertex(cell in cells()) {
    for v in 0..cell_vertex_count(cell) {
      let vertex = cell_to_vertex(cell, v).unwrap();
      for other in sharing_cells(cell, v) {
        let hits = (0..cell_vertex_count(other)).filter(|&w| cell_to_vertex(other, w) == Ok(vertex)).count();
        prop_assert_eq!(hits, 1, "{:x} names {:x} once", other.0, vertex.0);
      }
    }
  }

  #[test]
  fn prop_owner_is_smallest_sharing_cell(cell in cells()) {
    for v in 0..cell_vertex_count(cell) {
      let owner = vertex_owner(cell_to_vertex(cell, v).unwrap());
      let sharing = sharing_cells(cell, v);
      prop_assert_eq!(Some(&owner), sharing.iter().min());
    }
  }

  #[test]
  fn prop_vertex_slots(cell in cells()) {
    let vertexes = cell_to_vertexes(cell).unwrap();
    prop_assert_eq!(get_cell_vertexes(cell), vertexes);
    if is_pentagon(cell) {
      prop_assert_eq!(vertexes[5], H3_NULL);
      prop_assert!(vertexes[..5].iter().all(|&h| h != H3_NULL));
    } else {
      prop_assert!(vertexes.iter().all(|&h| h != H3_NULL));
    }
    let mut distinct = vertexes.to_vec();
    distinct.sort_unstable();
    distinct.dedup();
    // a pentagon's sentinel slot counts once
    prop_assert_eq!(distinct.len(), 6);
  }

  #[test]
  fn prop_pack_round_trip(cell in cells(), v in 0usize..6) {
    prop_assume!(v < cell_vertex_count(cell));
    let vertex = pack_vertex(cell, v);
    prop_assert_eq!(vertex_owner(vertex), cell);
    prop_assert_eq!(vertex_num(vertex), v);
    prop_assert_eq!(get_resolution(vertex), get_resolution(cell));
  }

  #[test]
  fn prop_vertexes_are_valid(cell in cells()) {
    for vertex in get_cell_vertexes(cell).into_iter().filter(|&h| h != H3_NULL) {
      prop_assert!(is_valid_vertex(vertex), "{:x}", vertex.0);
      prop_assert!(!is_valid_cell(vertex));
    }
  }

  #[test]
  fn prop_vertex_points_on_boundary(cell in cells()) {
    let boundary = cell_to_boundary(cell).unwrap();
    let n = cell_vertex_count(cell);
    for v in 0..n {
      let vertex = cell_to_vertex(cell, v).unwrap();
      let point = vertex_to_lat_lng(vertex).unwrap();
      prop_assert_eq!(vertex_to_point(vertex), point);
      if boundary.num_verts == n {
        prop_assert!(same_point(&point, &boundary.verts[v]), "vertex {} of {:x}", v, cell.0);
      } else {
        // crossing vertexes shift the numbering of Class III boundaries
        prop_assert!(boundary.as_slice().iter().any(|b| same_point(&point, b)), "vertex {} of {:x}", v, cell.0);
      }
    }
  }
}

#[test]
fn test_res0_hexagons_need_no_pentagon_adjustment() {
  for cell in get_res0_cells().into_iter().filter(|&h| !is_pentagon(h)) {
    assert_eq!(vertex_rotations(cell, true), vertex_rotations(cell, false), "{cell:x}");
    let mut vertex_nums: Vec<usize> = Direction::AXES
      .into_iter()
      .map(|dir| vertex_num_for_direction(cell, dir).unwrap())
      .collect();
    vertex_nums.sort_unstable();
    assert_eq!(vertex_nums, vec![0, 1, 2, 3, 4, 5], "{cell:x}");
  }
}

#[test]
fn test_res0_vertex_count() {
  // 122 cells on a sphere: V = 2 * (F - 2)
  let mut vertexes: Vec<H3Index> = get_res0_cells()
    .into_iter()
    .flat_map(get_cell_vertexes)
    .filter(|&h| h != H3_NULL)
    .collect();
  vertexes.sort_unstable();
  vertexes.dedup();
  assert_eq!(vertexes.len(), 240);
}
