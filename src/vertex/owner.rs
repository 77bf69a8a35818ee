// src/vertex/owner.rs

use super::mapping::{cell_vertex_count, direction_for_vertex_num, vertex_num_for_direction};
use crate::constants::NUM_HEX_VERTS;
use crate::h3_index::{get_index_digit, get_resolution, h3_to_face_ijk, is_pentagon};
use crate::traversal::neighbors::{direction_for_neighbor, h3_neighbor_rotations};
use crate::types::{Direction, H3Error, H3Index};

/// Which of the origin's two neighbors at a vertex owns it. Going ccw around
/// the origin, the left neighbor follows the vertex and the right one
/// precedes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
  Left,
  Right,
}

/// Vertex number in a hexagon owner on the same face, by the origin's vertex
/// number and the side the owner is on.
#[rustfmt::skip]
const NEIGHBOR_VERTEXES: [[usize; 2]; NUM_HEX_VERTS] = [
  [4, 2],
  [5, 3],
  [0, 4],
  [1, 5],
  [2, 0],
  [3, 1],
];

/// Owner vertex number from the same-face table. Only valid when origin and
/// owner are hexagons projecting onto the same face.
#[inline]
pub(crate) fn owner_vertex_num_on_face(vertex_num: usize, side: Side) -> usize {
  NEIGHBOR_VERTEXES[vertex_num][side as usize]
}

/// Owner vertex number from the direction between the two cells. Works
/// across faces and around pentagons.
pub(crate) fn owner_vertex_num_general(owner: H3Index, origin: H3Index, side: Side) -> Result<usize, H3Error> {
  let dir = direction_for_neighbor(owner, origin);
  let Some(vertex_num) = vertex_num_for_direction(owner, dir) else {
    log::debug!("no vertex of {owner:x} faces {origin:x} (direction {dir:?})");
    return Err(H3Error::Failed);
  };
  // the left neighbor sees the shared edge from its other end
  Ok(match side {
    Side::Right => vertex_num,
    Side::Left => (vertex_num + 1) % cell_vertex_count(owner),
  })
}

/// Neighbor across the edge starting at `vertex_num`.
fn neighbor_at(origin: H3Index, vertex_num: usize) -> Result<H3Index, H3Error> {
  let dir = direction_for_vertex_num(origin, vertex_num);
  if dir == Direction::InvalidDigit {
    log::debug!("no direction for vertex {vertex_num} of {origin:x}");
    return Err(H3Error::Failed);
  }
  h3_neighbor_rotations(origin, dir, 0)
    .map(|(neighbor, _)| neighbor)
    .inspect_err(|err| log::debug!("neighbor of {origin:x} in direction {dir:?} failed: {err}"))
}

/// Resolves the canonical owner of a cell's vertex, and the vertex's number
/// in the owner's own numbering.
///
/// Of the cells sharing the vertex, the one with the smallest raw index owns
/// it, so every cell around a vertex resolves to the same pair.
///
/// # Errors
/// `Domain` when `vertex_num` is out of range for the cell's shape. `Failed`
/// or the neighbor error when the cells around the vertex cannot be found.
pub fn resolve_owner(origin: H3Index, vertex_num: usize) -> Result<(H3Index, usize), H3Error> {
  let n = cell_vertex_count(origin);
  if vertex_num >= n {
    return Err(H3Error::Domain);
  }

  // a center child has a smaller index than any of its neighbors
  let res = get_resolution(origin);
  if res > 0 && get_index_digit(origin, res) == Direction::Center {
    return Ok((origin, vertex_num));
  }
  owner_among_neighbors(origin, vertex_num)
}

/// Owner of vertex `vertex_num` (already in range) picked by walking to both
/// neighbors at the vertex.
fn owner_among_neighbors(origin: H3Index, vertex_num: usize) -> Result<(H3Index, usize), H3Error> {
  let n = cell_vertex_count(origin);
  let left = neighbor_at(origin, vertex_num)?;
  let right = neighbor_at(origin, (vertex_num + n - 1) % n)?;

  let (owner, side) = match (left < origin, right < origin.min(left)) {
    (_, true) => (right, Side::Right),
    (true, false) => (left, Side::Left),
    (false, false) => return Ok((origin, vertex_num)),
  };

  let same_face =
    !is_pentagon(origin) && !is_pentagon(owner) && h3_to_face_ijk(origin)?.face == h3_to_face_ijk(owner)?.face;
  let owner_vertex_num = if same_face {
    owner_vertex_num_on_face(vertex_num, side)
  } else {
    log::trace!("vertex {vertex_num} of {origin:x} resolved through {side:?} owner {owner:x}");
    owner_vertex_num_general(owner, origin, side)?
  };
  Ok((owner, owner_vertex_num))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::NUM_BASE_CELLS;
  use crate::h3_index::{get_base_cell, is_valid_cell, set_h3_index, set_index_digit, set_resolution};
  use crate::indexing::lat_lng_to_cell;
  use crate::types::LatLng;
  use proptest::prelude::*;

  /// Every valid cell at resolution 2.
  fn res2_cells() -> impl Iterator<Item = H3Index> {
    (0..NUM_BASE_CELLS).flat_map(|bc| {
      (0..7u8).flat_map(move |d1| {
        (0..7u8).filter_map(move |d2| {
          let mut cell = set_h3_index(2, bc, Direction::Center);
          set_index_digit(&mut cell, 1, Direction::try_from(d1).ok()?);
          set_index_digit(&mut cell, 2, Direction::try_from(d2).ok()?);
          is_valid_cell(cell).then_some(cell)
        })
      })
    })
  }

  /// The origin and its two neighbors at `vertex_num`.
  fn cells_at(origin: H3Index, vertex_num: usize) -> [H3Index; 3] {
    let n = cell_vertex_count(origin);
    [
      origin,
      neighbor_at(origin, vertex_num).unwrap(),
      neighbor_at(origin, (vertex_num + n - 1) % n).unwrap(),
    ]
  }

  #[test]
  fn test_out_of_range() {
    assert_eq!(resolve_owner(H3Index(0x85283473fffffff), 6), Err(H3Error::Domain));
    assert_eq!(resolve_owner(H3Index(0x8009fffffffffff), 5), Err(H3Error::Domain));
  }

  #[test]
  fn test_center_child_owns_its_vertexes() {
    // 0x85283473fffffff ends in digit 4; its center child at res 6 ends in 0
    let mut center_child = H3Index(0x85283473fffffff);
    set_resolution(&mut center_child, 6);
    set_index_digit(&mut center_child, 6, Direction::Center);
    assert!(is_valid_cell(center_child));
    for v in 0..NUM_HEX_VERTS {
      let [_, left, right] = cells_at(center_child, v);
      assert!(center_child < left && center_child < right, "vertex {v}");
      assert_eq!(owner_among_neighbors(center_child, v), Ok((center_child, v)), "vertex {v}");
      assert_eq!(resolve_owner(center_child, v), Ok((center_child, v)), "vertex {v}");
    }
  }

  #[test]
  fn test_center_child_shortcut_matches_neighbor_walk() {
    let center_children = res2_cells().filter(|&h| get_index_digit(h, 2) == Direction::Center);
    for origin in center_children {
      for v in 0..cell_vertex_count(origin) {
        assert_eq!(resolve_owner(origin, v), owner_among_neighbors(origin, v), "{origin:x} vertex {v}");
        assert_eq!(resolve_owner(origin, v), Ok((origin, v)), "{origin:x} vertex {v}");
      }
    }
  }

  #[test]
  fn test_owner_is_smallest_of_sharing_cells() {
    for origin in res2_cells().step_by(7) {
      for v in 0..cell_vertex_count(origin) {
        let (owner, _) = resolve_owner(origin, v).unwrap();
        let sharing = cells_at(origin, v);
        assert_eq!(Some(&owner), sharing.iter().min(), "{origin:x} vertex {v}");
      }
    }
  }

  #[test]
  fn test_same_face_table_matches_general_path() {
    let mut compared = 0;
    for origin in res2_cells() {
      if is_pentagon(origin) {
        continue;
      }
      let origin_face = h3_to_face_ijk(origin).unwrap().face;
      for v in 0..NUM_HEX_VERTS {
        let [_, left, right] = cells_at(origin, v);
        for (neighbor, side) in [(left, Side::Left), (right, Side::Right)] {
          if is_pentagon(neighbor) || h3_to_face_ijk(neighbor).unwrap().face != origin_face {
            continue;
          }
          assert_eq!(
            owner_vertex_num_general(neighbor, origin, side),
            Ok(owner_vertex_num_on_face(v, side)),
            "{origin:x} vertex {v} via {side:?} {neighbor:x}"
          );
          compared += 1;
        }
      }
    }
    assert!(compared > 10_000);
  }

  #[test]
  fn test_pentagon_neighbors() {
    // base cell 4 is a pentagon; its res 2 center and ring
    let pentagon = set_h3_index(2, 4, Direction::Center);
    for v in 0..5 {
      assert_eq!(resolve_owner(pentagon, v), Ok((pentagon, v)));
    }
    for origin in res2_cells().filter(|&h| get_base_cell(h) == 4) {
      for v in 0..cell_vertex_count(origin) {
        let (owner, owner_v) = resolve_owner(origin, v).unwrap();
        assert!(owner_v < cell_vertex_count(owner));
      }
    }
  }

  proptest! {
    #[test]
    fn prop_same_face_table_matches_general_path(
      lat in -89.9f64..89.9,
      lng in -180.0f64..180.0,
      res in 1i32..=15,
    ) {
      let origin = lat_lng_to_cell(&LatLng::from_degrees(lat, lng), res).unwrap();
      prop_assume!(!is_pentagon(origin));
      let origin_face = h3_to_face_ijk(origin).unwrap().face;
      for v in 0..NUM_HEX_VERTS {
        let [_, left, right] = cells_at(origin, v);
        for (neighbor, side) in [(left, Side::Left), (right, Side::Right)] {
          if is_pentagon(neighbor) || h3_to_face_ijk(neighbor).unwrap().face != origin_face {
            continue;
          }
          prop_assert_eq!(owner_vertex_num_general(neighbor, origin, side), Ok(owner_vertex_num_on_face(v, side)));
        }
      }
    }

    #[test]
    fn prop_every_sharing_cell_agrees(
      lat in -89.9f64..89.9,
      lng in -180.0f64..180.0,
      res in 0i32..=15,
    ) {
      let origin = lat_lng_to_cell(&LatLng::from_degrees(lat, lng), res).unwrap();
      for v in 0..cell_vertex_count(origin) {
        let resolved = resolve_owner(origin, v).unwrap();
        let (owner, owner_v) = resolved;
        for cell in cells_at(origin, v) {
          let found = (0..cell_vertex_count(cell)).any(|w| resolve_owner(cell, w) == Ok(resolved));
          prop_assert!(found, "{:x} does not share {:x} vertex {}", cell.0, owner.0, owner_v);
        }
      }
    }
  }
}
