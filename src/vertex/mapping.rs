// src/vertex/mapping.rs

use super::rotation::vertex_rotations;
use crate::constants::{NUM_HEX_VERTS, NUM_PENT_VERTS};
use crate::h3_index::is_pentagon;
use crate::types::{Direction, H3Index};

use Direction::{IAxes, IjAxes, IkAxes, JAxes, JkAxes, KAxes};

/// Hexagon direction to vertex number, indexed by digit. `None` for center.
const DIRECTION_TO_VERTEX_NUM_HEX: [Option<usize>; 7] = [None, Some(3), Some(1), Some(2), Some(5), Some(4), Some(0)];

/// Pentagon direction to vertex number, indexed by digit. `None` for center
/// and the deleted K direction.
const DIRECTION_TO_VERTEX_NUM_PENT: [Option<usize>; 7] = [None, None, Some(1), Some(2), Some(4), Some(3), Some(0)];

/// Hexagon vertex number to the direction of the edge starting there.
const VERTEX_NUM_TO_DIRECTION_HEX: [Direction; NUM_HEX_VERTS] = [IjAxes, JAxes, JkAxes, KAxes, IkAxes, IAxes];

/// Pentagon vertex number to the direction of the edge starting there.
const VERTEX_NUM_TO_DIRECTION_PENT: [Direction; NUM_PENT_VERTS] = [IjAxes, JAxes, JkAxes, IkAxes, IAxes];

/// Number of vertexes of a cell: 5 for pentagons, 6 for hexagons.
#[inline]
#[must_use]
pub fn cell_vertex_count(cell: H3Index) -> usize {
  if is_pentagon(cell) {
    NUM_PENT_VERTS
  } else {
    NUM_HEX_VERTS
  }
}

/// Vertex number, in the cell's own ccw numbering, where the edge shared with
/// the neighbor in direction `dir` starts.
///
/// `None` for center and invalid directions, for K on a pentagon, and when
/// the cell cannot be projected.
#[must_use]
pub fn vertex_num_for_direction(origin: H3Index, dir: Direction) -> Option<usize> {
  let pentagon = is_pentagon(origin);
  let table = if pentagon {
    &DIRECTION_TO_VERTEX_NUM_PENT
  } else {
    &DIRECTION_TO_VERTEX_NUM_HEX
  };
  let canonical = (*table.get(dir as usize)?)?;

  let rotations = usize::try_from(vertex_rotations(origin, true).ok()?).ok()?;
  let n = cell_vertex_count(origin);
  // vertex numbers run ccw, so undo the cell's ccw rotation
  Some((canonical + n - rotations % n) % n)
}

/// Direction of the neighbor across the edge that starts at `vertex_num`,
/// going ccw.
///
/// `Direction::InvalidDigit` when the vertex number is out of range for the
/// cell's shape or the cell cannot be projected.
#[must_use]
pub fn direction_for_vertex_num(origin: H3Index, vertex_num: usize) -> Direction {
  let n = cell_vertex_count(origin);
  if vertex_num >= n {
    return Direction::InvalidDigit;
  }
  let Some(rotations) = vertex_rotations(origin, true).ok().and_then(|r| usize::try_from(r).ok()) else {
    return Direction::InvalidDigit;
  };
  let idx = (vertex_num + rotations) % n;
  if n == NUM_PENT_VERTS {
    VERTEX_NUM_TO_DIRECTION_PENT[idx]
  } else {
    VERTEX_NUM_TO_DIRECTION_HEX[idx]
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::h3_index::{get_pentagons, get_res0_cells};
  use crate::indexing::lat_lng_to_cell;
  use crate::types::LatLng;

  #[test]
  fn test_tables_are_inverse() {
    for (v, &dir) in VERTEX_NUM_TO_DIRECTION_HEX.iter().enumerate() {
      assert_eq!(DIRECTION_TO_VERTEX_NUM_HEX[dir as usize], Some(v));
    }
    for (v, &dir) in VERTEX_NUM_TO_DIRECTION_PENT.iter().enumerate() {
      assert_eq!(DIRECTION_TO_VERTEX_NUM_PENT[dir as usize], Some(v));
    }
  }

  #[test]
  fn test_invalid_directions() {
    let hexagon = H3Index(0x85283473fffffff);
    assert_eq!(vertex_num_for_direction(hexagon, Direction::Center), None);
    assert_eq!(vertex_num_for_direction(hexagon, Direction::InvalidDigit), None);

    let pentagon = H3Index(0x8009fffffffffff);
    assert_eq!(vertex_num_for_direction(pentagon, Direction::KAxes), None);
    assert!(vertex_num_for_direction(pentagon, Direction::JAxes).is_some());
  }

  #[test]
  fn test_invalid_vertex_nums() {
    assert_eq!(direction_for_vertex_num(H3Index(0x85283473fffffff), 6), Direction::InvalidDigit);
    assert_eq!(direction_for_vertex_num(H3Index(0x8009fffffffffff), 5), Direction::InvalidDigit);
    assert!(direction_for_vertex_num(H3Index(0x8009fffffffffff), 4).is_axial());
  }

  #[test]
  fn test_res0_mapping_is_permutation() {
    for cell in get_res0_cells() {
      let n = cell_vertex_count(cell);
      let mut seen: Vec<usize> = Direction::AXES
        .into_iter()
        .filter_map(|dir| vertex_num_for_direction(cell, dir))
        .collect();
      seen.sort_unstable();
      assert_eq!(seen, (0..n).collect::<Vec<_>>(), "{cell:x}");
    }
  }

  #[test]
  fn test_round_trip_both_ways() {
    let sf = lat_lng_to_cell(&LatLng::from_degrees(37.779_265, -122.419_277), 7).unwrap();
    let cells = get_pentagons(3).unwrap().into_iter().chain(get_res0_cells()).chain([sf]);
    for cell in cells {
      for dir in Direction::AXES {
        if let Some(v) = vertex_num_for_direction(cell, dir) {
          assert_eq!(direction_for_vertex_num(cell, v), dir, "{cell:x} {dir:?}");
        }
      }
      for v in 0..cell_vertex_count(cell) {
        let dir = direction_for_vertex_num(cell, v);
        assert_eq!(vertex_num_for_direction(cell, dir), Some(v), "{cell:x} vertex {v}");
      }
    }
  }
}
