// src/vertex/rotation.rs

use crate::base_cells::{base_cell_home_fijk, base_cell_to_ccwrot60, is_base_cell_pentagon, is_base_cell_polar_pentagon};
use crate::constants::NUM_PENTAGONS;
use crate::h3_index::{get_base_cell, h3_to_face_ijk, leading_non_zero_digit};
use crate::types::{Direction, H3Error, H3Index};

/// Faces reached from a pentagon base cell in each of its five directions.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PentagonDirectionFaces {
  pub(crate) base_cell: i32,
  /// Indexed by direction minus `DIRECTION_INDEX_OFFSET`, J through IJ.
  pub(crate) faces: [i32; 5],
}

/// Pentagons have no K direction, so rows start at J.
const DIRECTION_INDEX_OFFSET: usize = 2;

const fn pdf(base_cell: i32, faces: [i32; 5]) -> PentagonDirectionFaces {
  PentagonDirectionFaces { base_cell, faces }
}

/// Pentagon base cells and the face reached in each direction.
#[rustfmt::skip]
pub(crate) const PENTAGON_DIRECTION_FACES: [PentagonDirectionFaces; NUM_PENTAGONS] = [
  pdf(4,   [4, 0, 2, 1, 3]),
  pdf(14,  [6, 11, 2, 7, 1]),
  pdf(24,  [5, 10, 1, 6, 0]),
  pdf(38,  [7, 12, 3, 8, 2]),
  pdf(49,  [9, 14, 0, 5, 4]),
  pdf(58,  [8, 13, 4, 9, 3]),
  pdf(63,  [11, 6, 15, 10, 16]),
  pdf(72,  [12, 7, 16, 11, 17]),
  pdf(83,  [10, 5, 19, 14, 15]),
  pdf(97,  [13, 8, 17, 12, 18]),
  pdf(107, [14, 9, 18, 13, 19]),
  pdf(117, [15, 19, 17, 18, 16]),
];

impl PentagonDirectionFaces {
  /// Face reached in `dir`; `None` for center, K and invalid.
  #[must_use]
  pub(crate) fn face(&self, dir: Direction) -> Option<i32> {
    (dir as usize)
      .checked_sub(DIRECTION_INDEX_OFFSET)
      .and_then(|idx| self.faces.get(idx))
      .copied()
  }
}

/// Direction-to-face row of a pentagon base cell.
#[must_use]
pub(crate) fn pentagon_direction_faces(base_cell: i32) -> Option<&'static PentagonDirectionFaces> {
  PENTAGON_DIRECTION_FACES.iter().find(|row| row.base_cell == base_cell)
}

/// Number of 60 degree ccw rotations between a cell's own vertex numbering
/// and the canonical numbering of the face it projects onto.
///
/// With `adjust_for_pentagon`, cells of pentagon base cells are corrected for
/// crossing onto a polar or IK face and for crossing the deleted K
/// subsequence between the JK and IK sides.
///
/// # Errors
/// `CellInvalid` when the cell cannot be projected, `Failed` when its base
/// cell has no orientation on the projected face.
pub fn vertex_rotations(cell: H3Index, adjust_for_pentagon: bool) -> Result<i32, H3Error> {
  let fijk = h3_to_face_ijk(cell)?;
  let base_cell = get_base_cell(cell);
  let mut ccw_rot60 = base_cell_to_ccwrot60(base_cell, fijk.face).ok_or_else(|| {
    log::debug!("base cell {base_cell} of {cell:x} has no orientation on face {}", fijk.face);
    H3Error::Failed
  })?;

  if !adjust_for_pentagon || !is_base_cell_pentagon(base_cell) {
    return Ok(ccw_rot60);
  }
  let dir_faces = pentagon_direction_faces(base_cell).ok_or(H3Error::Failed)?;
  let ik_face = dir_faces.face(Direction::IkAxes);
  let jk_face = dir_faces.face(Direction::JkAxes);
  let home_face = base_cell_home_fijk(base_cell).map(|home| home.face);

  // polar neighbors and IK neighbors sit one more step ccw
  if home_face != Some(fijk.face) && (is_base_cell_polar_pentagon(base_cell) || ik_face == Some(fijk.face)) {
    ccw_rot60 = (ccw_rot60 + 1) % 6;
  }

  // crossing the deleted subsequence between the JK and IK sides
  match leading_non_zero_digit(cell) {
    Direction::JkAxes if ik_face == Some(fijk.face) => {
      log::trace!("{cell:x} crosses from JK onto IK face {}", fijk.face);
      ccw_rot60 = (ccw_rot60 + 5) % 6;
    }
    Direction::IkAxes if jk_face == Some(fijk.face) => {
      log::trace!("{cell:x} crosses from IK onto JK face {}", fijk.face);
      ccw_rot60 = (ccw_rot60 + 1) % 6;
    }
    _ => {}
  }
  Ok(ccw_rot60)
}
