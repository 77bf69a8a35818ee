// src/traversal/neighbors.rs

use crate::base_cells::{
  base_cell_home_fijk, base_cell_is_cw_offset, is_base_cell_pentagon, is_base_cell_polar_pentagon,
  BASE_CELL_NEIGHBORS, BASE_CELL_NEIGHBOR_60CCW_ROTS, INVALID_BASE_CELL,
};
use crate::constants::{H3_CELL_MODE, NUM_BASE_CELLS};
use crate::coords::ijk::rotate60_ccw;
use crate::h3_index::{
  get_base_cell, get_index_digit, get_mode, get_resolution, h3_rotate60_ccw, h3_rotate60_cw, h3_rotate_pent60_ccw,
  is_pentagon, is_resolution_class_iii, is_valid_cell, leading_non_zero_digit, set_base_cell, set_index_digit,
};
use crate::types::{Direction, H3Error, H3Index};

use Direction::{Center, IAxes, IjAxes, IkAxes, JAxes, JkAxes, KAxes};

/// New digit when traversing along Class II grids.
///
/// Current digit -> direction -> new digit.
#[rustfmt::skip]
const NEW_DIGIT_II: [[Direction; 7]; 7] = [
  [Center, KAxes,  JAxes,  JkAxes, IAxes,  IkAxes, IjAxes],
  [KAxes,  IAxes,  JkAxes, IjAxes, IkAxes, JAxes,  Center],
  [JAxes,  JkAxes, KAxes,  IAxes,  IjAxes, Center, IkAxes],
  [JkAxes, IjAxes, IAxes,  IkAxes, Center, KAxes,  JAxes],
  [IAxes,  IkAxes, IjAxes, Center, JAxes,  JkAxes, KAxes],
  [IkAxes, JAxes,  Center, KAxes,  JkAxes, IjAxes, IAxes],
  [IjAxes, Center, IkAxes, JAxes,  KAxes,  IAxes,  JkAxes],
];

/// New traversal direction when traversing along Class II grids.
///
/// Current digit -> direction -> new ap7 move (at coarser level).
#[rustfmt::skip]
const NEW_ADJUSTMENT_II: [[Direction; 7]; 7] = [
  [Center, Center, Center, Center, Center, Center, Center],
  [Center, KAxes,  Center, KAxes,  Center, IkAxes, Center],
  [Center, Center, JAxes,  JkAxes, Center, Center, JAxes],
  [Center, KAxes,  JkAxes, JkAxes, Center, Center, Center],
  [Center, Center, Center, Center, IAxes,  IAxes,  IjAxes],
  [Center, IkAxes, Center, Center, IAxes,  IkAxes, Center],
  [Center, Center, JAxes,  Center, IjAxes, Center, IjAxes],
];

/// New digit when traversing along Class III grids.
///
/// Current digit -> direction -> new digit.
#[rustfmt::skip]
const NEW_DIGIT_III: [[Direction; 7]; 7] = [
  [Center, KAxes,  JAxes,  JkAxes, IAxes,  IkAxes, IjAxes],
  [KAxes,  JAxes,  JkAxes, IAxes,  IkAxes, IjAxes, Center],
  [JAxes,  JkAxes, IAxes,  IkAxes, IjAxes, Center, KAxes],
  [JkAxes, IAxes,  IkAxes, IjAxes, Center, KAxes,  JAxes],
  [IAxes,  IkAxes, IjAxes, Center, KAxes,  JAxes,  JkAxes],
  [IkAxes, IjAxes, Center, KAxes,  JAxes,  JkAxes, IAxes],
  [IjAxes, Center, KAxes,  JAxes,  JkAxes, IAxes,  IkAxes],
];

/// New traversal direction when traversing along Class III grids.
///
/// Current digit -> direction -> new ap7 move (at coarser level).
#[rustfmt::skip]
const NEW_ADJUSTMENT_III: [[Direction; 7]; 7] = [
  [Center, Center, Center, Center, Center, Center, Center],
  [Center, KAxes,  Center, JkAxes, Center, KAxes,  Center],
  [Center, Center, JAxes,  JAxes,  Center, Center, IjAxes],
  [Center, JkAxes, JAxes,  JkAxes, Center, Center, Center],
  [Center, Center, Center, Center, IAxes,  IkAxes, IAxes],
  [Center, KAxes,  Center, Center, IkAxes, IkAxes, Center],
  [Center, Center, IjAxes, Center, IAxes,  Center, IjAxes],
];


/// Returns the hexagon index neighboring the origin, in the direction `dir`.
///
/// Implementation note: The only reachable case where this returns an error
/// is at the pentagon's deleted K subsequence, where the neighbor would be
/// the pentagon itself.
///
/// # Arguments
/// * `origin` - Origin index.
/// * `dir` - Direction to move in (1-6).
/// * `rotations` - Number of 60 degree ccw rotations of `dir` relative to the
///   origin's own coordinate system.
///
/// # Returns
/// The neighbor and the number of ccw rotations between the origin's
/// coordinate system and the neighbor's.
///
/// # Errors
/// `Failed` for a non-axial direction, `CellInvalid` for an index with a bad
/// base cell or digit, `Pentagon` when stepping into the pentagon's deleted
/// K subsequence.
pub fn h3_neighbor_rotations(
  origin: H3Index,
  mut dir: Direction,
  rotations: i32,
) -> Result<(H3Index, i32), H3Error> {
  if !dir.is_axial() {
    return Err(H3Error::Failed);
  }

  // keep rotations small before any addition
  let mut rotations = rotations.rem_euclid(6);
  for _ in 0..rotations {
    dir = rotate60_ccw(dir);
  }

  let mut out = origin;
  let mut new_rotations = 0;
  let old_base_cell = get_base_cell(out);
  if !(0..NUM_BASE_CELLS).contains(&old_base_cell) {
    return Err(H3Error::CellInvalid);
  }
  let old_leading_digit = leading_non_zero_digit(out);

  // adjust the indexing digits and, if needed, the base cell
  let mut r = get_resolution(out) - 1;
  loop {
    if r == -1 {
      let bc = old_base_cell as usize;
      set_base_cell(&mut out, BASE_CELL_NEIGHBORS[bc][dir as usize]);
      new_rotations = BASE_CELL_NEIGHBOR_60CCW_ROTS[bc][dir as usize];

      if get_base_cell(out) == INVALID_BASE_CELL {
        // moving K off a pentagon base cell lands in the deleted subsequence;
        // go to the IK neighbor and adjust for the skipped direction
        set_base_cell(&mut out, BASE_CELL_NEIGHBORS[bc][IkAxes as usize]);
        new_rotations = BASE_CELL_NEIGHBOR_60CCW_ROTS[bc][IkAxes as usize];
        out = h3_rotate60_ccw(out);
        rotations += 1;
      }
      break;
    }

    let old_digit = get_index_digit(out, r + 1);
    if old_digit == Direction::InvalidDigit {
      return Err(H3Error::CellInvalid);
    }
    let (digits, adjustments) = if is_resolution_class_iii(r + 1) {
      (&NEW_DIGIT_II, &NEW_ADJUSTMENT_II)
    } else {
      (&NEW_DIGIT_III, &NEW_ADJUSTMENT_III)
    };
    set_index_digit(&mut out, r + 1, digits[old_digit as usize][dir as usize]);
    let next_dir = adjustments[old_digit as usize][dir as usize];

    if next_dir == Center {
      // no more adjustment to perform
      break;
    }
    dir = next_dir;
    r -= 1;
  }

  let new_base_cell = get_base_cell(out);
  if is_base_cell_pentagon(new_base_cell) {
    let mut already_adjusted_k_subsequence = false;

    // force rotation out of the missing K axes sub-sequence
    if leading_non_zero_digit(out) == KAxes {
      if old_base_cell != new_base_cell {
        // traversed into the deleted K subsequence of a pentagon base cell;
        // rotate out based on how we got here
        let old_home_face = base_cell_home_fijk(old_base_cell).map_or(-1, |fijk| fijk.face);
        out = if base_cell_is_cw_offset(new_base_cell, old_home_face) {
          h3_rotate60_cw(out)
        } else {
          // the other direction is never reached from a hexagon's home face
          h3_rotate60_ccw(out)
        };
        already_adjusted_k_subsequence = true;
      } else {
        // traversed into the deleted K subsequence from within the same
        // pentagon base cell
        match old_leading_digit {
          Center => {
            log::debug!("neighbor of {origin:x} in direction {dir:?} is the pentagon itself");
            return Err(H3Error::Pentagon);
          }
          JkAxes => {
            out = h3_rotate60_ccw(out);
            rotations += 1;
          }
          IkAxes => {
            out = h3_rotate60_cw(out);
            rotations += 5;
          }
          _ => {
            log::debug!("unexpected leading digit {old_leading_digit:?} leaving pentagon {origin:x}");
            return Err(H3Error::Failed);
          }
        }
      }
    }

    for _ in 0..new_rotations {
      out = h3_rotate_pent60_ccw(out);
    }

    // account for differing orientation of the base cells (this edge might
    // not follow properties of some other edges)
    if old_base_cell != new_base_cell {
      if is_base_cell_polar_pentagon(new_base_cell) {
        // 'polar' base cells behave differently because they have all
        // i neighbors
        if old_base_cell != 118 && old_base_cell != 8 && leading_non_zero_digit(out) != JkAxes {
          rotations += 1;
        }
      } else if leading_non_zero_digit(out) == IkAxes && !already_adjusted_k_subsequence {
        // account for distortion introduced to the 5 neighbor by the
        // deleted K subsequence
        rotations += 1;
      }
    }
  } else {
    for _ in 0..new_rotations {
      out = h3_rotate60_ccw(out);
    }
  }

  Ok((out, (rotations + new_rotations) % 6))
}

/// Returns the direction from the origin to a neighboring cell, or
/// `Direction::InvalidDigit` if they are not neighbors. `Center` when both
/// are the same cell.
#[must_use]
pub fn direction_for_neighbor(origin: H3Index, destination: H3Index) -> Direction {
  if origin == destination {
    return Center;
  }

  // pentagons have no K neighbor
  let skip = usize::from(is_pentagon(origin));
  Direction::AXES
    .into_iter()
    .skip(skip)
    .find(|&dir| matches!(h3_neighbor_rotations(origin, dir, 0), Ok((neighbor, _)) if neighbor == destination))
    .unwrap_or(Direction::InvalidDigit)
}

/// Returns whether or not the provided cells are neighbors.
///
/// # Errors
/// `CellInvalid` if either index is not a valid cell, `ResMismatch` if the
/// cells have different resolutions.
pub fn are_neighbor_cells(origin: H3Index, destination: H3Index) -> Result<bool, H3Error> {
  if get_mode(origin) != H3_CELL_MODE || get_mode(destination) != H3_CELL_MODE {
    return Err(H3Error::CellInvalid);
  }

  // cells are not neighbors with themselves
  if origin == destination {
    return Ok(false);
  }

  if get_resolution(origin) != get_resolution(destination) {
    return Err(H3Error::ResMismatch);
  }

  if !is_valid_cell(origin) || !is_valid_cell(destination) {
    return Err(H3Error::CellInvalid);
  }

  Ok(direction_for_neighbor(origin, destination) != Direction::InvalidDigit)
}
