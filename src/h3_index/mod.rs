//! H3 index bit layout, digit rotations and the `FaceIJK` conversions.

pub mod inspection;

use crate::base_cells::{
  base_cell_home_fijk, base_cell_is_cw_offset, face_ijk_to_base_cell, face_ijk_to_base_cell_ccwrot60,
  is_base_cell_pentagon, MAX_FACE_COORD,
};
use crate::constants::{
  H3_BC_MASK, H3_BC_OFFSET, H3_CELL_MODE, H3_DIGIT_MASK, H3_HIGH_BIT_MASK, H3_INIT, H3_MODE_MASK, H3_MODE_OFFSET,
  H3_PER_DIGIT_OFFSET, H3_RESERVED_MASK, H3_RESERVED_OFFSET, H3_RES_MASK, H3_RES_OFFSET, MAX_H3_RES,
};
use crate::coords::face_ijk::Overage;
use crate::coords::ijk;
use crate::types::{CoordIJK, Direction, FaceIJK, H3Error, H3Index, H3_NULL};

pub use inspection::{get_base_cell_number, get_pentagons, get_res0_cells, is_pentagon, is_res_class_iii, is_valid_cell};

#[inline(always)]
const fn field(h: H3Index, mask: u64, offset: u8) -> u64 {
  (h.0 & mask) >> offset
}

#[inline(always)]
fn set_field(h: &mut H3Index, mask: u64, offset: u8, value: u64) {
  h.0 = (h.0 & !mask) | ((value << offset) & mask);
}

#[inline(always)]
const fn digit_offset(res: i32) -> i32 {
  (MAX_H3_RES - res) * H3_PER_DIGIT_OFFSET as i32
}

/// Gets the high bit of the index; zero for every valid index.
#[inline(always)]
#[must_use]
pub const fn get_high_bit(h: H3Index) -> u8 {
  field(h, H3_HIGH_BIT_MASK, 63) as u8
}

/// Gets the mode of the index.
#[inline(always)]
#[must_use]
pub const fn get_mode(h: H3Index) -> u8 {
  field(h, H3_MODE_MASK, H3_MODE_OFFSET) as u8
}

/// Sets the mode of the index.
#[inline(always)]
pub fn set_mode(h: &mut H3Index, mode: u8) {
  set_field(h, H3_MODE_MASK, H3_MODE_OFFSET, u64::from(mode));
}

/// Gets the resolution of the index.
#[inline(always)]
#[must_use]
pub const fn get_resolution(h: H3Index) -> i32 {
  field(h, H3_RES_MASK, H3_RES_OFFSET) as i32
}

/// Sets the resolution of the index.
#[inline(always)]
pub fn set_resolution(h: &mut H3Index, res: i32) {
  set_field(h, H3_RES_MASK, H3_RES_OFFSET, res as u64);
}

/// Gets the base cell of the index.
#[inline(always)]
#[must_use]
pub const fn get_base_cell(h: H3Index) -> i32 {
  field(h, H3_BC_MASK, H3_BC_OFFSET) as i32
}

/// Sets the base cell of the index.
#[inline(always)]
pub fn set_base_cell(h: &mut H3Index, base_cell: i32) {
  set_field(h, H3_BC_MASK, H3_BC_OFFSET, base_cell as u64);
}

/// Gets the reserved bits. Zero for cells; the vertex number for vertexes.
#[inline(always)]
#[must_use]
pub const fn get_reserved_bits(h: H3Index) -> u8 {
  field(h, H3_RESERVED_MASK, H3_RESERVED_OFFSET) as u8
}

/// Sets the reserved bits.
#[inline(always)]
pub fn set_reserved_bits(h: &mut H3Index, bits: u8) {
  set_field(h, H3_RESERVED_MASK, H3_RESERVED_OFFSET, u64::from(bits));
}

/// Gets the digit at resolution `res`, counting from 1.
#[inline(always)]
#[must_use]
pub const fn get_index_digit(h: H3Index, res: i32) -> Direction {
  Direction::from_bits(h.0 >> digit_offset(res))
}

/// Sets the digit at resolution `res`, counting from 1.
#[inline(always)]
pub fn set_index_digit(h: &mut H3Index, res: i32, digit: Direction) {
  let offset = digit_offset(res);
  h.0 = (h.0 & !(H3_DIGIT_MASK << offset)) | ((digit as u64) << offset);
}

/// Builds a cell index with every digit up to `res` set to `init_digit`.
pub(crate) fn set_h3_index(res: i32, base_cell: i32, init_digit: Direction) -> H3Index {
  let mut h = H3Index(H3_INIT);
  set_mode(&mut h, H3_CELL_MODE);
  set_resolution(&mut h, res);
  set_base_cell(&mut h, base_cell);
  for r in 1..=res {
    set_index_digit(&mut h, r, init_digit);
  }
  h
}

/// Odd resolutions use the Class III grid.
#[inline]
#[must_use]
pub(crate) fn is_resolution_class_iii(res: i32) -> bool {
  res % 2 == 1
}

/// The first non-center digit, or `Center` if all digits are center.
#[must_use]
pub(crate) fn leading_non_zero_digit(h: H3Index) -> Direction {
  (1..=get_resolution(h))
    .map(|r| get_index_digit(h, r))
    .find(|&digit| digit != Direction::Center)
    .unwrap_or(Direction::Center)
}

fn rotate_digits(mut h: H3Index, rotate: fn(Direction) -> Direction) -> H3Index {
  for r in 1..=get_resolution(h) {
    let digit = rotate(get_index_digit(h, r));
    set_index_digit(&mut h, r, digit);
  }
  h
}

/// Rotates every digit 60 degrees counter-clockwise.
#[must_use]
pub(crate) fn h3_rotate60_ccw(h: H3Index) -> H3Index {
  rotate_digits(h, ijk::rotate60_ccw)
}

/// Rotates every digit 60 degrees clockwise.
#[must_use]
pub(crate) fn h3_rotate60_cw(h: H3Index) -> H3Index {
  rotate_digits(h, ijk::rotate60_cw)
}

/// Rotates 60 degrees counter-clockwise about a pentagonal center, stepping
/// over the deleted K subsequence.
#[must_use]
pub(crate) fn h3_rotate_pent60_ccw(mut h: H3Index) -> H3Index {
  let mut found_first_non_zero_digit = false;
  for r in 1..=get_resolution(h) {
    let digit = ijk::rotate60_ccw(get_index_digit(h, r));
    set_index_digit(&mut h, r, digit);

    if !found_first_non_zero_digit && get_index_digit(h, r) != Direction::Center {
      found_first_non_zero_digit = true;
      if leading_non_zero_digit(h) == Direction::KAxes {
        h = h3_rotate60_ccw(h);
      }
    }
  }
  h
}

/// Encodes a `FaceIJK` address at resolution `res` as a cell index.
///
/// Returns `H3_NULL` if the address lies outside the base cell lookup range.
#[must_use]
pub(crate) fn face_ijk_to_h3(fijk: &FaceIJK, res: i32) -> H3Index {
  let mut h = H3Index(H3_INIT);
  set_mode(&mut h, H3_CELL_MODE);
  set_resolution(&mut h, res);

  let out_of_range = |c: &CoordIJK| c.i > MAX_FACE_COORD || c.j > MAX_FACE_COORD || c.k > MAX_FACE_COORD;

  if res == 0 {
    if out_of_range(&fijk.coord) {
      return H3_NULL;
    }
    let Some(base_cell) = face_ijk_to_base_cell(fijk) else {
      return H3_NULL;
    };
    set_base_cell(&mut h, base_cell);
    return h;
  }

  // build the digits from finest to coarsest, ending on the base cell
  let mut fijk_bc = *fijk;
  for r in (0..res).rev() {
    let last = fijk_bc.coord;
    let mut last_center;
    if is_resolution_class_iii(r + 1) {
      fijk_bc.coord.up_ap7();
      last_center = fijk_bc.coord;
      last_center.down_ap7();
    } else {
      fijk_bc.coord.up_ap7r();
      last_center = fijk_bc.coord;
      last_center.down_ap7r();
    }
    set_index_digit(&mut h, r + 1, (last - last_center).normalized().to_digit());
  }

  if out_of_range(&fijk_bc.coord) {
    return H3_NULL;
  }
  let (Some(base_cell), Some(num_rots)) =
    (face_ijk_to_base_cell(&fijk_bc), face_ijk_to_base_cell_ccwrot60(&fijk_bc))
  else {
    return H3_NULL;
  };
  set_base_cell(&mut h, base_cell);

  if is_base_cell_pentagon(base_cell) {
    // force rotation out of the missing k-axes sub-sequence
    if leading_non_zero_digit(h) == Direction::KAxes {
      h = if base_cell_is_cw_offset(base_cell, fijk_bc.face) {
        h3_rotate60_cw(h)
      } else {
        h3_rotate60_ccw(h)
      };
    }
    for _ in 0..num_rots {
      h = h3_rotate_pent60_ccw(h);
    }
  } else {
    for _ in 0..num_rots {
      h = h3_rotate60_ccw(h);
    }
  }
  h
}

/// Applies the digits of `h` to `fijk`, which holds the base cell's home
/// address. Returns whether the result may lie past the home face.
fn h3_to_face_ijk_with_initialized_fijk(h: H3Index, fijk: &mut FaceIJK) -> bool {
  let res = get_resolution(h);
  let possible_overage =
    is_base_cell_pentagon(get_base_cell(h)) || (res != 0 && fijk.coord != CoordIJK::new(0, 0, 0));

  for r in 1..=res {
    if is_resolution_class_iii(r) {
      fijk.coord.down_ap7();
    } else {
      fijk.coord.down_ap7r();
    }
    fijk.coord.step(get_index_digit(h, r));
  }
  possible_overage
}

/// Decodes a cell index into its `FaceIJK` address, moving it onto the
/// adjacent face when it lies past the edge of its base cell's home face.
pub(crate) fn h3_to_face_ijk(h: H3Index) -> Result<FaceIJK, H3Error> {
  let base_cell = get_base_cell(h);
  let mut fijk = base_cell_home_fijk(base_cell).ok_or(H3Error::CellInvalid)?;

  let is_pent = is_base_cell_pentagon(base_cell);
  let mut digits = h;
  if is_pent && leading_non_zero_digit(digits) == Direction::IkAxes {
    digits = h3_rotate60_cw(digits);
  }

  if !h3_to_face_ijk_with_initialized_fijk(digits, &mut fijk) {
    return Ok(fijk);
  }

  // overage is resolved on the Class II grid
  let orig_ijk = fijk.coord;
  let cell_res = get_resolution(h);
  let mut res = cell_res;
  if is_resolution_class_iii(res) {
    fijk.coord.down_ap7r();
    res += 1;
  }

  let pent_leading_4 = is_pent && leading_non_zero_digit(digits) == Direction::IAxes;
  if fijk.adjust_overage_class_ii(res, pent_leading_4, false) == Overage::NoOverage {
    if res != cell_res {
      fijk.coord = orig_ijk;
    }
    return Ok(fijk);
  }

  // pentagons may cross a second face edge
  if is_pent {
    while fijk.adjust_overage_class_ii(res, false, false) != Overage::NoOverage {}
  }
  if res != cell_res {
    fijk.coord.up_ap7r();
  }
  Ok(fijk)
}
