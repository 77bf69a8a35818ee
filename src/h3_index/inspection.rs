use super::{
  get_base_cell, get_high_bit, get_index_digit, get_mode, get_reserved_bits, get_resolution, is_resolution_class_iii,
  leading_non_zero_digit, set_h3_index,
};
use crate::base_cells::is_base_cell_pentagon;
use crate::constants::{H3_CELL_MODE, MAX_H3_RES, NUM_BASE_CELLS, NUM_PENTAGONS};
use crate::types::{Direction, H3Error, H3Index, H3_NULL};

/// Whether a cell index is a pentagon: its base cell is a pentagon and every
/// digit is center. The index itself is not validated.
#[must_use]
pub fn is_pentagon(h: H3Index) -> bool {
  is_base_cell_pentagon(get_base_cell(h)) && leading_non_zero_digit(h) == Direction::Center
}

/// Base cell number (0-121) of a cell index.
#[inline]
#[must_use]
pub fn get_base_cell_number(h: H3Index) -> i32 {
  get_base_cell(h)
}

/// Whether the cell's resolution is Class III (odd).
#[inline]
#[must_use]
pub fn is_res_class_iii(h: H3Index) -> bool {
  is_resolution_class_iii(get_resolution(h))
}

/// Validates a cell index.
///
/// A valid cell has the cell mode, no high or reserved bits, an existing
/// base cell, a digit from 0 to 6 at each resolution up to its own and 7 past
/// it, and does not lie in the deleted K subsequence of a pentagon.
#[must_use]
pub fn is_valid_cell(h: H3Index) -> bool {
  if get_high_bit(h) != 0 || get_mode(h) != H3_CELL_MODE || get_reserved_bits(h) != 0 {
    return false;
  }

  let base_cell = get_base_cell(h);
  if base_cell >= NUM_BASE_CELLS {
    return false;
  }

  let res = get_resolution(h);
  if (1..=res).any(|r| get_index_digit(h, r) == Direction::InvalidDigit) {
    return false;
  }
  if !(res + 1..=MAX_H3_RES).all(|r| get_index_digit(h, r) == Direction::InvalidDigit) {
    return false;
  }

  !(is_base_cell_pentagon(base_cell) && leading_non_zero_digit(h) == Direction::KAxes)
}

/// All 122 resolution 0 cells, in base cell order.
#[must_use]
pub fn get_res0_cells() -> [H3Index; NUM_BASE_CELLS as usize] {
  std::array::from_fn(|bc| set_h3_index(0, bc as i32, Direction::Center))
}

/// The twelve pentagons at `res`, in base cell order.
pub fn get_pentagons(res: i32) -> Result<[H3Index; NUM_PENTAGONS], H3Error> {
  if !(0..=MAX_H3_RES).contains(&res) {
    return Err(H3Error::ResDomain);
  }
  let mut out = [H3_NULL; NUM_PENTAGONS];
  let pentagons = (0..NUM_BASE_CELLS)
    .filter(|&bc| is_base_cell_pentagon(bc))
    .map(|bc| set_h3_index(res, bc, Direction::Center));
  for (slot, pentagon) in out.iter_mut().zip(pentagons) {
    *slot = pentagon;
  }
  Ok(out)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::H3_HIGH_BIT_MASK;
  use crate::h3_index::{set_index_digit, set_mode, set_reserved_bits};

  #[test]
  fn test_is_valid_cell_resolutions() {
    for res in 0..=MAX_H3_RES {
      let h = set_h3_index(res, 0, Direction::Center);
      assert!(is_valid_cell(h), "resolution {res}");
    }
    assert!(is_valid_cell(H3Index(0x85283473fffffff)));
    assert!(is_valid_cell(set_h3_index(5, 12, Direction::KAxes)));
  }

  #[test]
  fn test_is_valid_cell_invalid_digits() {
    let mut h = set_h3_index(1, 0, Direction::Center);
    set_index_digit(&mut h, 1, Direction::InvalidDigit);
    assert!(!is_valid_cell(h), "used digit set to 7");

    let mut h = set_h3_index(1, 0, Direction::Center);
    set_index_digit(&mut h, 2, Direction::Center);
    assert!(!is_valid_cell(h), "unused digit not 7");
  }

  #[test]
  fn test_is_valid_cell_base_cells() {
    for bc in 0..NUM_BASE_CELLS {
      assert!(is_valid_cell(set_h3_index(0, bc, Direction::Center)), "base cell {bc}");
    }
    assert!(!is_valid_cell(set_h3_index(0, NUM_BASE_CELLS, Direction::Center)));
  }

  #[test]
  fn test_is_valid_cell_modes_and_bits() {
    for mode in 0..=15u8 {
      let mut h = set_h3_index(0, 0, Direction::Center);
      set_mode(&mut h, mode);
      assert_eq!(is_valid_cell(h), mode == H3_CELL_MODE, "mode {mode}");
    }

    let mut h = set_h3_index(0, 0, Direction::Center);
    set_reserved_bits(&mut h, 1);
    assert!(!is_valid_cell(h), "reserved bits set");

    let h = H3Index(set_h3_index(0, 0, Direction::Center).0 | H3_HIGH_BIT_MASK);
    assert!(!is_valid_cell(h), "high bit set");

    assert!(!is_valid_cell(H3_NULL));
  }

  #[test]
  fn test_is_valid_cell_deleted_k_subsequence() {
    assert!(!is_valid_cell(set_h3_index(1, 4, Direction::KAxes)));
    assert!(is_valid_cell(set_h3_index(1, 4, Direction::JAxes)));

    let mut h = set_h3_index(3, 14, Direction::Center);
    set_index_digit(&mut h, 3, Direction::KAxes);
    assert!(!is_valid_cell(h), "first non-zero digit is K");
    set_index_digit(&mut h, 2, Direction::JAxes);
    assert!(is_valid_cell(h), "K after a non-zero digit is allowed");
  }

  #[test]
  fn test_is_pentagon() {
    assert!(is_pentagon(set_h3_index(0, 4, Direction::Center)));
    assert!(is_pentagon(set_h3_index(1, 4, Direction::Center)));
    assert!(is_pentagon(H3Index(0x8009fffffffffff)));
    assert!(!is_pentagon(set_h3_index(1, 4, Direction::JAxes)), "child off the center");
    assert!(!is_pentagon(set_h3_index(2, 0, Direction::Center)), "hexagon base cell");
    assert!(!is_pentagon(H3_NULL));
  }

  #[test]
  fn test_get_res0_cells() {
    let cells = get_res0_cells();
    for (bc, &cell) in cells.iter().enumerate() {
      assert!(is_valid_cell(cell), "res 0 cell {bc}");
      assert_eq!(get_resolution(cell), 0);
      assert_eq!(get_base_cell_number(cell), bc as i32);
    }
  }

  #[test]
  fn test_get_pentagons() {
    for res in 0..=MAX_H3_RES {
      let pentagons = get_pentagons(res).unwrap();
      for pentagon in pentagons {
        assert!(is_valid_cell(pentagon), "{pentagon:x} is valid");
        assert!(is_pentagon(pentagon), "{pentagon:x} is a pentagon");
        assert_eq!(get_resolution(pentagon), res);
      }
    }
    assert_eq!(get_pentagons(-1), Err(H3Error::ResDomain));
    assert_eq!(get_pentagons(16), Err(H3Error::ResDomain));
  }

  #[test]
  fn test_is_res_class_iii() {
    for res in 0..=MAX_H3_RES {
      assert_eq!(is_res_class_iii(set_h3_index(res, 0, Direction::Center)), res % 2 == 1);
    }
  }
}
