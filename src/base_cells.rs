//! Resolution 0 base cell lookup tables and helpers.

use crate::constants::{NUM_BASE_CELLS, NUM_ICOSA_FACES};
use crate::types::{CoordIJK, FaceIJK};

/// Information on a single base cell.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BaseCellData {
  /// Home face and normalized ijk coordinates on that face.
  pub home_fijk: FaceIJK,
  /// Whether the base cell is a pentagon.
  pub is_pentagon: bool,
  /// For pentagons, the two clockwise offset faces; `-1` for none.
  pub cw_offset_pent: [i32; 2],
}

const fn bcd(face: i32, i: i32, j: i32, k: i32, is_pentagon: bool, cw_offset_pent: [i32; 2]) -> BaseCellData {
  BaseCellData {
    home_fijk: FaceIJK {
      face,
      coord: CoordIJK::new(i, j, k),
    },
    is_pentagon,
    cw_offset_pent,
  }
}

/// Base cell number and ccw rotation into that cell's coordinate system.
#[derive(Debug, Clone, Copy)]
struct BaseCellRotation {
  base_cell: i32,
  ccw_rot60: i32,
}

const fn bcr(base_cell: i32, ccw_rot60: i32) -> BaseCellRotation {
  BaseCellRotation { base_cell, ccw_rot60 }
}

/// Marks a missing neighbor: pentagons have none in the k direction.
pub(crate) const INVALID_BASE_CELL: i32 = 127;

/// Largest IJK component of a resolution 0 cell on a face.
pub(crate) const MAX_FACE_COORD: i32 = 2;

/// Neighboring base cell in each IJK direction, indexed by digit.
#[rustfmt::skip]
pub(crate) const BASE_CELL_NEIGHBORS: [[i32; 7]; NUM_BASE_CELLS as usize] = [
  [0, 1, 5, 2, 4, 3, 8],
  [1, 7, 6, 9, 0, 3, 2],
  [2, 6, 10, 11, 0, 1, 5],
  [3, 13, 1, 7, 4, 12, 0],
  [4, INVALID_BASE_CELL, 15, 8, 3, 0, 12], // 4 (pentagon)
  [5, 2, 18, 10, 8, 0, 16],
  [6, 14, 11, 17, 1, 9, 2],
  [7, 21, 9, 19, 3, 13, 1],
  [8, 5, 22, 16, 4, 0, 15],
  [9, 19, 14, 20, 1, 7, 6],
  [10, 11, 24, 23, 5, 2, 18],
  [11, 17, 23, 25, 2, 6, 10],
  [12, 28, 13, 26, 4, 15, 3],
  [13, 26, 21, 29, 3, 12, 7],
  [14, INVALID_BASE_CELL, 17, 27, 9, 20, 6], // 14 (pentagon)
  [15, 22, 28, 31, 4, 8, 12],
  [16, 18, 33, 30, 8, 5, 22],
  [17, 11, 14, 6, 35, 25, 27],
  [18, 24, 30, 32, 5, 10, 16],
  [19, 34, 20, 36, 7, 21, 9],
  [20, 14, 19, 9, 40, 27, 36],
  [21, 38, 19, 34, 13, 29, 7],
  [22, 16, 41, 33, 15, 8, 31],
  [23, 24, 11, 10, 39, 37, 25],
  [24, INVALID_BASE_CELL, 32, 37, 10, 23, 18], // 24 (pentagon)
  [25, 23, 17, 11, 45, 39, 35],
  [26, 42, 29, 43, 12, 28, 13],
  [27, 40, 35, 46, 14, 20, 17],
  [28, 31, 42, 44, 12, 15, 26],
  [29, 43, 38, 47, 13, 26, 21],
  [30, 32, 48, 50, 16, 18, 33],
  [31, 41, 44, 53, 15, 22, 28],
  [32, 30, 24, 18, 52, 50, 37],
  [33, 30, 49, 48, 22, 16, 41],
  [34, 19, 38, 21, 54, 36, 51],
  [35, 46, 45, 56, 17, 27, 25],
  [36, 20, 34, 19, 55, 40, 54],
  [37, 39, 52, 57, 24, 23, 32],
  [38, INVALID_BASE_CELL, 34, 51, 29, 47, 21], // 38 (pentagon)
  [39, 37, 25, 23, 59, 57, 45],
  [40, 27, 36, 20, 60, 46, 55],
  [41, 49, 53, 61, 22, 33, 31],
  [42, 58, 43, 62, 28, 44, 26],
  [43, 62, 47, 64, 26, 42, 29],
  [44, 53, 58, 65, 28, 31, 42],
  [45, 39, 35, 25, 63, 59, 56],
  [46, 60, 56, 68, 27, 40, 35],
  [47, 38, 43, 29, 69, 51, 64],
  [48, 49, 30, 33, 67, 66, 50],
  [49, INVALID_BASE_CELL, 61, 66, 33, 48, 41], // 49 (pentagon)
  [50, 48, 32, 30, 70, 67, 52],
  [51, 69, 54, 71, 38, 47, 34],
  [52, 57, 70, 74, 32, 37, 50],
  [53, 61, 65, 75, 31, 41, 44],
  [54, 71, 55, 73, 34, 51, 36],
  [55, 40, 54, 36, 72, 60, 73],
  [56, 68, 63, 77, 35, 46, 45],
  [57, 59, 74, 78, 37, 39, 52],
  [58, INVALID_BASE_CELL, 62, 76, 44, 65, 42], // 58 (pentagon)
  [59, 63, 78, 79, 39, 45, 57],
  [60, 72, 68, 80, 40, 55, 46],
  [61, 53, 49, 41, 81, 75, 66],
  [62, 43, 58, 42, 82, 64, 76],
  [63, INVALID_BASE_CELL, 56, 45, 79, 59, 77], // 63 (pentagon)
  [64, 47, 62, 43, 84, 69, 82],
  [65, 58, 53, 44, 86, 76, 75],
  [66, 67, 81, 85, 49, 48, 61],
  [67, 66, 50, 48, 87, 85, 70],
  [68, 56, 60, 46, 90, 77, 80],
  [69, 51, 64, 47, 89, 71, 84],
  [70, 67, 52, 50, 83, 87, 74],
  [71, 89, 73, 91, 51, 69, 54],
  [72, INVALID_BASE_CELL, 73, 55, 80, 60, 88], // 72 (pentagon)
  [73, 91, 72, 88, 54, 71, 55],
  [74, 78, 83, 92, 52, 57, 70],
  [75, 65, 61, 53, 94, 86, 81],
  [76, 86, 82, 96, 58, 65, 62],
  [77, 63, 68, 56, 93, 79, 90],
  [78, 74, 59, 57, 95, 92, 79],
  [79, 78, 63, 59, 93, 95, 77],
  [80, 68, 72, 60, 99, 90, 88],
  [81, 85, 94, 101, 61, 66, 75],
  [82, 96, 84, 98, 62, 76, 64],
  [83, INVALID_BASE_CELL, 74, 70, 100, 87, 92], // 83 (pentagon)
  [84, 69, 82, 64, 97, 89, 98],
  [85, 87, 101, 102, 66, 67, 81],
  [86, 76, 75, 65, 104, 96, 94],
  [87, 83, 102, 100, 67, 70, 85],
  [88, 72, 91, 73, 99, 80, 105],
  [89, 97, 91, 103, 69, 84, 71],
  [90, 77, 80, 68, 106, 93, 99],
  [91, 73, 89, 71, 105, 88, 103],
  [92, 83, 78, 74, 108, 100, 95],
  [93, 79, 90, 77, 109, 95, 106],
  [94, 86, 81, 75, 107, 104, 101],
  [95, 92, 79, 78, 109, 108, 93],
  [96, 104, 98, 110, 76, 86, 82],
  [97, INVALID_BASE_CELL, 98, 84, 103, 89, 111], // 97 (pentagon)
  [98, 110, 97, 111, 82, 96, 84],
  [99, 80, 105, 88, 106, 90, 113],
  [100, 102, 83, 87, 108, 114, 92],
  [101, 102, 107, 112, 81, 85, 94],
  [102, 101, 87, 85, 114, 112, 100],
  [103, 91, 97, 89, 116, 105, 111],
  [104, 107, 110, 115, 86, 94, 96],
  [105, 88, 103, 91, 113, 99, 116],
  [106, 93, 99, 90, 117, 109, 113],
  [107, INVALID_BASE_CELL, 101, 94, 115, 104, 112], // 107 (pentagon)
  [108, 100, 95, 92, 118, 114, 109],
  [109, 108, 93, 95, 117, 118, 106],
  [110, 98, 104, 96, 119, 111, 115],
  [111, 97, 110, 98, 116, 103, 119],
  [112, 107, 102, 101, 120, 115, 114],
  [113, 99, 116, 105, 117, 106, 121],
  [114, 112, 100, 102, 118, 120, 108],
  [115, 110, 107, 104, 120, 119, 112],
  [116, 103, 119, 111, 113, 105, 121],
  [117, INVALID_BASE_CELL, 109, 118, 113, 121, 106], // 117 (pentagon)
  [118, 120, 108, 114, 117, 121, 109],
  [119, 111, 115, 110, 121, 116, 120],
  [120, 115, 114, 112, 121, 119, 118],
  [121, 116, 120, 119, 117, 113, 118],
];

/// Number of ccw rotations into the neighboring base cell's coordinate
/// system, in each IJK direction.
#[rustfmt::skip]
pub(crate) const BASE_CELL_NEIGHBOR_60CCW_ROTS: [[i32; 7]; NUM_BASE_CELLS as usize] = [
  [0, 5, 0, 0, 1, 5, 1],
  [0, 0, 1, 0, 1, 0, 1],
  [0, 0, 0, 0, 0, 5, 0],
  [0, 5, 0, 0, 2, 5, 1],
  [0, -1, 1, 0, 3, 4, 2],
  [0, 0, 1, 0, 1, 0, 1],
  [0, 0, 0, 3, 5, 5, 0],
  [0, 0, 0, 0, 0, 5, 0],
  [0, 5, 0, 0, 0, 5, 1],
  [0, 0, 1, 3, 0, 0, 1],
  [0, 0, 1, 3, 0, 0, 1],
  [0, 3, 3, 3, 0, 0, 0],
  [0, 5, 0, 0, 3, 5, 1],
  [0, 0, 1, 0, 1, 0, 1],
  [0, -1, 3, 0, 5, 2, 0],
  [0, 5, 0, 0, 4, 5, 1],
  [0, 0, 0, 0, 0, 5, 0],
  [0, 3, 3, 3, 3, 0, 3],
  [0, 0, 0, 3, 5, 5, 0],
  [0, 3, 3, 3, 0, 0, 0],
  [0, 3, 3, 3, 0, 3, 0],
  [0, 0, 0, 3, 5, 5, 0],
  [0, 0, 1, 0, 1, 0, 1],
  [0, 3, 3, 3, 0, 3, 0],
  [0, -1, 3, 0, 5, 2, 0],
  [0, 0, 0, 3, 0, 0, 3],
  [0, 0, 0, 0, 0, 5, 0],
  [0, 3, 0, 0, 0, 3, 3],
  [0, 0, 1, 0, 1, 0, 1],
  [0, 0, 1, 3, 0, 0, 1],
  [0, 3, 3, 3, 0, 0, 0],
  [0, 0, 0, 0, 0, 5, 0],
  [0, 3, 3, 3, 3, 0, 3],
  [0, 0, 1, 3, 0, 0, 1],
  [0, 3, 3, 3, 3, 0, 3],
  [0, 0, 3, 0, 3, 0, 3],
  [0, 0, 0, 3, 0, 0, 3],
  [0, 3, 0, 0, 0, 3, 3],
  [0, -1, 3, 0, 5, 2, 0],
  [0, 3, 0, 0, 3, 3, 0],
  [0, 3, 0, 0, 3, 3, 0],
  [0, 0, 0, 3, 5, 5, 0],
  [0, 0, 0, 3, 5, 5, 0],
  [0, 3, 3, 3, 0, 0, 0],
  [0, 0, 1, 3, 0, 0, 1],
  [0, 0, 3, 0, 0, 3, 3],
  [0, 0, 0, 3, 0, 3, 0],
  [0, 3, 3, 3, 0, 3, 0],
  [0, 3, 3, 3, 0, 3, 0],
  [0, -1, 3, 0, 5, 2, 0],
  [0, 0, 0, 3, 0, 0, 3],
  [0, 3, 0, 0, 0, 3, 3],
  [0, 0, 3, 0, 3, 0, 3],
  [0, 3, 3, 3, 0, 0, 0],
  [0, 0, 3, 0, 3, 0, 3],
  [0, 0, 3, 0, 0, 3, 3],
  [0, 3, 3, 3, 0, 0, 3],
  [0, 0, 0, 3, 0, 3, 0],
  [0, -1, 3, 0, 5, 2, 0],
  [0, 3, 3, 3, 3, 3, 0],
  [0, 3, 3, 3, 3, 3, 0],
  [0, 3, 3, 3, 3, 0, 3],
  [0, 3, 3, 3, 3, 0, 3],
  [0, -1, 3, 0, 5, 2, 0],
  [0, 0, 0, 3, 0, 0, 3],
  [0, 3, 3, 3, 0, 3, 0],
  [0, 3, 0, 0, 0, 3, 3],
  [0, 3, 0, 0, 3, 3, 0],
  [0, 3, 3, 3, 0, 0, 0],
  [0, 3, 0, 0, 3, 3, 0],
  [0, 0, 3, 0, 0, 3, 3],
  [0, 0, 0, 3, 0, 3, 0],
  [0, -1, 3, 0, 5, 2, 0],
  [0, 3, 3, 3, 0, 0, 3],
  [0, 3, 3, 3, 0, 0, 3],
  [0, 0, 0, 3, 0, 0, 3],
  [0, 3, 0, 0, 0, 3, 3],
  [0, 0, 0, 3, 0, 5, 0],
  [0, 3, 3, 3, 0, 0, 0],
  [0, 0, 1, 3, 1, 0, 1],
  [0, 0, 1, 3, 1, 0, 1],
  [0, 0, 3, 0, 3, 0, 3],
  [0, 0, 3, 0, 3, 0, 3],
  [0, -1, 3, 0, 5, 2, 0],
  [0, 0, 3, 0, 0, 3, 3],
  [0, 0, 0, 3, 0, 3, 0],
  [0, 3, 0, 0, 3, 3, 0],
  [0, 3, 3, 3, 3, 3, 0],
  [0, 0, 0, 3, 0, 5, 0],
  [0, 3, 3, 3, 3, 3, 0],
  [0, 0, 0, 0, 0, 0, 1],
  [0, 3, 3, 3, 0, 0, 0],
  [0, 0, 0, 3, 0, 5, 0],
  [0, 5, 0, 0, 5, 5, 0],
  [0, 0, 3, 0, 0, 3, 3],
  [0, 0, 0, 0, 0, 0, 1],
  [0, 0, 0, 3, 0, 3, 0],
  [0, -1, 3, 0, 5, 2, 0],
  [0, 3, 3, 3, 0, 0, 3],
  [0, 5, 0, 0, 5, 5, 0],
  [0, 0, 1, 3, 1, 0, 1],
  [0, 3, 3, 3, 0, 0, 3],
  [0, 3, 3, 3, 0, 0, 0],
  [0, 0, 1, 3, 1, 0, 1],
  [0, 3, 3, 3, 3, 3, 0],
  [0, 0, 0, 0, 0, 0, 1],
  [0, 0, 1, 0, 3, 5, 1],
  [0, -1, 3, 0, 5, 2, 0],
  [0, 5, 0, 0, 5, 5, 0],
  [0, 0, 1, 0, 4, 5, 1],
  [0, 3, 3, 3, 0, 0, 0],
  [0, 0, 0, 3, 0, 5, 0],
  [0, 0, 0, 3, 0, 5, 0],
  [0, 0, 1, 0, 2, 5, 1],
  [0, 0, 0, 0, 0, 0, 1],
  [0, 0, 1, 3, 1, 0, 1],
  [0, 5, 0, 0, 5, 5, 0],
  [0, -1, 1, 0, 3, 4, 2],
  [0, 0, 1, 0, 0, 5, 1],
  [0, 0, 0, 0, 0, 0, 1],
  [0, 5, 0, 0, 5, 5, 0],
  [0, 0, 1, 0, 1, 5, 1],
];

/// Home face, coordinates and pentagon data of every base cell.
#[rustfmt::skip]
pub(crate) const BASE_CELL_DATA: [BaseCellData; NUM_BASE_CELLS as usize] = [
  bcd(1, 1, 0, 0, false, [-1, -1]), // 0
  bcd(2, 1, 1, 0, false, [-1, -1]),
  bcd(1, 0, 0, 0, false, [-1, -1]),
  bcd(2, 1, 0, 0, false, [-1, -1]),
  bcd(0, 2, 0, 0, true, [-1, -1]),
  bcd(1, 1, 1, 0, false, [-1, -1]),
  bcd(1, 0, 0, 1, false, [-1, -1]),
  bcd(2, 0, 0, 0, false, [-1, -1]),
  bcd(0, 1, 0, 0, false, [-1, -1]),
  bcd(2, 0, 1, 0, false, [-1, -1]),
  bcd(1, 0, 1, 0, false, [-1, -1]), // 10
  bcd(1, 0, 1, 1, false, [-1, -1]),
  bcd(3, 1, 0, 0, false, [-1, -1]),
  bcd(3, 1, 1, 0, false, [-1, -1]),
  bcd(11, 2, 0, 0, true, [2, 6]),
  bcd(4, 1, 0, 0, false, [-1, -1]),
  bcd(0, 0, 0, 0, false, [-1, -1]),
  bcd(6, 0, 1, 0, false, [-1, -1]),
  bcd(0, 0, 0, 1, false, [-1, -1]),
  bcd(2, 0, 1, 1, false, [-1, -1]),
  bcd(7, 0, 0, 1, false, [-1, -1]), // 20
  bcd(2, 0, 0, 1, false, [-1, -1]),
  bcd(0, 1, 1, 0, false, [-1, -1]),
  bcd(6, 0, 0, 1, false, [-1, -1]),
  bcd(10, 2, 0, 0, true, [1, 5]),
  bcd(6, 0, 0, 0, false, [-1, -1]),
  bcd(3, 0, 0, 0, false, [-1, -1]),
  bcd(11, 1, 0, 0, false, [-1, -1]),
  bcd(4, 1, 1, 0, false, [-1, -1]),
  bcd(3, 0, 1, 0, false, [-1, -1]),
  bcd(0, 0, 1, 1, false, [-1, -1]), // 30
  bcd(4, 0, 0, 0, false, [-1, -1]),
  bcd(5, 0, 1, 0, false, [-1, -1]),
  bcd(0, 0, 1, 0, false, [-1, -1]),
  bcd(7, 0, 1, 0, false, [-1, -1]),
  bcd(11, 1, 1, 0, false, [-1, -1]),
  bcd(7, 0, 0, 0, false, [-1, -1]),
  bcd(10, 1, 0, 0, false, [-1, -1]),
  bcd(12, 2, 0, 0, true, [3, 7]),
  bcd(6, 1, 0, 1, false, [-1, -1]),
  bcd(7, 1, 0, 1, false, [-1, -1]), // 40
  bcd(4, 0, 0, 1, false, [-1, -1]),
  bcd(3, 0, 0, 1, false, [-1, -1]),
  bcd(3, 0, 1, 1, false, [-1, -1]),
  bcd(4, 0, 1, 0, false, [-1, -1]),
  bcd(6, 1, 0, 0, false, [-1, -1]),
  bcd(11, 0, 0, 0, false, [-1, -1]),
  bcd(8, 0, 0, 1, false, [-1, -1]),
  bcd(5, 0, 0, 1, false, [-1, -1]),
  bcd(14, 2, 0, 0, true, [0, 9]),
  bcd(5, 0, 0, 0, false, [-1, -1]), // 50
  bcd(12, 1, 0, 0, false, [-1, -1]),
  bcd(10, 1, 1, 0, false, [-1, -1]),
  bcd(4, 0, 1, 1, false, [-1, -1]),
  bcd(12, 1, 1, 0, false, [-1, -1]),
  bcd(7, 1, 0, 0, false, [-1, -1]),
  bcd(11, 0, 1, 0, false, [-1, -1]),
  bcd(10, 0, 0, 0, false, [-1, -1]),
  bcd(13, 2, 0, 0, true, [4, 8]),
  bcd(10, 0, 0, 1, false, [-1, -1]),
  bcd(11, 0, 0, 1, false, [-1, -1]), // 60
  bcd(9, 0, 1, 0, false, [-1, -1]),
  bcd(8, 0, 1, 0, false, [-1, -1]),
  bcd(6, 2, 0, 0, true, [11, 15]),
  bcd(8, 0, 0, 0, false, [-1, -1]),
  bcd(9, 0, 0, 1, false, [-1, -1]),
  bcd(14, 1, 0, 0, false, [-1, -1]),
  bcd(5, 1, 0, 1, false, [-1, -1]),
  bcd(16, 0, 1, 1, false, [-1, -1]),
  bcd(8, 1, 0, 1, false, [-1, -1]),
  bcd(5, 1, 0, 0, false, [-1, -1]), // 70
  bcd(12, 0, 0, 0, false, [-1, -1]),
  bcd(7, 2, 0, 0, true, [12, 16]),
  bcd(12, 0, 1, 0, false, [-1, -1]),
  bcd(10, 0, 1, 0, false, [-1, -1]),
  bcd(9, 0, 0, 0, false, [-1, -1]),
  bcd(13, 1, 0, 0, false, [-1, -1]),
  bcd(16, 0, 0, 1, false, [-1, -1]),
  bcd(15, 0, 1, 1, false, [-1, -1]),
  bcd(15, 0, 1, 0, false, [-1, -1]),
  bcd(16, 0, 1, 0, false, [-1, -1]), // 80
  bcd(14, 1, 1, 0, false, [-1, -1]),
  bcd(13, 1, 1, 0, false, [-1, -1]),
  bcd(5, 2, 0, 0, true, [10, 19]),
  bcd(8, 1, 0, 0, false, [-1, -1]),
  bcd(14, 0, 0, 0, false, [-1, -1]),
  bcd(9, 1, 0, 1, false, [-1, -1]),
  bcd(14, 0, 0, 1, false, [-1, -1]),
  bcd(17, 0, 0, 1, false, [-1, -1]),
  bcd(12, 0, 0, 1, false, [-1, -1]),
  bcd(16, 0, 0, 0, false, [-1, -1]), // 90
  bcd(17, 0, 1, 1, false, [-1, -1]),
  bcd(15, 0, 0, 1, false, [-1, -1]),
  bcd(16, 1, 0, 1, false, [-1, -1]),
  bcd(9, 1, 0, 0, false, [-1, -1]),
  bcd(15, 0, 0, 0, false, [-1, -1]),
  bcd(13, 0, 0, 0, false, [-1, -1]),
  bcd(8, 2, 0, 0, true, [13, 17]),
  bcd(13, 0, 1, 0, false, [-1, -1]),
  bcd(17, 1, 0, 1, false, [-1, -1]),
  bcd(19, 0, 1, 0, false, [-1, -1]), // 100
  bcd(14, 0, 1, 0, false, [-1, -1]),
  bcd(19, 0, 1, 1, false, [-1, -1]),
  bcd(17, 0, 1, 0, false, [-1, -1]),
  bcd(13, 0, 0, 1, false, [-1, -1]),
  bcd(17, 0, 0, 0, false, [-1, -1]),
  bcd(16, 1, 0, 0, false, [-1, -1]),
  bcd(9, 2, 0, 0, true, [14, 18]),
  bcd(15, 1, 0, 1, false, [-1, -1]),
  bcd(15, 1, 0, 0, false, [-1, -1]),
  bcd(18, 0, 1, 1, false, [-1, -1]), // 110
  bcd(18, 0, 0, 1, false, [-1, -1]),
  bcd(19, 0, 0, 1, false, [-1, -1]),
  bcd(17, 1, 0, 0, false, [-1, -1]),
  bcd(19, 0, 0, 0, false, [-1, -1]),
  bcd(18, 0, 1, 0, false, [-1, -1]),
  bcd(18, 1, 0, 1, false, [-1, -1]),
  bcd(19, 2, 0, 0, true, [-1, -1]),
  bcd(19, 1, 0, 0, false, [-1, -1]),
  bcd(18, 0, 0, 0, false, [-1, -1]),
  bcd(19, 1, 0, 1, false, [-1, -1]), // 120
  bcd(18, 1, 0, 0, false, [-1, -1]),
];

/// Base cell and rotation at each resolution 0 IJK+ coordinate of each
/// face, `[face][i][j][k]` with coordinates from 0 to `MAX_FACE_COORD`.
#[rustfmt::skip]
const FACE_IJK_BASE_CELLS: [[[[BaseCellRotation; 3]; 3]; 3]; NUM_ICOSA_FACES as usize] = [
  // face 0
  [
    [[bcr(16, 0), bcr(18, 0), bcr(24, 0)], [bcr(33, 0), bcr(30, 0), bcr(32, 3)], [bcr(49, 1), bcr(48, 3), bcr(50, 3)]],
    [[bcr(8, 0), bcr(5, 5), bcr(10, 5)], [bcr(22, 0), bcr(16, 0), bcr(18, 0)], [bcr(41, 1), bcr(33, 0), bcr(30, 0)]],
    [[bcr(4, 0), bcr(0, 5), bcr(2, 5)], [bcr(15, 1), bcr(8, 0), bcr(5, 5)], [bcr(31, 1), bcr(22, 0), bcr(16, 0)]],
  ],
  // face 1
  [
    [[bcr(2, 0), bcr(6, 0), bcr(14, 0)], [bcr(10, 0), bcr(11, 0), bcr(17, 3)], [bcr(24, 1), bcr(23, 3), bcr(25, 3)]],
    [[bcr(0, 0), bcr(1, 5), bcr(9, 5)], [bcr(5, 0), bcr(2, 0), bcr(6, 0)], [bcr(18, 1), bcr(10, 0), bcr(11, 0)]],
    [[bcr(4, 1), bcr(3, 5), bcr(7, 5)], [bcr(8, 1), bcr(0, 0), bcr(1, 5)], [bcr(16, 1), bcr(5, 0), bcr(2, 0)]],
  ],
  // face 2
  [
    [[bcr(7, 0), bcr(21, 0), bcr(38, 0)], [bcr(9, 0), bcr(19, 0), bcr(34, 3)], [bcr(14, 1), bcr(20, 3), bcr(36, 3)]],
    [[bcr(3, 0), bcr(13, 5), bcr(29, 5)], [bcr(1, 0), bcr(7, 0), bcr(21, 0)], [bcr(6, 1), bcr(9, 0), bcr(19, 0)]],
    [[bcr(4, 2), bcr(12, 5), bcr(26, 5)], [bcr(0, 1), bcr(3, 0), bcr(13, 5)], [bcr(2, 1), bcr(1, 0), bcr(7, 0)]],
  ],
  // face 3
  [
    [[bcr(26, 0), bcr(42, 0), bcr(58, 0)], [bcr(29, 0), bcr(43, 0), bcr(62, 3)], [bcr(38, 1), bcr(47, 3), bcr(64, 3)]],
    [[bcr(12, 0), bcr(28, 5), bcr(44, 5)], [bcr(13, 0), bcr(26, 0), bcr(42, 0)], [bcr(21, 1), bcr(29, 0), bcr(43, 0)]],
    [[bcr(4, 3), bcr(15, 5), bcr(31, 5)], [bcr(3, 1), bcr(12, 0), bcr(28, 5)], [bcr(7, 1), bcr(13, 0), bcr(26, 0)]],
  ],
  // face 4
  [
    [[bcr(31, 0), bcr(41, 0), bcr(49, 0)], [bcr(44, 0), bcr(53, 0), bcr(61, 3)], [bcr(58, 1), bcr(65, 3), bcr(75, 3)]],
    [[bcr(15, 0), bcr(22, 5), bcr(33, 5)], [bcr(28, 0), bcr(31, 0), bcr(41, 0)], [bcr(42, 1), bcr(44, 0), bcr(53, 0)]],
    [[bcr(4, 4), bcr(8, 5), bcr(16, 5)], [bcr(12, 1), bcr(15, 0), bcr(22, 5)], [bcr(26, 1), bcr(28, 0), bcr(31, 0)]],
  ],
  // face 5
  [
    [[bcr(50, 0), bcr(48, 0), bcr(49, 3)], [bcr(32, 0), bcr(30, 3), bcr(33, 3)], [bcr(24, 3), bcr(18, 3), bcr(16, 3)]],
    [[bcr(70, 0), bcr(67, 0), bcr(66, 3)], [bcr(52, 3), bcr(50, 0), bcr(48, 0)], [bcr(37, 3), bcr(32, 0), bcr(30, 3)]],
    [[bcr(83, 0), bcr(87, 3), bcr(85, 3)], [bcr(74, 3), bcr(70, 0), bcr(67, 0)], [bcr(57, 1), bcr(52, 3), bcr(50, 0)]],
  ],
  // face 6
  [
    [[bcr(25, 0), bcr(23, 0), bcr(24, 3)], [bcr(17, 0), bcr(11, 3), bcr(10, 3)], [bcr(14, 3), bcr(6, 3), bcr(2, 3)]],
    [[bcr(45, 0), bcr(39, 0), bcr(37, 3)], [bcr(35, 3), bcr(25, 0), bcr(23, 0)], [bcr(27, 3), bcr(17, 0), bcr(11, 3)]],
    [[bcr(63, 0), bcr(59, 3), bcr(57, 3)], [bcr(56, 3), bcr(45, 0), bcr(39, 0)], [bcr(46, 3), bcr(35, 3), bcr(25, 0)]],
  ],
  // face 7
  [
    [[bcr(36, 0), bcr(20, 0), bcr(14, 3)], [bcr(34, 0), bcr(19, 3), bcr(9, 3)], [bcr(38, 3), bcr(21, 3), bcr(7, 3)]],
    [[bcr(55, 0), bcr(40, 0), bcr(27, 3)], [bcr(54, 3), bcr(36, 0), bcr(20, 0)], [bcr(51, 3), bcr(34, 0), bcr(19, 3)]],
    [[bcr(72, 0), bcr(60, 3), bcr(46, 3)], [bcr(73, 3), bcr(55, 0), bcr(40, 0)], [bcr(71, 3), bcr(54, 3), bcr(36, 0)]],
  ],
  // face 8
  [
    [[bcr(64, 0), bcr(47, 0), bcr(38, 3)], [bcr(62, 0), bcr(43, 3), bcr(29, 3)], [bcr(58, 3), bcr(42, 3), bcr(26, 3)]],
    [[bcr(84, 0), bcr(69, 0), bcr(51, 3)], [bcr(82, 3), bcr(64, 0), bcr(47, 0)], [bcr(76, 3), bcr(62, 0), bcr(43, 3)]],
    [[bcr(97, 0), bcr(89, 3), bcr(71, 3)], [bcr(98, 3), bcr(84, 0), bcr(69, 0)], [bcr(96, 3), bcr(82, 3), bcr(64, 0)]],
  ],
  // face 9
  [
    [[bcr(75, 0), bcr(65, 0), bcr(58, 3)], [bcr(61, 0), bcr(53, 3), bcr(44, 3)], [bcr(49, 3), bcr(41, 3), bcr(31, 3)]],
    [[bcr(94, 0), bcr(86, 0), bcr(76, 3)], [bcr(81, 3), bcr(75, 0), bcr(65, 0)], [bcr(66, 3), bcr(61, 0), bcr(53, 3)]],
    [[bcr(107, 0), bcr(104, 3), bcr(96, 3)], [bcr(101, 3), bcr(94, 0), bcr(86, 0)], [bcr(85, 3), bcr(81, 3), bcr(75, 0)]],
  ],
  // face 10
  [
    [[bcr(57, 0), bcr(59, 0), bcr(63, 3)], [bcr(74, 0), bcr(78, 3), bcr(79, 3)], [bcr(83, 3), bcr(92, 3), bcr(95, 3)]],
    [[bcr(37, 0), bcr(39, 3), bcr(45, 3)], [bcr(52, 0), bcr(57, 0), bcr(59, 0)], [bcr(70, 3), bcr(74, 0), bcr(78, 3)]],
    [[bcr(24, 0), bcr(23, 3), bcr(25, 3)], [bcr(32, 3), bcr(37, 0), bcr(39, 3)], [bcr(50, 3), bcr(52, 0), bcr(57, 0)]],
  ],
  // face 11
  [
    [[bcr(46, 0), bcr(60, 0), bcr(72, 3)], [bcr(56, 0), bcr(68, 3), bcr(80, 3)], [bcr(63, 3), bcr(77, 3), bcr(90, 3)]],
    [[bcr(27, 0), bcr(40, 3), bcr(55, 3)], [bcr(35, 0), bcr(46, 0), bcr(60, 0)], [bcr(45, 3), bcr(56, 0), bcr(68, 3)]],
    [[bcr(14, 0), bcr(20, 3), bcr(36, 3)], [bcr(17, 3), bcr(27, 0), bcr(40, 3)], [bcr(25, 3), bcr(35, 0), bcr(46, 0)]],
  ],
  // face 12
  [
    [[bcr(71, 0), bcr(89, 0), bcr(97, 3)], [bcr(73, 0), bcr(91, 3), bcr(103, 3)], [bcr(72, 3), bcr(88, 3), bcr(105, 3)]],
    [[bcr(51, 0), bcr(69, 3), bcr(84, 3)], [bcr(54, 0), bcr(71, 0), bcr(89, 0)], [bcr(55, 3), bcr(73, 0), bcr(91, 3)]],
    [[bcr(38, 0), bcr(47, 3), bcr(64, 3)], [bcr(34, 3), bcr(51, 0), bcr(69, 3)], [bcr(36, 3), bcr(54, 0), bcr(71, 0)]],
  ],
  // face 13
  [
    [[bcr(96, 0), bcr(104, 0), bcr(107, 3)], [bcr(98, 0), bcr(110, 3), bcr(115, 3)], [bcr(97, 3), bcr(111, 3), bcr(119, 3)]],
    [[bcr(76, 0), bcr(86, 3), bcr(94, 3)], [bcr(82, 0), bcr(96, 0), bcr(104, 0)], [bcr(84, 3), bcr(98, 0), bcr(110, 3)]],
    [[bcr(58, 0), bcr(65, 3), bcr(75, 3)], [bcr(62, 3), bcr(76, 0), bcr(86, 3)], [bcr(64, 3), bcr(82, 0), bcr(96, 0)]],
  ],
  // face 14
  [
    [[bcr(85, 0), bcr(87, 0), bcr(83, 3)], [bcr(101, 0), bcr(102, 3), bcr(100, 3)], [bcr(107, 3), bcr(112, 3), bcr(114, 3)]],
    [[bcr(66, 0), bcr(67, 3), bcr(70, 3)], [bcr(81, 0), bcr(85, 0), bcr(87, 0)], [bcr(94, 3), bcr(101, 0), bcr(102, 3)]],
    [[bcr(49, 0), bcr(48, 3), bcr(50, 3)], [bcr(61, 3), bcr(66, 0), bcr(67, 3)], [bcr(75, 3), bcr(81, 0), bcr(85, 0)]],
  ],
  // face 15
  [
    [[bcr(95, 0), bcr(92, 0), bcr(83, 0)], [bcr(79, 0), bcr(78, 0), bcr(74, 3)], [bcr(63, 1), bcr(59, 3), bcr(57, 3)]],
    [[bcr(109, 0), bcr(108, 0), bcr(100, 5)], [bcr(93, 1), bcr(95, 0), bcr(92, 0)], [bcr(77, 1), bcr(79, 0), bcr(78, 0)]],
    [[bcr(117, 4), bcr(118, 5), bcr(114, 5)], [bcr(106, 1), bcr(109, 0), bcr(108, 0)], [bcr(90, 1), bcr(93, 1), bcr(95, 0)]],
  ],
  // face 16
  [
    [[bcr(90, 0), bcr(77, 0), bcr(63, 0)], [bcr(80, 0), bcr(68, 0), bcr(56, 3)], [bcr(72, 1), bcr(60, 3), bcr(46, 3)]],
    [[bcr(106, 0), bcr(93, 0), bcr(79, 5)], [bcr(99, 1), bcr(90, 0), bcr(77, 0)], [bcr(88, 1), bcr(80, 0), bcr(68, 0)]],
    [[bcr(117, 3), bcr(109, 5), bcr(95, 5)], [bcr(113, 1), bcr(106, 0), bcr(93, 0)], [bcr(105, 1), bcr(99, 1), bcr(90, 0)]],
  ],
  // face 17
  [
    [[bcr(105, 0), bcr(88, 0), bcr(72, 0)], [bcr(103, 0), bcr(91, 0), bcr(73, 3)], [bcr(97, 1), bcr(89, 3), bcr(71, 3)]],
    [[bcr(113, 0), bcr(99, 0), bcr(80, 5)], [bcr(116, 1), bcr(105, 0), bcr(88, 0)], [bcr(111, 1), bcr(103, 0), bcr(91, 0)]],
    [[bcr(117, 2), bcr(106, 5), bcr(90, 5)], [bcr(121, 1), bcr(113, 0), bcr(99, 0)], [bcr(119, 1), bcr(116, 1), bcr(105, 0)]],
  ],
  // face 18
  [
    [[bcr(119, 0), bcr(111, 0), bcr(97, 0)], [bcr(115, 0), bcr(110, 0), bcr(98, 3)], [bcr(107, 1), bcr(104, 3), bcr(96, 3)]],
    [[bcr(121, 0), bcr(116, 0), bcr(103, 5)], [bcr(120, 1), bcr(119, 0), bcr(111, 0)], [bcr(112, 1), bcr(115, 0), bcr(110, 0)]],
    [[bcr(117, 1), bcr(113, 5), bcr(105, 5)], [bcr(118, 1), bcr(121, 0), bcr(116, 0)], [bcr(114, 1), bcr(120, 1), bcr(119, 0)]],
  ],
  // face 19
  [
    [[bcr(114, 0), bcr(112, 0), bcr(107, 0)], [bcr(100, 0), bcr(102, 0), bcr(101, 3)], [bcr(83, 1), bcr(87, 3), bcr(85, 3)]],
    [[bcr(118, 0), bcr(120, 0), bcr(115, 5)], [bcr(108, 1), bcr(114, 0), bcr(112, 0)], [bcr(92, 1), bcr(100, 0), bcr(102, 0)]],
    [[bcr(117, 0), bcr(121, 5), bcr(119, 5)], [bcr(109, 1), bcr(118, 0), bcr(120, 0)], [bcr(95, 1), bcr(108, 1), bcr(114, 0)]],
  ],
];

fn base_cell_data(base_cell: i32) -> Option<&'static BaseCellData> {
  BASE_CELL_DATA.get(usize::try_from(base_cell).ok()?)
}

fn face_ijk_lookup(fijk: &FaceIJK) -> Option<&'static BaseCellRotation> {
  let idx = |c: i32| usize::try_from(c).ok();
  FACE_IJK_BASE_CELLS
    .get(idx(fijk.face)?)?
    .get(idx(fijk.coord.i)?)?
    .get(idx(fijk.coord.j)?)?
    .get(idx(fijk.coord.k)?)
}

/// Whether the base cell is one of the twelve pentagons.
#[inline]
#[must_use]
pub(crate) fn is_base_cell_pentagon(base_cell: i32) -> bool {
  base_cell_data(base_cell).is_some_and(|data| data.is_pentagon)
}

/// Whether the base cell is a polar pentagon, whose neighbors are all
/// oriented towards it.
#[inline]
#[must_use]
pub(crate) fn is_base_cell_polar_pentagon(base_cell: i32) -> bool {
  base_cell == 4 || base_cell == 117
}

/// Home face and coordinates of a base cell.
#[inline]
#[must_use]
pub(crate) fn base_cell_home_fijk(base_cell: i32) -> Option<FaceIJK> {
  base_cell_data(base_cell).map(|data| data.home_fijk)
}

/// Base cell at a resolution 0 IJK+ coordinate of a face.
#[inline]
#[must_use]
pub(crate) fn face_ijk_to_base_cell(fijk: &FaceIJK) -> Option<i32> {
  face_ijk_lookup(fijk).map(|entry| entry.base_cell)
}

/// Number of 60 degree ccw rotations from the face's coordinate system into
/// that of the base cell at a resolution 0 IJK+ coordinate.
#[inline]
#[must_use]
pub(crate) fn face_ijk_to_base_cell_ccwrot60(fijk: &FaceIJK) -> Option<i32> {
  face_ijk_lookup(fijk).map(|entry| entry.ccw_rot60)
}

/// Number of 60 degree ccw rotations of a base cell's coordinate system as
/// seen from `face`, or `None` if the base cell does not appear on that face.
#[must_use]
pub(crate) fn base_cell_to_ccwrot60(base_cell: i32, face: i32) -> Option<i32> {
  FACE_IJK_BASE_CELLS
    .get(usize::try_from(face).ok()?)?
    .iter()
    .flatten()
    .flatten()
    .find(|entry| entry.base_cell == base_cell)
    .map(|entry| entry.ccw_rot60)
}

/// Whether `face` is one of the clockwise offset faces of a pentagon base cell.
/// Polar pentagons store `-1` for both slots and so have none.
#[inline]
#[must_use]
pub(crate) fn base_cell_is_cw_offset(base_cell: i32, face: i32) -> bool {
  base_cell_data(base_cell).is_some_and(|data| face >= 0 && data.is_pentagon && data.cw_offset_pent.contains(&face))
}
