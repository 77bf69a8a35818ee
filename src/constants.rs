//! Grid, projection and index layout constants.

use std::f64::consts;

// Mathematical constants
/// pi
pub const M_PI: f64 = consts::PI;
/// pi / 2.0
pub const M_PI_2: f64 = consts::FRAC_PI_2;
/// 2.0 * PI
pub const M_2PI: f64 = 2.0 * consts::PI;
/// pi / 180
pub const M_PI_180: f64 = consts::PI / 180.0;
/// 180 / pi
pub const M_180_PI: f64 = 180.0 / consts::PI;

/// General purpose threshold epsilon.
pub const EPSILON: f64 = 0.000_000_000_000_000_1;

/// Epsilon for comparing degrees, roughly 0.1mm on the ground.
pub const EPSILON_DEG: f64 = 0.000_000_001;
/// Epsilon for comparing radians, roughly 0.1mm on the ground.
pub const EPSILON_RAD: f64 = EPSILON_DEG * M_PI_180;

/// sqrt(3) / 2.0, also known as sin(60 degrees)
pub const M_SQRT3_2: f64 = 0.866_025_403_784_438_6;
/// Square root of 7.
pub const M_SQRT7: f64 = 2.645_751_311_064_590_6;
/// 1 / sqrt(7)
pub const M_RSQRT7: f64 = 1.0 / M_SQRT7;
/// 1 / sin(60 degrees)
pub const M_RSIN60: f64 = 1.0 / M_SQRT3_2;
/// One third
pub const M_ONETHIRD: f64 = 1.0 / 3.0;
/// One seventh
pub const M_ONESEVENTH: f64 = 1.0 / 7.0;

/// Rotation angle between Class II and Class III resolution axes (asin(sqrt(3.0 / 28.0)))
pub const M_AP7_ROT_RADS: f64 = 0.333_473_172_251_832_1;

/// Scaling factor from hex2d resolution 0 unit length (the distance between
/// adjacent cell centers on the plane) to gnomonic unit length.
pub const RES0_U_GNOMONIC: f64 = 0.381_966_011_250_105;
/// Inverse of `RES0_U_GNOMONIC`
pub const INV_RES0_U_GNOMONIC: f64 = 1.0 / RES0_U_GNOMONIC;

// Grid constants

/// Maximum H3 resolution; resolutions are numbered 0 through 15.
pub const MAX_H3_RES: i32 = 15;
/// The number of faces on an icosahedron.
pub const NUM_ICOSA_FACES: i32 = 20;
/// The number of H3 base cells.
pub const NUM_BASE_CELLS: i32 = 122;
/// The number of vertices in a hexagon.
pub const NUM_HEX_VERTS: usize = 6;
/// The number of vertices in a pentagon.
pub const NUM_PENT_VERTS: usize = 5;
/// The number of pentagons per resolution.
pub const NUM_PENTAGONS: usize = 12;
/// Maximum number of cell boundary vertices; worst case is a pentagon with
/// 5 original verts and 5 edge crossings.
pub const MAX_CELL_BNDRY_VERTS: usize = 10;

// Index bit layout

/// The bit offset of the mode in an H3 index.
pub const H3_MODE_OFFSET: u8 = 59;
/// The bit offset of the base cell in an H3 index.
pub const H3_BC_OFFSET: u8 = 45;
/// The bit offset of the resolution in an H3 index.
pub const H3_RES_OFFSET: u8 = 52;
/// The bit offset of the reserved bits in an H3 index. Vertex indexes keep
/// their vertex number here.
pub const H3_RESERVED_OFFSET: u8 = 56;
/// The number of bits in a single H3 resolution digit.
pub const H3_PER_DIGIT_OFFSET: u8 = 3;

/// 1 in the highest bit, 0's everywhere else.
pub const H3_HIGH_BIT_MASK: u64 = 1u64 << 63;
/// 1's in the 4 mode bits, 0's everywhere else.
pub const H3_MODE_MASK: u64 = 0b1111u64 << H3_MODE_OFFSET;
/// 1's in the 7 base cell bits, 0's everywhere else.
pub const H3_BC_MASK: u64 = 0b111_1111u64 << H3_BC_OFFSET;
/// 1's in the 4 resolution bits, 0's everywhere else.
pub const H3_RES_MASK: u64 = 0b1111u64 << H3_RES_OFFSET;
/// 1's in the 3 reserved bits, 0's everywhere else.
pub const H3_RESERVED_MASK: u64 = 0b111u64 << H3_RESERVED_OFFSET;
/// 1's in the 3 bits of a single digit, before shifting.
pub const H3_DIGIT_MASK: u64 = 0b111u64;

// Index modes
/// Mode for H3 cell indexes.
pub const H3_CELL_MODE: u8 = 1;
/// Mode for H3 directed edge indexes.
pub const H3_DIRECTEDEDGE_MODE: u8 = 2;
/// Mode for H3 vertex indexes.
pub const H3_VERTEX_MODE: u8 = 4;

/// H3 index with mode 0, res 0, base cell 0, and 7 for all index digits.
/// Used as the starting point when assembling an index.
pub const H3_INIT: u64 = 35_184_372_088_831;
