// src/coords/face_ijk.rs

use crate::constants::{
  EPSILON, INV_RES0_U_GNOMONIC, MAX_H3_RES, M_AP7_ROT_RADS, M_ONETHIRD, M_RSQRT7, M_SQRT3_2, M_SQRT7, NUM_HEX_VERTS,
  NUM_ICOSA_FACES, NUM_PENT_VERTS, RES0_U_GNOMONIC,
};
use crate::h3_index::is_resolution_class_iii;
use crate::latlng::{geo_az_distance_rads, geo_azimuth_rads, pos_angle_rads};
use crate::types::{CellBoundary, CoordIJK, FaceIJK, LatLng, Vec2d, Vec3d};

/// IJ quadrant in `FACE_NEIGHBORS`.
pub(crate) const IJ: usize = 1;
/// KI quadrant in `FACE_NEIGHBORS`.
pub(crate) const KI: usize = 2;
/// JK quadrant in `FACE_NEIGHBORS`.
pub(crate) const JK: usize = 3;

/// Overage distance table, indexed by Class II resolution. Class III
/// resolutions are looked up at `res + 1`.
#[rustfmt::skip]
const MAX_DIM_BY_CII_RES: [i32; (MAX_H3_RES + 2) as usize] = [
  2, -1, 14, -1, 98, -1, 686, -1, 4802, -1, 33614, -1, 235_298, -1, 1_647_086, -1, 11_529_602,
];

/// Unit scale distance table, indexed like `MAX_DIM_BY_CII_RES`.
#[rustfmt::skip]
const UNIT_SCALE_BY_CII_RES: [i32; (MAX_H3_RES + 2) as usize] = [
  1, -1, 7, -1, 49, -1, 343, -1, 2401, -1, 16807, -1, 117_649, -1, 823_543, -1, 5_764_801,
];

/// How to move into an adjacent face's IJK system.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FaceOrientIJK {
  pub(crate) face: i32,
  /// res 0 translation relative to the primary face
  pub(crate) translate: CoordIJK,
  /// number of 60 degree ccw rotations relative to the primary face
  pub(crate) ccw_rot60: i32,
}

const fn fo(face: i32, i: i32, j: i32, k: i32, ccw_rot60: i32) -> FaceOrientIJK {
  FaceOrientIJK {
    face,
    translate: CoordIJK { i, j, k },
    ccw_rot60,
  }
}

/// Icosahedron face centers in lat/lng radians.
#[rustfmt::skip]
pub(crate) const FACE_CENTER_GEO: [LatLng; NUM_ICOSA_FACES as usize] = [
  LatLng { lat: 0.803_582_649_718_989_94, lng: 1.248_397_419_617_396 },
  LatLng { lat: 1.307_747_883_455_638_2, lng: 2.536_945_009_877_921 },
  LatLng { lat: 1.054_751_253_523_952, lng: -1.347_517_358_900_396_6 },
  LatLng { lat: 0.600_191_595_538_186_8, lng: -0.450_603_909_469_755_75 },
  LatLng { lat: 0.491_715_428_198_773_87, lng: 0.401_988_202_911_306_94 },
  LatLng { lat: 0.172_745_327_415_618_7, lng: 1.678_146_885_280_433_7 },
  LatLng { lat: 0.605_929_321_571_350_7, lng: 2.953_923_329_812_411_6 },
  LatLng { lat: 0.427_370_518_328_979_64, lng: -1.888_876_200_336_285_4 },
  LatLng { lat: -0.079_066_118_549_212_83, lng: -0.733_429_513_380_867_74 },
  LatLng { lat: -0.230_961_644_455_383_64, lng: 0.506_495_587_332_349 },
  LatLng { lat: 0.079_066_118_549_212_83, lng: 2.408_163_140_208_925_5 },
  LatLng { lat: 0.230_961_644_455_383_64, lng: -2.635_097_066_257_444 },
  LatLng { lat: -0.172_745_327_415_618_7, lng: -1.463_445_768_309_359_5 },
  LatLng { lat: -0.605_929_321_571_350_7, lng: -0.187_669_323_777_381_62 },
  LatLng { lat: -0.427_370_518_328_979_64, lng: 1.252_716_453_253_508 },
  LatLng { lat: -0.600_191_595_538_186_8, lng: 2.690_988_744_120_037_5 },
  LatLng { lat: -0.491_715_428_198_773_87, lng: -2.739_604_450_678_486_3 },
  LatLng { lat: -0.803_582_649_718_989_94, lng: -1.893_195_233_972_397 },
  LatLng { lat: -1.307_747_883_455_638_2, lng: -0.604_647_643_711_872_1 },
  LatLng { lat: -1.054_751_253_523_952, lng: 1.794_075_294_689_396_6 },
];

/// Icosahedron face centers as points on the unit sphere.
#[rustfmt::skip]
const FACE_CENTER_POINT: [Vec3d; NUM_ICOSA_FACES as usize] = [
  Vec3d { x: 0.219_930_779_140_460_6, y: 0.658_369_178_027_499_6, z: 0.719_847_537_892_618_2 },
  Vec3d { x: -0.213_923_483_450_142_1, y: 0.147_817_182_955_070_3, z: 0.965_601_793_521_420_5 },
  Vec3d { x: 0.109_262_527_878_479_7, y: -0.481_195_157_287_321, z: 0.869_777_512_128_725_3 },
  Vec3d { x: 0.742_856_730_158_679_1, y: -0.359_394_167_827_802_8, z: 0.564_800_593_651_703_3 },
  Vec3d { x: 0.811_253_470_914_096_9, y: 0.344_895_323_763_938_4, z: 0.472_138_773_641_393 },
  Vec3d { x: -0.105_549_814_961_392_1, y: 0.979_445_729_641_141_3, z: 0.171_887_461_000_936_5 },
  Vec3d { x: -0.807_540_757_997_009_2, y: 0.153_355_248_589_881_8, z: 0.569_526_199_488_268_8 },
  Vec3d { x: -0.284_614_806_978_790_7, y: -0.864_408_097_265_420_6, z: 0.414_479_255_247_354 },
  Vec3d { x: 0.740_562_147_385_448_2, y: -0.667_329_956_456_552_4, z: -0.078_983_764_632_673_77 },
  Vec3d { x: 0.851_230_398_647_429_3, y: 0.472_234_378_858_268_1, z: -0.228_913_738_868_780_8 },
  Vec3d { x: -0.740_562_147_385_448_1, y: 0.667_329_956_456_552_4, z: 0.078_983_764_632_673_77 },
  Vec3d { x: -0.851_230_398_647_429_2, y: -0.472_234_378_858_268_2, z: 0.228_913_738_868_780_8 },
  Vec3d { x: 0.105_549_814_961_391_9, y: -0.979_445_729_641_141_3, z: -0.171_887_461_000_936_5 },
  Vec3d { x: 0.807_540_757_997_009_2, y: -0.153_355_248_589_881_9, z: -0.569_526_199_488_268_8 },
  Vec3d { x: 0.284_614_806_978_790_8, y: 0.864_408_097_265_420_4, z: -0.414_479_255_247_354 },
  Vec3d { x: -0.742_856_730_158_679_1, y: 0.359_394_167_827_802_7, z: -0.564_800_593_651_703_3 },
  Vec3d { x: -0.811_253_470_914_097_1, y: -0.344_895_323_763_938_2, z: -0.472_138_773_641_393 },
  Vec3d { x: -0.219_930_779_140_460_7, y: -0.658_369_178_027_499_6, z: -0.719_847_537_892_618_2 },
  Vec3d { x: 0.213_923_483_450_142, y: -0.147_817_182_955_070_4, z: -0.965_601_793_521_420_5 },
  Vec3d { x: -0.109_262_527_878_479_6, y: 0.481_195_157_287_321, z: -0.869_777_512_128_725_3 },
];

/// Icosahedron face ijk axes as azimuth in radians from face center to
/// vertex 0/1/2 respectively.
#[rustfmt::skip]
const FACE_AXES_AZ_RADS_CII: [[f64; 3]; NUM_ICOSA_FACES as usize] = [
  [5.619_958_268_523_94, 3.525_563_166_130_744_5, 1.431_168_063_737_548_7],
  [5.760_339_081_714_187, 3.665_943_979_320_991_7, 1.571_548_876_927_796],
  [0.780_213_654_393_430_1, 4.969_003_859_179_821, 2.874_608_756_786_625_7],
  [0.430_469_363_979_999_9, 4.619_259_568_766_391, 2.524_864_466_373_195_5],
  [6.130_269_123_335_111, 4.035_874_020_941_916, 1.941_478_918_548_720_3],
  [2.692_877_706_530_643, 0.598_482_604_137_447_1, 4.787_272_808_923_838],
  [2.982_963_003_477_244, 0.888_567_901_084_048_4, 5.077_358_105_870_44],
  [3.532_912_002_790_141, 1.438_516_900_396_945_7, 5.627_307_105_183_337],
  [3.494_305_004_259_568, 1.399_909_901_866_372_9, 5.588_700_106_652_764],
  [3.003_214_169_499_538_4, 0.908_819_067_106_342_9, 5.097_609_271_892_734],
  [5.930_472_956_509_811_6, 3.836_077_854_116_616, 1.741_682_751_723_420_4],
  [0.138_378_484_090_254_85, 4.327_168_688_876_646, 2.232_773_586_483_45],
  [0.448_714_947_059_150_36, 4.637_505_151_845_541_5, 2.543_110_049_452_346],
  [0.158_629_650_112_549_36, 4.347_419_854_898_94, 2.253_024_752_505_745],
  [5.891_865_957_979_238_5, 3.797_470_855_586_043, 1.703_075_753_192_847_6],
  [2.711_123_289_609_793_3, 0.616_728_187_216_597_8, 4.805_518_392_002_988_7],
  [3.294_508_837_434_268, 1.200_113_735_041_073, 5.388_903_939_827_464],
  [3.804_819_692_245_44, 1.710_424_589_852_244_5, 5.899_214_794_638_635],
  [3.664_438_879_055_192_4, 1.570_043_776_661_997, 5.758_833_981_448_388],
  [2.361_378_999_196_363, 0.266_983_896_803_167_6, 4.455_774_101_589_558_6],
];

/// Neighboring faces of each face: the face itself, then its IJ, KI and JK
/// quadrant neighbors, with the res 0 translation and ccw rotation into each.
#[rustfmt::skip]
pub(crate) const FACE_NEIGHBORS: [[FaceOrientIJK; 4]; NUM_ICOSA_FACES as usize] = [
  [fo(0, 0, 0, 0, 0), fo(4, 2, 0, 2, 1), fo(1, 2, 2, 0, 5), fo(5, 0, 2, 2, 3)],
  [fo(1, 0, 0, 0, 0), fo(0, 2, 0, 2, 1), fo(2, 2, 2, 0, 5), fo(6, 0, 2, 2, 3)],
  [fo(2, 0, 0, 0, 0), fo(1, 2, 0, 2, 1), fo(3, 2, 2, 0, 5), fo(7, 0, 2, 2, 3)],
  [fo(3, 0, 0, 0, 0), fo(2, 2, 0, 2, 1), fo(4, 2, 2, 0, 5), fo(8, 0, 2, 2, 3)],
  [fo(4, 0, 0, 0, 0), fo(3, 2, 0, 2, 1), fo(0, 2, 2, 0, 5), fo(9, 0, 2, 2, 3)],
  [fo(5, 0, 0, 0, 0), fo(10, 2, 2, 0, 3), fo(14, 2, 0, 2, 3), fo(0, 0, 2, 2, 3)],
  [fo(6, 0, 0, 0, 0), fo(11, 2, 2, 0, 3), fo(10, 2, 0, 2, 3), fo(1, 0, 2, 2, 3)],
  [fo(7, 0, 0, 0, 0), fo(12, 2, 2, 0, 3), fo(11, 2, 0, 2, 3), fo(2, 0, 2, 2, 3)],
  [fo(8, 0, 0, 0, 0), fo(13, 2, 2, 0, 3), fo(12, 2, 0, 2, 3), fo(3, 0, 2, 2, 3)],
  [fo(9, 0, 0, 0, 0), fo(14, 2, 2, 0, 3), fo(13, 2, 0, 2, 3), fo(4, 0, 2, 2, 3)],
  [fo(10, 0, 0, 0, 0), fo(5, 2, 2, 0, 3), fo(6, 2, 0, 2, 3), fo(15, 0, 2, 2, 3)],
  [fo(11, 0, 0, 0, 0), fo(6, 2, 2, 0, 3), fo(7, 2, 0, 2, 3), fo(16, 0, 2, 2, 3)],
  [fo(12, 0, 0, 0, 0), fo(7, 2, 2, 0, 3), fo(8, 2, 0, 2, 3), fo(17, 0, 2, 2, 3)],
  [fo(13, 0, 0, 0, 0), fo(8, 2, 2, 0, 3), fo(9, 2, 0, 2, 3), fo(18, 0, 2, 2, 3)],
  [fo(14, 0, 0, 0, 0), fo(9, 2, 2, 0, 3), fo(5, 2, 0, 2, 3), fo(19, 0, 2, 2, 3)],
  [fo(15, 0, 0, 0, 0), fo(16, 2, 0, 2, 1), fo(19, 2, 2, 0, 5), fo(10, 0, 2, 2, 3)],
  [fo(16, 0, 0, 0, 0), fo(17, 2, 0, 2, 1), fo(15, 2, 2, 0, 5), fo(11, 0, 2, 2, 3)],
  [fo(17, 0, 0, 0, 0), fo(18, 2, 0, 2, 1), fo(16, 2, 2, 0, 5), fo(12, 0, 2, 2, 3)],
  [fo(18, 0, 0, 0, 0), fo(19, 2, 0, 2, 1), fo(17, 2, 2, 0, 5), fo(13, 0, 2, 2, 3)],
  [fo(19, 0, 0, 0, 0), fo(15, 2, 0, 2, 1), fo(18, 2, 2, 0, 5), fo(14, 0, 2, 2, 3)],
];

/// Substrate grid offsets of a Class II cell's vertices, ccw from the i-axis.
#[rustfmt::skip]
const VERTS_CII: [CoordIJK; NUM_HEX_VERTS] = [
  CoordIJK { i: 2, j: 1, k: 0 },
  CoordIJK { i: 1, j: 2, k: 0 },
  CoordIJK { i: 0, j: 2, k: 1 },
  CoordIJK { i: 0, j: 1, k: 2 },
  CoordIJK { i: 1, j: 0, k: 2 },
  CoordIJK { i: 2, j: 0, k: 1 },
];

/// Substrate grid offsets of a Class III cell's vertices, ccw from the i-axis.
#[rustfmt::skip]
const VERTS_CIII: [CoordIJK; NUM_HEX_VERTS] = [
  CoordIJK { i: 5, j: 4, k: 0 },
  CoordIJK { i: 1, j: 5, k: 0 },
  CoordIJK { i: 0, j: 5, k: 4 },
  CoordIJK { i: 0, j: 1, k: 5 },
  CoordIJK { i: 4, j: 0, k: 5 },
  CoordIJK { i: 5, j: 0, k: 1 },
];

/// Quadrant of `FACE_NEIGHBORS[from]` that leads to face `to`. `Some(0)` for
/// the same face, `None` when the faces are not adjacent.
#[must_use]
pub(crate) fn adjacent_face_dir(from: i32, to: i32) -> Option<usize> {
  let row = FACE_NEIGHBORS.get(usize::try_from(from).ok()?)?;
  row.iter().position(|orient| orient.face == to)
}

/// Where a coordinate landed after an overage adjustment.
#[allow(clippy::enum_variant_names)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Overage {
  /// On the original face.
  NoOverage,
  /// On a face edge; only occurs on substrate grids.
  FaceEdge,
  /// In the interior of a new face.
  NewFace,
}

/// Encodes a coordinate on the sphere to the closest icosahedral face.
///
/// # Returns
/// The face and the squared euclidean distance to its center.
#[must_use]
pub(crate) fn geo_to_closest_face(g: &LatLng) -> (i32, f64) {
  let v3d = Vec3d::from_geo(g);

  let mut face = 0;
  // the distance will never be greater than 4
  let mut sqd = 5.0;
  for (f, center) in FACE_CENTER_POINT.iter().enumerate() {
    let sqdt = center.square_dist(&v3d);
    if sqdt < sqd {
      face = f as i32;
      sqd = sqdt;
    }
  }
  (face, sqd)
}

/// Encodes a coordinate on the sphere to the corresponding icosahedral face
/// and containing 2D hex coordinates relative to that face center.
#[must_use]
pub(crate) fn geo_to_hex2d(g: &LatLng, res: i32) -> (i32, Vec2d) {
  let (face, sqd) = geo_to_closest_face(g);

  // cos(r) = 1 - 2 * sin^2(r/2) = 1 - 2 * (sqd / 4) = 1 - sqd/2
  let mut r = (1.0 - sqd / 2.0).acos();
  if r < EPSILON {
    return (face, Vec2d::default());
  }

  // ccw theta from the Class II i-axis
  let az = pos_angle_rads(geo_azimuth_rads(&FACE_CENTER_GEO[face as usize], g));
  let mut theta = pos_angle_rads(FACE_AXES_AZ_RADS_CII[face as usize][0] - az);
  if is_resolution_class_iii(res) {
    theta = pos_angle_rads(theta - M_AP7_ROT_RADS);
  }

  // gnomonic scaling of r, then scale for the resolution
  r = r.tan() * INV_RES0_U_GNOMONIC;
  for _ in 0..res {
    r *= M_SQRT7;
  }

  (
    face,
    Vec2d {
      x: r * theta.cos(),
      y: r * theta.sin(),
    },
  )
}

/// Determines the center point in spherical coordinates of a cell given by 2D
/// hex coordinates on a particular icosahedral face.
///
/// # Arguments
/// * `v` - The 2D hex coordinates of the cell.
/// * `face` - The icosahedral face upon which the 2D hex coordinate system is centered.
/// * `res` - The H3 resolution of the cell.
/// * `substrate` - Whether the grid is a substrate grid.
#[must_use]
pub(crate) fn hex2d_to_geo(v: &Vec2d, face: i32, res: i32, substrate: bool) -> LatLng {
  let mut r = v.mag();
  if r < EPSILON {
    return FACE_CENTER_GEO[face as usize];
  }

  let mut theta = v.y.atan2(v.x);

  for _ in 0..res {
    r *= M_RSQRT7;
  }
  if substrate {
    r *= M_ONETHIRD;
    if is_resolution_class_iii(res) {
      r *= M_RSQRT7;
    }
  }

  // inverse gnomonic scaling of r
  r = (r * RES0_U_GNOMONIC).atan();

  if !substrate && is_resolution_class_iii(res) {
    theta = pos_angle_rads(theta + M_AP7_ROT_RADS);
  }

  // theta as an azimuth
  let az = pos_angle_rads(FACE_AXES_AZ_RADS_CII[face as usize][0] - theta);
  geo_az_distance_rads(&FACE_CENTER_GEO[face as usize], az, r)
}

/// Endpoints of the face edge crossed in `quadrant`, in the substrate grid of
/// `adj_res`.
fn icosa_edge(adj_res: i32, quadrant: Option<usize>) -> (Vec2d, Vec2d) {
  let max_dim = f64::from(MAX_DIM_BY_CII_RES[adj_res as usize]);
  let v0 = Vec2d { x: 3.0 * max_dim, y: 0.0 };
  let v1 = Vec2d {
    x: -1.5 * max_dim,
    y: 3.0 * M_SQRT3_2 * max_dim,
  };
  let v2 = Vec2d {
    x: -1.5 * max_dim,
    y: -3.0 * M_SQRT3_2 * max_dim,
  };

  match quadrant {
    Some(IJ) => (v0, v1),
    Some(JK) => (v1, v2),
    _ => (v2, v0),
  }
}

/// Where the pentagon edge from `last` to `fijk` crosses the icosahedron
/// edge, with the face it is expressed on.
fn pent_edge_crossing(last: &FaceIJK, fijk: &FaceIJK, adj_res: i32) -> Option<(i32, Vec2d)> {
  let orig2d0 = last.coord.to_hex2d();

  // express fijk on the last face
  let current_to_last = adjacent_face_dir(fijk.face, last.face)?;
  let orient = FACE_NEIGHBORS[fijk.face as usize][current_to_last];
  let mut tmp = FaceIJK {
    face: orient.face,
    coord: fijk.coord,
  };
  for _ in 0..orient.ccw_rot60 {
    tmp.coord.rotate60_ccw();
  }
  let mut trans = orient.translate;
  trans.scale(UNIT_SCALE_BY_CII_RES[adj_res as usize] * 3);
  tmp.coord = (tmp.coord + trans).normalized();
  let orig2d1 = tmp.coord.to_hex2d();

  let (edge0, edge1) = icosa_edge(adj_res, adjacent_face_dir(tmp.face, fijk.face));
  Some((tmp.face, Vec2d::intersect(&orig2d0, &orig2d1, &edge0, &edge1)))
}

impl FaceIJK {
  /// Encodes a coordinate on the sphere to the `FaceIJK` address of the
  /// containing cell at the specified resolution.
  #[must_use]
  pub(crate) fn from_geo(g: &LatLng, res: i32) -> FaceIJK {
    let (face, v) = geo_to_hex2d(g, res);
    FaceIJK {
      face,
      coord: CoordIJK::from_hex2d(&v),
    }
  }

  /// Center point in spherical coordinates of the cell at this address.
  #[must_use]
  pub(crate) fn to_geo(self, res: i32) -> LatLng {
    hex2d_to_geo(&self.coord.to_hex2d(), self.face, res, false)
  }

  /// Adjusts this address so it is expressed on the face that actually
  /// contains it, in place.
  ///
  /// # Arguments
  /// * `res` - The Class II resolution.
  /// * `pent_leading_4` - Whether the address is a pentagon's leading-4 descendant.
  /// * `substrate` - Whether the address is in a substrate grid.
  pub(crate) fn adjust_overage_class_ii(&mut self, res: i32, pent_leading_4: bool, substrate: bool) -> Overage {
    let mut max_dim = MAX_DIM_BY_CII_RES[res as usize];
    if substrate {
      max_dim *= 3;
    }

    let sum = self.coord.i + self.coord.j + self.coord.k;
    if substrate && sum == max_dim {
      return Overage::FaceEdge;
    }
    if sum <= max_dim {
      return Overage::NoOverage;
    }

    let quadrant = if self.coord.k > 0 {
      if self.coord.j > 0 {
        JK
      } else {
        // adjust for the pentagonal missing sequence
        if pent_leading_4 {
          let origin = CoordIJK::new(max_dim, 0, 0);
          let mut tmp = self.coord - origin;
          tmp.rotate60_cw();
          self.coord = tmp + origin;
        }
        KI
      }
    } else {
      IJ
    };

    let orient = FACE_NEIGHBORS[self.face as usize][quadrant];
    self.face = orient.face;

    for _ in 0..orient.ccw_rot60 {
      self.coord.rotate60_ccw();
    }
    let mut unit_scale = UNIT_SCALE_BY_CII_RES[res as usize];
    if substrate {
      unit_scale *= 3;
    }
    let mut trans = orient.translate;
    trans.scale(unit_scale);
    self.coord = (self.coord + trans).normalized();

    // overage points on pentagon boundaries can end up on edges
    if substrate && self.coord.i + self.coord.j + self.coord.k == max_dim {
      Overage::FaceEdge
    } else {
      Overage::NewFace
    }
  }

  /// Adjusts a pentagon vertex until it no longer lands inside a new face.
  pub(crate) fn adjust_pent_vert_overage(&mut self, res: i32) -> Overage {
    loop {
      let overage = self.adjust_overage_class_ii(res, false, true);
      if overage != Overage::NewFace {
        return overage;
      }
    }
  }

  /// Moves this center onto the aperture 33r substrate grid and returns the
  /// first `N` vertices of the cell there. `res` becomes the Class II
  /// resolution of the substrate.
  fn substrate_verts<const N: usize>(&mut self, res: &mut i32) -> [FaceIJK; N] {
    let class_iii = is_resolution_class_iii(*res);
    let verts = if class_iii { &VERTS_CIII } else { &VERTS_CII };

    self.coord.down_ap3();
    self.coord.down_ap3r();

    // Class III needs one more cw aperture 7 to reach icosahedral Class II
    if class_iii {
      self.coord.down_ap7r();
      *res += 1;
    }

    let center = *self;
    std::array::from_fn(|v| FaceIJK {
      face: center.face,
      coord: (center.coord + verts[v]).normalized(),
    })
  }

  /// Boundary of the hexagon at this address, `length` vertices starting at
  /// vertex `start`. Edge-crossing vertices are only introduced when the full
  /// loop is requested or the run spans a crossing.
  #[must_use]
  pub(crate) fn to_cell_boundary(self, res: i32, start: usize, length: usize) -> CellBoundary {
    let mut adj_res = res;
    let mut center = self;
    let fijk_verts: [FaceIJK; NUM_HEX_VERTS] = center.substrate_verts(&mut adj_res);

    // a full loop needs one more iteration for a distortion vertex on the last edge
    let additional_iteration = usize::from(length == NUM_HEX_VERTS);

    let mut g = CellBoundary::default();
    let mut last_face = -1;
    let mut last_overage = Overage::NoOverage;
    for vert in start..start + length + additional_iteration {
      let v = vert % NUM_HEX_VERTS;
      let mut fijk = fijk_verts[v];
      let overage = fijk.adjust_overage_class_ii(adj_res, false, true);

      // Class II cell edges have vertices on the face edge, never crossings
      if is_resolution_class_iii(res) && vert > start && fijk.face != last_face && last_overage != Overage::FaceEdge {
        let last_v = (v + 5) % NUM_HEX_VERTS;
        let orig2d0 = fijk_verts[last_v].coord.to_hex2d();
        let orig2d1 = fijk_verts[v].coord.to_hex2d();

        let face2 = if last_face == center.face { fijk.face } else { last_face };
        let (edge0, edge1) = icosa_edge(adj_res, adjacent_face_dir(center.face, face2));

        let inter = Vec2d::intersect(&orig2d0, &orig2d1, &edge0, &edge1);
        // a crossing at a hexagon vertex leaves each edge on a single face
        if !orig2d0.almost_equals(&inter) && !orig2d1.almost_equals(&inter) {
          g.push(hex2d_to_geo(&inter, center.face, adj_res, true));
        }
      }

      // vert == start + NUM_HEX_VERTS only checks the last edge for a crossing
      if vert < start + NUM_HEX_VERTS {
        g.push(hex2d_to_geo(&fijk.coord.to_hex2d(), fijk.face, adj_res, true));
      }

      last_face = fijk.face;
      last_overage = overage;
    }
    g
  }

  /// Boundary of the pentagon at this address, `length` vertices starting at
  /// vertex `start`.
  #[must_use]
  pub(crate) fn pent_to_cell_boundary(&self, res: i32, start: usize, length: usize) -> CellBoundary {
    let mut adj_res = res;
    let mut center = *self;
    let fijk_verts: [FaceIJK; NUM_PENT_VERTS] = center.substrate_verts(&mut adj_res);

    let additional_iteration = usize::from(length == NUM_PENT_VERTS);

    let mut g = CellBoundary::default();
    let mut last_fijk: Option<FaceIJK> = None;
    for vert in start..start + length + additional_iteration {
      let v = vert % NUM_PENT_VERTS;
      let mut fijk = fijk_verts[v];
      fijk.adjust_pent_vert_overage(adj_res);

      // every Class III pentagon edge crosses an icosa edge
      if let Some(last) = last_fijk.filter(|_| is_resolution_class_iii(res)) {
        match pent_edge_crossing(&last, &fijk, adj_res) {
          Some((face, inter)) => g.push(hex2d_to_geo(&inter, face, adj_res, true)),
          None => log::debug!("pentagon vertex faces {} and {} are not adjacent", last.face, fijk.face),
        }
      }

      if vert < start + NUM_PENT_VERTS {
        g.push(hex2d_to_geo(&fijk.coord.to_hex2d(), fijk.face, adj_res, true));
      }

      last_fijk = Some(fijk);
    }
    g
  }
}
