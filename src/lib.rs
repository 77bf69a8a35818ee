#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)] // digit and face tables are indexed with small integers
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::unreadable_literal)] // H3 indexes read best as plain hex
#![allow(clippy::excessive_precision)] // projection tables keep every generated digit
#![allow(clippy::similar_names)]

//! `h3-vertex` computes canonical vertex indexes for H3 cells and locates
//! them on the globe.
//!
//! Every corner of a cell is shared by up to three cells. [`cell_to_vertex`]
//! names a corner the same way no matter which of those cells asks, and
//! [`vertex_to_lat_lng`] turns the name back into a point. The cell
//! machinery the vertexes need (index bit layout, face projection, neighbor
//! traversal, boundaries) lives alongside.
//!
//! ```
//! use h3_vertex::{cell_to_vertexes, lat_lng_to_cell, vertex_to_lat_lng, LatLng, H3_NULL};
//!
//! let cell = lat_lng_to_cell(&LatLng::from_degrees(37.779_265, -122.419_277), 9).unwrap();
//! for vertex in cell_to_vertexes(cell).unwrap() {
//!   assert_ne!(vertex, H3_NULL, "hexagons have six vertexes");
//!   let point = vertex_to_lat_lng(vertex).unwrap();
//!   assert!(point.lat.is_finite() && point.lng.is_finite());
//! }
//! ```

pub(crate) mod base_cells;
pub mod constants;
pub(crate) mod coords;
pub mod h3_index;
pub mod indexing;
pub mod latlng;
pub(crate) mod math;
pub mod traversal;
pub mod types;
pub mod vertex;

pub use constants::{MAX_CELL_BNDRY_VERTS, MAX_H3_RES, NUM_HEX_VERTS, NUM_PENT_VERTS};
pub use latlng::{degs_to_rads, geo_almost_equal, geo_almost_equal_threshold, rads_to_degs};
pub use types::{CellBoundary, CoordIJK, Direction, FaceIJK, H3Error, H3Index, LatLng, Vec2d, Vec3d, H3_NULL};

pub use h3_index::{
  get_base_cell_number, get_pentagons, get_res0_cells, get_resolution, is_pentagon, is_res_class_iii, is_valid_cell,
};
pub use indexing::{cell_to_boundary, cell_to_lat_lng, lat_lng_to_cell};
pub use traversal::{are_neighbor_cells, direction_for_neighbor, h3_neighbor_rotations};
pub use vertex::{
  cell_to_vertex, cell_to_vertexes, cell_vertex_count, direction_for_vertex_num, get_cell_vertex, get_cell_vertexes,
  is_valid_vertex, pack_vertex, resolve_owner, vertex_num, vertex_num_for_direction, vertex_owner, vertex_rotations,
  vertex_to_lat_lng, vertex_to_point,
};
