//! Vertex indexes.
//!
//! A vertex is the corner shared by three cells (two around some pentagon
//! corners). Every cell sharing it names it with the same vertex index: the
//! sharing cell with the smallest raw index owns the vertex, and the index
//! stores that owner in vertex mode with the owner's vertex number in the
//! reserved bits.

pub mod indexer;
pub mod mapping;
pub mod owner;
pub mod rotation;

pub use indexer::{
  cell_to_vertex, cell_to_vertexes, get_cell_vertex, get_cell_vertexes, is_valid_vertex, pack_vertex, vertex_num,
  vertex_owner, vertex_to_lat_lng, vertex_to_point,
};
pub use mapping::{cell_vertex_count, direction_for_vertex_num, vertex_num_for_direction};
pub use owner::resolve_owner;
pub use rotation::vertex_rotations;
