// src/traversal/mod.rs

pub mod neighbors;

pub use neighbors::{are_neighbor_cells, direction_for_neighbor, h3_neighbor_rotations};
