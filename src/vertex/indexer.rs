// src/vertex/indexer.rs

use super::mapping::cell_vertex_count;
use super::owner::resolve_owner;
use crate::constants::{H3_CELL_MODE, H3_VERTEX_MODE, NUM_HEX_VERTS};
use crate::h3_index::{
  get_mode, get_reserved_bits, get_resolution, h3_to_face_ijk, is_pentagon, is_valid_cell, set_mode, set_reserved_bits,
};
use crate::types::{H3Error, H3Index, LatLng, H3_NULL};

/// Packs an owner cell and one of its vertex numbers into a vertex index.
/// Only the low three bits of `vertex_num` fit.
#[inline]
#[must_use]
pub fn pack_vertex(owner: H3Index, vertex_num: usize) -> H3Index {
  let mut vertex = owner;
  set_mode(&mut vertex, H3_VERTEX_MODE);
  set_reserved_bits(&mut vertex, (vertex_num & 0b111) as u8);
  vertex
}

/// Owner cell of a vertex index.
#[inline]
#[must_use]
pub fn vertex_owner(vertex: H3Index) -> H3Index {
  let mut owner = vertex;
  set_mode(&mut owner, H3_CELL_MODE);
  set_reserved_bits(&mut owner, 0);
  owner
}

/// Vertex number of a vertex index, in its owner's numbering.
#[inline]
#[must_use]
pub fn vertex_num(vertex: H3Index) -> usize {
  usize::from(get_reserved_bits(vertex))
}

/// Canonical vertex index for vertex `vertex_num` of `origin`.
///
/// # Errors
/// `Domain` when `vertex_num` is out of range for the cell's shape, `Failed`
/// when the owner of the vertex cannot be resolved.
pub fn cell_to_vertex(origin: H3Index, vertex_num: usize) -> Result<H3Index, H3Error> {
  if vertex_num >= cell_vertex_count(origin) {
    return Err(H3Error::Domain);
  }
  let (owner, owner_vertex_num) = resolve_owner(origin, vertex_num).map_err(|err| {
    log::debug!("cannot resolve vertex {vertex_num} of {origin:x}: {err}");
    H3Error::Failed
  })?;
  Ok(pack_vertex(owner, owner_vertex_num))
}

/// Like [`cell_to_vertex`], with `H3_NULL` for any failure.
#[must_use]
pub fn get_cell_vertex(origin: H3Index, vertex_num: usize) -> H3Index {
  cell_to_vertex(origin, vertex_num).unwrap_or(H3_NULL)
}

/// All vertex indexes of a cell. Pentagons leave the last slot `H3_NULL`.
///
/// # Errors
/// `Failed` when any vertex cannot be resolved.
pub fn cell_to_vertexes(origin: H3Index) -> Result<[H3Index; NUM_HEX_VERTS], H3Error> {
  let mut out = [H3_NULL; NUM_HEX_VERTS];
  for (vertex_num, slot) in out.iter_mut().enumerate().take(cell_vertex_count(origin)) {
    *slot = cell_to_vertex(origin, vertex_num)?;
  }
  Ok(out)
}

/// Like [`cell_to_vertexes`], with `H3_NULL` in every slot that fails.
#[must_use]
pub fn get_cell_vertexes(origin: H3Index) -> [H3Index; NUM_HEX_VERTS] {
  let n = cell_vertex_count(origin);
  std::array::from_fn(|vertex_num| {
    if vertex_num < n {
      get_cell_vertex(origin, vertex_num)
    } else {
      H3_NULL
    }
  })
}

/// Single boundary point of the owner cell at the packed vertex number.
fn owner_boundary_point(owner: H3Index, vertex_num: usize) -> Result<LatLng, H3Error> {
  let fijk = h3_to_face_ijk(owner)?;
  let res = get_resolution(owner);
  let boundary = if is_pentagon(owner) {
    fijk.pent_to_cell_boundary(res, vertex_num, 1)
  } else {
    fijk.to_cell_boundary(res, vertex_num, 1)
  };
  Ok(boundary.verts[0])
}

/// Point of a vertex index, without checking it.
///
/// The result for a malformed index is unspecified; validate with
/// [`is_valid_vertex`] or use [`vertex_to_lat_lng`] first.
#[must_use]
pub fn vertex_to_point(vertex: H3Index) -> LatLng {
  let owner = vertex_owner(vertex);
  let vertex_num = vertex_num(vertex) % cell_vertex_count(owner);
  owner_boundary_point(owner, vertex_num).unwrap_or_default()
}

/// Point of a vertex index.
///
/// # Errors
/// `VertexInvalid` when the index is not in vertex mode or its vertex number
/// is out of range for the owner's shape; the projection error when the
/// owner cannot be projected.
pub fn vertex_to_lat_lng(vertex: H3Index) -> Result<LatLng, H3Error> {
  let owner = vertex_owner(vertex);
  let vertex_num = vertex_num(vertex);
  if get_mode(vertex) != H3_VERTEX_MODE || vertex_num >= cell_vertex_count(owner) {
    return Err(H3Error::VertexInvalid);
  }
  owner_boundary_point(owner, vertex_num)
}

/// Whether `vertex` is a canonical vertex index: in vertex mode, owned by a
/// valid cell, and exactly what that cell resolves its vertex number to.
#[must_use]
pub fn is_valid_vertex(vertex: H3Index) -> bool {
  if get_mode(vertex) != H3_VERTEX_MODE {
    return false;
  }
  let owner = vertex_owner(vertex);
  if !is_valid_cell(owner) {
    return false;
  }
  // recreating the vertex checks the number and canonical ownership at once
  cell_to_vertex(owner, vertex_num(vertex)) == Ok(vertex)
}
