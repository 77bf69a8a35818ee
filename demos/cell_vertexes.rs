use h3_vertex::{
  cell_to_boundary, cell_to_vertexes, get_pentagons, is_pentagon, lat_lng_to_cell, rads_to_degs, vertex_num,
  vertex_owner, vertex_to_lat_lng, H3Error, H3Index, LatLng, H3_NULL,
};

fn print_vertexes(cell: H3Index) -> Result<(), H3Error> {
  println!("Cell {:x} ({}):", cell, if is_pentagon(cell) { "pentagon" } else { "hexagon" });
  for (v, vertex) in cell_to_vertexes(cell)?.into_iter().enumerate() {
    if vertex == H3_NULL {
      println!("  Vertex {v}: none");
      continue;
    }
    let point = vertex_to_lat_lng(vertex)?;
    println!(
      "  Vertex {v}: {:x} (owner {:x}, vertex {}) at Lat {:.6} deg, Lng {:.6} deg",
      vertex,
      vertex_owner(vertex),
      vertex_num(vertex),
      rads_to_degs(point.lat),
      rads_to_degs(point.lng)
    );
  }
  Ok(())
}

fn main() -> Result<(), H3Error> {
  println!("--- H3 Cell Vertexes Example ---");

  // San Francisco City Hall
  let point = LatLng::from_degrees(37.779265, -122.419277);
  let cell = lat_lng_to_cell(&point, 9)?;
  print_vertexes(cell)?;

  let boundary = cell_to_boundary(cell)?;
  println!("Boundary has {} vertices", boundary.num_verts);

  // vertexes around a pentagon
  let pentagon = get_pentagons(5)?[0];
  print_vertexes(pentagon)?;

  println!("--- Example Complete ---");
  Ok(())
}
