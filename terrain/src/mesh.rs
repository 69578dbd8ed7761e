use terracast_algebra::Vec3;
use terracast_geometry::{OrientedBox3, Sphere};

use crate::{TerrainEncoding, TerrainIndices, TrianglePicking};

/// A mesh plus related metadata for a single tile of terrain. Created once
/// when the tile's terrain data is decoded into renderable form, immutable
/// afterwards, dropped when the tile leaves the terrain cache.
pub struct TerrainMesh {
  /// the tile local origin. vertex positions are stored relative to this.
  pub center: Vec3<f64>,
  /// flat vertex records of `stride` components, [X, Y, Z, H, U, V, ..]
  pub vertices: Vec<f32>,
  pub indices: TerrainIndices,
  /// the index count of the real geometry, skirt indices trail after it
  pub index_count_without_skirts: usize,
  pub vertex_count_without_skirts: usize,
  /// meters above the ellipsoid
  pub minimum_height: f64,
  pub maximum_height: f64,
  pub bounding_sphere_3d: Sphere<f64>,
  /// horizon culling point in ellipsoid scaled space
  pub occludee_point_in_scaled_space: Option<Vec3<f64>>,
  /// components per vertex record, 6 unless extra attributes are present
  pub stride: usize,
  pub oriented_bounding_box: Option<OrientedBox3<f64>>,
  /// how the vertex records decode into positions
  pub encoding: TerrainEncoding,
  /// the amount this mesh was exaggerated
  pub exaggeration: f64,
  /// vertex indices along the western edge, ordered south to north
  pub west_indices_south_to_north: Vec<u32>,
  /// vertex indices along the southern edge, ordered east to west
  pub south_indices_east_to_west: Vec<u32>,
  /// vertex indices along the eastern edge, ordered north to south
  pub east_indices_north_to_south: Vec<u32>,
  /// vertex indices along the northern edge, ordered west to east
  pub north_indices_west_to_east: Vec<u32>,
  /// pre built full-3d spatial index over the triangles, published here
  /// before the first pick and read only afterwards
  pub triangle_picking: Option<TrianglePicking>,
}

impl TerrainMesh {
  /// no validation happens here, callers own the mutual consistency of the
  /// buffers. `vertex_stride` falls back to 6.
  pub fn new(
    center: Vec3<f64>,
    vertices: Vec<f32>,
    indices: TerrainIndices,
    index_count_without_skirts: usize,
    vertex_count_without_skirts: usize,
    minimum_height: f64,
    maximum_height: f64,
    bounding_sphere_3d: Sphere<f64>,
    occludee_point_in_scaled_space: Option<Vec3<f64>>,
    vertex_stride: Option<usize>,
    oriented_bounding_box: Option<OrientedBox3<f64>>,
    encoding: TerrainEncoding,
    exaggeration: f64,
    west_indices_south_to_north: Vec<u32>,
    south_indices_east_to_west: Vec<u32>,
    east_indices_north_to_south: Vec<u32>,
    north_indices_west_to_east: Vec<u32>,
    triangle_picking: Option<TrianglePicking>,
  ) -> Self {
    Self {
      center,
      vertices,
      indices,
      index_count_without_skirts,
      vertex_count_without_skirts,
      minimum_height,
      maximum_height,
      bounding_sphere_3d,
      occludee_point_in_scaled_space,
      stride: vertex_stride.unwrap_or(6),
      oriented_bounding_box,
      encoding,
      exaggeration,
      west_indices_south_to_north,
      south_indices_east_to_west,
      east_indices_north_to_south,
      north_indices_west_to_east,
      triangle_picking,
    }
  }

  pub fn triangle_count(&self) -> usize {
    self.indices.triangle_count()
  }
}
