use terracast_algebra::Vec3;
use terracast_geometry::Triangle;

use crate::{IndexGet, MapProjection, SceneMode, TerrainMesh};

/// the triangle access protocol picking runs against.
pub trait AbstractTriangleMesh {
  fn triangle_count(&self) -> usize;

  fn triangle_at(&self, primitive_index: usize) -> Option<Triangle<Vec3<f64>>>;
}

/// read view resolving encoded vertex records into positions for one view
/// mode. outside of full 3d the decoded position is converted to
/// cartographic, projected, and remapped into the (height, x, y) axis
/// order the flattened scenes expect.
pub struct TerrainMeshReadView<'a> {
  pub mesh: &'a TerrainMesh,
  pub mode: SceneMode,
  pub projection: Option<&'a dyn MapProjection>,
}

impl TerrainMeshReadView<'_> {
  pub fn resolve_position(&self, vertex_index: usize) -> Vec3<f64> {
    let decoded = self
      .mesh
      .encoding
      .decode_position(&self.mesh.vertices, vertex_index);
    if self.mode.is_scene3d() {
      return decoded;
    }

    let projection = self
      .projection
      .expect("picking in a projected mode requires a projection");
    let cartographic = projection
      .ellipsoid()
      .cartesian_to_cartographic(decoded)
      .expect("vertex position degenerates at the ellipsoid center");
    let projected = projection.project(&cartographic);

    // the axis permutation is load bearing, flattened scenes put height
    // on the first axis
    Vec3::new(projected.z, projected.x, projected.y)
  }
}

impl AbstractTriangleMesh for TerrainMeshReadView<'_> {
  fn triangle_count(&self) -> usize {
    self.mesh.indices.triangle_count()
  }

  fn triangle_at(&self, primitive_index: usize) -> Option<Triangle<Vec3<f64>>> {
    let read_index = 3 * primitive_index;
    let indices = &self.mesh.indices;
    let i0 = indices.index_get(read_index)?;
    let i1 = indices.index_get(read_index + 1)?;
    let i2 = indices.index_get(read_index + 2)?;
    Triangle::new(
      self.resolve_position(i0),
      self.resolve_position(i1),
      self.resolve_position(i2),
    )
    .into()
  }
}
