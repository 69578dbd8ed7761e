use log::trace;
use terracast_algebra::Vec3;
use terracast_geometry::{FaceSide, Ray3};

use crate::{AbstractTriangleMesh, MapProjection, SceneMode, TerrainMesh, TerrainMeshReadView};

impl TerrainMesh {
  /// nearest intersection of `ray` with the tile surface, or None.
  ///
  /// `ray` lives in the coordinate space of `mode` with a normalized
  /// direction. `projection` is consulted only outside of full 3d and is
  /// required there. with `cull_back_faces` triangles winding away from
  /// the ray are ignored.
  pub fn pick_ray(
    &self,
    ray: Ray3<f64>,
    cull_back_faces: bool,
    mode: SceneMode,
    projection: Option<&dyn MapProjection>,
  ) -> Option<Vec3<f64>> {
    // single authoritative path per query: the spatial index only holds
    // full 3d positions, every other mode takes the linear scan
    if mode.is_scene3d() {
      if let Some(picking) = &self.triangle_picking {
        trace!("pick: spatial index path");
        return picking.ray_intersect(ray, cull_back_faces);
      }
    }

    trace!("pick: linear scan path");
    let view = TerrainMeshReadView {
      mesh: self,
      mode,
      projection,
    };
    let face = if cull_back_faces {
      FaceSide::Front
    } else {
      FaceSide::Double
    };
    linear_scan_pick(&view, ray, face)
  }
}

/// the reference picking path: walk every triangle in index order and keep
/// the smallest non negative parametric distance. strict `<` means the
/// first triangle reaching the minimum wins ties.
fn linear_scan_pick(
  mesh: &impl AbstractTriangleMesh,
  ray: Ray3<f64>,
  face: FaceSide,
) -> Option<Vec3<f64>> {
  let mut min_t = f64::MAX;
  for primitive_index in 0..mesh.triangle_count() {
    let Some(triangle) = mesh.triangle_at(primitive_index) else {
      continue;
    };
    if let Some(t) = ray.triangle_parametric(&triangle, face) {
      if t < min_t && t >= 0.0 {
        min_t = t;
      }
    }
  }
  (min_t != f64::MAX).then(|| ray.at(min_t))
}
