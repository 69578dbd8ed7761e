use log::debug;
use terracast_algebra::Vec3;
use terracast_geometry::{
  FaceSide, HitPoint3D, IntersectAble, OptionalNearest, Ray3, SpaceBounding, Triangle,
};
use terracast_space::{OcTree, TreeBuildOption};

use crate::{IndexGet, TerrainEncoding, TerrainIndices};

/// precomputed spatial index over a mesh's triangles in full 3d space.
/// constructed out of band, attached to the mesh before the first pick and
/// read only afterwards. for every valid query it answers exactly like the
/// linear scan over the same triangle set.
pub struct TrianglePicking {
  triangles: Vec<Triangle<Vec3<f64>>>,
  tree: OcTree,
}

impl TrianglePicking {
  pub fn new(
    encoding: &TerrainEncoding,
    vertices: &[f32],
    indices: &TerrainIndices,
    option: &TreeBuildOption,
  ) -> Self {
    let triangles: Vec<Triangle<Vec3<f64>>> = (0..indices.triangle_count())
      .filter_map(|primitive_index| {
        let read_index = 3 * primitive_index;
        Triangle::new(
          encoding.decode_position(vertices, indices.index_get(read_index)?),
          encoding.decode_position(vertices, indices.index_get(read_index + 1)?),
          encoding.decode_position(vertices, indices.index_get(read_index + 2)?),
        )
        .into()
      })
      .collect();

    let tree = OcTree::new(triangles.iter().map(|t| t.to_bounding()), option);
    debug!("triangle picking index over {} triangles", triangles.len());

    Self { triangles, tree }
  }

  pub fn triangle_count(&self) -> usize {
    self.triangles.len()
  }

  /// nearest hit under the same validity predicate as the linear scan: the
  /// smallest non negative parametric distance wins, strictly-nearer
  /// comparison keeps the first candidate on ties.
  pub fn ray_intersect(&self, ray: Ray3<f64>, cull_back_faces: bool) -> Option<Vec3<f64>> {
    let face = if cull_back_faces {
      FaceSide::Front
    } else {
      FaceSide::Double
    };

    let mut nearest: OptionalNearest<HitPoint3D<f64>> = OptionalNearest::none();
    self.tree.traverse(
      |node| node.bounding.intersect(&ray, &()),
      |primitives| {
        for &primitive_index in primitives {
          nearest.refresh_nearest(ray.intersect(&self.triangles[primitive_index], &face));
        }
      },
    );
    nearest.0.map(|hit| hit.position)
  }
}
