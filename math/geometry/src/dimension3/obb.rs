use serde::{Deserialize, Serialize};
use terracast_algebra::*;

/// box described by a center and three half axes. carried as metadata on
/// meshes, the columns are not required to be orthonormal here.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrientedBox3<T = f32> {
  pub center: Vec3<T>,
  pub half_axes: [Vec3<T>; 3],
}

impl<T: Copy> OrientedBox3<T> {
  pub fn new(center: Vec3<T>, half_axes: [Vec3<T>; 3]) -> Self {
    Self { center, half_axes }
  }
}
