use serde::{Deserialize, Serialize};
use terracast_algebra::*;

use crate::*;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Triangle<V = Vec3<f32>> {
  pub a: V,
  pub b: V,
  pub c: V,
}

unsafe impl<V: bytemuck::Zeroable> bytemuck::Zeroable for Triangle<V> {}
unsafe impl<V: bytemuck::Pod> bytemuck::Pod for Triangle<V> {}

impl<V> Triangle<V> {
  pub fn new(a: V, b: V, c: V) -> Self {
    Self { a, b, c }
  }
}

impl<V: Copy> Triangle<V> {
  pub fn map<U>(&self, f: impl Fn(V) -> U) -> Triangle<U> {
    Triangle {
      a: f(self.a),
      b: f(self.b),
      c: f(self.c),
    }
  }
}

impl<S: Scalar, V: Positioned<Position = Vec3<S>>> Triangle<V> {
  fn face_normal_unnormalized(&self) -> Vec3<S> {
    let cb = self.c.position() - self.b.position();
    let ab = self.a.position() - self.b.position();
    cb.cross(ab)
  }

  pub fn face_normal(&self) -> Vec3<S> {
    self.face_normal_unnormalized().normalize()
  }

  pub fn is_same_direction(&self, direction: Vec3<S>) -> bool {
    self.face_normal_unnormalized().dot(direction) > S::zero()
  }
}

impl<S: Scalar, V: Positioned<Position = Vec3<S>>> SpaceBounding<Box3<S>> for Triangle<V> {
  #[inline(always)]
  fn to_bounding(&self) -> Box3<S> {
    [
      self.a.position(),
      self.b.position(),
      self.c.position(),
    ]
    .into_iter()
    .collect()
  }
}
