use serde::{Deserialize, Serialize};
use terracast_algebra::*;

use crate::*;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Box3<T = f32> {
  pub min: Vec3<T>,
  pub max: Vec3<T>,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Box3<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Box3<T> {}

impl<T: Scalar> Default for Box3<T> {
  fn default() -> Self {
    Self::empty()
  }
}

impl<T: Scalar> Box3<T> {
  pub fn new(min: Vec3<T>, max: Vec3<T>) -> Self {
    Self { min, max }
  }

  pub fn new_from_center(center: Vec3<T>, half_size: Vec3<T>) -> Self {
    Self {
      min: center - half_size,
      max: center + half_size,
    }
  }

  /// the identity of union
  pub fn empty() -> Self {
    Self {
      min: Vec3::splat(T::infinity()),
      max: Vec3::splat(T::neg_infinity()),
    }
  }

  #[inline(always)]
  pub fn center(&self) -> Vec3<T> {
    (self.min + self.max) * T::half()
  }

  #[inline(always)]
  pub fn size(&self) -> Vec3<T> {
    self.max - self.min
  }

  #[inline(always)]
  pub fn half_size(&self) -> Vec3<T> {
    self.size() * T::half()
  }

  pub fn expand_by_point(&mut self, point: Vec3<T>) {
    self.min = self.min.min(point);
    self.max = self.max.max(point);
  }

  pub fn expand_by_box(&mut self, other: Self) {
    self.min = self.min.min(other.min);
    self.max = self.max.max(other.max);
  }

  pub fn union(mut self, other: Self) -> Self {
    self.expand_by_box(other);
    self
  }

  pub fn contains_box(&self, other: &Self) -> bool {
    self.min.x <= other.min.x
      && self.min.y <= other.min.y
      && self.min.z <= other.min.z
      && other.max.x <= self.max.x
      && other.max.y <= self.max.y
      && other.max.z <= self.max.z
  }
}

impl<T: Scalar> FromIterator<Vec3<T>> for Box3<T> {
  fn from_iter<I: IntoIterator<Item = Vec3<T>>>(items: I) -> Self {
    let mut bbox = Self::empty();
    items.into_iter().for_each(|p| bbox.expand_by_point(p));
    bbox
  }
}

impl<T: Scalar> FromIterator<Box3<T>> for Box3<T> {
  fn from_iter<I: IntoIterator<Item = Box3<T>>>(items: I) -> Self {
    let mut bbox = Self::empty();
    items.into_iter().for_each(|b| bbox.expand_by_box(b));
    bbox
  }
}

/// slab test. conservative on boundary touches, which is what a spatial
/// filter in front of an exact triangle test needs.
impl<T: Scalar> IntersectAble<Ray3<T>, bool> for Box3<T> {
  fn intersect(&self, ray: &Ray3<T>, _: &()) -> bool {
    let inv = ray.direction.map(|d| T::one() / d);
    let t1 = (self.min - ray.origin) * inv;
    let t2 = (self.max - ray.origin) * inv;
    let t_near = t1.min(t2).max_channel();
    let t_far = t1.max(t2).min_channel();
    t_far >= t_near.max(T::zero())
  }
}

impl<T: Scalar> IntersectAble<Box3<T>, bool> for Ray3<T> {
  fn intersect(&self, other: &Box3<T>, param: &()) -> bool {
    other.intersect(self, param)
  }
}

#[cfg(test)]
mod test {
  use super::*;

  fn unit_box() -> Box3<f64> {
    Box3::new(Vec3::splat(0.0), Vec3::splat(1.0))
  }

  #[test]
  fn ray_box_hit_and_miss() {
    let ray = Ray3::new(Vec3::new(0.5, 0.5, -1.0), Vec3::new(0.0, 0.0, 1.0));
    assert!(unit_box().intersect(&ray, &()));

    let miss = Ray3::new(Vec3::new(2.0, 2.0, -1.0), Vec3::new(0.0, 0.0, 1.0));
    assert!(!unit_box().intersect(&miss, &()));
  }

  #[test]
  fn ray_starting_inside_hits() {
    let ray = Ray3::new(Vec3::splat(0.5), Vec3::new(1.0, 0.0, 0.0));
    assert!(unit_box().intersect(&ray, &()));
  }

  #[test]
  fn box_behind_ray_misses() {
    let ray = Ray3::new(Vec3::new(0.5, 0.5, 5.0), Vec3::new(0.0, 0.0, 1.0));
    assert!(!unit_box().intersect(&ray, &()));
  }

  #[test]
  fn union_of_boxes() {
    let a = Box3::new(Vec3::splat(0.0), Vec3::splat(1.0));
    let b = Box3::new(Vec3::splat(2.0), Vec3::splat(3.0));
    let u: Box3<f64> = [a, b].into_iter().collect();
    assert_eq!(u.min, Vec3::splat(0.0));
    assert_eq!(u.max, Vec3::splat(3.0));
    assert!(u.contains_box(&a) && u.contains_box(&b));
  }
}
