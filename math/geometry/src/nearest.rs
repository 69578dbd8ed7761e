use std::ops::{Deref, DerefMut};

use terracast_algebra::*;

#[derive(Debug, Copy, Clone)]
pub struct HitPoint3D<T: Scalar = f32> {
  pub position: Vec3<T>,
  pub distance: T,
}

impl<T: Scalar> HitPoint3D<T> {
  pub fn new(position: Vec3<T>, distance: T) -> Self {
    Self { position, distance }
  }
}

pub trait HitDistanceCompareAble {
  fn is_near_than(&self, other: &Self) -> bool;
}

impl<T: Scalar> HitDistanceCompareAble for HitPoint3D<T> {
  fn is_near_than(&self, other: &Self) -> bool {
    self.distance < other.distance
  }
}

/// nearest-hit accumulator. the strict compare in refresh means the first
/// candidate at a given distance is kept over later equal ones.
#[derive(Debug, Copy, Clone)]
pub struct OptionalNearest<T>(pub Option<T>);

impl<T> OptionalNearest<T> {
  pub fn none() -> Self {
    Self(None)
  }

  pub fn some(v: T) -> Self {
    Self(Some(v))
  }

  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> OptionalNearest<U> {
    OptionalNearest(self.0.map(f))
  }
}

impl<T: HitDistanceCompareAble> OptionalNearest<T> {
  pub fn refresh(&mut self, v: T) -> &mut Self {
    match &self.0 {
      Some(stored) if !v.is_near_than(stored) => {}
      _ => self.0 = Some(v),
    }
    self
  }

  pub fn refresh_nearest(&mut self, other: Self) -> &mut Self {
    if let Some(v) = other.0 {
      self.refresh(v);
    }
    self
  }
}

impl<T> Deref for OptionalNearest<T> {
  type Target = Option<T>;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl<T> DerefMut for OptionalNearest<T> {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}
