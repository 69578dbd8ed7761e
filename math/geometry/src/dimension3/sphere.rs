use serde::{Deserialize, Serialize};
use terracast_algebra::*;

use crate::*;

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sphere<T = f32> {
  pub center: Vec3<T>,
  pub radius: T,
}

impl<T: Scalar> Sphere<T> {
  pub fn new(center: Vec3<T>, radius: T) -> Self {
    Self { center, radius }
  }

  // we cant impl from iter trait because it need iter twice
  pub fn from_points<I>(items: I) -> Self
  where
    I: IntoIterator<Item = Vec3<T>> + Clone,
  {
    let bbox: Box3<T> = items.clone().into_iter().collect();
    let center = bbox.center();
    Self::from_points_and_center(items, center)
  }

  pub fn from_points_and_center<I>(items: I, center: Vec3<T>) -> Self
  where
    I: IntoIterator<Item = Vec3<T>>,
  {
    let mut max_distance2 = T::zero();
    items.into_iter().for_each(|point| {
      let d = (point - center).length2();
      max_distance2 = max_distance2.max(d);
    });
    Sphere::new(center, max_distance2.sqrt())
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn from_points_covers_all() {
    let points = [
      Vec3::new(-1.0f64, 0.0, 0.0),
      Vec3::new(1.0, 0.0, 0.0),
      Vec3::new(0.0, 0.5, 0.0),
    ];
    let sphere = Sphere::from_points(points);
    for p in points {
      assert!(p.distance_to(sphere.center) <= sphere.radius + 1e-12);
    }
  }
}
