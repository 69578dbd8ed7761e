use terracast_algebra::*;

use crate::*;

/// direction is expected to be normalized by the caller, distances returned
/// by the intersection queries are in its unit.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray3<T: Scalar = f32> {
  pub origin: Vec3<T>,
  pub direction: Vec3<T>,
}

impl<T: Scalar> Ray3<T> {
  pub fn new(origin: Vec3<T>, direction: Vec3<T>) -> Self {
    Self { origin, direction }
  }

  #[inline(always)]
  pub fn at(&self, distance: T) -> Vec3<T> {
    self.origin + self.direction * distance
  }

  /// Moller-Trumbore, returning the parametric distance to the triangle's
  /// plane crossing inside the triangle. The distance may be negative, the
  /// caller owns the valid-range decision.
  pub fn triangle_parametric<V>(&self, triangle: &Triangle<V>, face: FaceSide) -> Option<T>
  where
    V: Positioned<Position = Vec3<T>>,
  {
    let eps = T::by_f64(1.0e-6);
    let p0 = triangle.a.position();
    let p1 = triangle.b.position();
    let p2 = triangle.c.position();

    let edge0 = p1 - p0;
    let edge1 = p2 - p0;
    let p = self.direction.cross(edge1);
    let det = edge0.dot(p);

    match face {
      FaceSide::Front => {
        if det < eps {
          return None;
        }
        let tvec = self.origin - p0;
        let u = tvec.dot(p);
        if u < T::zero() || u > det {
          return None;
        }
        let q = tvec.cross(edge0);
        let v = self.direction.dot(q);
        if v < T::zero() || u + v > det {
          return None;
        }
        Some(edge1.dot(q) / det)
      }
      FaceSide::Back => {
        if det > -eps {
          return None;
        }
        let tvec = self.origin - p0;
        let u = tvec.dot(p);
        if u > T::zero() || u < det {
          return None;
        }
        let q = tvec.cross(edge0);
        let v = self.direction.dot(q);
        if v > T::zero() || u + v < det {
          return None;
        }
        Some(edge1.dot(q) / det)
      }
      FaceSide::Double => {
        if det.abs() < eps {
          return None;
        }
        let inv_det = T::one() / det;
        let tvec = self.origin - p0;
        let u = tvec.dot(p) * inv_det;
        if u < T::zero() || u > T::one() {
          return None;
        }
        let q = tvec.cross(edge0);
        let v = self.direction.dot(q) * inv_det;
        if v < T::zero() || u + v > T::one() {
          return None;
        }
        Some(edge1.dot(q) * inv_det)
      }
    }
  }
}

impl<T, V> IntersectAble<Triangle<V>, OptionalNearest<HitPoint3D<T>>, FaceSide> for Ray3<T>
where
  T: Scalar,
  V: Positioned<Position = Vec3<T>>,
{
  fn intersect(&self, other: &Triangle<V>, face: &FaceSide) -> OptionalNearest<HitPoint3D<T>> {
    match self.triangle_parametric(other, *face) {
      Some(t) if t >= T::zero() => OptionalNearest::some(HitPoint3D::new(self.at(t), t)),
      _ => OptionalNearest::none(),
    }
  }
}
