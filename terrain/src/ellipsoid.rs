use serde::{Deserialize, Serialize};
use terracast_algebra::Vec3;

use crate::Cartographic;

/// quadric surface `(x/a)^2 + (y/b)^2 + (z/c)^2 = 1` with the derived
/// quantities geodetic conversions keep reusing.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ellipsoid {
  pub radii: Vec3<f64>,
  radii_squared: Vec3<f64>,
  one_over_radii: Vec3<f64>,
  one_over_radii_squared: Vec3<f64>,
}

impl Ellipsoid {
  pub fn new(x: f64, y: f64, z: f64) -> Self {
    let radii = Vec3::new(x, y, z);
    let radii_squared = radii * radii;
    Self {
      radii,
      radii_squared,
      one_over_radii: Vec3::splat(1.0) / radii,
      one_over_radii_squared: Vec3::splat(1.0) / radii_squared,
    }
  }

  pub fn wgs84() -> Self {
    Self::new(6378137.0, 6378137.0, 6356752.3142451793)
  }

  pub fn unit_sphere() -> Self {
    Self::new(1.0, 1.0, 1.0)
  }

  pub fn maximum_radius(&self) -> f64 {
    self.radii.max_channel()
  }

  pub fn geodetic_surface_normal(&self, position: Vec3<f64>) -> Vec3<f64> {
    (position * self.one_over_radii_squared).normalize()
  }

  pub fn geodetic_surface_normal_cartographic(&self, cartographic: &Cartographic) -> Vec3<f64> {
    let cos_latitude = cartographic.latitude.cos();
    Vec3::new(
      cos_latitude * cartographic.longitude.cos(),
      cos_latitude * cartographic.longitude.sin(),
      cartographic.latitude.sin(),
    )
  }

  pub fn cartographic_to_cartesian(&self, cartographic: &Cartographic) -> Vec3<f64> {
    let n = self.geodetic_surface_normal_cartographic(cartographic);
    let k = self.radii_squared * n;
    let gamma = n.dot(k).sqrt();
    k / gamma + n * cartographic.height
  }

  /// nearest point on the ellipsoid surface along the geodetic normal
  /// through `position`. None only for the degenerate center point.
  pub fn scale_to_geodetic_surface(&self, position: Vec3<f64>) -> Option<Vec3<f64>> {
    let normalized = position * self.one_over_radii;
    let normalized2 = normalized * normalized;
    let squared_norm = normalized2.x + normalized2.y + normalized2.z;
    let ratio = (1.0 / squared_norm).sqrt();

    // deep inside the ellipsoid the newton iteration is ill conditioned,
    // spherical scaling is the accepted answer there
    if squared_norm < 0.1 {
      return ratio.is_finite().then(|| position * ratio);
    }

    let intersection = position * ratio;
    let gradient = intersection * self.one_over_radii_squared * 2.0;
    let mut lambda = (1.0 - ratio) * position.length() / (0.5 * gradient.length());
    let mut correction = 0.0;

    let oors = self.one_over_radii_squared;
    let mut multiplier;
    loop {
      lambda -= correction;
      multiplier = oors.map(|o| 1.0 / (1.0 + lambda * o));
      let multiplier2 = multiplier * multiplier;
      let multiplier3 = multiplier2 * multiplier;

      let func = normalized2.dot(multiplier2) - 1.0;
      let denominator = (normalized2 * multiplier3).dot(oors);
      correction = func / (-2.0 * denominator);

      if func.abs() <= 1.0e-12 {
        break;
      }
    }

    Some(position * multiplier)
  }

  pub fn cartesian_to_cartographic(&self, position: Vec3<f64>) -> Option<Cartographic> {
    let surface_point = self.scale_to_geodetic_surface(position)?;
    let normal = self.geodetic_surface_normal(surface_point);
    let height_vector = position - surface_point;

    let longitude = normal.y.atan2(normal.x);
    let latitude = normal.z.asin();
    let height = height_vector.dot(position).signum() * height_vector.length();

    Some(Cartographic::new(longitude, latitude, height))
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn unit_sphere_surface_point() {
    let ellipsoid = Ellipsoid::unit_sphere();
    let c = ellipsoid
      .cartesian_to_cartographic(Vec3::new(2.0, 0.0, 0.0))
      .unwrap();
    assert!(c.longitude.abs() < 1e-12);
    assert!(c.latitude.abs() < 1e-12);
    assert!((c.height - 1.0).abs() < 1e-9);
  }

  #[test]
  fn wgs84_round_trip() {
    let ellipsoid = Ellipsoid::wgs84();
    for &(lon, lat, h) in &[
      (0.3, 0.6, 1200.0),
      (-2.1, -0.9, 0.0),
      (3.0, 1.2, 8848.0),
      (0.0, 0.0, -100.0),
    ] {
      let position = ellipsoid.cartographic_to_cartesian(&Cartographic::new(lon, lat, h));
      let back = ellipsoid.cartesian_to_cartographic(position).unwrap();
      assert!((back.longitude - lon).abs() < 1e-9);
      assert!((back.latitude - lat).abs() < 1e-9);
      assert!((back.height - h).abs() < 1e-4);
    }
  }

  #[test]
  fn center_has_no_cartographic() {
    let ellipsoid = Ellipsoid::wgs84();
    assert!(ellipsoid.cartesian_to_cartographic(Vec3::zero()).is_none());
  }
}
