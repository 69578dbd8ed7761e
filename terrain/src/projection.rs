use terracast_algebra::Vec3;

use crate::{Cartographic, Ellipsoid};

/// maps geodetic coordinates into the flattened scene space. the projected
/// z component carries the height through unchanged.
pub trait MapProjection {
  fn ellipsoid(&self) -> &Ellipsoid;

  fn project(&self, cartographic: &Cartographic) -> Vec3<f64>;

  fn unproject(&self, position: Vec3<f64>) -> Cartographic;
}

/// equirectangular: meters along the equator per radian of longitude and
/// latitude alike.
pub struct GeographicProjection {
  ellipsoid: Ellipsoid,
  semimajor_axis: f64,
  one_over_semimajor_axis: f64,
}

impl Default for GeographicProjection {
  fn default() -> Self {
    Self::new(Ellipsoid::wgs84())
  }
}

impl GeographicProjection {
  pub fn new(ellipsoid: Ellipsoid) -> Self {
    let semimajor_axis = ellipsoid.maximum_radius();
    Self {
      ellipsoid,
      semimajor_axis,
      one_over_semimajor_axis: 1.0 / semimajor_axis,
    }
  }
}

impl MapProjection for GeographicProjection {
  fn ellipsoid(&self) -> &Ellipsoid {
    &self.ellipsoid
  }

  fn project(&self, cartographic: &Cartographic) -> Vec3<f64> {
    Vec3::new(
      cartographic.longitude * self.semimajor_axis,
      cartographic.latitude * self.semimajor_axis,
      cartographic.height,
    )
  }

  fn unproject(&self, position: Vec3<f64>) -> Cartographic {
    Cartographic::new(
      position.x * self.one_over_semimajor_axis,
      position.y * self.one_over_semimajor_axis,
      position.z,
    )
  }
}

/// spherical web mercator. latitudes beyond the square-map limit clamp.
pub struct WebMercatorProjection {
  ellipsoid: Ellipsoid,
  semimajor_axis: f64,
  one_over_semimajor_axis: f64,
}

impl Default for WebMercatorProjection {
  fn default() -> Self {
    Self::new(Ellipsoid::wgs84())
  }
}

impl WebMercatorProjection {
  /// the latitude where the square web mercator map ends
  pub const MAXIMUM_LATITUDE: f64 = 1.4844222297453324;

  pub fn new(ellipsoid: Ellipsoid) -> Self {
    let semimajor_axis = ellipsoid.maximum_radius();
    Self {
      ellipsoid,
      semimajor_axis,
      one_over_semimajor_axis: 1.0 / semimajor_axis,
    }
  }

  pub fn geodetic_latitude_to_mercator_angle(latitude: f64) -> f64 {
    let latitude = latitude.clamp(-Self::MAXIMUM_LATITUDE, Self::MAXIMUM_LATITUDE);
    let sin_latitude = latitude.sin();
    0.5 * ((1.0 + sin_latitude) / (1.0 - sin_latitude)).ln()
  }

  pub fn mercator_angle_to_geodetic_latitude(mercator_angle: f64) -> f64 {
    std::f64::consts::FRAC_PI_2 - 2.0 * (-mercator_angle).exp().atan()
  }
}

impl MapProjection for WebMercatorProjection {
  fn ellipsoid(&self) -> &Ellipsoid {
    &self.ellipsoid
  }

  fn project(&self, cartographic: &Cartographic) -> Vec3<f64> {
    Vec3::new(
      cartographic.longitude * self.semimajor_axis,
      Self::geodetic_latitude_to_mercator_angle(cartographic.latitude) * self.semimajor_axis,
      cartographic.height,
    )
  }

  fn unproject(&self, position: Vec3<f64>) -> Cartographic {
    Cartographic::new(
      position.x * self.one_over_semimajor_axis,
      Self::mercator_angle_to_geodetic_latitude(position.y * self.one_over_semimajor_axis),
      position.z,
    )
  }
}
