use serde::{Deserialize, Serialize};

/// geodetic coordinate. longitude and latitude are radians, height is
/// meters above the ellipsoid surface.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cartographic {
  pub longitude: f64,
  pub latitude: f64,
  pub height: f64,
}

impl Cartographic {
  pub fn new(longitude: f64, latitude: f64, height: f64) -> Self {
    Self {
      longitude,
      latitude,
      height,
    }
  }

  pub fn from_degrees(longitude: f64, latitude: f64, height: f64) -> Self {
    Self::new(longitude.to_radians(), latitude.to_radians(), height)
  }
}
