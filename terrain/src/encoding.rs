use serde::{Deserialize, Serialize};
use terracast_algebra::{Vec2, Vec3};

/// how the flat vertex buffer decodes into full positions. records are
/// `stride` f32 components laid out [X, Y, Z, H, U, V, ..] with the
/// position stored relative to the tile center.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainEncoding {
  pub center: Vec3<f64>,
  pub stride: usize,
}

impl TerrainEncoding {
  pub fn new(center: Vec3<f64>, stride: usize) -> Self {
    Self { center, stride }
  }

  pub fn decode_position(&self, vertices: &[f32], index: usize) -> Vec3<f64> {
    let record = index * self.stride;
    Vec3::new(
      vertices[record] as f64,
      vertices[record + 1] as f64,
      vertices[record + 2] as f64,
    ) + self.center
  }

  pub fn decode_height(&self, vertices: &[f32], index: usize) -> f64 {
    vertices[index * self.stride + 3] as f64
  }

  pub fn decode_texture_coordinates(&self, vertices: &[f32], index: usize) -> Vec2<f64> {
    let record = index * self.stride;
    Vec2::new(vertices[record + 4] as f64, vertices[record + 5] as f64)
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn decode_applies_center_and_stride() {
    let encoding = TerrainEncoding::new(Vec3::new(100.0, 200.0, 300.0), 7);
    #[rustfmt::skip]
    let vertices = [
      1.0, 2.0, 3.0, 10.0, 0.0, 0.5, 9.0, // vertex 0, one extra attribute
      4.0, 5.0, 6.0, 20.0, 1.0, 0.25, 9.0, // vertex 1
    ];

    assert_eq!(
      encoding.decode_position(&vertices, 1),
      Vec3::new(104.0, 205.0, 306.0)
    );
    assert_eq!(encoding.decode_height(&vertices, 1), 20.0);
    assert_eq!(
      encoding.decode_texture_coordinates(&vertices, 0),
      Vec2::new(0.0, 0.5)
    );
  }
}
