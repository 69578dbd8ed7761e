use serde::{Deserialize, Serialize};

pub trait IndexGet {
  type Output;

  fn index_get(&self, key: usize) -> Option<Self::Output>;
}

/// the triangle list index buffer, three consecutive entries per triangle,
/// winding order significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerrainIndices {
  Uint16(Vec<u16>),
  Uint32(Vec<u32>),
}

impl TerrainIndices {
  pub fn len(&self) -> usize {
    match self {
      Self::Uint16(v) => v.len(),
      Self::Uint32(v) => v.len(),
    }
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  pub fn triangle_count(&self) -> usize {
    self.len() / 3
  }
}

impl IndexGet for TerrainIndices {
  type Output = usize;

  fn index_get(&self, key: usize) -> Option<usize> {
    match self {
      Self::Uint16(v) => v.get(key).map(|i| *i as usize),
      Self::Uint32(v) => v.get(key).map(|i| *i as usize),
    }
  }
}

impl From<Vec<u16>> for TerrainIndices {
  fn from(v: Vec<u16>) -> Self {
    Self::Uint16(v)
  }
}

impl From<Vec<u32>> for TerrainIndices {
  fn from(v: Vec<u32>) -> Self {
    Self::Uint32(v)
  }
}
