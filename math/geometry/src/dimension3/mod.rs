mod box3;
mod obb;
mod ray3;
mod sphere;
mod triangle;

pub use box3::*;
pub use obb::*;
pub use ray3::*;
pub use sphere::*;
pub use triangle::*;

use crate::*;
use terracast_algebra::Vec3;

impl<T: Copy> Positioned for Vec3<T> {
  type Position = Self;

  fn position(&self) -> Self::Position {
    *self
  }
}
