use std::fmt::Debug;

use num_traits::{Float, FromPrimitive, NumAssign};

/// the scalar type our geometry is generic over. f32 and f64 satisfy this
/// automatically through the blanket impl.
pub trait Scalar:
  Float + FromPrimitive + NumAssign + Default + Debug + Send + Sync + 'static
{
  #[inline(always)]
  fn two() -> Self {
    Self::one() + Self::one()
  }

  #[inline(always)]
  fn half() -> Self {
    Self::one() / Self::two()
  }

  /// lossy literal lift, infallible for the float scalars we instantiate
  #[inline(always)]
  fn by_f64(v: f64) -> Self {
    Self::from_f64(v).unwrap()
  }
}

impl<T> Scalar for T where
  T: Float + FromPrimitive + NumAssign + Default + Debug + Send + Sync + 'static
{
}
