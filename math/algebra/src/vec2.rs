use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::Scalar;

#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2<T> {
  pub x: T,
  pub y: T,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Vec2<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Vec2<T> {}

impl<T> Vec2<T>
where
  T: Copy,
{
  #[inline(always)]
  pub fn new(x: T, y: T) -> Self {
    Self { x, y }
  }

  #[inline(always)]
  pub fn splat(v: T) -> Self {
    Self { x: v, y: v }
  }
}

impl<T> Neg for Vec2<T>
where
  T: Neg<Output = T>,
{
  type Output = Self;

  #[inline]
  fn neg(self) -> Self {
    Self {
      x: -self.x,
      y: -self.y,
    }
  }
}

impl<T> Add for Vec2<T>
where
  T: Add<Output = T>,
{
  type Output = Self;

  #[inline]
  fn add(self, other: Self) -> Self {
    Self {
      x: self.x + other.x,
      y: self.y + other.y,
    }
  }
}

impl<T> Sub for Vec2<T>
where
  T: Sub<Output = T>,
{
  type Output = Self;

  #[inline]
  fn sub(self, other: Self) -> Self {
    Self {
      x: self.x - other.x,
      y: self.y - other.y,
    }
  }
}

impl<T> Mul<T> for Vec2<T>
where
  T: Mul<Output = T> + Copy,
{
  type Output = Self;

  #[inline]
  fn mul(self, s: T) -> Self {
    Self {
      x: self.x * s,
      y: self.y * s,
    }
  }
}

impl<T> Div<T> for Vec2<T>
where
  T: Div<Output = T> + Copy,
{
  type Output = Self;

  #[inline]
  fn div(self, s: T) -> Self {
    Self {
      x: self.x / s,
      y: self.y / s,
    }
  }
}

impl<T: Scalar> Vec2<T> {
  #[inline(always)]
  pub fn zero() -> Self {
    Self::splat(T::zero())
  }

  #[inline]
  pub fn dot(&self, b: Self) -> T {
    self.x * b.x + self.y * b.y
  }

  #[inline]
  pub fn length2(&self) -> T {
    self.dot(*self)
  }

  #[inline]
  pub fn length(&self) -> T {
    self.length2().sqrt()
  }
}

impl<T: Copy> From<(T, T)> for Vec2<T> {
  fn from(v: (T, T)) -> Self {
    Self { x: v.0, y: v.1 }
  }
}
