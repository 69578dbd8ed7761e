mod scalar;
mod vec2;
mod vec3;

pub use scalar::*;
pub use vec2::*;
pub use vec3::*;
