pub mod octree;
pub mod utils;

pub use octree::*;
pub use utils::*;
