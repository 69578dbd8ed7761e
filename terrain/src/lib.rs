//! ray picking against triangulated terrain tiles, with an optional octree
//! accelerated path that answers exactly like the linear scan.

mod cartographic;
mod ellipsoid;
mod encoding;
mod indices;
mod mesh;
mod mode;
mod picking;
mod projection;
mod triangle_picking;
mod view;

pub use cartographic::*;
pub use ellipsoid::*;
pub use encoding::*;
pub use indices::*;
pub use mesh::*;
pub use mode::*;
pub use projection::*;
pub use triangle_picking::*;
pub use view::*;
