use serde::{Deserialize, Serialize};

/// the view mode of the scene consuming the mesh. every mode other than
/// `Scene3D` renders projected coordinates, so picking has to resolve
/// positions through the active projection there.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SceneMode {
  Scene3D,
  ColumbusView,
  Scene2D,
  Morphing,
}

impl SceneMode {
  pub fn is_scene3d(&self) -> bool {
    matches!(self, SceneMode::Scene3D)
  }
}
