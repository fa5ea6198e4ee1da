mod component;
mod render;
pub mod scene;

pub use component::MapCanvas;
pub use scene::{MapScene, ViewTransform};
