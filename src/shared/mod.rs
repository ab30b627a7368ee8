//! Gemeinsame Verträge zwischen Session und Surface: Optionen, Render-Szene.

pub mod options;
pub mod render_scene;

pub use options::SessionOptions;
pub use render_scene::{MarkerSprite, OverlayPanel, PopupWidget, RenderScene};
