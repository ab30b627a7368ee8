//! PointMap Session Core.
//! Viewport-Berechnung und Interaktionszustand als Library exportiert für
//! Einbettung, Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    build_render_scene, derive_mode, CommandLog, InteractionMode, MapCommand, MapIntent,
    MapSession, PointerButton, SessionController, SessionState, StoreSnapshot,
};
pub use core::{
    bounds_of, fit_bounds, CameraFit, FitOptions, GeoBounds, GeoPoint, LngLat, PointId, Viewport,
};
pub use shared::{MarkerSprite, OverlayPanel, PopupWidget, RenderScene, SessionOptions};
