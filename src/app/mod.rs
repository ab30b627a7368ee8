//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod inputs;
mod intent_mapping;
pub mod mode;
pub mod render_scene;
pub mod session;
/// Session State und Controller
///
/// Dieses Modul verwaltet den Zustand der Session (Viewport, Popup,
/// Store-Snapshot).
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::SessionController;
pub use events::{MapCommand, MapIntent};
pub use inputs::{StoreSnapshot, STATUS_ADD_POINT, STATUS_EDIT_POINT};
pub use mode::{derive_mode, InteractionMode, PointerButton};
pub use render_scene::build as build_render_scene;
pub use session::MapSession;
pub use state::SessionState;
