//! MapSession — Fassade über State und Controller.

use glam::DVec2;

use crate::core::{LngLat, Viewport};
use crate::shared::{RenderScene, SessionOptions};

use super::controller::SessionController;
use super::inputs::StoreSnapshot;
use super::mode::{InteractionMode, PointerButton};
use super::state::SessionState;
use super::MapIntent;

/// Session-Fassade für Einbettung in einen Host.
///
/// Bündelt State und Controller hinter den Lifecycle-Methoden, die ein Host
/// pro Event aufruft. Der zurückgegebene Wert von [`MapSession::new`] ist
/// zugleich das imperative Handle, das der Aufrufer behält.
pub struct MapSession {
    state: SessionState,
    controller: SessionController,
}

impl MapSession {
    /// Erstellt die Session mit provisorischem Viewport.
    pub fn new(options: SessionOptions, inputs: StoreSnapshot) -> Self {
        Self {
            state: SessionState::new(options, inputs),
            controller: SessionController::new(),
        }
    }

    /// Verarbeitet einen rohen Intent (für Hosts mit eigener Event-Schleife).
    pub fn handle_intent(&mut self, intent: MapIntent) -> anyhow::Result<()> {
        self.controller.handle_intent(&mut self.state, intent)
    }

    /// Die Surface meldet ihre reale Pixelgröße (genau einmal).
    pub fn on_surface_ready(&mut self, width: f64, height: f64) -> anyhow::Result<()> {
        self.handle_intent(MapIntent::SurfaceReady {
            size: DVec2::new(width, height),
        })
    }

    /// Der Store meldet geänderte Eingaben (Katalog, Filter, Kandidat, Status).
    pub fn on_inputs_changed(&mut self, snapshot: StoreSnapshot) -> anyhow::Result<()> {
        self.handle_intent(MapIntent::InputsChanged { snapshot })
    }

    /// Die Surface spiegelt eine user-getriebene Pan/Zoom-Änderung zurück.
    pub fn on_user_viewport_change(&mut self, viewport: Viewport) -> anyhow::Result<()> {
        self.handle_intent(MapIntent::UserViewportChanged { viewport })
    }

    /// Die Surface meldet einen Pointer-Klick.
    pub fn on_pointer_click(&mut self, button: PointerButton, at: LngLat) -> anyhow::Result<()> {
        self.handle_intent(MapIntent::PointerClicked {
            button,
            lng_lat: at,
        })
    }

    /// Stufenweise hineinzoomen.
    pub fn zoom_in(&mut self) -> anyhow::Result<()> {
        self.handle_intent(MapIntent::ZoomInRequested)
    }

    /// Stufenweise herauszoomen.
    pub fn zoom_out(&mut self) -> anyhow::Result<()> {
        self.handle_intent(MapIntent::ZoomOutRequested)
    }

    /// Aktueller Kamera-Viewport.
    pub fn viewport(&self) -> &Viewport {
        &self.state.viewport
    }

    /// Aktuell abgeleiteter Interaktionsmodus.
    pub fn mode(&self) -> InteractionMode {
        self.state.mode()
    }

    /// Pending Popup-Position, sofern vorhanden.
    pub fn popup_location(&self) -> Option<LngLat> {
        self.state.popup_location
    }

    /// Read-only Zugriff auf den Session-Zustand.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Baut die Render-Szene für den aktuellen Frame.
    pub fn render_scene(&self) -> anyhow::Result<RenderScene> {
        super::render_scene::build(&self.state)
    }
}
