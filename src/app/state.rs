//! Session State — zentrale Datenhaltung.

use crate::core::{LngLat, Viewport};
use crate::shared::SessionOptions;

use super::command_log::CommandLog;
use super::inputs::StoreSnapshot;
use super::mode::{derive_mode, InteractionMode};
use super::use_cases;

/// Hauptzustand der Session.
///
/// Der `Viewport` wird ausschließlich hier mutiert; Modus und Popup sind
/// davon unabhängig und dürfen ohne Viewport-Zugriff neu berechnet werden.
pub struct SessionState {
    /// Aktueller Store-Snapshot (read-only Eingaben)
    pub inputs: StoreSnapshot,
    /// Kamera-Viewport; exklusiv im Besitz der Session
    pub viewport: Viewport,
    /// Ob die Render-Surface ihre reale Pixelgröße gemeldet hat.
    /// Refits vor diesem Zeitpunkt werden verworfen, nicht aufgestaut.
    pub surface_loaded: bool,
    /// Pending Popup-Position aus einem Sekundär-Klick im Location-Select-Modus
    pub popup_location: Option<LngLat>,
    /// Laufzeit-Optionen (Fallback-Zentrum, Fit-Parameter, Übergänge)
    pub options: SessionOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
}

impl SessionState {
    /// Erstellt den Session-Zustand mit provisorischem Viewport.
    ///
    /// Der provisorische Viewport wird gegen die nominale Surface-Größe
    /// berechnet, damit vor dem Surface-Ready-Event eine Kamera existiert;
    /// das Ready-Event ersetzt ihn gegen die realen Pixelmaße.
    pub fn new(options: SessionOptions, inputs: StoreSnapshot) -> Self {
        let viewport = use_cases::fitting::provisional_viewport(&options, &inputs);

        Self {
            inputs,
            viewport,
            surface_loaded: false,
            popup_location: None,
            options,
            command_log: CommandLog::new(),
        }
    }

    /// Leitet den aktuellen Interaktionsmodus aus dem Snapshot ab.
    pub fn mode(&self) -> InteractionMode {
        derive_mode(&self.inputs.status, self.inputs.location_select)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::core::{GeoBounds, LngLat};

    #[test]
    fn new_without_bounds_uses_fallback_center_and_default_zoom() {
        let state = SessionState::new(SessionOptions::default(), StoreSnapshot::default());

        assert_relative_eq!(state.viewport.latitude, 37.7577);
        assert_relative_eq!(state.viewport.longitude, -122.4376);
        assert_relative_eq!(state.viewport.zoom, 10.0);
        assert!(!state.surface_loaded);
        assert!(state.popup_location.is_none());
    }

    #[test]
    fn new_with_bounds_centers_provisionally_but_keeps_default_zoom() {
        let snapshot = StoreSnapshot {
            auth_bounds: Some(GeoBounds::new(
                LngLat::new(-122.5, 37.7),
                LngLat::new(-122.3, 37.8),
            )),
            ..Default::default()
        };
        let state = SessionState::new(SessionOptions::default(), snapshot);

        assert_relative_eq!(state.viewport.longitude, -122.4, epsilon = 1e-9);
        assert!(state.viewport.latitude > 37.7 && state.viewport.latitude < 37.8);
        // Zoom bleibt auf dem Default; der Fit-Zoom greift erst mit realer Surface-Größe
        assert_relative_eq!(state.viewport.zoom, 10.0);
    }
}
