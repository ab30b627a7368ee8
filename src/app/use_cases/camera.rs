//! Use-Case-Funktionen für user-getriebene Kamera-Änderungen.

use crate::app::SessionState;
use crate::core::Viewport;

/// Ersetzt den Viewport wholesale durch eine zurückgespiegelte User-Eingabe.
///
/// Ohne Übergangsdauer: der Wert spiegelt bereits ausgeführte physische
/// Eingabe, eine Animation würde hinter dem Finger herlaufen.
pub fn replace_viewport(state: &mut SessionState, mut viewport: Viewport) {
    viewport.transition_ms = 0;
    state.viewport = viewport;
}

/// Ändert den Zoom stufenweise um `delta`, geklemmt auf `[0, max_fit_zoom]`.
///
/// Vor Surface-Ready ein No-op wie jeder andere Kamera-Eingriff.
pub fn zoom_step(state: &mut SessionState, delta: f64) {
    if !state.surface_loaded {
        log::debug!("Zoom-Step vor Surface-Ready verworfen");
        return;
    }

    let zoom = (state.viewport.zoom + delta).clamp(0.0, state.options.max_fit_zoom);
    if zoom != state.viewport.zoom {
        state.viewport.zoom = zoom;
        state.viewport.transition_ms = state.options.transition_ms;
    }
}
