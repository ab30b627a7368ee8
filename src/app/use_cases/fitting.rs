//! Use-Case-Funktionen für Bounds-Fit und Surface-Lifecycle.

use anyhow::ensure;
use glam::DVec2;

use crate::app::inputs::StoreSnapshot;
use crate::app::SessionState;
use crate::core::{bounds_of, fit_bounds, GeoBounds, Viewport};
use crate::shared::SessionOptions;

use super::aggregate;

/// Auth-Bounds des Snapshots, sofern alle Ecken-Koordinaten brauchbar sind.
/// Teilweise oder unbrauchbar gesetzte Bounds zählen wie fehlende.
fn usable_auth_bounds(inputs: &StoreSnapshot) -> Option<&GeoBounds> {
    inputs.auth_bounds.as_ref().filter(|b| b.is_usable())
}

/// Berechnet den provisorischen Viewport vor dem Surface-Ready-Event.
///
/// Gegen die nominale Größe gefittet, damit überhaupt eine Kamera existiert;
/// der Zoom bleibt auf dem Session-Default und wird nicht vom Fitter
/// übernommen. Das Ready-Event ersetzt diesen Wert gegen die realen Maße.
pub fn provisional_viewport(options: &SessionOptions, inputs: &StoreSnapshot) -> Viewport {
    let size = options.provisional_size_px();
    let mut viewport = Viewport::new(
        options.fallback_latitude,
        options.fallback_longitude,
        options.default_zoom,
        size.x,
        size.y,
    );

    if let Some(bounds) = usable_auth_bounds(inputs) {
        match fit_bounds(bounds, size, &options.bounds_fit_options()) {
            Ok(fit) => {
                viewport.latitude = fit.latitude;
                viewport.longitude = fit.longitude;
            }
            Err(e) => {
                log::warn!("Provisorischer Bounds-Fit fehlgeschlagen: {:#}", e);
            }
        }
    }

    viewport
}

/// Verarbeitet das Surface-Ready-Event mit den realen Pixelmaßen.
///
/// Passt die Auth-Bounds gegen die echte Größe ein (Fallback-Zentrum ohne
/// Bounds, der Zoom bleibt dann unverändert) und öffnet das Refit-Gate.
/// Ein wiederholtes Ready-Event wird gewarnt und ignoriert.
pub fn surface_ready(state: &mut SessionState, size: DVec2) -> anyhow::Result<()> {
    if state.surface_loaded {
        log::warn!("Surface-Ready erneut gemeldet, Event wird ignoriert");
        return Ok(());
    }

    ensure!(
        size.x.is_finite() && size.y.is_finite() && size.x > 0.0 && size.y > 0.0,
        "Surface meldet ungültige Pixelgröße {}x{}",
        size.x,
        size.y
    );

    state.viewport.width = size.x;
    state.viewport.height = size.y;

    if let Some(bounds) = usable_auth_bounds(&state.inputs) {
        let fit = fit_bounds(bounds, size, &state.options.bounds_fit_options())?;
        state.viewport.latitude = fit.latitude;
        state.viewport.longitude = fit.longitude;
        state.viewport.zoom = fit.zoom;
    } else {
        state.viewport.latitude = state.options.fallback_latitude;
        state.viewport.longitude = state.options.fallback_longitude;
    }

    state.viewport.transition_ms = state.options.transition_ms;
    state.surface_loaded = true;

    log::info!(
        "Surface geladen ({}x{}), Kamera: ({:.4}, {:.4}) zoom {:.2}",
        size.x,
        size.y,
        state.viewport.latitude,
        state.viewport.longitude,
        state.viewport.zoom
    );

    Ok(())
}

/// Passt die aggregierte Punktmenge neu in den Viewport ein.
///
/// Vor Surface-Ready ein dokumentierter No-op (es gibt keine gültige
/// Pixelgröße); eine leere Punktmenge lässt den Viewport unverändert.
/// Identische Eingaben erzeugen exakt denselben Ziel-Viewport, der
/// feldweise Gleichheits-Guard unterdrückt dann die Mutation und damit
/// Animations-Neustarts.
pub fn refit_to_points(state: &mut SessionState) -> anyhow::Result<()> {
    if !state.surface_loaded {
        log::debug!("Refit vor Surface-Ready verworfen");
        return Ok(());
    }

    let points = aggregate::rendered_point_set(
        &state.inputs.catalog,
        &state.inputs.filtered,
        state.inputs.candidate.as_ref(),
    )?;

    let Some(bounds) = bounds_of(&points) else {
        return Ok(());
    };

    let fit = fit_bounds(
        &bounds,
        state.viewport.size(),
        &state.options.point_fit_options(),
    )?;

    let mut next = state.viewport.clone();
    next.latitude = fit.latitude;
    next.longitude = fit.longitude;
    next.zoom = fit.zoom;
    next.transition_ms = state.options.transition_ms;

    if next != state.viewport {
        log::debug!(
            "Refit auf {} Punkte: ({:.4}, {:.4}) zoom {:.2}",
            points.len(),
            next.latitude,
            next.longitude,
            next.zoom
        );
        state.viewport = next;
    }

    Ok(())
}
