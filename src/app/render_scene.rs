//! Builder für Render-Szenen aus dem SessionState.

use crate::app::use_cases::aggregate;
use crate::app::SessionState;
use crate::shared::render_scene::{MarkerSprite, OverlayPanel, PopupWidget};
use crate::shared::RenderScene;

use super::mode::InteractionMode;

/// Baut eine RenderScene aus dem aktuellen SessionState.
///
/// Marker und Popup sind an das externe Editor-Flag gebunden (die Surface
/// ignoriert dann auch Pointer-Events); das Overlay hängt nur vom
/// abgeleiteten Interaktionsmodus ab.
pub fn build(state: &SessionState) -> anyhow::Result<RenderScene> {
    let mode = state.mode();
    let editor_active = state.inputs.editor_active;

    let markers = if editor_active {
        aggregate::rendered_point_set(
            &state.inputs.catalog,
            &state.inputs.filtered,
            state.inputs.candidate.as_ref(),
        )?
        .into_iter()
        .map(MarkerSprite::new)
        .collect()
    } else {
        Vec::new()
    };

    let popup = if editor_active {
        state.popup_location.map(|location| PopupWidget {
            location,
            status: state.inputs.status.clone(),
        })
    } else {
        None
    };

    let overlay = match mode {
        InteractionMode::LocationSelect => Some(OverlayPanel::SelectionHelp),
        InteractionMode::EditPoint => Some(OverlayPanel::PointEditor { is_edit: true }),
        InteractionMode::AddPoint => Some(OverlayPanel::PointEditor { is_edit: false }),
        InteractionMode::Idle => None,
    };

    Ok(RenderScene {
        viewport: state.viewport.clone(),
        markers,
        popup,
        overlay,
        interactive: editor_active,
        map_style: state.options.map_style.clone(),
        access_token: state.options.access_token.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::inputs::StoreSnapshot;
    use crate::core::{GeoPoint, LngLat, PointId};
    use crate::shared::SessionOptions;

    fn snapshot() -> StoreSnapshot {
        StoreSnapshot {
            catalog: vec![
                GeoPoint::new(PointId(1), -122.41, 37.77),
                GeoPoint::new(PointId(2), -122.43, 37.76),
            ],
            editor_active: true,
            ..Default::default()
        }
    }

    #[test]
    fn inactive_editor_renders_no_markers_and_blocks_pointer() {
        let mut inputs = snapshot();
        inputs.editor_active = false;
        let state = SessionState::new(SessionOptions::default(), inputs);

        let scene = build(&state).expect("Szene sollte baubar sein");

        assert!(!scene.has_markers());
        assert!(!scene.interactive);
        assert!(scene.popup.is_none());
    }

    #[test]
    fn candidate_marker_uses_alternate_styling() {
        let mut inputs = snapshot();
        inputs.candidate = Some(LngLat::new(9.18, 48.78));
        let state = SessionState::new(SessionOptions::default(), inputs);

        let scene = build(&state).expect("Szene sollte baubar sein");

        assert_eq!(scene.markers.len(), 3);
        let candidate = scene.markers.last().expect("Kandidat sollte markiert sein");
        assert!(candidate.alternate);
        assert!(scene.markers[..2].iter().all(|m| !m.alternate));
    }

    #[test]
    fn popup_is_annotated_with_application_status() {
        let mut inputs = snapshot();
        inputs.status = "ADD POINT".to_string();
        inputs.location_select = true;
        let mut state = SessionState::new(SessionOptions::default(), inputs);
        state.popup_location = Some(LngLat::new(9.18, 48.78));

        let scene = build(&state).expect("Szene sollte baubar sein");

        let popup = scene.popup.expect("Popup sollte gerendert werden");
        assert_eq!(popup.status, "ADD POINT");
        assert_eq!(
            scene.overlay,
            Some(OverlayPanel::SelectionHelp),
            "Location-Select rendert den Hilfetext, nicht den Editor"
        );
    }

    #[test]
    fn edit_status_renders_point_editor_overlay() {
        let mut inputs = snapshot();
        inputs.status = "EDIT POINT".to_string();
        let state = SessionState::new(SessionOptions::default(), inputs);

        let scene = build(&state).expect("Szene sollte baubar sein");

        assert_eq!(
            scene.overlay,
            Some(OverlayPanel::PointEditor { is_edit: true })
        );
    }
}
