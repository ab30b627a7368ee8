//! Mapping von Surface-/Store-Intents auf mutierende Map-Commands.

use super::mode::{InteractionMode, PointerButton};
use super::{MapCommand, MapIntent, SessionState};

/// Übersetzt einen `MapIntent` in eine Sequenz ausführbarer `MapCommand`s.
///
/// Hier lebt die Klick-Interpretation: nur ein Sekundär-Klick im
/// Location-Select-Modus platziert die Kandidaten-Position, jeder andere
/// Klick verwirft sie. Dieselbe Gesten-Symmetrie erlaubt Platzieren und
/// Abbrechen ohne zusätzliches UI.
pub fn map_intent_to_commands(state: &SessionState, intent: MapIntent) -> Vec<MapCommand> {
    match intent {
        // Nach dem Ready-Fit wird die zum Ready-Zeitpunkt aktuelle Punktmenge
        // eingerahmt; vor Ready verworfene Refits werden nicht nachgeholt
        MapIntent::SurfaceReady { size } => {
            vec![MapCommand::FitSurface { size }, MapCommand::RefitToPoints]
        }
        MapIntent::InputsChanged { snapshot } => vec![
            MapCommand::ApplySnapshot { snapshot },
            MapCommand::SyncPopupToMode,
            MapCommand::RefitToPoints,
        ],
        MapIntent::PointerClicked { button, lng_lat } => {
            if state.mode() == InteractionMode::LocationSelect
                && button == PointerButton::Secondary
            {
                vec![MapCommand::PlacePopup { at: lng_lat }]
            } else {
                vec![MapCommand::ClearPopup]
            }
        }
        MapIntent::UserViewportChanged { viewport } => {
            vec![MapCommand::ReplaceViewport { viewport }]
        }
        MapIntent::ZoomInRequested => vec![MapCommand::ZoomStep {
            delta: state.options.zoom_step,
        }],
        MapIntent::ZoomOutRequested => vec![MapCommand::ZoomStep {
            delta: -state.options.zoom_step,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::inputs::StoreSnapshot;
    use crate::core::LngLat;
    use crate::shared::SessionOptions;

    fn state_with(status: &str, location_select: bool) -> SessionState {
        let snapshot = StoreSnapshot {
            status: status.to_string(),
            location_select,
            ..Default::default()
        };
        SessionState::new(SessionOptions::default(), snapshot)
    }

    #[test]
    fn secondary_click_in_location_select_places_popup() {
        let state = state_with("ADD POINT", true);
        let commands = map_intent_to_commands(
            &state,
            MapIntent::PointerClicked {
                button: PointerButton::Secondary,
                lng_lat: LngLat::new(9.18, 48.78),
            },
        );

        assert!(matches!(
            commands.as_slice(),
            [MapCommand::PlacePopup { at }] if at.longitude == 9.18
        ));
    }

    #[test]
    fn primary_click_in_location_select_clears_popup() {
        let state = state_with("ADD POINT", true);
        let commands = map_intent_to_commands(
            &state,
            MapIntent::PointerClicked {
                button: PointerButton::Primary,
                lng_lat: LngLat::new(9.18, 48.78),
            },
        );

        assert!(matches!(commands.as_slice(), [MapCommand::ClearPopup]));
    }

    #[test]
    fn secondary_click_outside_location_select_clears_popup() {
        let state = state_with("idle", false);
        let commands = map_intent_to_commands(
            &state,
            MapIntent::PointerClicked {
                button: PointerButton::Secondary,
                lng_lat: LngLat::new(9.18, 48.78),
            },
        );

        assert!(matches!(commands.as_slice(), [MapCommand::ClearPopup]));
    }

    #[test]
    fn inputs_changed_applies_syncs_and_refits_in_order() {
        let state = state_with("idle", false);
        let commands = map_intent_to_commands(
            &state,
            MapIntent::InputsChanged {
                snapshot: StoreSnapshot::default(),
            },
        );

        assert!(matches!(
            commands.as_slice(),
            [
                MapCommand::ApplySnapshot { .. },
                MapCommand::SyncPopupToMode,
                MapCommand::RefitToPoints,
            ]
        ));
    }
}
