//! Session Controller für zentrale Event-Verarbeitung.

use super::use_cases;
use super::{MapCommand, MapIntent, SessionState};

/// Orchestriert Surface-/Store-Events und Use-Cases auf den SessionState.
#[derive(Default)]
pub struct SessionController;

impl SessionController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut SessionState,
        intent: MapIntent,
    ) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem SessionState aus.
    pub fn handle_command(
        &mut self,
        state: &mut SessionState,
        command: MapCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);

        match command {
            // === Store-Eingaben ===
            MapCommand::ApplySnapshot { snapshot } => state.inputs = snapshot,
            MapCommand::SyncPopupToMode => use_cases::popup::sync_to_mode(state),

            // === Kamera & Fit ===
            MapCommand::FitSurface { size } => use_cases::fitting::surface_ready(state, size)?,
            MapCommand::RefitToPoints => use_cases::fitting::refit_to_points(state)?,
            MapCommand::ReplaceViewport { viewport } => {
                use_cases::camera::replace_viewport(state, viewport)
            }
            MapCommand::ZoomStep { delta } => use_cases::camera::zoom_step(state, delta),

            // === Popup ===
            MapCommand::PlacePopup { at } => use_cases::popup::place(state, at),
            MapCommand::ClearPopup => use_cases::popup::clear(state),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::inputs::StoreSnapshot;
    use crate::shared::SessionOptions;
    use glam::DVec2;

    #[test]
    fn handle_intent_records_commands_in_log() {
        let mut controller = SessionController::new();
        let mut state = SessionState::new(SessionOptions::default(), StoreSnapshot::default());

        controller
            .handle_intent(
                &mut state,
                MapIntent::SurfaceReady {
                    size: DVec2::new(800.0, 600.0),
                },
            )
            .expect("SurfaceReady sollte ohne Fehler durchlaufen");

        let entries = state.command_log.entries();
        assert!(matches!(
            entries,
            [MapCommand::FitSurface { .. }, MapCommand::RefitToPoints]
        ));
    }

    #[test]
    fn inputs_changed_runs_apply_sync_refit() {
        let mut controller = SessionController::new();
        let mut state = SessionState::new(SessionOptions::default(), StoreSnapshot::default());

        controller
            .handle_intent(
                &mut state,
                MapIntent::InputsChanged {
                    snapshot: StoreSnapshot {
                        status: "ADD POINT".to_string(),
                        ..Default::default()
                    },
                },
            )
            .expect("InputsChanged sollte ohne Fehler durchlaufen");

        assert_eq!(state.inputs.status, "ADD POINT");
        assert_eq!(state.command_log.len(), 3);
    }
}
