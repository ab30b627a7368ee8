//! Ableitung des Interaktionsmodus aus den Store-Eingaben.

use super::inputs::{STATUS_ADD_POINT, STATUS_EDIT_POINT};

/// Aktiver Interaktionsmodus der Kartenfläche.
///
/// Wird bei jedem Zugriff neu aus Application-Status und Location-Select-Flag
/// abgeleitet und nie gespeichert; Status und Flag bleiben die einzige
/// Wahrheitsquelle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// Keine Editor-Interaktion
    #[default]
    Idle,
    /// Klicks platzieren eine Kandidaten-Position
    LocationSelect,
    /// Punkt-Editor für einen neuen Punkt
    AddPoint,
    /// Punkt-Editor für einen bestehenden Punkt
    EditPoint,
}

/// Pointer-Taste eines Surface-Klicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Primäre Taste (links)
    Primary,
    /// Sekundäre Taste (rechts)
    Secondary,
    /// Mittlere Taste
    Middle,
}

/// Leitet den Interaktionsmodus aus Status und Location-Select-Flag ab.
///
/// Location-Select gewinnt unabhängig vom Application-Status; unbekannte
/// Status-Werte kollabieren zu `Idle` statt zu scheitern.
pub fn derive_mode(status: &str, location_select: bool) -> InteractionMode {
    if location_select {
        return InteractionMode::LocationSelect;
    }

    match status {
        STATUS_EDIT_POINT => InteractionMode::EditPoint,
        STATUS_ADD_POINT => InteractionMode::AddPoint,
        _ => InteractionMode::Idle,
    }
}

impl InteractionMode {
    /// Gibt `true` zurück, wenn der Punkt-Editor gerendert wird.
    pub fn renders_point_editor(&self) -> bool {
        matches!(self, Self::AddPoint | Self::EditPoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_status_without_location_select_is_edit_point() {
        assert_eq!(derive_mode("EDIT POINT", false), InteractionMode::EditPoint);
    }

    #[test]
    fn location_select_wins_over_edit_status() {
        assert_eq!(
            derive_mode("EDIT POINT", true),
            InteractionMode::LocationSelect
        );
    }

    #[test]
    fn add_status_is_add_point() {
        assert_eq!(derive_mode("ADD POINT", false), InteractionMode::AddPoint);
    }

    #[test]
    fn unknown_status_collapses_to_idle() {
        assert_eq!(derive_mode("idle", false), InteractionMode::Idle);
        assert_eq!(derive_mode("", false), InteractionMode::Idle);
        assert_eq!(derive_mode("SYNC PENDING", false), InteractionMode::Idle);
    }

    #[test]
    fn editor_is_rendered_for_add_and_edit() {
        assert!(InteractionMode::AddPoint.renders_point_editor());
        assert!(InteractionMode::EditPoint.renders_point_editor());
        assert!(!InteractionMode::LocationSelect.renders_point_editor());
        assert!(!InteractionMode::Idle.renders_point_editor());
    }
}
