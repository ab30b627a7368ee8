//! Use-Case-Funktionen für den Popup-Lifecycle.

use crate::app::SessionState;
use crate::app::mode::InteractionMode;
use crate::core::LngLat;

/// Platziert das pending Popup an der Klick-Position.
pub fn place(state: &mut SessionState, at: LngLat) {
    state.popup_location = Some(at);
}

/// Verwirft das pending Popup.
pub fn clear(state: &mut SessionState) {
    state.popup_location = None;
}

/// Verwirft das Popup, falls der Modus Location-Select verlassen hat.
///
/// Greift auch ohne Klick, damit kein verwaistes Popup einen anderweitig
/// ausgelösten Modus-Wechsel überlebt.
pub fn sync_to_mode(state: &mut SessionState) {
    if state.mode() != InteractionMode::LocationSelect && state.popup_location.is_some() {
        log::debug!("Popup verworfen: Modus hat Location-Select verlassen");
        state.popup_location = None;
    }
}
