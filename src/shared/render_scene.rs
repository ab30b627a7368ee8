//! Render-Szene als expliziter Übergabevertrag zwischen Session und Surface.
//!
//! Lebt im shared-Modul, da `app` sie baut und die Render-Surface sie
//! konsumiert.

use serde::{Deserialize, Serialize};

use crate::core::{GeoPoint, LngLat, PointId, Viewport};

/// Einzelner Marker auf der Karte.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerSprite {
    /// Punkt, an dem der Marker gezeichnet wird
    pub point: GeoPoint,
    /// Abweichendes Styling für die Kandidaten-Position
    pub alternate: bool,
}

impl MarkerSprite {
    /// Erstellt einen Marker; die Kandidaten-Position wird am reservierten
    /// Identifier erkannt.
    pub fn new(point: GeoPoint) -> Self {
        Self {
            alternate: point.id == PointId::NEW_LOCATION,
            point,
        }
    }
}

/// Popup-Widget an der pending Popup-Position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopupWidget {
    /// Position des Popups
    pub location: LngLat,
    /// Aktueller Application-Status (annotiert das Popup)
    pub status: String,
}

/// Overlay-Panel über der Kartenfläche.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OverlayPanel {
    /// Hilfetext für den Location-Select-Modus
    SelectionHelp,
    /// Punkt-Editor-Formular
    PointEditor {
        /// true = bestehenden Punkt bearbeiten, false = neuen anlegen
        is_edit: bool,
    },
}

/// Read-only Daten für einen Render-Frame der Surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderScene {
    /// Kamera-Zustand für diesen Frame
    pub viewport: Viewport,
    /// Zu zeichnende Marker (leer, wenn der Editor-Modus inaktiv ist)
    pub markers: Vec<MarkerSprite>,
    /// Popup an der pending Popup-Position (nur im Editor-Modus)
    pub popup: Option<PopupWidget>,
    /// Overlay über der Kartenfläche
    pub overlay: Option<OverlayPanel>,
    /// Pointer-Gate: die Surface ignoriert Pointer-Events, solange false
    pub interactive: bool,
    /// Kartenstil (opak durchgereicht)
    pub map_style: String,
    /// Access-Token (opak durchgereicht)
    pub access_token: String,
}

impl RenderScene {
    /// Gibt zurück, ob Marker zu zeichnen sind.
    pub fn has_markers(&self) -> bool {
        !self.markers.is_empty()
    }
}
