//! Read-only Store-Snapshot: die extern gehaltenen Eingaben der Session.

use serde::{Deserialize, Serialize};

use crate::core::{GeoBounds, GeoPoint, LngLat};

/// Application-Status, der den Punkt-Editor im Edit-Modus rendert.
pub const STATUS_EDIT_POINT: &str = "EDIT POINT";
/// Application-Status, der den Punkt-Editor im Add-Modus rendert.
pub const STATUS_ADD_POINT: &str = "ADD POINT";

/// Momentaufnahme der store-seitigen Eingaben.
///
/// Die Session hält keine eigene Verbindung zum Store; jeder Update-Tick
/// übergibt den vollständigen Snapshot explizit. Alle Felder sind für die
/// Session read-only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreSnapshot {
    /// Auth-seitige Bounding-Box (fehlend oder unbrauchbar = Fallback-Zentrum)
    pub auth_bounds: Option<GeoBounds>,
    /// Vollständiger Punkt-Katalog
    pub catalog: Vec<GeoPoint>,
    /// Aktive Filter-Teilmenge (nicht-leer verdrängt den Katalog vollständig)
    pub filtered: Vec<GeoPoint>,
    /// In Bearbeitung befindliche Kandidaten-Position ohne persistierten Identifier
    pub candidate: Option<LngLat>,
    /// Application-Status; nur `EDIT POINT` / `ADD POINT` werden erkannt,
    /// alle anderen Werte kollabieren zu "kein Editor-Modus"
    pub status: String,
    /// Location-Select-Flag; gewinnt gegen jeden Application-Status
    pub location_select: bool,
    /// Externes Editor-Flag: gate für Marker-Rendering und Pointer-Events
    pub editor_active: bool,
}
