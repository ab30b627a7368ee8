//! MapIntent- und MapCommand-Enums für den Intent/Command-Datenfluss.

use glam::DVec2;

use crate::core::{LngLat, Viewport};

use super::inputs::StoreSnapshot;
use super::mode::PointerButton;

/// Map-Intent und Map-Command Events.
/// Intents sind Eingaben aus Surface/Store ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum MapIntent {
    /// Die Render-Surface hat ihre reale Pixelgröße gemeldet (genau einmal)
    SurfaceReady { size: DVec2 },
    /// Store-Eingaben haben sich geändert (Katalog, Filter, Kandidat, Status)
    InputsChanged { snapshot: StoreSnapshot },
    /// Pointer-Klick auf der Kartenfläche
    PointerClicked {
        button: PointerButton,
        lng_lat: LngLat,
    },
    /// User-getriebene Pan/Zoom-Änderung, von der Surface zurückgespiegelt
    UserViewportChanged { viewport: Viewport },
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
}

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum MapCommand {
    /// Neuen Store-Snapshot übernehmen
    ApplySnapshot { snapshot: StoreSnapshot },
    /// Pending Popup verwerfen, falls der Modus Location-Select verlassen hat
    SyncPopupToMode,
    /// Punktmenge neu einpassen (No-op vor Surface-Ready)
    RefitToPoints,
    /// Surface-Ready verarbeiten: reale Größe übernehmen, Bounds einpassen
    FitSurface { size: DVec2 },
    /// Viewport wholesale ersetzen (User-Eingabe, ohne Übergang)
    ReplaceViewport { viewport: Viewport },
    /// Popup an Position platzieren
    PlacePopup { at: LngLat },
    /// Popup verwerfen
    ClearPopup,
    /// Zoom um Delta ändern (geklemmt)
    ZoomStep { delta: f64 },
}
