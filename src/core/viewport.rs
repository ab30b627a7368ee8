//! Kamera-Viewport der Kartenfläche.

use serde::{Deserialize, Serialize};

/// Kamera-Zustand der Kartenfläche.
///
/// Exklusiv im Besitz des Session-State; alle anderen Komponenten sind pure
/// Funktionen über diesem Wert. Wertgleichheit ist feldweiser Vergleich
/// (abgeleitetes `PartialEq`), nie Serialisierung.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Breitengrad des Kamera-Zentrums
    pub latitude: f64,
    /// Längengrad des Kamera-Zentrums
    pub longitude: f64,
    /// Zoom-Level
    pub zoom: f64,
    /// Surface-Breite in Pixeln
    pub width: f64,
    /// Surface-Höhe in Pixeln
    pub height: f64,
    /// Übergangsdauer zum nächsten Kamera-Ziel in Millisekunden
    /// (0 = sofort, z.B. für zurückgespiegelte User-Eingaben)
    pub transition_ms: u32,
}

impl Viewport {
    /// Erstellt einen Viewport ohne Übergang.
    pub fn new(latitude: f64, longitude: f64, zoom: f64, width: f64, height: f64) -> Self {
        Self {
            latitude,
            longitude,
            zoom,
            width,
            height,
            transition_ms: 0,
        }
    }

    /// Pixelgröße des Viewports als `[Breite, Höhe]`.
    pub fn size(&self) -> glam::DVec2 {
        glam::DVec2::new(self.width, self.height)
    }
}
