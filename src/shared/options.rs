//! Zentrale Konfiguration der PointMap-Session.
//!
//! `SessionOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Kamera ──────────────────────────────────────────────────────────

/// Fallback-Zentrum, wenn weder Auth-Bounds noch Punkte vorliegen (Breitengrad).
pub const FALLBACK_LATITUDE: f64 = 37.7577;
/// Fallback-Zentrum, wenn weder Auth-Bounds noch Punkte vorliegen (Längengrad).
pub const FALLBACK_LONGITUDE: f64 = -122.4376;
/// Initialer Zoom-Level; wird von der Session-Schicht gesetzt, nicht vom Fitter.
pub const DEFAULT_ZOOM: f64 = 10.0;
/// Obergrenze für den FitBounds-Zoom.
pub const MAX_FIT_ZOOM: f64 = 24.0;
/// Zoom-Schritt der Stufen-Zoom-Commands.
pub const ZOOM_STEP: f64 = 1.0;

// ── Fit ─────────────────────────────────────────────────────────────

/// Innenabstand beim Einpassen der Punktmenge, pro Seite in Pixeln.
pub const FIT_PADDING_PX: f64 = 20.0;
/// Versatz des Box-Zentrums beim Einpassen in Pixeln [x, y].
pub const FIT_OFFSET_PX: [f64; 2] = [40.0, 40.0];

// ── Session ─────────────────────────────────────────────────────────

/// Übergangsdauer für berechnete Kamera-Ziele in Millisekunden.
pub const TRANSITION_MS: u32 = 500;
/// Nominale Surface-Größe vor dem Surface-Ready-Event in Pixeln.
pub const PROVISIONAL_SIZE: [f64; 2] = [600.0, 600.0];

// ── Surface-Durchreichung ───────────────────────────────────────────

/// Standard-Kartenstil der Render-Surface (opak durchgereicht).
pub const DEFAULT_MAP_STYLE: &str = "mapbox://styles/mapbox/dark-v10";

/// Alle zur Laufzeit änderbaren Session-Optionen.
/// Wird als `pointmap_session.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionOptions {
    // ── Kamera ──────────────────────────────────────────────────
    /// Fallback-Zentrum (Breitengrad)
    pub fallback_latitude: f64,
    /// Fallback-Zentrum (Längengrad)
    pub fallback_longitude: f64,
    /// Initialer Zoom-Level
    pub default_zoom: f64,
    /// Obergrenze für den FitBounds-Zoom
    pub max_fit_zoom: f64,
    /// Zoom-Schritt der Stufen-Zoom-Commands
    pub zoom_step: f64,

    // ── Fit ─────────────────────────────────────────────────────
    /// Innenabstand beim Einpassen pro Seite in Pixeln
    pub fit_padding_px: f64,
    /// Versatz des Box-Zentrums in Pixeln [x, y]
    pub fit_offset_px: [f64; 2],

    // ── Session ─────────────────────────────────────────────────
    /// Übergangsdauer für berechnete Kamera-Ziele in Millisekunden
    pub transition_ms: u32,
    /// Nominale Surface-Größe vor dem Surface-Ready-Event [Breite, Höhe]
    pub provisional_size: [f64; 2],

    // ── Surface-Durchreichung ───────────────────────────────────
    /// Kartenstil der Render-Surface (opak)
    pub map_style: String,
    /// Access-Token der Render-Surface (opak)
    pub access_token: String,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            fallback_latitude: FALLBACK_LATITUDE,
            fallback_longitude: FALLBACK_LONGITUDE,
            default_zoom: DEFAULT_ZOOM,
            max_fit_zoom: MAX_FIT_ZOOM,
            zoom_step: ZOOM_STEP,
            fit_padding_px: FIT_PADDING_PX,
            fit_offset_px: FIT_OFFSET_PX,
            transition_ms: TRANSITION_MS,
            provisional_size: PROVISIONAL_SIZE,
            map_style: DEFAULT_MAP_STYLE.to_string(),
            access_token: String::new(),
        }
    }
}

impl SessionOptions {
    /// FitOptions für das Einpassen der Punktmenge (mit Padding und Offset).
    pub fn point_fit_options(&self) -> crate::core::FitOptions {
        crate::core::FitOptions {
            padding_px: self.fit_padding_px,
            offset_px: glam::DVec2::new(self.fit_offset_px[0], self.fit_offset_px[1]),
            max_zoom: self.max_fit_zoom,
        }
    }

    /// FitOptions für den Auth-Bounds-Fit (ohne Padding und Offset).
    pub fn bounds_fit_options(&self) -> crate::core::FitOptions {
        crate::core::FitOptions::bare(self.max_fit_zoom)
    }

    /// Nominale Surface-Größe als Vektor.
    pub fn provisional_size_px(&self) -> glam::DVec2 {
        glam::DVec2::new(self.provisional_size[0], self.provisional_size[1])
    }

    /// Lädt Optionen aus einer TOML-Datei, bei Fehlern Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("pointmap_session"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("pointmap_session.toml")
    }
}
