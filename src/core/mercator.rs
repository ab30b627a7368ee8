//! Web-Mercator-Projektion und FitBounds-Berechnung.

use anyhow::ensure;
use glam::DVec2;

use super::geo::{GeoBounds, LngLat};

/// Weltbreite der Mercator-Ebene bei Zoom 0 in Pixeln.
pub const TILE_SIZE: f64 = 512.0;
/// Maximal projizierbarer Breitengrad (Web-Mercator-Abschnitt).
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_59;
/// Minimale Box-Ausdehnung in Pixeln; verhindert ±∞-Zoom bei degenerierten Boxen.
const MIN_EXTENT_PX: f64 = 1e-9;

/// Parameter für die FitBounds-Berechnung.
#[derive(Debug, Clone, Copy)]
pub struct FitOptions {
    /// Innenabstand pro Seite in Pixeln
    pub padding_px: f64,
    /// Versatz des Box-Zentrums in Pixeln [x, y]
    pub offset_px: DVec2,
    /// Obergrenze für den berechneten Zoom
    pub max_zoom: f64,
}

impl FitOptions {
    /// FitOptions ohne Padding und Offset, nur mit Zoom-Obergrenze.
    pub fn bare(max_zoom: f64) -> Self {
        Self {
            padding_px: 0.0,
            offset_px: DVec2::ZERO,
            max_zoom,
        }
    }
}

/// Ergebnis einer FitBounds-Berechnung: Kamera-Zentrum und Zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFit {
    /// Breitengrad des Kamera-Zentrums
    pub latitude: f64,
    /// Längengrad des Kamera-Zentrums
    pub longitude: f64,
    /// Zoom-Level
    pub zoom: f64,
}

/// Projiziert eine geographische Koordinate auf die Mercator-Ebene bei Zoom 0.
///
/// x wächst nach Osten, y nach Süden (Pixel-Konvention). Breitengrade werden
/// auf den projizierbaren Bereich geklemmt.
pub fn project(at: LngLat) -> DVec2 {
    let lat = at.latitude.clamp(-MAX_LATITUDE, MAX_LATITUDE);
    let sin_lat = lat.to_radians().sin();

    let x = (at.longitude / 360.0 + 0.5) * TILE_SIZE;
    let y = (0.5 - ((1.0 + sin_lat) / (1.0 - sin_lat)).ln() / (4.0 * std::f64::consts::PI))
        * TILE_SIZE;

    DVec2::new(x, y)
}

/// Rechnet einen Punkt der Mercator-Ebene (Zoom 0) in Längen-/Breitengrad zurück.
pub fn unproject(at: DVec2) -> LngLat {
    let longitude = (at.x / TILE_SIZE - 0.5) * 360.0;
    let n = std::f64::consts::PI * (1.0 - 2.0 * at.y / TILE_SIZE);
    let latitude = n.sinh().atan().to_degrees();

    LngLat::new(longitude, latitude)
}

/// Berechnet die Kamera, die eine Bounding-Box in einen Pixel-Viewport einpasst.
///
/// Zentrum ist der rückprojizierte Mittelpunkt der projizierten Box-Ecken;
/// Zoom ist der größte Level, bei dem die Box — verkleinert um `2*padding`
/// und `2*|offset|` pro Achse — in den Viewport passt, geklemmt auf
/// `[0, max_zoom]`. Deterministische Funktion ihrer Eingaben.
///
/// Der Aufrufer garantiert eine reale Pixelgröße (Surface-Ready-Gate der
/// Session); Padding/Offset dürfen den Viewport nicht vollständig aufzehren.
pub fn fit_bounds(
    bounds: &GeoBounds,
    size_px: DVec2,
    options: &FitOptions,
) -> anyhow::Result<CameraFit> {
    ensure!(
        size_px.x.is_finite() && size_px.y.is_finite() && size_px.x > 0.0 && size_px.y > 0.0,
        "FitBounds: ungültige Viewport-Größe {}x{}",
        size_px.x,
        size_px.y
    );

    // Nordwest- und Südost-Ecke auf der Pixel-Ebene (y wächst nach Süden)
    let nw = project(LngLat::new(bounds.sw.longitude, bounds.ne.latitude));
    let se = project(LngLat::new(bounds.ne.longitude, bounds.sw.latitude));

    let box_px = (se - nw).abs().max(DVec2::splat(MIN_EXTENT_PX));

    let target = size_px - 2.0 * DVec2::splat(options.padding_px) - 2.0 * options.offset_px.abs();
    ensure!(
        target.x > 0.0 && target.y > 0.0,
        "FitBounds: Padding {}px und Offset [{}, {}] zehren den {}x{}-Viewport auf",
        options.padding_px,
        options.offset_px.x,
        options.offset_px.y,
        size_px.x,
        size_px.y
    );

    let zoom = (target.x / box_px.x)
        .min(target.y / box_px.y)
        .log2()
        .clamp(0.0, options.max_zoom);

    let center = unproject((nw + se) * 0.5);

    Ok(CameraFit {
        latitude: center.latitude,
        longitude: center.longitude,
        zoom,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sf_bay_bounds() -> GeoBounds {
        GeoBounds::new(LngLat::new(-122.5, 37.7), LngLat::new(-122.3, 37.8))
    }

    #[test]
    fn project_maps_origin_to_plane_center() {
        let p = project(LngLat::new(0.0, 0.0));
        assert_relative_eq!(p.x, TILE_SIZE / 2.0);
        assert_relative_eq!(p.y, TILE_SIZE / 2.0, epsilon = 1e-9);
    }

    #[test]
    fn unproject_inverts_project() {
        let original = LngLat::new(-122.4376, 37.7577);
        let roundtrip = unproject(project(original));

        assert_relative_eq!(roundtrip.longitude, original.longitude, epsilon = 1e-9);
        assert_relative_eq!(roundtrip.latitude, original.latitude, epsilon = 1e-9);
    }

    #[test]
    fn fit_bounds_is_deterministic() {
        let bounds = sf_bay_bounds();
        let size = DVec2::new(600.0, 600.0);
        let options = FitOptions {
            padding_px: 20.0,
            offset_px: DVec2::new(40.0, 40.0),
            max_zoom: 24.0,
        };

        let a = fit_bounds(&bounds, size, &options).expect("Fit sollte gelingen");
        let b = fit_bounds(&bounds, size, &options).expect("Fit sollte gelingen");

        assert_eq!(a, b);
    }

    #[test]
    fn fit_bounds_centers_inside_box_with_positive_zoom() {
        let bounds = sf_bay_bounds();
        let fit = fit_bounds(&bounds, DVec2::new(600.0, 600.0), &FitOptions::bare(24.0))
            .expect("Fit sollte gelingen");

        assert!(bounds.contains(LngLat::new(fit.longitude, fit.latitude)));
        assert!(fit.zoom.is_finite());
        assert!(fit.zoom > 0.0);
        assert_relative_eq!(fit.longitude, -122.4, epsilon = 1e-9);
    }

    #[test]
    fn fit_bounds_padding_reduces_zoom() {
        let bounds = sf_bay_bounds();
        let size = DVec2::new(600.0, 600.0);

        let bare = fit_bounds(&bounds, size, &FitOptions::bare(24.0)).expect("Fit ohne Padding");
        let padded = fit_bounds(
            &bounds,
            size,
            &FitOptions {
                padding_px: 20.0,
                offset_px: DVec2::new(40.0, 40.0),
                max_zoom: 24.0,
            },
        )
        .expect("Fit mit Padding");

        assert!(padded.zoom < bare.zoom);
    }

    #[test]
    fn fit_bounds_degenerate_box_clamps_to_max_zoom() {
        let point = LngLat::new(9.18, 48.78);
        let bounds = GeoBounds::new(point, point);
        let fit = fit_bounds(&bounds, DVec2::new(600.0, 600.0), &FitOptions::bare(24.0))
            .expect("Degenerierte Box sollte fitbar sein");

        assert_relative_eq!(fit.zoom, 24.0);
        assert_relative_eq!(fit.longitude, point.longitude, epsilon = 1e-9);
        assert_relative_eq!(fit.latitude, point.latitude, epsilon = 1e-6);
    }

    #[test]
    fn fit_bounds_rejects_consumed_viewport() {
        let bounds = sf_bay_bounds();
        let result = fit_bounds(
            &bounds,
            DVec2::new(100.0, 100.0),
            &FitOptions {
                padding_px: 60.0,
                offset_px: DVec2::ZERO,
                max_zoom: 24.0,
            },
        );

        assert!(result.is_err());
    }
}
