//! Aggregation der gerenderten Punktmenge aus Katalog, Filter und Kandidat.

use anyhow::ensure;

use crate::core::{GeoPoint, LngLat, PointId};

/// Baut die geordnete Punktmenge für Rendering und Bounds-Fit.
///
/// Eine nicht-leere Filter-Teilmenge verdrängt den Katalog vollständig
/// (exklusiv, nicht additiv). Eine Kandidaten-Position wird mit dem
/// reservierten Identifier angehängt und nimmt damit am Bounds-Fit teil,
/// sodass die Karte den bearbeiteten Punkt immer mit einrahmt.
///
/// Nicht-endliche Koordinaten scheitern hier mit beschreibendem Fehler;
/// `NaN` erreicht weder Fitter noch Render-Szene.
pub fn rendered_point_set(
    catalog: &[GeoPoint],
    filtered: &[GeoPoint],
    candidate: Option<&LngLat>,
) -> anyhow::Result<Vec<GeoPoint>> {
    let base = if filtered.is_empty() { catalog } else { filtered };

    for point in base {
        ensure!(
            point.lng_lat().is_finite(),
            "Punkt {:?} hat nicht-endliche Koordinaten ({}, {})",
            point.id,
            point.longitude,
            point.latitude
        );
    }

    let mut points = base.to_vec();

    if let Some(at) = candidate {
        ensure!(
            at.is_finite(),
            "Kandidaten-Position hat nicht-endliche Koordinaten ({}, {})",
            at.longitude,
            at.latitude
        );
        points.push(GeoPoint::new(
            PointId::NEW_LOCATION,
            at.longitude,
            at.latitude,
        ));
    }

    Ok(points)
}
