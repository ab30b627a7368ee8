//! Geographische Basistypen: Koordinaten, Punkte, Bounding-Box.

use serde::{Deserialize, Serialize};

/// Geographische Koordinate (Grad, WGS84-Lage).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LngLat {
    /// Längengrad in Grad (Ost positiv)
    pub longitude: f64,
    /// Breitengrad in Grad (Nord positiv)
    pub latitude: f64,
}

impl LngLat {
    /// Erstellt eine Koordinate aus Längen- und Breitengrad.
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Gibt `true` zurück, wenn beide Komponenten endliche Zahlen sind.
    pub fn is_finite(&self) -> bool {
        self.longitude.is_finite() && self.latitude.is_finite()
    }
}

/// Eindeutiger Punkt-Identifier aus dem Katalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PointId(pub u64);

impl PointId {
    /// Reservierter Identifier für die noch nicht persistierte Kandidaten-Position.
    /// Downstream-Renderer stylen diesen Punkt abweichend.
    pub const NEW_LOCATION: Self = Self(u64::MAX);
}

/// Einzelner geographischer Punkt mit Identität.
///
/// Gleichheit ausschließlich über den Identifier, nicht über die Koordinaten.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Identifier des Punkts
    pub id: PointId,
    /// Längengrad in Grad
    pub longitude: f64,
    /// Breitengrad in Grad
    pub latitude: f64,
}

impl GeoPoint {
    /// Erstellt einen Punkt mit Identifier und Koordinaten.
    pub fn new(id: PointId, longitude: f64, latitude: f64) -> Self {
        Self {
            id,
            longitude,
            latitude,
        }
    }

    /// Koordinate des Punkts als `LngLat`.
    pub fn lng_lat(&self) -> LngLat {
        LngLat::new(self.longitude, self.latitude)
    }
}

impl PartialEq for GeoPoint {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for GeoPoint {}

/// Achsenparallele Bounding-Box in geographischen Koordinaten.
///
/// Invariante: `sw.longitude <= ne.longitude` und `sw.latitude <= ne.latitude`.
/// Degenerierte Box (sw == ne) ist zulässig.
/// Punktmengen über den Antimeridian (±180°) liefern eine Box über den
/// gesamten Längenbereich statt der kurzen Wrap-Around-Box — bekannte
/// Einschränkung des Min/Max-Ansatzes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    /// Südwest-Ecke
    pub sw: LngLat,
    /// Nordost-Ecke
    pub ne: LngLat,
}

impl GeoBounds {
    /// Erstellt eine Bounding-Box aus Südwest- und Nordost-Ecke.
    pub fn new(sw: LngLat, ne: LngLat) -> Self {
        Self { sw, ne }
    }

    /// Gibt `true` zurück, wenn alle vier Ecken-Koordinaten endlich und
    /// ungleich 0.0 sind. Der Store-Vertrag behandelt eine Koordinate 0.0
    /// wie "nicht gesetzt"; solche Bounds zählen als fehlend.
    pub fn is_usable(&self) -> bool {
        let corners = [
            self.sw.longitude,
            self.sw.latitude,
            self.ne.longitude,
            self.ne.latitude,
        ];
        corners.iter().all(|c| c.is_finite() && *c != 0.0)
    }

    /// Gibt `true` zurück, wenn die Koordinate innerhalb der Box liegt.
    pub fn contains(&self, at: LngLat) -> bool {
        at.longitude >= self.sw.longitude
            && at.longitude <= self.ne.longitude
            && at.latitude >= self.sw.latitude
            && at.latitude <= self.ne.latitude
    }
}

/// Berechnet die minimale umschließende Bounding-Box einer Punktmenge.
///
/// Leere Eingabe liefert `None`. Für einen einzelnen Punkt entsteht eine
/// degenerierte Box mit sw == ne.
pub fn bounds_of(points: &[GeoPoint]) -> Option<GeoBounds> {
    if points.is_empty() {
        return None;
    }

    let mut min_lng = f64::MAX;
    let mut max_lng = f64::MIN;
    let mut min_lat = f64::MAX;
    let mut max_lat = f64::MIN;

    for point in points {
        min_lng = min_lng.min(point.longitude);
        max_lng = max_lng.max(point.longitude);
        min_lat = min_lat.min(point.latitude);
        max_lat = max_lat.max(point.latitude);
    }

    Some(GeoBounds::new(
        LngLat::new(min_lng, min_lat),
        LngLat::new(max_lng, max_lat),
    ))
}
