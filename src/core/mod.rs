//! Core-Domänentypen: Koordinaten, Punkte, Bounding-Box, Mercator, Viewport.

pub mod geo;
pub mod mercator;
pub mod viewport;

pub use geo::{bounds_of, GeoBounds, GeoPoint, LngLat, PointId};
pub use mercator::{fit_bounds, project, unproject, CameraFit, FitOptions};
pub use viewport::Viewport;
