//! Geometry helpers for land parcels.
//!
//! Area and centroid work directly on degree coordinates with a flat
//! 111 km-per-degree scale. That is a rough planar approximation, good
//! enough for the parcel sizes this system handles (a few hectares near
//! the equator), not a geodesic computation.

use crate::draft::GeographicCoordinate;

/// Approximate meters per degree, squared when scaling areas.
const DEGREE_TO_METER: f64 = 111_000.0;

/// Polygon area in square meters via the shoelace formula.
///
/// The ring is open (first point not repeated). Fewer than 3 points is
/// not a polygon and yields 0.
pub fn polygon_area_m2(coords: &[GeographicCoordinate]) -> f64 {
    if coords.len() < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..coords.len() {
        let j = (i + 1) % coords.len();
        sum += coords[i].longitude * coords[j].latitude - coords[j].longitude * coords[i].latitude;
    }
    (sum / 2.0).abs() * DEGREE_TO_METER * DEGREE_TO_METER
}

/// Arithmetic-mean centroid as `(latitude, longitude)`. `(0, 0)` for an
/// empty slice.
pub fn centroid(coords: &[GeographicCoordinate]) -> (f64, f64) {
    if coords.is_empty() {
        return (0.0, 0.0);
    }
    let n = coords.len() as f64;
    let lat: f64 = coords.iter().map(|c| c.latitude).sum();
    let lng: f64 = coords.iter().map(|c| c.longitude).sum();
    (lat / n, lng / n)
}

/// Pick a static-map zoom level from the polygon's extent.
pub fn zoom_level(coords: &[GeographicCoordinate]) -> u8 {
    let spread = coord_spread(coords);
    if spread > 0.1 {
        12
    } else if spread > 0.05 {
        13
    } else if spread > 0.02 {
        14
    } else if spread > 0.01 {
        15
    } else if spread > 0.005 {
        16
    } else {
        17
    }
}

fn coord_spread(coords: &[GeographicCoordinate]) -> f64 {
    if coords.is_empty() {
        return 0.0;
    }
    let mut lat_min = f64::INFINITY;
    let mut lat_max = f64::NEG_INFINITY;
    let mut lng_min = f64::INFINITY;
    let mut lng_max = f64::NEG_INFINITY;
    for c in coords {
        lat_min = lat_min.min(c.latitude);
        lat_max = lat_max.max(c.latitude);
        lng_min = lng_min.min(c.longitude);
        lng_max = lng_max.max(c.longitude);
    }
    (lat_max - lat_min).max(lng_max - lng_min)
}

/// Encode the ring as `lat,lng` pairs joined by `|`, closing the polygon
/// by appending the first coordinate.
pub fn encode_polygon_path(coords: &[GeographicCoordinate]) -> String {
    if coords.is_empty() {
        return String::new();
    }
    let mut parts: Vec<String> = coords
        .iter()
        .map(|c| format!("{},{}", c.latitude, c.longitude))
        .collect();
    parts.push(format!("{},{}", coords[0].latitude, coords[0].longitude));
    parts.join("|")
}

/// Build a static-map request URL for the parcel polygon.
///
/// The API key is appended by the caller's deployment config; this only
/// fixes center, zoom, and the outlined path.
pub fn build_static_map_url(coords: &[GeographicCoordinate]) -> String {
    let (lat, lng) = centroid(coords);
    let zoom = zoom_level(coords);
    let path = encode_polygon_path(coords);
    format!(
        "https://maps.googleapis.com/maps/api/staticmap?center={lat},{lng}&zoom={zoom}&size=600x400&maptype=hybrid&path=color:0xff0000ff|weight:2|{path}"
    )
}
