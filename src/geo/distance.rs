use std::f64::consts::PI;

use super::point::GeoPoint;

/// Coefficient to translate from degrees to radians
pub const DEGREE_RAD: f64 = PI / 180.0;

/// Length of one degree of latitude in meters
pub const METERS_PER_DEGREE: f64 = 111_320.0;

/// Calculates planar (equirectangular) distance between two points
///
/// The longitude delta is scaled by the cosine of the mean latitude to account
/// for meridian convergence. Accurate at city and regional scale; error grows
/// for spans beyond roughly 1000 km.
///
/// # Returns
///
/// Distance in meters
pub fn distance(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let mean_lat = (a.latitude + b.latitude) / 2.0 * DEGREE_RAD;

    let dy = (a.latitude - b.latitude) * METERS_PER_DEGREE;
    let dx = (a.longitude - b.longitude) * METERS_PER_DEGREE * mean_lat.cos();

    (dx * dx + dy * dy).sqrt()
}

/// Moves a point by the given number of meters north and east
///
/// Inverse of [`distance`], using the latitude of `point` for the longitude scale.
pub fn offset_meters(point: &GeoPoint, north_m: f64, east_m: f64) -> GeoPoint {
    let lng_scale = METERS_PER_DEGREE * (point.latitude * DEGREE_RAD).cos();

    GeoPoint::new(
        point.latitude + north_m / METERS_PER_DEGREE,
        point.longitude + east_m / lng_scale,
    )
}

/// Returns `num_points` vertices evenly spaced on a circle around `center`
///
/// The first vertex lies due east of the center, the rest follow
/// counter-clockwise. The ring is not closed (last vertex != first).
pub fn circle_polygon(center: &GeoPoint, radius_m: f64, num_points: usize) -> Vec<GeoPoint> {
    (0..num_points)
        .map(|i| {
            let angle = 2.0 * PI * i as f64 / num_points as f64;
            offset_meters(center, radius_m * angle.sin(), radius_m * angle.cos())
        })
        .collect()
}
