use std::collections::HashSet;

use super::point::GeoPoint;

/// Label of the cluster nearest to the overall center
pub const CENTRAL: &str = "Central";

/// Compass labels in bin order, counter-clockwise starting due east
pub const COMPASS_LABELS: [&str; 8] = [
    "East",
    "North-East",
    "North",
    "North-West",
    "West",
    "South-West",
    "South",
    "South-East",
];

/// Angle from `from` to `to` in degrees, counter-clockwise from due east
///
/// Computed on raw coordinate deltas, range `(-180, 180]`.
pub fn bearing_degrees(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let d_lat = to.latitude - from.latitude;
    let d_lng = to.longitude - from.longitude;
    d_lat.atan2(d_lng).to_degrees()
}

/// Index into [`COMPASS_LABELS`] for a bearing
///
/// Bins are 45 degrees wide; East covers `[-22.5, 22.5)`.
pub fn compass_bin(bearing: f64) -> usize {
    ((bearing + 22.5).rem_euclid(360.0) / 45.0) as usize % COMPASS_LABELS.len()
}

pub fn compass_label(from: &GeoPoint, to: &GeoPoint) -> &'static str {
    COMPASS_LABELS[compass_bin(bearing_degrees(from, to))]
}

/// Picks the label for `bin`, or the nearest neighbouring bin not in `used`
///
/// Neighbours are tried alternately counter-clockwise then clockwise. Falls
/// back to the preferred label when every bin is taken.
pub fn unused_label(bin: usize, used: &HashSet<&'static str>) -> &'static str {
    let n = COMPASS_LABELS.len();
    for step in 0..=n / 2 {
        for candidate in [(bin + step) % n, (bin + n - step) % n] {
            let label = COMPASS_LABELS[candidate];
            if !used.contains(label) {
                return label;
            }
        }
    }
    COMPASS_LABELS[bin % n]
}
