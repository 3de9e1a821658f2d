use log::debug;
use serde::Serialize;

use super::distance::distance;
use super::median::spatial_median;
use super::outliers::{FilterPolicy, filter_outliers_with};
use super::point::{GeoPoint, mean};

/// Radius and filtering parameters of the stay zone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneConfig {
    /// Factor applied to the farthest inlier distance
    pub padding: f64,
    /// Walkable neighbourhood
    pub min_radius_m: f64,
    /// Reasonable metro area
    pub max_radius_m: f64,
    pub filter: FilterPolicy,
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            padding: 1.2,
            min_radius_m: 400.0,
            max_radius_m: 5000.0,
            filter: FilterPolicy::default(),
        }
    }
}

/// ZoneResult is the ideal area to stay in for a set of favorites
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneResult {
    pub center_lat: f64,
    pub center_lng: f64,
    pub radius_meters: f64,
    pub cluster_points: Vec<GeoPoint>,
    pub outlier_points: Vec<GeoPoint>,
    pub clustering_applied: bool,
}

impl ZoneResult {
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(self.center_lat, self.center_lng)
    }
}

/// Calculates the stay zone for a set of favorited points
///
/// Outliers are rejected around the spatial median, then the zone is centered
/// on the mean of the remaining points with a padded, clamped radius.
///
/// Returns `None` for fewer than 2 points.
pub fn calculate_zone(favorites: &[GeoPoint]) -> Option<ZoneResult> {
    calculate_zone_with(favorites, &ZoneConfig::default())
}

/// [`calculate_zone`] with explicit configuration
pub fn calculate_zone_with(favorites: &[GeoPoint], config: &ZoneConfig) -> Option<ZoneResult> {
    if favorites.len() < 2 {
        return None;
    }

    let median = spatial_median(favorites);
    let partition = filter_outliers_with(favorites, &median, &config.filter);

    // Safe to average once the far points are gone
    let center = mean(&partition.inliers)?;

    let max_distance = partition
        .inliers
        .iter()
        .map(|p| distance(&center, p))
        .fold(0.0, f64::max);
    let radius = (max_distance * config.padding).clamp(config.min_radius_m, config.max_radius_m);

    debug!(
        "Zone at ({:.6}, {:.6}) radius {:.0} m from {} points, {} outliers",
        center.latitude,
        center.longitude,
        radius,
        favorites.len(),
        partition.outliers.len()
    );

    Some(ZoneResult {
        center_lat: center.latitude,
        center_lng: center.longitude,
        radius_meters: radius,
        clustering_applied: !partition.outliers.is_empty(),
        cluster_points: partition.inliers,
        outlier_points: partition.outliers,
    })
}
