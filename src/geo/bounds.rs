use serde::Serialize;

use super::median::spatial_median;
use super::outliers::filter_outliers;
use super::point::{Bounds, GeoPoint};

/// What a map should frame: the main cluster and how many points were left out
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MainClusterBounds {
    pub inliers: Vec<GeoPoint>,
    pub outlier_count: usize,
    /// Bounding region of the inliers, `None` for empty input
    pub bounds: Option<Bounds>,
}

/// Main cluster of a point set for viewport fitting
///
/// Same median-centered IQR filtering as the stay zone, without the zone
/// geometry.
pub fn main_cluster_bounds(points: &[GeoPoint]) -> MainClusterBounds {
    let center = spatial_median(points);
    let partition = filter_outliers(points, &center);

    MainClusterBounds {
        bounds: Bounds::from_points(&partition.inliers),
        outlier_count: partition.outliers.len(),
        inliers: partition.inliers,
    }
}
