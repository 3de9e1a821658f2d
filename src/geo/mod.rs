//! Geographic clustering engine: stay zones and day-trip clusters on (lat, lon)
pub mod bounds;
pub mod compass;
pub mod distance;
pub mod kmeans;
pub mod median;
pub mod outliers;
pub mod point;
pub mod zone;

#[cfg(test)]
mod kmeans_test;
#[cfg(test)]
mod median_test;

pub use bounds::{MainClusterBounds, main_cluster_bounds};
pub use distance::{circle_polygon, distance};
pub use kmeans::{ClusterConfig, GeoCluster, cluster_points, cluster_points_with};
pub use median::spatial_median;
pub use outliers::{
    FilterPolicy, Partition, ProximityResult, filter_outliers, filter_outliers_with,
    filter_proximity, filter_proximity_with,
};
pub use point::{Bounds, GeoPoint, Located, mean};
pub use zone::{ZoneConfig, ZoneResult, calculate_zone, calculate_zone_with};
