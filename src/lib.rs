//! Stay-zone and day-trip clustering for sets of geographic points
//!
//! Given the places a traveler cares about, computes where to stay (a robust
//! center and radius that ignores far-flung outliers) and how to group the
//! places into a few labeled day trips.
//!
//! ```
//! use stayzone::{GeoPoint, calculate_zone, cluster_points};
//!
//! let favorites = vec![
//!     GeoPoint::new(1.300, 103.800),
//!     GeoPoint::new(1.301, 103.801),
//!     GeoPoint::new(1.299, 103.799),
//!     GeoPoint::new(1.300, 103.802),
//!     GeoPoint::new(1.450, 103.950),
//! ];
//!
//! let zone = calculate_zone(&favorites).unwrap();
//! assert_eq!(zone.outlier_points.len(), 1);
//!
//! let clusters = cluster_points(&favorites, 4);
//! assert_eq!(clusters[0].label, "Central");
//! ```
pub mod error;
pub mod geo;

pub use error::{Error, Result};
pub use geo::{
    Bounds, ClusterConfig, FilterPolicy, GeoCluster, GeoPoint, Located, MainClusterBounds,
    Partition, ProximityResult, ZoneConfig, ZoneResult, calculate_zone, calculate_zone_with,
    circle_polygon, cluster_points, cluster_points_with, distance, filter_outliers,
    filter_outliers_with, filter_proximity, filter_proximity_with, main_cluster_bounds, mean,
    spatial_median,
};
