//! Day-trip clustering: deterministic k-means over geographic points
//!
//! Seeding is farthest-first from the point nearest the spatial median, so the
//! same input always produces the same clusters. Ties everywhere go to the
//! lowest index.

use std::collections::HashSet;

use log::{debug, trace};
use serde::Serialize;

use super::compass::{CENTRAL, bearing_degrees, compass_bin, unused_label};
use super::distance::distance;
use super::median::spatial_median;
use super::point::GeoPoint;

/// Marker colors, assigned by cluster id
pub const PALETTE: [&str; 4] = ["#3B82F6", "#10B981", "#F59E0B", "#EF4444"];

/// Clustering parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusterConfig {
    pub max_clusters: usize,
    /// Upper bound on Lloyd rounds
    pub max_iterations: usize,
    /// Factor applied to the farthest member distance
    pub padding: f64,
    pub min_radius_m: f64,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            max_clusters: 4,
            max_iterations: 20,
            padding: 1.15,
            min_radius_m: 200.0,
        }
    }
}

/// GeoCluster is one day-trip grouping
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoCluster {
    pub id: usize,
    pub center: GeoPoint,
    pub points: Vec<GeoPoint>,
    pub radius_meters: f64,
    pub label: String,
    pub color: String,
}

/// Partitions points into at most `max_clusters` labeled clusters
///
/// Clusters come back largest first with ids `0..k`. Every input point ends
/// up in exactly one cluster.
pub fn cluster_points(points: &[GeoPoint], max_clusters: usize) -> Vec<GeoCluster> {
    let config = ClusterConfig {
        max_clusters,
        ..ClusterConfig::default()
    };
    cluster_points_with(points, &config)
}

/// [`cluster_points`] with explicit configuration
///
/// A `max_clusters` below 2 always yields a single cluster.
pub fn cluster_points_with(points: &[GeoPoint], config: &ClusterConfig) -> Vec<GeoCluster> {
    if points.is_empty() {
        return Vec::new();
    }
    if points.len() <= 3 || config.max_clusters < 2 {
        return vec![single_cluster(points, config)];
    }

    let k = points.len().div_ceil(4).clamp(2, config.max_clusters);
    let median = spatial_median(points);
    debug!("Clustering {} points into k={}", points.len(), k);

    let seeds = farthest_first_seeds(points, &median, k);
    let (centroids, assignments) = lloyd(points, &seeds, config.max_iterations);

    let mut clusters: Vec<GeoCluster> = centroids
        .iter()
        .enumerate()
        .filter_map(|(c, centroid)| {
            let members: Vec<GeoPoint> = points
                .iter()
                .zip(&assignments)
                .filter(|&(_, &a)| a == c)
                .map(|(p, _)| *p)
                .collect();
            if members.is_empty() {
                trace!("Dropping empty cluster {}", c);
                return None;
            }
            Some(GeoCluster {
                id: c,
                center: *centroid,
                radius_meters: padded_radius(centroid, &members, config),
                points: members,
                label: String::new(),
                color: String::new(),
            })
        })
        .collect();

    // Stable: equal sizes keep discovery order
    clusters.sort_by(|a, b| b.points.len().cmp(&a.points.len()));
    for (id, cluster) in clusters.iter_mut().enumerate() {
        cluster.id = id;
        cluster.color = PALETTE[id % PALETTE.len()].to_string();
    }

    assign_labels(&mut clusters, &median);
    clusters
}

fn single_cluster(points: &[GeoPoint], config: &ClusterConfig) -> GeoCluster {
    let center = spatial_median(points);
    GeoCluster {
        id: 0,
        center,
        points: points.to_vec(),
        radius_meters: padded_radius(&center, points, config),
        label: CENTRAL.to_string(),
        color: PALETTE[0].to_string(),
    }
}

fn padded_radius(center: &GeoPoint, members: &[GeoPoint], config: &ClusterConfig) -> f64 {
    let max_distance = members
        .iter()
        .map(|p| distance(center, p))
        .fold(0.0, f64::max);
    (max_distance * config.padding).max(config.min_radius_m)
}

/// Index of the first point at minimal distance from `target`
fn nearest(points: &[GeoPoint], target: &GeoPoint) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (i, p) in points.iter().enumerate() {
        let d = distance(p, target);
        if d < best_dist {
            best = i;
            best_dist = d;
        }
    }
    best
}

/// Chooses `k` seed indices
///
/// The first seed is the point nearest the median, anchoring a central
/// cluster. Each further seed is the point farthest from all seeds so far.
fn farthest_first_seeds(points: &[GeoPoint], median: &GeoPoint, k: usize) -> Vec<usize> {
    let first = nearest(points, median);
    let mut seeds = vec![first];

    // Distance from every point to its closest seed
    let mut min_dist: Vec<f64> = points.iter().map(|p| distance(p, &points[first])).collect();

    while seeds.len() < k {
        let mut next = 0;
        let mut next_dist = f64::NEG_INFINITY;
        for (i, &d) in min_dist.iter().enumerate() {
            if d > next_dist {
                next = i;
                next_dist = d;
            }
        }
        seeds.push(next);

        for (i, p) in points.iter().enumerate() {
            min_dist[i] = min_dist[i].min(distance(p, &points[next]));
        }
    }

    trace!("Seeds {:?}", seeds);
    seeds
}

/// Runs Lloyd's iterations from the given seeds
///
/// Returns the final centroids and each point's centroid index. A centroid
/// that loses all members keeps its last position.
fn lloyd(
    points: &[GeoPoint],
    seeds: &[usize],
    max_iterations: usize,
) -> (Vec<GeoPoint>, Vec<usize>) {
    let mut centroids: Vec<GeoPoint> = seeds.iter().map(|&i| points[i]).collect();
    let mut assignments = vec![usize::MAX; points.len()];

    for round in 0..max_iterations.max(1) {
        let mut changed = 0;
        for (i, p) in points.iter().enumerate() {
            let c = nearest(&centroids, p);
            if assignments[i] != c {
                assignments[i] = c;
                changed += 1;
            }
        }

        if changed == 0 {
            debug!("k-means converged after {} rounds", round);
            break;
        }
        trace!("Round {}: {} points reassigned", round, changed);

        let mut sums = vec![(0.0, 0.0, 0usize); centroids.len()];
        for (p, &c) in points.iter().zip(&assignments) {
            sums[c].0 += p.latitude;
            sums[c].1 += p.longitude;
            sums[c].2 += 1;
        }
        for (centroid, (lat, lng, count)) in centroids.iter_mut().zip(sums) {
            if count > 0 {
                *centroid = GeoPoint::new(lat / count as f64, lng / count as f64);
            }
        }
    }

    (centroids, assignments)
}

/// Labels the cluster nearest the global median "Central", the rest by compass
/// direction from the median. Labels are unique within one result.
fn assign_labels(clusters: &mut [GeoCluster], median: &GeoPoint) {
    let centers: Vec<GeoPoint> = clusters.iter().map(|c| c.center).collect();
    let central = nearest(&centers, median);

    let mut used: HashSet<&'static str> = HashSet::new();
    used.insert(CENTRAL);

    for (i, cluster) in clusters.iter_mut().enumerate() {
        if i == central {
            cluster.label = CENTRAL.to_string();
            continue;
        }
        let bin = compass_bin(bearing_degrees(median, &cluster.center));
        let label = unused_label(bin, &used);
        used.insert(label);
        cluster.label = label.to_string();
    }
}
