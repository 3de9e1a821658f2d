//! IQR-based outlier rejection on distance-from-center
//!
//! Distances of all points to a center are sorted, Q1 and Q3 taken at the
//! nearest-lower 25th/75th percentile index, and every point farther than
//! `max(Q3 + 1.5 * IQR, 2000 m)` is an outlier. Filtering is skipped for
//! tiny sets and rolled back when it would keep fewer than half the points.

use bitvec::prelude::*;
use log::debug;

use super::distance::distance;
use super::median::spatial_median;
use super::point::{GeoPoint, Located};

/// Tunable constants of the IQR filter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterPolicy {
    /// Multiplier applied to the interquartile range above Q3
    pub iqr_multiplier: f64,
    /// Threshold never drops below this many meters
    pub min_threshold_m: f64,
    /// Sets smaller than this are returned unfiltered
    pub min_sample: usize,
    /// Roll back if fewer than `ceil(n * fraction)` points survive
    pub min_inlier_fraction: f64,
}

impl Default for FilterPolicy {
    fn default() -> Self {
        Self {
            iqr_multiplier: 1.5,
            min_threshold_m: 2000.0,
            min_sample: 4,
            min_inlier_fraction: 0.5,
        }
    }
}

/// Inlier/outlier split of a point set, input order preserved in both halves
#[derive(Debug, Clone, PartialEq)]
pub struct Partition<T> {
    pub inliers: Vec<T>,
    pub outliers: Vec<T>,
}

impl<T: Clone> Partition<T> {
    fn all_inliers(items: &[T]) -> Self {
        Self {
            inliers: items.to_vec(),
            outliers: Vec::new(),
        }
    }

    fn split(items: &[T], mask: &BitSlice) -> Self {
        let mut inliers = Vec::with_capacity(items.len());
        let mut outliers = Vec::new();
        for (item, is_outlier) in items.iter().zip(mask.iter().by_vals()) {
            if is_outlier {
                outliers.push(item.clone());
            } else {
                inliers.push(item.clone());
            }
        }
        Self { inliers, outliers }
    }
}

/// Outcome of a successful IQR cut
struct IqrCut {
    outliers: BitVec,
    threshold: f64,
}

/// Applies the IQR rule to precomputed distances
///
/// Returns `None` when the set is too small for quartiles or when the cut
/// would remove too many points; callers then treat everything as inliers.
fn iqr_cut(distances: &[f64], policy: &FilterPolicy) -> Option<IqrCut> {
    let n = distances.len();
    if n == 0 || n < policy.min_sample {
        return None;
    }

    let mut sorted = distances.to_vec();
    sorted.sort_by(f64::total_cmp);

    let q1 = sorted[n / 4];
    let q3 = sorted[3 * n / 4];
    let iqr = q3 - q1;
    let threshold = (q3 + policy.iqr_multiplier * iqr).max(policy.min_threshold_m);

    let mut outliers = bitvec![0; n];
    for (i, &d) in distances.iter().enumerate() {
        if d > threshold {
            outliers.set(i, true);
        }
    }

    let inlier_count = n - outliers.count_ones();
    let min_inliers = (n as f64 * policy.min_inlier_fraction).ceil() as usize;
    if inlier_count < min_inliers {
        debug!(
            "IQR cut would keep {}/{} points (need {}), rolling back",
            inlier_count, n, min_inliers
        );
        return None;
    }

    debug!(
        "IQR threshold {:.1} m (q1={:.1}, q3={:.1}), {} outliers of {}",
        threshold,
        q1,
        q3,
        n - inlier_count,
        n
    );

    Some(IqrCut {
        outliers,
        threshold,
    })
}

fn distances_to<T: Located>(items: &[T], center: &GeoPoint) -> Vec<f64> {
    items
        .iter()
        .map(|item| distance(&item.location(), center))
        .collect()
}

/// Splits points into inliers and outliers by distance to `center`
pub fn filter_outliers(points: &[GeoPoint], center: &GeoPoint) -> Partition<GeoPoint> {
    filter_outliers_with(points, center, &FilterPolicy::default())
}

/// [`filter_outliers`] with explicit policy
pub fn filter_outliers_with(
    points: &[GeoPoint],
    center: &GeoPoint,
    policy: &FilterPolicy,
) -> Partition<GeoPoint> {
    let distances = distances_to(points, center);
    match iqr_cut(&distances, policy) {
        Some(cut) => Partition::split(points, &cut.outliers),
        None => Partition::all_inliers(points),
    }
}

/// ProximityResult is the output of [`filter_proximity`]
///
/// Besides the split it keeps the established cluster's center (median of the
/// inliers) and the distance threshold, so new candidates can be tested
/// against the cluster without refiltering.
#[derive(Debug, Clone, PartialEq)]
pub struct ProximityResult<T> {
    pub inliers: Vec<T>,
    pub outliers: Vec<T>,
    pub cluster_center: GeoPoint,
    /// `f64::INFINITY` when no cut was made
    pub threshold_m: f64,
}

impl<T> ProximityResult<T> {
    /// Whether `candidate` lies within the cluster's threshold
    pub fn accepts<L: Located>(&self, candidate: &L) -> bool {
        distance(&self.cluster_center, &candidate.location()) <= self.threshold_m
    }
}

/// Type-preserving IQR filter for arbitrary located records
///
/// The records are measured against their own spatial median and handed back
/// unchanged in the inlier/outlier halves.
pub fn filter_proximity<T: Located + Clone>(items: &[T]) -> ProximityResult<T> {
    filter_proximity_with(items, &FilterPolicy::default())
}

/// [`filter_proximity`] with explicit policy
pub fn filter_proximity_with<T: Located + Clone>(
    items: &[T],
    policy: &FilterPolicy,
) -> ProximityResult<T> {
    let median = spatial_median(items);
    let distances = distances_to(items, &median);

    let (partition, threshold_m) = match iqr_cut(&distances, policy) {
        Some(cut) => (Partition::split(items, &cut.outliers), cut.threshold),
        None => (Partition::all_inliers(items), f64::INFINITY),
    };

    ProximityResult {
        cluster_center: spatial_median(&partition.inliers),
        inliers: partition.inliers,
        outliers: partition.outliers,
        threshold_m,
    }
}
