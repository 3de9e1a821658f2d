use super::point::{GeoPoint, Located};

/// Calculates the component-wise median of a point set
///
/// Latitudes and longitudes are sorted independently and the middle value
/// (or the average of the two middle values) is taken from each, so the
/// result is generally not one of the input points. A single far-away point
/// moves it by at most half a slot, unlike the mean.
///
/// Returns the origin for an empty slice.
pub fn spatial_median<T: Located>(points: &[T]) -> GeoPoint {
    if points.is_empty() {
        return GeoPoint::default();
    }

    let mut lats: Vec<f64> = Vec::with_capacity(points.len());
    let mut lngs: Vec<f64> = Vec::with_capacity(points.len());
    for p in points {
        let loc = p.location();
        lats.push(loc.latitude);
        lngs.push(loc.longitude);
    }

    GeoPoint::new(median_of(&mut lats), median_of(&mut lngs))
}

/// Median of a non-empty slice, sorting it in place
fn median_of(values: &mut [f64]) -> f64 {
    values.sort_by(f64::total_cmp);

    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    }
}
