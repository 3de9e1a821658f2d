#[cfg(test)]
mod tests {
    use crate::geo::{GeoPoint, spatial_median};

    #[test]
    fn test_median_odd() {
        let points = vec![
            GeoPoint::new(3.0, 10.0),
            GeoPoint::new(1.0, 30.0),
            GeoPoint::new(2.0, 20.0),
        ];
        assert_eq!(spatial_median(&points), GeoPoint::new(2.0, 20.0));
    }

    #[test]
    fn test_median_even() {
        let points = vec![
            GeoPoint::new(1.0, 40.0),
            GeoPoint::new(4.0, 10.0),
            GeoPoint::new(2.0, 30.0),
            GeoPoint::new(3.0, 20.0),
        ];
        assert_eq!(spatial_median(&points), GeoPoint::new(2.5, 25.0));
    }

    #[test]
    fn test_median_is_per_axis() {
        // No input point sits at (2, 2)
        let points = vec![
            GeoPoint::new(1.0, 2.0),
            GeoPoint::new(2.0, 3.0),
            GeoPoint::new(3.0, 1.0),
        ];
        assert_eq!(spatial_median(&points), GeoPoint::new(2.0, 2.0));
    }

    #[test]
    fn test_median_robust_to_outlier() {
        let mut points = vec![
            GeoPoint::new(1.300, 103.800),
            GeoPoint::new(1.301, 103.801),
            GeoPoint::new(1.302, 103.802),
            GeoPoint::new(1.303, 103.803),
        ];
        points.push(GeoPoint::new(45.0, -120.0));

        let median = spatial_median(&points);
        assert_eq!(median, GeoPoint::new(1.302, 103.801));
    }

    #[test]
    fn test_median_single_and_empty() {
        let single = vec![GeoPoint::new(51.5074, -0.1278)];
        assert_eq!(spatial_median(&single), single[0]);

        let empty: Vec<GeoPoint> = Vec::new();
        assert_eq!(spatial_median(&empty), GeoPoint::default());
    }
}
