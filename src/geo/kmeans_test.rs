#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::geo::distance::offset_meters;
    use crate::geo::kmeans::PALETTE;
    use crate::geo::{ClusterConfig, GeoCluster, GeoPoint, cluster_points, cluster_points_with};
    use quickcheck::quickcheck;

    fn around(lat: f64, lng: f64) -> Vec<GeoPoint> {
        vec![
            GeoPoint::new(lat, lng),
            GeoPoint::new(lat + 0.001, lng),
            GeoPoint::new(lat - 0.001, lng),
            GeoPoint::new(lat, lng + 0.001),
            GeoPoint::new(lat, lng - 0.001),
        ]
    }

    fn sorted(mut points: Vec<GeoPoint>) -> Vec<GeoPoint> {
        points.sort_by(|a, b| {
            a.latitude
                .total_cmp(&b.latitude)
                .then(a.longitude.total_cmp(&b.longitude))
        });
        points
    }

    fn is_partition(clusters: &[GeoCluster], input: &[GeoPoint]) -> bool {
        let all: Vec<GeoPoint> = clusters
            .iter()
            .flat_map(|c| c.points.iter().copied())
            .collect();
        sorted(all) == sorted(input.to_vec())
    }

    #[test]
    fn test_empty_input() {
        assert!(cluster_points(&[], 4).is_empty());
    }

    #[test]
    fn test_small_inputs_single_central_cluster() {
        let points = around(48.8566, 2.3522);
        for n in 1..=3 {
            let input = &points[..n];
            let clusters = cluster_points(input, 4);
            assert_eq!(clusters.len(), 1, "n = {}", n);

            let cluster = &clusters[0];
            assert_eq!(cluster.id, 0);
            assert_eq!(cluster.label, "Central");
            assert_eq!(cluster.color, PALETTE[0]);
            assert_eq!(cluster.points, input.to_vec());
            assert!(cluster.radius_meters >= 200.0);
        }
    }

    #[test]
    fn test_small_input_radius_padding() {
        let origin = GeoPoint::new(48.8566, 2.3522);
        let points = vec![
            offset_meters(&origin, 0.0, -1000.0),
            origin,
            offset_meters(&origin, 0.0, 1000.0),
        ];
        let clusters = cluster_points(&points, 4);
        assert_eq!(clusters[0].center, origin);
        assert!((clusters[0].radius_meters - 1150.0).abs() < 0.1);
    }

    #[test]
    fn test_two_groups_central_and_east() {
        let mut points = around(0.0, 0.0);
        points.extend(around(0.0, 0.5).into_iter().take(3));

        let clusters = cluster_points(&points, 4);
        assert_eq!(clusters.len(), 2);

        assert_eq!(clusters[0].id, 0);
        assert_eq!(clusters[0].points, around(0.0, 0.0));
        assert_eq!(clusters[0].label, "Central");
        assert_eq!(clusters[0].color, PALETTE[0]);

        assert_eq!(clusters[1].id, 1);
        assert_eq!(clusters[1].points.len(), 3);
        assert_eq!(clusters[1].label, "East");
        assert_eq!(clusters[1].color, PALETTE[1]);
        assert!((clusters[1].center.longitude - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_three_groups_compass_labels() {
        let mut points = Vec::new();
        points.extend(around(0.0, 0.0).into_iter().take(4));
        points.extend(around(0.3, 0.0).into_iter().take(4));
        points.extend(around(0.0, -0.3).into_iter().take(4));

        let clusters = cluster_points(&points, 4);
        assert_eq!(clusters.len(), 3);
        assert!(clusters.iter().all(|c| c.points.len() == 4));

        let central = clusters.iter().find(|c| c.label == "Central").unwrap();
        assert!(central.center.latitude.abs() < 0.01);
        assert!(central.center.longitude.abs() < 0.01);

        let north = clusters.iter().find(|c| c.label == "North").unwrap();
        assert!((north.center.latitude - 0.3).abs() < 1e-9);

        let west = clusters.iter().find(|c| c.label == "West").unwrap();
        assert!((west.center.longitude + 0.3).abs() < 0.001);

        let ids: Vec<usize> = clusters.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn test_cluster_count_bounded() {
        // Twenty points in five far-apart groups still yield at most three
        let mut points = Vec::new();
        for i in 0..5 {
            points.extend(around(10.0 + i as f64, 10.0).into_iter().take(4));
        }
        assert_eq!(cluster_points(&points, 3).len(), 3);
        assert!(cluster_points(&points, 4).len() <= 4);
        assert!(is_partition(&cluster_points(&points, 4), &points));
    }

    #[test]
    fn test_max_clusters_below_two() {
        let mut points = around(0.0, 0.0);
        points.extend(around(0.0, 0.5));
        let config = ClusterConfig {
            max_clusters: 1,
            ..ClusterConfig::default()
        };
        let clusters = cluster_points_with(&points, &config);
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].points, points);
    }

    #[test]
    fn test_identical_points() {
        let points = vec![GeoPoint::new(35.0, 139.0); 6];
        let clusters = cluster_points(&points, 4);
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].points.len(), 6);
        assert_eq!(clusters[0].label, "Central");
        assert_eq!(clusters[0].radius_meters, 200.0);
    }

    fn to_points(offsets: &[(u16, u16)]) -> Vec<GeoPoint> {
        let origin = GeoPoint::new(-33.87, 151.21);
        offsets
            .iter()
            .map(|&(n, e)| offset_meters(&origin, n as f64, e as f64))
            .collect()
    }

    #[test]
    fn test_partition_and_radius_invariants() {
        fn prop(offsets: Vec<(u16, u16)>) -> bool {
            let points = to_points(&offsets);
            let clusters = cluster_points(&points, 4);

            let mut labels = HashSet::new();
            let labels_unique = clusters.iter().all(|c| labels.insert(c.label.clone()));
            let ordered = clusters
                .windows(2)
                .all(|w| w[0].points.len() >= w[1].points.len());
            let ids = clusters.iter().enumerate().all(|(i, c)| c.id == i);

            is_partition(&clusters, &points)
                && clusters.len() <= 4
                && clusters.iter().all(|c| c.radius_meters >= 200.0)
                && clusters.iter().all(|c| !c.points.is_empty())
                && labels_unique
                && ordered
                && ids
        }
        quickcheck(prop as fn(Vec<(u16, u16)>) -> bool);
    }

    #[test]
    fn test_deterministic() {
        fn prop(offsets: Vec<(u16, u16)>) -> bool {
            let points = to_points(&offsets);
            cluster_points(&points, 4) == cluster_points(&points, 4)
        }
        quickcheck(prop as fn(Vec<(u16, u16)>) -> bool);
    }
}
