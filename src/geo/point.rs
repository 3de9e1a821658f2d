use serde::{Deserialize, Serialize};

/// GeoPoint represents a geographic coordinate in decimal degrees
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Anything that sits at a geographic location
///
/// Lets the filters work on caller records (hotels, POIs, stops) and hand the
/// same records back, instead of bare coordinates.
pub trait Located {
    fn location(&self) -> GeoPoint;
}

impl Located for GeoPoint {
    fn location(&self) -> GeoPoint {
        *self
    }
}

/// `(latitude, longitude)`
impl Located for (f64, f64) {
    fn location(&self) -> GeoPoint {
        GeoPoint::new(self.0, self.1)
    }
}

impl<T: Located> Located for &T {
    fn location(&self) -> GeoPoint {
        (**self).location()
    }
}

/// Arithmetic mean of the points, per axis
///
/// Returns `None` for an empty slice.
pub fn mean<T: Located>(points: &[T]) -> Option<GeoPoint> {
    if points.is_empty() {
        return None;
    }

    let mut center = GeoPoint::default();
    for p in points {
        let loc = p.location();
        center.latitude += loc.latitude;
        center.longitude += loc.longitude;
    }

    let n = points.len() as f64;
    center.latitude /= n;
    center.longitude /= n;
    Some(center)
}

/// Bounds is an axis-aligned bounding region of a point set
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl Bounds {
    /// Smallest region containing every point, `None` when there are none
    pub fn from_points<T: Located>(points: &[T]) -> Option<Self> {
        let mut iter = points.iter().map(Located::location);
        let first = iter.next()?;

        let mut bounds = Bounds {
            min_lat: first.latitude,
            max_lat: first.latitude,
            min_lng: first.longitude,
            max_lng: first.longitude,
        };

        for pt in iter {
            bounds.min_lat = bounds.min_lat.min(pt.latitude);
            bounds.max_lat = bounds.max_lat.max(pt.latitude);
            bounds.min_lng = bounds.min_lng.min(pt.longitude);
            bounds.max_lng = bounds.max_lng.max(pt.longitude);
        }

        Some(bounds)
    }

    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lng + self.max_lng) / 2.0,
        )
    }

    /// Inclusive on all edges
    pub fn contains(&self, point: &GeoPoint) -> bool {
        (self.min_lat..=self.max_lat).contains(&point.latitude)
            && (self.min_lng..=self.max_lng).contains(&point.longitude)
    }
}
