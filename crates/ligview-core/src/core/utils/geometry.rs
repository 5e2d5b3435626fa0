use nalgebra::{Point3, Vector3};

pub fn distance(a: &Point3<f64>, b: &Point3<f64>) -> f64 {
    nalgebra::distance(a, b)
}

/// Returns the mean of `points`, or `None` for an empty input.
pub fn centroid(points: impl IntoIterator<Item = Point3<f64>>) -> Option<Point3<f64>> {
    let (sum, count) = points
        .into_iter()
        .fold((Vector3::<f64>::zeros(), 0usize), |(sum, count), p| {
            (sum + p.coords, count + 1)
        });
    (count > 0).then(|| Point3::from(sum / count as f64))
}

/// Returns the axis-aligned bounding box `(min, max)` of `points`.
pub fn bounding_box(
    points: impl IntoIterator<Item = Point3<f64>>,
) -> Option<(Point3<f64>, Point3<f64>)> {
    points.into_iter().fold(None, |acc, p| match acc {
        None => Some((p, p)),
        Some((min, max)) => Some((min.inf(&p), max.sup(&p))),
    })
}
