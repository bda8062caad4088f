//! Common operations on f64 points in D-dimensional space.

use crate::{Point2, Point3};
use parry3d_f64::na::{AbstractRotation, Isometry, Point};

/// Returns the distance between two points in D-dimensional space.
///
/// # Examples
///
/// ```
/// use bladeform::common::points::dist;
/// use bladeform::Point2;
/// let a = Point2::new(1.0, 2.0);
/// let b = Point2::new(3.0, 2.0);
/// assert_eq!(dist(&a, &b), 2.0);
/// ```
pub fn dist<const D: usize>(a: &Point<f64, D>, b: &Point<f64, D>) -> f64 {
    (a - b).norm()
}

/// Scale each point about the origin by a uniform factor, returning a new `Vec` of points.
///
/// # Arguments
///
/// * `points`: the points to scale
/// * `factor`: the uniform scale factor; 0.0 collapses every point onto the origin
///
/// returns: Vec<OPoint<f64, Const<{ D }>>, Global>
pub fn scale_points<const D: usize>(points: &[Point<f64, D>], factor: f64) -> Vec<Point<f64, D>> {
    points
        .iter()
        .map(|p| Point::from(p.coords * factor))
        .collect()
}

/// Embed 2D points in the XY plane of 3D space, at z = 0.
pub fn embed_xy(points: &[Point2]) -> Vec<Point3> {
    points.iter().map(|p| Point3::new(p.x, p.y, 0.0)).collect()
}

/// Generic 2 or 3 dimensional transformation of a slice of `Point` entities by an `Isometry`,
/// resulting in an owned `Vec` of new point entities being created and returned.
///
/// # Examples
///
/// ```
/// use bladeform::{Point3, Iso3};
/// use bladeform::common::points::transform_points;
///
/// let points = vec![Point3::new(1.0, 2.0, 0.0), Point3::new(3.0, 4.0, 0.0)];
/// let transform = Iso3::translation(1.0, 2.0, 3.0);
/// let moved = transform_points(&points, &transform);
/// assert_eq!(moved[0], Point3::new(2.0, 4.0, 3.0));
/// assert_eq!(moved[1], Point3::new(4.0, 6.0, 3.0));
/// ```
pub fn transform_points<R, const D: usize>(
    points: &[Point<f64, D>],
    transform: &Isometry<f64, R, D>,
) -> Vec<Point<f64, D>>
where
    R: AbstractRotation<f64, D>,
{
    points.iter().map(|p| transform * p).collect()
}
