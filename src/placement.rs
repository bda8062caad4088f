//! The placement schedule positions copies of a template section along the span of a blade. Each
//! station is described by its span fraction, from which a twist angle, a uniform scale, and a
//! skew (sweep) angle are derived. All of the functions here are pure and may be evaluated for
//! stations in any order.
//!
//! A placement is applied to a section in a fixed order: scale about the origin, rotate about the
//! Z axis, then rotate about the X axis around the pivot `(0, skew_radius, 0)`. Changing the order
//! changes the resulting geometry.

use crate::common::points::{embed_xy, scale_points, transform_points};
use crate::{DomainError, Iso3, Point2, Point3, UnitQuat, Vector3};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Twist angle at the root of the span, in radians.
const ROOT_TWIST: f64 = PI / 6.0;

/// Twist angle at the tip of the span, in radians.
const TIP_TWIST: f64 = PI / 2.0;

/// The largest scale reached along the span.
const PEAK_SCALE: f64 = 1.2;

/// Span fraction at which the scale reaches `PEAK_SCALE`.
const PEAK_SCALE_FRACTION: f64 = 0.6;

/// Returns the span fraction of a station, `index / count`. For indices below `count` the result
/// lies in [0, 1).
pub fn station_fraction(index: usize, count: usize) -> f64 {
    index as f64 / count as f64
}

/// Twist angle of the section at the given span fraction, in radians. The twist increases
/// linearly from pi/6 at the root to pi/2 at the tip.
pub fn rotation_angle(fraction: f64) -> f64 {
    ROOT_TWIST + fraction * (TIP_TWIST - ROOT_TWIST)
}

/// Uniform scale of the section at the given span fraction.
///
/// Inboard of the peak the scale follows an inverted parabola, `1.2 * (1 - (f - 0.6)^2)`, and
/// outboard of it an elliptical taper, `1.2 * sqrt(1 - ((f - 0.6) / 0.4)^2)`, which reaches
/// exactly zero at the tip. The two pieces meet at 1.2 when f = 0.6, but the slope is not
/// continuous there.
///
/// # Arguments
///
/// * `fraction`: the span fraction, which must lie in [0, 1]
///
/// returns: Result<f64, DomainError>
///
/// # Examples
///
/// ```
/// use bladeform::placement::scale;
/// assert_eq!(scale(0.6).unwrap(), 1.2);
/// assert_eq!(scale(1.0).unwrap(), 0.0);
/// assert!(scale(1.01).is_err());
/// ```
pub fn scale(fraction: f64) -> Result<f64, DomainError> {
    if !(0.0..=1.0).contains(&fraction) {
        return Err(DomainError { fraction });
    }

    let d = fraction - PEAK_SCALE_FRACTION;
    if fraction < PEAK_SCALE_FRACTION {
        Ok(PEAK_SCALE * (1.0 - d * d))
    } else {
        let e = d / (1.0 - PEAK_SCALE_FRACTION);
        Ok(PEAK_SCALE * (1.0 - e * e).sqrt())
    }
}

/// Skew (sweep) angle of the section at the given span fraction, in radians. This increases
/// linearly from 0 at the root to pi/2 at the tip.
pub fn skew_angle(fraction: f64) -> f64 {
    PI / 2.0 * fraction
}

/// The rigid rotation about the X axis by `angle` which leaves the pivot `(0, radius, 0)` fixed.
pub fn skew_transform(angle: f64, radius: f64) -> Iso3 {
    let rotation = UnitQuat::from_axis_angle(&Vector3::x_axis(), angle);
    Iso3::rotation_wrt_point(rotation, Point3::new(0.0, radius, 0.0))
}

/// The point at which the span collapses at full sweep, closing the loft. This is where the
/// section origin ends up under the skew transform at a span fraction of 1.
///
/// # Examples
///
/// ```
/// use bladeform::placement::terminal_tip_point;
/// use bladeform::Point3;
/// use approx::assert_relative_eq;
/// assert_relative_eq!(terminal_tip_point(2.0), Point3::new(0.0, 2.0, -2.0), epsilon = 1.0e-12);
/// ```
pub fn terminal_tip_point(skew_radius: f64) -> Point3 {
    let angle = skew_angle(1.0);
    Point3::new(
        0.0,
        skew_radius - angle.cos() * skew_radius,
        -angle.sin() * skew_radius,
    )
}

/// The placement of a single section in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementParameters {
    /// Rotation about the Z axis, in radians
    pub rotation: f64,

    /// Uniform scale about the section origin
    pub scale: f64,

    /// Rotation about the X axis around the skew pivot, in radians
    pub skew: f64,

    /// Y coordinate of the skew pivot
    pub skew_radius: f64,
}

impl PlacementParameters {
    pub fn new(rotation: f64, scale: f64, skew: f64, skew_radius: f64) -> Self {
        Self {
            rotation,
            scale,
            skew,
            skew_radius,
        }
    }

    /// A placement which leaves a section where it is, only embedding it in the XY plane.
    pub fn identity() -> Self {
        Self::new(0.0, 1.0, 0.0, 0.0)
    }

    /// Compute the placement of the station at the given span fraction. Fails if the fraction is
    /// outside of [0, 1], rather than clamping it.
    pub fn at_fraction(fraction: f64, skew_radius: f64) -> Result<Self, DomainError> {
        Ok(Self::new(
            rotation_angle(fraction),
            scale(fraction)?,
            skew_angle(fraction),
            skew_radius,
        ))
    }

    /// The rigid part of the placement: the rotation about Z followed by the skew about the
    /// pivot. The scale is not included, since it is not an isometry.
    pub fn transform(&self) -> Iso3 {
        let twist = Iso3::rotation(Vector3::z() * self.rotation);
        skew_transform(self.skew, self.skew_radius) * twist
    }

    /// Apply the placement to a 2D section, producing the 3D points of the placed section. The
    /// section is scaled about its origin, embedded at z = 0, rotated about Z and then skewed.
    pub fn apply(&self, section: &[Point2]) -> Vec<Point3> {
        let scaled = scale_points(section, self.scale);
        transform_points(&embed_xy(&scaled), &self.transform())
    }
}
