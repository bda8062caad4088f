//! This module contains the generation of closed airfoil section contours from the analytic NACA
//! 4-digit definition. A contour is produced once per run and then used as a read-only template
//! by the placement schedule.

mod naca4;

use crate::common::cosine_space;
use crate::common::points::dist;
use crate::{InvalidCode, Point2};
use itertools::Itertools;

pub use naca4::{Naca4, PITCH_CENTER_X};

/// A closed airfoil section contour in chord units (chord length of 1.0), centered on the pitch
/// reference point of its camber line.
///
/// The contour is the upper surface from the leading edge to the trailing edge, followed by the
/// lower surface from the trailing edge back to the leading edge, so consecutive points are
/// geometrically adjacent and the loop is implicitly closed.
#[derive(Debug, Clone)]
pub struct AirfoilProfile {
    section: Naca4,
    contour: Vec<Point2>,
    pitch_center: Point2,
    samples: usize,
}

impl AirfoilProfile {
    /// Sample a closed contour of the given section, using cosine spacing along the chord so that
    /// the leading and trailing edges are well resolved.
    ///
    /// Every point is translated so that the camber line point at `PITCH_CENTER_X` lands on the
    /// origin. That point is the pivot for rotating, scaling and skewing the section later on.
    ///
    /// # Arguments
    ///
    /// * `section`: the NACA 4-digit section to sample
    /// * `samples`: the number of samples taken on each of the upper and lower surfaces, the
    /// total length of the contour will be twice this value. Values below 2 are accepted but only
    /// ever sample the leading edge.
    ///
    /// returns: AirfoilProfile
    pub fn new(section: Naca4, samples: usize) -> Self {
        let pitch_center = Point2::new(PITCH_CENTER_X, section.camber_at(PITCH_CENTER_X).0);
        let shift = -pitch_center.coords;

        let mut upper = Vec::with_capacity(samples);
        let mut lower = Vec::with_capacity(samples);
        for x in cosine_space(samples) {
            let ((xu, yu), (xl, yl)) = section.surface_at(x);
            upper.push(Point2::new(xu, yu) + shift);
            lower.push(Point2::new(xl, yl) + shift);
        }

        let contour = upper.into_iter().chain(lower.into_iter().rev()).collect();

        Self {
            section,
            contour,
            pitch_center,
            samples,
        }
    }

    pub fn section(&self) -> &Naca4 {
        &self.section
    }

    /// The full closed contour, upper surface first.
    pub fn contour(&self) -> &[Point2] {
        &self.contour
    }

    /// The upper surface points, ordered from the leading edge to the trailing edge.
    pub fn upper(&self) -> &[Point2] {
        &self.contour[..self.samples]
    }

    /// The lower surface points, ordered from the trailing edge to the leading edge.
    pub fn lower(&self) -> &[Point2] {
        &self.contour[self.samples..]
    }

    /// The pitch reference point on the camber line, in the original chord coordinates (leading
    /// edge at the origin). The contour itself has already been shifted so that this point is at
    /// the origin.
    pub fn pitch_center(&self) -> Point2 {
        self.pitch_center
    }

    pub fn samples_per_surface(&self) -> usize {
        self.samples
    }

    pub fn len(&self) -> usize {
        self.contour.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contour.is_empty()
    }

    /// The length of the closed loop through all contour points, including the closing segment
    /// from the last point back to the first.
    pub fn perimeter(&self) -> f64 {
        self.contour
            .iter()
            .circular_tuple_windows()
            .map(|(a, b)| dist(a, b))
            .sum()
    }
}

impl Naca4 {
    /// Sample a closed, pitch-centered contour of this section. See `AirfoilProfile::new`.
    pub fn profile(&self, samples: usize) -> AirfoilProfile {
        AirfoilProfile::new(*self, samples)
    }
}

/// Decode a NACA 4-digit code and generate its closed contour, with `samples` points on each of
/// the upper and lower surfaces.
///
/// # Arguments
///
/// * `code`: exactly four ASCII decimal digits, such as "2412"
/// * `samples`: the number of samples per surface
///
/// returns: Result<AirfoilProfile, InvalidCode>
///
/// # Examples
///
/// ```
/// use bladeform::airfoil::generate;
/// let profile = generate("2412", 20).unwrap();
/// assert_eq!(profile.contour().len(), 40);
/// assert!(generate("24x2", 20).is_err());
/// ```
pub fn generate(code: &str, samples: usize) -> Result<AirfoilProfile, InvalidCode> {
    let section: Naca4 = code.parse()?;
    Ok(section.profile(samples))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::Rng;
    use test_case::test_case;

    #[test_case("2412", 20)]
    #[test_case("0012", 2)]
    #[test_case("4415", 50)]
    #[test_case("6409", 7)]
    fn contour_length(code: &str, samples: usize) {
        let profile = generate(code, samples).unwrap();
        assert_eq!(profile.len(), 2 * samples);
        assert_eq!(profile.upper().len(), samples);
        assert_eq!(profile.lower().len(), samples);
    }

    #[test]
    fn invalid_code_is_reported() {
        assert_eq!(generate("241", 10).unwrap_err(), InvalidCode::WrongLength(3));
        assert_eq!(generate("2b12", 10).unwrap_err(), InvalidCode::NonDigit('b'));
    }

    #[test]
    fn symmetric_surfaces_mirror() {
        let profile = generate("0012", 25).unwrap();
        let upper = profile.upper();
        let lower = profile.lower();
        for (u, l) in upper.iter().zip(lower.iter().rev()) {
            assert_eq!(u.x, l.x);
            assert_eq!(u.y, -l.y);
        }
    }

    #[test]
    fn symmetric_pitch_center_on_chord() {
        let profile = generate("0012", 10).unwrap();
        assert_eq!(profile.pitch_center(), Point2::new(0.5, 0.0));
    }

    #[test]
    fn zero_camber_position_is_symmetric() {
        let profile = generate("2012", 25).unwrap();
        assert_eq!(profile.pitch_center(), Point2::new(0.5, 0.0));
        for (u, l) in profile.upper().iter().zip(profile.lower().iter().rev()) {
            assert_eq!(u.x, l.x);
            assert_eq!(u.y, -l.y);
        }
    }

    #[test]
    fn camber_position_one_is_symmetric() {
        let profile = Naca4::from_params(0.04, 1.0, 0.12).profile(25);
        assert_eq!(profile.pitch_center(), Point2::new(0.5, 0.0));
        for (u, l) in profile.upper().iter().zip(profile.lower().iter().rev()) {
            assert_eq!(u.x, l.x);
            assert_eq!(u.y, -l.y);
        }
    }

    #[test]
    fn contour_starts_at_centered_leading_edge() {
        let profile = generate("2412", 20).unwrap();
        let y_ref = profile.section().camber_at(0.5).0;
        assert_relative_eq!(y_ref, 0.02 / 0.36 * 0.35, epsilon = 1.0e-12);

        let first = profile.contour()[0];
        let last = profile.contour()[profile.len() - 1];
        assert_relative_eq!(first, Point2::new(-0.5, -y_ref), epsilon = 1.0e-12);
        assert_relative_eq!(last, first, epsilon = 1.0e-12);
    }

    #[test]
    fn trailing_edge_in_middle_of_contour() {
        let profile = generate("2412", 20).unwrap();
        let upper_te = profile.contour()[19];
        let lower_te = profile.contour()[20];
        assert_relative_eq!(upper_te.x, 0.5, epsilon = 1.0e-3);
        assert_relative_eq!(lower_te.x, 0.5, epsilon = 1.0e-3);
        assert!(upper_te.y > lower_te.y);
    }

    #[test]
    fn pitch_center_independent_of_samples() {
        let a = generate("2412", 5).unwrap();
        let b = generate("2412", 80).unwrap();
        assert_eq!(a.pitch_center(), b.pitch_center());
    }

    #[test]
    fn contour_centered_on_pitch_center() {
        // With an odd sample count the middle sample sits at x = 0.5, and the midpoint between
        // the upper and lower surface there is the camber point itself.
        let profile = generate("4415", 21).unwrap();
        let u = profile.upper()[10];
        let l = profile.lower()[10];
        assert_relative_eq!((u.x + l.x) * 0.5, 0.0, epsilon = 1.0e-12);
        assert_relative_eq!((u.y + l.y) * 0.5, 0.0, epsilon = 1.0e-12);
    }

    #[test]
    fn no_adjacent_duplicates() {
        let profile = generate("2412", 30).unwrap();
        for (a, b) in profile.contour().iter().tuple_windows() {
            assert!(dist(a, b) > 1.0e-9);
        }
    }

    #[test]
    fn upper_above_lower() {
        let profile = generate("2412", 30).unwrap();
        for (u, l) in profile.upper().iter().zip(profile.lower().iter().rev()).skip(1) {
            assert!(u.y > l.y);
        }
    }

    #[test]
    fn perimeter_is_about_twice_chord() {
        let profile = generate("0012", 100).unwrap();
        let p = profile.perimeter();
        assert!(p > 2.0 && p < 2.1, "perimeter {}", p);
    }

    #[test]
    fn degenerate_sample_counts() {
        let empty = generate("2412", 0).unwrap();
        assert!(empty.is_empty());
        assert_relative_eq!(empty.perimeter(), 0.0);

        let single = generate("2412", 1).unwrap();
        assert_eq!(single.len(), 2);
        assert_relative_eq!(single.contour()[0].x, -0.5);
        assert_relative_eq!(single.contour()[1].x, -0.5);
    }

    #[test]
    fn random_codes_are_finite() {
        let mut rng = rand::rng();
        for _ in 0..200 {
            let code: String = (0..4)
                .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
                .collect();
            let samples = rng.random_range(2..60usize);
            let profile = generate(&code, samples).unwrap();
            assert_eq!(profile.len(), 2 * samples);
            for p in profile.contour() {
                assert!(p.x.is_finite() && p.y.is_finite(), "code {} gave {:?}", code, p);
            }
        }
    }
}
