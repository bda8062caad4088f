//! Decoding of NACA 4-digit codes and the analytic camber line and thickness distribution of the
//! section they describe. All values are in chord units, with the leading edge at x = 0 and the
//! trailing edge at x = 1.

use crate::InvalidCode;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Chord fraction at which the pitch reference point is taken on the camber line. Generated
/// contours are centered on this point, making it the pivot for all later placement transforms.
pub const PITCH_CENTER_X: f64 = 0.5;

/// Coefficients of the NACA thickness polynomial, for the terms sqrt(x), x, x^2, x^3 and x^4. This
/// is the open trailing edge form, which leaves a small gap at x = 1.
const THICKNESS_COEFFS: [f64; 5] = [0.2969, -0.1260, -0.3516, 0.2843, -0.1015];

/// A NACA 4-digit airfoil section, described by its maximum camber, the chord position of the
/// maximum camber, and its maximum thickness, each as a fraction of the chord.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Naca4 {
    m: f64,
    p: f64,
    t: f64,
    digits: Option<[u8; 4]>,
}

impl Naca4 {
    /// Create a section directly from its fractional parameters, without going through a code.
    /// No validation is performed. A camber position of 0.0 or 1.0 produces a section with no
    /// camber at all, regardless of `m`.
    ///
    /// # Arguments
    ///
    /// * `m`: the maximum camber as a fraction of the chord
    /// * `p`: the chord position of the maximum camber, as a fraction of the chord
    /// * `t`: the maximum thickness as a fraction of the chord
    ///
    /// returns: Naca4
    pub fn from_params(m: f64, p: f64, t: f64) -> Self {
        Self {
            m,
            p,
            t,
            digits: None,
        }
    }

    /// Decode a section from the four decimal digits of its code. Each digit must be in 0..=9.
    pub(crate) fn from_digits(digits: [u8; 4]) -> Self {
        Self {
            m: digits[0] as f64 / 100.0,
            p: digits[1] as f64 / 10.0,
            t: (digits[2] as f64 * 10.0 + digits[3] as f64) / 100.0,
            digits: Some(digits),
        }
    }

    pub fn max_camber(&self) -> f64 {
        self.m
    }

    pub fn camber_position(&self) -> f64 {
        self.p
    }

    pub fn thickness(&self) -> f64 {
        self.t
    }

    /// Returns true if the camber line of this section is identically zero.
    pub fn is_symmetric(&self) -> bool {
        self.p == 0.0 || self.p == 1.0 || self.m == 0.0
    }

    /// Evaluate the mean camber line at the chord position `x`, returning the camber height and
    /// the slope of the camber line at that position.
    ///
    /// The camber line is made of two parabolic arcs joined at the position of maximum camber.
    /// When the camber position is 0.0 or 1.0 the section is treated as uncambered, and both the
    /// height and the slope are zero everywhere.
    ///
    /// # Arguments
    ///
    /// * `x`: the chord position, in [0, 1]
    ///
    /// returns: (f64, f64)
    ///
    /// # Examples
    ///
    /// ```
    /// use bladeform::Naca4;
    /// use approx::assert_relative_eq;
    /// let section: Naca4 = "2412".parse().unwrap();
    /// let (yc, slope) = section.camber_at(0.4);
    /// assert_relative_eq!(yc, 0.02, epsilon = 1.0e-12);
    /// assert_relative_eq!(slope, 0.0, epsilon = 1.0e-12);
    /// ```
    pub fn camber_at(&self, x: f64) -> (f64, f64) {
        let (m, p) = (self.m, self.p);
        if p == 0.0 || p == 1.0 {
            return (0.0, 0.0);
        }

        if x < p {
            let k = m / (p * p);
            (k * (2.0 * p * x - x * x), 2.0 * k * (p - x))
        } else {
            let k = m / ((1.0 - p) * (1.0 - p));
            (k * ((1.0 - 2.0 * p) + 2.0 * p * x - x * x), 2.0 * k * (p - x))
        }
    }

    /// Evaluate the half thickness of the section at the chord position `x`, measured
    /// perpendicular to the camber line.
    pub fn half_thickness_at(&self, x: f64) -> f64 {
        let [a0, a1, a2, a3, a4] = THICKNESS_COEFFS;
        5.0 * self.t * (a0 * x.sqrt() + x * (a1 + x * (a2 + x * (a3 + x * a4))))
    }

    /// Returns the upper and lower surface points at the chord position `x`, in un-centered chord
    /// coordinates. The thickness is applied perpendicular to the camber line.
    pub fn surface_at(&self, x: f64) -> ((f64, f64), (f64, f64)) {
        let (yc, slope) = self.camber_at(x);
        let theta = slope.atan();
        let yt = self.half_thickness_at(x);
        let (s, c) = theta.sin_cos();
        ((x - yt * s, yc + yt * c), (x + yt * s, yc - yt * c))
    }
}

impl FromStr for Naca4 {
    type Err = InvalidCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let count = s.chars().count();
        if count != 4 {
            return Err(InvalidCode::WrongLength(count));
        }

        let mut digits = [0u8; 4];
        for (d, c) in digits.iter_mut().zip(s.chars()) {
            *d = c.to_digit(10).ok_or(InvalidCode::NonDigit(c))? as u8;
        }

        Ok(Self::from_digits(digits))
    }
}

impl Display for Naca4 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.digits {
            Some([a, b, c, d]) => write!(f, "NACA {}{}{}{}", a, b, c, d),
            None => write!(f, "NACA(m={}, p={}, t={})", self.m, self.p, self.t),
        }
    }
}
