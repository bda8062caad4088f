pub mod points;

use std::f64::consts::PI;

/// Generate `count` values in [0, 1] using cosine spacing, so that samples are clustered near
/// both ends of the interval and sparse in the middle. The first value will be 0.0 and, when
/// `count` is at least 2, the last value will be 1.0.
///
/// This is the usual way of sampling the chord of an airfoil, where the curvature is highest at
/// the leading and trailing edges. A `count` of 1 produces only the start of the interval.
///
/// # Arguments
///
/// * `count`: the total number of values to generate
///
/// returns: Vec<f64, Global>
///
/// # Examples
///
/// ```
/// use bladeform::common::cosine_space;
/// use approx::assert_relative_eq;
/// let x = cosine_space(3);
/// assert_relative_eq!(x[0], 0.0);
/// assert_relative_eq!(x[1], 0.5, epsilon = 1.0e-12);
/// assert_relative_eq!(x[2], 1.0);
/// ```
pub fn cosine_space(count: usize) -> Vec<f64> {
    if count < 2 {
        return vec![0.0; count];
    }

    let last = (count - 1) as f64;
    (0..count)
        .map(|i| 0.5 * (1.0 - (PI * i as f64 / last).cos()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_case::test_case;

    #[test_case(0)]
    #[test_case(1)]
    #[test_case(2)]
    #[test_case(20)]
    fn cosine_space_has_count(count: usize) {
        assert_eq!(cosine_space(count).len(), count);
    }

    #[test]
    fn cosine_space_is_ascending_and_symmetric() {
        let x = cosine_space(21);
        assert_relative_eq!(x[0], 0.0);
        assert_relative_eq!(x[20], 1.0);
        for w in x.windows(2) {
            assert!(w[1] > w[0]);
        }
        for i in 0..x.len() {
            assert_relative_eq!(x[i] + x[20 - i], 1.0, epsilon = 1.0e-12);
        }
    }

    #[test]
    fn cosine_space_clusters_at_edges() {
        let x = cosine_space(21);
        let edge_step = x[1] - x[0];
        let mid_step = x[11] - x[10];
        assert!(edge_step < mid_step / 10.0);
    }
}
