//! Circular mean and standard deviation of angles.
//!
//! Each angle is treated as a unit vector on the circle. The vectors are
//! averaged as Cartesian coordinates, giving the *resultant vector*: its
//! direction is the circular mean and its length (0 to 1) measures how
//! concentrated the distribution is.
//!
//! See <https://en.wikipedia.org/wiki/Directional_statistics> and
//! <https://en.wikipedia.org/wiki/Mean_of_circular_quantities>.

use crate::ShapeError;

/// Mean unit vector of a distribution of angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Resultant {
    /// Mean of the cosines.
    pub(crate) x: f64,
    /// Mean of the sines.
    pub(crate) y: f64,
    /// Number of angles that contributed.
    pub(crate) count: usize,
}

impl Resultant {
    /// Averages the unit vectors of `angles` (radians).
    ///
    /// An empty input yields NaN components.
    #[expect(clippy::cast_precision_loss)]
    pub(crate) fn from_angles<I>(angles: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut sum_cos = 0.0;
        let mut sum_sin = 0.0;
        let mut count = 0;
        for angle in angles {
            let (sin, cos) = angle.sin_cos();
            sum_cos += cos;
            sum_sin += sin;
            count += 1;
        }
        let n = count as f64;
        Self {
            x: sum_cos / n,
            y: sum_sin / n,
            count,
        }
    }

    pub(crate) fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    pub(crate) fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub(crate) fn std(self) -> f64 {
        std_from_length(self.length())
    }
}

/// Circular standard deviation `sqrt(-2 ln R)` for a resultant length `R`.
///
/// Rounding can push `R` of a fully concentrated distribution slightly above
/// 1; such values are clamped to 1 so the result is 0 rather than NaN.
/// `R = 0` gives `+inf`. NaN passes through.
fn std_from_length(length: f64) -> f64 {
    let length = if length > 1.0 { 1.0 } else { length };
    // abs() turns the -0.0 from `sqrt(-0.0)` into 0.0
    (-2.0 * length.ln()).sqrt().abs()
}

/// Computes the mean of a distribution of angles in radians.
///
/// The result lies in `[-pi, pi]`; either end may appear. It does not change
/// when any input angle is shifted by a multiple of `2 pi`. For a distribution spread uniformly around
/// the circle the resultant vector vanishes and the returned direction is
/// numerically arbitrary.
///
/// An empty distribution yields NaN.
///
/// # Examples
///
/// ```
/// use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};
///
/// use circstat::angular::angular_mean;
///
/// let mean = angular_mean([0.0, FRAC_PI_2]);
/// assert!((mean - FRAC_PI_4).abs() < 1e-12);
/// ```
#[must_use]
pub fn angular_mean<I>(angles: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    Resultant::from_angles(angles).angle()
}

/// Computes the circular standard deviation of a distribution of angles in
/// radians.
///
/// Identical angles give 0. A fully dispersed distribution (resultant length
/// 0) gives `+inf`; this is reported as a value, not an error.
///
/// # Examples
///
/// ```
/// use circstat::angular::angular_std;
///
/// assert!(angular_std([1.0, 1.0, 1.0]) < 1e-6);
/// assert!(angular_std([0.0, 0.5]) > 0.0);
/// ```
#[must_use]
pub fn angular_std<I>(angles: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    Resultant::from_angles(angles).std()
}

/// Computes the length of the mean resultant vector of angles in radians.
///
/// Ranges from 0 (fully dispersed) to 1 (all angles identical).
#[must_use]
pub fn resultant_length<I>(angles: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    Resultant::from_angles(angles).length()
}

/// Computes the mean of a distribution of angles in degrees.
///
/// The result lies in `[-180, 180]`; either end may appear.
///
/// # Examples
///
/// ```
/// use circstat::angular::angular_mean_deg;
///
/// let mean = angular_mean_deg([350.0, 20.0]);
/// assert!((mean - 5.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn angular_mean_deg<I>(angles: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    angular_mean(angles.into_iter().map(f64::to_radians)).to_degrees()
}

/// Computes the circular standard deviation of angles in degrees.
///
/// The dispersion is converted with the plain radian-to-degree factor, so it
/// shares the numeric scale of [`angular_mean_deg`].
#[must_use]
pub fn angular_std_deg<I>(angles: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    angular_std(angles.into_iter().map(f64::to_radians)).to_degrees()
}

/// Circular mean of two angles in radians.
#[must_use]
pub fn two_angle_mean(angle1: f64, angle2: f64) -> f64 {
    let (sin1, cos1) = angle1.sin_cos();
    let (sin2, cos2) = angle2.sin_cos();
    f64::atan2((sin1 + sin2) / 2.0, (cos1 + cos2) / 2.0)
}

/// Circular mean of two angles in degrees.
#[must_use]
pub fn two_angle_mean_deg(angle1: f64, angle2: f64) -> f64 {
    two_angle_mean(angle1.to_radians(), angle2.to_radians()).to_degrees()
}

/// Computes the element-by-element mean of two sets of angles in radians.
///
/// Equal-length inputs are paired element by element. A single-element input
/// is broadcast against the other one.
///
/// # Errors
///
/// Returns [`ShapeError::Broadcast`] if the lengths differ and neither is 1.
///
/// # Examples
///
/// ```
/// use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};
///
/// use circstat::angular::mean_of_two_angles;
///
/// let means = mean_of_two_angles(&[0.0], &[FRAC_PI_2, -FRAC_PI_2]).unwrap();
/// assert!((means[0] - FRAC_PI_4).abs() < 1e-12);
/// assert!((means[1] + FRAC_PI_4).abs() < 1e-12);
///
/// assert!(mean_of_two_angles(&[0.0, PI], &[0.0, PI, 1.0]).is_err());
/// ```
pub fn mean_of_two_angles(angles1: &[f64], angles2: &[f64]) -> Result<Vec<f64>, ShapeError> {
    broadcast_with(angles1, angles2, two_angle_mean)
}

/// Computes the element-by-element mean of two sets of angles in degrees.
///
/// Broadcasting follows [`mean_of_two_angles`].
///
/// # Errors
///
/// Returns [`ShapeError::Broadcast`] if the lengths differ and neither is 1.
pub fn mean_of_two_angles_deg(angles1: &[f64], angles2: &[f64]) -> Result<Vec<f64>, ShapeError> {
    broadcast_with(angles1, angles2, two_angle_mean_deg)
}

fn broadcast_with<F>(left: &[f64], right: &[f64], f: F) -> Result<Vec<f64>, ShapeError>
where
    F: Fn(f64, f64) -> f64,
{
    match (left, right) {
        _ if left.len() == right.len() => {
            Ok(left.iter().zip(right).map(|(&l, &r)| f(l, r)).collect())
        }
        (&[l], _) => Ok(right.iter().map(|&r| f(l, r)).collect()),
        (_, &[r]) => Ok(left.iter().map(|&l| f(l, r)).collect()),
        _ => Err(ShapeError::Broadcast {
            left: left.len(),
            right: right.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

    use super::*;

    const EPS: f64 = 1e-9;

    /// Distance between two angles in degrees, ignoring whole turns.
    fn deg_distance(a: f64, b: f64) -> f64 {
        let d = (a - b).rem_euclid(360.0);
        d.min(360.0 - d)
    }

    #[test]
    fn test_mean_of_quarter_turn() {
        let mean = angular_mean([0.0, FRAC_PI_2]);
        assert!((mean - FRAC_PI_4).abs() < EPS, "got {mean}");
    }

    #[test]
    fn test_mean_invariant_under_full_turns() {
        for theta in [-3.0, -1.2, 0.0, 0.7, 2.5, 3.1] {
            for k in [-3.0, -1.0, 1.0, 2.0, 5.0] {
                let base = angular_mean([theta]);
                let shifted = angular_mean([theta + TAU * k]);
                assert!(
                    (base - shifted).abs() < EPS,
                    "theta={theta} k={k}: {base} vs {shifted}"
                );
            }
        }
    }

    #[test]
    fn test_mean_across_wrap_boundary() {
        let mean = angular_mean_deg([355.0, 5.0, 0.0]);
        assert!(deg_distance(mean, 0.0) < EPS, "got {mean}");

        let mean = angular_mean([PI - 0.1, -PI + 0.1]);
        assert!((mean.abs() - PI).abs() < EPS, "got {mean}");
    }

    #[test]
    fn test_mean_range() {
        for angle in [PI, -PI, 3.0 * PI, -3.0 * PI] {
            let mean = angular_mean([angle]);
            assert!((-PI..=PI).contains(&mean), "{angle}: got {mean}");
        }
        let mean = angular_mean_deg([270.0]);
        assert!((mean + 90.0).abs() < EPS, "got {mean}");
    }

    #[test]
    fn test_std_of_identical_angles_is_zero() {
        // rounding in the resultant length surfaces as ~1e-8 after the sqrt
        assert!(angular_std([0.3; 10]) < 1e-6);
        assert!(angular_std([-2.0, -2.0]) < 1e-6);
        assert!(angular_std_deg([123.0; 5]) < 1e-4);
        assert_eq!(angular_std([0.0, 0.0]), 0.0);
    }

    #[test]
    fn test_std_of_uniform_spread_is_huge() {
        let std = angular_std([0.0, FRAC_PI_2, PI, 3.0 * FRAC_PI_2]);
        assert!(std > 5.0, "got {std}");
        assert!(resultant_length([0.0, FRAC_PI_2, PI, 3.0 * FRAC_PI_2]) < 1e-12);
    }

    #[test]
    fn test_std_of_opposite_angles_is_infinite() {
        let std = angular_std([0.5, 0.5 + PI]);
        assert!(std > 5.0, "got {std}");
        let std = angular_std([FRAC_PI_4, -FRAC_PI_4 - FRAC_PI_2]);
        assert!(std > 5.0, "got {std}");
    }

    #[test]
    fn test_std_from_length() {
        assert_eq!(std_from_length(0.0), f64::INFINITY);
        assert_eq!(std_from_length(1.0), 0.0);
        assert_eq!(std_from_length(1.0 + 1e-15), 0.0);
        assert!(std_from_length(f64::NAN).is_nan());
        let half = std_from_length(0.5);
        assert!((half - (2.0 * 2.0_f64.ln()).sqrt()).abs() < EPS);
    }

    #[test]
    fn test_std_matches_closed_form() {
        // Two angles at +-a: resultant length cos(a)
        let a: f64 = 0.4;
        let expected = (-2.0 * a.cos().ln()).sqrt();
        let std = angular_std([a, -a]);
        assert!((std - expected).abs() < EPS, "{std} vs {expected}");
    }

    #[test]
    fn test_empty_distribution_is_nan() {
        assert!(angular_mean(std::iter::empty()).is_nan());
        assert!(angular_std(std::iter::empty()).is_nan());
        assert!(resultant_length(Vec::new()).is_nan());
    }

    #[test]
    fn test_degree_wrappers_match_radians() {
        let samples: [&[f64]; 4] = [
            &[10.0, 20.0, 30.0],
            &[359.0, 1.0],
            &[-170.0, 170.0, 180.0],
            &[45.0, 90.0, 400.0, -30.0],
        ];
        for sample in samples {
            let mean_deg = angular_mean_deg(sample.iter().copied());
            let mean_rad = angular_mean(sample.iter().map(|x| x.to_radians())).to_degrees();
            assert!((mean_deg - mean_rad).abs() < EPS, "{sample:?}");

            let std_deg = angular_std_deg(sample.iter().copied());
            let std_rad = angular_std(sample.iter().map(|x| x.to_radians())).to_degrees();
            assert!((std_deg - std_rad).abs() < EPS, "{sample:?}");
        }
    }

    #[test]
    fn test_two_angle_mean_wraps() {
        let mean = two_angle_mean_deg(359.0, 1.0);
        assert!(mean.abs() < EPS, "got {mean}");

        let means = mean_of_two_angles_deg(&[359.0], &[1.0]).unwrap();
        assert_eq!(means.len(), 1);
        assert!(means[0].abs() < EPS, "got {}", means[0]);
    }

    #[test]
    fn test_two_angle_mean_matches_general_mean() {
        let pairs = [(0.1, 0.2), (3.0, -3.0), (-1.0, 2.0), (0.0, FRAC_PI_2)];
        for (a, b) in pairs {
            let two = two_angle_mean(a, b);
            let general = angular_mean([a, b]);
            assert!((two - general).abs() < EPS, "({a}, {b})");
        }
    }

    #[test]
    fn test_mean_of_two_angles_broadcasting() {
        let means = mean_of_two_angles(&[0.0, FRAC_PI_2], &[FRAC_PI_2, PI]).unwrap();
        assert_eq!(means.len(), 2);
        assert!((means[0] - FRAC_PI_4).abs() < EPS);
        assert!((means[1] - 3.0 * FRAC_PI_4).abs() < EPS);

        let means = mean_of_two_angles(&[0.0, FRAC_PI_2, PI], &[0.0]).unwrap();
        assert_eq!(means.len(), 3);
        assert!((means[1] - FRAC_PI_4).abs() < EPS);

        let means = mean_of_two_angles(&[], &[]).unwrap();
        assert!(means.is_empty());
    }

    #[test]
    fn test_mean_of_two_angles_shape_mismatch() {
        let err = mean_of_two_angles(&[0.0, 1.0], &[0.0, 1.0, 2.0]).unwrap_err();
        assert_eq!(err, ShapeError::Broadcast { left: 2, right: 3 });
        assert!(mean_of_two_angles_deg(&[], &[1.0, 2.0]).is_err());
    }
}
