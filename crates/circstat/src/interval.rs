//! Circular statistics for periodic quantities on an arbitrary interval.
//!
//! Values are linearly remapped from `[min, max)` onto `[-pi, pi)`, processed
//! with the angular machinery, and mapped back. Any periodic measurement can
//! be averaged this way by giving its native period bounds.

use std::f64::consts::PI;

use crate::angular::Resultant;

/// A circular domain `[min, max)`.
///
/// `max` and `min` describe the same point on the circle. The bounds are not
/// validated: `max <= min` produces meaningless results rather than an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Lower bound of the interval.
    pub min: f64,
    /// Upper bound of the interval, identified with `min`.
    pub max: f64,
}

impl Interval {
    /// Angles in radians, `[-pi, pi)`.
    pub const RADIANS: Self = Self::new(-PI, PI);
    /// Angles in degrees, `[0, 360)`.
    pub const DEGREES: Self = Self::new(0.0, 360.0);

    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Half the period of the interval.
    #[must_use]
    pub fn half_width(self) -> f64 {
        (self.max - self.min) / 2.0
    }

    /// Midpoint of the interval; maps to angle 0.
    #[must_use]
    pub fn center(self) -> f64 {
        self.min + self.half_width()
    }

    /// Maps a value in interval units to an angle in radians.
    #[must_use]
    pub fn to_angle(self, value: f64) -> f64 {
        (value - self.center()) / self.half_width() * PI
    }

    /// Maps an angle in radians back to interval units.
    #[must_use]
    pub fn from_angle(self, angle: f64) -> f64 {
        angle * self.half_width() / PI + self.center()
    }

    /// Folds a value onto `[min, max)` by adding or removing whole periods.
    ///
    /// # Examples
    ///
    /// ```
    /// use circstat::interval::Interval;
    ///
    /// assert_eq!(Interval::DEGREES.wrap(-90.0), 270.0);
    /// assert_eq!(Interval::DEGREES.wrap(360.0), 0.0);
    /// assert_eq!(Interval::new(0.0, 24.0).wrap(25.0), 1.0);
    /// ```
    #[must_use]
    pub fn wrap(self, value: f64) -> f64 {
        self.min + (value - self.min).rem_euclid(self.max - self.min)
    }

    pub(crate) fn resultant<I>(self, dist: I) -> Resultant
    where
        I: IntoIterator<Item = f64>,
    {
        Resultant::from_angles(dist.into_iter().map(|value| self.to_angle(value)))
    }

    /// Circular mean of `dist`, in interval units.
    ///
    /// The result lies in `[min, max]`; either end may appear. Use
    /// [`Interval::wrap`] to fold it onto `[min, max)`. Out-of-range inputs
    /// are folded onto the circle implicitly.
    #[must_use]
    pub fn mean<I>(self, dist: I) -> f64
    where
        I: IntoIterator<Item = f64>,
    {
        self.from_angle(self.resultant(dist).angle())
    }

    /// Circular standard deviation of `dist`, in interval units.
    #[must_use]
    pub fn std<I>(self, dist: I) -> f64
    where
        I: IntoIterator<Item = f64>,
    {
        self.scale_dispersion(self.resultant(dist).std())
    }

    /// Converts a dispersion in radians to interval units.
    pub(crate) fn scale_dispersion(self, radians: f64) -> f64 {
        radians * self.half_width() / PI
    }
}

/// Computes the mean of a distribution of values taken from the circular
/// interval `[interval_min, interval_max)`.
///
/// # Examples
///
/// ```
/// use circstat::interval::interval_mean;
///
/// // Compass bearings spanning north
/// let mean = interval_mean([350.0, 20.0], 0.0, 360.0);
/// assert!((mean - 5.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn interval_mean<I>(dist: I, interval_min: f64, interval_max: f64) -> f64
where
    I: IntoIterator<Item = f64>,
{
    Interval::new(interval_min, interval_max).mean(dist)
}

/// Computes the standard deviation of a distribution of values taken from the
/// circular interval `[interval_min, interval_max)`.
///
/// The dispersion is expressed in interval units.
#[must_use]
pub fn interval_std<I>(dist: I, interval_min: f64, interval_max: f64) -> f64
where
    I: IntoIterator<Item = f64>,
{
    Interval::new(interval_min, interval_max).std(dist)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;
    use crate::angular::{angular_mean, angular_mean_deg, angular_std, angular_std_deg};

    const EPS: f64 = 1e-9;

    fn periodic_distance(a: f64, b: f64, period: f64) -> f64 {
        let d = (a - b).rem_euclid(period);
        d.min(period - d)
    }

    #[test]
    fn test_interval_geometry() {
        let interval = Interval::new(0.0, 360.0);
        assert_eq!(interval.half_width(), 180.0);
        assert_eq!(interval.center(), 180.0);
        assert_eq!(interval.to_angle(180.0), 0.0);
        assert!((interval.to_angle(0.0) + PI).abs() < EPS);
        assert!((interval.from_angle(PI) - 360.0).abs() < EPS);

        let hours = Interval::new(0.0, 24.0);
        for value in [0.0, 3.5, 12.0, 23.9] {
            let back = hours.from_angle(hours.to_angle(value));
            assert!((back - value).abs() < EPS);
        }
    }

    #[test]
    fn test_mean_wraps_at_interval_boundary() {
        let mean = interval_mean([359.0, 1.0], 0.0, 360.0);
        assert!(periodic_distance(mean, 0.0, 360.0) < EPS, "got {mean}");

        let mean = interval_mean([23.0, 1.0, 0.0], 0.0, 24.0);
        assert!(periodic_distance(mean, 0.0, 24.0) < EPS, "got {mean}");
    }

    #[test]
    fn test_mean_stays_within_closed_interval() {
        let interval = Interval::DEGREES;
        for dist in [[0.0, 0.0], [359.0, 1.0], [180.0, 180.0], [360.0, 720.0]] {
            let mean = interval.mean(dist);
            assert!(
                (interval.min - EPS..=interval.max + EPS).contains(&mean),
                "{dist:?}: got {mean}"
            );
            let wrapped = interval.wrap(mean);
            assert!((interval.min..interval.max).contains(&wrapped) || wrapped == interval.max);
        }
    }

    #[test]
    fn test_mean_inside_interval() {
        let mean = interval_mean([10.0, 20.0, 30.0], 0.0, 100.0);
        assert!((mean - 20.0).abs() < EPS, "got {mean}");

        let mean = interval_mean([-5.0, 5.0], -10.0, 10.0);
        assert!(mean.abs() < EPS, "got {mean}");
    }

    #[test]
    fn test_degree_interval_matches_degree_functions() {
        let samples: [&[f64]; 3] = [&[10.0, 50.0], &[300.0, 20.0, 340.0], &[90.0, 180.0, 200.0]];
        for sample in samples {
            let interval = interval_mean(sample.iter().copied(), 0.0, 360.0);
            let angular = angular_mean_deg(sample.iter().copied());
            assert!(
                periodic_distance(interval, angular, 360.0) < EPS,
                "{sample:?}: {interval} vs {angular}"
            );

            let interval = interval_std(sample.iter().copied(), 0.0, 360.0);
            let angular = angular_std_deg(sample.iter().copied());
            assert!((interval - angular).abs() < 1e-6, "{sample:?}");
        }
    }

    #[test]
    fn test_radian_interval_matches_radian_functions() {
        let samples: [&[f64]; 3] = [&[0.1, 0.5], &[3.0, -3.0, 2.9], &[-1.0, 0.0, 1.5]];
        for sample in samples {
            let interval = interval_mean(sample.iter().copied(), -PI, PI);
            let angular = angular_mean(sample.iter().copied());
            assert!((interval - angular).abs() < EPS, "{sample:?}");

            let interval = Interval::RADIANS.std(sample.iter().copied());
            let angular = angular_std(sample.iter().copied());
            assert!((interval - angular).abs() < 1e-6, "{sample:?}");
        }
    }

    #[test]
    fn test_std_scales_with_interval() {
        // Same shape of distribution on intervals of different width
        let narrow = interval_std([1.0, 2.0, 3.0], 0.0, 10.0);
        let wide = interval_std([10.0, 20.0, 30.0], 0.0, 100.0);
        assert!((wide - 10.0 * narrow).abs() < 1e-6, "{narrow} vs {wide}");
    }

    #[test]
    fn test_std_identical_values() {
        assert!(interval_std([42.0; 4], 0.0, 360.0) < 1e-4);
    }

    #[test]
    fn test_wrap() {
        let interval = Interval::DEGREES;
        assert_eq!(interval.wrap(0.0), 0.0);
        assert_eq!(interval.wrap(720.0 + 15.0), 15.0);
        assert_eq!(interval.wrap(-10.0), 350.0);

        let radians = Interval::RADIANS;
        assert!((radians.wrap(PI + 0.5) - (-PI + 0.5)).abs() < EPS);
    }
}
