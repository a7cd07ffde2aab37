//! Combined circular statistics for one distribution.
//!
//! [`CircularStats`] computes direction, spread and concentration in a single
//! pass, for radians, degrees or any [`Interval`].

use crate::{angular::Resultant, interval::Interval};

/// Circular summary statistics of one distribution.
///
/// The circular counterpart of a descriptive-statistics bundle: direction,
/// spread and concentration computed from a single pass over the data.
///
/// # Examples
///
/// ```
/// use circstat::summary::CircularStats;
///
/// let stats = CircularStats::new_deg([350.0, 10.0, 0.0]).unwrap();
/// assert_eq!(stats.count, 3);
/// assert!(stats.mean.abs() < 1e-9);
/// assert!(stats.resultant_length > 0.98);
///
/// assert!(CircularStats::new_deg([]).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularStats {
    /// Circular mean, in the units of the input.
    pub mean: f64,
    /// Circular standard deviation, in the units of the input.
    pub std: f64,
    /// Length of the mean resultant vector (0 = dispersed, 1 = concentrated).
    pub resultant_length: f64,
    /// Number of values in the distribution.
    pub count: usize,
}

impl CircularStats {
    /// Summarizes angles in radians.
    ///
    /// # Returns
    ///
    /// * `Some(CircularStats)` - if the distribution contains at least one value
    /// * `None` - if the distribution is empty
    #[must_use]
    pub fn new<I>(angles: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let resultant = Resultant::from_angles(angles);
        (resultant.count > 0).then(|| Self {
            mean: resultant.angle(),
            std: resultant.std(),
            resultant_length: resultant.length(),
            count: resultant.count,
        })
    }

    /// Summarizes angles in degrees; `mean` and `std` are in degrees.
    #[must_use]
    pub fn new_deg<I>(angles: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let stats = Self::new(angles.into_iter().map(f64::to_radians))?;
        Some(Self {
            mean: stats.mean.to_degrees(),
            std: stats.std.to_degrees(),
            ..stats
        })
    }

    /// Summarizes values taken from a circular `interval`; `mean` and `std`
    /// are in interval units.
    #[must_use]
    pub fn in_interval<I>(dist: I, interval: Interval) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let stats = Self::new(dist.into_iter().map(|value| interval.to_angle(value)))?;
        Some(Self {
            mean: interval.from_angle(stats.mean),
            std: interval.scale_dispersion(stats.std),
            ..stats
        })
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    use super::*;
    use crate::{
        angular::{angular_mean, angular_std, angular_std_deg},
        interval::{interval_mean, interval_std},
    };

    #[test]
    fn test_empty_is_none() {
        assert!(CircularStats::new(std::iter::empty()).is_none());
        assert!(CircularStats::in_interval(vec![], Interval::new(0.0, 24.0)).is_none());
    }

    #[test]
    fn test_radians_match_free_functions() {
        let angles = [0.0, FRAC_PI_2, 0.3];
        let stats = CircularStats::new(angles).unwrap();
        assert!((stats.mean - angular_mean(angles)).abs() < 1e-9);
        assert!((stats.std - angular_std(angles)).abs() < 1e-9);
        assert_eq!(stats.count, 3);
    }

    #[test]
    fn test_quarter_turn() {
        let stats = CircularStats::new([0.0, FRAC_PI_2]).unwrap();
        assert!((stats.mean - FRAC_PI_4).abs() < 1e-9);
        assert!((stats.resultant_length - FRAC_PI_4.cos()).abs() < 1e-9);
    }

    #[test]
    fn test_degrees() {
        let stats = CircularStats::new_deg([80.0, 100.0]).unwrap();
        assert!((stats.mean - 90.0).abs() < 1e-9);
        assert!((stats.std - angular_std_deg([80.0, 100.0])).abs() < 1e-9);
    }

    #[test]
    fn test_interval() {
        let hours = [22.0, 23.0, 1.0, 2.0];
        let stats = CircularStats::in_interval(hours, Interval::new(0.0, 24.0)).unwrap();
        assert!((stats.mean - interval_mean(hours, 0.0, 24.0)).abs() < 1e-9);
        assert!((stats.std - interval_std(hours, 0.0, 24.0)).abs() < 1e-9);
        assert_eq!(stats.count, 4);
    }
}
