//! Mean and median reductions over masked radar fields.
//!
//! These are linear statistics: no wrap-around is applied. They are used for
//! non-angular fields such as reflectivity or differential phase offsets,
//! where the only complication is missing data.

use crate::masked::{Axis, MaskedField, MaskedSeries};

/// Kind of average computed by [`compute_directional_stats`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum AvgType {
    #[default]
    #[display("mean")]
    Mean,
    #[display("median")]
    Median,
}

/// Result of [`compute_directional_stats`].
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionalStats {
    /// One statistic per output index; masked where too few inputs were valid.
    pub values: MaskedSeries,
    /// Number of valid inputs behind each output.
    pub nvalid: Vec<usize>,
}

/// Reduction settings with the conventional defaults: mean, at least one
/// valid input, reduce across rays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionalStatsConfig {
    pub avg_type: AvgType,
    pub nvalid_min: usize,
    pub axis: Axis,
}

impl Default for DirectionalStatsConfig {
    fn default() -> Self {
        Self {
            avg_type: AvgType::Mean,
            nvalid_min: 1,
            axis: Axis::Rays,
        }
    }
}

impl DirectionalStatsConfig {
    #[must_use]
    pub fn compute(&self, field: &MaskedField) -> DirectionalStats {
        compute_directional_stats(field, self.avg_type, self.nvalid_min, self.axis)
    }
}

/// Computes the mean or median of `field` along `axis`, skipping masked
/// elements.
///
/// The output has one element per lane of the non-reduced axis. Outputs
/// backed by fewer than `nvalid_min` valid inputs, or by none at all, are
/// masked.
///
/// # Examples
///
/// ```
/// use circstat::{
///     directional::{AvgType, compute_directional_stats},
///     masked::{Axis, MaskedField},
/// };
///
/// let field = MaskedField::from_data(2, 3, vec![1.0, 2.0, 3.0, 3.0, 2.0, 1.0]).unwrap();
/// let stats = compute_directional_stats(&field, AvgType::Median, 1, Axis::Rays);
/// assert_eq!(stats.values.valid_values().collect::<Vec<_>>(), [2.0, 2.0, 2.0]);
/// assert_eq!(stats.nvalid, [2, 2, 2]);
/// ```
#[must_use]
pub fn compute_directional_stats(
    field: &MaskedField,
    avg_type: AvgType,
    nvalid_min: usize,
    axis: Axis,
) -> DirectionalStats {
    let lanes = field.lane_count(axis);
    let mut values = Vec::with_capacity(lanes);
    let mut nvalid = Vec::with_capacity(lanes);
    let mut valid = vec![];

    for lane in 0..lanes {
        valid.clear();
        valid.extend(field.lane(axis, lane).flatten());
        let value = match avg_type {
            AvgType::Mean => mean(&valid),
            AvgType::Median => median(&mut valid),
        };
        values.push(value);
        nvalid.push(valid.len());
    }

    let mut values = MaskedSeries::from_options(values);
    for (index, &count) in nvalid.iter().enumerate() {
        if count < nvalid_min {
            values.mask_where(index);
        }
    }
    tracing::debug!(
        %avg_type,
        %axis,
        nvalid_min,
        outputs = values.len(),
        masked = values.len() - values.count_valid(),
        "computed directional stats"
    );

    DirectionalStats { values, nvalid }
}

#[expect(clippy::cast_precision_loss)]
fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Median; even-length inputs average the two middle values. Any NaN makes
/// the median NaN.
fn median(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    if values.iter().any(|value| value.is_nan()) {
        return Some(f64::NAN);
    }
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Some(f64::midpoint(values[mid - 1], values[mid]))
    } else {
        Some(values[mid])
    }
}
