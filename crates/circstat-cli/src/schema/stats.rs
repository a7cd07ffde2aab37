use circstat::{
    directional::{DirectionalStats, DirectionalStatsConfig},
    summary::CircularStats,
};
use serde::Serialize;

/// JSON form of [`CircularStats`].
///
/// Non-finite values (e.g. the infinite spread of a fully dispersed
/// distribution) serialize as `null`.
#[derive(Debug, Clone, Serialize)]
pub struct CircularStatsOutput {
    pub mean: f64,
    pub std: f64,
    pub resultant_length: f64,
    pub count: usize,
}

impl From<CircularStats> for CircularStatsOutput {
    fn from(stats: CircularStats) -> Self {
        Self {
            mean: stats.mean,
            std: stats.std,
            resultant_length: stats.resultant_length,
            count: stats.count,
        }
    }
}

/// JSON form of [`DirectionalStats`] together with the settings that
/// produced it. Masked outputs serialize as `null`.
#[derive(Debug, Clone, Serialize)]
pub struct DirectionalStatsOutput {
    pub avg_type: String,
    pub axis: String,
    pub nvalid_min: usize,
    pub values: Vec<Option<f64>>,
    pub nvalid: Vec<usize>,
}

impl DirectionalStatsOutput {
    pub fn new(config: &DirectionalStatsConfig, stats: &DirectionalStats) -> Self {
        Self {
            avg_type: config.avg_type.to_string(),
            axis: config.axis.to_string(),
            nvalid_min: config.nvalid_min,
            values: stats.values.iter().collect(),
            nvalid: stats.nvalid.clone(),
        }
    }
}
