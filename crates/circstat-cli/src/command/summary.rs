use std::path::PathBuf;

use circstat::{interval::Interval, summary::CircularStats};

use crate::{schema::stats::CircularStatsOutput, util};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SummaryArg {
    /// Interpret values as degrees instead of radians
    #[arg(long, conflicts_with_all = ["min", "max"])]
    deg: bool,
    /// Lower bound of a custom circular interval
    #[arg(long, requires = "max", allow_negative_numbers = true)]
    min: Option<f64>,
    /// Upper bound of a custom circular interval
    #[arg(long, requires = "min", allow_negative_numbers = true)]
    max: Option<f64>,
    /// Output file path (stdout if omitted)
    #[arg(long)]
    output: Option<PathBuf>,
    /// Values to summarize
    #[arg(required = true, allow_negative_numbers = true)]
    values: Vec<f64>,
}

pub(crate) fn run(arg: &SummaryArg) -> anyhow::Result<()> {
    let values = arg.values.iter().copied();
    let stats = match (arg.min, arg.max) {
        (Some(min), Some(max)) => CircularStats::in_interval(values, Interval::new(min, max)),
        _ if arg.deg => CircularStats::new_deg(values),
        _ => CircularStats::new(values),
    }
    .ok_or_else(|| anyhow::anyhow!("no values to summarize"))?;

    util::write_json(&CircularStatsOutput::from(stats), arg.output.as_deref())
}
