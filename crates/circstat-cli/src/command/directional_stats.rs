use std::path::PathBuf;

use circstat::{
    directional::{AvgType, DirectionalStatsConfig},
    masked::Axis,
};

use crate::{
    schema::{field::FieldFile, stats::DirectionalStatsOutput},
    util,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum AvgTypeArg {
    Mean,
    Median,
}

impl From<AvgTypeArg> for AvgType {
    fn from(arg: AvgTypeArg) -> Self {
        match arg {
            AvgTypeArg::Mean => AvgType::Mean,
            AvgTypeArg::Median => AvgType::Median,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum AxisArg {
    /// Reduce across rays (axis 0), one output per range gate
    Rays,
    /// Reduce across range gates (axis 1), one output per ray
    Gates,
}

impl From<AxisArg> for Axis {
    fn from(arg: AxisArg) -> Self {
        match arg {
            AxisArg::Rays => Axis::Rays,
            AxisArg::Gates => Axis::Gates,
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct DirectionalStatsArg {
    /// Path to the field JSON file
    field: PathBuf,
    /// Kind of average
    #[arg(long = "avg", value_enum, default_value_t = AvgTypeArg::Mean)]
    avg_type: AvgTypeArg,
    /// Minimum number of valid inputs for an output to be valid
    #[arg(long, default_value_t = 1)]
    nvalid_min: usize,
    /// Axis to reduce along
    #[arg(long, value_enum, default_value_t = AxisArg::Rays)]
    axis: AxisArg,
    /// Output file path (stdout if omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

impl DirectionalStatsArg {
    fn config(&self) -> DirectionalStatsConfig {
        DirectionalStatsConfig {
            avg_type: self.avg_type.into(),
            nvalid_min: self.nvalid_min,
            axis: self.axis.into(),
        }
    }
}

pub(crate) fn run(arg: &DirectionalStatsArg) -> anyhow::Result<()> {
    let field_file: FieldFile = util::read_json_file("field", &arg.field)?;
    let field = field_file.into_masked_field()?;
    tracing::debug!(
        path = %arg.field.display(),
        rows = field.rows(),
        cols = field.cols(),
        valid = field.count_valid(),
        "loaded field"
    );

    let config = arg.config();
    let stats = config.compute(&field);
    util::write_json(
        &DirectionalStatsOutput::new(&config, &stats),
        arg.output.as_deref(),
    )
}
