use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use self::{
    angular::{AngularArg, MeanOfTwoArg},
    directional_stats::DirectionalStatsArg,
    interval::IntervalArg,
    summary::SummaryArg,
};

mod angular;
mod directional_stats;
mod interval;
mod summary;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Log debug output to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Circular mean of angles
    AngularMean(#[clap(flatten)] AngularArg),
    /// Circular standard deviation of angles
    AngularStd(#[clap(flatten)] AngularArg),
    /// Element-by-element circular mean of two sets of angles
    MeanOfTwo(#[clap(flatten)] MeanOfTwoArg),
    /// Circular mean of values on a custom interval
    IntervalMean(#[clap(flatten)] IntervalArg),
    /// Circular standard deviation of values on a custom interval
    IntervalStd(#[clap(flatten)] IntervalArg),
    /// Mean, standard deviation and resultant length as JSON
    Summary(#[clap(flatten)] SummaryArg),
    /// Mean or median of a masked field along rays or gates
    DirectionalStats(#[clap(flatten)] DirectionalStatsArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_logging(args.verbose);
    match args.mode {
        Mode::AngularMean(arg) => angular::run_mean(&arg),
        Mode::AngularStd(arg) => angular::run_std(&arg),
        Mode::MeanOfTwo(arg) => angular::run_mean_of_two(&arg)?,
        Mode::IntervalMean(arg) => interval::run_mean(&arg),
        Mode::IntervalStd(arg) => interval::run_std(&arg),
        Mode::Summary(arg) => summary::run(&arg)?,
        Mode::DirectionalStats(arg) => directional_stats::run(&arg)?,
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
