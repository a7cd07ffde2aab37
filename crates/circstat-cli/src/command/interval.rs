use circstat::interval::Interval;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct IntervalArg {
    /// Lower bound of the circular interval
    #[arg(long, allow_negative_numbers = true)]
    min: f64,
    /// Upper bound of the circular interval (identified with the lower bound)
    #[arg(long, allow_negative_numbers = true)]
    max: f64,
    /// Values taken from the interval
    #[arg(required = true, allow_negative_numbers = true)]
    values: Vec<f64>,
}

impl IntervalArg {
    fn interval(&self) -> Interval {
        if self.max <= self.min {
            tracing::warn!(
                min = self.min,
                max = self.max,
                "interval upper bound is not above lower bound; results are meaningless"
            );
        }
        Interval::new(self.min, self.max)
    }
}

pub(crate) fn run_mean(arg: &IntervalArg) {
    let mean = arg.interval().mean(arg.values.iter().copied());
    println!("{mean}");
}

pub(crate) fn run_std(arg: &IntervalArg) {
    let std = arg.interval().std(arg.values.iter().copied());
    println!("{std}");
}
