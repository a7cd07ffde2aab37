use circstat::angular;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct AngularArg {
    /// Interpret angles as degrees instead of radians
    #[arg(long)]
    deg: bool,
    /// Angles to summarize
    #[arg(required = true, allow_negative_numbers = true)]
    angles: Vec<f64>,
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct MeanOfTwoArg {
    /// Interpret angles as degrees instead of radians
    #[arg(long)]
    deg: bool,
    /// First set of angles (comma-separated)
    #[arg(long, value_delimiter = ',', required = true, allow_negative_numbers = true)]
    first: Vec<f64>,
    /// Second set of angles (comma-separated); a single value is broadcast
    #[arg(long, value_delimiter = ',', required = true, allow_negative_numbers = true)]
    second: Vec<f64>,
}

pub(crate) fn run_mean(arg: &AngularArg) {
    let angles = arg.angles.iter().copied();
    let mean = if arg.deg {
        angular::angular_mean_deg(angles)
    } else {
        angular::angular_mean(angles)
    };
    println!("{mean}");
}

pub(crate) fn run_std(arg: &AngularArg) {
    let angles = arg.angles.iter().copied();
    let std = if arg.deg {
        angular::angular_std_deg(angles)
    } else {
        angular::angular_std(angles)
    };
    println!("{std}");
}

pub(crate) fn run_mean_of_two(arg: &MeanOfTwoArg) -> anyhow::Result<()> {
    let means = if arg.deg {
        angular::mean_of_two_angles_deg(&arg.first, &arg.second)?
    } else {
        angular::mean_of_two_angles(&arg.first, &arg.second)?
    };
    for mean in means {
        println!("{mean}");
    }
    Ok(())
}
