use clap::{Args, Parser, Subcommand};
use msm_cost::{
    calibrate, measure::measure_table, reference, types::MAX_MSM_SIZE, validate_with,
    BenchmarkPoint, Calibration, CostModel, CostModelError, Group,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "msm-cost",
    about = "Estimate G1/G2 MSM wall time and check it against benchmarks"
)]
struct Cli {
    #[command(flatten)]
    model: ModelArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct ModelArgs {
    /// Nanoseconds per complexity unit for G1
    #[arg(long, global = true, default_value_t = msm_cost::types::G1_NS_PER_UNIT)]
    g1_ns: f64,

    /// Nanoseconds per complexity unit for G2
    #[arg(long, global = true, default_value_t = msm_cost::types::G2_NS_PER_UNIT)]
    g2_ns: f64,

    /// Scalar bit width used by the complexity formula
    #[arg(long, global = true, default_value_t = msm_cost::types::SCALAR_BIT_WIDTH)]
    scalar_bits: u32,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate one MSM
    Estimate {
        #[arg(short, long)]
        group: Group,
        #[arg(short, long, allow_negative_numbers = true)]
        size: i64,
    },
    /// Compare the model against the reference benchmark table
    Validate {
        /// Group to validate; both when omitted
        #[arg(short, long)]
        group: Option<Group>,
    },
    /// Fit the per-group constant to the reference benchmark table
    Calibrate {
        #[arg(short, long)]
        group: Option<Group>,
    },
    /// Time real BLS12-381 MSMs and validate the model against them
    Measure {
        #[arg(short, long)]
        group: Group,
        /// log2 of the smallest size
        #[arg(long, default_value_t = 4, value_parser = log_size_parser())]
        min_log_size: u32,
        /// log2 of the largest size
        #[arg(long, default_value_t = 12, value_parser = log_size_parser())]
        max_log_size: u32,
        #[arg(short, long, default_value_t = 3)]
        repetitions: usize,
    },
}

/// Sizes are `1 << k`; the model stops at `MAX_MSM_SIZE`.
fn log_size_parser() -> clap::builder::RangedI64ValueParser<u32> {
    clap::value_parser!(u32).range(0..=i64::from(MAX_MSM_SIZE.trailing_zeros()))
}

fn groups(group: Option<Group>) -> Vec<Group> {
    group.map_or_else(|| Group::ALL.to_vec(), |g| vec![g])
}

fn print_report(
    model: &CostModel,
    group: Group,
    table: &[BenchmarkPoint],
) -> msm_cost::Result<()> {
    let report = validate_with(model, group, table)?;
    println!(
        "{group}: {:>10} {:>14} {:>14} {:>10}",
        "size", "measured ms", "estimated ms", "rel err"
    );
    for point in report.points() {
        println!(
            "{group}: {:>10} {:>14.3} {:>14.3} {:>+10.3}",
            point.size,
            point.measured_time_ms,
            point.estimated_time_ms,
            point.signed_relative_error
        );
    }
    let summary = report.summary();
    println!(
        "{group}: mean |rel err| {:.3}, max |rel err| {:.3} at size {}",
        summary.mean_abs_relative_error, summary.max_abs_relative_error, summary.max_error_size
    );
    Ok(())
}

fn run(cli: Cli) -> msm_cost::Result<()> {
    let calibration = Calibration::new(cli.model.g1_ns, cli.model.g2_ns)?;
    let model = CostModel::new(cli.model.scalar_bits, calibration)?;
    info!(?model, "using cost model");

    match cli.command {
        Command::Estimate { group, size } => {
            let ms = model.estimate(group, size)?;
            println!("{group} MSM of size {size}: {ms:.3} ms");
        }
        Command::Validate { group } => {
            for group in groups(group) {
                print_report(&model, group, &reference::table(group))?;
            }
        }
        Command::Calibrate { group } => {
            for group in groups(group) {
                let fitted = calibrate(&model, group, &reference::table(group))?;
                println!(
                    "{group}: {:.1} ns/unit (current {:.1})",
                    fitted,
                    model.calibration().ns_per_unit(group)
                );
            }
        }
        Command::Measure {
            group,
            min_log_size,
            max_log_size,
            repetitions,
        } => {
            let sizes = (min_log_size..=max_log_size).map(|k| 1u64 << k);
            let table = measure_table(group, sizes, repetitions)?;
            print_report(&model, group, &table)?;
        }
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
