use std::path::PathBuf;

use anyhow::{Context, bail};
use chrono::Local;
use clap::Parser;
use tbcalc_rs::{
    config::{Config, load_config},
    exercise::Exercise,
    formatter::{Formatter, MarkdownFormatter, PlainFormatter},
    gym_error::GymError,
    one_rep_max::{OneRepMax, estimate_one_rep_max},
    program::Program,
    units,
    week::WeekSelection,
};
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

/// Tactical Barbell max strength calculator.
#[derive(Parser)]
#[command(name = "tbcalc-rs", version)]
struct Args {
    /// Squat 1RM, or a set such as "240x5"
    #[arg(long, visible_alias = "sq", value_parser = clap::value_parser!(OneRepMax))]
    squat: Option<OneRepMax>,

    #[arg(long, visible_alias = "fsq", value_parser = clap::value_parser!(OneRepMax))]
    front_squat: Option<OneRepMax>,

    #[arg(long, visible_alias = "bp", value_parser = clap::value_parser!(OneRepMax))]
    bench: Option<OneRepMax>,

    #[arg(long, visible_alias = "ohp", value_parser = clap::value_parser!(OneRepMax))]
    overhead_press: Option<OneRepMax>,

    #[arg(long, visible_alias = "dl", value_parser = clap::value_parser!(OneRepMax))]
    deadlift: Option<OneRepMax>,

    /// Total 1RM (body plus load) and body weight. The 1RM may also be given
    /// as added load with "bw", "bwx4" or "+35x4".
    #[arg(long, visible_alias = "wpu", num_args = 1..=2, value_names = ["1RM", "BW"])]
    weighted_pullup: Option<Vec<String>>,

    #[arg(long, default_value = "all", value_parser = clap::value_parser!(WeekSelection))]
    week: WeekSelection,

    /// Overrides the configured bar weight
    #[arg(long)]
    bar_weight: Option<f64>,

    #[arg(long)]
    markdown: bool,

    #[arg(long)]
    title: Option<String>,

    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the estimated 1RM for a set and exit
    #[arg(long, num_args = 2, value_names = ["WEIGHT", "REPS"])]
    estimate: Option<Vec<String>>,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose >= 2)
        .with_writer(std::io::stderr)
        .init();

    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
}

fn estimate(values: &[String]) -> anyhow::Result<String> {
    let [weight, reps] = values else {
        bail!("--estimate takes a weight and a number of reps");
    };
    let weight = units::parse_pounds(weight)?;
    let reps = reps
        .trim()
        .parse::<u32>()
        .map_err(|_| GymError::InvalidReps(reps.clone()))?;

    let estimate = estimate_one_rep_max(weight, reps)?;
    Ok(format!("Estimated 1RM: {} lb", units::display(estimate)))
}

fn weighted_pullup(values: &[String], config: &Config) -> anyhow::Result<(OneRepMax, u32)> {
    let body_weight = match values.get(1) {
        Some(body_weight) => units::parse_pounds(body_weight)?,
        None => config.body_weight()?.ok_or(GymError::MissingBodyWeight)?,
    };
    let one_rep_max = values.first().context("--weighted-pullup needs a 1RM")?;

    let trimmed = one_rep_max.trim();
    let one_rep_max = if trimmed.to_lowercase().starts_with("bw") {
        OneRepMax::weighted_pullup(body_weight, trimmed)?
    } else if let Some(added) = trimmed.strip_prefix('+') {
        OneRepMax::weighted_pullup(body_weight, added)?
    } else {
        trimmed.parse::<OneRepMax>()?
    };

    Ok((one_rep_max, body_weight))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Some(values) = &args.estimate {
        println!("{}", estimate(values)?);
        return Ok(());
    }

    let config = load_config(args.config.as_deref());
    debug!(?config, "Using config");

    let gym = config.gym(args.bar_weight)?;
    let percentages = config.percentages()?;
    let today = Local::now().date_naive();
    let title = config.output.title(args.title.as_deref(), today);

    let mut program = Program::new(title, gym, percentages);
    let lifts = [
        (Exercise::Squat, args.squat),
        (Exercise::FrontSquat, args.front_squat),
        (Exercise::BenchPress, args.bench),
        (Exercise::OverheadPress, args.overhead_press),
        (Exercise::Deadlift, args.deadlift),
    ];
    for (exercise, one_rep_max) in lifts {
        if let Some(one_rep_max) = one_rep_max {
            program.add_lift(exercise, one_rep_max, None);
        }
    }
    if let Some(values) = &args.weighted_pullup {
        let (one_rep_max, body_weight) = weighted_pullup(values, &config)?;
        program.add_lift(Exercise::WeightedPullup, one_rep_max, Some(body_weight));
    }

    if program.is_empty() {
        bail!(
            "No lifts given. Pass at least one of --squat, --front-squat, --bench, \
             --overhead-press, --deadlift or --weighted-pullup."
        );
    }

    let formatter: Box<dyn Formatter> = if args.markdown {
        Box::new(MarkdownFormatter)
    } else {
        Box::new(PlainFormatter::default())
    };

    let text = program.render(
        &args.week.weeks(),
        formatter.as_ref(),
        &config.formatting.weight_format(),
    )?;
    println!("{text}");

    Ok(())
}
