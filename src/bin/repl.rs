use clap::Parser;
use dice_expr::{common::Int, Limits, PercentileCheck, RollContext};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::Level;

/// Roll dice expressions such as `2d6 + 3` or `1d20 >= 15`.
#[derive(Parser, Debug)]
#[command(name = "repl", version)]
struct Args {
    /// TOML file with `max_length`, `max_depth` and `max_rolls`
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Seed the generator for reproducible rolls
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    max_rolls: Option<usize>,
    #[arg(long)]
    max_depth: Option<usize>,
    /// Log more; repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Make a percentile skill check against TARGET instead of rolling an expression
    #[arg(long, value_name = "TARGET", conflicts_with = "expr")]
    cc: Option<Int>,
    /// Expression to roll once; reads stdin line by line when absent
    expr: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let limits = load_limits(&args)?;
    tracing::info!(?limits, seed = ?args.seed, "starting");

    match args.seed {
        Some(seed) => run(&args, &limits, &mut StdRng::seed_from_u64(seed)),
        None => run(&args, &limits, &mut rand::thread_rng()),
    }
}

fn load_limits(args: &Args) -> Result<Limits, Box<dyn std::error::Error>> {
    let mut limits = match &args.config {
        Some(path) => toml::from_str(&std::fs::read_to_string(path)?)?,
        None => Limits::default(),
    };
    if let Some(max_rolls) = args.max_rolls {
        limits.max_rolls = max_rolls;
    }
    if let Some(max_depth) = args.max_depth {
        limits.max_depth = max_depth;
    }
    Ok(limits)
}

fn run<R: Rng>(
    args: &Args,
    limits: &Limits,
    rng: &mut R,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(target) = args.cc {
        check(target, rng);
        return Ok(());
    }
    if !args.expr.is_empty() {
        roll_line(&args.expr.join(" "), limits, rng);
        return Ok(());
    }

    let stdin = io::stdin();
    print!("> ");
    io::stdout().flush()?;
    for line in stdin.lock().lines() {
        roll_line(&line?, limits, rng);
        print!("> ");
        io::stdout().flush()?;
    }
    println!();
    Ok(())
}

fn roll_line<R: Rng>(line: &str, limits: &Limits, rng: &mut R) {
    let line = line.trim();
    if line.is_empty() {
        return;
    }
    if let Some(target) = line.strip_prefix("cc").or_else(|| line.strip_prefix("rc")) {
        match target.trim().parse::<Int>() {
            Ok(target) => check(target, rng),
            Err(why) => {
                tracing::debug!(input = line, error = %why, "ignoring check without a target");
            }
        }
        return;
    }

    let result = dice_expr::parse_with(line, limits).and_then(|expr| {
        let outcome = RollContext::new_bounded(limits.max_rolls, &mut *rng).eval(&expr)?;
        Ok((expr, outcome))
    });
    match result {
        Ok((expr, outcome)) => println!("{} = {}", expr, outcome),
        Err(why) if why.kind().is_incomplete() => {
            tracing::debug!(input = line, error = %why, "ignoring incomplete expression");
        }
        Err(why) => {
            tracing::warn!(input = line, error = %why, kind = ?why.kind(), "roll failed");
            eprintln!("Error: {}", why);
        }
    }
}

fn check<R: Rng>(target: Int, rng: &mut R) {
    println!("cc {} = {}", target, PercentileCheck::roll(target, rng));
}
