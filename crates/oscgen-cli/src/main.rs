// crates/oscgen-cli/src/main.rs

#![forbid(unsafe_code)]
#![deny(
    rust_2018_idioms,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo
)]

use anyhow::{Context, Result};
use clap::Parser;
use oscgen_core::{config::load_profile, Generator, GeneratorConfig};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "oscgen",
    about = "Generate a randomized oscillator input set",
    long_about = "Generate a randomized oscillator input set.\n\nThe table (one header, one line per oscillator, two distance summaries) is written to stderr; log output goes to stdout. Flags override the profile, which overrides the built-in defaults.",
    version = env!("CARGO_PKG_VERSION")
)]
struct Cli {
    /// TOML profile with any subset of the generator parameters
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Seed for a reproducible run (default: seeded from the OS)
    #[arg(long)]
    seed: Option<u64>,

    #[command(flatten)]
    overrides: Overrides,
}

/// Per-field overrides applied on top of the profile.
#[derive(clap::Args, Debug)]
struct Overrides {
    /// Number of oscillators
    #[arg(long)]
    nosc: Option<usize>,
    /// Grid extent along x
    #[arg(long)]
    nx: Option<u32>,
    /// Grid extent along y
    #[arg(long)]
    ny: Option<u32>,
    /// Minimum splat width
    #[arg(long, allow_negative_numbers = true)]
    r0: Option<f64>,
    /// Maximum splat width (also the edge margin)
    #[arg(long, allow_negative_numbers = true)]
    r1: Option<f64>,
    /// Minimum frequency (rad / unit time)
    #[arg(long, allow_negative_numbers = true)]
    w0: Option<f64>,
    /// Maximum frequency (rad / unit time)
    #[arg(long, allow_negative_numbers = true)]
    w1: Option<f64>,
    /// Minimum damping coefficient
    #[arg(long, allow_negative_numbers = true)]
    z0: Option<f64>,
    /// Maximum damping coefficient
    #[arg(long, allow_negative_numbers = true)]
    z1: Option<f64>,
    /// Probability of the damped kind
    #[arg(long, allow_negative_numbers = true)]
    dfrac: Option<f64>,
}

impl Overrides {
    fn apply(&self, cfg: &mut GeneratorConfig) {
        fn set<T: Copy>(dst: &mut T, src: Option<T>) {
            if let Some(v) = src {
                *dst = v;
            }
        }
        set(&mut cfg.nosc, self.nosc);
        set(&mut cfg.nx, self.nx);
        set(&mut cfg.ny, self.ny);
        set(&mut cfg.r0, self.r0);
        set(&mut cfg.r1, self.r1);
        set(&mut cfg.w0, self.w0);
        set(&mut cfg.w1, self.w1);
        set(&mut cfg.z0, self.z0);
        set(&mut cfg.z1, self.z1);
        set(&mut cfg.dfrac, self.dfrac);
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    run(&cli)
}

/// Initialize tracing with an env-driven filter (default WARN).
///
/// Log lines go to stdout; stderr carries only the table.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn resolve_config(cli: &Cli) -> Result<GeneratorConfig> {
    let mut cfg = match &cli.profile {
        Some(p) => load_profile(p)?,
        None => GeneratorConfig::default(),
    };
    cli.overrides.apply(&mut cfg);
    Ok(cfg)
}

fn run(cli: &Cli) -> Result<()> {
    let cfg = resolve_config(cli)?;
    for note in cfg.anomalies() {
        warn!("{note}; sampling as given");
    }
    let b = cfg.sampling_bounds();
    info!(nosc = cfg.nosc, x0 = b.lo, x1 = b.hi, dfrac = cfg.dfrac, seed = ?cli.seed, "generating oscillators");

    let report = Generator::from_seed(cfg, cli.seed).generate();
    info!(max = report.stats.max, min = report.stats.min, "pairwise center distances");

    let mut w = std::io::stderr().lock();
    report
        .write_table(&mut w)
        .context("writing oscillator table to stderr")
}
