//! Shortcut a noisy two-joint path, report the savings on stderr and print
//! the shortened path as JSON.
//!
//! Run: cargo run --bin shortcut-demo -- --points 40 --noise 0.2

use std::f64::consts::PI;
use std::path::PathBuf;

use clap::Parser;
use rand::{Rng, RngExt};
use waycut_core::{Interpolator, joint_distance};
use waycut_paths::{InterpGenerator, ShortcutConfig, Shortcutter, Tolerance, segment_costs};

#[derive(Parser)]
#[command(name = "shortcut-demo", about = "Shortcut a noisy joint-space path")]
struct Cli {
    /// Number of coarse waypoints before densification
    #[arg(short, long, default_value = "20")]
    points: usize,

    /// Maximum segments the search window advances per step
    #[arg(short, long, default_value = "1")]
    granularity: usize,

    /// Reserved search parameter (currently has no effect)
    #[arg(short, long, default_value = "0")]
    window: usize,

    /// Amplitude of the random jitter added to each coarse waypoint (rad)
    #[arg(long, default_value = "0.3")]
    noise: f64,

    /// Joint interpolation increment (rad)
    #[arg(long, default_value = "0.05")]
    increment: f64,

    /// Cost slack allowed when accepting a shortcut
    #[arg(long, default_value = "1e-9")]
    tolerance: f64,

    /// JSON file with a shortcut config; overrides --granularity and --window
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn load_config(cli: &Cli) -> Result<ShortcutConfig, Box<dyn std::error::Error>> {
    match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            let config: ShortcutConfig = serde_json::from_str(&text)?;
            log::info!("Loaded config from {}", path.display());
            Ok(config)
        }
        None => Ok(ShortcutConfig::new(cli.granularity).with_window(cli.window)),
    }
}

/// A diagonal sweep through joint space with random jitter, densified so
/// that every joint moves at most one increment per waypoint.
fn noisy_path(
    rng: &mut impl Rng,
    interp: &Interpolator,
    points: usize,
    noise: f64,
) -> Result<Vec<Vec<f64>>, Box<dyn std::error::Error>> {
    let coarse: Vec<Vec<f64>> = (0..points.max(2))
        .map(|i| {
            let t = i as f64 / (points.max(2) - 1) as f64;
            let mut jitter = || {
                if noise > 0.0 {
                    rng.random_range(-noise..noise)
                } else {
                    0.0
                }
            };
            vec![-2.0 + 4.0 * t + jitter(), 1.5 * (t * PI).sin() + jitter()]
        })
        .collect();

    let mut dense = vec![coarse[0].clone()];
    for pair in coarse.windows(2) {
        let leg = interp.interpolate(&pair[0], &pair[1])?;
        dense.extend(leg.into_iter().skip(1));
    }
    Ok(dense)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    config.validate()?;

    let interp = Interpolator::new(vec![-PI, -PI], vec![PI, PI], vec![cli.increment; 2])
        .with_continuous(vec![true, true]);
    let path = noisy_path(&mut rand::rng(), &interp, cli.points, cli.noise)?;
    let costs = segment_costs(&path, |a: &Vec<f64>, b: &Vec<f64>| joint_distance(a, b));
    let before: f64 = costs.iter().sum();

    let generators = [InterpGenerator::unchecked(interp)];
    let mut shortcutter = Shortcutter::new(config);
    let out = shortcutter
        .shortcut(&path, &costs, &generators, &Tolerance(cli.tolerance))?
        .to_vec();
    let after: f64 = segment_costs(&out, |a: &Vec<f64>, b: &Vec<f64>| joint_distance(a, b))
        .iter()
        .sum();

    let stats = shortcutter.stats();
    log::info!("Waypoints: {} -> {}", path.len(), out.len());
    log::info!("Joint-space length: {:.4} -> {:.4} rad", before, after);
    log::info!(
        "Passes: {}, commits: {}, generator calls: {}",
        stats.passes,
        stats.commits,
        stats.generator_calls
    );
    log::info!("Config: {}", serde_json::to_string(&config)?);
    println!("{}", serde_json::to_string(&out)?);
    Ok(())
}
