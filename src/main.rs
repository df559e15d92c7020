//! seatforge: passenger seat clustering with K-Means
//!
//! This is the main entrypoint that orchestrates data loading, clustering,
//! reporting and export.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use seatforge::{data, find_best_k, report, Args};
use std::time::Instant;

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    // Random fills are reproducible from the logged seed
    let rng_seed = args.rng_seed.unwrap_or_else(rand::random);
    log::info!("{:<32}{:<32}", "rng seed", rng_seed);

    let start_time = Instant::now();
    let grid = args.grid();
    let mut pool = data::load_seat_grid(&args.input, grid)?;
    log::info!(
        "loaded {} seats ({} attributes) from {}",
        pool.len(),
        pool.attributes().len(),
        args.input
    );

    let k = if args.sweep {
        run_sweep(&args, &mut pool, rng_seed)?
    } else {
        args.clusters
    };

    let clustering = args.kmeans(k, rng_seed)?.fit(&mut pool)?;
    report::print_clustering(&pool, &clustering, grid);

    data::export_clusters(&args.output, &pool)?;
    println!("\nClustered data saved to: {}", args.output);
    log::info!("finished in {:.2}s", start_time.elapsed().as_secs_f64());

    Ok(())
}

/// Run the best-k sweep and return the winning k
fn run_sweep(args: &Args, pool: &mut seatforge::PointPool, rng_seed: u64) -> Result<usize> {
    log::info!("sweeping k over {}..={}", args.k_min, args.k_max);
    let base = args.kmeans(args.k_min, rng_seed)?;
    let sweep = find_best_k(pool, args.k_min..=args.k_max, &base)?;
    report::print_sweep(&sweep);
    Ok(sweep.best_k)
}
