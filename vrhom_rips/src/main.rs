use std::{
    fs::File,
    io::{self, Read, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::EnvFilter;
use vrhom_rips::{
    distance::euclidean_distance_matrix, persistent_homology_from_distances,
    sample::noisy_circle, DistanceMatrix, PersistentHomology,
};

/// mod-2 homology of Vietoris-Rips complexes, at one scale or across every scale.
///
/// Reads a headerless CSV of points (one per row) or, with --distances, a square distance matrix.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// CSV file to read, stdin if omitted
    input: Option<PathBuf>,

    /// Treat the input as a precomputed distance matrix
    #[arg(long)]
    distances: bool,

    /// Homology dimension, defaults to (number of points - 1)
    #[arg(short = 'k', long)]
    homology_dim: Option<usize>,

    /// Single scale to evaluate, otherwise every distinct distance is used
    #[arg(short = 'r', long, allow_negative_numbers = true)]
    scale: Option<f64>,

    /// Largest simplex dimension to build, defaults to (number of points - 1)
    #[arg(long)]
    max_dim: Option<usize>,

    /// Sample this many points from a noisy unit circle instead of reading input
    #[arg(long, conflicts_with_all = ["input", "distances"])]
    circle: Option<usize>,

    /// Noise amplitude for --circle
    #[arg(long, default_value_t = 0.1, requires = "circle")]
    noise: f64,

    /// Seed for --circle
    #[arg(long, default_value_t = 0, requires = "circle")]
    seed: u64,

    /// Print JSON instead of a CSV table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout only carries results
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let distances = load_distances(&args)?;
    info!("Loaded {} points", distances.n_points());

    let result = persistent_homology_from_distances(
        &distances,
        args.homology_dim,
        args.scale,
        args.max_dim,
    )
    .context("Failed to compute homology")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &result)?;
        writeln!(out)?;
    } else {
        write_table(&mut out, &result)?;
    }
    Ok(())
}

fn load_distances(args: &Args) -> Result<DistanceMatrix> {
    if let Some(n_points) = args.circle {
        let mut rng = StdRng::seed_from_u64(args.seed);
        let points = noisy_circle(n_points, args.noise, &mut rng);
        info!(
            "Sampled {n_points} points on a circle with noise {} (seed {})",
            args.noise, args.seed
        );
        return Ok(euclidean_distance_matrix(&points)?);
    }

    let rows = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            read_csv(file).with_context(|| format!("Failed to read {}", path.display()))?
        }
        None => read_csv(io::stdin().lock()).context("Failed to read stdin")?,
    };

    let distances = if args.distances {
        DistanceMatrix::from_rows(rows)?
    } else {
        euclidean_distance_matrix(&rows)?
    };
    Ok(distances)
}

fn read_csv<R: Read>(reader: R) -> Result<Vec<Vec<f64>>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let mut rows = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        let row = record
            .iter()
            .map(|entry| {
                entry
                    .parse::<f64>()
                    .with_context(|| format!("Row {i}: cannot parse {entry:?} as a number"))
            })
            .collect::<Result<Vec<_>>>()?;
        rows.push(row);
    }
    Ok(rows)
}

fn write_table<W: Write>(out: &mut W, result: &PersistentHomology) -> Result<()> {
    writeln!(out, "scale,dimension")?;
    for (scale, dimension) in result.pairs() {
        writeln!(out, "{scale},{dimension}")?;
    }
    Ok(())
}
