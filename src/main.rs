//! Stay-zone and day-trip clustering tool
//!
//! Reads geographic points from CSV files and prints the ideal stay zone, the
//! day-trip clusters, or the main-cluster bounds for them.

use clap::{Parser, Subcommand};
use csv::{ReaderBuilder, WriterBuilder};
use log::info;
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use stayzone::{
    ClusterConfig, Error, GeoCluster, GeoPoint, Result, ZoneResult, calculate_zone,
    circle_polygon, cluster_points_with, main_cluster_bounds,
};


#[derive(Parser)]
#[command(name = "stayzone")]
#[command(about = "Stay-zone and day-trip clustering tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Input CSV file with latitude,longitude columns
    #[arg(short, long, global = true, default_value = "points.csv")]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the ideal zone to stay in
    Zone {
        /// Also emit a ring of this many vertices around the zone
        #[arg(long)]
        polygon: Option<usize>,
    },

    /// Group points into labeled day-trip clusters
    Clusters {
        /// Maximum number of clusters
        #[arg(short = 'k', long, default_value_t = 4)]
        max_clusters: usize,

        /// Print clusters as JSON instead of annotated CSV rows
        #[arg(long)]
        json: bool,
    },

    /// Main cluster and excluded point count for map framing
    Bounds,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let input = read_points_and_csv(&cli.input)?;
    if input.points.is_empty() {
        return Err(Error::NoPoints);
    }
    info!("Read {} points from {:?}", input.points.len(), cli.input);

    let mut out = open_output(cli.output.as_deref())?;

    match cli.command {
        Commands::Zone { polygon } => {
            let zone = calculate_zone(&input.points).map(|zone| ZoneOutput::new(zone, polygon));
            write_json(&mut out, &zone)?;
        }
        Commands::Clusters { max_clusters, json } => {
            let config = ClusterConfig {
                max_clusters,
                ..ClusterConfig::default()
            };
            let clusters = cluster_points_with(&input.points, &config);
            info!("Found {} clusters", clusters.len());

            if json {
                write_json(&mut out, &clusters)?;
            } else {
                let labels = build_labels(&input.points, &clusters);
                write_annotated_csv(&mut out, &input, &labels, &clusters)?;
            }
        }
        Commands::Bounds => {
            let bounds = main_cluster_bounds(&input.points);
            info!("Excluded {} outliers", bounds.outlier_count);
            write_json(&mut out, &bounds)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Zone with an optional rendered ring
#[derive(Serialize)]
struct ZoneOutput {
    #[serde(flatten)]
    zone: ZoneResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    polygon: Option<Vec<GeoPoint>>,
}

impl ZoneOutput {
    fn new(zone: ZoneResult, vertices: Option<usize>) -> Self {
        let polygon = vertices.map(|n| circle_polygon(&zone.center(), zone.radius_meters, n));
        Self { zone, polygon }
    }
}

/// Parsed input: data rows that carry a valid point, and the points themselves
///
/// `records[i]` is the raw row `points[i]` was read from.
struct CsvInput {
    header: Option<Vec<String>>,
    records: Vec<Vec<String>>,
    points: Vec<GeoPoint>,
}

/// Reads points and CSV records from a file in a single pass
///
/// Expected format: `latitude,longitude[,...]` (header row is optional).
/// Rows without two numeric leading fields are skipped.
fn read_points_and_csv(filename: &Path) -> Result<CsvInput> {
    let file = File::open(filename)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut input = CsvInput {
        header: None,
        records: Vec::new(),
        points: Vec::new(),
    };

    for (i, result) in reader.records().enumerate() {
        let record = result?;
        let record_vec: Vec<String> = record.iter().map(|s| s.to_string()).collect();

        // Header if the first field of the first row is not a number
        if i == 0 && record_vec.first().is_some_and(|f| f.trim().parse::<f64>().is_err()) {
            input.header = Some(record_vec);
            continue;
        }

        if record_vec.len() < 2 {
            continue;
        }

        let lat = record_vec[0].trim().parse::<f64>();
        let lon = record_vec[1].trim().parse::<f64>();
        if let (Ok(lat), Ok(lon)) = (lat, lon) {
            input.points.push(GeoPoint::new(lat, lon));
            input.records.push(record_vec);
        }
    }

    Ok(input)
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout().lock()),
    })
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Maps every input point to the index of the cluster holding it
///
/// Clusters hold copies of the points; each copy claims the first unclaimed
/// input point with equal coordinates.
fn build_labels(points: &[GeoPoint], clusters: &[GeoCluster]) -> Vec<Option<usize>> {
    let mut labels = vec![None; points.len()];

    for (c, cluster) in clusters.iter().enumerate() {
        for member in &cluster.points {
            let slot = points
                .iter()
                .zip(labels.iter())
                .position(|(p, label)| label.is_none() && p == member);
            if let Some(idx) = slot {
                labels[idx] = Some(c);
            }
        }
    }

    labels
}

/// Writes input rows with `cluster_id,label,color` appended
///
/// Uses pre-read CSV records to preserve any additional columns and the
/// input order.
fn write_annotated_csv<W: Write>(
    out: W,
    input: &CsvInput,
    labels: &[Option<usize>],
    clusters: &[GeoCluster],
) -> Result<()> {
    let mut writer = WriterBuilder::new().flexible(true).from_writer(out);

    if let Some(header) = &input.header {
        let mut row = header.clone();
        row.extend(["cluster_id", "label", "color"].map(String::from));
        writer.write_record(&row)?;
    }

    for (record, label) in input.records.iter().zip(labels) {
        let mut row = record.clone();
        match label.map(|c| &clusters[c]) {
            Some(cluster) => {
                row.push(cluster.id.to_string());
                row.push(cluster.label.clone());
                row.push(cluster.color.clone());
            }
            None => row.extend([String::new(), String::new(), String::new()]),
        }
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(())
}
