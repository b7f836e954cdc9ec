//! Earthquake clustering tool
//!
//! Reads epicenters from a CSV file, groups them with density-based clustering
//! and writes the resulting clusters as CSV rows for plotting.

use clap::Parser;
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

mod cluster;
mod error;


use cluster::{Clustering, Dataset, DbscanParams, Point, PointList, cluster_points};
use error::{ClusterError, Result};

const NOISE_LABEL: i32 = -1;

#[derive(Parser)]
#[command(name = "quake_clusters")]
#[command(about = "Density-based clustering of earthquake epicenters", long_about = None)]
struct Args {
    /// Input CSV file with latitude and longitude columns
    #[arg(short, long, default_value = "eq_day.csv")]
    input: PathBuf,

    /// Output CSV file with clustered points (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Neighbourhood radius, in degrees
    #[arg(short, long, default_value_t = 2.0)]
    eps: f64,

    /// Minimum neighbourhood size (the point itself included)
    #[arg(short = 'm', long, default_value_t = 4)]
    min_points: usize,

    /// Also write noise points, with cluster -1
    #[arg(short, long)]
    keep_noise: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    let level = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let params = DbscanParams::new(args.eps, args.min_points)?;

    let points = read_points(&args.input)?;
    log::debug!("Read {} points from {:?}", points.len(), args.input);

    let dataset = Dataset::new(points)?;
    log::debug!(
        "Running DBScan with eps={:.4}, minPoints={}",
        params.eps,
        params.min_points
    );

    let clustering = cluster_points(&dataset, &params);
    log_summary(&dataset, &clustering);

    match &args.output {
        None => write_clusters(io::stdout().lock(), &dataset, &clustering, args.keep_noise)?,
        Some(output_file) => {
            let out_file = File::create(output_file)?;
            write_clusters(out_file, &dataset, &clustering, args.keep_noise)?;
            log::debug!("Clusters written to {:?}", output_file);
        }
    }

    Ok(())
}

/// Reads points from a CSV file
fn read_points(filename: &Path) -> Result<PointList> {
    let file = File::open(filename)?;
    parse_points(file)
}

/// Parses points from CSV data
///
/// If the first field of the first row is non-empty and not a number, that row is a header
/// and columns named `latitude` / `longitude` are used when present.
/// Otherwise latitude is column 0 and longitude column 1.
///
/// Every data row must carry numeric coordinates; the first bad row aborts
/// with its 1-based line number.
fn parse_points<R: Read>(input: R) -> Result<PointList> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut records = reader.records().enumerate().peekable();
    let mut lat_col = 0;
    let mut lon_col = 1;

    // Determine if first row is header
    if let Some((_, Ok(first))) = records.peek() {
        let has_header = first.get(0).is_some_and(|f| {
            let f = f.trim();
            !f.is_empty() && f.parse::<f64>().is_err()
        });
        if has_header {
            if let Some((lat, lon)) = header_columns(first) {
                lat_col = lat;
                lon_col = lon;
            }
            records.next();
        }
    }

    let mut points = PointList::new();
    for (row, result) in records {
        let record = result?;
        let line = row + 1;
        let lat = parse_field(&record, line, lat_col)?;
        let lon = parse_field(&record, line, lon_col)?;
        points.push(Point::new(lon, lat));
    }

    Ok(points)
}

/// Finds `(latitude, longitude)` column indices in a header row
fn header_columns(header: &StringRecord) -> Option<(usize, usize)> {
    let find = |name: &str| {
        header
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
    };
    Some((find("latitude")?, find("longitude")?))
}

fn parse_field(record: &StringRecord, line: usize, column: usize) -> Result<f64> {
    let value = record.get(column).unwrap_or("");
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| ClusterError::InvalidCoordinate {
            line,
            column,
            value: value.to_string(),
        })
}

/// Logs size, centroid and extent of each cluster
fn log_summary(dataset: &Dataset, clustering: &Clustering) {
    log::info!(
        "Found {} clusters and {} noise points",
        clustering.clusters.len(),
        clustering.noise_count()
    );

    for cluster in &clustering.clusters {
        if let Some((center, min, max)) = cluster.centroid_and_bounds(dataset) {
            log::debug!(
                "Cluster {}: {} points, center ({:.4}, {:.4}), bounds ({:.4}, {:.4})..({:.4}, {:.4})",
                cluster.c,
                cluster.len(),
                center.x(),
                center.y(),
                min.x(),
                min.y(),
                max.x(),
                max.y()
            );
        }
    }
}

/// Writes clusters as `cluster,latitude,longitude` rows
///
/// Clusters come out in ID order, members in input order. With `keep_noise`,
/// noise points follow with cluster `-1`.
fn write_clusters<W: Write>(
    output: W,
    dataset: &Dataset,
    clustering: &Clustering,
    keep_noise: bool,
) -> Result<()> {
    let mut writer = WriterBuilder::new().from_writer(output);
    writer.write_record(["cluster", "latitude", "longitude"])?;

    for cluster in &clustering.clusters {
        let id = cluster.c.to_string();
        for point in cluster.coordinates(dataset) {
            writer.write_record([id.clone(), point.y().to_string(), point.x().to_string()])?;
        }
    }

    if keep_noise {
        let noise = clustering.labels.noise_mask();
        for i in noise.iter_ones() {
            let point = dataset.point(i);
            writer.write_record([
                NOISE_LABEL.to_string(),
                point.y().to_string(),
                point.x().to_string(),
            ])?;
        }
    }

    writer.flush()?;
    Ok(())
}
