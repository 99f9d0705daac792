use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use codec::{
    decode_polyline, decode_string_to_latlngs, encode_latlngs_to_string, encode_polyline,
    encode_polyline_compressed, encode_polyline_lossless, CodecLimits, LatLng, Point, MAX_LEVEL,
};
use glob::Pattern;
use s2poly_tools::{
    inspect_polyline, latlngs_from_json, latlngs_to_json, logging, points_to_latlngs,
    InspectReport,
};
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "s2poly-tools",
    version,
    about = "Encode, decode and inspect compact S2 polylines"
)]
struct Cli {
    /// Log directives used when RUST_LOG is unset.
    #[arg(long, global = true, default_value = "warn")]
    log: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode a JSON array of [lat, lng] degree pairs.
    Encode {
        /// Path to the JSON input.
        input: PathBuf,
        /// Write raw bytes to this file instead of printing URL-safe text.
        #[arg(long)]
        output: Option<PathBuf>,
        /// Force an encoding instead of picking the smallest.
        #[arg(long, value_enum)]
        force: Option<ForceMode>,
        /// Snap level for `--force compressed`.
        #[arg(long, default_value_t = MAX_LEVEL)]
        level: u8,
    },
    /// Decode an encoded polyline into JSON [lat, lng] pairs.
    Decode {
        /// Path to the encoded polyline.
        input: PathBuf,
        /// Input format.
        #[arg(long, value_enum, default_value_t = InputFormat::Text)]
        format: InputFormat,
    },
    /// Inspect envelope structure and sizes.
    Inspect {
        /// Path to a binary polyline or a directory of them.
        path: PathBuf,
        /// Optional glob filter when inspecting a directory.
        #[arg(long)]
        glob: Option<String>,
        /// Sort inspected files.
        #[arg(long, value_enum)]
        sort: Option<InspectSort>,
        /// Limit the number of inspected files (after sorting).
        #[arg(long)]
        limit: Option<usize>,
        /// Print reports as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ForceMode {
    Lossless,
    Compressed,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum InputFormat {
    Text,
    Bytes,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum InspectSort {
    Size,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(&cli.log);
    match cli.command {
        Command::Encode {
            input,
            output,
            force,
            level,
        } => {
            let json = fs::read_to_string(&input)
                .with_context(|| format!("read input {}", input.display()))?;
            let latlngs = latlngs_from_json(&json)?;
            info!(vertices = latlngs.len(), "encoding polyline");
            match output {
                Some(path) => {
                    let points: Vec<Point> = latlngs.iter().map(|ll| ll.to_point()).collect();
                    let bytes = match force {
                        Some(ForceMode::Lossless) => encode_polyline_lossless(&points),
                        Some(ForceMode::Compressed) => encode_polyline_compressed(&points, level),
                        None => encode_polyline(&points),
                    }
                    .context("encode polyline")?;
                    fs::write(&path, &bytes)
                        .with_context(|| format!("write output {}", path.display()))?;
                    debug!(bytes = bytes.len(), path = %path.display(), "wrote polyline");
                }
                None => {
                    anyhow::ensure!(force.is_none(), "--force requires --output");
                    let text = encode_latlngs_to_string(&latlngs).context("encode polyline")?;
                    println!("{text}");
                }
            }
        }
        Command::Decode { input, format } => {
            let latlngs = read_latlngs(&input, format)?;
            println!("{}", latlngs_to_json(&latlngs)?);
        }
        Command::Inspect {
            path,
            glob,
            sort,
            limit,
            json,
        } => {
            let limits = CodecLimits::default();
            if path.is_dir() {
                let entries = collect_polyline_entries(&path, glob.as_deref())?;
                let mut entries = maybe_sort_entries(entries, sort);
                let limit = limit.or(sort.map(|InspectSort::Size| 10));
                if let Some(limit) = limit {
                    entries.truncate(limit);
                }
                for entry in entries {
                    let bytes = fs::read(&entry.path)
                        .with_context(|| format!("read polyline {}", entry.path.display()))?;
                    let report = inspect_polyline(&bytes, &limits)
                        .with_context(|| format!("inspect {}", entry.path.display()))?;
                    if json {
                        print_inspect_json(&report)?;
                    } else {
                        println!("== {} ({} bytes) ==", entry.path.display(), entry.size);
                        print_inspect_report(&report);
                    }
                }
            } else {
                let bytes = fs::read(&path)
                    .with_context(|| format!("read polyline {}", path.display()))?;
                let report = inspect_polyline(&bytes, &limits)
                    .with_context(|| format!("inspect {}", path.display()))?;
                if json {
                    print_inspect_json(&report)?;
                } else {
                    print_inspect_report(&report);
                }
            }
        }
    }
    Ok(())
}

fn read_latlngs(path: &Path, format: InputFormat) -> Result<Vec<LatLng>> {
    match format {
        InputFormat::Text => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("read text {}", path.display()))?;
            decode_string_to_latlngs(&text).context("decode polyline text")
        }
        InputFormat::Bytes => {
            let bytes =
                fs::read(path).with_context(|| format!("read bytes {}", path.display()))?;
            let points = decode_polyline(&bytes).context("decode polyline")?;
            Ok(points_to_latlngs(&points))
        }
    }
}

struct PolylineEntry {
    path: PathBuf,
    size: u64,
}

fn collect_polyline_entries(dir: &Path, glob: Option<&str>) -> Result<Vec<PolylineEntry>> {
    let mut entries = Vec::new();
    let pattern = match glob {
        Some(value) => Some(Pattern::new(value).context("invalid glob pattern")?),
        None => None,
    };

    for entry in fs::read_dir(dir).with_context(|| format!("read dir {}", dir.display()))? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(pattern) = &pattern {
            let matches_path = pattern.matches_path(&path);
            let matches_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| pattern.matches(name));
            if !matches_path && !matches_name {
                continue;
            }
        }
        let size = entry.metadata()?.len();
        entries.push(PolylineEntry { path, size });
    }
    debug!(count = entries.len(), dir = %dir.display(), "collected polylines");
    Ok(entries)
}

fn maybe_sort_entries(
    mut entries: Vec<PolylineEntry>,
    sort: Option<InspectSort>,
) -> Vec<PolylineEntry> {
    match sort {
        Some(InspectSort::Size) => {
            entries.sort_by(|a, b| b.size.cmp(&a.size).then_with(|| a.path.cmp(&b.path)));
        }
        None => {}
    }
    entries
}

fn print_inspect_json(report: &InspectReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("serialize json")?;
    println!("{json}");
    Ok(())
}

fn print_inspect_report(report: &InspectReport) {
    let encoding = match report.level {
        Some(level) => format!("compressed, level {level}"),
        None => "lossless".to_string(),
    };
    println!("version: {} ({encoding})", report.version);
    println!(
        "vertices: {} off_center: {}",
        report.vertices, report.off_center
    );
    println!(
        "size: {} bytes (lossless {} bytes, trailing {} bytes)",
        report.byte_len, report.lossless_len, report.trailing_bytes
    );
    match report.best_snap_level {
        Some(level) => println!("best snap level: {level}"),
        None => println!("best snap level: none"),
    }
    if !report.face_runs.is_empty() {
        println!("face runs:");
        for run in &report.face_runs {
            println!("  face {}: {} vertices", run.face, run.count);
        }
    }
}
