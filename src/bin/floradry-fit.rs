//! Fit the feature scaler on the training CSV and write the artifact used by
//! the dashboard, plus a standardized copy of the dataset for inspection.

use std::path::PathBuf;

use floradry::config;
use floradry::fitting::{FitOptions, run_fit};
use floradry::logging::{self, Component};

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = parse_args(std::env::args().skip(1).collect())?;
    if let Err(err) = logging::init(Component::Fit) {
        eprintln!("Logging disabled: {err}");
    }
    let config = config::load(cli.config.as_deref()).map_err(|err| err.to_string())?;
    let options = cli.resolve(FitOptions::from(&config.paths));

    let report = run_fit(&options).map_err(|err| err.to_string())?;
    println!(
        "dataset: {} ({} rows, {} columns)",
        options.dataset.display(),
        report.rows,
        report.source_columns
    );
    println!("features: {}", report.scaler.feature_names.join(", "));
    println!(
        "{:<26} {:>14} {:>14}",
        "feature", "mean", "std"
    );
    for ((name, mean), scale) in report
        .scaler
        .feature_names
        .iter()
        .zip(&report.scaler.mean)
        .zip(&report.scaler.scale)
    {
        println!("{name:<26} {mean:>14.4} {scale:>14.4}");
    }
    println!("scaler: {}", report.artifact_path.display());
    println!("scaled data: {}", report.scaled_path.display());
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq)]
struct CliOptions {
    config: Option<PathBuf>,
    dataset: Option<PathBuf>,
    artifact_out: Option<PathBuf>,
    scaled_out: Option<PathBuf>,
}

impl CliOptions {
    fn resolve(self, defaults: FitOptions) -> FitOptions {
        FitOptions {
            dataset: self.dataset.unwrap_or(defaults.dataset),
            artifact_out: self.artifact_out.unwrap_or(defaults.artifact_out),
            scaled_out: self.scaled_out.unwrap_or(defaults.scaled_out),
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();
    let mut idx = 0usize;
    while idx < args.len() {
        let flag = args[idx].as_str();
        let slot = match flag {
            "-h" | "--help" => return Err(help_text()),
            "--config" => &mut options.config,
            "--dataset" => &mut options.dataset,
            "--out" => &mut options.artifact_out,
            "--scaled-out" => &mut options.scaled_out,
            unknown => return Err(format!("Unknown argument: {unknown}\n\n{}", help_text())),
        };
        idx += 1;
        let value = args
            .get(idx)
            .ok_or_else(|| format!("{flag} requires a value"))?;
        *slot = Some(PathBuf::from(value));
        idx += 1;
    }
    Ok(options)
}

fn help_text() -> String {
    [
        "floradry-fit",
        "",
        "Fits a standard scaler on the 12 flower feature columns and saves it.",
        "",
        "Usage:",
        "  floradry-fit [--dataset data.csv] [--out scaler.json] [options]",
        "",
        "Options:",
        "  --config <file>      Config file (default: <app dir>/config.toml).",
        "  --dataset <file>     Input CSV (default: paths.dataset, augmented_500.csv).",
        "  --out <file>         Scaler artifact (default: paths.artifact, scaler.json).",
        "  --scaled-out <file>  Standardized CSV (default: paths.scaled_output, scaled_data.csv).",
    ]
    .join("\n")
}
