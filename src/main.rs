use anyhow::{Context, bail};
use clap::Parser;
use log::warn;
use player_salary_report::Pipeline;
use player_salary_report::constants::DEFAULT_REPORT_FILE;
use player_salary_report::extract::DatasetLoader;
use std::path::PathBuf;

/// Merges player statistics with player salaries and exports salary per minute played to Excel.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Path to the dataset configuration file (yaml, json, toml or ron)
    config: PathBuf,
    /// Where to write the report. The extension is always changed to .xlsx
    #[arg(short, long, default_value = DEFAULT_REPORT_FILE)]
    output: PathBuf,
    /// Directory relative dataset paths are resolved against
    #[arg(long)]
    dataset_root: Option<PathBuf>,
    /// Save a loaded dataset as CSV, given as NAME=PATH. Can be repeated
    #[arg(long = "save-csv", value_parser = parse_key_val)]
    save_csv: Vec<(String, PathBuf)>,
    /// Abort if any configured dataset fails to load
    #[arg(long)]
    strict: bool,
}

fn parse_key_val(s: &str) -> Result<(String, PathBuf), String> {
    let (name, path) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid NAME=PATH: no `=` found in `{s}`"))?;
    if name.is_empty() || path.is_empty() {
        return Err(format!("invalid NAME=PATH: `{s}`"));
    }
    Ok((name.to_string(), PathBuf::from(path)))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut loader = DatasetLoader::try_from(cli.config.clone())
        .with_context(|| format!("Could not load config {}", cli.config.display()))?;
    if let Some(dataset_root) = cli.dataset_root {
        loader = loader.with_dataset_root(dataset_root);
    }

    let mut pipeline = Pipeline::new(loader)
        .with_output(cli.output)
        .with_strict(cli.strict);

    let summary = pipeline.extract()?;
    for name in summary.failed().keys() {
        warn!("Continuing without dataset '{name}'");
    }

    let mut failed_snapshots = 0;
    for (name, path) in &cli.save_csv {
        if pipeline.loader().save_dataset_csv(name, path).is_err() {
            failed_snapshots += 1;
        }
    }

    let report = pipeline.transform()?;
    pipeline.load(&report)?;

    if failed_snapshots > 0 {
        bail!("{failed_snapshots} CSV snapshot(s) could not be saved");
    }
    Ok(())
}
