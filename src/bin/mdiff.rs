//! mdiff - Manifest diff CLI tool
//!
//! Compares a baseline manifest against one or more others and prints the
//! differing leaf paths per pair.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::process::ExitCode;

use clap::Parser;
use manifest_diff::{compare, CompareOptions, Error};
use regex::Regex;

#[derive(Parser)]
#[command(name = "mdiff")]
#[command(about = "Normalization-aware diffing of Kubernetes-style resource manifests")]
#[command(version)]
struct Cli {
    /// Baseline manifest; every other source is compared against it
    baseline: String,

    /// Manifests to compare against the baseline
    #[arg(required = true)]
    others: Vec<String>,

    /// Drop differing paths matching this regular expression
    #[arg(long, value_name = "REGEX")]
    ignore: Option<String>,

    /// Re-root path frames when comparing pods or pod templates against
    /// wrapper kinds
    #[arg(long)]
    align_pods: bool,

    /// YAML file mapping pair labels to acknowledged differing paths
    #[arg(long, value_name = "FILE")]
    expected: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<bool, Box<dyn std::error::Error>> {
    let ignore = match &cli.ignore {
        Some(pattern) => Some(Regex::new(pattern).map_err(Error::from)?),
        None => None,
    };
    let expected = match &cli.expected {
        Some(path) => load_expected(path)?,
        None => BTreeMap::new(),
    };

    let options = CompareOptions {
        ignore,
        align_pod_frames: cli.align_pods,
        expected,
    };

    let mut sources = vec![cli.baseline];
    sources.extend(cli.others);

    let report = compare(&sources, &options)?;

    if report.is_empty() {
        println!("No differences beyond expectations");
        return Ok(true);
    }

    let mut clean = true;
    for (label, paths) in &report {
        println!("{}:", label);
        if paths.is_empty() {
            println!("  (none)");
        } else {
            clean = false;
            for path in paths {
                println!("  {}", path);
            }
        }
    }

    Ok(clean)
}

fn load_expected(path: &str) -> Result<BTreeMap<String, BTreeSet<String>>, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read expected file {}: {}", path, e))?;
    let map = serde_yaml::from_str(&content)
        .map_err(|e| format!("Failed to parse expected file {}: {}", path, e))?;
    Ok(map)
}
