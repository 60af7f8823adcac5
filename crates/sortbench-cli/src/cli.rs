//! Argument definitions and command dispatch.

use std::path::Path;

use clap::{Args, Parser, Subcommand};
use owo_colors::OwoColorize;
use sortbench_benchmark::{Benchmark, BenchmarkReport, CsvExporter, MarkdownReport};
use sortbench_config::SweepConfig;
use sortbench_core::{DistributionKind, SortAlgorithm};

use crate::error::CliError;

/// SortBench - time QuickSort, HeapSort and BubbleSort over generated inputs
///
/// # Examples
///
/// ```bash
/// # Default sweep for one algorithm
/// sortbench run --algorithm heap
///
/// # Small seeded sweep with a CSV export
/// sortbench run --algorithm quick --sizes 100,500 --distributions random --csv quick.csv
///
/// # Built-in profile
/// sortbench profile bubble
///
/// # All three algorithms on the same inputs
/// sortbench compare --sizes 1000,5000
/// ```
#[derive(Debug, Parser)]
#[command(name = "sortbench")]
#[command(author, version, about = "Sorting algorithm benchmark runner", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sweep one algorithm over sizes and distributions
    Run {
        /// Algorithm to benchmark (quick, heap or bubble)
        #[arg(short, long, value_name = "ALGORITHM")]
        algorithm: SortAlgorithm,

        #[command(flatten)]
        sweep: SweepArgs,
    },

    /// Run a built-in profile for one algorithm
    Profile {
        /// Algorithm whose profile to run (quick, heap or bubble)
        #[arg(value_name = "ALGORITHM")]
        algorithm: SortAlgorithm,

        /// Write results as CSV
        #[arg(long, value_name = "FILE")]
        csv: Option<String>,

        /// Write results as a Markdown report
        #[arg(long, value_name = "FILE")]
        markdown: Option<String>,
    },

    /// Run every algorithm on the same sweep and compare timings
    Compare {
        #[command(flatten)]
        sweep: SweepArgs,
    },
}

/// Sweep overrides shared by `run` and `compare`.
#[derive(Debug, Clone, Default, Args)]
pub struct SweepArgs {
    /// Load the base sweep from a TOML or YAML file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Comma-separated input sizes
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub sizes: Option<Vec<i64>>,

    /// Comma-separated distributions (random, ascending, descending)
    #[arg(long, value_delimiter = ',')]
    pub distributions: Option<Vec<DistributionKind>>,

    /// Seed for generated inputs
    #[arg(long, conflicts_with = "no_seed")]
    pub seed: Option<u64>,

    /// Draw fresh inputs on every run
    #[arg(long)]
    pub no_seed: bool,

    /// Write results as CSV
    #[arg(long, value_name = "FILE")]
    pub csv: Option<String>,

    /// Write results as a Markdown report
    #[arg(long, value_name = "FILE")]
    pub markdown: Option<String>,
}

impl SweepArgs {
    /// Builds the sweep: file (or defaults) first, then flags on top.
    pub fn to_config(&self) -> Result<SweepConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => SweepConfig::load(path)?,
            None => SweepConfig::new(),
        };

        if let Some(sizes) = &self.sizes {
            config = config.with_sizes(sizes.clone());
        }
        if let Some(distributions) = &self.distributions {
            config = config.with_distributions(distributions.clone());
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if self.no_seed {
            config = config.without_seed();
        }
        if let Some(path) = &self.csv {
            config = config.with_csv_output(path.clone());
        }
        if let Some(path) = &self.markdown {
            config = config.with_markdown_output(path.clone());
        }

        config.validate()?;
        Ok(config)
    }
}

impl Commands {
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Run { algorithm, sweep } => {
                let config = sweep.to_config()?.with_algorithm(algorithm);
                run_and_export(config).map(|_| ())
            }
            Commands::Profile {
                algorithm,
                csv,
                markdown,
            } => {
                let mut config = SweepConfig::profile(algorithm);
                if let Some(path) = csv {
                    config = config.with_csv_output(path);
                }
                if let Some(path) = markdown {
                    config = config.with_markdown_output(path);
                }
                run_and_export(config).map(|_| ())
            }
            Commands::Compare { sweep } => compare(sweep),
        }
    }
}

fn run_and_export(config: SweepConfig) -> Result<BenchmarkReport, CliError> {
    sortbench_console::init();

    let report = Benchmark::new(config.clone()).run();

    println!();
    println!("{}", report.name.bold());
    println!("{}", sortbench_console::report_table(&report).render());
    print_failures(&report);

    export(&report, config.csv_output.as_deref(), config.markdown_output.as_deref())?;
    Ok(report)
}

fn compare(sweep: SweepArgs) -> Result<(), CliError> {
    let base = sweep.to_config()?;
    sortbench_console::init();

    let reports: Vec<BenchmarkReport> = SortAlgorithm::ALL
        .iter()
        .map(|&algorithm| {
            let config = base
                .clone()
                .with_algorithm(algorithm)
                .with_name(format!("{} ({})", base.name, algorithm));
            Benchmark::new(config).run()
        })
        .collect();
    let refs: Vec<&BenchmarkReport> = reports.iter().collect();

    println!();
    println!("{}", sortbench_console::comparison_table(&refs).render());
    for report in &reports {
        print_failures(report);
    }

    if let Some(path) = base.markdown_output.as_deref() {
        std::fs::write(path, MarkdownReport::comparison(&refs))
            .map_err(|e| CliError::io(path, e))?;
        println!("{} {}", "Markdown written to".bright_black(), path);
    }
    if let Some(path) = base.csv_output.as_deref() {
        for report in &reports {
            let target = suffixed_path(path, report.algorithm);
            CsvExporter::to_file(report, &target).map_err(|e| CliError::io(&target, e))?;
            println!("{} {}", "CSV written to".bright_black(), target);
        }
    }
    Ok(())
}

fn export(
    report: &BenchmarkReport,
    csv: Option<&str>,
    markdown: Option<&str>,
) -> Result<(), CliError> {
    if let Some(path) = csv {
        CsvExporter::to_file(report, path).map_err(|e| CliError::io(path, e))?;
        println!("{} {}", "CSV written to".bright_black(), path);
    }
    if let Some(path) = markdown {
        MarkdownReport::to_file(report, path).map_err(|e| CliError::io(path, e))?;
        println!("{} {}", "Markdown written to".bright_black(), path);
    }
    Ok(())
}

fn print_failures(report: &BenchmarkReport) {
    for failure in report.failures() {
        eprintln!(
            "{} {} n={}: {}",
            "failed".bright_red().bold(),
            failure.distribution,
            failure.size,
            failure.message
        );
    }
}

/// `results.csv` becomes `results_heap_sort.csv` for HeapSort.
fn suffixed_path(path: &str, algorithm: SortAlgorithm) -> String {
    let tag = match algorithm {
        SortAlgorithm::QuickSort => "quick_sort",
        SortAlgorithm::HeapSort => "heap_sort",
        SortAlgorithm::BubbleSort => "bubble_sort",
    };
    let p = Path::new(path);
    let stem = p.file_stem().and_then(|s| s.to_str()).unwrap_or("results");
    let file = match p.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}_{}.{}", stem, tag, ext),
        None => format!("{}_{}", stem, tag),
    };
    match p.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(file).display().to_string(),
        _ => file,
    }
}
