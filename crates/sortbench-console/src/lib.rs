//! Colorful console output for benchmark sweeps.
//!
//! Provides a custom `tracing` layer that formats runner events with colors,
//! plus grid tables for finished reports.
//!
//! ## Log Levels
//!
//! - **INFO**: Sweep lifecycle (start/end)
//! - **WARN**: Failed trials
//! - **DEBUG**: One line per completed trial
//!
//! Without `RUST_LOG` the runner logs at `info`. Set
//! `RUST_LOG=sortbench_benchmark=debug` to see every trial.

mod format;
mod table;

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Duration;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

pub use format::{format_elapsed, format_seconds};
pub use table::{comparison_table, report_table, ConsoleTable};

static INIT: OnceLock<()> = OnceLock::new();

/// Filter used when `RUST_LOG` is unset or empty.
const DEFAULT_DIRECTIVE: &str = "sortbench_benchmark=info";

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes the console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the banner and sets up tracing. `RUST_LOG` directives replace the
/// default filter.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
        let _ = tracing_subscriber::registry()
            .with(env_filter(&directives))
            .with(SortBenchConsoleLayer)
            .try_init();
    });
}

fn env_filter(directives: &str) -> EnvFilter {
    let default = DEFAULT_DIRECTIVE
        .parse()
        .unwrap_or_else(|_| tracing::level_filters::LevelFilter::INFO.into());
    EnvFilter::builder()
        .with_default_directive(default)
        .parse_lossy(directives)
}

fn print_banner() {
    let banner = r#"
 ____             _   ____                  _
/ ___|  ___  _ __| |_| __ )  ___ _ __   ___| |__
\___ \ / _ \| '__| __|  _ \ / _ \ '_ \ / __| '_ \
 ___) | (_) | |  | |_| |_) |  __/ | | | (__| | | |
|____/ \___/|_|   \__|____/ \___|_| |_|\___|_| |_|
"#;

    let version_line = format!(
        "              v{} - QuickSort / HeapSort / BubbleSort\n",
        VERSION
    );

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats runner events with colors.
pub struct SortBenchConsoleLayer;

impl<S: Subscriber> Layer<S> for SortBenchConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("sortbench") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    name: Option<String>,
    algorithm: Option<String>,
    distribution: Option<String>,
    error: Option<String>,
    size: Option<i64>,
    elapsed_ns: Option<u64>,
    memory_bytes: Option<u64>,
    comparisons: Option<u64>,
    swaps: Option<u64>,
    distribution_count: Option<u64>,
    size_count: Option<u64>,
    trials: Option<u64>,
    failures: Option<u64>,
    duration_ms: Option<u64>,
    seeded: Option<bool>,
}

impl EventVisitor {
    fn set_str(&mut self, field: &Field, value: String) {
        match field.name() {
            "event" => self.event = Some(value),
            "name" => self.name = Some(value),
            "algorithm" => self.algorithm = Some(value),
            "distribution" => self.distribution = Some(value),
            "error" => self.error = Some(value),
            _ => {}
        }
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.set_str(field, s.trim_matches('"').to_string());
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.set_str(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "size" => self.size = i64::try_from(value).ok(),
            "elapsed_ns" => self.elapsed_ns = Some(value),
            "memory_bytes" => self.memory_bytes = Some(value),
            "comparisons" => self.comparisons = Some(value),
            "swaps" => self.swaps = Some(value),
            "distribution_count" => self.distribution_count = Some(value),
            "size_count" => self.size_count = Some(value),
            "trials" => self.trials = Some(value),
            "failures" => self.failures = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        if field.name() == "size" {
            self.size = Some(value);
        } else if let Ok(value) = u64::try_from(value) {
            self.record_u64(field, value);
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "seeded" {
            self.seeded = Some(value);
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref().unwrap_or("") {
        "sweep_start" => format_sweep_start(v),
        "sweep_end" => format_sweep_end(v),
        "trial_end" => format_trial_end(v, level),
        "trial_failed" => format_trial_failed(v),
        _ => String::new(),
    }
}

fn format_sweep_start(v: &EventVisitor) -> String {
    let algorithm = v.algorithm.as_deref().unwrap_or("Unknown");
    let distributions = v.distribution_count.unwrap_or(0);
    let sizes = v.size_count.unwrap_or(0);
    let seeding = if v.seeded.unwrap_or(false) {
        "seeded".bright_green().to_string()
    } else {
        "fresh draws".yellow().to_string()
    };

    format!(
        "{} {} │ {} distributions × {} sizes │ {}",
        "▶".bright_green().bold(),
        algorithm.white().bold(),
        distributions.to_formatted_string(&Locale::en).bright_yellow(),
        sizes.to_formatted_string(&Locale::en).bright_yellow(),
        seeding
    )
}

fn format_sweep_end(v: &EventVisitor) -> String {
    let algorithm = v.algorithm.as_deref().unwrap_or("Unknown");
    let trials = v.trials.unwrap_or(0);
    let failures = v.failures.unwrap_or(0);
    let duration = v.duration_ms.unwrap_or(0);

    let failures_text = if failures == 0 {
        "0 failed".bright_green().to_string()
    } else {
        format!("{} failed", failures).bright_red().bold().to_string()
    };

    format!(
        "{} {} complete │ {} │ {} trials │ {}",
        "■".bright_cyan().bold(),
        algorithm.white().bold(),
        format::format_duration_ms(duration).yellow(),
        trials.to_formatted_string(&Locale::en).white(),
        failures_text
    )
}

fn format_trial_end(v: &EventVisitor, level: Level) -> String {
    if level != Level::DEBUG {
        return String::new();
    }

    let distribution = v.distribution.as_deref().unwrap_or("?");
    let size = v.size.unwrap_or(0).max(0) as u64;
    let elapsed = Duration::from_nanos(v.elapsed_ns.unwrap_or(0));
    let memory = v.memory_bytes.unwrap_or(0);

    let mut output = format!(
        "  {} {:<10} │ n = {:>9} │ {:>10} │ {} bytes",
        "✓".bright_green(),
        distribution,
        size.to_formatted_string(&Locale::en).white(),
        format_elapsed(elapsed).bright_magenta(),
        memory.to_formatted_string(&Locale::en).bright_black()
    );

    if let (Some(comparisons), Some(swaps)) = (v.comparisons, v.swaps) {
        output.push_str(&format!(
            " │ {} cmp │ {} swp",
            comparisons.to_formatted_string(&Locale::en).bright_yellow(),
            swaps.to_formatted_string(&Locale::en).bright_yellow()
        ));
    }

    output
}

fn format_trial_failed(v: &EventVisitor) -> String {
    format!(
        "  {} {:<10} │ n = {:>9} │ {}",
        "✗".bright_red().bold(),
        v.distribution.as_deref().unwrap_or("?"),
        v.size.map(|s| s.to_string()).unwrap_or_else(|| "?".to_string()),
        v.error.as_deref().unwrap_or("unknown error").bright_red()
    )
}
