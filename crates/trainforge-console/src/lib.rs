//! Colorful console output for solver events.
//!
//! Provides a custom `tracing` layer that formats solver events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (solve start/end)
//! - **DEBUG**: One line per enumerated sequence length

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static SOLVE_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Filter used when `RUST_LOG` is unset or unparsable.
const DEFAULT_FILTER: &str = "trainforge_solver=info";

/// Initializes the solver console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Honors `RUST_LOG`, e.g. `RUST_LOG=trainforge_solver=debug` to see one
/// line per sequence length.
pub fn init() {
    INIT.get_or_init(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SolverConsoleLayer)
            .try_init();
    });
}

// Marks the start of solving for elapsed time tracking.
fn mark_solve_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    SOLVE_START_NANOS.store(nanos, Ordering::Relaxed);
}

// Returns elapsed time since solve start.
fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = SOLVE_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

/// A tracing layer that formats solver events with colors.
pub struct SolverConsoleLayer;

impl<S: Subscriber> Layer<S> for SolverConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let target = event.metadata().target();
        if !target.starts_with("trainforge_solver") && !target.starts_with("trainforge::") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    profile: Option<String>,
    status: Option<String>,
    enumeration: Option<String>,
    outcome: Option<String>,
    cap: Option<u64>,
    pool_size: Option<u64>,
    level: Option<u64>,
    combinations: Option<u64>,
    length: Option<u64>,
    evaluated: Option<u64>,
    duration_ms: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value).trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "profile" => self.profile = Some(s),
            "status" => self.status = Some(s),
            "enumeration" => self.enumeration = Some(s),
            "outcome" => self.outcome = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "cap" => self.cap = Some(value),
            "pool_size" => self.pool_size = Some(value),
            "level" => self.level = Some(value),
            "combinations" => self.combinations = Some(value),
            "length" => self.length = Some(value),
            "evaluated" => self.evaluated = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "profile" => self.profile = Some(value.to_string()),
            "status" => self.status = Some(value.to_string()),
            "enumeration" => self.enumeration = Some(value.to_string()),
            "outcome" => self.outcome = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "solve_start" => format_solve_start(v),
        "level_start" => format_level_start(v),
        "solve_end" => format_solve_end(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_solve_start(v: &EventVisitor) -> String {
    mark_solve_start();
    let profile = v.profile.as_deref().unwrap_or("custom");
    let status = v.status.as_deref().unwrap_or("?");
    let cap = v.cap.unwrap_or(0);
    let pool = v.pool_size.unwrap_or(0);
    let enumeration = v.enumeration.as_deref().unwrap_or("Multiset");

    format!(
        "{} {} Solving {} from {} │ {} operations │ cap {} │ {} │ space {}",
        format_elapsed(),
        "▶".bright_green().bold(),
        profile.white().bold(),
        status.bright_yellow(),
        pool.to_formatted_string(&Locale::en).bright_yellow(),
        cap.to_formatted_string(&Locale::en).bright_yellow(),
        enumeration,
        calculate_search_scale(pool as usize, cap as usize).bright_magenta()
    )
}

fn format_level_start(v: &EventVisitor) -> String {
    let level = v.level.unwrap_or(0);
    let combinations = v.combinations.unwrap_or(0);

    format!(
        "{} {} Length {:>3} │ {:>14} combinations",
        format_elapsed(),
        "⚡".bright_cyan(),
        level,
        combinations
            .to_formatted_string(&Locale::en)
            .bright_magenta()
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    let outcome = v.outcome.as_deref().unwrap_or("unknown");
    let length = v.length.unwrap_or(0);
    let evaluated = v.evaluated.unwrap_or(0);
    let duration = v.duration_ms.unwrap_or(0);

    let verdict = match outcome {
        "solved" => format!("SOLVED in {} operations", length)
            .bright_green()
            .bold()
            .to_string(),
        "already_satisfied" => "ALREADY SATISFIED".bright_green().bold().to_string(),
        "unreachable" => "UNREACHABLE within cap".bright_red().bold().to_string(),
        other => other.white().to_string(),
    };

    format!(
        "{} {} Solving complete │ {} │ {} evaluated │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        verdict,
        evaluated.to_formatted_string(&Locale::en).white(),
        format_duration_ms(duration).yellow(),
    )
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

// Upper bound on ordered sequences: pool_size ^ cap.
fn calculate_search_scale(pool_size: usize, cap: usize) -> String {
    if pool_size == 0 || cap == 0 {
        return "0".to_string();
    }

    let log_scale = (cap as f64) * (pool_size as f64).log10();
    let exponent = log_scale.floor() as i32;
    let mantissa = 10f64.powf(log_scale - exponent as f64);

    format!("{:.3} x 10^{}", mantissa, exponent)
}
