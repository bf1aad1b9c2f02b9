//! Colorful console output for generation passes.
//!
//! Provides a custom `tracing` layer that formats sealforge events with colors.

use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "sealforge=info,sealforge_core=info,sealforge_render=warn";

static INIT: OnceLock<()> = OnceLock::new();

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect. Does
/// nothing if another global subscriber is already installed.
pub fn init() {
    INIT.get_or_init(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SealforgeConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats sealforge events with colors.
pub struct SealforgeConsoleLayer;

impl<S: Subscriber> Layer<S> for SealforgeConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("sealforge") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(*metadata.level(), &visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    message: Option<String>,
    declaration: Option<String>,
    path: Option<String>,
    generated_name: Option<String>,
    bindings: Option<String>,
    error: Option<String>,
    threads: Option<u64>,
    declaration_count: Option<u64>,
    generated: Option<u64>,
    hierarchies: Option<u64>,
    skipped: Option<u64>,
    failed: Option<u64>,
    files: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.record_str(field, s.trim_matches('"'));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "declaration_count" => self.declaration_count = Some(value),
            "generated" => self.generated = Some(value),
            "hierarchies" => self.hierarchies = Some(value),
            "skipped" => self.skipped = Some(value),
            "failed" => self.failed = Some(value),
            "files" => self.files = Some(value),
            "threads" => self.threads = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "message" => self.message = Some(value.to_string()),
            "declaration" => self.declaration = Some(value.to_string()),
            "path" => self.path = Some(value.to_string()),
            "generated" => self.generated_name = Some(value.to_string()),
            "bindings" => self.bindings = Some(value.to_string()),
            "error" => self.error = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(level: Level, v: &EventVisitor) -> String {
    match v.event.as_deref() {
        Some("generate_start") => format!(
            "{} {} {} generating from {} declaration(s)",
            timestamp().bright_black(),
            level_label(level),
            "[Generator]".bright_cyan(),
            v.declaration_count.unwrap_or(0).bright_yellow()
        ),
        Some("generate_end") => format_generate_end(level, v),
        Some("declaration_skipped") => format!(
            "    {} {} has no models, skipped",
            "-".bright_black(),
            v.declaration.as_deref().unwrap_or("?").white()
        ),
        Some("output_written") => format!(
            "    {} {}",
            "->".bright_blue(),
            v.path.as_deref().unwrap_or("?").white()
        ),
        Some("generation_written") => format!(
            "{} {} {} wrote {} file(s)",
            timestamp().bright_black(),
            level_label(level),
            "[Output]".bright_cyan(),
            v.files.unwrap_or(0).bright_yellow()
        ),
        Some("name_collision") => format!(
            "{} {} {} {} generates {} more than once: {}",
            timestamp().bright_black(),
            level_label(level),
            "[Generator]".bright_cyan(),
            v.declaration.as_deref().unwrap_or("?").white(),
            v.generated_name.as_deref().unwrap_or("?").bright_yellow(),
            v.bindings.as_deref().unwrap_or("?")
        ),
        Some("output_overwritten") => format!(
            "{} {} {} {} was already written, second write refused",
            timestamp().bright_black(),
            level_label(level),
            "[Output]".bright_cyan(),
            v.path.as_deref().unwrap_or("?").white()
        ),
        Some("worker_pool_unavailable") => format!(
            "{} {} {} no pool of {} thread(s), processing sequentially: {}",
            timestamp().bright_black(),
            level_label(level),
            "[Generator]".bright_cyan(),
            v.threads.unwrap_or(0).bright_yellow(),
            v.error.as_deref().unwrap_or("?")
        ),
        other => match (&v.message, other) {
            (Some(message), _) => format!(
                "{} {} {}",
                timestamp().bright_black(),
                level_label(level),
                message
            ),
            (None, Some(event)) if level <= Level::WARN => format_unknown(level, event, v),
            (None, _) => String::new(),
        },
    }
}

/// Warnings and errors without a dedicated format still show their fields.
fn format_unknown(level: Level, event: &str, v: &EventVisitor) -> String {
    let mut line = format!(
        "{} {} {}",
        timestamp().bright_black(),
        level_label(level),
        event.bright_cyan()
    );
    for value in [&v.declaration, &v.path, &v.error].into_iter().flatten() {
        line.push(' ');
        line.push_str(value);
    }
    line
}

fn format_generate_end(level: Level, v: &EventVisitor) -> String {
    let failed = v.failed.unwrap_or(0);
    let failed = if failed > 0 {
        failed.bright_red().bold().to_string()
    } else {
        failed.bright_green().to_string()
    };
    format!(
        "{} {} {} generated {} hierarchies from {} declaration(s), {} skipped, {} failed",
        timestamp().bright_black(),
        level_label(level),
        "[Generator]".bright_cyan(),
        v.hierarchies.unwrap_or(0).bright_magenta().bold(),
        v.generated.unwrap_or(0).bright_yellow(),
        v.skipped.unwrap_or(0).white(),
        failed
    )
}

fn level_label(level: Level) -> String {
    match level {
        Level::ERROR => "ERROR".bright_red().bold().to_string(),
        Level::WARN => " WARN".yellow().to_string(),
        Level::INFO => " INFO".bright_green().to_string(),
        Level::DEBUG => "DEBUG".bright_blue().to_string(),
        Level::TRACE => "TRACE".bright_black().to_string(),
    }
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs() % 100000;
            let millis = d.subsec_millis();
            format!("{:5}.{:03}", secs, millis)
        })
        .unwrap_or_else(|_| "    0.000".to_string())
}
