//! Colorful console output for solver and race events.
//!
//! Provides a custom `tracing` layer that formats the structured events of
//! the Color Merge crates.

use std::io::{self, Write};
use std::sync::OnceLock;

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

const DEFAULT_FILTER: &str = "colormerge_solver=info,colormerge_session=info";

/// Installs the console subscriber.
///
/// Safe to call multiple times - only the first call has effect. `RUST_LOG`
/// overrides the default filter.
pub fn init() {
    INIT.get_or_init(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // Another subscriber may already be installed by the host program.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(ConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that prints Color Merge events with colors.
pub struct ConsoleLayer;

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with("colormerge") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{output}");
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    outcome: Option<String>,
    reason: Option<String>,
    room: Option<String>,
    player: Option<String>,
    difficulty: Option<String>,
    moves: Option<u64>,
    nodes: Option<u64>,
    nodes_per_second: Option<u64>,
    duration_ms: Option<u64>,
    elapsed_ms: Option<u64>,
    max_nodes: Option<u64>,
    balls: Option<u64>,
    rank: Option<u64>,
    points: Option<u64>,
    players: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{value:?}").trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "outcome" => self.outcome = Some(s),
            "reason" => self.reason = Some(s),
            "room" => self.room = Some(s),
            "player" => self.player = Some(s),
            "difficulty" => self.difficulty = Some(s),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.record_debug(field, &value);
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "moves" => self.moves = Some(value),
            "nodes" => self.nodes = Some(value),
            "nodes_per_second" => self.nodes_per_second = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "elapsed_ms" => self.elapsed_ms = Some(value),
            "max_nodes" => self.max_nodes = Some(value),
            "balls" => self.balls = Some(value),
            "rank" => self.rank = Some(value),
            "points" => self.points = Some(value),
            "players" => self.players = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref() {
        Some("solve_start") => format!(
            "{} {} {} searching {} balls, node budget ({})",
            timestamp().bright_black(),
            "INFO".bright_green(),
            "[Solver]".bright_cyan(),
            v.balls.unwrap_or(0).to_string().bright_yellow(),
            count(v.max_nodes).bright_yellow(),
        ),
        Some("budget_stop") => format!(
            "    {} stopped on {} after {} nodes ({})",
            "->".bright_blue(),
            v.reason.as_deref().unwrap_or("budget").yellow(),
            count(v.nodes).white(),
            format_duration_ms(v.elapsed_ms.unwrap_or(0)).yellow(),
        ),
        Some("solve_end") => format_solve_end(v),
        Some("race_start") => format!(
            "{} {} {} race started: {} players, {}",
            timestamp().bright_black(),
            "INFO".bright_green(),
            room_tag(v).bright_cyan(),
            v.players.unwrap_or(0).to_string().bright_yellow(),
            v.difficulty.as_deref().unwrap_or("medium").white().bold(),
        ),
        Some("player_finished") => format!(
            "    {} {} finished rank {} (+{})",
            "->".bright_blue(),
            v.player.as_deref().unwrap_or("?").white().bold(),
            v.rank.unwrap_or(0).to_string().bright_green().bold(),
            v.points.unwrap_or(0).to_string().bright_magenta(),
        ),
        Some("race_end") => format!(
            "{} {} {} race ended",
            timestamp().bright_black(),
            "INFO".bright_green(),
            room_tag(v).bright_cyan(),
        ),
        _ => String::new(),
    }
}

fn format_solve_end(v: &EventVisitor) -> String {
    let outcome = v.outcome.as_deref().unwrap_or("unknown");
    let outcome = if outcome == "solved" {
        outcome.bright_green().bold().to_string()
    } else {
        outcome.yellow().to_string()
    };

    format!(
        "{} {} {} {}: {} moves, {} nodes in {} ({}/s)",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Solver]".bright_cyan(),
        outcome,
        v.moves.unwrap_or(0).to_string().white().bold(),
        count(v.nodes).bright_magenta(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        count(v.nodes_per_second).bright_magenta(),
    )
}

fn room_tag(v: &EventVisitor) -> String {
    format!("[{}]", v.room.as_deref().unwrap_or("room"))
}

fn count(n: Option<u64>) -> String {
    n.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| format!("{:5}.{:03}", d.as_secs() % 100_000, d.subsec_millis()))
        .unwrap_or_else(|_| "    0.000".to_string())
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{ms}ms")
    } else {
        format!("{:.2}s", ms as f64 / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_events_are_silent() {
        let v = EventVisitor {
            event: Some("expand".into()),
            ..EventVisitor::default()
        };
        assert!(format_event(&v).is_empty());
    }

    #[test]
    fn test_solve_end_mentions_counts() {
        let v = EventVisitor {
            event: Some("solve_end".into()),
            outcome: Some("node_limit".into()),
            moves: Some(4),
            nodes: Some(12_345),
            duration_ms: Some(1500),
            ..EventVisitor::default()
        };
        let line = format_event(&v);
        assert!(line.contains("node_limit"));
        assert!(line.contains("12,345"));
        assert!(line.contains("1.50s"));
    }

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
    }
}
