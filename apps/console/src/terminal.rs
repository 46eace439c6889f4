//! Terminal output regions and confirmation prompt.

use std::fmt::Write as _;
use std::io::{BufRead, Write};

use quakelog_mediator::{DisplayResult, OutputSink, Payload, Region};
use quakelog_protocol::GameReport;

/// Prints one output region to the terminal.
///
/// Results go to stdout, errors and in-flight status to stderr.
pub struct TerminalSink {
    label: &'static str,
    summary: bool,
}

impl TerminalSink {
    pub fn new(region: Region, summary: bool) -> Self {
        Self {
            label: region.label(),
            summary,
        }
    }
}

impl OutputSink for TerminalSink {
    fn pending(&self, message: &str) {
        eprintln!("{}", format_block(self.label, message));
    }

    fn show(&self, result: &DisplayResult) {
        let text = render(result, self.summary);
        if result.is_error {
            eprintln!("{}", format_block(self.label, &text));
        } else {
            println!("{}", format_block(self.label, &text));
        }
    }
}

/// Renders a result, using the game report layout when requested and the
/// payload decodes as one.
pub fn render(result: &DisplayResult, summary: bool) -> String {
    if summary {
        if let Payload::Json(value) = &result.payload {
            if let Ok(report) = serde_json::from_value::<GameReport>(value.clone()) {
                return format_report(&report);
            }
        }
    }
    result.render()
}

/// Prefixes text with its region label; multi-line text starts on its own line.
pub fn format_block(label: &str, text: &str) -> String {
    if text.contains('\n') {
        format!("[{label}]\n{text}")
    } else {
        format!("[{label}] {text}")
    }
}

/// Human-readable layout of a single game report.
pub fn format_report(report: &GameReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Game {}", report.id);
    let _ = writeln!(out, "  total kills: {}", report.total_kills);
    let _ = writeln!(out, "  players: {}", report.players.join(", "));
    if !report.kills.is_empty() {
        let _ = writeln!(out, "  kills:");
        for (player, kills) in &report.kills {
            let _ = writeln!(out, "    {player}: {kills}");
        }
    }
    if !report.kills_by_means.is_empty() {
        let _ = writeln!(out, "  kills by means:");
        for (means, kills) in &report.kills_by_means {
            let _ = writeln!(out, "    {means}: {kills}");
        }
    }
    out.trim_end().to_string()
}

/// Asks on stderr and reads one answer line from stdin.
///
/// Anything but `y`/`yes` (or a read failure) declines.
pub fn prompt_stdin(prompt: &str) -> bool {
    eprint!("{prompt} [y/N] ");
    let _ = std::io::stderr().flush();

    let mut answer = String::new();
    match std::io::stdin().lock().read_line(&mut answer) {
        Ok(_) => is_yes(&answer),
        Err(e) => {
            tracing::warn!(error = %e, "failed to read confirmation");
            false
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
