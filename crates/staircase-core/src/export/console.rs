//! Console output formatting with colored display

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use crate::challenge::{Arrangement, Mode};
use crate::progress::ProgressMetrics;

/// Format the staircase for console display with colored output
///
/// Returns a multi-line string with a boxed header, one row per slot,
/// and the progress totals.
pub fn format_progress_console(
    arrangement: &Arrangement,
    mode: Mode,
    metrics: &ProgressMetrics,
) -> String {
    let mut output = String::new();
    let level = arrangement.len();

    let title_content = format!(
        "  {} ({})",
        format!("Staircase-{}", level).bold(),
        mode.title_name()
    );
    let border: String = "━".repeat(50);
    let border_dim = border.dimmed();

    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(output, "{}", title_content);
    let _ = writeln!(output, "{}", border_dim);

    let width = level.to_string().len();
    for (number, slot) in arrangement.numbered() {
        let plays = slot.play_count();
        let credited = slot.entry().map_or(0, |game| game.credited_plays(number)) as usize;
        let mark = if slot.entry().is_some_and(|game| game.satisfies(number)) {
            "✔".green().to_string()
        } else {
            "·".dimmed().to_string()
        };
        let stars = format!(
            "{}{}",
            "★".repeat(credited).yellow(),
            "☆".repeat(number - credited).dimmed()
        );
        let name = match slot.entry() {
            Some(game) if !game.title.is_empty() => game.title.clone(),
            Some(game) => match game.external_id {
                Some(id) => format!("#{}", id),
                None => String::new(),
            },
            None => "(empty)".dimmed().to_string(),
        };
        let _ = writeln!(
            output,
            "  {} {:>width$} {:>4}  {} {}",
            mark,
            number,
            format!("{}/{}", plays, number),
            stars,
            name,
            width = width
        );
    }

    let progress = &metrics.progress;
    let percent = format!("{:.1}%", progress.percent());
    let percent = if progress.is_complete() {
        percent.green().bold().to_string()
    } else {
        percent.cyan().to_string()
    };

    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(
        output,
        "  PLAYS    : {}/{} ({})",
        progress.credited_plays, progress.target_plays, percent
    );
    let _ = writeln!(output, "  LARGEST  : {}", metrics.largest_complete);
    let _ = write!(output, "{}", border_dim);

    output
}

/// Simple progress summary for logging
pub fn format_progress_summary(metrics: &ProgressMetrics) -> String {
    format!(
        "{}/{} plays ({:.1}%), largest complete staircase {}",
        metrics.progress.credited_plays,
        metrics.progress.target_plays,
        metrics.progress.percent(),
        metrics.largest_complete
    )
}
