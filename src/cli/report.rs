//! Console output for command results.
//!
//! Separate from the core so trex can be used as a library.

use std::io::{self, Write};

use colored::{ColoredString, Colorize};
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CommandResult, CommandSummary, DiffSummary, ExportSummary, InitSummary, JournalOutcome,
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::{ChangeKind, render::LocaleStats};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a command result to stdout (and stderr for failures).
pub fn print(result: &CommandResult, verbose: bool) {
    print_to(
        result,
        verbose,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
}

/// Print a command result to custom writers.
///
/// Useful for testing or redirecting output.
pub fn print_to<W: Write, E: Write>(result: &CommandResult, verbose: bool, out: &mut W, err: &mut E) {
    match &result.summary {
        CommandSummary::Export(summary) => print_export(summary, verbose, out),
        CommandSummary::Diff(summary) => print_diff(summary, out),
        CommandSummary::Init(summary) => print_init(summary, out, err),
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_export<W: Write>(summary: &ExportSummary, verbose: bool, writer: &mut W) {
    let locale_count = summary.stats.len();
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Exported {} {} for {} {} to {}",
            summary.key_count,
            plural(summary.key_count, "key", "keys"),
            locale_count,
            plural(locale_count, "locale", "locales"),
            summary.export_path.display()
        )
        .green()
    );

    match &summary.journal {
        JournalOutcome::Written {
            path,
            inserted,
            updated,
            deleted,
        } => {
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                format!(
                    "Wrote journal {} ({} new, {} updated, {} deleted)",
                    path.display(),
                    inserted,
                    updated,
                    deleted
                )
                .green()
            );
        }
        JournalOutcome::Unchanged => {
            let _ = writeln!(
                writer,
                "  {}",
                "No changes since the last export, journal not written".dimmed()
            );
        }
        JournalOutcome::FirstRun => {
            let _ = writeln!(
                writer,
                "  {}",
                "No previous export found, journal not written".dimmed()
            );
        }
    }

    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Wrote metadata {}", summary.metadata_path.display()).green()
    );

    if verbose {
        print_stats(&summary.stats, writer);
    }
}

fn print_stats<W: Write>(stats: &[LocaleStats], writer: &mut W) {
    const LOCALE: &str = "LOCALE";
    let width = stats
        .iter()
        .map(|stat| UnicodeWidthStr::width(stat.locale.as_str()))
        .chain([LOCALE.len()])
        .max()
        .unwrap_or_default();

    let _ = writeln!(
        writer,
        "  {}  {:>8}  {:>8}",
        pad(LOCALE, width).bold(),
        "KEYS".bold(),
        "WORDS".bold()
    );
    for stat in stats {
        let _ = writeln!(
            writer,
            "  {}  {:>8}  {:>8}",
            pad(&stat.locale, width),
            stat.key_count,
            stat.word_count
        );
    }
}

fn print_diff<W: Write>(summary: &DiffSummary, writer: &mut W) {
    let Some(diff) = &summary.diff else {
        let _ = writeln!(
            writer,
            "  {}",
            format!(
                "No previous export at {}, nothing to compare",
                summary.snapshot_path.display()
            )
            .dimmed()
        );
        return;
    };

    if !summary.has_changes() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "No changes since the last export".green()
        );
    } else {
        for (kind, key) in diff.changes(summary.show_deleted) {
            let _ = writeln!(writer, "{}  {}", kind_label(kind), key);
        }

        let deleted = if summary.show_deleted {
            diff.deleted.len()
        } else {
            0
        };
        let total = diff.inserted.len() + diff.updated.len() + deleted;
        let _ = writeln!(
            writer,
            "\n{} {}",
            FAILURE_MARK.red(),
            format!(
                "{} {} since the last export ({} new, {} updated, {} deleted)",
                total,
                plural(total, "change", "changes"),
                diff.inserted.len(),
                diff.updated.len(),
                deleted
            )
            .red()
        );
    }

    if !summary.show_deleted && !diff.deleted.is_empty() {
        let _ = writeln!(
            writer,
            "  {} deleted {} hidden (use {} to show)",
            diff.deleted.len(),
            plural(diff.deleted.len(), "key", "keys"),
            "--show-deleted".cyan()
        );
    }
}

fn print_init<W: Write, E: Write>(summary: &InitSummary, out: &mut W, err: &mut E) {
    if summary.created {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        let _ = writeln!(err, "Error: {} already exists", CONFIG_FILE_NAME);
    }
}

fn kind_label(kind: ChangeKind) -> ColoredString {
    // Pad before coloring so escape codes do not break alignment
    let label = format!("{:<6}", kind.as_str());
    match kind {
        ChangeKind::New => label.green(),
        ChangeKind::Update => label.yellow(),
        ChangeKind::Delete => label.red(),
    }
}

fn pad(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(UnicodeWidthStr::width(text));
    format!("{}{}", text, " ".repeat(padding))
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
