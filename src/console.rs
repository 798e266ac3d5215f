//! Plain-text views for running the controllers from a terminal.

use crate::models::RatingType;
use crate::view::{DashboardView, HistoryRow, Popup, TerminalView};
use std::io::{self, Write};

fn say(line: std::fmt::Arguments<'_>) {
    let mut out = io::stdout().lock();
    // A closed stdout only loses display output.
    let _ = writeln!(out, "{line}");
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleTerminalView;

impl TerminalView for ConsoleTerminalView {
    fn set_buttons_enabled(&self, enabled: bool) {
        if enabled {
            say(format_args!("[1] 😀  [2] 🙂  [3] 😞   (pronto)"));
        } else {
            say(format_args!("[-] [-] [-]   (a processar...)"));
        }
    }

    fn set_counter(&self, rating: RatingType, count: u64) {
        say(format_args!("{} {}: {count}", rating.emoji(), rating.label()));
    }

    fn pulse(&self, rating: RatingType) {
        say(format_args!("{} *", rating.emoji()));
    }

    fn show_popup(&self, popup: &Popup) {
        say(format_args!(
            "Obrigado! {} #{} às {}",
            popup.label, popup.sequential_number, popup.time
        ));
    }

    fn hide_popup(&self) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleDashboardView;

impl DashboardView for ConsoleDashboardView {
    fn set_date(&self, date: &str) {
        say(format_args!("== {date} =="));
    }

    fn set_stat(&self, rating: RatingType, count: u64) {
        say(format_args!("{:<17} {count:>5}", rating.label()));
    }

    fn set_total(&self, total: u64) {
        say(format_args!("{:<17} {total:>5}", "Total"));
    }

    fn set_bar(&self, rating: RatingType, percentage: u32) {
        let filled = (percentage.min(100) / 5) as usize;
        say(format_args!(
            "{} {:<20} {percentage}%",
            rating.emoji(),
            "#".repeat(filled)
        ));
    }

    fn show_history(&self, rows: &[HistoryRow]) {
        for row in rows {
            say(format_args!("{} {:<17} {}", row.emoji, row.label, row.caption()));
        }
    }

    fn show_empty_history(&self, message: &str) {
        say(format_args!("{message}"));
    }
}
