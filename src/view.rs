//! Typed bindings for the surfaces the controllers draw on.
//!
//! A view is resolved once when its controller is built; the controller
//! never looks anything up by name afterwards.

use crate::models::{RatingEvent, RatingType};

pub const EMPTY_HISTORY_MESSAGE: &str = "Nenhuma avaliação registada hoje";

/// Confirmation shown after a rating was accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popup {
    pub label: &'static str,
    pub sequential_number: u64,
    pub time: String,
}

/// One line of the dashboard history list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    pub emoji: &'static str,
    pub label: &'static str,
    pub sequential_number: u64,
    pub time: String,
}

impl HistoryRow {
    pub fn caption(&self) -> String {
        format!("#{} às {}", self.sequential_number, self.time)
    }
}

impl From<&RatingEvent> for HistoryRow {
    fn from(event: &RatingEvent) -> Self {
        Self {
            emoji: event.tipo.emoji(),
            label: event.tipo.label(),
            sequential_number: event.sequential_number,
            time: event.avaliacao_time.clone(),
        }
    }
}

pub trait TerminalView: Send + Sync + 'static {
    /// Enables or disables (and dims) every rating button.
    fn set_buttons_enabled(&self, enabled: bool);
    fn set_counter(&self, rating: RatingType, count: u64);
    fn pulse(&self, rating: RatingType);
    fn show_popup(&self, popup: &Popup);
    fn hide_popup(&self);
}

pub trait DashboardView: Send + Sync + 'static {
    fn set_date(&self, date: &str);
    fn set_stat(&self, rating: RatingType, count: u64);
    fn set_total(&self, total: u64);
    /// `percentage` drives both the fill width and the `"{p}%"` label.
    fn set_bar(&self, rating: RatingType, percentage: u32);
    fn show_history(&self, rows: &[HistoryRow]);
    fn show_empty_history(&self, message: &str);
}
