//! Test doubles shared by the controller tests.

use crate::client::RatingApi;
use crate::errors::ClientError;
use crate::models::{RateReceipt, RatingEvent, RatingType, StatsSnapshot};
use crate::view::{DashboardView, HistoryRow, Popup, TerminalView};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    ButtonsEnabled(bool),
    Counter(RatingType, u64),
    Pulse(RatingType),
    PopupShown(Popup),
    PopupHidden,
    Date(String),
    Stat(RatingType, u64),
    Total(u64),
    Bar(RatingType, u32),
    History(Vec<HistoryRow>),
    EmptyHistory(String),
}

#[derive(Debug, Clone, Default)]
pub struct RecordingView {
    events: Arc<Mutex<Vec<ViewEvent>>>,
}

impl RecordingView {
    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: ViewEvent) {
        self.events.lock().unwrap().push(event);
    }

    pub fn buttons_enabled(&self) -> Option<bool> {
        self.events().into_iter().rev().find_map(|event| match event {
            ViewEvent::ButtonsEnabled(enabled) => Some(enabled),
            _ => None,
        })
    }

    pub fn counter(&self, rating: RatingType) -> Option<u64> {
        self.events().into_iter().rev().find_map(|event| match event {
            ViewEvent::Counter(r, count) if r == rating => Some(count),
            _ => None,
        })
    }

    pub fn popup_visible(&self) -> bool {
        self.events()
            .into_iter()
            .rev()
            .find_map(|event| match event {
                ViewEvent::PopupShown(_) => Some(true),
                ViewEvent::PopupHidden => Some(false),
                _ => None,
            })
            .unwrap_or(false)
    }
}

impl TerminalView for RecordingView {
    fn set_buttons_enabled(&self, enabled: bool) {
        self.push(ViewEvent::ButtonsEnabled(enabled));
    }

    fn set_counter(&self, rating: RatingType, count: u64) {
        self.push(ViewEvent::Counter(rating, count));
    }

    fn pulse(&self, rating: RatingType) {
        self.push(ViewEvent::Pulse(rating));
    }

    fn show_popup(&self, popup: &Popup) {
        self.push(ViewEvent::PopupShown(popup.clone()));
    }

    fn hide_popup(&self) {
        self.push(ViewEvent::PopupHidden);
    }
}

impl DashboardView for RecordingView {
    fn set_date(&self, date: &str) {
        self.push(ViewEvent::Date(date.to_string()));
    }

    fn set_stat(&self, rating: RatingType, count: u64) {
        self.push(ViewEvent::Stat(rating, count));
    }

    fn set_total(&self, total: u64) {
        self.push(ViewEvent::Total(total));
    }

    fn set_bar(&self, rating: RatingType, percentage: u32) {
        self.push(ViewEvent::Bar(rating, percentage));
    }

    fn show_history(&self, rows: &[HistoryRow]) {
        self.push(ViewEvent::History(rows.to_vec()));
    }

    fn show_empty_history(&self, message: &str) {
        self.push(ViewEvent::EmptyHistory(message.to_string()));
    }
}

/// Scripted rating service. Anything left unset answers with a 503.
#[derive(Debug, Clone, Default)]
pub struct FakeApi {
    state: Arc<FakeState>,
}

#[derive(Debug, Default)]
struct FakeState {
    stats: Mutex<Option<StatsSnapshot>>,
    receipt: Mutex<Option<RateReceipt>>,
    history: Mutex<Option<Vec<RatingEvent>>>,
    latency: Mutex<Duration>,
    submits: Mutex<Vec<RatingType>>,
    stats_calls: AtomicUsize,
    history_calls: AtomicUsize,
}

impl FakeApi {
    pub fn set_stats(&self, stats: Option<StatsSnapshot>) {
        *self.state.stats.lock().unwrap() = stats;
    }

    pub fn set_receipt(&self, receipt: Option<RateReceipt>) {
        *self.state.receipt.lock().unwrap() = receipt;
    }

    pub fn set_history(&self, history: Option<Vec<RatingEvent>>) {
        *self.state.history.lock().unwrap() = history;
    }

    pub fn set_latency(&self, latency: Duration) {
        *self.state.latency.lock().unwrap() = latency;
    }

    pub fn submits(&self) -> Vec<RatingType> {
        self.state.submits.lock().unwrap().clone()
    }

    pub fn stats_calls(&self) -> usize {
        self.state.stats_calls.load(Ordering::SeqCst)
    }

    pub fn history_calls(&self) -> usize {
        self.state.history_calls.load(Ordering::SeqCst)
    }

    async fn wait(&self) {
        let latency = *self.state.latency.lock().unwrap();
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
    }
}

fn unavailable() -> ClientError {
    ClientError::Status(reqwest::StatusCode::SERVICE_UNAVAILABLE)
}

impl RatingApi for FakeApi {
    async fn stats(&self) -> Result<StatsSnapshot, ClientError> {
        self.state.stats_calls.fetch_add(1, Ordering::SeqCst);
        self.wait().await;
        let stats = *self.state.stats.lock().unwrap();
        stats.ok_or_else(unavailable)
    }

    async fn submit(&self, rating: RatingType) -> Result<RateReceipt, ClientError> {
        self.state.submits.lock().unwrap().push(rating);
        self.wait().await;
        let receipt = self.state.receipt.lock().unwrap().clone();
        receipt.ok_or_else(unavailable)
    }

    async fn history(&self) -> Result<Vec<RatingEvent>, ClientError> {
        self.state.history_calls.fetch_add(1, Ordering::SeqCst);
        self.wait().await;
        let history = self.state.history.lock().unwrap().clone();
        history.ok_or_else(unavailable)
    }
}

pub fn snapshot(very_satisfied: u64, satisfied: u64, unsatisfied: u64) -> StatsSnapshot {
    StatsSnapshot {
        very_satisfied,
        satisfied,
        unsatisfied,
    }
}
