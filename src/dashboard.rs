//! The read-mostly statistics dashboard.

use crate::client::RatingApi;
use crate::models::{RatingType, StatsSnapshot};
use crate::schedule::{spawn_every, PollHandle};
use crate::view::{DashboardView, HistoryRow, EMPTY_HISTORY_MESSAGE};
use chrono::{DateTime, Datelike, Locale, TimeZone};
use std::fmt::Display;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

pub const REFRESH_PERIOD: Duration = Duration::from_millis(5_000);

// Locale data only carries the short weekday ("sexta").
const WEEKDAYS: [&str; 7] = [
    "segunda-feira",
    "terça-feira",
    "quarta-feira",
    "quinta-feira",
    "sexta-feira",
    "sábado",
    "domingo",
];

/// Share of `count` in `total`, rounded half up. Zero when there is no total.
pub fn percentage(count: u64, total: u64) -> u32 {
    if total == 0 {
        return 0;
    }
    (count as f64 / total as f64 * 100.0).round() as u32
}

pub fn chart_percentages(stats: &StatsSnapshot, total: u64) -> [u32; 3] {
    RatingType::ALL.map(|rating| percentage(stats.get(rating), total))
}

/// Long Portuguese date, e.g. "sexta-feira, 16 de outubro de 2026".
pub fn format_full_date<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    let weekday = WEEKDAYS[now.weekday().num_days_from_monday() as usize];
    format!(
        "{weekday}, {}",
        now.format_localized("%-d de %B de %Y", Locale::pt_PT)
    )
}

pub struct Dashboard<A, V> {
    inner: Arc<Inner<A, V>>,
}

struct Inner<A, V> {
    api: A,
    view: V,
}

impl<A, V> Clone for Dashboard<A, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A: RatingApi, V: DashboardView> Dashboard<A, V> {
    pub fn new(api: A, view: V) -> Self {
        Self {
            inner: Arc::new(Inner { api, view }),
        }
    }

    /// Shows the date, loads everything once, then refreshes every
    /// [`REFRESH_PERIOD`] for as long as the handle is kept.
    pub async fn start<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> PollHandle
    where
        Tz::Offset: Display,
    {
        self.inner.view.set_date(&format_full_date(now));
        self.refresh().await;

        let dashboard = self.clone();
        spawn_every(REFRESH_PERIOD, move || {
            let dashboard = dashboard.clone();
            async move {
                dashboard.refresh().await;
            }
        })
    }

    pub async fn refresh(&self) {
        self.load_stats().await;
        self.load_history().await;
    }

    pub async fn load_stats(&self) -> Option<StatsSnapshot> {
        let stats = match self.inner.api.stats().await {
            Ok(stats) => stats,
            Err(err) => {
                error!("failed to load stats: {err}");
                return None;
            }
        };

        let total = stats.total();
        for rating in RatingType::ALL {
            self.inner.view.set_stat(rating, stats.get(rating));
        }
        self.inner.view.set_total(total);
        self.render_chart(&stats, total);
        Some(stats)
    }

    pub fn render_chart(&self, stats: &StatsSnapshot, total: u64) {
        let percentages = chart_percentages(stats, total);
        for (rating, percentage) in RatingType::ALL.into_iter().zip(percentages) {
            self.inner.view.set_bar(rating, percentage);
        }
    }

    pub async fn load_history(&self) {
        let events = match self.inner.api.history().await {
            Ok(events) => events,
            Err(err) => {
                error!("failed to load history: {err}");
                return;
            }
        };

        if events.is_empty() {
            self.inner.view.show_empty_history(EMPTY_HISTORY_MESSAGE);
            return;
        }

        debug!(count = events.len(), "rendering history");
        let rows: Vec<HistoryRow> = events.iter().map(HistoryRow::from).collect();
        self.inner.view.show_history(&rows);
    }
}
