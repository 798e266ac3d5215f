//! The rating terminal: three buttons, one submission at a time.

use crate::client::RatingApi;
use crate::models::{RateReceipt, RatingType};
use crate::schedule::{spawn_every, PollHandle};
use crate::view::{Popup, TerminalView};
use chrono::{Datelike, Local, NaiveDate};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicI32, AtomicU64, Ordering};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, info};

/// Buttons stay locked this long after a submission settles.
pub const COOLDOWN: Duration = Duration::from_millis(2_000);
pub const POPUP_DURATION: Duration = Duration::from_millis(3_000);
pub const ROLLOVER_CHECK_PERIOD: Duration = Duration::from_secs(60);

pub type DateSource = Arc<dyn Fn() -> NaiveDate + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A submission was already in flight or cooling down.
    Ignored,
    Submitted(RateReceipt),
    Failed,
}

pub struct RatingTerminal<A, V> {
    inner: Arc<Inner<A, V>>,
}

struct Inner<A, V> {
    api: A,
    view: V,
    processing: AtomicBool,
    date_key: AtomicI32,
    today: DateSource,
    popup_generation: AtomicU64,
}

impl<A, V> Clone for RatingTerminal<A, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A: RatingApi, V: TerminalView> RatingTerminal<A, V> {
    pub fn new(api: A, view: V) -> Self {
        Self::with_date_source(api, view, Arc::new(|| Local::now().date_naive()))
    }

    pub fn with_date_source(api: A, view: V, today: DateSource) -> Self {
        let date_key = today().num_days_from_ce();
        Self {
            inner: Arc::new(Inner {
                api,
                view,
                processing: AtomicBool::new(false),
                date_key: AtomicI32::new(date_key),
                today,
                popup_generation: AtomicU64::new(0),
            }),
        }
    }

    /// Loads today's counters and starts the day-change watcher. The
    /// watcher lives as long as the returned handle.
    pub async fn start(&self) -> PollHandle {
        self.load_stats().await;

        let terminal = self.clone();
        spawn_every(ROLLOVER_CHECK_PERIOD, move || {
            let terminal = terminal.clone();
            async move {
                terminal.check_rollover().await;
            }
        })
    }

    pub fn is_processing(&self) -> bool {
        self.inner.processing.load(Ordering::Acquire)
    }

    pub async fn handle_click(&self, rating: RatingType) -> ClickOutcome {
        if self.inner.processing.swap(true, Ordering::AcqRel) {
            debug!(tipo = rating.code(), "click ignored while processing");
            return ClickOutcome::Ignored;
        }

        let _release = CooldownRelease {
            terminal: Some(self.clone()),
        };
        let view = &self.inner.view;
        view.set_buttons_enabled(false);

        match self.inner.api.submit(rating).await {
            Ok(receipt) => {
                info!(
                    tipo = rating.code(),
                    sequential_number = receipt.sequential_number,
                    "rating submitted"
                );
                view.set_counter(rating, receipt.sequential_number);
                view.pulse(rating);
                self.show_popup(rating, &receipt);
                ClickOutcome::Submitted(receipt)
            }
            Err(err) => {
                error!(tipo = rating.code(), "failed to submit rating: {err}");
                ClickOutcome::Failed
            }
        }
    }

    fn release(&self) {
        self.inner.processing.store(false, Ordering::Release);
        self.inner.view.set_buttons_enabled(true);
    }

    /// Resets the counters and reloads them when the calendar day changed
    /// since the last check.
    pub async fn check_rollover(&self) -> bool {
        let today = (self.inner.today)().num_days_from_ce();
        let previous = self.inner.date_key.swap(today, Ordering::AcqRel);
        if previous == today {
            return false;
        }

        info!("day changed, resetting counters");
        for rating in RatingType::ALL {
            self.inner.view.set_counter(rating, 0);
        }
        self.load_stats().await;
        true
    }

    pub async fn load_stats(&self) {
        match self.inner.api.stats().await {
            Ok(stats) => {
                for rating in RatingType::ALL {
                    self.inner.view.set_counter(rating, stats.get(rating));
                }
            }
            Err(err) => error!("failed to load stats: {err}"),
        }
    }

    fn show_popup(&self, rating: RatingType, receipt: &RateReceipt) {
        let generation = self.inner.popup_generation.fetch_add(1, Ordering::AcqRel) + 1;
        self.inner.view.show_popup(&Popup {
            label: rating.label(),
            sequential_number: receipt.sequential_number,
            time: receipt.time.clone(),
        });

        let terminal = self.clone();
        tokio::spawn(async move {
            sleep(POPUP_DURATION).await;
            // A newer popup owns the hide.
            if terminal.inner.popup_generation.load(Ordering::Acquire) == generation {
                terminal.inner.view.hide_popup();
            }
        });
    }
}

/// Starts the cooldown when a click settles, including when the click
/// future is dropped mid-request.
struct CooldownRelease<A: RatingApi, V: TerminalView> {
    terminal: Option<RatingTerminal<A, V>>,
}

impl<A: RatingApi, V: TerminalView> Drop for CooldownRelease<A, V> {
    fn drop(&mut self) {
        let Some(terminal) = self.terminal.take() else {
            return;
        };
        match tokio::runtime::Handle::try_current() {
            Ok(runtime) => {
                runtime.spawn(async move {
                    sleep(COOLDOWN).await;
                    terminal.release();
                });
            }
            Err(_) => {
                debug!("no runtime left, releasing buttons now");
                terminal.release();
            }
        }
    }
}
