use crate::models::AppData;
use chrono::{Local, NaiveDateTime};
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

pub type Clock = fn() -> NaiveDateTime;

/// Shared service state: the rating log, where it lives on disk and the
/// wall clock used to stamp and scope ratings.
#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub data: Arc<Mutex<AppData>>,
    pub clock: Clock,
}

impl AppState {
    pub fn new(data_path: PathBuf, data: AppData) -> Self {
        Self {
            data_path,
            data: Arc::new(Mutex::new(data)),
            clock: local_now,
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn now(&self) -> NaiveDateTime {
        (self.clock)()
    }
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}
