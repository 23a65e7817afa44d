use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Utc};

use crate::{
    advisor::Advisor,
    auth::{AdminCredentials, Sessions},
    calendar::{self, Clock},
    store::ContentStore,
};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ContentStore>,
    pub sessions: Arc<Sessions>,
    pub credentials: Arc<AdminCredentials>,
    pub advisor: Arc<dyn Advisor>,
    pub clock: ClockConfig,
}

#[derive(Clone, Copy, Debug)]
pub struct ClockConfig {
    pub offset: FixedOffset,
}

impl ClockConfig {
    pub fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.offset)
    }

    pub fn read(&self) -> Clock {
        Clock::at(self.now())
    }

    /// Today's BS date in numeric form, stamped on new notices and downloads.
    pub fn today(&self, separator: char) -> String {
        calendar::convert(self.now().timestamp_millis())
            .map(|date| date.numeric(separator))
            .unwrap_or_else(|| calendar::FALLBACK_DATE.to_string())
    }
}
