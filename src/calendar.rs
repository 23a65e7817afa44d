//! Approximate Gregorian to Bikram Sambat conversion for the navbar clock.
//!
//! Only the month lengths of BS 2081 are known here. Later years reuse the
//! same table, so dates more than a year past the epoch drift from the real
//! calendar.

use std::fmt::Display;

use chrono::{DateTime, Datelike, FixedOffset, Timelike};

/// 2024-04-13T00:00:00Z, taken as 1 Baisakh 2081.
pub const EPOCH_MILLIS: i64 = 1_712_966_400_000;
pub const EPOCH_YEAR: u32 = 2081;

const DAY_MILLIS: i64 = 86_400_000;

pub const MONTH_LENGTHS: [i64; 12] = [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30];

pub const MONTH_NAMES: [&str; 12] = [
    "बैशाख", "जेठ", "असार", "साउन", "भदौ", "असोज", "कात्तिक", "मंसिर", "पुष", "माघ", "फागुन", "चैत",
];

pub const WEEKDAY_NAMES: [&str; 7] = [
    "आइतबार", "सोमबार", "मंगलबार", "बुधबार", "बिहीबार", "शुक्रबार", "शनिबार",
];

/// Shown whenever the clock reads earlier than the epoch.
pub const FALLBACK_DATE: &str = "2080-चैत-30";

const DEVANAGARI_DIGITS: [char; 10] = ['०', '१', '२', '३', '४', '५', '६', '७', '८', '९'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BsDate {
    pub year: u32,
    pub month_index: usize,
    pub day: i64,
}

impl BsDate {
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.month_index]
    }

    /// `२०८१-बैशाख-१`
    pub fn display(&self) -> String {
        format!(
            "{}-{}-{}",
            to_devanagari(self.year),
            self.month_name(),
            to_devanagari(self.day)
        )
    }

    /// Zero-padded numeric form, e.g. `२०८१-०१-०७` with `-`.
    pub fn numeric(&self, separator: char) -> String {
        to_devanagari(format!(
            "{}{separator}{:02}{separator}{:02}",
            self.year,
            self.month_index + 1,
            self.day
        ))
    }
}

/// Converts a UTC millisecond timestamp. `None` before the epoch.
pub fn convert(now_millis: i64) -> Option<BsDate> {
    let diff_days = (now_millis - EPOCH_MILLIS).div_euclid(DAY_MILLIS);
    if diff_days < 0 {
        return None;
    }

    let mut year = EPOCH_YEAR;
    let mut month_index = 0;
    let mut day = diff_days + 1;
    while day > MONTH_LENGTHS[month_index] {
        day -= MONTH_LENGTHS[month_index];
        month_index += 1;
        if month_index > 11 {
            month_index = 0;
            year += 1;
        }
    }

    Some(BsDate {
        year,
        month_index,
        day,
    })
}

/// Replaces every ASCII digit with its Devanagari numeral.
pub fn to_devanagari(value: impl Display) -> String {
    value
        .to_string()
        .chars()
        .map(|ch| match ch.to_digit(10) {
            Some(digit) => DEVANAGARI_DIGITS[digit as usize],
            None => ch,
        })
        .collect()
}

/// What the navbar shows for one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clock {
    pub date: String,
    pub weekday: &'static str,
    pub time: String,
}

impl Clock {
    pub fn at(now: DateTime<FixedOffset>) -> Self {
        let weekday = WEEKDAY_NAMES[now.weekday().num_days_from_sunday() as usize];
        match convert(now.timestamp_millis()) {
            Some(date) => Self {
                date: date.display(),
                weekday,
                time: to_devanagari(format!("{:02}:{:02}", now.hour(), now.minute())),
            },
            None => Self {
                date: FALLBACK_DATE.to_string(),
                weekday,
                time: to_devanagari(format!(
                    "{:02}:{:02}:{:02}",
                    now.hour(),
                    now.minute(),
                    now.second()
                )),
            },
        }
    }

    pub fn date_line(&self) -> String {
        format!("वि.सं.: {} {}", self.date, self.weekday)
    }

    pub fn time_line(&self) -> String {
        format!("समय: {}", self.time)
    }
}
