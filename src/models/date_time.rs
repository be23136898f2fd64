// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Calendar month table, year choices, and the confirmed date/time record.

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// First year offered by the year dropdown.
pub const FIRST_YEAR: i32 = 1990;

/// Calendar months with their canonical English names, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

/// All months in calendar order, for populating the month dropdown.
pub const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

impl Month {
    /// Canonical English name shown in the dropdown.
    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// 1-based month number (January = 1).
    pub fn ordinal(self) -> u8 {
        self as u8 + 1
    }

    /// Standard day count, before any leap-year adjustment.
    pub fn base_days(self) -> u8 {
        match self {
            Month::January => 31,
            Month::February => 28,
            Month::March => 31,
            Month::April => 30,
            Month::May => 31,
            Month::June => 30,
            Month::July => 31,
            Month::August => 31,
            Month::September => 30,
            Month::October => 31,
            Month::November => 30,
            Month::December => 31,
        }
    }
}

/// Number of selectable days for a month/year pair.
///
/// February gains a 29th day whenever the year is divisible by four.
/// This is deliberately the simple divisibility test rather than the full
/// Gregorian rule: century years such as 1900 count as leap years here,
/// matching the widget's established user-facing behavior.
pub fn days_in_month(month: Month, year: i32) -> u8 {
    let mut days = month.base_days();
    if month == Month::February && year % 4 == 0 {
        days += 1;
    }
    days
}

/// Years offered by the year dropdown, newest first.
///
/// The upper bound is the current local year, sampled once when the
/// selection model is constructed.
pub fn year_choices() -> Vec<i32> {
    (FIRST_YEAR..=Local::now().year()).rev().collect()
}

/// Finalized selection built when the user confirms.
///
/// Every field is a decimal string: `year` is the plain 4-digit year, the
/// rest are zero-padded to two digits. This is the sole data the embedding
/// program consumes after the window closes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateTimeRecord {
    pub year: String,
    pub month: String,
    pub day: String,
    pub hour: String,
    pub minutes: String,
    pub seconds: String,
}

impl DateTimeRecord {
    pub(crate) fn new(month: Month, year: i32, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year: year.to_string(),
            month: format!("{:02}", month.ordinal()),
            day: format!("{day:02}"),
            hour: format!("{hour:02}"),
            minutes: format!("{minute:02}"),
            seconds: format!("{second:02}"),
        }
    }

    /// Convert the record to a `time::OffsetDateTime`, assumed UTC.
    ///
    /// Fails for combinations the simplified leap rule admits but the real
    /// calendar rejects (e.g. 1900-02-29).
    pub fn to_offset_datetime(&self) -> Result<OffsetDateTime, String> {
        let year: i32 = self
            .year
            .parse()
            .map_err(|_| format!("Invalid year: {}", self.year))?;
        let month: u8 = self
            .month
            .parse()
            .map_err(|_| format!("Invalid month: {}", self.month))?;
        let day: u8 = self
            .day
            .parse()
            .map_err(|_| format!("Invalid day: {}", self.day))?;
        let hour: u8 = self
            .hour
            .parse()
            .map_err(|_| format!("Invalid hour: {}", self.hour))?;
        let minute: u8 = self
            .minutes
            .parse()
            .map_err(|_| format!("Invalid minutes: {}", self.minutes))?;
        let second: u8 = self
            .seconds
            .parse()
            .map_err(|_| format!("Invalid seconds: {}", self.seconds))?;

        let month = time::Month::try_from(month).map_err(|_| "Month must be 1-12".to_string())?;
        let date = time::Date::from_calendar_date(year, month, day)
            .map_err(|_| "Invalid calendar date".to_string())?;
        let clock = time::Time::from_hms(hour, minute, second)
            .map_err(|_| "Invalid time of day".to_string())?;

        Ok(date.with_time(clock).assume_utc())
    }
}
