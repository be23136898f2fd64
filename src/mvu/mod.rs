// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Model-View-Update kernel for the date/time selection state.
//!
//! All selection truth lives in [`AppModel`]; the egui views only read it
//! and emit [`Msg`] values that are applied here. This keeps the selection
//! rules fully testable without a window.

use crate::models::date_time::{DateTimeRecord, Month, days_in_month, year_choices};

/// Number of day buttons in the grid (fixed slots for days 1-31).
pub const DAY_SLOTS: usize = 31;

/// Top-level selection state, owned by the controller for one window session.
pub struct AppModel {
    /// Selected month, if any.
    pub month: Option<Month>,
    /// Selected year, if any. The dropdown only offers 1990..=currentYear.
    pub year: Option<i32>,
    /// Selected hour (0-23), if any.
    pub hour: Option<u8>,
    /// Selected minute (0-59), if any.
    pub minute: Option<u8>,
    /// Selected second (0-59), if any.
    pub second: Option<u8>,
    /// Index of the last-clicked day button; at most one at a time.
    pub highlighted_day: Option<usize>,
    /// Enabled flags for the day buttons, recomputed on month/year change.
    pub day_enabled: [bool; DAY_SLOTS],
    /// Intermediate `"M/D/YYYY"` string, set when a day is clicked.
    pub date_text: String,
    /// Intermediate `"HH:MM:SS"` string, set once all time fields are chosen.
    pub time_text: String,
    /// Combined display text, shown only when both parts above are non-empty.
    pub combined_label: String,
    /// Record built by the last successful confirmation.
    pub result: Option<DateTimeRecord>,
    /// Set on successful confirmation; the shell closes the window on it.
    pub close_requested: bool,
    /// Years offered by the year dropdown, newest first.
    pub year_choices: Vec<i32>,
}

impl Default for AppModel {
    fn default() -> Self {
        Self {
            month: None,
            year: None,
            hour: None,
            minute: None,
            second: None,
            highlighted_day: None,
            day_enabled: [false; DAY_SLOTS],
            date_text: String::new(),
            time_text: String::new(),
            combined_label: String::new(),
            result: None,
            close_requested: false,
            year_choices: year_choices(),
        }
    }
}

impl AppModel {
    /// Day-of-month implied by the highlighted button (1-31).
    pub fn selected_day(&self) -> Option<u8> {
        self.highlighted_day.map(|index| index as u8 + 1)
    }

    /// Record built by the last successful confirmation, if any.
    pub fn result(&self) -> Option<&DateTimeRecord> {
        self.result.as_ref()
    }
}

/// Messages emitted by the date and time views.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    MonthSelected(Month),
    YearSelected(i32),
    DayClicked(usize),
    HourSelected(u8),
    MinuteSelected(u8),
    SecondSelected(u8),
    ConfirmClicked,
}

/// Apply a message to the selection model.
pub fn update(model: &mut AppModel, msg: Msg) {
    match msg {
        Msg::MonthSelected(month) => {
            model.month = Some(month);
            refresh_day_range(model);
        }
        Msg::YearSelected(year) => {
            model.year = Some(year);
            refresh_day_range(model);
        }
        Msg::DayClicked(index) => select_day(model, index),
        Msg::HourSelected(hour) => {
            model.hour = Some(hour);
            refresh_time_text(model);
        }
        Msg::MinuteSelected(minute) => {
            model.minute = Some(minute);
            refresh_time_text(model);
        }
        Msg::SecondSelected(second) => {
            model.second = Some(second);
            refresh_time_text(model);
        }
        Msg::ConfirmClicked => confirm(model),
    }
}

/// Recompute which day buttons are enabled for the selected month/year.
///
/// Does nothing until both month and year are chosen. The highlight and the
/// intermediate date/time strings are deliberately left untouched; only the
/// combined label is cleared.
fn refresh_day_range(model: &mut AppModel) {
    let (Some(month), Some(year)) = (model.month, model.year) else {
        return;
    };

    let days = days_in_month(month, year) as usize;
    for (index, enabled) in model.day_enabled.iter_mut().enumerate() {
        *enabled = index < days;
    }
    model.combined_label.clear();
}

/// Move the highlight to the clicked day and rebuild the date string.
fn select_day(model: &mut AppModel, index: usize) {
    if index >= DAY_SLOTS {
        return;
    }
    model.highlighted_day = Some(index);

    // The grid only emits clicks for enabled buttons, which in turn exist
    // only once month and year are chosen.
    if let (Some(month), Some(year)) = (model.month, model.year) {
        model.date_text = format!("{}/{}/{}", month.ordinal(), index + 1, year);
        refresh_combined_label(model);
    }
}

/// Rebuild the `"HH:MM:SS"` string once all three time fields are chosen.
fn refresh_time_text(model: &mut AppModel) {
    let (Some(hour), Some(minute), Some(second)) = (model.hour, model.minute, model.second) else {
        return;
    };

    model.time_text = format!("{hour:02}:{minute:02}:{second:02}");
    refresh_combined_label(model);
}

fn refresh_combined_label(model: &mut AppModel) {
    if !model.date_text.is_empty() && !model.time_text.is_empty() {
        model.combined_label = format!("{}   {}", model.date_text, model.time_text);
    }
}

/// Build the final record and request window close.
///
/// Silent no-op while any component is missing: no error is surfaced and
/// the window stays open.
fn confirm(model: &mut AppModel) {
    let (Some(month), Some(year), Some(day), Some(hour), Some(minute), Some(second)) = (
        model.month,
        model.year,
        model.selected_day(),
        model.hour,
        model.minute,
        model.second,
    ) else {
        log::debug!("confirm ignored: selection incomplete");
        return;
    };

    let record = DateTimeRecord::new(month, year, day, hour, minute, second);
    log::info!(
        "selection confirmed: {}-{}-{} {}:{}:{}",
        record.year,
        record.month,
        record.day,
        record.hour,
        record.minutes,
        record.seconds
    );
    model.result = Some(record);
    model.close_requested = true;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enabled_count(model: &AppModel) -> usize {
        model.day_enabled.iter().filter(|e| **e).count()
    }

    fn pick_full_selection(model: &mut AppModel) {
        update(model, Msg::MonthSelected(Month::March));
        update(model, Msg::YearSelected(2024));
        update(model, Msg::DayClicked(4)); // day 5
        update(model, Msg::HourSelected(9));
        update(model, Msg::MinuteSelected(3));
        update(model, Msg::SecondSelected(0));
    }

    #[test]
    fn day_grid_stays_disabled_until_month_and_year_chosen() {
        let mut model = AppModel::default();

        update(&mut model, Msg::MonthSelected(Month::January));
        assert_eq!(enabled_count(&model), 0);

        update(&mut model, Msg::YearSelected(2020));
        assert_eq!(enabled_count(&model), 31);
    }

    #[test]
    fn month_year_change_enables_exactly_the_valid_days() {
        let mut model = AppModel::default();
        update(&mut model, Msg::YearSelected(2023));

        update(&mut model, Msg::MonthSelected(Month::January));
        assert_eq!(enabled_count(&model), 31);
        assert!(model.day_enabled[30]);

        update(&mut model, Msg::MonthSelected(Month::April));
        assert_eq!(enabled_count(&model), 30);
        assert!(model.day_enabled[29]);
        assert!(!model.day_enabled[30]);

        update(&mut model, Msg::MonthSelected(Month::February));
        assert_eq!(enabled_count(&model), 28);
        assert!(model.day_enabled[27]);
        assert!(!model.day_enabled[28]);
    }

    #[test]
    fn february_leap_rule_is_divisible_by_four() {
        let mut model = AppModel::default();
        update(&mut model, Msg::MonthSelected(Month::February));

        update(&mut model, Msg::YearSelected(2024));
        assert_eq!(enabled_count(&model), 29);

        update(&mut model, Msg::YearSelected(2023));
        assert_eq!(enabled_count(&model), 28);

        // Simplified rule: 1900 is treated as a leap year.
        update(&mut model, Msg::YearSelected(1900));
        assert_eq!(enabled_count(&model), 29);
    }

    #[test]
    fn day_click_highlights_one_button_at_a_time() {
        let mut model = AppModel::default();
        update(&mut model, Msg::MonthSelected(Month::May));
        update(&mut model, Msg::YearSelected(2021));

        update(&mut model, Msg::DayClicked(2));
        assert_eq!(model.highlighted_day, Some(2));

        // Idempotent on the same index.
        update(&mut model, Msg::DayClicked(2));
        assert_eq!(model.highlighted_day, Some(2));

        // A different index moves the single highlight.
        update(&mut model, Msg::DayClicked(10));
        assert_eq!(model.highlighted_day, Some(10));
        assert_eq!(model.selected_day(), Some(11));
    }

    #[test]
    fn day_click_builds_unpadded_date_text() {
        let mut model = AppModel::default();
        update(&mut model, Msg::MonthSelected(Month::March));
        update(&mut model, Msg::YearSelected(2024));

        update(&mut model, Msg::DayClicked(4));

        assert_eq!(model.date_text, "3/5/2024");
    }

    #[test]
    fn time_text_waits_for_all_three_fields() {
        let mut model = AppModel::default();

        update(&mut model, Msg::HourSelected(7));
        update(&mut model, Msg::MinuteSelected(5));
        assert!(model.time_text.is_empty());

        update(&mut model, Msg::SecondSelected(9));
        assert_eq!(model.time_text, "07:05:09");
    }

    #[test]
    fn combined_label_requires_both_date_and_time() {
        let mut model = AppModel::default();
        update(&mut model, Msg::MonthSelected(Month::March));
        update(&mut model, Msg::YearSelected(2024));
        update(&mut model, Msg::DayClicked(4));
        assert!(model.combined_label.is_empty());

        update(&mut model, Msg::HourSelected(9));
        update(&mut model, Msg::MinuteSelected(3));
        update(&mut model, Msg::SecondSelected(0));
        assert_eq!(model.combined_label, "3/5/2024   09:03:00");
    }

    #[test]
    fn month_year_change_clears_combined_label() {
        let mut model = AppModel::default();
        pick_full_selection(&mut model);
        assert!(!model.combined_label.is_empty());

        update(&mut model, Msg::MonthSelected(Month::April));

        assert!(model.combined_label.is_empty());
        // The highlight and intermediate strings survive the change.
        assert_eq!(model.highlighted_day, Some(4));
        assert_eq!(model.time_text, "09:03:00");
    }

    #[test]
    fn confirm_builds_zero_padded_record() {
        let mut model = AppModel::default();
        pick_full_selection(&mut model);

        update(&mut model, Msg::ConfirmClicked);

        let record = model.result().expect("record expected");
        assert_eq!(record.year, "2024");
        assert_eq!(record.month, "03");
        assert_eq!(record.day, "05");
        assert_eq!(record.hour, "09");
        assert_eq!(record.minutes, "03");
        assert_eq!(record.seconds, "00");
        assert!(model.close_requested);
    }

    #[test]
    fn confirm_is_a_silent_noop_while_incomplete() {
        let mut model = AppModel::default();
        update(&mut model, Msg::MonthSelected(Month::March));
        update(&mut model, Msg::YearSelected(2024));
        update(&mut model, Msg::DayClicked(4));
        update(&mut model, Msg::HourSelected(9));
        update(&mut model, Msg::MinuteSelected(3));
        // Second is still missing.

        update(&mut model, Msg::ConfirmClicked);

        assert!(model.result().is_none());
        assert!(!model.close_requested);
    }

    #[test]
    fn confirm_requires_a_clicked_day() {
        let mut model = AppModel::default();
        update(&mut model, Msg::MonthSelected(Month::March));
        update(&mut model, Msg::YearSelected(2024));
        update(&mut model, Msg::HourSelected(9));
        update(&mut model, Msg::MinuteSelected(3));
        update(&mut model, Msg::SecondSelected(0));

        update(&mut model, Msg::ConfirmClicked);

        assert!(model.result().is_none());
        assert!(!model.close_requested);
    }

    #[test]
    fn result_is_absent_before_first_confirmation() {
        let model = AppModel::default();
        assert!(model.result().is_none());
    }

    #[test]
    fn out_of_range_day_index_is_ignored() {
        let mut model = AppModel::default();
        update(&mut model, Msg::MonthSelected(Month::March));
        update(&mut model, Msg::YearSelected(2024));

        update(&mut model, Msg::DayClicked(DAY_SLOTS));

        assert_eq!(model.highlighted_day, None);
        assert!(model.date_text.is_empty());
    }
}
