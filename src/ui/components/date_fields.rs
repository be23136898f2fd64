// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Month/year dropdowns and the day-of-month button grid.

use eframe::egui;

use crate::models::date_time::MONTHS;
use crate::mvu::{AppModel, DAY_SLOTS, Msg};

const DAYS_PER_ROW: usize = 7;

/// Render the date controls and return any messages triggered by the user.
pub fn view(model: &AppModel, ui: &mut egui::Ui) -> Vec<Msg> {
    let mut msgs = Vec::new();

    ui.horizontal(|ui| {
        ui.label("Month:");
        egui::ComboBox::from_id_salt("month_select")
            .width(110.0)
            .selected_text(model.month.map(|m| m.name()).unwrap_or_default())
            .show_ui(ui, |ui| {
                for month in MONTHS {
                    if ui
                        .selectable_label(model.month == Some(month), month.name())
                        .clicked()
                    {
                        msgs.push(Msg::MonthSelected(month));
                    }
                }
            });

        ui.add_space(8.0);
        ui.label("Year:");
        egui::ComboBox::from_id_salt("year_select")
            .width(80.0)
            .selected_text(
                model
                    .year
                    .map(|y| y.to_string())
                    .unwrap_or_default(),
            )
            .show_ui(ui, |ui| {
                for &year in &model.year_choices {
                    if ui
                        .selectable_label(model.year == Some(year), year.to_string())
                        .clicked()
                    {
                        msgs.push(Msg::YearSelected(year));
                    }
                }
            });
    });

    ui.add_space(8.0);
    render_day_grid(model, ui, &mut msgs);

    msgs
}

/// Seven-wide grid of the 31 fixed day buttons.
///
/// Buttons past the month's day count are disabled, so they can never emit
/// a click; the kernel relies on that.
fn render_day_grid(model: &AppModel, ui: &mut egui::Ui, msgs: &mut Vec<Msg>) {
    egui::Grid::new("day_grid")
        .spacing(egui::vec2(4.0, 4.0))
        .show(ui, |ui| {
            for index in 0..DAY_SLOTS {
                let button = egui::Button::new((index + 1).to_string())
                    .selected(model.highlighted_day == Some(index))
                    .min_size(egui::vec2(32.0, 28.0));

                if ui.add_enabled(model.day_enabled[index], button).clicked() {
                    msgs.push(Msg::DayClicked(index));
                }

                if (index + 1) % DAYS_PER_ROW == 0 {
                    ui.end_row();
                }
            }
        });
}
