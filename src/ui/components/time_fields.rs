// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Hour/minute/second dropdowns for the time-of-day selection.

use eframe::egui;

use crate::mvu::{AppModel, Msg};

/// Render the time controls and return any messages triggered by the user.
pub fn view(model: &AppModel, ui: &mut egui::Ui) -> Vec<Msg> {
    let mut msgs = Vec::new();

    ui.horizontal(|ui| {
        time_combo(ui, "Hours", model.hour, 24, &mut msgs, Msg::HourSelected);
        time_combo(ui, "Minutes", model.minute, 60, &mut msgs, Msg::MinuteSelected);
        time_combo(ui, "Seconds", model.second, 60, &mut msgs, Msg::SecondSelected);
    });

    msgs
}

/// One labeled dropdown over `0..limit`, shown unpadded like the original
/// combobox contents.
fn time_combo(
    ui: &mut egui::Ui,
    label: &str,
    current: Option<u8>,
    limit: u8,
    msgs: &mut Vec<Msg>,
    to_msg: fn(u8) -> Msg,
) {
    ui.vertical(|ui| {
        ui.label(label);
        egui::ComboBox::from_id_salt(label)
            .width(56.0)
            .selected_text(current.map(|v| v.to_string()).unwrap_or_default())
            .show_ui(ui, |ui| {
                for value in 0..limit {
                    if ui
                        .selectable_label(current == Some(value), value.to_string())
                        .clicked()
                    {
                        msgs.push(to_msg(value));
                    }
                }
            });
    });
}
