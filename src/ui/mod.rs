// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Top-level egui application shell for the calendar window.
//! Handles layout and routing of view messages through the MVU kernel.

pub mod components;

use eframe::egui;

use crate::models::date_time::DateTimeRecord;
use crate::mvu::{self, AppModel, Msg};
use crate::ui::components::{date_fields, time_fields};

/// Stateful egui application for picking a date and time.
pub struct CalendarApp {
    model: AppModel,
    inbox: Vec<Msg>,
    result_tx: crossbeam_channel::Sender<DateTimeRecord>,
}

impl CalendarApp {
    /// Build the app around a channel that receives the confirmed record.
    pub fn new(result_tx: crossbeam_channel::Sender<DateTimeRecord>) -> Self {
        Self {
            model: AppModel::default(),
            inbox: Vec::new(),
            result_tx,
        }
    }
}

impl eframe::App for CalendarApp {
    // eframe 0.34 requires `ui`, but the runner still invokes `update` every
    // frame, where all per-frame work lives; this stays a no-op.
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply messages produced by the previous frame's views.
        for msg in std::mem::take(&mut self.inbox) {
            mvu::update(&mut self.model, msg);
        }

        if std::mem::take(&mut self.model.close_requested) {
            if let Some(record) = self.model.result().cloned() {
                let _ = self.result_tx.send(record);
            }
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.label("Select date and time");
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal_top(|ui| {
                ui.vertical(|ui| {
                    let date_msgs = date_fields::view(&self.model, ui);
                    self.inbox.extend(date_msgs);
                });

                ui.separator();

                ui.vertical(|ui| {
                    let time_msgs = time_fields::view(&self.model, ui);
                    self.inbox.extend(time_msgs);

                    ui.add_space(24.0);
                    self.render_selection_summary(ui);

                    ui.add_space(16.0);
                    self.render_select_button(ui);
                });
            });
        });
    }
}

impl CalendarApp {
    /// Show the combined date/time text once both parts are chosen.
    fn render_selection_summary(&self, ui: &mut egui::Ui) {
        if !self.model.combined_label.is_empty() {
            ui.label(egui::RichText::new(&self.model.combined_label).strong());
        }
    }

    /// Render the confirm button. Confirmation with an incomplete selection
    /// is a silent no-op in the kernel, so the button stays enabled.
    fn render_select_button(&mut self, ui: &mut egui::Ui) {
        let button = egui::Button::new(format!("{} Select", egui_phosphor::regular::CHECK))
            .min_size(egui::vec2(120.0, 40.0));

        if ui.add(button).clicked() {
            self.inbox.push(Msg::ConfirmClicked);
        }
    }
}
