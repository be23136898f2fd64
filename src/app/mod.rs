//! Application entry point wiring egui/eframe to launch the calendar window.

use anyhow::anyhow;
use eframe::egui;
use egui_phosphor::Variant;

use crate::models::date_time::DateTimeRecord;
use crate::ui::CalendarApp;

/// Bootstrap the desktop window and run the egui event loop.
///
/// Blocks until the window closes and returns the confirmed record, or
/// `None` when the window was closed without confirming a selection.
pub fn run() -> anyhow::Result<Option<DateTimeRecord>> {
    // Register Phosphor icon font.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);

    // The confirmed record outlives the event loop via this channel.
    let (result_tx, result_rx) = crossbeam_channel::bounded::<DateTimeRecord>(1);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 300.0])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "Calendar",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(CalendarApp::new(result_tx)))
        }),
    )
    .map_err(|err| anyhow!("failed to run calendar window: {err}"))?;

    Ok(result_rx.try_recv().ok())
}
