use chrono::{DateTime, Utc};
use egui::{Color32, RichText};

use crate::format::{calendar_export_url, duration_text, stopover_text};
use crate::types::{FlightRecord, Location};

/// Card window with the details of the flight found by the last search.
pub struct WidgetFlight {
    pub flight: FlightRecord,
}

impl WidgetFlight {
    pub fn new(flight: FlightRecord) -> Self {
        Self { flight }
    }

    /// Shows the card. Returns `false` once the user closes it.
    pub fn show(&mut self, ctx: &egui::Context) -> bool {
        let mut open = true;
        let screen_width = ctx.screen_rect().width();

        egui::Window::new(format!("Flight {}", self.flight.flight_number))
            .resizable(false)
            .movable(false)
            .collapsible(true)
            .open(&mut open)
            .fixed_pos([screen_width - 385., 20.])
            .show(ctx, |ui| {
                ui.visuals_mut().override_text_color = Some(egui::Color32::WHITE);
                ui.visuals_mut().widgets.noninteractive.bg_fill = egui::Color32::from_gray(30);

                ui.label(
                    RichText::new(&self.flight.airline)
                        .strong()
                        .size(24.0)
                        .color(Color32::from_rgb(0, 150, 255)),
                );
                ui.label(RichText::new(&self.flight.flight_number).size(16.0));
                ui.separator();

                endpoint_section(ui, "Origin", &self.flight.origin, self.flight.start_time);
                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    ui.label(RichText::new("Duration:").size(16.0).strong());
                    ui.label(
                        RichText::new(duration_text(self.flight.start_time, self.flight.end_time))
                            .size(16.0),
                    );
                });
                ui.add_space(10.0);

                endpoint_section(
                    ui,
                    "Destination",
                    &self.flight.destination,
                    self.flight.end_time,
                );

                if let Some(stopovers) = stopover_text(&self.flight.stopovers) {
                    ui.add_space(10.0);
                    ui.separator();
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("Stopover:").size(16.0).strong());
                        ui.label(RichText::new(stopovers).size(16.0));
                    });
                }

                ui.add_space(10.0);
                ui.separator();
                if ui.button("Add to Google Calendar").clicked() {
                    ui.ctx()
                        .open_url(egui::OpenUrl::new_tab(calendar_export_url(&self.flight)));
                }
            });

        open
    }
}

fn endpoint_section(ui: &mut egui::Ui, title: &str, location: &Location, time: DateTime<Utc>) {
    ui.label(RichText::new(title).strong().size(20.0));
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(&location.code)
                .strong()
                .size(18.0)
                .color(Color32::from_rgb(0, 150, 255)),
        );
        ui.label(RichText::new(&location.city).size(16.0));
    });
    ui.horizontal(|ui| {
        ui.label(RichText::new(time.format("%H:%M").to_string()).size(16.0).strong());
        ui.label(RichText::new(format!("({})", location.timezone)).size(12.0));
    });
    ui.label(RichText::new(time.format("%a, %b %d %Y").to_string()).size(12.0));
}
