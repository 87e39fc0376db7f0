use crate::state::SearchState;

/// The search bar anchored to the top of the map.
///
/// Owns no state of its own: the query text and the lifecycle phase live
/// in [`SearchState`]. When the user submits, the widget starts a new
/// search and hands the generation id back to the application so it can
/// spawn the lookup.
pub struct WidgetSearch;

impl WidgetSearch {
    pub fn new() -> Self {
        Self
    }

    /// Shows the search bar, the loading indicator and the error banner.
    /// Returns the generation of a newly submitted search, if any.
    pub fn show(&mut self, ctx: &egui::Context, search: &mut SearchState) -> Option<u64> {
        let mut submitted = None;

        egui::Area::new("flight_search".into())
            .anchor(egui::Align2::CENTER_TOP, [0.0, 20.0])
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.horizontal(|ui| {
                        let input = ui.add(
                            egui::TextEdit::singleline(&mut search.query)
                                .hint_text("Search by IATA flight number (e.g., AA123)")
                                .desired_width(280.0),
                        );

                        let pressed_enter = input.lost_focus()
                            && ui.input(|i| i.key_pressed(egui::Key::Enter));
                        let clicked = ui
                            .add_enabled(!search.is_loading(), egui::Button::new("Search"))
                            .clicked();

                        if pressed_enter || clicked {
                            submitted = Some(search.begin_search());
                        }
                    });

                    if search.is_loading() {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label("Looking up flight...");
                        });
                    }

                    if let Some(error) = search.error() {
                        ui.colored_label(egui::Color32::RED, error);
                    }
                });
            });

        submitted
    }
}
