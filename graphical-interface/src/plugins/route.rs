use egui::{include_image, Color32, Image, Rect, Response, Shape, Stroke, Vec2};
use walkers::{Plugin, Projector};

use crate::types::Location;

const ROUTE_COLOR: Color32 = Color32::from_rgba_premultiplied(18, 49, 117, 128);

/// Draws the route of the displayed flight: a pin on each endpoint and a
/// dashed line between them.
pub struct Route<'a> {
    origin: &'a Location,
    destination: &'a Location,
}

impl<'a> Route<'a> {
    pub fn new(origin: &'a Location, destination: &'a Location) -> Self {
        Self {
            origin,
            destination,
        }
    }
}

impl Plugin for Route<'_> {
    fn run(self: Box<Self>, ui: &mut egui::Ui, _response: &Response, projector: &Projector) {
        let from = projector.project(self.origin.position()).to_pos2();
        let to = projector.project(self.destination.position()).to_pos2();

        ui.painter().extend(Shape::dashed_line(
            &[from, to],
            Stroke::new(2.0, ROUTE_COLOR),
            10.0,
            10.0,
        ));

        draw_pin(ui, projector, self.origin, "Origin");
        draw_pin(ui, projector, self.destination, "Destination");
    }
}

fn draw_pin(ui: &mut egui::Ui, projector: &Projector, location: &Location, role: &str) {
    let screen_position = projector.project(location.position());

    let symbol_size = Vec2::new(30.0, 30.0);

    // Anchor the pin tip to the position rather than the icon center.
    let rect = {
        let min_pos =
            screen_position.to_pos2() - Vec2::new(symbol_size.x / 2.0, symbol_size.y - 15.0);
        Rect::from_min_size(min_pos, symbol_size)
    };

    let hover_area = Rect::from_center_size(screen_position.to_pos2(), symbol_size);
    let response = ui.allocate_rect(hover_area, egui::Sense::hover());

    let image = if response.hovered() {
        Image::new(include_image!(r"../../location-pin-selected.svg"))
    } else {
        Image::new(include_image!(r"../../location-pin-solid.svg"))
    }
    .fit_to_exact_size(symbol_size);

    ui.put(rect, image);

    response.on_hover_text(format!("{}: {} ({})", role, location.city, location.code));
}
