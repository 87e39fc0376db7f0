use egui::{include_image, Image, Rect, Response, Vec2};
use walkers::{Plugin, Projector};

use crate::animation::PlaneAnimation;

/// Draws the plane icon at the animation's current position, rotated to
/// the route bearing. While the animation is still running it requests a
/// repaint, so the marker keeps moving at the display refresh rate; once
/// the destination is reached the redraw loop goes quiet again.
pub struct PlaneMarker<'a> {
    animation: &'a PlaneAnimation,
}

impl<'a> PlaneMarker<'a> {
    pub fn new(animation: &'a PlaneAnimation) -> Self {
        Self { animation }
    }
}

impl Plugin for PlaneMarker<'_> {
    fn run(self: Box<Self>, ui: &mut egui::Ui, _response: &Response, projector: &Projector) {
        let screen_position = projector.project(self.animation.position());

        let symbol_size = Vec2::new(30.0, 30.0);

        let rect = Rect::from_center_size(screen_position.to_pos2(), symbol_size);

        let image = Image::new(include_image!(r"../../plane-solid.svg"))
            .fit_to_exact_size(symbol_size)
            .rotate(self.animation.bearing().to_radians(), Vec2::splat(0.5));

        ui.put(rect, image);

        if !self.animation.finished() {
            ui.ctx().request_repaint();
        }
    }
}
