use std::time::{Duration, Instant};

use walkers::Position;

/// Wall-clock duration of the origin to destination fly-over.
pub const ANIMATION_DURATION: Duration = Duration::from_millis(5000);

/// Animates the plane marker along the route of the currently displayed
/// flight.
///
/// The position is interpolated linearly on each axis from `from` to `to`
/// over [`ANIMATION_DURATION`]. The map view owns a single animation at a
/// time; retargeting replaces the previous run outright, so two runs can
/// never write the marker position concurrently.
pub struct PlaneAnimation {
    from: Position,
    to: Position,
    started: Instant,
}

impl PlaneAnimation {
    pub fn new(from: Position, to: Position) -> Self {
        Self {
            from,
            to,
            started: Instant::now(),
        }
    }

    /// Restarts the animation when the route endpoints changed. A
    /// retarget with the same pair keeps the current run going. Returns
    /// whether the animation was restarted.
    pub fn retarget(&mut self, from: Position, to: Position) -> bool {
        if self.from == from && self.to == to {
            return false;
        }
        *self = Self::new(from, to);
        true
    }

    /// Interpolated position after `elapsed` time. Once progress reaches
    /// 1 the position is pinned exactly to the destination.
    pub fn position_after(&self, elapsed: Duration) -> Position {
        let progress =
            (elapsed.as_secs_f64() / ANIMATION_DURATION.as_secs_f64()).clamp(0.0, 1.0);

        if progress >= 1.0 {
            return self.to;
        }

        Position::from_lat_lon(
            self.from.lat() + (self.to.lat() - self.from.lat()) * progress,
            self.from.lon() + (self.to.lon() - self.from.lon()) * progress,
        )
    }

    /// Current position of the marker.
    pub fn position(&self) -> Position {
        self.position_after(self.started.elapsed())
    }

    pub fn finished(&self) -> bool {
        self.started.elapsed() >= ANIMATION_DURATION
    }

    /// Initial bearing from origin to destination in degrees [0, 360),
    /// used to rotate the plane icon along its route.
    pub fn bearing(&self) -> f32 {
        let lat1 = self.from.lat().to_radians();
        let lon1 = self.from.lon().to_radians();
        let lat2 = self.to.lat().to_radians();
        let lon2 = self.to.lon().to_radians();

        let delta_lon = lon2 - lon1;

        let y = delta_lon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lon.cos();
        let bearing = y.atan2(x).to_degrees();

        bearing.rem_euclid(360.0) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_at_full_duration_is_exactly_destination() {
        let animation = PlaneAnimation::new(
            Position::from_lat_lon(0.0, 0.0),
            Position::from_lat_lon(10.0, 10.0),
        );

        let position = animation.position_after(ANIMATION_DURATION);
        assert_eq!(position.lat(), 10.0);
        assert_eq!(position.lon(), 10.0);
    }

    #[test]
    fn test_position_at_half_duration_is_midpoint() {
        let animation = PlaneAnimation::new(
            Position::from_lat_lon(0.0, 0.0),
            Position::from_lat_lon(10.0, 0.0),
        );

        let position = animation.position_after(ANIMATION_DURATION / 2);
        assert!(
            (position.lat() - 5.0).abs() < 1e-9,
            "Expected latitude near 5.0, got {}",
            position.lat()
        );
        assert!(position.lon().abs() < 1e-9);
    }

    #[test]
    fn test_position_past_duration_stays_pinned() {
        let animation = PlaneAnimation::new(
            Position::from_lat_lon(-3.0, 7.5),
            Position::from_lat_lon(12.0, -1.25),
        );

        let position = animation.position_after(ANIMATION_DURATION * 3);
        assert_eq!(position.lat(), 12.0);
        assert_eq!(position.lon(), -1.25);
    }

    #[test]
    fn test_retarget_restarts_only_on_changed_pair() {
        let from = Position::from_lat_lon(0.0, 0.0);
        let to = Position::from_lat_lon(10.0, 10.0);
        let mut animation = PlaneAnimation::new(from, to);

        assert!(!animation.retarget(from, to));
        assert!(animation.retarget(from, Position::from_lat_lon(20.0, 20.0)));
    }

    #[test]
    fn test_bearing_due_east_is_ninety_degrees() {
        let animation = PlaneAnimation::new(
            Position::from_lat_lon(0.0, 0.0),
            Position::from_lat_lon(0.0, 10.0),
        );

        assert!(
            (animation.bearing() - 90.0).abs() < 0.01,
            "Expected bearing near 90, got {}",
            animation.bearing()
        );
    }

    #[test]
    fn test_bearing_is_normalized() {
        // Heading west comes out as 270 rather than -90.
        let animation = PlaneAnimation::new(
            Position::from_lat_lon(0.0, 10.0),
            Position::from_lat_lon(0.0, 0.0),
        );

        assert!(
            (animation.bearing() - 270.0).abs() < 0.01,
            "Expected bearing near 270, got {}",
            animation.bearing()
        );
    }
}
