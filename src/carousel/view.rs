use crate::geometry::Point;

/// Rendering contract for one skill button. The engine owns position,
/// scale, and hit-testability; everything else about the button is the
/// host's business.
pub trait ItemView {
    fn set_position(&mut self, position: Point);
    fn set_scale(&mut self, scale: f64);
    fn set_hit_test_enabled(&mut self, enabled: bool);
}

/// The central toggle button. Its scale animation is fire-and-forget and
/// runs on the host's own clock.
pub trait ToggleButtonView {
    fn animate_scale(&mut self, target_scale: f64, duration: f64);
}

/// The tab/panel system behind the carousel.
pub trait PanelView {
    fn open_panel(&mut self, index: usize);
    fn close_panel(&mut self, index: usize);
    fn close_all_panels(&mut self);
}
