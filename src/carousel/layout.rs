use super::{FIVE_ITEM_STAR_ANGLES, FULL_CIRCLE_DEGREES, STAR_TOP_DEGREES};
use crate::config::CarouselConfig;
use crate::geometry::{self, Point};

/// Star layout angles in degrees, one per item index. Five items get the
/// hand-tuned table; any other count is spaced evenly, clockwise from the
/// top.
pub fn star_angles(count: usize) -> Vec<f64> {
    if count == FIVE_ITEM_STAR_ANGLES.len() {
        return FIVE_ITEM_STAR_ANGLES.to_vec();
    }

    let step = FULL_CIRCLE_DEGREES / count as f64;
    (0..count)
        .map(|i| STAR_TOP_DEGREES - i as f64 * step)
        .collect()
}

/// Arc layout angles in degrees, one per slot, spread across `span_degrees`
/// and symmetric about `center_degrees`. Needs at least two slots.
pub fn arc_angles(count: usize, span_degrees: f64, center_degrees: f64) -> Vec<f64> {
    debug_assert!(count >= 2);

    let step = span_degrees / (count - 1) as f64;
    let start = center_degrees - span_degrees / 2.0;
    (0..count).map(|s| start + s as f64 * step).collect()
}

/// Angle tables for one configured session, computed once and immutable
/// afterward.
#[derive(Debug, Clone)]
pub struct Layout {
    star: Vec<f64>,
    arc: Vec<f64>,
    radius: f64,
}

impl Layout {
    pub fn new(config: &CarouselConfig) -> Self {
        Self {
            star: star_angles(config.item_count),
            arc: arc_angles(
                config.item_count,
                config.arc_span_degrees,
                config.arc_center_degrees(),
            ),
            radius: config.layout_radius,
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn arc_angle(&self, slot: usize) -> f64 {
        self.arc[slot]
    }

    pub fn star_point(&self, item: usize) -> Point {
        geometry::star_position(self.star[item], self.radius)
    }

    pub fn arc_point(&self, slot: usize) -> Point {
        geometry::arc_position(self.arc[slot], self.radius)
    }
}
