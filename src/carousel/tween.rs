use super::STAGGER_STEP;
use crate::geometry::{self, Point};

/// Eased progress that decelerates into both endpoints.
pub fn smoothstep(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Sweep direction of a path around the carousel center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepDirection {
    Clockwise,
    CounterClockwise,
}

impl SweepDirection {
    /// Derived from the sign of the shortest signed arc between two points.
    pub fn between(start: Point, end: Point) -> Self {
        let delta = geometry::shortest_arc_delta(start.angle_degrees(), end.angle_degrees());
        if delta < 0.0 {
            Self::Clockwise
        } else {
            Self::CounterClockwise
        }
    }
}

/// Shifts one item's progress so items on the leading edge of a sweep set
/// off before trailing ones. Clamped to [0, 1].
pub fn staggered_progress(index: usize, count: usize, direction: SweepDirection, t: f64) -> f64 {
    let rank = match direction {
        SweepDirection::Clockwise => index,
        SweepDirection::CounterClockwise => count - 1 - index,
    };
    let delay = rank as f64 * STAGGER_STEP / count as f64;
    (t - delay).clamp(0.0, 1.0)
}

#[derive(Debug, Clone)]
enum ItemPath {
    /// Swing between two points along the shortest arc, staggered by index.
    Swing {
        start: Point,
        end: Point,
        direction: SweepDirection,
    },
    /// Sweep the angle directly at a fixed radius. The end angle must
    /// already be unwound past +-180 so the sweep never reverses.
    Sweep {
        start_degrees: f64,
        end_degrees: f64,
        radius: f64,
    },
}

/// One item's course through a transition.
#[derive(Debug, Clone)]
pub struct ItemTween {
    path: ItemPath,
    start_scale: f64,
    end_scale: f64,
}

impl ItemTween {
    pub fn swing(start: Point, end: Point, start_scale: f64, end_scale: f64) -> Self {
        Self {
            path: ItemPath::Swing {
                start,
                end,
                direction: SweepDirection::between(start, end),
            },
            start_scale,
            end_scale,
        }
    }

    pub fn sweep(
        start_degrees: f64,
        end_degrees: f64,
        radius: f64,
        start_scale: f64,
        end_scale: f64,
    ) -> Self {
        Self {
            path: ItemPath::Sweep {
                start_degrees,
                end_degrees,
                radius,
            },
            start_scale,
            end_scale,
        }
    }

    fn frame_at(&self, index: usize, count: usize, eased_t: f64) -> ItemFrame {
        let position = match &self.path {
            ItemPath::Swing {
                start,
                end,
                direction,
            } => {
                let staggered = staggered_progress(index, count, *direction, eased_t);
                geometry::lerp_circular(*start, *end, staggered)
            }
            ItemPath::Sweep {
                start_degrees,
                end_degrees,
                radius,
            } => {
                let angle = geometry::lerp(*start_degrees, *end_degrees, eased_t);
                geometry::arc_position(angle, *radius)
            }
        };

        ItemFrame {
            position,
            scale: geometry::lerp(self.start_scale, self.end_scale, eased_t),
        }
    }

    fn end_frame(&self) -> ItemFrame {
        let position = match &self.path {
            ItemPath::Swing { end, .. } => *end,
            ItemPath::Sweep {
                end_degrees,
                radius,
                ..
            } => geometry::arc_position(*end_degrees, *radius),
        };

        ItemFrame {
            position,
            scale: self.end_scale,
        }
    }
}

/// Position and scale of one item for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemFrame {
    pub position: Point,
    pub scale: f64,
}

/// All items' frames for one tick, plus whether the transition is done.
#[derive(Debug, Clone)]
pub struct Frame {
    pub items: Vec<ItemFrame>,
    pub finished: bool,
}

/// A resumable, tick-driven animation over every item at once. The
/// controller advances it once per frame-clock tick and discards it when it
/// reports completion; there is no cancellation path.
#[derive(Debug, Clone)]
pub struct Transition {
    items: Vec<ItemTween>,
    duration: f64,
    elapsed: f64,
}

impl Transition {
    pub fn new(items: Vec<ItemTween>, duration: f64) -> Self {
        Self {
            items,
            duration,
            elapsed: 0.0,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Advance by `dt` seconds and produce every item's frame. Once elapsed
    /// time reaches the duration, the frame snaps to exact end values.
    pub fn step(&mut self, dt: f64) -> Frame {
        self.elapsed += dt;

        if self.elapsed >= self.duration {
            return Frame {
                items: self.items.iter().map(ItemTween::end_frame).collect(),
                finished: true,
            };
        }

        let t = smoothstep(self.elapsed / self.duration);
        let count = self.items.len();
        Frame {
            items: self
                .items
                .iter()
                .enumerate()
                .map(|(index, item)| item.frame_at(index, count, t))
                .collect(),
            finished: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn smoothstep_eases_both_ends() {
        assert_abs_diff_eq!(smoothstep(0.0), 0.0);
        assert_abs_diff_eq!(smoothstep(0.5), 0.5);
        assert_abs_diff_eq!(smoothstep(1.0), 1.0);
        assert_abs_diff_eq!(smoothstep(-2.0), 0.0);
        assert_abs_diff_eq!(smoothstep(3.0), 1.0);
        // slow start, slow finish
        assert!(smoothstep(0.1) < 0.1);
        assert!(smoothstep(0.9) > 0.9);
    }

    #[test]
    fn stagger_leads_from_the_sweep_edge() {
        let n = 5;
        // clockwise: item 0 moves first
        assert_abs_diff_eq!(
            staggered_progress(0, n, SweepDirection::Clockwise, 0.5),
            0.5
        );
        assert!(staggered_progress(4, n, SweepDirection::Clockwise, 0.5) < 0.5);
        // counter-clockwise: the ramp reverses
        assert_abs_diff_eq!(
            staggered_progress(4, n, SweepDirection::CounterClockwise, 0.5),
            0.5
        );
        assert!(staggered_progress(0, n, SweepDirection::CounterClockwise, 0.5) < 0.5);
    }

    #[test]
    fn stagger_is_clamped() {
        assert_abs_diff_eq!(
            staggered_progress(4, 5, SweepDirection::Clockwise, 0.0),
            0.0
        );
        assert_abs_diff_eq!(
            staggered_progress(0, 5, SweepDirection::Clockwise, 1.2),
            1.0
        );
    }

    #[test]
    fn sweep_direction_follows_the_short_arc() {
        let from = geometry::arc_position(10.0, 100.0);
        let ccw = geometry::arc_position(60.0, 100.0);
        let cw = geometry::arc_position(-40.0, 100.0);
        assert_eq!(
            SweepDirection::between(from, ccw),
            SweepDirection::CounterClockwise
        );
        assert_eq!(SweepDirection::between(from, cw), SweepDirection::Clockwise);
    }

    #[test]
    fn transition_snaps_exactly_at_completion() {
        let start = geometry::arc_position(0.0, 100.0);
        let end = geometry::arc_position(90.0, 100.0);
        let mut transition = Transition::new(vec![ItemTween::swing(start, end, 1.0, 1.3)], 0.5);

        let frame = transition.step(0.2);
        assert!(!frame.finished);
        assert_eq!(frame.items.len(), 1);

        let frame = transition.step(0.4);
        assert!(frame.finished);
        assert!(transition.is_finished());
        assert_eq!(frame.items[0].position, end);
        assert_abs_diff_eq!(frame.items[0].scale, 1.3);
    }

    #[test]
    fn swing_frames_stay_on_the_short_arc() {
        let start = geometry::arc_position(170.0, 100.0);
        let end = geometry::arc_position(-170.0, 100.0);
        let mut transition = Transition::new(vec![ItemTween::swing(start, end, 1.0, 1.0)], 1.0);

        let frame = transition.step(0.5);
        let angle = frame.items[0].position.angle_degrees();
        // halfway through, the item sits near the 180deg seam
        assert!(angle.abs() > 170.0);
    }

    #[test]
    fn sweep_follows_the_unwound_angle() {
        // a shift that was unwound to sweep forward through 360
        let mut transition = Transition::new(vec![ItemTween::sweep(350.0, 370.0, 100.0, 1.0, 1.0)], 1.0);

        let frame = transition.step(0.5);
        let expected = geometry::arc_position(360.0, 100.0);
        assert_abs_diff_eq!(frame.items[0].position.x, expected.x, epsilon = 1e-9);
        assert_abs_diff_eq!(frame.items[0].position.y, expected.y, epsilon = 1e-9);
    }

    #[test]
    fn every_item_gets_a_frame_each_step() {
        let tweens: Vec<ItemTween> = (0..5)
            .map(|i| {
                let start = geometry::arc_position(i as f64 * 30.0, 100.0);
                let end = geometry::arc_position(i as f64 * 30.0 + 45.0, 100.0);
                ItemTween::swing(start, end, 1.0, 1.0)
            })
            .collect();
        let mut transition = Transition::new(tweens, 1.0);
        assert_eq!(transition.step(0.1).items.len(), 5);
        assert_eq!(transition.step(0.1).items.len(), 5);
    }
}
