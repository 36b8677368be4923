use std::iter::zip;

use strum::Display;
use thiserror::Error;

use super::layout::Layout;
use super::slots::SlotAssignment;
use super::tween::{ItemTween, Transition};
use super::view::{ItemView, PanelView, ToggleButtonView};
use super::FULL_CIRCLE_DEGREES;
use crate::config::{CarouselConfig, ConfigError};
use crate::events::CarouselEvent;
use crate::geometry::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum CarouselMode {
    Star,
    Semicircle,
}

/// Per-item state mirrored to the item view every frame.
#[derive(Debug, Clone, Copy)]
pub struct Item {
    position: Point,
    scale: f64,
    hit_test_enabled: bool,
}

impl Item {
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn hit_test_enabled(&self) -> bool {
        self.hit_test_enabled
    }
}

#[derive(Error, Debug)]
pub enum SetupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("expected {expected} item views, got {got}")]
    ItemViewCount { expected: usize, got: usize },
}

/// What a finished transition commits.
#[derive(Debug)]
enum Outcome {
    EnterSemicircle,
    EnterStar,
    CommitSlots(SlotAssignment),
}

enum Phase {
    IdleStar,
    IdleSemicircle,
    Transitioning { tween: Transition, outcome: Outcome },
}

/// The carousel controller. Owns the items, the slot permutation, and the
/// single in-flight transition; collaborators are injected at construction
/// and written to once per tick.
pub struct Carousel<I, T, P>
where
    I: ItemView,
    T: ToggleButtonView,
    P: PanelView,
{
    config: CarouselConfig,
    layout: Layout,
    slots: SlotAssignment,
    items: Vec<Item>,
    phase: Phase,
    last_opened: Option<usize>,
    item_views: Vec<I>,
    toggle_button: T,
    panels: P,
}

impl<I, T, P> Carousel<I, T, P>
where
    I: ItemView,
    T: ToggleButtonView,
    P: PanelView,
{
    /// Validates the configuration and collaborator wiring, applies the
    /// initial star layout, and hands back a ready carousel. Failures are
    /// logged and returned; a carousel that fails here never runs.
    pub fn new(
        config: CarouselConfig,
        item_views: Vec<I>,
        toggle_button: T,
        panels: P,
    ) -> Result<Self, SetupError> {
        if let Err(e) = config.validate() {
            log::error!("carousel disabled: {}", e);
            return Err(e.into());
        }
        if item_views.len() != config.item_count {
            let e = SetupError::ItemViewCount {
                expected: config.item_count,
                got: item_views.len(),
            };
            log::error!("carousel disabled: {}", e);
            return Err(e);
        }

        let layout = Layout::new(&config);
        let slots = SlotAssignment::identity(config.item_count);
        let items = vec![
            Item {
                position: Point::default(),
                scale: config.item_scales.default,
                hit_test_enabled: false,
            };
            config.item_count
        ];

        let mut carousel = Self {
            config,
            layout,
            slots,
            items,
            phase: Phase::IdleStar,
            last_opened: None,
            item_views,
            toggle_button,
            panels,
        };
        carousel.apply_star_layout();
        Ok(carousel)
    }

    /// Single dispatch point for host input.
    pub fn handle(&mut self, event: CarouselEvent) {
        match event {
            CarouselEvent::Toggle => self.toggle(),
            CarouselEvent::Select(index) => self.select(index),
            CarouselEvent::Tick(dt) => self.tick(dt),
        }
    }

    /// Flips between the star and semicircle layouts. Dropped while a
    /// transition is in flight.
    pub fn toggle(&mut self) {
        let target = match self.phase {
            Phase::Transitioning { .. } => {
                log::trace!("toggle ignored while a transition is in flight");
                return;
            }
            Phase::IdleStar => CarouselMode::Semicircle,
            Phase::IdleSemicircle => CarouselMode::Star,
        };

        self.set_all_hit_test(true);

        let toggle_scale = match target {
            CarouselMode::Semicircle => self.config.toggle_button_scales.semicircle,
            CarouselMode::Star => self.config.toggle_button_scales.star,
        };
        self.toggle_button
            .animate_scale(toggle_scale, self.config.animation_duration);

        let tween = self.mode_toggle_tween(target);
        let outcome = match target {
            CarouselMode::Semicircle => Outcome::EnterSemicircle,
            CarouselMode::Star => Outcome::EnterStar,
        };
        self.phase = Phase::Transitioning { tween, outcome };
    }

    /// Recenters the arc on the clicked item. Only meaningful while the
    /// semicircle layout is at rest; the panel switch happens on the click,
    /// not when the sweep lands.
    pub fn select(&mut self, index: usize) {
        match self.phase {
            Phase::IdleSemicircle => {}
            Phase::Transitioning { .. } => {
                log::trace!("select({}) ignored while a transition is in flight", index);
                return;
            }
            Phase::IdleStar => {
                log::trace!("select({}) ignored in star layout", index);
                return;
            }
        }
        if index >= self.items.len() {
            log::debug!("select({}) out of range", index);
            return;
        }

        self.panels.close_all_panels();
        self.panels.open_panel(index);
        self.last_opened = Some(index);

        let current_slot = self.slots.slot_of(index);
        let center = self.slots.center_slot();
        if current_slot == center {
            return;
        }

        let shift = center as isize - current_slot as isize;
        let next = self.slots.rotated(shift);
        let tween = self.slot_shift_tween(shift, &next);
        self.phase = Phase::Transitioning {
            tween,
            outcome: Outcome::CommitSlots(next),
        };
    }

    /// Advances the in-flight transition by `dt` seconds. Every item's
    /// position and scale is written before the call returns; the final
    /// tick snaps to exact end values and commits the outcome.
    pub fn tick(&mut self, dt: f64) {
        let Phase::Transitioning { tween, .. } = &mut self.phase else {
            return;
        };

        let frame = tween.step(dt);
        let finished = frame.finished;
        for (index, item_frame) in frame.items.into_iter().enumerate() {
            self.write_item(index, item_frame.position, item_frame.scale);
        }

        if finished
            && let Phase::Transitioning { outcome, .. } =
                std::mem::replace(&mut self.phase, Phase::IdleStar)
        {
            self.finish(outcome);
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::EnterSemicircle => {
                self.apply_arc_layout();
                self.phase = Phase::IdleSemicircle;
                self.panels.close_all_panels();
                // prefer the remembered selection, else whoever sits in the
                // center slot
                let panel = self
                    .last_opened
                    .or_else(|| self.slots.item_in_slot(self.slots.center_slot()));
                if let Some(panel) = panel {
                    self.panels.open_panel(panel);
                }
            }
            Outcome::EnterStar => {
                self.apply_star_layout();
                self.phase = Phase::IdleStar;
                self.panels.close_all_panels();
                self.set_all_hit_test(false);
            }
            Outcome::CommitSlots(next) => {
                self.slots = next;
                self.apply_arc_layout();
                self.phase = Phase::IdleSemicircle;
            }
        }
    }

    fn mode_toggle_tween(&self, target: CarouselMode) -> Transition {
        let items = (0..self.items.len())
            .map(|index| {
                let start = self.items[index].position;
                let start_scale = self.items[index].scale;
                let (end, end_scale) = match target {
                    CarouselMode::Semicircle => {
                        let slot = self.slots.slot_of(index);
                        (
                            self.layout.arc_point(slot),
                            self.config.item_scales.for_role(self.slots.role_of(slot)),
                        )
                    }
                    CarouselMode::Star => (
                        self.layout.star_point(index),
                        self.config.item_scales.default,
                    ),
                };
                ItemTween::swing(start, end, start_scale, end_scale)
            })
            .collect();
        Transition::new(items, self.config.animation_duration)
    }

    fn slot_shift_tween(&self, shift: isize, next: &SlotAssignment) -> Transition {
        let radius = self.layout.radius();
        let items = (0..self.items.len())
            .map(|index| {
                let old_slot = self.slots.slot_of(index);
                let new_slot = next.slot_of(index);
                let start = self.layout.arc_angle(old_slot);
                let mut end = self.layout.arc_angle(new_slot);
                // unwind once so every item sweeps the same way as the shift
                if shift > 0 && end < start {
                    end += FULL_CIRCLE_DEGREES;
                } else if shift < 0 && end > start {
                    end -= FULL_CIRCLE_DEGREES;
                }

                let start_scale = self.config.item_scales.for_role(self.slots.role_of(old_slot));
                let end_scale = self.config.item_scales.for_role(next.role_of(new_slot));
                ItemTween::sweep(start, end, radius, start_scale, end_scale)
            })
            .collect();
        Transition::new(items, self.config.animation_duration)
    }

    fn apply_star_layout(&mut self) {
        for index in 0..self.items.len() {
            let position = self.layout.star_point(index);
            let scale = self.config.item_scales.default;
            self.write_item(index, position, scale);
        }
    }

    fn apply_arc_layout(&mut self) {
        for index in 0..self.items.len() {
            let slot = self.slots.slot_of(index);
            let scale = self.config.item_scales.for_role(self.slots.role_of(slot));
            self.write_item(index, self.layout.arc_point(slot), scale);
        }
    }

    fn write_item(&mut self, index: usize, position: Point, scale: f64) {
        let item = &mut self.items[index];
        item.position = position;
        item.scale = scale;

        let view = &mut self.item_views[index];
        view.set_position(position);
        view.set_scale(scale);
    }

    fn set_all_hit_test(&mut self, enabled: bool) {
        for (item, view) in zip(&mut self.items, &mut self.item_views) {
            item.hit_test_enabled = enabled;
            view.set_hit_test_enabled(enabled);
        }
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Transitioning { .. })
    }

    /// The committed layout mode; a transition still reports the mode it
    /// started from until it completes.
    pub fn mode(&self) -> CarouselMode {
        match &self.phase {
            Phase::IdleStar => CarouselMode::Star,
            Phase::IdleSemicircle => CarouselMode::Semicircle,
            Phase::Transitioning { outcome, .. } => match outcome {
                Outcome::EnterSemicircle => CarouselMode::Star,
                Outcome::EnterStar | Outcome::CommitSlots(_) => CarouselMode::Semicircle,
            },
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn animation_duration(&self) -> f64 {
        self.config.animation_duration
    }

    pub fn layout_radius(&self) -> f64 {
        self.layout.radius()
    }

    pub fn slot_of(&self, item: usize) -> usize {
        self.slots.slot_of(item)
    }

    pub fn center_slot(&self) -> usize {
        self.slots.center_slot()
    }

    pub fn last_opened(&self) -> Option<usize> {
        self.last_opened
    }
}
