pub mod layout;
pub mod model;
pub mod slots;
pub mod tween;
pub mod view;

pub use model::{Carousel, CarouselMode, Item, SetupError};
pub use slots::{SlotAssignment, SlotRole};
pub use tween::{ItemFrame, Transition};

pub const FULL_CIRCLE_DEGREES: f64 = 360.0;
pub const STAR_TOP_DEGREES: f64 = 90.0; // item 0 rests at the top
/// Hand-tuned star angles for the five-item layout.
pub const FIVE_ITEM_STAR_ANGLES: [f64; 5] = [90.0, 20.0, -50.0, -130.0, -200.0];
/// Per-item stagger delay step, as a fraction of normalized time. Tunable.
pub const STAGGER_STEP: f64 = 0.01;
