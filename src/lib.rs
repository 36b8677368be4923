//! Layout and animation engine for a radial skill-button carousel.
//!
//! Items rest spread around a full circle (the star layout) until the
//! central toggle button opens them into an arc with one emphasized center
//! item. Selecting another item sweeps the arc so that item takes the
//! center. Rendering, panels, and the frame clock stay on the host's side
//! of the [`carousel::view`] contracts; the host feeds input back in
//! through [`Carousel::handle`].

pub mod carousel;
pub mod config;
pub mod events;
pub mod geometry;

pub use carousel::{Carousel, CarouselMode, SetupError};
pub use config::CarouselConfig;
pub use events::CarouselEvent;
pub use geometry::Point;
