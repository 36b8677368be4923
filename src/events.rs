/// Host-side input, dispatched through [`crate::Carousel::handle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselEvent {
    /// The central toggle button was clicked.
    Toggle,
    /// The item at this index was clicked.
    Select(usize),
    /// Frame-clock tick carrying seconds elapsed since the previous tick.
    Tick(f64),
}
