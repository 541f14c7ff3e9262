#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Navigation {
    Advance, // Move to the next slide, wrapping past the last one
    Retreat, // Move to the previous slide, wrapping past the first one
}
