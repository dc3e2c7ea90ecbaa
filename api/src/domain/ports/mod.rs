//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod clock;
pub mod feed;

pub use clock::{Clock, SystemClock};
pub use feed::FeedSource;
