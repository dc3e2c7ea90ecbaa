//! Domain entities
//!
//! Pure domain models for earthquake events and the filters applied to them.

pub mod criteria;
pub mod earthquake;

pub use criteria::{FeedWindow, FilterCriteria, ResultSet};
pub use earthquake::{EarthquakeEvent, EventId};
