//! Specialized keyed collections.

mod multimap;

pub use multimap::{CaseInsensitiveMultiMap, ImmutableMultiMapView};
