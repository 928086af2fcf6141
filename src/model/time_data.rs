use serde::{Deserialize, Serialize};

/// Screen-space pixel coordinate.
pub type Coordinate = f32;

/// Seconds since the Unix epoch.
pub type UtcTimestamp = i64;

/// Index into the time scale's point list.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TimePointIndex(pub i64);

/// Half-open range of item indexes a renderer should draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeriesItemsIndexesRange {
    pub from: usize,
    pub to: usize,
}
