pub mod chart_model;
pub mod crosshair;
pub mod pane;
pub mod price_scale;
pub mod series;
pub mod time_data;
pub mod time_scale;

pub use chart_model::ChartModel;
pub use crosshair::{Crosshair, CrosshairLineOptions, CrosshairMode, CrosshairOptions};
pub use pane::{Pane, PaneId};
pub use price_scale::{PriceRange, PriceScale, PriceScaleMargins, PriceScaleMode, PriceScaleOptions};
pub use series::{FirstValue, Series, SeriesDataItem, SeriesId, SeriesMarkerData, SeriesOptions};
pub use time_data::{Coordinate, SeriesItemsIndexesRange, TimePointIndex, UtcTimestamp};
pub use time_scale::{TimeScale, TimeScaleOptions};
