use chrono::TimeZone;
use chrono_tz::Tz;
use eyre::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::model::time_data::{Coordinate, TimePointIndex, UtcTimestamp};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeScaleOptions {
    /// Horizontal pixels per time point.
    pub bar_spacing: f32,
    pub min_bar_spacing: f32,
    /// Empty space kept to the right of the last bar, in bars.
    pub right_offset: f32,
    pub timezone: Tz,
}

impl Default for TimeScaleOptions {
    fn default() -> Self {
        Self {
            bar_spacing: 6.0,
            min_bar_spacing: 0.5,
            right_offset: 0.0,
            timezone: Tz::UTC,
        }
    }
}

/// Tick label granularity, picked from the visible time span.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickLabelFormat {
    Year,       // 2024
    MonthYear,  // Jan 2024
    DayMonth,   // 12 Jan
    HourMin,    // 10:30
    HourMinSec, // 10:30:15
}

/// Maps time point indexes to X coordinates and formats tick labels.
#[derive(Clone, Debug)]
pub struct TimeScale {
    options: TimeScaleOptions,
    width: f32,
    base_index: TimePointIndex,
    points: Vec<UtcTimestamp>,
}

impl Default for TimeScale {
    fn default() -> Self {
        Self::new(TimeScaleOptions::default())
    }
}

impl TimeScale {
    pub fn new(options: TimeScaleOptions) -> Self {
        Self {
            options,
            width: 0.0,
            base_index: TimePointIndex(0),
            points: Vec::new(),
        }
    }

    pub fn options(&self) -> &TimeScaleOptions {
        &self.options
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    pub fn base_index(&self) -> TimePointIndex {
        self.base_index
    }

    pub fn bar_spacing(&self) -> f32 {
        self.options.bar_spacing
    }

    pub fn points(&self) -> &[UtcTimestamp] {
        &self.points
    }

    /// Replaces the index → timestamp table. Timestamps must be strictly
    /// increasing; the base index tracks the last point.
    pub fn set_points(&mut self, points: Vec<UtcTimestamp>) -> Result<()> {
        for pair in points.windows(2) {
            if pair[1] <= pair[0] {
                bail!(
                    "time scale points must be strictly increasing ({} then {})",
                    pair[0],
                    pair[1]
                );
            }
        }
        self.base_index = TimePointIndex(points.len() as i64 - 1).max(TimePointIndex(0));
        self.points = points;
        Ok(())
    }

    pub fn index_to_coordinate(&self, index: TimePointIndex) -> Coordinate {
        let delta_from_right =
            (self.base_index.0 - index.0) as f32 + self.options.right_offset;
        self.width - (delta_from_right + 0.5) * self.options.bar_spacing - 1.0
    }

    pub fn coordinate_to_index(&self, x: Coordinate) -> TimePointIndex {
        let delta_from_right = (self.width - 1.0 - x) / self.options.bar_spacing - 0.5;
        TimePointIndex(
            self.base_index.0 + (self.options.right_offset - delta_from_right).round() as i64,
        )
    }

    /// Changes the bar spacing while keeping the point under `pivot_x` fixed.
    pub fn zoom(&mut self, pivot_x: Coordinate, factor: f32) {
        if factor <= 0.0 || self.width <= 0.0 {
            return;
        }
        let before = (self.width - 1.0 - pivot_x) / self.options.bar_spacing - 0.5;
        let new_spacing = (self.options.bar_spacing * factor).max(self.options.min_bar_spacing);
        let after = (self.width - 1.0 - pivot_x) / new_spacing - 0.5;
        self.options.bar_spacing = new_spacing;
        self.options.right_offset += after - before;
    }

    /// Scrolls the visible window by a number of bars.
    pub fn scroll(&mut self, delta_bars: f32) {
        self.options.right_offset += delta_bars;
    }

    pub fn timestamp_at(&self, index: TimePointIndex) -> Option<UtcTimestamp> {
        usize::try_from(index.0).ok().and_then(|i| self.points.get(i).copied())
    }

    /// Evenly strided tick indexes over the visible window.
    pub fn tick_indexes(&self, max_ticks: usize) -> Vec<TimePointIndex> {
        if self.points.is_empty() || max_ticks == 0 || self.width <= 0.0 {
            return Vec::new();
        }
        let first = self.coordinate_to_index(0.0).0.max(0);
        let last = self
            .coordinate_to_index(self.width)
            .0
            .min(self.points.len() as i64 - 1);
        if last < first {
            return Vec::new();
        }
        let span = (last - first + 1) as usize;
        let stride = span.div_ceil(max_ticks).max(1);
        (first..=last)
            .step_by(stride)
            .map(TimePointIndex)
            .collect()
    }

    /// Formats the timestamp behind an index for an axis label, with the
    /// granularity driven by the visible span.
    pub fn format_index_label(&self, index: TimePointIndex) -> Option<String> {
        let timestamp = self.timestamp_at(index)?;
        let format = pick_label_format(self.visible_span_sec());
        Some(format_timestamp(timestamp, format, self.options.timezone))
    }

    fn visible_span_sec(&self) -> f64 {
        let visible_bars = if self.options.bar_spacing > 0.0 {
            (self.width / self.options.bar_spacing) as f64
        } else {
            0.0
        };
        self.bar_interval_sec() * visible_bars
    }

    fn bar_interval_sec(&self) -> f64 {
        if self.points.len() >= 2 {
            ((self.points[1] - self.points[0]) as f64).abs().max(1.0)
        } else {
            60.0
        }
    }
}

/// Picks the label granularity for a visible time range in seconds.
pub fn pick_label_format(visible_range_sec: f64) -> TickLabelFormat {
    const MINUTE: f64 = 60.0;
    const HOUR: f64 = 3600.0;
    const DAY: f64 = 24.0 * HOUR;
    const MONTH: f64 = 30.0 * DAY;
    const YEAR: f64 = 365.0 * DAY;

    if visible_range_sec > YEAR * 2.0 {
        TickLabelFormat::Year
    } else if visible_range_sec > MONTH * 2.0 {
        TickLabelFormat::MonthYear
    } else if visible_range_sec > DAY * 1.5 {
        TickLabelFormat::DayMonth
    } else if visible_range_sec > MINUTE * 5.0 {
        TickLabelFormat::HourMin
    } else {
        TickLabelFormat::HourMinSec
    }
}

/// Formats a timestamp in the given timezone.
pub fn format_timestamp(timestamp: UtcTimestamp, format: TickLabelFormat, tz: Tz) -> String {
    let dt = match tz.timestamp_opt(timestamp, 0) {
        chrono::LocalResult::Single(dt) => dt,
        chrono::LocalResult::Ambiguous(dt, _) => dt,
        chrono::LocalResult::None => return timestamp.to_string(),
    };

    match format {
        TickLabelFormat::Year => dt.format("%Y").to_string(),
        TickLabelFormat::MonthYear => dt.format("%b %Y").to_string(),
        TickLabelFormat::DayMonth => dt.format("%d %b").to_string(),
        TickLabelFormat::HourMin => dt.format("%H:%M").to_string(),
        TickLabelFormat::HourMinSec => dt.format("%H:%M:%S").to_string(),
    }
}
