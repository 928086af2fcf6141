use eyre::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::model::price_scale::PriceScale;
use crate::model::time_data::TimePointIndex;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SeriesId(pub u32);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesOptions {
    pub visible: bool,
    pub color: Color,
    pub crosshair_marker_visible: bool,
    pub crosshair_marker_radius: f32,
    pub crosshair_marker_border_width: f32,
    /// Marker border color; falls back to the pane background when unset.
    pub crosshair_marker_border_color: Option<Color>,
    /// Marker body color; falls back to the series color when unset.
    pub crosshair_marker_background_color: Option<Color>,
}

impl Default for SeriesOptions {
    fn default() -> Self {
        Self {
            visible: true,
            color: Color::from_hex(0x2196F3),
            crosshair_marker_visible: true,
            crosshair_marker_radius: 4.0,
            crosshair_marker_border_width: 2.0,
            crosshair_marker_border_color: None,
            crosshair_marker_background_color: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesDataItem {
    pub time: TimePointIndex,
    pub value: f64,
}

/// First data point of a series, the base for relative price scale modes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FirstValue {
    pub value: f64,
    pub time: TimePointIndex,
}

/// Everything the crosshair marker needs for one series at one index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesMarkerData {
    pub price: f64,
    pub radius: f32,
    pub border_width: f32,
    pub border_color: Option<Color>,
    pub background_color: Color,
}

pub struct Series {
    id: SeriesId,
    options: SeriesOptions,
    data: Vec<SeriesDataItem>,
    price_scale: PriceScale,
}

impl Series {
    pub fn new(id: SeriesId, options: SeriesOptions) -> Self {
        Self {
            id,
            options,
            data: Vec::new(),
            price_scale: PriceScale::default(),
        }
    }

    pub fn id(&self) -> SeriesId {
        self.id
    }

    pub fn options(&self) -> &SeriesOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: SeriesOptions) {
        self.options = options;
    }

    pub fn visible(&self) -> bool {
        self.options.visible
    }

    pub fn price_scale(&self) -> &PriceScale {
        &self.price_scale
    }

    pub fn price_scale_mut(&mut self) -> &mut PriceScale {
        &mut self.price_scale
    }

    pub fn data(&self) -> &[SeriesDataItem] {
        &self.data
    }

    /// Replaces the series data. Items must be sorted by strictly increasing
    /// time index.
    pub fn set_data(&mut self, data: Vec<SeriesDataItem>) -> Result<()> {
        for pair in data.windows(2) {
            if pair[1].time <= pair[0].time {
                bail!(
                    "series data must be sorted by strictly increasing time index \
                     ({:?} then {:?})",
                    pair[0].time,
                    pair[1].time
                );
            }
        }
        self.data = data;
        Ok(())
    }

    pub fn first_value(&self) -> Option<FirstValue> {
        self.data.first().map(|item| FirstValue {
            value: item.value,
            time: item.time,
        })
    }

    pub fn data_at(&self, index: TimePointIndex) -> Option<f64> {
        self.data
            .binary_search_by_key(&index, |item| item.time)
            .ok()
            .map(|pos| self.data[pos].value)
    }

    /// Crosshair marker payload at an index, or `None` when the marker is
    /// disabled or the series has no datum there.
    pub fn marker_data_at_index(&self, index: TimePointIndex) -> Option<SeriesMarkerData> {
        if !self.options.crosshair_marker_visible {
            return None;
        }
        let price = self.data_at(index)?;
        Some(SeriesMarkerData {
            price,
            radius: self.options.crosshair_marker_radius,
            border_width: self.options.crosshair_marker_border_width,
            border_color: self.options.crosshair_marker_border_color,
            background_color: self
                .options
                .crosshair_marker_background_color
                .unwrap_or(self.options.color),
        })
    }
}
