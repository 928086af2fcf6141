use serde::{Deserialize, Serialize};

use crate::model::time_data::Coordinate;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceScaleMode {
    #[default]
    Normal,
    Logarithmic,
    /// Values relative to the series' first value, in percent.
    Percentage,
    /// Values scaled so the series' first value maps to 100.
    IndexedTo100,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceScaleMargins {
    /// Fraction of the pane height left empty above the data.
    pub top: f32,
    /// Fraction of the pane height left empty below the data.
    pub bottom: f32,
}

impl Default for PriceScaleMargins {
    fn default() -> Self {
        Self { top: 0.2, bottom: 0.1 }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceScaleOptions {
    pub mode: PriceScaleMode,
    pub invert_scale: bool,
    pub margins: PriceScaleMargins,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Converts prices to vertical coordinates for one pane axis.
///
/// The range is set by the owner (auto-scaling happens upstream); the height
/// follows the pane height.
#[derive(Clone, Debug, Default)]
pub struct PriceScale {
    options: PriceScaleOptions,
    height: f32,
    range: Option<PriceRange>,
}

impl PriceScale {
    pub fn new(options: PriceScaleOptions) -> Self {
        Self {
            options,
            height: 0.0,
            range: None,
        }
    }

    pub fn options(&self) -> &PriceScaleOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: PriceScaleOptions) {
        self.options = options;
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn set_height(&mut self, height: f32) {
        self.height = height;
    }

    pub fn price_range(&self) -> Option<PriceRange> {
        self.range
    }

    pub fn set_price_range(&mut self, range: PriceRange) {
        self.range = Some(range);
    }

    /// Maps a price to a coordinate measured from the pane top.
    ///
    /// `base_value` is the series' first value, used by the relative modes.
    /// The result is always finite; a degenerate range is padded instead of
    /// producing NaN.
    pub fn price_to_coordinate(&self, price: f64, base_value: f64) -> Coordinate {
        let Some(range) = self.range else {
            return 0.0;
        };
        let (min, max) = self.transformed_range(range, base_value);
        let value = self.transform(price, base_value);

        let mut percent = ((value - min) / (max - min)) as f32;
        if !self.options.invert_scale {
            percent = 1.0 - percent;
        }

        let (top_offset, inner_height) = self.inner_extent();
        let coordinate = top_offset + inner_height * percent;
        if coordinate.is_finite() {
            coordinate
        } else {
            0.0
        }
    }

    /// Inverse of `price_to_coordinate`.
    pub fn coordinate_to_price(&self, coordinate: Coordinate, base_value: f64) -> f64 {
        let Some(range) = self.range else {
            return 0.0;
        };
        let (min, max) = self.transformed_range(range, base_value);
        let (top_offset, inner_height) = self.inner_extent();

        let mut percent = if inner_height > 0.0 {
            (coordinate - top_offset) / inner_height
        } else {
            0.0
        };
        if !self.options.invert_scale {
            percent = 1.0 - percent;
        }

        let value = min + (max - min) * percent as f64;
        self.invert_transform(value, base_value)
    }

    fn inner_extent(&self) -> (f32, f32) {
        let top_offset = self.height * self.options.margins.top;
        let inner = self.height * (1.0 - self.options.margins.top - self.options.margins.bottom);
        if inner > 0.0 {
            (top_offset, inner)
        } else {
            (0.0, self.height)
        }
    }

    fn transformed_range(&self, range: PriceRange, base_value: f64) -> (f64, f64) {
        let mut min = self.transform(range.min, base_value);
        let mut max = self.transform(range.max, base_value);
        // Pad a flat range so the mapping stays defined.
        if (max - min).abs() < f64::EPSILON {
            min -= 0.5;
            max += 0.5;
        }
        (min, max)
    }

    fn transform(&self, price: f64, base_value: f64) -> f64 {
        match self.options.mode {
            PriceScaleMode::Normal => price,
            PriceScaleMode::Logarithmic => to_log(price),
            PriceScaleMode::Percentage => {
                if base_value == 0.0 {
                    price
                } else {
                    (price - base_value) / base_value * 100.0
                }
            }
            PriceScaleMode::IndexedTo100 => {
                if base_value == 0.0 {
                    price
                } else {
                    price / base_value * 100.0
                }
            }
        }
    }

    fn invert_transform(&self, value: f64, base_value: f64) -> f64 {
        match self.options.mode {
            PriceScaleMode::Normal => value,
            PriceScaleMode::Logarithmic => from_log(value),
            PriceScaleMode::Percentage => {
                if base_value == 0.0 {
                    value
                } else {
                    base_value * (1.0 + value / 100.0)
                }
            }
            PriceScaleMode::IndexedTo100 => {
                if base_value == 0.0 {
                    value
                } else {
                    value * base_value / 100.0
                }
            }
        }
    }
}

// Symmetric log keeps negative prices representable.
fn to_log(value: f64) -> f64 {
    value.signum() * (value.abs() + 1.0).log10()
}

fn from_log(value: f64) -> f64 {
    value.signum() * (10f64.powf(value.abs()) - 1.0)
}
