use eyre::Result;
use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Colors shared by every pane of a chart. The background is a vertical
/// gradient sampled by `ChartModel::background_color_at_y`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartTheme {
    pub background_top: Color,
    pub background_bottom: Color,
    pub grid_line: Color,
    pub crosshair_line: Color,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            background_top: Color::BLACK,
            background_bottom: Color::BLACK,
            grid_line: Color::WHITE.with_alpha(0.1),
            crosshair_line: Color::from_hex(0x758696),
        }
    }
}

impl ChartTheme {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Background color at a vertical position, as a fraction from the top.
    pub fn background_color_at_percent(&self, percent: f32) -> Color {
        Color::lerp(self.background_top, self.background_bottom, percent)
    }
}
