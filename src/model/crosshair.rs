use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::model::time_data::{Coordinate, TimePointIndex};
use crate::renderers::LineStyle;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrosshairMode {
    #[default]
    Normal,
    /// Reserved for host-side snapping; behaves like `Normal` here.
    Magnet,
    /// Suppresses the crosshair lines and markers entirely.
    Hidden,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CrosshairLineOptions {
    pub visible: bool,
    pub color: Color,
    pub width: f32,
    pub style: LineStyle,
}

impl Default for CrosshairLineOptions {
    fn default() -> Self {
        Self {
            visible: true,
            color: Color::from_hex(0x758696),
            width: 1.0,
            style: LineStyle::LargeDashed,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CrosshairOptions {
    pub mode: CrosshairMode,
    pub vert_line: CrosshairLineOptions,
    pub horiz_line: CrosshairLineOptions,
}

/// Cursor state shared by every pane of a chart.
#[derive(Clone, Debug, Default)]
pub struct Crosshair {
    options: CrosshairOptions,
    index: Option<TimePointIndex>,
    x: Coordinate,
    y: Coordinate,
    visible: bool,
}

impl Crosshair {
    pub fn new(options: CrosshairOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &CrosshairOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: CrosshairOptions) {
        self.options = options;
    }

    pub fn set_position(&mut self, index: TimePointIndex, x: Coordinate, y: Coordinate) {
        self.index = Some(index);
        self.x = x;
        self.y = y;
        self.visible = true;
    }

    pub fn clear_position(&mut self) {
        self.index = None;
        self.x = 0.0;
        self.y = 0.0;
        self.visible = false;
    }

    /// Index the crosshair currently points at, `None` while cleared.
    pub fn applied_index(&self) -> Option<TimePointIndex> {
        self.index
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn x(&self) -> Coordinate {
        self.x
    }

    pub fn y(&self) -> Coordinate {
        self.y
    }
}
