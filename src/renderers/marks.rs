use glam::Vec2;

use super::{DrawTarget, PaneRenderer};
use crate::color::Color;
use crate::model::time_data::{Coordinate, SeriesItemsIndexesRange, TimePointIndex};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MarkItem {
    pub x: Coordinate,
    pub y: Coordinate,
    pub time: TimePointIndex,
    pub price: f64,
}

/// Per-series marker record populated by `CrosshairMarksPaneView`.
///
/// A `None` visible range means the marker is hidden; the rest of the fields
/// keep their last values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MarksRenderData {
    pub items: Vec<MarkItem>,
    /// Marker body color.
    pub line_color: Color,
    /// Halo color behind the body, usually the pane background.
    pub back_color: Color,
    pub radius: f32,
    pub line_width: f32,
    pub visible_range: Option<SeriesItemsIndexesRange>,
}

#[derive(Default)]
pub struct MarksRenderer {
    data: MarksRenderData,
}

impl MarksRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_data(&mut self, data: MarksRenderData) {
        self.data = data;
    }

    pub fn data(&self) -> &MarksRenderData {
        &self.data
    }
}

impl PaneRenderer for MarksRenderer {
    fn draw(&self, target: &mut dyn DrawTarget) {
        let Some(range) = self.data.visible_range else {
            return;
        };
        let to = range.to.min(self.data.items.len());
        for item in &self.data.items[range.from.min(to)..to] {
            let center = Vec2::new(item.x, item.y);
            target.fill_circle(
                center,
                self.data.radius + self.data.line_width,
                self.data.back_color,
            );
            target.fill_circle(center, self.data.radius, self.data.line_color);
        }
    }
}
