use glam::Vec2;

use super::{DrawTarget, LineStyle, PaneRenderer};
use crate::color::Color;
use crate::model::time_data::Coordinate;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CrosshairLineState {
    pub visible: bool,
    pub coord: Coordinate,
    pub color: Color,
    pub width: f32,
    pub style: LineStyle,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CrosshairLinesRenderData {
    pub vert: CrosshairLineState,
    pub horiz: CrosshairLineState,
    pub pane_width: f32,
    pub pane_height: f32,
}

/// Draws the crosshair's vertical and horizontal lines across a pane.
#[derive(Default)]
pub struct CrosshairLinesRenderer {
    data: CrosshairLinesRenderData,
}

impl CrosshairLinesRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_data(&mut self, data: CrosshairLinesRenderData) {
        self.data = data;
    }

    pub fn data(&self) -> &CrosshairLinesRenderData {
        &self.data
    }
}

impl PaneRenderer for CrosshairLinesRenderer {
    fn draw(&self, target: &mut dyn DrawTarget) {
        let data = &self.data;
        if data.vert.visible {
            target.draw_line(
                Vec2::new(data.vert.coord, 0.0),
                Vec2::new(data.vert.coord, data.pane_height),
                data.vert.width,
                data.vert.style,
                data.vert.color,
            );
        }
        if data.horiz.visible {
            target.draw_line(
                Vec2::new(0.0, data.horiz.coord),
                Vec2::new(data.pane_width, data.horiz.coord),
                data.horiz.width,
                data.horiz.style,
                data.horiz.color,
            );
        }
    }
}
