// Renderers turn resolved view data into drawable primitives.

pub mod composite;
pub mod crosshair_lines;
pub mod marks;

pub use composite::CompositeRenderer;
pub use crosshair_lines::{CrosshairLineState, CrosshairLinesRenderData, CrosshairLinesRenderer};
pub use marks::{MarkItem, MarksRenderData, MarksRenderer};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::color::Color;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineStyle {
    #[default]
    Solid,
    Dotted,
    Dashed,
    LargeDashed,
    SparseDotted,
}

/// Seam to the host surface: renderers emit primitives through this trait,
/// the host maps them onto its canvas.
pub trait DrawTarget {
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, line_width: f32, color: Color);
    fn draw_line(&mut self, from: Vec2, to: Vec2, width: f32, style: LineStyle, color: Color);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    StrokeCircle {
        center: Vec2,
        radius: f32,
        line_width: f32,
        color: Color,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        style: LineStyle,
        color: Color,
    },
}

/// Recording draw target: the pipeline's per-pane output.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl DrawTarget for DisplayList {
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, line_width: f32, color: Color) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            line_width,
            color,
        });
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, width: f32, style: LineStyle, color: Color) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            width,
            style,
            color,
        });
    }
}

/// A drawable produced by a pane view.
pub trait PaneRenderer {
    fn draw(&self, target: &mut dyn DrawTarget);
}
