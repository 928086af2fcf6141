use std::collections::HashMap;

use super::{UpdatablePaneView, UpdateType};
use crate::model::chart_model::ChartModel;
use crate::model::crosshair::{CrosshairLineOptions, CrosshairMode};
use crate::model::pane::{Pane, PaneId};
use crate::model::time_data::Coordinate;
use crate::renderers::{
    CrosshairLineState, CrosshairLinesRenderData, CrosshairLinesRenderer, PaneRenderer,
};

/// Populates the crosshair line renderer from crosshair state and pane
/// geometry. Hidden mode or a cleared crosshair yields invisible lines.
#[derive(Default)]
pub struct CrosshairLinesPaneView {
    validated: HashMap<PaneId, CrosshairLinesRenderData>,
}

impl CrosshairLinesPaneView {
    pub fn new() -> Self {
        Self::default()
    }

    fn update_impl(model: &ChartModel, pane: &Pane) -> CrosshairLinesRenderData {
        let crosshair = model.crosshair();
        let options = crosshair.options();
        let hidden = options.mode == CrosshairMode::Hidden || !crosshair.visible();

        CrosshairLinesRenderData {
            vert: line_state(&options.vert_line, crosshair.x(), hidden),
            horiz: line_state(&options.horiz_line, crosshair.y(), hidden),
            pane_width: model.time_scale().width(),
            pane_height: pane.height(),
        }
    }
}

fn line_state(options: &CrosshairLineOptions, coord: Coordinate, hidden: bool) -> CrosshairLineState {
    CrosshairLineState {
        visible: options.visible && !hidden,
        coord,
        color: options.color,
        width: options.width,
        style: options.style,
    }
}

impl UpdatablePaneView for CrosshairLinesPaneView {
    fn update(&mut self, _model: &ChartModel, _update: UpdateType) {
        self.validated.clear();
    }

    fn renderer(&mut self, model: &ChartModel, pane: &Pane) -> Option<Box<dyn PaneRenderer>> {
        let data = self
            .validated
            .entry(pane.id())
            .or_insert_with(|| Self::update_impl(model, pane))
            .clone();
        let mut renderer = CrosshairLinesRenderer::new();
        renderer.set_data(data);
        Some(Box::new(renderer))
    }
}
