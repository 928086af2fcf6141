use std::collections::HashMap;

use super::{UpdatablePaneView, UpdateType};
use crate::model::chart_model::ChartModel;
use crate::model::crosshair::CrosshairMode;
use crate::model::pane::{Pane, PaneId};
use crate::model::time_data::SeriesItemsIndexesRange;
use crate::renderers::{
    CompositeRenderer, MarkItem, MarksRenderData, MarksRenderer, PaneRenderer,
};

const RANGE_FOR_SINGLE_POINT: SeriesItemsIndexesRange = SeriesItemsIndexesRange { from: 0, to: 1 };

fn empty_marker_data() -> MarksRenderData {
    MarksRenderData {
        items: vec![MarkItem::default()],
        ..MarksRenderData::default()
    }
}

/// Draws one marker per series at the crosshair's applied index.
///
/// Keeps one `MarksRenderData` slot per series, recreated only when the
/// series count changes and mutated in place otherwise, plus a per-pane cache
/// of resolved slots that is cleared wholesale on every update.
#[derive(Default)]
pub struct CrosshairMarksPaneView {
    marks_data: Vec<MarksRenderData>,
    validated: HashMap<PaneId, Vec<MarksRenderData>>,
}

impl CrosshairMarksPaneView {
    pub fn new() -> Self {
        Self::default()
    }

    fn update_impl(&mut self, model: &ChartModel, pane: &Pane) -> Vec<MarksRenderData> {
        let force_hidden = model.crosshair().options().mode == CrosshairMode::Hidden;
        let applied_index = model.crosshair().applied_index();
        let time_scale = model.time_scale();

        let mut resolved = Vec::new();
        for (slot, series) in model.serieses().iter().enumerate() {
            if !pane.contains(series.id()) {
                continue;
            }
            let data = &mut self.marks_data[slot];
            let marker = applied_index.and_then(|index| series.marker_data_at_index(index));

            match (applied_index, marker) {
                (Some(index), Some(marker)) if !force_hidden && series.visible() => {
                    let first_value = series
                        .first_value()
                        .expect("series with a marker datum always has a first value");
                    let y = series
                        .price_scale()
                        .price_to_coordinate(marker.price, first_value.value);

                    data.line_color = marker.background_color;
                    data.back_color = marker
                        .border_color
                        .unwrap_or_else(|| model.background_color_at_y(y, pane));
                    data.radius = marker.radius;
                    data.line_width = marker.border_width;

                    let item = &mut data.items[0];
                    item.price = marker.price;
                    item.y = y;
                    item.time = index;
                    item.x = time_scale.index_to_coordinate(index);
                    data.visible_range = Some(RANGE_FOR_SINGLE_POINT);
                }
                _ => {
                    data.visible_range = None;
                }
            }
            resolved.push(data.clone());
        }
        resolved
    }

    fn composite_for(resolved: &[MarksRenderData]) -> CompositeRenderer {
        let mut composite = CompositeRenderer::new();
        for data in resolved {
            let mut renderer = MarksRenderer::new();
            renderer.set_data(data.clone());
            composite.append(Box::new(renderer));
        }
        composite
    }
}

impl UpdatablePaneView for CrosshairMarksPaneView {
    fn update(&mut self, model: &ChartModel, _update: UpdateType) {
        let count = model.serieses().len();
        if count != self.marks_data.len() {
            self.marks_data = (0..count).map(|_| empty_marker_data()).collect();
        }
        self.validated.clear();
    }

    fn renderer(&mut self, model: &ChartModel, pane: &Pane) -> Option<Box<dyn PaneRenderer>> {
        // A renderer request can arrive before the first update.
        if self.marks_data.len() != model.serieses().len() {
            self.update(model, UpdateType::Full);
        }
        if !self.validated.contains_key(&pane.id()) {
            let resolved = self.update_impl(model, pane);
            self.validated.insert(pane.id(), resolved);
        }
        Some(Box::new(Self::composite_for(&self.validated[&pane.id()])))
    }
}
