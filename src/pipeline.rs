use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use eyre::{eyre, Result};
use parking_lot::RwLock;
use tracing::debug;

use crate::invalidation::{InvalidateMask, InvalidationLevel};
use crate::model::chart_model::ChartModel;
use crate::model::pane::PaneId;
use crate::renderers::DisplayList;
use crate::views::{CrosshairLinesPaneView, CrosshairMarksPaneView, UpdatablePaneView, UpdateType};

/// Time spent composing each pane (ID -> nanoseconds).
pub type ComposeTimes = Arc<RwLock<HashMap<PaneId, u64>>>;

/// Coordinates the pane views: applies invalidation masks and recomposes a
/// display list per pane, recomputing only the panes that changed.
pub struct RenderPipeline {
    views: Vec<Box<dyn UpdatablePaneView>>,
    pane_cache: HashMap<PaneId, DisplayList>,
    compose_times: ComposeTimes,
}

impl Default for RenderPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderPipeline {
    /// Registers the built-in crosshair views; hosts stack series views on
    /// top with [`add_view`](RenderPipeline::add_view).
    pub fn new() -> Self {
        Self {
            views: vec![
                Box::new(CrosshairLinesPaneView::new()),
                Box::new(CrosshairMarksPaneView::new()),
            ],
            pane_cache: HashMap::new(),
            compose_times: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn add_view(&mut self, view: Box<dyn UpdatablePaneView>) {
        self.views.push(view);
        self.pane_cache.clear();
    }

    /// Drops cached display lists for invalidated panes and forwards the
    /// update to every view. An all-`None` mask is a no-op.
    pub fn apply(&mut self, model: &ChartModel, mask: &InvalidateMask) {
        if !mask.invalidates_anything() {
            return;
        }
        for pane in model.panes() {
            if mask.pane_level(pane.id()) > InvalidationLevel::None {
                self.pane_cache.remove(&pane.id());
            }
        }
        let update = if mask.max_level() == InvalidationLevel::Full {
            UpdateType::Full
        } else {
            UpdateType::Data
        };
        for view in &mut self.views {
            view.update(model, update);
        }
        debug!(level = ?mask.max_level(), "applied invalidation mask");
    }

    /// Display list for a pane, recomputed only when its cache entry was
    /// invalidated.
    pub fn compose(&mut self, model: &ChartModel, pane_id: PaneId) -> Result<&DisplayList> {
        if !self.pane_cache.contains_key(&pane_id) {
            let pane = model
                .pane(pane_id)
                .ok_or_else(|| eyre!("unknown pane id {pane_id:?}"))?;
            let started = Instant::now();

            let mut list = DisplayList::new();
            for view in &mut self.views {
                if let Some(renderer) = view.renderer(model, pane) {
                    renderer.draw(&mut list);
                }
            }

            self.compose_times
                .write()
                .insert(pane_id, started.elapsed().as_nanos() as u64);
            debug!(pane = ?pane_id, commands = list.len(), "composed pane");
            self.pane_cache.insert(pane_id, list);
        }
        Ok(&self.pane_cache[&pane_id])
    }

    pub fn is_cached(&self, pane_id: PaneId) -> bool {
        self.pane_cache.contains_key(&pane_id)
    }

    pub fn compose_times(&self) -> ComposeTimes {
        self.compose_times.clone()
    }

    pub fn total_compose_nanos(&self) -> u64 {
        self.compose_times.read().values().sum()
    }
}
