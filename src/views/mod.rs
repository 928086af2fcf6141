pub mod crosshair_lines;
pub mod crosshair_marks;

pub use crosshair_lines::CrosshairLinesPaneView;
pub use crosshair_marks::CrosshairMarksPaneView;

use crate::model::chart_model::ChartModel;
use crate::model::pane::Pane;
use crate::renderers::PaneRenderer;

/// What changed since the last update, so a view can skip work.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UpdateType {
    /// Data or cursor moved; structure unchanged.
    Data,
    /// Structural change (series or panes added/removed).
    #[default]
    Full,
}

/// A pane view reacts to model changes and resolves its renderer lazily,
/// once per pane, until the next update.
pub trait UpdatablePaneView {
    fn update(&mut self, model: &ChartModel, update: UpdateType);

    fn renderer(&mut self, model: &ChartModel, pane: &Pane) -> Option<Box<dyn PaneRenderer>>;
}
