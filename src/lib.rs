//! Pane-view and renderer composition layer for financial charts.
//!
//! The host owns the canvas; this crate turns model state (series, panes,
//! crosshair, time scale) into per-pane display lists of drawable
//! primitives, recomputing only what an invalidation mask says changed.

pub mod color;
pub mod invalidation;
pub mod model;
pub mod pipeline;
pub mod renderers;
pub mod theme;
pub mod views;

pub use color::Color;
pub use invalidation::{InvalidateMask, InvalidationLevel};
pub use model::ChartModel;
pub use pipeline::RenderPipeline;
pub use renderers::{DisplayList, DrawCommand, DrawTarget, LineStyle, PaneRenderer};
pub use theme::ChartTheme;
pub use views::{CrosshairLinesPaneView, CrosshairMarksPaneView, UpdatablePaneView, UpdateType};
