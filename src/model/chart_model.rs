use eyre::{eyre, Result};
use tracing::debug;

use crate::color::Color;
use crate::invalidation::{InvalidateMask, InvalidationLevel};
use crate::model::crosshair::{Crosshair, CrosshairOptions};
use crate::model::pane::{Pane, PaneId};
use crate::model::price_scale::PriceRange;
use crate::model::series::{Series, SeriesDataItem, SeriesId, SeriesOptions};
use crate::model::time_data::{Coordinate, UtcTimestamp};
use crate::model::time_scale::TimeScale;
use crate::theme::ChartTheme;

/// Root of the model state the pane views read.
///
/// Every mutation records an invalidation into a pending mask; the host
/// drains it with [`take_invalidation`](ChartModel::take_invalidation) and
/// feeds it to the render pipeline.
pub struct ChartModel {
    theme: ChartTheme,
    serieses: Vec<Series>,
    panes: Vec<Pane>,
    time_scale: TimeScale,
    crosshair: Crosshair,
    next_series_id: u32,
    next_pane_id: u32,
    pending: Option<InvalidateMask>,
}

impl ChartModel {
    pub fn new(theme: ChartTheme) -> Self {
        Self {
            theme,
            serieses: Vec::new(),
            panes: Vec::new(),
            time_scale: TimeScale::default(),
            crosshair: Crosshair::default(),
            next_series_id: 0,
            next_pane_id: 0,
            pending: None,
        }
    }

    pub fn theme(&self) -> &ChartTheme {
        &self.theme
    }

    pub fn set_theme(&mut self, theme: ChartTheme) {
        self.theme = theme;
        self.invalidate_all(InvalidationLevel::Light);
    }

    pub fn serieses(&self) -> &[Series] {
        &self.serieses
    }

    pub fn series(&self, id: SeriesId) -> Option<&Series> {
        self.serieses.iter().find(|series| series.id() == id)
    }

    pub fn panes(&self) -> &[Pane] {
        &self.panes
    }

    pub fn pane(&self, id: PaneId) -> Option<&Pane> {
        self.panes.iter().find(|pane| pane.id() == id)
    }

    pub fn time_scale(&self) -> &TimeScale {
        &self.time_scale
    }

    pub fn crosshair(&self) -> &Crosshair {
        &self.crosshair
    }

    pub fn create_pane(&mut self, height: f32) -> PaneId {
        let id = PaneId(self.next_pane_id);
        self.next_pane_id += 1;
        self.panes.push(Pane::new(id, height));
        debug!(pane = ?id, height, "created pane");
        self.invalidate_all(InvalidationLevel::Full);
        id
    }

    pub fn set_pane_height(&mut self, pane_id: PaneId, height: f32) -> Result<()> {
        let pane = self
            .panes
            .iter_mut()
            .find(|pane| pane.id() == pane_id)
            .ok_or_else(|| eyre!("unknown pane id {pane_id:?}"))?;
        pane.set_height(height);
        let attached: Vec<SeriesId> = pane.data_sources().to_vec();
        for series in &mut self.serieses {
            if attached.contains(&series.id()) {
                series.price_scale_mut().set_height(height);
            }
        }
        self.invalidate_pane(pane_id, InvalidationLevel::Light);
        Ok(())
    }

    pub fn create_series(&mut self, pane_id: PaneId, options: SeriesOptions) -> Result<SeriesId> {
        let pane_height = self
            .pane(pane_id)
            .map(Pane::height)
            .ok_or_else(|| eyre!("unknown pane id {pane_id:?}"))?;
        let id = SeriesId(self.next_series_id);
        self.next_series_id += 1;

        let mut series = Series::new(id, options);
        series.price_scale_mut().set_height(pane_height);
        self.serieses.push(series);
        if let Some(pane) = self.panes.iter_mut().find(|pane| pane.id() == pane_id) {
            pane.add_data_source(id);
        }
        debug!(series = ?id, pane = ?pane_id, "created series");
        self.invalidate_all(InvalidationLevel::Full);
        Ok(id)
    }

    pub fn remove_series(&mut self, series_id: SeriesId) -> Result<()> {
        if self.series(series_id).is_none() {
            return Err(eyre!("unknown series id {series_id:?}"));
        }
        self.serieses.retain(|series| series.id() != series_id);
        for pane in &mut self.panes {
            pane.remove_data_source(series_id);
        }
        debug!(series = ?series_id, "removed series");
        self.invalidate_all(InvalidationLevel::Full);
        Ok(())
    }

    pub fn move_series_to_pane(&mut self, series_id: SeriesId, pane_id: PaneId) -> Result<()> {
        if self.series(series_id).is_none() {
            return Err(eyre!("unknown series id {series_id:?}"));
        }
        let target_height = self
            .pane(pane_id)
            .map(Pane::height)
            .ok_or_else(|| eyre!("unknown pane id {pane_id:?}"))?;
        for pane in &mut self.panes {
            pane.remove_data_source(series_id);
        }
        if let Some(pane) = self.panes.iter_mut().find(|pane| pane.id() == pane_id) {
            pane.add_data_source(series_id);
        }
        if let Some(series) = self.series_mut(series_id) {
            series.price_scale_mut().set_height(target_height);
        }
        self.invalidate_all(InvalidationLevel::Full);
        Ok(())
    }

    pub fn set_series_options(&mut self, series_id: SeriesId, options: SeriesOptions) -> Result<()> {
        let series = self
            .series_mut(series_id)
            .ok_or_else(|| eyre!("unknown series id {series_id:?}"))?;
        series.set_options(options);
        self.invalidate_series_panes(series_id, InvalidationLevel::Light);
        Ok(())
    }

    pub fn set_series_data(
        &mut self,
        series_id: SeriesId,
        data: Vec<SeriesDataItem>,
    ) -> Result<()> {
        let series = self
            .series_mut(series_id)
            .ok_or_else(|| eyre!("unknown series id {series_id:?}"))?;
        series.set_data(data)?;
        self.invalidate_series_panes(series_id, InvalidationLevel::Light);
        Ok(())
    }

    pub fn set_series_price_range(&mut self, series_id: SeriesId, range: PriceRange) -> Result<()> {
        let series = self
            .series_mut(series_id)
            .ok_or_else(|| eyre!("unknown series id {series_id:?}"))?;
        series.price_scale_mut().set_price_range(range);
        self.invalidate_series_panes(series_id, InvalidationLevel::Light);
        Ok(())
    }

    pub fn set_time_scale_width(&mut self, width: f32) {
        self.time_scale.set_width(width);
        self.invalidate_all(InvalidationLevel::Light);
    }

    pub fn set_time_scale_points(&mut self, points: Vec<UtcTimestamp>) -> Result<()> {
        self.time_scale.set_points(points)?;
        self.invalidate_all(InvalidationLevel::Full);
        Ok(())
    }

    pub fn zoom_time_scale(&mut self, pivot_x: Coordinate, factor: f32) {
        self.time_scale.zoom(pivot_x, factor);
        self.invalidate_all(InvalidationLevel::Light);
    }

    pub fn scroll_time_scale(&mut self, delta_bars: f32) {
        self.time_scale.scroll(delta_bars);
        self.invalidate_all(InvalidationLevel::Light);
    }

    pub fn set_crosshair_options(&mut self, options: CrosshairOptions) {
        self.crosshair.set_options(options);
        self.invalidate_all(InvalidationLevel::Light);
    }

    /// Moves the crosshair to a screen position; the applied index comes from
    /// the time scale.
    pub fn set_and_save_current_position(&mut self, x: Coordinate, y: Coordinate) {
        let index = self.time_scale.coordinate_to_index(x);
        self.crosshair.set_position(index, x, y);
        self.invalidate_all(InvalidationLevel::Cursor);
    }

    pub fn clear_current_position(&mut self) {
        self.crosshair.clear_position();
        self.invalidate_all(InvalidationLevel::Cursor);
    }

    /// Background gradient sampled at a coordinate inside a pane.
    pub fn background_color_at_y(&self, y: Coordinate, pane: &Pane) -> Color {
        let percent = if pane.height() > 0.0 {
            (y / pane.height()).clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.theme.background_color_at_percent(percent)
    }

    /// Drains the invalidations accumulated since the last call.
    pub fn take_invalidation(&mut self) -> Option<InvalidateMask> {
        self.pending.take()
    }

    fn series_mut(&mut self, id: SeriesId) -> Option<&mut Series> {
        self.serieses.iter_mut().find(|series| series.id() == id)
    }

    fn invalidate_all(&mut self, level: InvalidationLevel) {
        self.merge_pending(InvalidateMask::new(level));
    }

    fn invalidate_pane(&mut self, pane_id: PaneId, level: InvalidationLevel) {
        let mut mask = InvalidateMask::new(InvalidationLevel::None);
        mask.invalidate_pane(pane_id, level);
        self.merge_pending(mask);
    }

    fn invalidate_series_panes(&mut self, series_id: SeriesId, level: InvalidationLevel) {
        let pane_ids: Vec<PaneId> = self
            .panes
            .iter()
            .filter(|pane| pane.contains(series_id))
            .map(Pane::id)
            .collect();
        let mut mask = InvalidateMask::new(InvalidationLevel::None);
        for pane_id in pane_ids {
            mask.invalidate_pane(pane_id, level);
        }
        self.merge_pending(mask);
    }

    fn merge_pending(&mut self, mask: InvalidateMask) {
        match self.pending.as_mut() {
            Some(pending) => pending.merge(&mask),
            None => self.pending = Some(mask),
        }
    }
}
