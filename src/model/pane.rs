use crate::model::series::SeriesId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PaneId(pub u32);

/// One horizontal band of the chart, owning the ids of the series it shows.
#[derive(Clone, Debug)]
pub struct Pane {
    id: PaneId,
    height: f32,
    data_sources: Vec<SeriesId>,
}

impl Pane {
    pub fn new(id: PaneId, height: f32) -> Self {
        Self {
            id,
            height,
            data_sources: Vec::new(),
        }
    }

    pub fn id(&self) -> PaneId {
        self.id
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn set_height(&mut self, height: f32) {
        self.height = height;
    }

    pub fn data_sources(&self) -> &[SeriesId] {
        &self.data_sources
    }

    pub fn contains(&self, series_id: SeriesId) -> bool {
        self.data_sources.contains(&series_id)
    }

    pub fn add_data_source(&mut self, series_id: SeriesId) {
        if !self.contains(series_id) {
            self.data_sources.push(series_id);
        }
    }

    pub fn remove_data_source(&mut self, series_id: SeriesId) {
        self.data_sources.retain(|id| *id != series_id);
    }
}
