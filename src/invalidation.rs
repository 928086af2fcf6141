use std::collections::HashMap;

use crate::model::pane::PaneId;

/// How much of a pane must be recomputed, from nothing to everything.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum InvalidationLevel {
    #[default]
    None,
    /// Crosshair moved; only cursor-driven views changed.
    Cursor,
    /// Data or options changed; structure unchanged.
    Light,
    /// Structural change; everything is rebuilt.
    Full,
}

/// A global invalidation level plus per-pane overrides. Merging keeps the
/// maximum level per pane.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InvalidateMask {
    global: InvalidationLevel,
    panes: HashMap<PaneId, InvalidationLevel>,
}

impl InvalidateMask {
    pub fn new(global: InvalidationLevel) -> Self {
        Self {
            global,
            panes: HashMap::new(),
        }
    }

    pub fn global_level(&self) -> InvalidationLevel {
        self.global
    }

    pub fn invalidate_pane(&mut self, pane_id: PaneId, level: InvalidationLevel) {
        let entry = self.panes.entry(pane_id).or_default();
        *entry = (*entry).max(level);
    }

    /// Effective level for a pane: the maximum of the global level and the
    /// pane's own override.
    pub fn pane_level(&self, pane_id: PaneId) -> InvalidationLevel {
        self.global
            .max(self.panes.get(&pane_id).copied().unwrap_or_default())
    }

    /// Highest level anywhere in the mask.
    pub fn max_level(&self) -> InvalidationLevel {
        self.panes
            .values()
            .copied()
            .fold(self.global, InvalidationLevel::max)
    }

    pub fn invalidates_anything(&self) -> bool {
        self.max_level() > InvalidationLevel::None
    }

    pub fn merge(&mut self, other: &InvalidateMask) {
        self.global = self.global.max(other.global);
        for (pane_id, level) in &other.panes {
            self.invalidate_pane(*pane_id, *level);
        }
    }
}
