use super::{DrawTarget, PaneRenderer};

/// Draws an ordered list of renderers in turn.
#[derive(Default)]
pub struct CompositeRenderer {
    renderers: Vec<Box<dyn PaneRenderer>>,
}

impl CompositeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, renderer: Box<dyn PaneRenderer>) {
        self.renderers.push(renderer);
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }
}

impl PaneRenderer for CompositeRenderer {
    fn draw(&self, target: &mut dyn DrawTarget) {
        for renderer in &self.renderers {
            renderer.draw(target);
        }
    }
}
