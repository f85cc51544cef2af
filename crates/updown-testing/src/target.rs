//! Display target that remembers every write.

use std::sync::{Arc, Mutex};

use updown_render::domain::target::DisplayTarget;

/// Records each `render` call in order. Clones share the same log, so a test
/// can hand one clone to the code under test and inspect the other.
#[derive(Clone, Default)]
pub struct RecordingTarget {
    writes: Arc<Mutex<Vec<String>>>,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `initial` already rendered, as if the page had content.
    pub fn with_initial(initial: &str) -> Self {
        let target = Self::new();
        target.render(initial);
        target
    }

    /// Everything rendered so far, oldest first.
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }

    /// Current content: the last write, or `None` if nothing was rendered.
    pub fn current(&self) -> Option<String> {
        self.writes.lock().unwrap().last().cloned()
    }

    pub fn write_count(&self) -> usize {
        self.writes.lock().unwrap().len()
    }
}

impl DisplayTarget for RecordingTarget {
    fn render(&self, text: &str) {
        self.writes.lock().unwrap().push(text.to_owned());
    }
}
