use std::collections::VecDeque;

use crate::types::AnimatableObject;

pub type LoadResult = Result<AnimatableObject, Box<dyn std::error::Error>>;

/// External asset delivery seam.
///
/// The session polls once per tick. A delivered object joins the registry; a
/// failure is logged and leaves the scene untouched. It never aborts the
/// frame loop.
pub trait AssetLoader {
    fn poll(&mut self) -> Option<LoadResult>;
}

/// Queue-backed loader for demos and tests: yields prepared results one per
/// poll, in order.
#[derive(Default)]
pub struct QueuedAssets {
    queue: VecDeque<LoadResult>,
}

impl QueuedAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deliver(&mut self, object: AnimatableObject) {
        self.queue.push_back(Ok(object));
    }

    pub fn fail(&mut self, message: &str) {
        self.queue.push_back(Err(message.to_string().into()));
    }
}

impl AssetLoader for QueuedAssets {
    fn poll(&mut self) -> Option<LoadResult> {
        self.queue.pop_front()
    }
}
