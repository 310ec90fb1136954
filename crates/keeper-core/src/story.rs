//! Story detail loader: one story by id.

use std::cell::RefCell;
use std::rc::Rc;

use keeper_types::story::StoryDetail;

use crate::ports::BackendPort;

pub type StoryHandle = Rc<RefCell<StoryView>>;

#[derive(Debug)]
pub struct StoryView {
    story: Option<StoryDetail>,
    loading: bool,
}

/// What the detail view should draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoryStatus {
    Loading,
    Found,
    NotFound,
}

impl StoryView {
    /// A view starts out loading; it is created just before `load` runs
    pub fn new() -> Self {
        Self {
            story: None,
            loading: true,
        }
    }

    pub fn shared() -> StoryHandle {
        Rc::new(RefCell::new(Self::new()))
    }

    pub fn story(&self) -> Option<&StoryDetail> {
        self.story.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn status(&self) -> StoryStatus {
        match (self.loading, &self.story) {
            (true, _) => StoryStatus::Loading,
            (false, Some(_)) => StoryStatus::Found,
            (false, None) => StoryStatus::NotFound,
        }
    }
}

impl Default for StoryView {
    fn default() -> Self {
        Self::new()
    }
}

pub struct StoryDetailLoader {
    backend: Rc<dyn BackendPort>,
}

impl StoryDetailLoader {
    pub fn new(backend: Rc<dyn BackendPort>) -> Self {
        Self { backend }
    }

    /// Load one story. Any failure ends in the not-found state; there is no retry.
    pub async fn load(&self, id: &str, view: &StoryHandle) -> StoryStatus {
        view.borrow_mut().loading = true;
        let result = self.backend.story(id).await;

        let mut view = view.borrow_mut();
        view.loading = false;
        match result {
            Ok(story) => {
                view.story = Some(story);
            }
            Err(e) if e.is_not_found() => {
                log::warn!("Story {} not found", id);
                view.story = None;
            }
            Err(e) => {
                log::error!("Failed to fetch story {}: {}", id, e);
                view.story = None;
            }
        }
        view.status()
    }
}
