//! Dashboard aggregator: stories, stats and timeline as one consistent view.
//!
//! The three reads run concurrently and are joined all-or-nothing: the view
//! either keeps what it had or receives the complete new triple, never a mix.
//! Only the most recently started load may touch the view; an older load
//! that settles late is discarded.

use std::cell::RefCell;
use std::rc::Rc;

use keeper_types::{
    Result,
    dashboard::{DashboardSnapshot, ResolvedStat},
};

use crate::ports::BackendPort;

pub type DashboardHandle = Rc<RefCell<DashboardView>>;

/// Render state of the archive view
#[derive(Debug, Default)]
pub struct DashboardView {
    snapshot: Option<DashboardSnapshot>,
    loading: bool,
    /// Bumped by every load; a load only commits while it is current
    generation: u64,
}

impl DashboardView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> DashboardHandle {
        Rc::new(RefCell::new(Self::new()))
    }

    /// The last fully committed triple, if any
    pub fn snapshot(&self) -> Option<&DashboardSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.generation
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    fn commit(&mut self, snapshot: DashboardSnapshot) {
        self.snapshot = Some(snapshot);
    }
}

pub struct DashboardAggregator {
    backend: Rc<dyn BackendPort>,
}

impl DashboardAggregator {
    pub fn new(backend: Rc<dyn BackendPort>) -> Self {
        Self { backend }
    }

    /// Fetch all three sources and commit them together.
    /// Returns whether the view was updated; failures are logged only.
    /// A load overtaken by a newer one leaves the view alone.
    pub async fn load(&self, view: &DashboardHandle) -> bool {
        let generation = view.borrow_mut().begin();
        let result = self.fetch().await;

        let mut view = view.borrow_mut();
        if !view.is_current(generation) {
            log::debug!("Dropping dashboard load #{}, superseded", generation);
            return false;
        }
        view.loading = false;
        match result {
            Ok(snapshot) => {
                log::info!(
                    "Dashboard loaded: {} stories, {} stats, {} timeline events",
                    snapshot.stories.len(),
                    snapshot.stats.len(),
                    snapshot.timeline.len()
                );
                view.commit(snapshot);
                true
            }
            Err(e) => {
                log::error!("Failed to fetch dashboard data: {}", e);
                false
            }
        }
    }

    /// Structured join of the three reads. The first failure fails the group.
    pub async fn fetch(&self) -> Result<DashboardSnapshot> {
        let (stories, stats, timeline) = futures::try_join!(
            self.backend.stories(),
            self.backend.dashboard_stats(),
            self.backend.timeline(),
        )?;

        Ok(DashboardSnapshot {
            stories,
            stats: stats.into_iter().map(ResolvedStat::from).collect(),
            timeline,
        })
    }
}
