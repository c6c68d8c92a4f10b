use crate::layout::pages::{PageId, PageModule};
use std::cell::Cell;

/// Landing page. Shown before login, so it does not wait for a session.
#[derive(Default)]
pub struct DashboardModule {
    visits: Cell<u32>,
}

impl DashboardModule {
    pub fn visits(&self) -> u32 {
        self.visits.get()
    }
}

impl PageModule for DashboardModule {
    fn name(&self) -> &str {
        "dashboard"
    }

    fn activate(&self, _page: &PageId) {
        self.visits.set(self.visits.get() + 1);
        log::debug!("dashboard shown ({} time(s))", self.visits.get());
    }

    fn requires_session(&self) -> bool {
        false
    }
}
