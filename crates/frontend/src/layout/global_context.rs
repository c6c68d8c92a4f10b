use crate::layout::pages::PageId;
use crate::system::readiness::SessionReadiness;
use contracts::system::auth::UserInfo;
use std::cell::{Cell, RefCell};

/// Process-wide application state.
///
/// Created once at startup and handed to the components that need it.
/// Fields change only through the setters below.
#[derive(Default)]
pub struct AppState {
    current_page: RefCell<Option<PageId>>,
    page_epoch: Cell<u64>,
    current_user: RefCell<Option<UserInfo>>,
    readiness: SessionReadiness,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_page(&self) -> Option<PageId> {
        self.current_page.borrow().clone()
    }

    pub fn is_current_page(&self, page: &PageId) -> bool {
        self.current_page.borrow().as_ref() == Some(page)
    }

    pub fn set_current_page(&self, page: PageId) {
        log::debug!("🔶 current page: '{}'", page);
        *self.current_page.borrow_mut() = Some(page);
        self.page_epoch.set(self.page_epoch.get() + 1);
    }

    /// Incremented on every page change, including re-entering the same page.
    /// Deferred work compares epochs to detect that the user moved on.
    pub fn page_epoch(&self) -> u64 {
        self.page_epoch.get()
    }

    pub fn current_user(&self) -> Option<UserInfo> {
        self.current_user.borrow().clone()
    }

    pub fn is_admin(&self) -> bool {
        self.current_user
            .borrow()
            .as_ref()
            .map(|u| u.is_admin)
            .unwrap_or(false)
    }

    /// Setting a user makes the session ready; clearing it (logout) resets
    /// readiness for the next sign-in.
    pub fn set_current_user(&self, user: Option<UserInfo>) {
        let signed_in = user.is_some();
        *self.current_user.borrow_mut() = user;
        if signed_in {
            self.readiness.mark_ready();
        } else {
            self.readiness.reset();
        }
    }

    pub fn readiness(&self) -> &SessionReadiness {
        &self.readiness
    }
}
