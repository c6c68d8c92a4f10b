//! Navigation controller - переключение страниц.
//!
//! Порядок перехода: деактивация текущего модуля → скрытие всех контейнеров →
//! показ целевого → меню → history → `current_page` → активация нового модуля.
//! `current_page` обновляется до активации, чтобы модуль видел себя текущим.

use super::lifecycle::ModuleLifecycle;
use super::page_id::PageId;
use super::ports::{HistoryPort, PageHost, PageStore};
use crate::layout::global_context::AppState;
use crate::shared::config::NavigationConfig;
use contracts::system::auth::UserInfo;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("container `{container}` for page `{page}` not found")]
    MissingContainer { page: PageId, container: String },
}

pub struct NavigationController {
    state: Rc<AppState>,
    host: Rc<dyn PageHost>,
    history: Rc<dyn HistoryPort>,
    store: Rc<dyn PageStore>,
    lifecycle: Rc<ModuleLifecycle>,
    config: NavigationConfig,
}

impl NavigationController {
    pub fn new(
        state: Rc<AppState>,
        host: Rc<dyn PageHost>,
        history: Rc<dyn HistoryPort>,
        store: Rc<dyn PageStore>,
        lifecycle: Rc<ModuleLifecycle>,
        config: NavigationConfig,
    ) -> Self {
        Self {
            state,
            host,
            history,
            store,
            lifecycle,
            config,
        }
    }

    pub fn default_page(&self) -> &PageId {
        &self.config.default_page
    }

    pub fn current_page(&self) -> Option<PageId> {
        self.state.current_page()
    }

    /// Container id rendering `page`, following the alias table.
    pub fn effective_container(&self, page: &PageId) -> String {
        self.config.container_page(page).container_id()
    }

    pub fn has_container(&self, page: &PageId) -> bool {
        self.host.container_exists(&self.effective_container(page))
    }

    pub fn go_to(&self, page: &PageId, record_history: bool) -> Result<(), NavigationError> {
        if self.config.requires_admin(page)
            && self.state.current_user().is_some()
            && !self.state.is_admin()
            && page != self.default_page()
        {
            log::warn!("⛔ '{}' requires admin, redirecting to '{}'", page, self.default_page());
            let fallback = self.default_page().clone();
            return self.go_to(&fallback, record_history);
        }

        let container = self.effective_container(page);
        if !self.host.container_exists(&container) {
            log::error!("❌ container '{}' not found, staying on current page", container);
            return Err(NavigationError::MissingContainer {
                page: page.clone(),
                container,
            });
        }

        log::info!("🔷 go_to: '{}' (container '{}')", page, container);
        self.lifecycle.deactivate_active();

        self.host.hide_all_pages();
        self.host.show_page(&container);
        self.host.highlight_menu(page);
        self.host.close_mobile_nav();

        if record_history {
            self.history.push(page);
        }

        self.state.set_current_page(page.clone());
        self.store.save_last_page(page);

        self.lifecycle.activate_page(page);
        Ok(())
    }

    /// Moves off an admin-only page that `user` may not see. Must run before
    /// the user is set, so the page's pending activation goes stale instead
    /// of firing on session ready.
    pub fn leave_forbidden_page(&self, user: &UserInfo) -> Result<bool, NavigationError> {
        let Some(page) = self.current_page() else {
            return Ok(false);
        };
        if user.is_admin || !self.config.requires_admin(&page) {
            return Ok(false);
        }
        let fallback = self.default_page().clone();
        log::warn!(
            "⛔ '{}' requires admin, '{}' is redirected to '{}'",
            page,
            user.username,
            fallback
        );
        self.go_to(&fallback, false)?;
        self.history.replace(&fallback);
        Ok(true)
    }

    /// Back/forward. Entries without a page fall back to the default page.
    pub fn handle_pop_state(&self, page: Option<PageId>) -> Result<(), NavigationError> {
        let target = page.unwrap_or_else(|| self.default_page().clone());
        log::debug!("popstate → '{}'", target);
        match self.go_to(&target, false) {
            Err(NavigationError::MissingContainer { .. }) if &target != self.default_page() => {
                let fallback = self.default_page().clone();
                self.go_to(&fallback, false)
            }
            result => result,
        }
    }

    /// Startup priority: deep link, division landing, persisted page, default.
    /// Each candidate applies only if its container exists.
    pub fn resolve_initial_page(
        &self,
        fragment: Option<&str>,
        forced_landing: Option<PageId>,
    ) -> PageId {
        if let Some(page) = fragment.and_then(PageId::from_fragment) {
            if self.has_container(&page) {
                log::debug!("startup: deep link '{}'", page);
                return page;
            }
            log::warn!("startup: deep link '{}' has no container, ignoring", page);
        }

        if let Some(page) = forced_landing.filter(|p| self.has_container(p)) {
            log::debug!("startup: division landing '{}'", page);
            return page;
        }

        if let Some(page) = self.store.load_last_page().filter(|p| self.has_container(p)) {
            log::debug!("startup: restoring '{}'", page);
            return page;
        }

        self.default_page().clone()
    }

    /// Shows the initial page. The current history entry is rewritten rather
    /// than pushed, so the first load does not add a duplicate entry.
    pub fn start(
        &self,
        fragment: Option<&str>,
        forced_landing: Option<PageId>,
    ) -> Result<PageId, NavigationError> {
        let page = self.resolve_initial_page(fragment, forced_landing);
        self.go_to(&page, false)?;
        let shown = self.current_page().unwrap_or(page);
        self.history.replace(&shown);
        Ok(shown)
    }
}
