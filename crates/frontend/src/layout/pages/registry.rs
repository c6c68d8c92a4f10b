//! Module registry - единственный источник правды для маппинга PageId → модуль.
//!
//! Один модуль может обслуживать несколько страниц (например, модуль
//! производства обслуживает все страницы этапов и сам настраивается по PageId).
//! Страница без модуля допустима, если она объявлена статической.

use super::page_id::PageId;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

/// Lifecycle hooks of a UI module. Both hooks are optional.
pub trait PageModule {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Called after the page became the current page. `page` is the logical
    /// page id, so a module serving several pages can configure itself.
    fn activate(&self, _page: &PageId) {}

    /// Called before another page is shown.
    fn deactivate(&self) {}

    /// Modules returning `false` are activated without waiting for a session.
    fn requires_session(&self) -> bool {
        true
    }
}

/// Result of a registry lookup.
#[derive(Clone)]
pub enum Resolution {
    Module(Rc<dyn PageModule>),
    /// Page is known to have no module (pure markup).
    Static,
    NotFound,
}

impl Resolution {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Resolution::NotFound)
    }
}

impl std::fmt::Debug for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resolution::Module(module) => write!(f, "Module({})", module.name()),
            Resolution::Static => f.write_str("Static"),
            Resolution::NotFound => f.write_str("NotFound"),
        }
    }
}

#[derive(Default)]
pub struct ModuleRegistry {
    modules: RefCell<HashMap<PageId, Rc<dyn PageModule>>>,
    static_pages: RefCell<HashSet<PageId>>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, page: impl Into<PageId>, module: Rc<dyn PageModule>) {
        let page = page.into();
        log::debug!("registry: {} -> {}", page, module.name());
        self.static_pages.borrow_mut().remove(&page);
        self.modules.borrow_mut().insert(page, module);
    }

    pub fn register_many<I, P>(&self, pages: I, module: Rc<dyn PageModule>)
    where
        I: IntoIterator<Item = P>,
        P: Into<PageId>,
    {
        for page in pages {
            self.register(page, Rc::clone(&module));
        }
    }

    pub fn register_static(&self, page: impl Into<PageId>) {
        let page = page.into();
        if self.modules.borrow().contains_key(&page) {
            log::warn!("registry: {} already has a module, not marking static", page);
            return;
        }
        self.static_pages.borrow_mut().insert(page);
    }

    pub fn resolve(&self, page: &PageId) -> Resolution {
        if let Some(module) = self.modules.borrow().get(page) {
            return Resolution::Module(Rc::clone(module));
        }
        if self.static_pages.borrow().contains(page) {
            Resolution::Static
        } else {
            Resolution::NotFound
        }
    }

    pub fn len(&self) -> usize {
        self.modules.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.borrow().is_empty()
    }
}
