//! Generic module for list/form pages whose only lifecycle concern is the
//! reference data they display.

use crate::layout::pages::{PageId, PageModule};
use crate::shared::data::{Dataset, SharedDataCache};
use std::cell::Cell;
use std::rc::Rc;

pub struct DataPageModule {
    name: &'static str,
    cache: Rc<SharedDataCache>,
    needs: &'static [Dataset],
    active: Cell<bool>,
}

impl DataPageModule {
    pub fn new(name: &'static str, cache: Rc<SharedDataCache>, needs: &'static [Dataset]) -> Rc<Self> {
        Rc::new(Self {
            name,
            cache,
            needs,
            active: Cell::new(false),
        })
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    /// Datasets this page needs that are currently empty.
    pub fn missing_data(&self) -> Vec<Dataset> {
        self.needs
            .iter()
            .copied()
            .filter(|dataset| self.cache.len(*dataset) == 0)
            .collect()
    }
}

impl PageModule for DataPageModule {
    fn name(&self) -> &str {
        self.name
    }

    fn activate(&self, page: &PageId) {
        self.active.set(true);
        let missing = self.missing_data();
        if missing.is_empty() {
            log::debug!("{}: '{}' ready", self.name, page);
        } else {
            // Rendered with empty lists; the page stays usable.
            log::warn!("{}: no data for {:?}", self.name, missing);
        }
    }

    fn deactivate(&self) {
        self.active.set(false);
    }
}
