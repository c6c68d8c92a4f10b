use crate::layout::pages::{PageId, PageStore};
use web_sys::window;

pub fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Last visited page under a single localStorage key.
#[derive(Debug, Clone)]
pub struct LocalPageStore {
    key: String,
}

impl LocalPageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl PageStore for LocalPageStore {
    fn load_last_page(&self) -> Option<PageId> {
        let value = local_storage()?.get_item(&self.key).ok()??;
        PageId::from_fragment(&value)
    }

    fn save_last_page(&self, page: &PageId) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(&self.key, page.as_str());
        }
    }
}
