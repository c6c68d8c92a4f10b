use crate::layout::pages::{HistoryPort, PageId};
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;
use web_sys::window;

/// `history.state` payload: `{ page }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub page: PageId,
}

/// Page stored in a `popstate` event state, if any.
pub fn page_from_state(state: JsValue) -> Option<PageId> {
    if state.is_null() || state.is_undefined() {
        return None;
    }
    serde_wasm_bindgen::from_value::<HistoryEntry>(state)
        .map(|entry| entry.page)
        .ok()
}

/// Current `location.hash`, e.g. `#inventario`.
pub fn current_fragment() -> Option<String> {
    window()?
        .location()
        .hash()
        .ok()
        .filter(|hash| !hash.is_empty())
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserHistory;

impl BrowserHistory {
    fn write(&self, page: &PageId, replace: bool) {
        let Some(history) = window().and_then(|w| w.history().ok()) else {
            return;
        };
        let state = match serde_wasm_bindgen::to_value(&HistoryEntry { page: page.clone() }) {
            Ok(state) => state,
            Err(e) => {
                log::error!("cannot encode history state for '{}': {}", page, e);
                return;
            }
        };
        let url = page.fragment();
        let result = if replace {
            history.replace_state_with_url(&state, "", Some(&url))
        } else {
            history.push_state_with_url(&state, "", Some(&url))
        };
        if let Err(e) = result {
            log::warn!("history update for '{}' failed: {:?}", page, e);
        }
    }
}

impl HistoryPort for BrowserHistory {
    fn push(&self, page: &PageId) {
        self.write(page, false);
    }

    fn replace(&self, page: &PageId) {
        self.write(page, true);
    }
}
