use crate::layout::pages::{PageHost, PageId};
use contracts::system::auth::UserInfo;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, CustomEvent, CustomEventInit, Document, Element};

const ACTIVE: &str = "active";
const SIDEBAR_ID: &str = "sidebar";
pub const USER_READY_EVENT: &str = "user-ready";

fn document() -> Option<Document> {
    window()?.document()
}

/// Elements matching `selector`, skipping non-element nodes.
pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(nodes) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn toggle_mobile_nav() {
    if let Some(sidebar) = document().and_then(|d| d.get_element_by_id(SIDEBAR_ID)) {
        let _ = sidebar.class_list().toggle("open");
    }
}

/// Page containers are `.page` elements with id `{page}-page`.
#[derive(Debug, Default, Clone, Copy)]
pub struct WebPageHost;

impl WebPageHost {
    pub fn new() -> Self {
        Self
    }
}

impl PageHost for WebPageHost {
    fn container_exists(&self, container_id: &str) -> bool {
        document()
            .and_then(|d| d.get_element_by_id(container_id))
            .is_some()
    }

    fn hide_all_pages(&self) {
        for page in query_all(".page") {
            let _ = page.class_list().remove_1(ACTIVE);
        }
    }

    fn show_page(&self, container_id: &str) {
        if let Some(container) = document().and_then(|d| d.get_element_by_id(container_id)) {
            let _ = container.class_list().add_1(ACTIVE);
        }
    }

    fn highlight_menu(&self, page: &PageId) {
        for item in query_all("[data-page]") {
            let selected = item.get_attribute("data-page").as_deref() == Some(page.as_str());
            let _ = item.class_list().toggle_with_force(ACTIVE, selected);
        }
    }

    fn close_mobile_nav(&self) {
        if let Some(sidebar) = document().and_then(|d| d.get_element_by_id(SIDEBAR_ID)) {
            let _ = sidebar.class_list().remove_1("open");
        }
    }

    fn alert(&self, message: &str) {
        if let Some(w) = window() {
            let _ = w.alert_with_message(message);
        }
    }

    fn announce_session(&self, user: Option<&UserInfo>) {
        let Some(w) = window() else {
            return;
        };
        if let Some(body) = w.document().and_then(|d| d.body()) {
            let _ = body
                .class_list()
                .toggle_with_force("authenticated", user.is_some());
        }
        let Some(user) = user else {
            return;
        };

        let init = CustomEventInit::new();
        init.set_detail(&JsValue::from_str(&user.username));
        match CustomEvent::new_with_event_init_dict(USER_READY_EVENT, &init) {
            Ok(event) => {
                let _ = w.dispatch_event(&event);
            }
            Err(e) => log::error!("cannot create {} event: {:?}", USER_READY_EVENT, e),
        }
    }
}
