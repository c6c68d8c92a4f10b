//! Window-level listeners: menu clicks, back/forward and global error logging.
//!
//! Closures are leaked with `forget`; they live as long as the page.

use super::dom::query_all;
use super::history::page_from_state;
use crate::layout::pages::{NavigationController, PageId};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, ErrorEvent, Event, PopStateEvent, PromiseRejectionEvent};

/// Routes clicks on `[data-page]` elements to the navigation controller.
pub fn bind_menu(navigation: Rc<NavigationController>) {
    let items = query_all("[data-page]");
    log::debug!("binding {} menu item(s)", items.len());
    for item in items {
        let Some(page) = item.get_attribute("data-page").map(PageId::from) else {
            continue;
        };
        let navigation = Rc::clone(&navigation);
        let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();
            if let Err(e) = navigation.go_to(&page, true) {
                log::error!("menu navigation failed: {}", e);
            }
        });
        if item
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .is_ok()
        {
            on_click.forget();
        }
    }
}

pub fn bind_pop_state(navigation: Rc<NavigationController>) {
    let Some(w) = window() else {
        return;
    };
    let on_pop = Closure::<dyn FnMut(PopStateEvent)>::new(move |event: PopStateEvent| {
        let page = page_from_state(event.state());
        if let Err(e) = navigation.handle_pop_state(page) {
            log::error!("back/forward navigation failed: {}", e);
        }
    });
    if w
        .add_event_listener_with_callback("popstate", on_pop.as_ref().unchecked_ref())
        .is_ok()
    {
        on_pop.forget();
    }
}

/// Logs uncaught errors and unhandled promise rejections. Nothing else is
/// interrupted.
pub fn install_global_error_handlers() {
    let Some(w) = window() else {
        return;
    };

    let on_error = Closure::<dyn FnMut(ErrorEvent)>::new(|event: ErrorEvent| {
        log::error!(
            "uncaught error: {} ({}:{}:{})",
            event.message(),
            event.filename(),
            event.lineno(),
            event.colno()
        );
    });
    if w
        .add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref())
        .is_ok()
    {
        on_error.forget();
    }

    let on_rejection =
        Closure::<dyn FnMut(PromiseRejectionEvent)>::new(|event: PromiseRejectionEvent| {
            log::error!("unhandled promise rejection: {:?}", event.reason());
        });
    if w
        .add_event_listener_with_callback(
            "unhandledrejection",
            on_rejection.as_ref().unchecked_ref(),
        )
        .is_ok()
    {
        on_rejection.forget();
    }
}
