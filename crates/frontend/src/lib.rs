pub mod app;
pub mod app_shell;
pub mod layout;
pub mod modules;
pub mod runtime;
pub mod shared;
pub mod system;

#[cfg(test)]
pub(crate) mod test_support;

use crate::app::App;
use crate::runtime::{AppRuntime, Ports};
use crate::shared::browser::dom::WebPageHost;
use crate::shared::browser::events::{bind_menu, bind_pop_state, install_global_error_handlers};
use crate::shared::browser::history::{current_fragment, BrowserHistory};
use crate::shared::browser::storage::LocalPageStore;
use crate::shared::data::HttpReferenceApi;
use crate::shared::scheduler::TimeoutScheduler;
use leptos::prelude::*;
use std::rc::Rc;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    install_global_error_handlers();

    let config = match shared::config::load_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("❌ {}", e);
            return;
        }
    };
    shared::api_utils::configure_api_port(config.api.port);

    let store = LocalPageStore::new(config.navigation.storage_key.clone());
    let runtime = AppRuntime::new(
        config,
        Ports {
            host: Rc::new(WebPageHost::new()),
            history: Rc::new(BrowserHistory),
            store: Rc::new(store),
            api: Rc::new(HttpReferenceApi::new()),
            scheduler: Rc::new(TimeoutScheduler),
        },
    );
    modules::register_all(runtime.registry(), runtime.cache());

    let app_runtime = Rc::clone(&runtime);
    leptos::mount::mount_to_body(move || view! { <App runtime=app_runtime /> });

    // The menu and page containers exist once the shell is mounted.
    bind_menu(Rc::clone(runtime.navigation()));
    bind_pop_state(Rc::clone(runtime.navigation()));

    wasm_bindgen_futures::spawn_local(async move {
        let session = system::auth::session::restore_session().await;
        runtime.start(current_fragment(), session).await;
    });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
