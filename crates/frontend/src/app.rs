use crate::app_shell::AppShell;
use crate::runtime::AppRuntime;
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use std::rc::Rc;

/// The runtime is single-threaded (`Rc`), so it lives in local storage.
pub type RuntimeHandle = StoredValue<Rc<AppRuntime>, LocalStorage>;

#[component]
pub fn App(runtime: Rc<AppRuntime>) -> impl IntoView {
    // Provide the runtime to the whole app via context.
    provide_context::<RuntimeHandle>(StoredValue::new_local(runtime));

    view! {
        <AppShell />
    }
}

/// Hook to access the runtime
pub fn use_runtime() -> RuntimeHandle {
    use_context::<RuntimeHandle>().expect("App runtime not found in component tree")
}
