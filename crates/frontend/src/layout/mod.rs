pub mod global_context;
pub mod left;
pub mod pages;
pub mod top_header;

use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |  Sidebar  |          Pages               |
/// |   (Left)  |         (Center)             |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<T, L, C>(top: T, left: L, center: C) -> impl IntoView
where
    T: Fn() -> AnyView + 'static + Send,
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            {top()}
            <div class="app-body">
                {left()}
                <main class="app-main">
                    {center()}
                </main>
            </div>
        </div>
    }
}
