//! PageContainer - контейнер страницы `{id}-page`.
//!
//! Видимостью управляет `NavigationController` через CSS class `active`,
//! компонент только рендерит разметку.

use super::catalog::page_label;
use leptos::prelude::*;

#[component]
pub fn PageContainer(id: &'static str) -> impl IntoView {
    view! {
        <section id=format!("{}-page", id) class="page" data-container=id>
            <header class="page__header">
                <h2>{page_label(id)}</h2>
            </header>
            <div class="page__body" id=format!("{}-content", id)></div>
        </section>
    }
}
