//! Application Shell - корневая разметка приложения
//!
//! Содержит:
//! - `AppShell` - верхняя панель, меню, контейнеры всех страниц и форма входа
//!
//! Все контейнеры рендерятся сразу; какой из них виден, решает
//! `NavigationController`. Форма входа скрывается через класс
//! `authenticated` на `<body>`.

use crate::layout::left::Sidebar;
use crate::layout::pages::catalog::container_pages;
use crate::layout::pages::PageContainer;
use crate::layout::top_header::TopHeader;
use crate::layout::Shell;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

#[component]
pub fn AppShell() -> impl IntoView {
    view! {
        <Shell
            top=|| view! { <TopHeader /> }.into_any()
            left=|| view! { <Sidebar /> }.into_any()
            center=|| {
                container_pages()
                    .into_iter()
                    .map(|id| view! { <PageContainer id=id /> })
                    .collect_view()
                    .into_any()
            }
        />
        <LoginPage />
    }
}
