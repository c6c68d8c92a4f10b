//! Sidebar menu.
//!
//! Items carry `data-page`; click handlers are attached by
//! `shared::browser::events::bind_menu` once the shell is mounted.

use crate::layout::pages::catalog::{pages_in, MENU_GROUPS};
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside id="sidebar" class="sidebar">
            <nav class="sidebar__nav">
                {MENU_GROUPS
                    .iter()
                    .map(|group| {
                        view! {
                            <div class=if group.admin_only {
                                "sidebar__group admin-only"
                            } else {
                                "sidebar__group"
                            }>
                                <div class="sidebar__group-label">{group.label}</div>
                                <ul class="sidebar__items">
                                    {pages_in(group.id)
                                        .map(|entry| {
                                            view! {
                                                <li class="sidebar__item">
                                                    <a href=format!("#{}", entry.id) data-page=entry.id>
                                                        {entry.label}
                                                    </a>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}
