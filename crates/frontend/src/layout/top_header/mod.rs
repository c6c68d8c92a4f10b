//! TopHeader component - application top bar.
//!
//! Contains:
//! - Mobile menu toggle
//! - Application title
//! - Logout button

use crate::app::use_runtime;
use crate::shared::browser::dom::toggle_mobile_nav;
use crate::system::auth::session;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn TopHeader() -> impl IntoView {
    let runtime = use_runtime();

    let logout = move |_| {
        spawn_local(async move {
            session::logout().await;
            runtime.get_value().sign_out();
        });
    };

    view! {
        <div class="top-header">
            <button
                class="top-header__icon-btn top-header__menu"
                on:click=move |_| toggle_mobile_nav()
                title="Menú"
            >
                "☰"
            </button>
            <div class="top-header__brand">
                <span class="top-header__title">"FriParts · FriMetals"</span>
            </div>
            <div class="top-header__actions">
                <button class="top-header__logout" on:click=logout>
                    "Cerrar sesión"
                </button>
            </div>
        </div>
    }
}
