//! Порты навигации: всё, что контроллер делает с браузером, идёт через эти
//! трейты. Реализации для web-sys лежат в `shared::browser`.

use super::page_id::PageId;
use contracts::system::auth::UserInfo;

/// Page containers, menu entries and user-facing notifications.
pub trait PageHost {
    fn container_exists(&self, container_id: &str) -> bool;

    /// Removes the active marker from every page container.
    fn hide_all_pages(&self);

    fn show_page(&self, container_id: &str);

    /// Marks menu entries whose `data-page` equals `page` as active and
    /// clears the others.
    fn highlight_menu(&self, page: &PageId);

    fn close_mobile_nav(&self);

    /// Blocking notification for critical failures.
    fn alert(&self, message: &str);

    /// Broadcasts session changes to listeners outside the core.
    fn announce_session(&self, _user: Option<&UserInfo>) {}
}

pub trait HistoryPort {
    /// Adds a history entry for `page`.
    fn push(&self, page: &PageId);

    /// Rewrites the current history entry without adding one.
    fn replace(&self, page: &PageId);
}

/// Last visited page, consulted only at startup.
pub trait PageStore {
    fn load_last_page(&self) -> Option<PageId>;
    fn save_last_page(&self, page: &PageId);
}
