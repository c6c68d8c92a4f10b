//! Page management
//!
//! Содержит:
//! - `page_id` - идентификатор страницы и контейнера
//! - `registry` - маппинг PageId → модуль (единственный источник правды)
//! - `lifecycle` - активация/деактивация модулей с повторным поиском
//! - `navigation` - контроллер переходов между страницами
//! - `ports` - трейты, через которые ядро работает с браузером
//! - `catalog` - заголовки страниц и группы меню
//! - `page` - компонент контейнера страницы

pub mod catalog;
pub mod lifecycle;
pub mod navigation;
pub mod page;
pub mod page_id;
pub mod ports;
pub mod registry;

pub use lifecycle::ModuleLifecycle;
pub use navigation::{NavigationController, NavigationError};
pub use page::PageContainer;
pub use page_id::PageId;
pub use ports::{HistoryPort, PageHost, PageStore};
pub use registry::{ModuleRegistry, PageModule, Resolution};
