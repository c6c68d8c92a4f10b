//! web-sys implementations of the navigation ports and global listeners.

pub mod dom;
pub mod events;
pub mod history;
pub mod storage;

pub use dom::WebPageHost;
pub use history::BrowserHistory;
pub use storage::LocalPageStore;
