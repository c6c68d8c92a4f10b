pub mod api;
pub mod cache;

pub use api::{ApiError, HttpReferenceApi, ReferenceApi};
pub use cache::{Dataset, LoadReport, SharedDataCache};
