pub mod api_utils;
pub mod browser;
pub mod config;
pub mod data;
pub mod scheduler;
