//! Справочные данные, которые фронтенд загружает один раз за сессию.

pub mod a001_product;
pub mod a002_client;
pub mod a003_machine;
pub mod a004_responsible;
