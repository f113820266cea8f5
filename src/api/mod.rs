//! Внешний in-process API движка Yatzy.
//!
//! Здесь описываются:
//! - подсчёт очков по имени категории (scoring.rs) – вход с непроверенными данными;
//! - DTO (dto.rs) – удобные структуры для клиента;
//! - ошибки (errors.rs) – то, что видит клиент.

pub mod dto;
pub mod errors;
pub mod scoring;

pub use dto::*;
pub use errors::*;
pub use scoring::*;
