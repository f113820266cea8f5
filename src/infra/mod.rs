//! Инфраструктурный слой вокруг движка:
//! - RNG-реализации для бросков кубиков.

pub mod rng;

pub use rng::*;
