//! Движок подсчёта очков для Yatzy.
//!
//! Слои:
//! - `domain` – кубики, рука из пяти кубиков, категории, игрок, игра, конфиг;
//! - `eval` – оценщики категорий (chance, yatzy, пары, стриты и т.д.);
//! - `engine` – применение очков к игроку, минимальный игровой цикл, история событий;
//! - `infra` – RNG-реализации для движка;
//! - `api` – внешний in-process API и DTO.

pub mod api;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;

pub use domain::{CategoryId, Game, Hand, Player, Position};
pub use engine::{EngineError, GameEngine};
pub use eval::{score, standard_categories, Category, CategorySet};
