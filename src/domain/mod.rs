//! Доменная модель Yatzy: кубики, рука, категории, игроки, игра, конфиг.

pub mod category;
pub mod config;
pub mod die;
pub mod game;
pub mod player;

/// Позиция игрока за столом (1-based, уникальна в рамках игры).
pub type Position = u32;

pub use category::*;
pub use config::*;
pub use die::*;
pub use game::*;
pub use player::*;
