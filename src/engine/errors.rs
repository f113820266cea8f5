use crate::domain::config::ConfigError;
use crate::domain::die::HandError;
use crate::domain::game::GameError;

use thiserror::Error;

/// Ошибки движка партии.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Game(#[from] GameError),

    #[error(transparent)]
    Hand(#[from] HandError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Партия уже завершена")]
    GameFinished,
}
