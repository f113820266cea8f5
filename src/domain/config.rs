use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::eval::{CategoryConfigError, CategorySet};

/// Ошибки загрузки конфига партии.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Не удалось разобрать JSON конфига: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Количество игроков должно быть положительным, получено {0}")]
    InvalidPlayerCount(u32),

    #[error("Некорректный набор категорий: {0}")]
    Category(#[from] CategoryConfigError),
}

/// Конфигурация партии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameConfig {
    /// Сколько мест за столом (позиции 1..=player_count).
    pub player_count: u32,
    /// Seed для детерминированного RNG. `None` – системный RNG.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Идентификаторы категорий (`sum:4`, `kind:3`, ...). `None` – стандартный набор.
    #[serde(default)]
    pub categories: Option<Vec<String>>,
}

impl GameConfig {
    pub fn new(player_count: u32) -> Self {
        Self {
            player_count,
            seed: None,
            categories: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_categories<I, S>(mut self, identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = Some(identifiers.into_iter().map(Into::into).collect());
        self
    }

    /// Загрузить конфиг из JSON-строки и проверить его.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_count == 0 {
            return Err(ConfigError::InvalidPlayerCount(self.player_count));
        }
        self.category_set()?;
        Ok(())
    }

    /// Набор категорий партии: из списка идентификаторов или стандартный.
    pub fn category_set(&self) -> Result<CategorySet, ConfigError> {
        match &self.categories {
            Some(identifiers) => Ok(CategorySet::from_identifiers(
                identifiers.iter().map(String::as_str),
            )?),
            None => Ok(CategorySet::standard()),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(2)
    }
}
