use serde::{Deserialize, Serialize};

use crate::domain::die::HandError;
use crate::engine::EngineError;
use crate::eval::CategoryConfigError;

/// Ошибки внешнего API (то, что отдаём клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильная рука (длина, значения вне 1..=6, мусор в строке).
    BadRequest(String),

    /// Категория с таким именем/идентификатором не существует.
    UnknownCategory(String),

    /// Ошибка конфигурации набора категорий.
    InvalidConfig(String),

    /// Ошибка движка (категория уже занята, партия окончена и т.п.).
    EngineError(String),
}

impl From<HandError> for ApiError {
    fn from(err: HandError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<CategoryConfigError> for ApiError {
    fn from(err: CategoryConfigError) -> Self {
        ApiError::InvalidConfig(err.to_string())
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Hand(e) => ApiError::BadRequest(e.to_string()),
            other => ApiError::EngineError(other.to_string()),
        }
    }
}
