use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::category::CategoryId;
use crate::domain::game::GameError;
use crate::domain::Position;

/// Состояние игрока в партии: позиция, очки и какие категории уже закрыты.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub position: Position,
    pub points: u32,
    /// Для каждой из 15 категорий – использована ли она.
    pub categories: BTreeMap<CategoryId, bool>,
}

impl Player {
    /// Новый игрок: 0 очков, все категории свободны.
    pub fn new(position: Position) -> Self {
        Self {
            position,
            points: 0,
            categories: CategoryId::ALL.iter().map(|&id| (id, false)).collect(),
        }
    }

    pub fn is_used(&self, category: CategoryId) -> bool {
        self.categories.get(&category).copied().unwrap_or(false)
    }

    /// Свободные категории в порядке набора.
    pub fn unused_categories(&self) -> Vec<CategoryId> {
        CategoryId::ALL
            .iter()
            .copied()
            .filter(|&id| !self.is_used(id))
            .collect()
    }

    /// Все категории закрыты – игроку больше нечего записывать.
    pub fn is_finished(&self) -> bool {
        CategoryId::ALL.iter().all(|&id| self.is_used(id))
    }

    /// Записать очки в категорию.
    ///
    /// Категорию можно использовать только один раз; повторная запись
    /// отклоняется и очки не меняются. Возвращает новую сумму очков.
    pub fn apply_score(&mut self, category: CategoryId, points: u32) -> Result<u32, GameError> {
        if self.is_used(category) {
            return Err(GameError::CategoryAlreadyUsed {
                position: self.position,
                category,
            });
        }

        self.categories.insert(category, true);
        self.points = self.points.saturating_add(points);
        Ok(self.points)
    }
}
