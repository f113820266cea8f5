use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::category::CategoryId;
use crate::domain::player::Player;
use crate::domain::Position;

/// Ошибки состояния партии.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Количество игроков должно быть положительным, получено {0}")]
    InvalidPlayerCount(u32),

    #[error("Игрок на позиции {0} не найден")]
    PlayerNotFound(Position),

    #[error("Игрок {position} уже использовал категорию {category}")]
    CategoryAlreadyUsed {
        position: Position,
        category: CategoryId,
    },
}

/// Партия: упорядоченный список игроков с позициями 1..=N.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Game {
    pub players: Vec<Player>,
    /// Индекс игрока в `players`, чей сейчас ход.
    pub current: usize,
}

impl Game {
    /// Создать партию на `player_count` мест.
    pub fn new(player_count: u32) -> Result<Self, GameError> {
        if player_count == 0 {
            return Err(GameError::InvalidPlayerCount(player_count));
        }

        Ok(Self {
            players: (1..=player_count).map(Player::new).collect(),
            current: 0,
        })
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn player(&self, position: Position) -> Option<&Player> {
        self.players.iter().find(|p| p.position == position)
    }

    pub fn player_mut(&mut self, position: Position) -> Result<&mut Player, GameError> {
        self.players
            .iter_mut()
            .find(|p| p.position == position)
            .ok_or(GameError::PlayerNotFound(position))
    }

    /// Игрок, чей сейчас ход.
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current)
    }

    /// Передать ход следующему незакончившему игроку (по кругу).
    ///
    /// Если закончили все – индекс не меняется.
    pub fn advance_turn(&mut self) {
        let n = self.players.len();
        for step in 1..=n {
            let idx = (self.current + step) % n;
            if !self.players[idx].is_finished() {
                self.current = idx;
                return;
            }
        }
    }

    pub fn is_finished(&self) -> bool {
        self.players.iter().all(Player::is_finished)
    }

    /// Таблица: по убыванию очков, при равенстве – по позиции.
    pub fn standings(&self) -> Vec<(Position, u32)> {
        let mut table: Vec<(Position, u32)> =
            self.players.iter().map(|p| (p.position, p.points)).collect();
        table.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        table
    }

    /// Все игроки с максимальным количеством очков.
    pub fn leaders(&self) -> Vec<Position> {
        let best = self.players.iter().map(|p| p.points).max().unwrap_or(0);
        self.players
            .iter()
            .filter(|p| p.points == best)
            .map(|p| p.position)
            .collect()
    }
}
