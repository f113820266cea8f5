use serde::{Deserialize, Serialize};

use crate::domain::category::CategoryId;
use crate::domain::config::GameConfig;
use crate::domain::die::Hand;
use crate::domain::game::{Game, GameError};
use crate::domain::player::Player;
use crate::domain::Position;
use crate::engine::errors::EngineError;
use crate::engine::game_history::{GameEventKind, GameHistory};
use crate::engine::RandomSource;
use crate::eval::CategorySet;

/// Результат одного хода.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TurnOutcome {
    pub position: Position,
    pub hand: Hand,
    pub category: CategoryId,
    pub points: u32,
    pub total: u32,
}

/// Итог партии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSummary {
    /// (позиция, очки) по убыванию очков.
    pub standings: Vec<(Position, u32)>,
    /// Все игроки с лучшим результатом (ничья = несколько).
    pub winners: Vec<Position>,
    pub turns_played: u32,
}

/// Партия + набор категорий + история событий.
pub struct GameEngine {
    pub game: Game,
    pub history: GameHistory,
    pub turns_played: u32,
    categories: CategorySet,
}

impl GameEngine {
    /// Партия на `player_count` игроков со стандартным набором категорий.
    pub fn new(player_count: u32) -> Result<Self, EngineError> {
        Self::with_categories(player_count, CategorySet::standard())
    }

    pub fn with_categories(
        player_count: u32,
        categories: CategorySet,
    ) -> Result<Self, EngineError> {
        let game = Game::new(player_count)?;
        Ok(Self {
            game,
            history: GameHistory::new(),
            turns_played: 0,
            categories,
        })
    }

    pub fn from_config(config: &GameConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Self::with_categories(config.player_count, config.category_set()?)
    }

    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    pub fn is_finished(&self) -> bool {
        self.game.is_finished()
    }

    /// Записать руку `hand` в категорию `category` игрока `position`.
    ///
    /// Повторная запись в уже закрытую категорию отклоняется,
    /// очки игрока при этом не меняются. Возвращает начисленные очки.
    pub fn record_score(
        &mut self,
        position: Position,
        category: CategoryId,
        hand: &Hand,
    ) -> Result<u32, EngineError> {
        let points = self.categories.score(category, hand);
        let player = self.game.player_mut(position)?;
        let total = player.apply_score(category, points)?;

        self.history.push(GameEventKind::CategoryScored {
            position,
            category,
            points,
            total,
        });

        Ok(points)
    }

    /// Лучшая свободная категория игрока для руки.
    ///
    /// При равенстве очков побеждает категория, стоящая раньше в наборе.
    pub fn best_category(&self, player: &Player, hand: &Hand) -> Option<(CategoryId, u32)> {
        let mut best: Option<(CategoryId, u32)> = None;
        for category in player.unused_categories() {
            let points = self.categories.score(category, hand);
            if best.map_or(true, |(_, best_points)| points > best_points) {
                best = Some((category, points));
            }
        }
        best
    }

    /// Один ход текущего игрока: бросок пяти кубиков без перебросов,
    /// запись в самую выгодную свободную категорию, передача хода.
    pub fn play_turn<R: RandomSource + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<TurnOutcome, EngineError> {
        if self.game.is_finished() {
            return Err(EngineError::GameFinished);
        }

        // После ручных record_score текущий игрок мог уже закончить.
        if self.game.current_player().map_or(true, Player::is_finished) {
            self.game.advance_turn();
        }

        let player = self
            .game
            .current_player()
            .ok_or(EngineError::GameFinished)?;
        let position = player.position;

        let hand = rng.roll_hand()?;
        self.history.push(GameEventKind::DiceRolled { position, hand });

        let (category, _) = self
            .best_category(player, &hand)
            .ok_or(EngineError::GameFinished)?;

        let points = self.record_score(position, category, &hand)?;
        let total = self
            .game
            .player(position)
            .map(|p| p.points)
            .ok_or(GameError::PlayerNotFound(position))?;

        self.turns_played += 1;

        if self.game.is_finished() {
            self.history.push(GameEventKind::GameFinished {
                winners: self.game.leaders(),
            });
        } else {
            self.game.advance_turn();
        }

        Ok(TurnOutcome {
            position,
            hand,
            category,
            points,
            total,
        })
    }

    /// Сыграть партию до конца.
    pub fn start<R: RandomSource + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<GameSummary, EngineError> {
        if self.game.is_finished() {
            return Err(EngineError::GameFinished);
        }

        self.history.push(GameEventKind::GameStarted {
            player_count: self.game.player_count() as u32,
        });

        while !self.game.is_finished() {
            self.play_turn(rng)?;
        }

        Ok(self.summary())
    }

    /// Текущая таблица результатов (можно звать и посреди партии).
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            standings: self.game.standings(),
            winners: self.game.leaders(),
            turns_played: self.turns_played,
        }
    }
}
