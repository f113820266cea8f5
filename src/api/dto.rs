use serde::{Deserialize, Serialize};

use crate::domain::category::CategoryId;
use crate::domain::die::Hand;
use crate::domain::player::Player;
use crate::domain::Position;
use crate::engine::GameEngine;

/// Очки одной категории.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryScoreDto {
    pub category: CategoryId,
    pub score: u32,
}

/// Полный лист очков для одной руки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreCardDto {
    pub hand: Hand,
    pub scores: Vec<CategoryScoreDto>,
}

impl ScoreCardDto {
    pub fn get(&self, category: CategoryId) -> Option<u32> {
        self.scores
            .iter()
            .find(|s| s.category == category)
            .map(|s| s.score)
    }
}

/// DTO игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerViewDto {
    pub position: Position,
    pub points: u32,
    pub used: Vec<CategoryId>,
    pub unused: Vec<CategoryId>,
}

/// DTO партии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameViewDto {
    pub players: Vec<PlayerViewDto>,
    /// Чей ход (None – партия окончена).
    pub current_position: Option<Position>,
    pub finished: bool,
    pub turns_played: u32,
}

pub fn build_player_view(player: &Player) -> PlayerViewDto {
    let (used, unused): (Vec<CategoryId>, Vec<CategoryId>) =
        CategoryId::ALL.iter().copied().partition(|&id| player.is_used(id));

    PlayerViewDto {
        position: player.position,
        points: player.points,
        used,
        unused,
    }
}

/// Сформировать DTO партии из движка.
pub fn build_game_view(engine: &GameEngine) -> GameViewDto {
    let finished = engine.is_finished();
    let current_position = if finished {
        None
    } else {
        engine.game.current_player().map(|p| p.position)
    };

    GameViewDto {
        players: engine.game.players.iter().map(build_player_view).collect(),
        current_position,
        finished,
        turns_played: engine.turns_played,
    }
}
