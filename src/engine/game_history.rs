use serde::{Deserialize, Serialize};

use crate::domain::category::CategoryId;
use crate::domain::die::Hand;
use crate::domain::Position;

/// Тип события в партии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum GameEventKind {
    /// Партия началась.
    GameStarted { player_count: u32 },

    /// Игрок бросил кубики.
    DiceRolled { position: Position, hand: Hand },

    /// Очки записаны в категорию.
    CategoryScored {
        position: Position,
        category: CategoryId,
        points: u32,
        total: u32,
    },

    /// Все категории у всех игроков закрыты.
    GameFinished { winners: Vec<Position> },
}

/// Событие в партии с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GameEvent {
    pub index: u32,
    pub kind: GameEventKind,
}

/// Полная история партии.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct GameHistory {
    pub events: Vec<GameEvent>,
}

impl GameHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: GameEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(GameEvent { index: idx, kind });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Выгрузить историю в JSON (для реплея / отладки).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
