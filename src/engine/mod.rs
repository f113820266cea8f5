//! Игровой движок Yatzy: запись очков, минимальный цикл ходов, история.
//!
//! Высокоуровневый объект: `GameEngine`
//! Основные операции:
//!   - `record_score` – записать руку в категорию конкретного игрока
//!   - `play_turn` – бросок + жадный выбор категории для текущего игрока
//!   - `start` – доиграть партию до конца

pub mod errors;
pub mod game_history;
pub mod game_loop;

pub use errors::EngineError;
pub use game_history::{GameEvent, GameEventKind, GameHistory};
pub use game_loop::{GameEngine, GameSummary, TurnOutcome};

use crate::domain::die::{DieValue, Hand, HandError, HAND_SIZE};

/// Источник случайности для бросков.
/// Реализации лежат в infra (обёртки над `rand`).
pub trait RandomSource {
    /// Один кубик, 1..=6.
    fn roll_die(&mut self) -> DieValue;

    /// Бросить все пять кубиков.
    fn roll_hand(&mut self) -> Result<Hand, HandError> {
        let mut dice = [0; HAND_SIZE];
        for die in dice.iter_mut() {
            *die = self.roll_die();
        }
        Hand::new(dice)
    }
}
