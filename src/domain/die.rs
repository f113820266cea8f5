use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Значение одного кубика (1..=6).
pub type DieValue = u8;

/// Количество кубиков в руке.
pub const HAND_SIZE: usize = 5;

/// Минимальное и максимальное значение грани.
pub const MIN_FACE: DieValue = 1;
pub const MAX_FACE: DieValue = 6;

/// Ошибки построения руки.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum HandError {
    #[error("Рука должна состоять из 5 кубиков, получено {0}")]
    WrongLength(usize),

    #[error("Кубик #{index} имеет значение {value}, допустимо 1..=6")]
    DieOutOfRange { index: usize, value: u32 },

    #[error("Не удалось разобрать руку: {0}")]
    Unparsable(String),
}

/// Рука – ровно пять кубиков в порядке броска.
///
/// Порядок важен только для поиска индексов пары,
/// на сами очки он не влияет.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct Hand([DieValue; HAND_SIZE]);

impl Hand {
    /// Проверенный конструктор: каждое значение обязано быть в 1..=6.
    pub fn new(dice: [DieValue; HAND_SIZE]) -> Result<Self, HandError> {
        for (index, &value) in dice.iter().enumerate() {
            if !(MIN_FACE..=MAX_FACE).contains(&value) {
                return Err(HandError::DieOutOfRange {
                    index,
                    value: value as u32,
                });
            }
        }
        Ok(Hand(dice))
    }

    /// Кубики в исходном порядке.
    pub fn dice(&self) -> &[DieValue; HAND_SIZE] {
        &self.0
    }

    pub fn sum(&self) -> u32 {
        self.0.iter().map(|&d| d as u32).sum()
    }

    /// Сколько кубиков показывают грань `face`.
    pub fn count(&self, face: DieValue) -> usize {
        self.0.iter().filter(|&&d| d == face).count()
    }

    /// Отсортированный набор различных значений.
    pub fn distinct_values(&self) -> Vec<DieValue> {
        let mut values = self.0.to_vec();
        values.sort_unstable();
        values.dedup();
        values
    }
}

impl TryFrom<&[u32]> for Hand {
    type Error = HandError;

    fn try_from(values: &[u32]) -> Result<Self, Self::Error> {
        if values.len() != HAND_SIZE {
            return Err(HandError::WrongLength(values.len()));
        }
        let mut dice = [0u8; HAND_SIZE];
        for (index, &value) in values.iter().enumerate() {
            if !(MIN_FACE as u32..=MAX_FACE as u32).contains(&value) {
                return Err(HandError::DieOutOfRange { index, value });
            }
            dice[index] = value as DieValue;
        }
        Ok(Hand(dice))
    }
}

impl TryFrom<&[DieValue]> for Hand {
    type Error = HandError;

    fn try_from(values: &[DieValue]) -> Result<Self, Self::Error> {
        let dice: [DieValue; HAND_SIZE] = values
            .try_into()
            .map_err(|_| HandError::WrongLength(values.len()))?;
        Hand::new(dice)
    }
}

impl TryFrom<Vec<u32>> for Hand {
    type Error = HandError;

    fn try_from(values: Vec<u32>) -> Result<Self, Self::Error> {
        Hand::try_from(values.as_slice())
    }
}

impl From<Hand> for Vec<u32> {
    fn from(hand: Hand) -> Self {
        hand.0.iter().map(|&d| d as u32).collect()
    }
}

impl fmt::Display for Hand {
    /// Формат вида `(3, 4, 3, 5, 6)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e] = self.0;
        write!(f, "({a}, {b}, {c}, {d}, {e})")
    }
}

/// Парсинг строки вида "3,4,3,5,6", "3 4 3 5 6" или "(3, 4, 3, 5, 6)".
impl FromStr for Hand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
        let values = trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<u32>()
                    .map_err(|_| HandError::Unparsable(s.to_string()))
            })
            .collect::<Result<Vec<u32>, _>>()?;

        Hand::try_from(values.as_slice())
    }
}
