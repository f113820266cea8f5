use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::die::DieValue;

/// Количество категорий в листе очков.
pub const CATEGORY_COUNT: usize = 15;

/// Имя одной из 15 категорий листа очков.
///
/// Порядок вариантов = порядок категорий в наборе (chance первой, full_house последней).
#[derive(
    Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(rename_all = "snake_case")]
pub enum CategoryId {
    Chance,
    Yatzy,
    Ones,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    Pairs,
    TwoPairs,
    ThreeOfAKind,
    FourOfAKind,
    SmallStraight,
    LargeStraight,
    FullHouse,
}

impl CategoryId {
    pub const ALL: [CategoryId; CATEGORY_COUNT] = [
        CategoryId::Chance,
        CategoryId::Yatzy,
        CategoryId::Ones,
        CategoryId::Twos,
        CategoryId::Threes,
        CategoryId::Fours,
        CategoryId::Fives,
        CategoryId::Sixes,
        CategoryId::Pairs,
        CategoryId::TwoPairs,
        CategoryId::ThreeOfAKind,
        CategoryId::FourOfAKind,
        CategoryId::SmallStraight,
        CategoryId::LargeStraight,
        CategoryId::FullHouse,
    ];

    /// Индекс категории в `ALL`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Имя поля в листе очков: `two_pairs`, `small_straight` и т.п.
    pub fn name(self) -> &'static str {
        match self {
            CategoryId::Chance => "chance",
            CategoryId::Yatzy => "yatzy",
            CategoryId::Ones => "ones",
            CategoryId::Twos => "twos",
            CategoryId::Threes => "threes",
            CategoryId::Fours => "fours",
            CategoryId::Fives => "fives",
            CategoryId::Sixes => "sixes",
            CategoryId::Pairs => "pairs",
            CategoryId::TwoPairs => "two_pairs",
            CategoryId::ThreeOfAKind => "three_of_a_kind",
            CategoryId::FourOfAKind => "four_of_a_kind",
            CategoryId::SmallStraight => "small_straight",
            CategoryId::LargeStraight => "large_straight",
            CategoryId::FullHouse => "full_house",
        }
    }

    /// Идентификатор, из которого строится оценщик: `sum:4`, `kind:3`, `straight:5` ...
    pub fn identifier(self) -> &'static str {
        match self {
            CategoryId::Chance => "chance",
            CategoryId::Yatzy => "yatzy",
            CategoryId::Ones => "sum:1",
            CategoryId::Twos => "sum:2",
            CategoryId::Threes => "sum:3",
            CategoryId::Fours => "sum:4",
            CategoryId::Fives => "sum:5",
            CategoryId::Sixes => "sum:6",
            CategoryId::Pairs => "pairs",
            CategoryId::TwoPairs => "two-pairs",
            CategoryId::ThreeOfAKind => "kind:3",
            CategoryId::FourOfAKind => "kind:4",
            CategoryId::SmallStraight => "straight:4",
            CategoryId::LargeStraight => "straight:5",
            CategoryId::FullHouse => "full-house",
        }
    }

    /// Категория верхней секции для грани 1..=6.
    pub fn for_face(face: DieValue) -> Option<CategoryId> {
        match face {
            1 => Some(CategoryId::Ones),
            2 => Some(CategoryId::Twos),
            3 => Some(CategoryId::Threes),
            4 => Some(CategoryId::Fours),
            5 => Some(CategoryId::Fives),
            6 => Some(CategoryId::Sixes),
            _ => None,
        }
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Принимает и имя (`two_pairs`), и идентификатор (`two-pairs`, `sum:2`).
impl FromStr for CategoryId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        CategoryId::ALL
            .iter()
            .copied()
            .find(|id| id.name() == needle || id.identifier() == needle)
            .ok_or_else(|| format!("Unknown category: {needle}"))
    }
}
