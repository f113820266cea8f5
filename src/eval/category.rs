use crate::domain::category::CategoryId;
use crate::domain::die::{DieValue, Hand};

use super::pairs::highest_pair;

/// Очки за yatzy.
pub const YATZY_POINTS: u32 = 50;
/// Очки за фулл-хаус.
pub const FULL_HOUSE_POINTS: u32 = 25;
/// Очки за малый (4) и большой (5) стрит.
pub const SMALL_STRAIGHT_POINTS: u32 = 30;
pub const LARGE_STRAIGHT_POINTS: u32 = 40;

/// Категория листа очков: чистая функция руки.
///
/// Реализации не хранят состояния, поэтому их можно
/// вызывать из любого потока без синхронизации.
pub trait Category: Send + Sync {
    fn id(&self) -> CategoryId;

    fn score(&self, hand: &Hand) -> u32;

    fn name(&self) -> &'static str {
        self.id().name()
    }
}

/// Сумма всех кубиков.
#[derive(Clone, Copy, Debug, Default)]
pub struct Chance;

impl Category for Chance {
    fn id(&self) -> CategoryId {
        CategoryId::Chance
    }

    fn score(&self, hand: &Hand) -> u32 {
        hand.sum()
    }
}

/// 50, если все пять кубиков одинаковые.
#[derive(Clone, Copy, Debug, Default)]
pub struct Yatzy;

impl Category for Yatzy {
    fn id(&self) -> CategoryId {
        CategoryId::Yatzy
    }

    fn score(&self, hand: &Hand) -> u32 {
        if hand.distinct_values().len() == 1 {
            YATZY_POINTS
        } else {
            0
        }
    }
}

/// Верхняя секция: сумма кубиков с гранью `face`.
#[derive(Clone, Copy, Debug)]
pub struct FaceSum {
    face: DieValue,
    id: CategoryId,
}

impl FaceSum {
    /// `None`, если грань вне 1..=6.
    pub fn new(face: DieValue) -> Option<Self> {
        CategoryId::for_face(face).map(|id| Self { face, id })
    }

    pub fn face(&self) -> DieValue {
        self.face
    }
}

impl Category for FaceSum {
    fn id(&self) -> CategoryId {
        self.id
    }

    fn score(&self, hand: &Hand) -> u32 {
        hand.count(self.face) as u32 * self.face as u32
    }
}

/// Старшая пара: удвоенное значение (0 без пары).
#[derive(Clone, Copy, Debug, Default)]
pub struct Pairs;

impl Category for Pairs {
    fn id(&self) -> CategoryId {
        CategoryId::Pairs
    }

    fn score(&self, hand: &Hand) -> u32 {
        highest_pair(hand.dice()).map_or(0, |pair| pair.points())
    }
}

/// Две разные пары: сумма четырёх кубиков.
#[derive(Clone, Copy, Debug, Default)]
pub struct TwoPairs;

impl Category for TwoPairs {
    fn id(&self) -> CategoryId {
        CategoryId::TwoPairs
    }

    fn score(&self, hand: &Hand) -> u32 {
        let Some(first) = highest_pair(hand.dice()) else {
            return 0;
        };

        // Убираем ровно два кубика со значением первой пары (по значению, не по индексу).
        let mut rest: Vec<DieValue> = hand.dice().to_vec();
        for _ in 0..2 {
            if let Some(idx) = rest.iter().position(|&d| d == first.value) {
                rest.remove(idx);
            }
        }

        match highest_pair(&rest) {
            Some(second) => first.points() + second.points(),
            None => 0,
        }
    }
}

/// N одинаковых (N = 3 или 4): N × значение.
///
/// Кубики просматриваются в порядке руки; первое значение,
/// которое встречается не меньше N раз, и даёт очки.
#[derive(Clone, Copy, Debug)]
pub struct OfAKind {
    count: usize,
    id: CategoryId,
}

impl OfAKind {
    pub fn three() -> Self {
        Self {
            count: 3,
            id: CategoryId::ThreeOfAKind,
        }
    }

    pub fn four() -> Self {
        Self {
            count: 4,
            id: CategoryId::FourOfAKind,
        }
    }

    /// `None` для N, у которых нет категории в листе.
    pub fn new(count: usize) -> Option<Self> {
        match count {
            3 => Some(Self::three()),
            4 => Some(Self::four()),
            _ => None,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

impl Category for OfAKind {
    fn id(&self) -> CategoryId {
        self.id
    }

    fn score(&self, hand: &Hand) -> u32 {
        hand.dice()
            .iter()
            .find(|&&value| hand.count(value) >= self.count)
            .map_or(0, |&value| self.count as u32 * value as u32)
    }
}

/// Стрит длины 4 (малый, 30) или 5 (большой, 40).
///
/// Идём по отсортированным различным значениям; каждый шаг больше 1
/// съедает один пропуск. Малому стриту разрешён один пропуск, но только
/// если в руке ровно 5 различных значений, т.е. (1,2,3,4,6) даёт 30.
#[derive(Clone, Copy, Debug)]
pub struct Straight {
    length: usize,
    id: CategoryId,
}

impl Straight {
    pub fn small() -> Self {
        Self {
            length: 4,
            id: CategoryId::SmallStraight,
        }
    }

    pub fn large() -> Self {
        Self {
            length: 5,
            id: CategoryId::LargeStraight,
        }
    }

    /// Допустимы только длины 4 и 5.
    pub fn new(length: usize) -> Option<Self> {
        match length {
            4 => Some(Self::small()),
            5 => Some(Self::large()),
            _ => None,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    fn points(&self) -> u32 {
        if self.length == 4 {
            SMALL_STRAIGHT_POINTS
        } else {
            LARGE_STRAIGHT_POINTS
        }
    }
}

impl Category for Straight {
    fn id(&self) -> CategoryId {
        self.id
    }

    fn score(&self, hand: &Hand) -> u32 {
        let distinct = hand.distinct_values();
        if distinct.len() < self.length {
            return 0;
        }

        let mut skips = if self.length == 4 && distinct.len() == 5 {
            1
        } else {
            0
        };

        for step in distinct.windows(2) {
            if step[0] + 1 != step[1] {
                if skips == 0 {
                    return 0;
                }
                skips -= 1;
            }
        }

        self.points()
    }
}

/// Фулл-хаус: не больше двух различных значений (yatzy тоже считается).
#[derive(Clone, Copy, Debug, Default)]
pub struct FullHouse;

impl Category for FullHouse {
    fn id(&self) -> CategoryId {
        CategoryId::FullHouse
    }

    fn score(&self, hand: &Hand) -> u32 {
        if hand.distinct_values().len() > 2 {
            0
        } else {
            FULL_HOUSE_POINTS
        }
    }
}
