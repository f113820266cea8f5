use crate::domain::die::{DieValue, MAX_FACE, MIN_FACE};

/// Найденная пара: значение и индексы двух первых кубиков с этим значением.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pair {
    pub value: DieValue,
    pub first: usize,
    pub second: usize,
}

impl Pair {
    /// Сумма двух кубиков пары.
    pub fn points(&self) -> u32 {
        2 * self.value as u32
    }
}

/// Старшая пара в наборе кубиков (5 или 3 после удаления первой пары).
///
/// Грани перебираются от 6 к 1, поэтому выигрывает самая старшая пара,
/// а не первая по порядку в руке. `None`, если пары нет.
pub fn highest_pair(dice: &[DieValue]) -> Option<Pair> {
    for face in (MIN_FACE..=MAX_FACE).rev() {
        let mut hits = dice
            .iter()
            .enumerate()
            .filter(|(_, &d)| d == face)
            .map(|(idx, _)| idx);

        if let (Some(first), Some(second)) = (hits.next(), hits.next()) {
            return Some(Pair {
                value: face,
                first,
                second,
            });
        }
    }
    None
}
