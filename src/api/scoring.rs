use std::str::FromStr;

use crate::domain::category::CategoryId;
use crate::domain::die::Hand;
use crate::eval::standard_categories;

use super::dto::{CategoryScoreDto, ScoreCardDto};
use super::errors::ApiError;

/// Очки в категории по имени (`two_pairs`) или идентификатору (`sum:4`).
///
/// Рука проверяется здесь: ровно 5 значений в 1..=6.
pub fn score(category: &str, dice: &[u32]) -> Result<u32, ApiError> {
    let id = CategoryId::from_str(category).map_err(ApiError::UnknownCategory)?;
    let hand = Hand::try_from(dice)?;
    Ok(standard_categories().score(id, &hand))
}

/// Очки руки во всех 15 категориях.
pub fn score_card(dice: &[u32]) -> Result<ScoreCardDto, ApiError> {
    let hand = Hand::try_from(dice)?;
    let scores = standard_categories()
        .score_all(&hand)
        .into_iter()
        .map(|(category, score)| CategoryScoreDto { category, score })
        .collect();

    Ok(ScoreCardDto { hand, scores })
}
