//! Оценщики категорий Yatzy.
//!
//! Основные точки входа:
//!   `standard_categories() -> &'static CategorySet`
//!   `score(category, hand) -> u32`

pub mod category;
pub mod category_set;
pub mod pairs;

pub use category::{
    Category, Chance, FaceSum, FullHouse, OfAKind, Pairs, Straight, TwoPairs, Yatzy,
};
pub use category_set::{
    build_category, score, standard_categories, CategoryConfigError, CategorySet,
};
pub use pairs::{highest_pair, Pair};
