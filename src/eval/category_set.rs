use std::collections::BTreeMap;
use std::sync::OnceLock;

use thiserror::Error;

use crate::domain::category::{CategoryId, CATEGORY_COUNT};
use crate::domain::die::Hand;

use super::category::{
    Category, Chance, FaceSum, FullHouse, OfAKind, Pairs, Straight, TwoPairs, Yatzy,
};

/// Ошибки конфигурации набора категорий.
///
/// Возникают только при построении набора (на старте),
/// подсчёт очков сам по себе не падает.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CategoryConfigError {
    #[error("Неизвестная категория '{0}'")]
    UnknownCategory(String),

    #[error("В '{identifier}' не указан числовой параметр")]
    MissingParameter { identifier: String },

    #[error("Ожидали, что '{parameter}' (из '{identifier}') будет числом")]
    NotADigit {
        parameter: String,
        identifier: String,
    },

    #[error("Параметр '{parameter}' (из '{identifier}') вне допустимого диапазона")]
    ParameterOutOfRange {
        parameter: String,
        identifier: String,
    },

    #[error("Длина стрита в '{identifier}' должна быть 4 или 5")]
    InvalidStraightLength { identifier: String },

    #[error("Категория {0} задана дважды")]
    DuplicateCategory(CategoryId),

    #[error("В наборе нет категории {0}")]
    MissingCategory(CategoryId),
}

/// Построить оценщик по идентификатору: `chance`, `sum:3`, `kind:4`, `straight:5`, ...
pub fn build_category(identifier: &str) -> Result<Box<dyn Category>, CategoryConfigError> {
    let identifier = identifier.trim();

    match identifier {
        "chance" => return Ok(Box::new(Chance)),
        "yatzy" => return Ok(Box::new(Yatzy)),
        "pairs" => return Ok(Box::new(Pairs)),
        "two-pairs" => return Ok(Box::new(TwoPairs)),
        "full-house" => return Ok(Box::new(FullHouse)),
        _ => {}
    }

    let (kind, parameter) = match identifier.split_once(':') {
        Some((kind, parameter)) => (kind, parameter),
        None if matches!(identifier, "sum" | "kind" | "straight") => {
            return Err(CategoryConfigError::MissingParameter {
                identifier: identifier.to_string(),
            })
        }
        None => return Err(CategoryConfigError::UnknownCategory(identifier.to_string())),
    };

    if !matches!(kind, "sum" | "kind" | "straight") {
        return Err(CategoryConfigError::UnknownCategory(identifier.to_string()));
    }

    let value = parse_parameter(parameter, identifier)?;
    let out_of_range = || CategoryConfigError::ParameterOutOfRange {
        parameter: parameter.to_string(),
        identifier: identifier.to_string(),
    };

    match kind {
        "sum" => {
            let face = u8::try_from(value).map_err(|_| out_of_range())?;
            let category = FaceSum::new(face).ok_or_else(out_of_range)?;
            Ok(Box::new(category))
        }
        "kind" => {
            let category = OfAKind::new(value as usize).ok_or_else(out_of_range)?;
            Ok(Box::new(category))
        }
        _ => {
            let category = Straight::new(value as usize).ok_or_else(|| {
                CategoryConfigError::InvalidStraightLength {
                    identifier: identifier.to_string(),
                }
            })?;
            Ok(Box::new(category))
        }
    }
}

/// Параметр после двоеточия: непустая строка из десятичных цифр.
fn parse_parameter(parameter: &str, identifier: &str) -> Result<u32, CategoryConfigError> {
    if parameter.is_empty() {
        return Err(CategoryConfigError::MissingParameter {
            identifier: identifier.to_string(),
        });
    }
    if !parameter.chars().all(|c| c.is_ascii_digit()) {
        return Err(CategoryConfigError::NotADigit {
            parameter: parameter.to_string(),
            identifier: identifier.to_string(),
        });
    }
    parameter
        .parse::<u32>()
        .map_err(|_| CategoryConfigError::ParameterOutOfRange {
            parameter: parameter.to_string(),
            identifier: identifier.to_string(),
        })
}

/// Замороженный набор всех 15 категорий, индексированный по `CategoryId`.
pub struct CategorySet {
    categories: Vec<Box<dyn Category>>,
}

impl CategorySet {
    /// Стандартный набор в каноническом порядке.
    pub fn standard() -> Self {
        let faces = (1..=6u8).filter_map(FaceSum::new).map(|c| Box::new(c) as Box<dyn Category>);

        let mut categories: Vec<Box<dyn Category>> = Vec::with_capacity(CATEGORY_COUNT);
        categories.push(Box::new(Chance));
        categories.push(Box::new(Yatzy));
        categories.extend(faces);
        categories.push(Box::new(Pairs));
        categories.push(Box::new(TwoPairs));
        categories.push(Box::new(OfAKind::three()));
        categories.push(Box::new(OfAKind::four()));
        categories.push(Box::new(Straight::small()));
        categories.push(Box::new(Straight::large()));
        categories.push(Box::new(FullHouse));

        Self { categories }
    }

    /// Собрать набор из идентификаторов (в любом порядке).
    ///
    /// Каждая из 15 категорий должна встретиться ровно один раз.
    pub fn from_identifiers<'a, I>(identifiers: I) -> Result<Self, CategoryConfigError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut by_id: BTreeMap<CategoryId, Box<dyn Category>> = BTreeMap::new();

        for identifier in identifiers {
            let category = build_category(identifier)?;
            let id = category.id();
            if by_id.insert(id, category).is_some() {
                return Err(CategoryConfigError::DuplicateCategory(id));
            }
        }

        if let Some(missing) = CategoryId::ALL.iter().find(|&id| !by_id.contains_key(id)) {
            return Err(CategoryConfigError::MissingCategory(*missing));
        }

        // BTreeMap упорядочен так же, как CategoryId::ALL.
        let categories: Vec<Box<dyn Category>> = by_id.into_values().collect();
        debug_assert_eq!(categories.len(), CATEGORY_COUNT);

        Ok(Self { categories })
    }

    pub fn get(&self, id: CategoryId) -> &dyn Category {
        &*self.categories[id.index()]
    }

    pub fn score(&self, id: CategoryId, hand: &Hand) -> u32 {
        self.get(id).score(hand)
    }

    /// Очки руки во всех категориях, в порядке набора.
    pub fn score_all(&self, hand: &Hand) -> Vec<(CategoryId, u32)> {
        self.iter().map(|c| (c.id(), c.score(hand))).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Category> {
        self.categories.iter().map(|c| &**c)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        Self::standard()
    }
}

static STANDARD: OnceLock<CategorySet> = OnceLock::new();

/// Общий для процесса стандартный набор (строится один раз).
pub fn standard_categories() -> &'static CategorySet {
    STANDARD.get_or_init(CategorySet::standard)
}

/// Очки руки в категории по стандартному набору.
pub fn score(category: CategoryId, hand: &Hand) -> u32 {
    standard_categories().score(category, hand)
}
