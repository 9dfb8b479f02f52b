// src/domain/paytable.rs

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::engine::errors::ConfigError;

/// Таблица выплат: количество совпадений -> множитель ставки.
/// Отсутствующий ключ означает множитель 0.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct PayoutTable {
    rates: BTreeMap<u32, f64>,
}

impl PayoutTable {
    pub fn new(rates: BTreeMap<u32, f64>) -> Self {
        Self { rates }
    }

    /// Таблица выплат "по умолчанию" (классический 10-spot кено).
    pub fn standard() -> Self {
        Self::from_pairs([
            (0, 0.0),
            (1, 0.0),
            (2, 0.0),
            (3, 0.0),
            (4, 0.0),
            (5, 3.0),
            (6, 15.0),
            (7, 100.0),
            (8, 1_000.0),
            (9, 25_000.0),
            (10, 2_500_000.0),
        ])
    }

    /// Именованные тарифы выплат. Пока есть только "default".
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "default" => Some(Self::standard()),
            _ => None,
        }
    }

    pub fn preset_names() -> &'static [&'static str] {
        &["default"]
    }

    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (u32, f64)>,
    {
        Self {
            rates: pairs.into_iter().collect(),
        }
    }

    /// Множитель для данного количества совпадений (0, если записи нет).
    pub fn multiplier(&self, match_count: u32) -> f64 {
        self.rates.get(&match_count).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.rates.iter().map(|(k, v)| (*k, *v))
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Множители должны быть конечными и неотрицательными.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (&matches, &multiplier) in &self.rates {
            if !multiplier.is_finite() || multiplier < 0.0 {
                return Err(ConfigError::InvalidMultiplier {
                    matches,
                    multiplier,
                });
            }
        }
        Ok(())
    }
}
