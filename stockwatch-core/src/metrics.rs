use std::cmp::Ordering;

use crate::error::MetricsError;
use crate::types::{FetchOutcome, Quote};

/// Направление движения цены. Нулевое изменение считается ростом.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `change >= 0`
    Up,
    /// `change < 0`
    Down,
}

/// Производные от котировки величины
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    /// `current - close`
    pub change: f64,
    /// `change / close * 100`, он же ключ сортировки
    pub change_percent: f64,
}

impl Metrics {
    /// Считает изменение относительно вчерашнего закрытия
    pub fn compute(quote: &Quote) -> Result<Self, MetricsError> {
        if quote.close == 0.0 {
            return Err(MetricsError::ZeroPreviousClose);
        }

        let change = quote.current - quote.close;
        let change_percent = change / quote.close * 100.0;
        // близкое к нулю закрытие даёт переполнение
        if !change_percent.is_finite() {
            return Err(MetricsError::PercentOverflow);
        }

        Ok(Self {
            change,
            change_percent,
        })
    }

    /// Направление изменения
    pub fn direction(&self) -> Direction {
        if self.change >= 0.0 {
            Direction::Up
        } else {
            Direction::Down
        }
    }
}

/// Собирает итог по коду: котировка с метриками или `Unavailable`
pub fn evaluate(quote: Quote) -> Result<FetchOutcome, MetricsError> {
    let metrics = Metrics::compute(&quote)?;
    Ok(FetchOutcome::Valid { quote, metrics })
}

/// Стабильная сортировка: валидные по убыванию процента изменения,
/// недоступные в конце в порядке запроса.
pub fn sort_outcomes(outcomes: &mut [FetchOutcome]) {
    outcomes.sort_by(|a, b| match (a.sort_key(), b.sort_key()) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}
