use thiserror::Error;

/// Ошибки разбора ответа фида
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// Нет обёртки `="...";`
    #[error("payload envelope `=\"...\";` not found")]
    MissingEnvelope,

    /// Полей меньше, чем нужно для позиционного разбора
    #[error("too few fields: expected at least {expected}, got {got}")]
    TooFewFields {
        /// минимально нужное число полей
        expected: usize,
        /// сколько пришло
        got: usize,
    },

    /// Поле не является конечным числом
    #[error("field #{index} is not a number: {value:?}")]
    InvalidNumber {
        /// индекс поля
        index: usize,
        /// исходное значение
        value: String,
    },
}

/// Ошибки расчёта метрик
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MetricsError {
    /// Вчерашнее закрытие равно нулю, процент изменения не определён
    #[error("previous close is zero")]
    ZeroPreviousClose,

    /// Процент изменения не помещается в f64 (закрытие почти ноль)
    #[error("change percent is not finite")]
    PercentOverflow,
}
