use crate::metrics::Metrics;

/// Котировка одной бумаги, как её отдал фид
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    /// код, под которым запрашивали (например `sh601318`)
    pub code: String,
    /// название, может содержать широкие символы
    pub name: String,
    /// текущая цена
    pub current: f64,
    /// цена открытия
    pub open: f64,
    /// вчерашнее закрытие
    pub close: f64,
    /// максимум дня
    pub high: f64,
    /// минимум дня
    pub low: f64,
}

/// Результат одного цикла для одного кода
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// котировка получена и метрики посчитаны
    Valid {
        /// котировка
        quote: Quote,
        /// производные метрики
        metrics: Metrics,
    },
    /// данных нет (сеть, разбор или нулевое закрытие); хранит только код для строки-заглушки
    Unavailable {
        /// запрошенный код
        code: String,
    },
}

impl FetchOutcome {
    /// Код бумаги независимо от варианта
    pub fn code(&self) -> &str {
        match self {
            FetchOutcome::Valid { quote, .. } => &quote.code,
            FetchOutcome::Unavailable { code } => code,
        }
    }

    /// Ключ сортировки; `None` для недоступных
    pub fn sort_key(&self) -> Option<f64> {
        match self {
            FetchOutcome::Valid { metrics, .. } => Some(metrics.change_percent),
            FetchOutcome::Unavailable { .. } => None,
        }
    }
}
