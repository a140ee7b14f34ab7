use std::time::Duration;

use crate::constants::DEFAULT_REFRESH_INTERVAL_SECS;

/// Неизменяемый список наблюдения: коды в порядке запроса и интервал обновления
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Watchlist {
    codes: Vec<String>,
    refresh_interval: Duration,
}

impl Watchlist {
    /// Создаёт список наблюдения
    pub fn new(codes: Vec<String>, refresh_interval: Duration) -> Self {
        Self {
            codes,
            refresh_interval,
        }
    }

    /// Коды бумаг в порядке запроса (дубликаты сохраняются)
    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    /// Пауза между циклами
    pub fn refresh_interval(&self) -> Duration {
        self.refresh_interval
    }

    /// Пустой ли список кодов
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl Default for Watchlist {
    fn default() -> Self {
        Self::new(
            Vec::new(),
            Duration::from_secs(DEFAULT_REFRESH_INTERVAL_SECS),
        )
    }
}

/// Парсит список кодов из строки вида "sh601318, sz000001, ,sh601318".
/// Правила:
/// - разделитель: запятая
/// - trim пробелов
/// - пустые элементы игнорируются
/// - порядок и повторы сохраняются, регистр не меняется
pub fn parse_codes_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_codes_csv_keeps_order_and_duplicates() {
        let got = parse_codes_csv(" sz000001, sh601318, ,sz000001 ,,sh600036 ");
        assert_eq!(got, vec!["sz000001", "sh601318", "sz000001", "sh600036"]);
    }

    #[test]
    fn parse_codes_csv_empty_gives_empty_vec() {
        assert!(parse_codes_csv("").is_empty());
        assert!(parse_codes_csv(" , ,  ,").is_empty());
    }

    #[test]
    fn parse_codes_csv_does_not_change_case() {
        assert_eq!(parse_codes_csv("SH601318,sz000001"), vec!["SH601318", "sz000001"]);
    }

    #[test]
    fn default_watchlist_is_empty_with_default_interval() {
        let w = Watchlist::default();
        assert!(w.is_empty());
        assert_eq!(w.refresh_interval(), Duration::from_secs(5));
    }
}
