use std::time::Duration;

/// Префикс URL фида; код бумаги дописывается в конец
pub const FEED_URL_PREFIX: &str = "http://qt.gtimg.cn/q=";

/// Таймаут одного запроса к фиду
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// User-Agent, под который фид отвечает как браузеру
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Интервал обновления по умолчанию, секунды
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 5;
