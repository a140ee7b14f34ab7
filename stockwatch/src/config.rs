use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, File, FileFormat, Map, Source, Value};
use stockwatch_core::watchlist::parse_codes_csv;
use stockwatch_core::{DEFAULT_REFRESH_INTERVAL_SECS, Watchlist};
use thiserror::Error;

/// Пример конфига, который пишется при первом запуске
pub(crate) const DEFAULT_CONFIG: &str = include_str!("../assets/config.ini");

pub(crate) const DEFAULT_CONFIG_PATH: &str = "config.ini";

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to write default config: {path:?}")]
    WriteDefault {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read config: {0}")]
    Read(#[from] config::ConfigError),

    #[error("Settings.refresh_interval must be a positive number of seconds")]
    ZeroInterval,

    #[error("Settings.refresh_interval is not a number of seconds: {0:?}")]
    InvalidInterval(String),
}

pub(crate) type Result<T> = std::result::Result<T, ConfigError>;

/// Итог загрузки конфига
#[derive(Debug)]
pub(crate) enum Loaded {
    /// конфиг прочитан
    Ready(Watchlist),
    /// файла не было, записан пример по этому пути
    Bootstrapped(PathBuf),
}

/// Секция INI без учёта регистра имени; нет секции - пустая таблица
fn section(root: &Map<String, Value>, name: &str) -> Result<Map<String, Value>> {
    match root.iter().find(|(k, _)| k.eq_ignore_ascii_case(name)) {
        Some((_, v)) => Ok(v.clone().into_table()?),
        None => Ok(Map::new()),
    }
}

/// Строковое значение ключа без учёта регистра
fn option(section: &Map<String, Value>, key: &str) -> Result<Option<String>> {
    section
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(key))
        .map(|(_, v)| v.clone().into_string())
        .transpose()
        .map_err(ConfigError::from)
}

fn parse_interval(raw: Option<String>) -> Result<Duration> {
    let secs = match raw {
        None => DEFAULT_REFRESH_INTERVAL_SECS,
        Some(s) => s
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidInterval(s.clone()))?,
    };

    if secs == 0 {
        return Err(ConfigError::ZeroInterval);
    }
    Ok(Duration::from_secs(secs))
}

/// Читает список наблюдения; если файла нет, пишет пример и сообщает об этом
pub(crate) fn load_or_bootstrap(path: &Path) -> Result<Loaded> {
    if !path.exists() {
        write_default(path)?;
        return Ok(Loaded::Bootstrapped(path.to_path_buf()));
    }

    load(path).map(Loaded::Ready)
}

fn write_default(path: &Path) -> Result<()> {
    std::fs::write(path, DEFAULT_CONFIG).map_err(|e| ConfigError::WriteDefault {
        path: path.to_path_buf(),
        source: e,
    })
}

fn load(path: &Path) -> Result<Watchlist> {
    let root = Config::builder()
        .add_source(File::from(path).format(FileFormat::Ini))
        .build()?
        .collect()?;

    let codes = option(&section(&root, "Stocks")?, "codes")?.unwrap_or_default();
    let interval = parse_interval(option(&section(&root, "Settings")?, "refresh_interval")?)?;

    Ok(Watchlist::new(parse_codes_csv(&codes), interval))
}
