use std::path::PathBuf;

use clap::Parser;

use crate::config::DEFAULT_CONFIG_PATH;

/// stockwatch - терминальная таблица котировок, обновляемая на месте.
///
/// Список кодов и интервал берутся из INI-файла. Если файла нет,
/// создаётся пример и программа завершается.
#[derive(Parser, Debug, Clone)]
#[command(name = "stockwatch", version, about)]
pub(crate) struct Args {
    /// Путь к конфигу (секции [Stocks] codes=... и [Settings] refresh_interval=...)
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    pub(crate) config: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_to_config_ini() {
        let args = Args::try_parse_from(["stockwatch"]).unwrap();
        assert_eq!(args.config, PathBuf::from("config.ini"));
    }

    #[test]
    fn config_path_can_be_overridden() {
        let args = Args::try_parse_from(["stockwatch", "--config", "/tmp/watch.ini"]).unwrap();
        assert_eq!(args.config, PathBuf::from("/tmp/watch.ini"));
    }

    #[test]
    fn unknown_flags_are_rejected() {
        assert!(Args::try_parse_from(["stockwatch", "--interval", "3"]).is_err());
    }
}
