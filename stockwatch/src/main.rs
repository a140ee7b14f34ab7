//! Точка входа `stockwatch`.
//!
//! Жизненный цикл:
//! - парсинг CLI и загрузка конфига (или создание примера и выход)
//! - установка обработчика `Ctrl+C`
//! - цикл опроса фида и перерисовки таблицы до сигнала остановки

mod cli;
mod config;
mod fetch;
mod scheduler;
mod shutdown;

use std::io;

use clap::Parser;
use log::info;

use crate::config::Loaded;
use crate::fetch::HttpQuoteSource;
use crate::scheduler::Scheduler;
use crate::shutdown::Shutdown;

fn main() -> anyhow::Result<()> {
    // Диагностика в stderr, чтобы не ломать таблицу; уровень через RUST_LOG
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = cli::Args::parse();

    let watchlist = match config::load_or_bootstrap(&args.config)? {
        Loaded::Ready(watchlist) => watchlist,
        Loaded::Bootstrapped(path) => {
            println!(
                "已创建默认配置文件 {}，请编辑后重新运行程序",
                path.display()
            );
            return Ok(());
        }
    };

    let shutdown = Shutdown::new();

    // Ctrl+C => shutdown
    {
        let shutdown = shutdown.clone();
        ctrlc::set_handler(move || {
            shutdown.trigger();
            info!("interrupt received");
        })?;
    }

    let source = HttpQuoteSource::new()?;

    Scheduler::new(watchlist, source, io::stdout().lock(), shutdown).run()
}
