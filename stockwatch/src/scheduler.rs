use std::io::Write;

use chrono::{DateTime, Local};
use log::{debug, info, warn};
use stockwatch_core::feed::parse_payload;
use stockwatch_core::metrics::{evaluate, sort_outcomes};
use stockwatch_core::render::{CLEAR_SCREEN, header_row, outcome_row, refreshed_at_line};
use stockwatch_core::{FetchOutcome, Watchlist};

use crate::fetch::{FetchError, QuoteSource};
use crate::shutdown::Shutdown;

pub(crate) const EMPTY_WATCHLIST_NOTICE: &str = "配置文件中未找到有效的股票代码";
pub(crate) const SHUTDOWN_NOTICE: &str = "程序已退出";

/// Фазы цикла обновления
#[derive(Debug)]
enum Phase {
    Idle,
    FetchingAll,
    Sorting(Vec<FetchOutcome>),
    Rendering(Vec<FetchOutcome>),
    Sleeping,
    ShuttingDown,
}

/// Цикл fetch -> sort -> render -> sleep.
///
/// Коды опрашиваются строго по очереди. Ошибка по одному коду даёт строку `N/A`
/// и предупреждение в лог, цикл не прерывает. Остановка проверяется до старта,
/// между кодами и во время паузы; идущий запрос ограничен только своим таймаутом.
pub(crate) struct Scheduler<S, W> {
    watchlist: Watchlist,
    source: S,
    out: W,
    shutdown: Shutdown,
}

impl<S: QuoteSource, W: Write> Scheduler<S, W> {
    pub(crate) fn new(watchlist: Watchlist, source: S, out: W, shutdown: Shutdown) -> Self {
        Self {
            watchlist,
            source,
            out,
            shutdown,
        }
    }

    pub(crate) fn run(&mut self) -> anyhow::Result<()> {
        if self.watchlist.is_empty() {
            writeln!(self.out, "{EMPTY_WATCHLIST_NOTICE}")?;
            self.out.flush()?;
            return Ok(());
        }

        info!(
            "starting: codes={}, refresh_interval={}s",
            self.watchlist.codes().join(","),
            self.watchlist.refresh_interval().as_secs()
        );

        let mut phase = Phase::Idle;
        loop {
            phase = match phase {
                Phase::Idle if self.shutdown.is_requested() => Phase::ShuttingDown,
                Phase::Idle => Phase::FetchingAll,
                Phase::FetchingAll => match self.fetch_all() {
                    Some(outcomes) => Phase::Sorting(outcomes),
                    None => Phase::ShuttingDown,
                },
                Phase::Sorting(mut outcomes) => {
                    sort_outcomes(&mut outcomes);
                    Phase::Rendering(outcomes)
                }
                Phase::Rendering(outcomes) => {
                    self.render(&outcomes, &Local::now())?;
                    Phase::Sleeping
                }
                Phase::Sleeping => {
                    if self.shutdown.wait(self.watchlist.refresh_interval()) {
                        Phase::ShuttingDown
                    } else {
                        Phase::FetchingAll
                    }
                }
                Phase::ShuttingDown => {
                    writeln!(self.out, "\n{SHUTDOWN_NOTICE}")?;
                    self.out.flush()?;
                    info!("shutting down...");
                    return Ok(());
                }
            };
            debug!("phase -> {phase:?}");
        }
    }

    /// Итог по каждому коду в порядке конфига; `None`, если пришёл сигнал остановки
    fn fetch_all(&self) -> Option<Vec<FetchOutcome>> {
        let mut outcomes = Vec::with_capacity(self.watchlist.codes().len());
        for code in self.watchlist.codes() {
            if self.shutdown.is_requested() {
                return None;
            }
            outcomes.push(self.acquire(code));
        }
        Some(outcomes)
    }

    /// fetch -> parse -> metrics для одного кода; любая ошибка превращается в `Unavailable`
    fn acquire(&self, code: &str) -> FetchOutcome {
        let unavailable = || FetchOutcome::Unavailable {
            code: code.to_string(),
        };

        let raw = match self.source.fetch(code) {
            Ok(raw) => raw,
            Err(FetchError::Timeout) => {
                warn!("{code}: request timed out, check the network or retry later");
                return unavailable();
            }
            Err(e) => {
                warn!("{code}: {e}");
                return unavailable();
            }
        };

        let quote = match parse_payload(code, &raw) {
            Ok(q) => q,
            Err(e) => {
                warn!("{code}: failed to parse payload: {e}; raw payload: {raw:?}");
                return unavailable();
            }
        };

        match evaluate(quote) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("{code}: {e}");
                unavailable()
            }
        }
    }

    /// Перерисовка на месте: экран чистится только когда данные уже собраны
    fn render(&mut self, outcomes: &[FetchOutcome], now: &DateTime<Local>) -> std::io::Result<()> {
        write!(self.out, "{CLEAR_SCREEN}")?;
        writeln!(self.out, "{}", header_row())?;
        for outcome in outcomes {
            writeln!(self.out, "{}", outcome_row(outcome))?;
        }
        writeln!(self.out, "{}", refreshed_at_line(now))?;
        self.out.flush()
    }
}
