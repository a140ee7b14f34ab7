use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};

/// Токен остановки: флаг + канал, чтобы будить паузу между циклами.
///
/// Клоны разделяют одно состояние; `trigger` можно звать из обработчика Ctrl+C.
#[derive(Clone)]
pub(crate) struct Shutdown {
    requested: Arc<AtomicBool>,
    tx: Sender<()>,
    rx: Receiver<()>,
}

impl Shutdown {
    pub(crate) fn new() -> Self {
        let (tx, rx) = crossbeam_channel::bounded(1);
        Self {
            requested: Arc::new(AtomicBool::new(false)),
            tx,
            rx,
        }
    }

    pub(crate) fn trigger(&self) {
        self.requested.store(true, Ordering::Relaxed);
        // канал на одно место; повторный сигнал не нужен
        let _ = self.tx.try_send(());
    }

    pub(crate) fn is_requested(&self) -> bool {
        self.requested.load(Ordering::Relaxed)
    }

    /// Спит до `timeout` или до сигнала. `true` - пора останавливаться.
    pub(crate) fn wait(&self, timeout: Duration) -> bool {
        if self.is_requested() {
            return true;
        }

        match self.rx.recv_timeout(timeout) {
            Ok(()) => true,
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
                self.is_requested()
            }
        }
    }
}
