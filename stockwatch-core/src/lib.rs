//! # stockwatch-core
//!
//! Базовые типы и чистая логика терминального монитора котировок.
//!
//! Этот крейт содержит:
//!
//! - [`feed`] — позиционный разбор текстового ответа фида
//! - [`metrics`] — изменение, процент изменения, направление и сортировка
//! - [`width`] — ширина строки в терминале (широкие символы) и выравнивание
//! - [`render`] — строки таблицы с ANSI-цветами
//! - [`watchlist`] — список наблюдения и разбор списка кодов
//! - [`types`] — доменные типы
//! - [`error`] — типы ошибок `stockwatch-core`
//!
//! ## Быстрый пример: от ответа фида до строки таблицы
//!
//! ```rust
//! use stockwatch_core::{feed::parse_payload, metrics::evaluate, render::outcome_row};
//!
//! let mut fields = vec!["0"; 35];
//! fields[1] = "中国平安";
//! fields[3] = "27.85";
//! fields[4] = "27.80";
//! fields[5] = "27.82";
//! fields[33] = "28.10";
//! fields[34] = "27.60";
//! let payload = format!("v_sh601318=\"{}\";", fields.join("~"));
//!
//! let quote = parse_payload("sh601318", &payload).unwrap();
//! let outcome = evaluate(quote).unwrap();
//! assert!(outcome_row(&outcome).contains("( +0.18%)↑"));
//! ```
//!
//! ## Пример: ширина и выравнивание
//!
//! ```rust
//! use stockwatch_core::width::{align_text, display_width, Align};
//!
//! assert_eq!(display_width("平安ABC"), 7);
//! assert_eq!(align_text("平安", 6, Align::Right), "  平安");
//! ```
//!
//! ## Дизайн
//!
//! Сеть, конфиг и цикл обновления живут в бинарнике `stockwatch`.
//! Здесь только чистые функции без I/O, чтобы их было просто тестировать.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Разбор ответа фида котировок.
pub mod feed;

/// Метрики изменения цены и сортировка итогов.
pub mod metrics;

/// Ширина текста в терминале и выравнивание по колонкам.
pub mod width;

/// Форматирование строк таблицы.
pub mod render;

/// Список наблюдения.
pub mod watchlist;

/// Доменные типы (котировка, итог по коду).
pub mod types;

/// Ошибки `stockwatch-core`.
pub mod error;

/// Общие константы
mod constants;
pub use constants::{DEFAULT_REFRESH_INTERVAL_SECS, FEED_URL_PREFIX, FETCH_TIMEOUT, USER_AGENT};

// --- Re-exports (публичный фасад API) ---

pub use crate::error::{MetricsError, ParseError};
pub use crate::metrics::{Direction, Metrics};
pub use crate::types::{FetchOutcome, Quote};
pub use crate::watchlist::Watchlist;
