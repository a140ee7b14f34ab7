use std::fmt::Display;

use chrono::{DateTime, TimeZone};

use crate::metrics::{Direction, Metrics};
use crate::types::{FetchOutcome, Quote};
use crate::width::{Align, align_text, display_width};

/// Очистка экрана и курсор в левый верхний угол
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Цвет роста (красный, как принято на биржах КНР)
pub const UP_COLOR: &str = "\x1b[31m";
/// Цвет падения (зелёный)
pub const DOWN_COLOR: &str = "\x1b[32m";
/// Сброс цвета
pub const RESET: &str = "\x1b[0m";

const UP_ARROW: char = '↑';
const DOWN_ARROW: char = '↓';

/// Заглушка для колонок недоступной котировки
pub const PLACEHOLDER: &str = "N/A";

/// Ширина колонки кода (в колонках терминала, как и остальные)
pub const CODE_WIDTH: usize = 10;
/// Ширина колонки названия
pub const NAME_WIDTH: usize = 12;
/// Ширина колонки текущей цены
pub const PRICE_WIDTH: usize = 10;
/// Ширина колонки изменения
pub const CHANGE_WIDTH: usize = 18;
/// Ширина колонки максимума
pub const HIGH_WIDTH: usize = 10;
/// Ширина колонки минимума
pub const LOW_WIDTH: usize = 10;

const HEADER: [&str; 6] = ["代码", "名称", "当前", "涨跌", "最高", "最低"];

/// Подпись строки времени обновления
pub const REFRESHED_AT_LABEL: &str = "最后刷新时间: ";

/// Строка заголовка таблицы
pub fn header_row() -> String {
    let [code, name, current, change, high, low] = HEADER;
    join_cells([
        align_text(code, CODE_WIDTH, Align::Left),
        align_text(name, NAME_WIDTH, Align::Left),
        align_text(current, PRICE_WIDTH, Align::Right),
        align_text(change, CHANGE_WIDTH, Align::Right),
        align_text(high, HIGH_WIDTH, Align::Right),
        align_text(low, LOW_WIDTH, Align::Right),
    ])
}

/// Строка таблицы для одного итога
pub fn outcome_row(outcome: &FetchOutcome) -> String {
    match outcome {
        FetchOutcome::Valid { quote, metrics } => quote_row(quote, metrics),
        FetchOutcome::Unavailable { code } => unavailable_row(code),
    }
}

fn quote_row(quote: &Quote, metrics: &Metrics) -> String {
    join_cells([
        align_text(&quote.code, CODE_WIDTH, Align::Left),
        align_text(&quote.name, NAME_WIDTH, Align::Left),
        align_text(&format!("{:.2}", quote.current), PRICE_WIDTH, Align::Right),
        change_cell(metrics),
        align_text(&format!("{:7.2}", quote.high), HIGH_WIDTH, Align::Right),
        align_text(&format!("{:7.2}", quote.low), LOW_WIDTH, Align::Right),
    ])
}

fn unavailable_row(code: &str) -> String {
    join_cells([
        align_text(code, CODE_WIDTH, Align::Right),
        align_text(PLACEHOLDER, NAME_WIDTH, Align::Right),
        align_text(PLACEHOLDER, PRICE_WIDTH, Align::Right),
        align_text(PLACEHOLDER, CHANGE_WIDTH, Align::Right),
        align_text(PLACEHOLDER, HIGH_WIDTH, Align::Right),
        align_text(PLACEHOLDER, LOW_WIDTH, Align::Right),
    ])
}

/// Колонка изменения: `  +0.05 ( +0.18%)↑` в цвете направления.
/// Отступ считается по видимому тексту, escape-коды в ширину не входят.
fn change_cell(metrics: &Metrics) -> String {
    let (color, arrow) = match metrics.direction() {
        Direction::Up => (UP_COLOR, UP_ARROW),
        Direction::Down => (DOWN_COLOR, DOWN_ARROW),
    };
    let text = format!(
        "{:+7.2} ({:+6.2}%){arrow}",
        metrics.change, metrics.change_percent
    );
    let padding = CHANGE_WIDTH.saturating_sub(display_width(&text));
    format!("{}{color}{text}{RESET}", " ".repeat(padding))
}

/// Строка с временем последнего обновления
pub fn refreshed_at_line<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!("{REFRESHED_AT_LABEL}{}", now.format("%Y-%m-%d %H:%M:%S%.6f"))
}

fn join_cells(cells: [String; 6]) -> String {
    cells.join(" ")
}
