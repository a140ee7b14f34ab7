use crate::error::ParseError;
use crate::types::Quote;

/// Индекс поля с названием
pub const NAME_FIELD: usize = 1;
/// Индекс текущей цены
pub const CURRENT_FIELD: usize = 3;
/// Индекс вчерашнего закрытия
pub const CLOSE_FIELD: usize = 4;
/// Индекс цены открытия
pub const OPEN_FIELD: usize = 5;
/// Индекс максимума дня
// TODO: сверить 33/34 с живыми ответами фида, позиции не подтверждены
pub const HIGH_FIELD: usize = 33;
/// Индекс минимума дня
pub const LOW_FIELD: usize = 34;

/// Минимальное число полей, при котором разбор возможен
pub const MIN_FIELDS: usize = LOW_FIELD + 1;

const ENVELOPE_OPEN: &str = "=\"";
const ENVELOPE_CLOSE: &str = "\";";
const FIELD_SEPARATOR: char = '~';

/// Разбирает ответ фида вида:
/// `v_sh601318="1~中国平安~601318~27.85~27.80~...";`
///
/// Поля берутся строго по позиции, см. константы `*_FIELD`.
pub fn parse_payload(code: &str, payload: &str) -> Result<Quote, ParseError> {
    let fields = split_fields(payload)?;

    if fields.len() < MIN_FIELDS {
        return Err(ParseError::TooFewFields {
            expected: MIN_FIELDS,
            got: fields.len(),
        });
    }

    Ok(Quote {
        code: code.to_string(),
        name: fields[NAME_FIELD].to_string(),
        current: number_at(&fields, CURRENT_FIELD)?,
        close: number_at(&fields, CLOSE_FIELD)?,
        open: number_at(&fields, OPEN_FIELD)?,
        high: number_at(&fields, HIGH_FIELD)?,
        low: number_at(&fields, LOW_FIELD)?,
    })
}

/// Достаёт содержимое между первым `="` и завершающим `";` и режет его по `~`
fn split_fields(payload: &str) -> Result<Vec<&str>, ParseError> {
    let start = payload
        .find(ENVELOPE_OPEN)
        .ok_or(ParseError::MissingEnvelope)?
        + ENVELOPE_OPEN.len();

    let body = payload[start..]
        .trim_end()
        .strip_suffix(ENVELOPE_CLOSE)
        .ok_or(ParseError::MissingEnvelope)?;

    Ok(body.split(FIELD_SEPARATOR).collect())
}

fn number_at(fields: &[&str], index: usize) -> Result<f64, ParseError> {
    let raw = fields[index];
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ParseError::InvalidNumber {
            index,
            value: raw.to_string(),
        })
}
