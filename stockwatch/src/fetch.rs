use std::time::Duration;

use encoding_rs::GBK;
use log::debug;
use reqwest::StatusCode;
use reqwest::blocking::{Client, ClientBuilder};
use stockwatch_core::{FEED_URL_PREFIX, FETCH_TIMEOUT, USER_AGENT};
use thiserror::Error;

/// Почему не удалось получить ответ фида для кода
#[derive(Debug, Error)]
pub(crate) enum FetchError {
    #[error("request failed with HTTP status {0}")]
    Status(u16),

    #[error("request timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Network(e)
        }
    }
}

/// Источник сырых ответов фида. Один вызов - один код.
pub(crate) trait QuoteSource {
    fn fetch(&self, code: &str) -> Result<String, FetchError>;
}

/// HTTP-источник: GET на `<url_prefix><code>`, ответ в GBK
pub(crate) struct HttpQuoteSource {
    client: Client,
    url_prefix: String,
}

impl HttpQuoteSource {
    /// Боевой фид `qt.gtimg.cn` с таймаутом 5 с
    pub(crate) fn new() -> Result<Self, reqwest::Error> {
        Self::with_endpoint(Client::builder(), FEED_URL_PREFIX, FETCH_TIMEOUT)
    }

    /// Источник с произвольным префиксом URL и таймаутом на весь запрос.
    /// Настройки прокси и прочее берутся из переданного `builder`.
    pub(crate) fn with_endpoint(
        builder: ClientBuilder,
        url_prefix: &str,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = builder.timeout(timeout).user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            url_prefix: url_prefix.to_string(),
        })
    }
}

impl QuoteSource for HttpQuoteSource {
    fn fetch(&self, code: &str) -> Result<String, FetchError> {
        let url = format!("{}{code}", self.url_prefix);
        debug!("GET {url}");

        let resp = self.client.get(&url).send()?;
        let status = resp.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = resp.bytes()?;
        Ok(decode_gbk(&body))
    }
}

/// Фид отдаёт тело в GBK независимо от заголовков
fn decode_gbk(bytes: &[u8]) -> String {
    let (text, _, had_errors) = GBK.decode(bytes);
    if had_errors {
        debug!("GBK decode replaced malformed bytes");
    }
    text.into_owned()
}
