//! Thin asynchronous client for the TCMB daily exchange rate bulletin.
//!
//! - One GET per user action against `today.xml`, no caching, no retries.
//! - Extracts the USD forex buying rate; the feed prints decimals with a
//!   comma separator.

use reqwest::{Client, Url};
use thiserror::Error;

use crate::domain::RateQuote;

const DEFAULT_FEED_URL: &str = "https://www.tcmb.gov.tr/kurlar/today.xml";
const USER_AGENT: &str = "listing-profit-calculator/0.1.0";

/// The only bulletin entry this screen cares about.
const TARGET_CURRENCY_CODE: &str = "USD";

#[derive(Debug, Error)]
pub enum RateFeedError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP {0}")]
    BadStatus(u16),
    #[error("empty response")]
    EmptyBody,
    #[error("rate not found")]
    RateNotFound,
}

#[derive(Clone)]
pub struct RateFeedClient {
    http: Client,
    feed_url: Url,
}

impl RateFeedClient {
    pub fn new() -> Result<Self, RateFeedError> {
        Self::with_feed_url(DEFAULT_FEED_URL)
    }

    pub fn with_feed_url(feed: &str) -> Result<Self, RateFeedError> {
        let feed_url = Url::parse(feed)?;
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http, feed_url })
    }

    pub fn feed_url(&self) -> &str {
        self.feed_url.as_str()
    }

    /// Fetches today's bulletin and returns the USD buying quote.
    pub async fn fetch_usd_buying(&self) -> Result<RateQuote, RateFeedError> {
        let response = self.http.get(self.feed_url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RateFeedError::BadStatus(status.as_u16()));
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Err(RateFeedError::EmptyBody);
        }

        parse_forex_buying(&body, TARGET_CURRENCY_CODE)
    }
}

/// Scans the bulletin document for the `Currency` element carrying `code`
/// and parses its `ForexBuying` child.
fn parse_forex_buying(document: &str, code: &str) -> Result<RateQuote, RateFeedError> {
    // A document that does not parse has no usable currency entry.
    let doc = roxmltree::Document::parse(document).map_err(|_| RateFeedError::RateNotFound)?;

    let bulletin_date = doc
        .root_element()
        .attribute("Date")
        .map(|value| value.to_string());

    let currency = doc
        .descendants()
        .find(|node| node.has_tag_name("Currency") && node.attribute("CurrencyCode") == Some(code))
        .ok_or(RateFeedError::RateNotFound)?;

    let forex_buying = currency
        .children()
        .find(|child| child.has_tag_name("ForexBuying"))
        .and_then(|child| child.text())
        .and_then(|text| text.trim().replace(',', ".").parse::<f64>().ok())
        .ok_or(RateFeedError::RateNotFound)?;

    Ok(RateQuote {
        currency_code: code.to_string(),
        forex_buying,
        bulletin_date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_BULLETIN: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Tarih_Date Tarih="07.08.2026" Date="08/07/2026" Bulten_No="2026/148">
    <Currency CrossOrder="0" Kod="USD" CurrencyCode="USD">
        <Unit>1</Unit>
        <Isim>ABD DOLARI</Isim>
        <CurrencyName>US DOLLAR</CurrencyName>
        <ForexBuying>41,0552</ForexBuying>
        <ForexSelling>41,1291</ForexSelling>
    </Currency>
    <Currency CrossOrder="9" Kod="EUR" CurrencyCode="EUR">
        <Unit>1</Unit>
        <Isim>EURO</Isim>
        <CurrencyName>EURO</CurrencyName>
        <ForexBuying>47,8123</ForexBuying>
        <ForexSelling>47,8985</ForexSelling>
    </Currency>
</Tarih_Date>"#;

    #[test]
    fn extracts_usd_forex_buying_with_comma_decimal() {
        let quote = parse_forex_buying(SAMPLE_BULLETIN, "USD").unwrap();
        assert_eq!(quote.currency_code, "USD");
        assert!((quote.forex_buying - 41.0552).abs() < 1e-9);
        assert_eq!(quote.bulletin_date.as_deref(), Some("08/07/2026"));
    }

    #[test]
    fn missing_currency_entry_is_rate_not_found() {
        let err = parse_forex_buying(SAMPLE_BULLETIN, "GBP").unwrap_err();
        assert!(matches!(err, RateFeedError::RateNotFound));
    }

    #[test]
    fn unparseable_rate_value_is_rate_not_found() {
        let document = r#"<Tarih_Date Date="08/07/2026">
            <Currency CurrencyCode="USD"><ForexBuying>n/a</ForexBuying></Currency>
        </Tarih_Date>"#;
        let err = parse_forex_buying(document, "USD").unwrap_err();
        assert!(matches!(err, RateFeedError::RateNotFound));
    }

    #[test]
    fn missing_forex_buying_child_is_rate_not_found() {
        let document = r#"<Tarih_Date Date="08/07/2026">
            <Currency CurrencyCode="USD"><ForexSelling>41,1291</ForexSelling></Currency>
        </Tarih_Date>"#;
        let err = parse_forex_buying(document, "USD").unwrap_err();
        assert!(matches!(err, RateFeedError::RateNotFound));
    }

    #[test]
    fn malformed_document_is_rate_not_found() {
        let err = parse_forex_buying("not an xml bulletin", "USD").unwrap_err();
        assert!(matches!(err, RateFeedError::RateNotFound));
    }

    #[test]
    fn bad_status_message_contains_the_code() {
        assert_eq!(RateFeedError::BadStatus(503).to_string(), "HTTP 503");
        assert_eq!(RateFeedError::EmptyBody.to_string(), "empty response");
        assert_eq!(RateFeedError::RateNotFound.to_string(), "rate not found");
    }
}
