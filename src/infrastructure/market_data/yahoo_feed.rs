use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::domain::price::PriceFeed;
use crate::shared::errors::PriceError;
use crate::shared::types::Symbol;

const YAHOO_CHART_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

/// Intraday range tried first, then the daily fallback
const CHART_QUERIES: [(&str, &str); 2] = [("1d", "1m"), ("2d", "1d")];

#[derive(Debug, Deserialize)]
struct YahooChartResponse {
    chart: YahooChartData,
}

#[derive(Debug, Deserialize)]
struct YahooChartData {
    #[serde(default)]
    result: Option<Vec<YahooChartResult>>,
    #[serde(default)]
    error: Option<YahooChartError>,
}

#[derive(Debug, Deserialize)]
struct YahooChartError {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct YahooChartResult {
    #[serde(default)]
    indicators: Option<YahooChartIndicators>,
}

#[derive(Debug, Deserialize)]
struct YahooChartIndicators {
    #[serde(default)]
    quote: Vec<YahooChartQuote>,
}

#[derive(Debug, Deserialize)]
struct YahooChartQuote {
    #[serde(default)]
    close: Option<Vec<Option<f64>>>,
}

/// Last close from a Yahoo chart response, `None` when the series is empty
pub fn parse_last_close(body: &str) -> Result<Option<f64>, PriceError> {
    let response: YahooChartResponse = serde_json::from_str(body)
        .map_err(|e| PriceError::InvalidPriceData(format!("failed to parse yahoo chart: {}", e)))?;

    if let Some(error) = response.chart.error {
        return Err(PriceError::FeedUnavailable(format!(
            "yahoo chart API error: {} {}",
            error.code.unwrap_or_default(),
            error.description.unwrap_or_default()
        )));
    }

    let last = response
        .chart
        .result
        .unwrap_or_default()
        .into_iter()
        .next()
        .and_then(|result| result.indicators)
        .and_then(|indicators| indicators.quote.into_iter().next())
        .and_then(|quote| quote.close)
        .and_then(|closes| closes.into_iter().rev().flatten().find(|c| c.is_finite()));

    Ok(last)
}

/// Yahoo Finance chart API price feed
pub struct YahooPriceFeed {
    http_client: Client,
    base_url: String,
}

impl YahooPriceFeed {
    pub fn new() -> Result<Self, PriceError> {
        Self::with_base_url(YAHOO_CHART_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, PriceError> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(15))
            .build()
            .map_err(|e| PriceError::FeedUnavailable(format!("failed to build http client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: base_url.into(),
        })
    }

    fn chart_url(&self, symbol: &Symbol, range: &str, interval: &str) -> Result<Url, PriceError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| PriceError::FeedUnavailable(format!("invalid base url: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| PriceError::FeedUnavailable("base url cannot take a path".to_string()))?
            .push(symbol.as_str());
        url.query_pairs_mut()
            .append_pair("range", range)
            .append_pair("interval", interval);
        Ok(url)
    }

    async fn fetch_chart(&self, symbol: &Symbol, range: &str, interval: &str) -> Result<Option<f64>, PriceError> {
        let url = self.chart_url(symbol, range, interval)?;
        debug!("Fetching yahoo chart: {}", url);

        let response = self
            .http_client
            .get(url)
            .header("referer", "https://finance.yahoo.com/")
            .send()
            .await
            .map_err(|e| PriceError::FeedUnavailable(format!("yahoo transport error: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PriceError::FeedUnavailable(format!("yahoo body error: {}", e)))?;

        // 404 carries a chart error payload naming the problem
        if !status.is_success() && status != reqwest::StatusCode::NOT_FOUND {
            return Err(PriceError::FeedUnavailable(format!("yahoo returned status {}", status)));
        }

        parse_last_close(&body)
    }
}

#[async_trait]
impl PriceFeed for YahooPriceFeed {
    fn name(&self) -> &str {
        "yahoo"
    }

    async fn last_price(&self, symbol: &Symbol) -> Result<f64, PriceError> {
        for (range, interval) in CHART_QUERIES {
            if let Some(price) = self.fetch_chart(symbol, range, interval).await? {
                return Ok(price);
            }
            debug!("Empty {} / {} series for {}", range, interval, symbol);
        }
        Err(PriceError::NoData(symbol.to_string()))
    }
}
