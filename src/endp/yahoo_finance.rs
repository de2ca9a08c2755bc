use crate::error::PipelineError;
use crate::schema::PricePoint;
use crate::www;
use chrono::{DateTime, NaiveDate};
use reqwest::Client;
use serde::{Deserialize, Deserializer, Serialize};

/// Fetch the full available daily close history of a single ticker.
pub async fn fetch(client: &Client, ticker: &str) -> Result<Vec<PricePoint>, PipelineError> {
    let response: PriceHistory = client
        .get(www::price_url(ticker))
        .send()
        .await?
        .json()
        .await?;
    into_points(response, ticker)
}

fn into_points(response: PriceHistory, ticker: &str) -> Result<Vec<PricePoint>, PipelineError> {
    let data = response
        .chart
        .result
        .filter(|result| !result.is_empty())
        .ok_or_else(|| PipelineError::DataUnavailable(ticker.to_string()))?;

    let base = &data[0];
    let quote = base
        .indicators
        .quote
        .first()
        .ok_or_else(|| PipelineError::DataUnavailable(ticker.to_string()))?;

    if base.dates.len() != quote.close.len() {
        return Err(PipelineError::Parse(format!(
            "price history shape mismatch for '{ticker}': {} timestamps, {} closes",
            base.dates.len(),
            quote.close.len()
        )));
    }

    // the provider nulls out the close on partial days; skip those
    let price = base
        .dates
        .iter()
        .zip(quote.close.iter())
        .filter_map(|(dated, close)| {
            close.map(|close| PricePoint {
                dated: *dated,
                close,
            })
        })
        .collect::<Vec<_>>();

    if price.is_empty() {
        return Err(PipelineError::DataUnavailable(ticker.to_string()));
    }
    Ok(price)
}

// `price` schema
#[derive(Deserialize, Serialize, Debug)]
pub struct PriceHistory {
    pub chart: PriceResponse,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct PriceResponse {
    pub result: Option<Vec<PriceCategories>>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct PriceCategories {
    #[serde(rename = "timestamp", deserialize_with = "de_timestamps")]
    pub dates: Vec<NaiveDate>,
    pub indicators: Indicators,
}

pub fn de_timestamps<'de, D>(deserializer: D) -> Result<Vec<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let timestamps: Vec<i64> = Deserialize::deserialize(deserializer)?;
    timestamps
        .into_iter()
        .map(|timestamp| {
            DateTime::from_timestamp(timestamp, 0)
                .map(|datetime| datetime.date_naive())
                .ok_or_else(|| {
                    serde::de::Error::custom(format!("timestamp {timestamp} out of range"))
                })
        })
        .collect()
}

#[derive(Deserialize, Serialize, Debug)]
pub struct Indicators {
    pub quote: Vec<Quote>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct Quote {
    pub close: Vec<Option<f64>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // 1703808000 = 2023-12-29, 1703894400 = 2023-12-30 (UTC midnight)
    const FIXTURE: &str = r#"{
        "chart": {
            "result": [{
                "timestamp": [1703808000, 1703894400],
                "indicators": { "quote": [{ "close": [21.5, null] }] }
            }]
        }
    }"#;

    #[test]
    fn fixture_converts_to_dated_closes() {
        let response: PriceHistory = serde_json::from_str(FIXTURE).unwrap();
        let price = into_points(response, "GME").unwrap();

        assert_eq!(price.len(), 1); // null close skipped
        assert_eq!(
            price[0].dated,
            chrono::NaiveDate::from_ymd_opt(2023, 12, 29).unwrap()
        );
        assert_eq!(price[0].close, 21.5);
    }

    #[test]
    fn null_result_is_data_unavailable() {
        let response: PriceHistory =
            serde_json::from_str(r#"{ "chart": { "result": null } }"#).unwrap();
        assert!(matches!(
            into_points(response, "NOPE"),
            Err(PipelineError::DataUnavailable(_))
        ));
    }

    #[test]
    fn mismatched_array_lengths_are_rejected() {
        let fixture = r#"{
            "chart": {
                "result": [{
                    "timestamp": [1703808000, 1703894400],
                    "indicators": { "quote": [{ "close": [21.5] }] }
                }]
            }
        }"#;
        let response: PriceHistory = serde_json::from_str(fixture).unwrap();
        assert!(matches!(
            into_points(response, "GME"),
            Err(PipelineError::Parse(_))
        ));
    }

    #[test]
    fn all_null_closes_is_data_unavailable() {
        let fixture = r#"{
            "chart": {
                "result": [{
                    "timestamp": [1703808000],
                    "indicators": { "quote": [{ "close": [null] }] }
                }]
            }
        }"#;
        let response: PriceHistory = serde_json::from_str(fixture).unwrap();
        assert!(matches!(
            into_points(response, "GME"),
            Err(PipelineError::DataUnavailable(_))
        ));
    }
}
