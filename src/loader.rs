use std::fs::File;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::Deserialize;
use thiserror::Error;

use crate::data::PricePoint;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("input file contains no price points")]
    Empty,

    #[error("unable to parse timestamp '{0}'")]
    Timestamp(String),

    #[error("failed to parse price from value '{0}'")]
    ParsePrice(String),
}

/// One record of the JSON price-history format: an array of
/// `{"time": <ISO-8601>, "price": <float>}` objects.
#[derive(Debug, Deserialize)]
struct RawPriceRecord {
    time: String,
    price: f64,
}

/// Load a chronological price series from disk.
///
/// `.json` files are expected in the price-history format (see
/// [`RawPriceRecord`]); anything else is read as two-column `time,price` CSV
/// with an optional header row. Records are sorted by timestamp before being
/// returned.
pub fn load_prices<P: AsRef<Path>>(path: P) -> Result<Vec<PricePoint>> {
    let path_ref = path.as_ref();
    let is_json = path_ref
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let mut points = if is_json {
        load_json(path_ref)?
    } else {
        load_csv(path_ref)?
    };

    if points.is_empty() {
        return Err(LoaderError::Empty.into());
    }

    points.sort_by_key(|point| point.timestamp);
    Ok(points)
}

fn load_json(path: &Path) -> Result<Vec<PricePoint>> {
    let file = File::open(path).with_context(|| format!("failed to open {:?}", path))?;
    let records: Vec<RawPriceRecord> = serde_json::from_reader(file)
        .with_context(|| format!("failed to parse JSON price history from {:?}", path))?;

    records
        .into_iter()
        .map(|record| {
            let timestamp = parse_timestamp(&record.time)?;
            Ok(PricePoint {
                timestamp,
                price: record.price,
            })
        })
        .collect()
}

fn load_csv(path: &Path) -> Result<Vec<PricePoint>> {
    let file = File::open(path).with_context(|| format!("failed to open {:?}", path))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(file);

    let mut points = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        // Skip a header row by checking the first field.
        if let Some(first) = record.get(0) {
            if first.trim().eq_ignore_ascii_case("time") {
                continue;
            }
        }

        let time_field = record
            .get(0)
            .ok_or_else(|| anyhow!(LoaderError::Timestamp(String::from("<missing>"))))?;
        let price_field = record
            .get(1)
            .ok_or_else(|| anyhow!(LoaderError::ParsePrice(String::from("<missing>"))))?;

        let timestamp = parse_timestamp(time_field)?;
        let price = price_field
            .replace(',', "")
            .parse::<f64>()
            .map_err(|_| LoaderError::ParsePrice(price_field.to_string()))?;

        points.push(PricePoint { timestamp, price });
    }

    Ok(points)
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    let trimmed = value.trim();
    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(datetime.with_timezone(&Utc));
    }

    // The original price-history files carry naive ISO stamps; read them as UTC.
    let patterns = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];
    for pattern in &patterns {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, pattern) {
            return Ok(Utc.from_utc_datetime(&datetime));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(datetime) = date.and_hms_opt(0, 0, 0) {
            return Ok(Utc.from_utc_datetime(&datetime));
        }
    }

    Err(LoaderError::Timestamp(trimmed.to_string()).into())
}

/// Require chronological order. Equal consecutive stamps are tolerated; the
/// analyses only need non-decreasing time for their output to read
/// chronologically.
pub fn validate_series(points: &[PricePoint]) -> Result<()> {
    if points.is_empty() {
        return Err(LoaderError::Empty.into());
    }
    for pair in points.windows(2) {
        if pair[1].timestamp < pair[0].timestamp {
            return Err(anyhow!("timestamps must be non-decreasing"));
        }
    }
    Ok(())
}
