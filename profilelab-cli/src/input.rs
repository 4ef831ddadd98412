//! Candle file loading.
//!
//! CSV files need a header row with `time,open,high,low,close` and an
//! optional `volume` column; JSON files hold an array of candle objects.
//! Either way the result is sorted by time with duplicate timestamps
//! dropped (the later row wins).

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{bail, Context, Result};
use profilelab_core::domain::Candle;
use tracing::{debug, warn};

pub fn load_candles(path: &Path) -> Result<Vec<Candle>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let reader = BufReader::new(file);

    let candles = match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => read_csv(reader),
        Some("json") => read_json(reader),
        other => bail!(
            "unsupported candle file extension {:?}; expected .csv or .json",
            other.unwrap_or("")
        ),
    }
    .with_context(|| format!("reading {}", path.display()))?;

    debug!(path = %path.display(), count = candles.len(), "loaded candles");
    Ok(normalize(candles))
}

pub fn read_csv<R: Read>(reader: R) -> Result<Vec<Candle>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut candles = Vec::new();
    for (row, record) in rdr.deserialize::<Candle>().enumerate() {
        candles.push(record.with_context(|| format!("csv row {}", row + 1))?);
    }
    Ok(candles)
}

pub fn read_json<R: Read>(reader: R) -> Result<Vec<Candle>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Sort ascending and keep one candle per timestamp.
pub fn normalize(mut candles: Vec<Candle>) -> Vec<Candle> {
    let before = candles.len();
    candles.sort_by_key(|c| c.time);
    // dedup_by keeps the first of a run; reverse first so the last row wins
    candles.reverse();
    candles.dedup_by_key(|c| c.time);
    candles.reverse();
    if candles.len() != before {
        warn!(dropped = before - candles.len(), "duplicate timestamps dropped");
    }
    candles
}
