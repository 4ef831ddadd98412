//! Tick size policy and price quantization.
//!
//! The auto tick is a lookup on price magnitude, then nudged so a typical
//! session spans roughly 20..=200 levels. The thresholds are an empirical
//! policy table.

/// (upper price bound, tick)
const PRICE_TIERS: [(f64, f64); 6] = [
    (50.0, 0.05),
    (100.0, 0.1),
    (500.0, 0.5),
    (1_000.0, 1.0),
    (5_000.0, 2.0),
    (10_000.0, 5.0),
];
const MAX_TIER_TICK: f64 = 10.0;

const MIN_LEVELS: f64 = 20.0;
const MAX_LEVELS: f64 = 200.0;
const TARGET_LEVELS: f64 = 100.0;

/// Tick from price magnitude alone.
pub fn tier_tick(reference_price: f64) -> f64 {
    let price = reference_price.abs();
    PRICE_TIERS
        .iter()
        .find(|(bound, _)| price < *bound)
        .map(|&(_, tick)| tick)
        .unwrap_or(MAX_TIER_TICK)
}

/// Tier tick adjusted for the typical session range.
///
/// Fewer than 20 levels halves the tick once; more than 200 grows it by the
/// whole factor that brings the count near 100.
pub fn auto_tick_size(reference_price: f64, typical_range: f64) -> f64 {
    let mut tick = tier_tick(reference_price);
    if !(typical_range.is_finite() && typical_range > 0.0) {
        return tick;
    }

    let levels = typical_range / tick;
    if levels < MIN_LEVELS {
        tick /= 2.0;
    } else if levels > MAX_LEVELS {
        tick *= (levels / TARGET_LEVELS).ceil();
    }

    round_tick(tick)
}

fn round_tick(tick: f64) -> f64 {
    (tick * 10_000.0).round() / 10_000.0
}

/// Index of the tick bucket containing `price`.
pub fn tick_index(price: f64, tick: f64) -> i64 {
    // nudge so 100.0 / 0.05 lands on 2000, not 1999.999...
    (price / tick + 1e-9).floor() as i64
}

/// Price of a tick bucket, with float noise trimmed.
pub fn level_price(index: i64, tick: f64) -> f64 {
    (index as f64 * tick * 1e8).round() / 1e8
}
