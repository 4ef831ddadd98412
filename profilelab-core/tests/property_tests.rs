//! Property tests for indicator invariants.
//!
//! Uses proptest to verify:
//! 1. Bollinger sliding window equals a brute-force recomputation
//! 2. RSI stays within [0, 100] and is exactly 100 without losses
//! 3. TPO counts are idempotent per (level, period)
//! 4. Value area contains the POC and reaches the target share
//! 5. VWAP restarts at every session boundary
//! 6. ANN markers are deterministic and alternate direction
//! 7. Period letters never repeat

use std::collections::HashSet;

use proptest::prelude::*;
use profilelab_core::ann::AnnPredictor;
use profilelab_core::domain::{Candle, MarkerShape};
use profilelab_core::indicators::{Bollinger, Indicator, Rsi, Vwap};
use profilelab_core::tpo::{build_profiles, period_letter, TpoConfig, TpoHistogram};

const DAY_1: i64 = 1_704_153_600; // 2024-01-02 00:00
const OPEN: i64 = 9 * 3600 + 15 * 60;

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_steps(len: std::ops::Range<usize>) -> impl Strategy<Value = Vec<(f64, f64, f64)>> {
    prop::collection::vec((-2.0..2.0_f64, 0.0..1.5_f64, 0.0..1.5_f64), len)
}

/// Overlapping five-minute candles: each opens at the previous close.
fn walk(day: i64, start: f64, steps: &[(f64, f64, f64)]) -> Vec<Candle> {
    let mut price = start;
    steps
        .iter()
        .enumerate()
        .map(|(i, &(change, up, down))| {
            let open = price;
            price = (price + change).max(1.0);
            let time = DAY_1 + day * 86_400 + OPEN + i as i64 * 300;
            Candle::new(time, open, open.max(price) + up, open.min(price) - down, price)
                .with_volume(100.0 + (i % 7) as f64 * 50.0)
        })
        .collect()
}

fn brute_force_bands(closes: &[f64], period: usize, mult: f64) -> Vec<(f64, f64, f64)> {
    closes
        .windows(period)
        .map(|w| {
            let mean = w.iter().sum::<f64>() / period as f64;
            let var = w.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / period as f64;
            let sd = var.sqrt();
            (mean + mult * sd, mean, mean - mult * sd)
        })
        .collect()
}

// ── 1. Bollinger ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn bollinger_matches_brute_force(steps in arb_steps(1..120), period in 1usize..30) {
        let candles = walk(0, 100.0, &steps);
        let out = Bollinger::new(period, 2.0).compute(&candles);
        let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();

        if candles.len() < period {
            prop_assert!(out.upper.is_empty() && out.middle.is_empty() && out.lower.is_empty());
        } else {
            let expected = brute_force_bands(&closes, period, 2.0);
            prop_assert_eq!(out.middle.len(), expected.len());
            // sum-of-squares drift shows up as sqrt(eps) near zero variance
            for (i, (u, m, l)) in expected.iter().enumerate() {
                prop_assert!((out.middle[i].value - m).abs() < 1e-8);
                prop_assert!((out.upper[i].value - u).abs() < 1e-3);
                prop_assert!((out.lower[i].value - l).abs() < 1e-3);
                prop_assert_eq!(out.middle[i].time, candles[i + period - 1].time);
            }
        }
    }
}

// ── 2. RSI ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn rsi_is_bounded(steps in arb_steps(20..150), period in 2usize..20) {
        let candles = walk(0, 100.0, &steps);
        for v in Rsi::new(period).compute(&candles).into_iter().filter(|v| !v.is_nan()) {
            prop_assert!((0.0..=100.0).contains(&v), "rsi out of range: {}", v);
        }
    }

    #[test]
    fn rsi_without_losses_is_100(gains in prop::collection::vec(0.0..3.0_f64, 15..60)) {
        let steps: Vec<(f64, f64, f64)> = gains.iter().map(|&g| (g, 0.5, 0.5)).collect();
        let candles = walk(0, 100.0, &steps);
        for v in Rsi::new(14).compute(&candles).into_iter().filter(|v| !v.is_nan()) {
            prop_assert_eq!(v, 100.0);
        }
    }
}

// ── 3-4. Market profile ──────────────────────────────────────────────

proptest! {
    #[test]
    fn tpo_counts_are_idempotent(steps in arb_steps(1..40), period in 0usize..10) {
        let candles = walk(0, 100.0, &steps);
        let mut histogram = TpoHistogram::new(0.5);
        for candle in &candles {
            let before = histogram.total();
            let added = histogram.add(period, candle);
            prop_assert_eq!(histogram.total(), before + added);
            // same letter again adds nothing
            prop_assert_eq!(histogram.add(period, candle), 0);
        }
        // no level holds more TPOs than there are distinct periods
        prop_assert!(histogram.counts().values().all(|&c| c <= 1));
    }

    #[test]
    fn value_area_contains_poc_and_reaches_target(steps in arb_steps(12..75)) {
        let candles = walk(0, 100.0, &steps);
        let config = TpoConfig::default();
        let profiles = build_profiles(&candles, &config);
        prop_assert_eq!(profiles.len(), 1);
        let p = &profiles[0];

        prop_assert!(p.value_area_low <= p.poc && p.poc <= p.value_area_high);
        let half = p.tick_size / 2.0;
        let inside: usize = p
            .levels
            .iter()
            .filter(|l| l.price >= p.value_area_low - half && l.price <= p.value_area_high + half)
            .map(|l| l.tpo_count)
            .sum();
        prop_assert!(inside as f64 >= p.total_tpos as f64 * 0.70 - 1e-9);
        prop_assert_eq!(p.levels.iter().map(|l| l.tpo_count).sum::<usize>(), p.total_tpos);
    }
}

// ── 5. VWAP reset ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn vwap_restarts_each_session(day1 in arb_steps(1..40), day2 in arb_steps(1..40)) {
        let first = walk(0, 100.0, &day1);
        let second = walk(1, 120.0, &day2);
        let both: Vec<Candle> = first.iter().chain(&second).copied().collect();

        let vwap = Vwap::default();
        let combined = vwap.compute(&both);
        let alone = vwap.compute(&second);
        let tail = &combined[first.len()..];

        prop_assert_eq!(tail.len(), alone.len());
        for (a, b) in tail.iter().zip(&alone) {
            prop_assert_eq!(a.time, b.time);
            prop_assert!((a.value - b.value).abs() < 1e-9);
        }
    }
}

// ── 6. ANN ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn ann_markers_deterministic_and_alternating(
        closes in prop::collection::vec(50.0..150.0_f64, 2..40),
    ) {
        let candles: Vec<Candle> = closes
            .iter()
            .enumerate()
            .map(|(d, &c)| Candle::new(DAY_1 + d as i64 * 86_400 + OPEN, c, c, c, c))
            .collect();
        let predictor = AnnPredictor::default();
        let a = predictor.compute(&candles);
        let b = predictor.compute(&candles);
        prop_assert_eq!(&a, &b);

        for pair in a.markers.windows(2) {
            prop_assert_ne!(pair[0].shape, pair[1].shape);
        }
        if let Some(first) = a.markers.first() {
            prop_assert!(matches!(first.shape, MarkerShape::ArrowUp | MarkerShape::ArrowDown));
        }
    }
}

// ── 7. Letters ───────────────────────────────────────────────────────

#[test]
fn period_letters_are_unique() {
    let mut seen = HashSet::new();
    for i in 0..3000 {
        assert!(seen.insert(period_letter(i)), "duplicate letter at {i}");
    }
}
