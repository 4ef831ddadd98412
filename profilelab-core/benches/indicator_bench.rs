//! Criterion benchmarks for the heavier studies.
//!
//! Benchmarks:
//! 1. Single-series indicators (SMA, EMA, RSI, ATR)
//! 2. Sliding-window Bollinger and VWAP bands
//! 3. Market profile build (auto tick, 30m and 5m blocks)
//! 4. Day-segmented strategies and the ANN predictor

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use profilelab_core::ann::AnnPredictor;
use profilelab_core::domain::Candle;
use profilelab_core::indicators::{Atr, Bollinger, Ema, Indicator, Rsi, Sma, VwapBands};
use profilelab_core::strategies::{PriceActionRange, RangeBreakout};
use profilelab_core::tpo::{build_profiles, BlockSize, TpoConfig};

// ── Helpers ──────────────────────────────────────────────────────────

const DAY_1: i64 = 1_704_153_600;

/// `days` sessions of 75 five-minute candles.
fn make_candles(days: usize) -> Vec<Candle> {
    (0..days * 75)
        .map(|i| {
            let day = (i / 75) as i64;
            let slot = (i % 75) as i64;
            let close = 100.0 + (i as f64 * 0.1).sin() * 10.0;
            let open = close - 0.3;
            let time = DAY_1 + day * 86_400 + 9 * 3600 + 15 * 60 + slot * 300;
            Candle::new(time, open, close + 1.5, close - 1.5, close)
                .with_volume(1_000.0 + (i % 500) as f64)
        })
        .collect()
}

// ── 1-2. Indicators ──────────────────────────────────────────────────

fn bench_indicators(c: &mut Criterion) {
    let mut group = c.benchmark_group("indicators");

    for &days in &[5, 20, 60] {
        let candles = make_candles(days);
        let stack: Vec<Box<dyn Indicator>> = vec![
            Box::new(Sma::new(20)),
            Box::new(Ema::new(50)),
            Box::new(Rsi::new(14)),
            Box::new(Atr::new(14)),
        ];

        group.bench_with_input(BenchmarkId::new("single_series_4", days), &days, |b, _| {
            b.iter(|| {
                for ind in &stack {
                    black_box(ind.compute(black_box(&candles)));
                }
            });
        });

        let bollinger = Bollinger::default();
        group.bench_with_input(BenchmarkId::new("bollinger_20", days), &days, |b, _| {
            b.iter(|| bollinger.compute(black_box(&candles)));
        });

        let bands = VwapBands::default();
        group.bench_with_input(BenchmarkId::new("vwap_bands", days), &days, |b, _| {
            b.iter(|| bands.compute(black_box(&candles)));
        });
    }

    group.finish();
}

// ── 3. Market profile ────────────────────────────────────────────────

fn bench_market_profile(c: &mut Criterion) {
    let mut group = c.benchmark_group("market_profile");

    let thirty = TpoConfig::default();
    let five = TpoConfig {
        block_size: BlockSize::from_minutes(5),
        ..TpoConfig::default()
    };

    for &days in &[5, 20, 60] {
        let candles = make_candles(days);
        group.bench_with_input(BenchmarkId::new("blocks_30m", days), &days, |b, _| {
            b.iter(|| build_profiles(black_box(&candles), black_box(&thirty)));
        });
        group.bench_with_input(BenchmarkId::new("blocks_5m", days), &days, |b, _| {
            b.iter(|| build_profiles(black_box(&candles), black_box(&five)));
        });
    }

    group.finish();
}

// ── 4. Strategies and predictor ──────────────────────────────────────

fn bench_day_studies(c: &mut Criterion) {
    let mut group = c.benchmark_group("day_studies");
    let candles = make_candles(60);

    group.bench_function("price_action_range_60d", |b| {
        b.iter(|| PriceActionRange.compute(black_box(&candles)));
    });
    let orb = RangeBreakout::default();
    group.bench_function("range_breakout_60d", |b| {
        b.iter(|| orb.compute(black_box(&candles)));
    });
    let ann = AnnPredictor::default();
    group.bench_function("ann_60d", |b| {
        b.iter(|| ann.compute(black_box(&candles)));
    });

    group.finish();
}

criterion_group!(benches, bench_indicators, bench_market_profile, bench_day_studies);
criterion_main!(benches);
