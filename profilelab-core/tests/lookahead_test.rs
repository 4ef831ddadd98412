//! Look-ahead contamination tests.
//!
//! No output at candle t may depend on candle t+1 or later.
//!
//! Method: compute on a truncated sequence and on the full sequence. Every
//! point the truncated run emits must appear, unchanged, at the same
//! position in the full run.

use profilelab_core::ann::AnnPredictor;
use profilelab_core::domain::{Candle, SeriesPoint};
use profilelab_core::indicators::*;

const DAY_1: i64 = 1_704_153_600; // 2024-01-02 00:00
const OPEN: i64 = 9 * 3600 + 15 * 60;

/// `days` sessions of 75 five-minute candles from 09:15, deterministic walk.
fn make_intraday(days: usize) -> Vec<Candle> {
    let mut out = Vec::with_capacity(days * 75);
    let mut price = 100.0;
    let mut i: u64 = 0;
    for day in 0..days {
        for slot in 0..75 {
            let seed = i.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let change = ((seed >> 33) % 200) as f64 / 100.0 - 1.0;
            let open = price;
            price = (price + change).max(10.0);
            let high = open.max(price) + ((seed >> 20) % 50) as f64 / 100.0;
            let low = open.min(price) - ((seed >> 10) % 50) as f64 / 100.0;
            let time = DAY_1 + day as i64 * 86_400 + OPEN + slot * 300;
            out.push(Candle::new(time, open, high, low, price).with_volume(500.0 + (seed % 1000) as f64));
            i += 1;
        }
    }
    out
}

fn assert_prefix(name: &str, truncated: &[SeriesPoint], full: &[SeriesPoint]) {
    assert!(
        truncated.len() <= full.len(),
        "{name}: truncated run emitted more points than the full run"
    );
    for (i, (t, f)) in truncated.iter().zip(full).enumerate() {
        assert_eq!(t.time, f.time, "{name}: time mismatch at point {i}");
        assert!(
            (t.value - f.value).abs() < 1e-10,
            "{name}: look-ahead contamination at point {i}: truncated={}, full={}",
            t.value,
            f.value
        );
    }
}

fn check_indicator(indicator: &dyn Indicator) {
    let full = make_intraday(4);
    let truncated = &full[..180];
    assert_prefix(indicator.name(), &indicator.series(truncated), &indicator.series(&full));
}

#[test]
fn lookahead_single_series() {
    check_indicator(&Sma::new(20));
    check_indicator(&Ema::new(20));
    check_indicator(&Rsi::new(14));
    check_indicator(&Atr::new(14));
}

#[test]
fn lookahead_bollinger() {
    let full = make_intraday(4);
    let b = Bollinger::default();
    let (t, f) = (b.compute(&full[..180]), b.compute(&full));
    assert_prefix("bollinger.upper", &t.upper, &f.upper);
    assert_prefix("bollinger.middle", &t.middle, &f.middle);
    assert_prefix("bollinger.lower", &t.lower, &f.lower);
}

#[test]
fn lookahead_stochastic() {
    let full = make_intraday(4);
    let s = Stochastic::default();
    let (t, f) = (s.compute(&full[..180]), s.compute(&full));
    assert_prefix("stochastic.k", &t.k, &f.k);
    assert_prefix("stochastic.d", &t.d, &f.d);
}

#[test]
fn lookahead_adx() {
    let full = make_intraday(4);
    let a = Adx::default();
    let (t, f) = (a.compute(&full[..180]), a.compute(&full));
    assert_prefix("adx", &t.adx, &f.adx);
    assert_prefix("plus_di", &t.plus_di, &f.plus_di);
    assert_prefix("minus_di", &t.minus_di, &f.minus_di);
}

#[test]
fn lookahead_supertrend() {
    let full = make_intraday(4);
    let s = Supertrend::default();
    let (t, f) = (s.compute(&full[..180]), s.compute(&full));
    assert_eq!(&f.line[..t.line.len()], &t.line[..]);
    assert_eq!(&f.trends[..t.trends.len()], &t.trends[..]);
}

#[test]
fn lookahead_ichimoku() {
    let full = make_intraday(4);
    let ichi = Ichimoku::default();
    let (t, f) = (ichi.compute(&full[..180]), ichi.compute(&full));
    assert_prefix("tenkan", &t.tenkan, &f.tenkan);
    assert_prefix("kijun", &t.kijun, &f.kijun);
    // forward shift moves times, not inputs
    assert_prefix("senkou_a", &t.senkou_a, &f.senkou_a);
    assert_prefix("senkou_b", &t.senkou_b, &f.senkou_b);
}

#[test]
fn lookahead_vwap_family() {
    let full = make_intraday(4);
    let v = Vwap::default();
    assert_prefix("vwap", &v.compute(&full[..180]), &v.compute(&full));

    let bands = VwapBands::default();
    let (t, f) = (bands.compute(&full[..180]), bands.compute(&full));
    assert_prefix("vwap_bands.vwap", &t.vwap, &f.vwap);
    for (tb, fb) in t.bands.iter().zip(&f.bands) {
        assert_prefix("vwap_bands.upper", &tb.upper, &fb.upper);
        assert_prefix("vwap_bands.lower", &tb.lower, &fb.lower);
    }
}

#[test]
fn lookahead_pivot_bars() {
    let full = make_intraday(4);
    for formula in [PivotFormula::Classic, PivotFormula::Woodie, PivotFormula::Camarilla] {
        let p = PivotPoints::new(formula, PivotTimeframe::Day);
        let (t, f) = (p.compute(&full[..180]), p.compute(&full));
        assert_eq!(&f.bars[..t.bars.len()], &t.bars[..], "{formula:?}");
    }
}

#[test]
fn lookahead_volume() {
    let full = make_intraday(4);
    let v = VolumeAnalysis::default();
    let (t, f) = (v.compute(&full[..180]), v.compute(&full));
    assert_prefix("volume.average", &t.average, &f.average);
    assert_prefix("volume.relative", &t.relative, &f.relative);
}

#[test]
fn lookahead_ann() {
    let full = make_intraday(4);
    let ann = AnnPredictor::default();
    let (t, f) = (ann.compute(&full[..180]), ann.compute(&full));
    assert_prefix("ann", &t.predictions, &f.predictions);
    assert_eq!(&f.markers[..t.markers.len()], &t.markers[..]);
}
