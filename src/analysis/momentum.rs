use itertools::Itertools;

use crate::analysis::AnalysisError;
use crate::data::{MomentumSample, Trend};

/// Exponential moving average with smoothing factor `2 / (period + 1)`,
/// seeded with the first value rather than an SMA warm-up. Output length
/// equals input length with no leading undefined region.
fn ema(values: &[f64], period: usize) -> Vec<f64> {
    let alpha = 2.0 / (period as f64 + 1.0);
    let mut out = Vec::with_capacity(values.len());
    let mut prev = match values.first() {
        Some(&first) => first,
        None => return out,
    };
    out.push(prev);
    for &value in &values[1..] {
        prev = alpha * value + (1.0 - alpha) * prev;
        out.push(prev);
    }
    out
}

/// Compute MACD momentum over a price series.
///
/// Produces one `MomentumSample` per input price: fast and slow EMAs, the
/// MACD line (fast minus slow), a signal line (EMA of the MACD line), and the
/// histogram (MACD minus signal). Because every EMA seeds at index 0, the
/// first MACD sample is always exactly zero.
///
/// The trend tag comes from the raw price delta against the previous sample,
/// not from the histogram; the first sample has no predecessor and carries
/// `None`. Non-finite input values propagate through the recurrences under
/// IEEE-754 rules.
pub fn compute_momentum(
    prices: &[f64],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> Result<Vec<MomentumSample>, AnalysisError> {
    if fast_period < 1 || slow_period < 1 || signal_period < 1 {
        return Err(AnalysisError::InvalidParameter("periods must be at least 1"));
    }
    if fast_period >= slow_period {
        return Err(AnalysisError::InvalidParameter(
            "fast period must be shorter than slow period",
        ));
    }
    if prices.is_empty() {
        return Ok(Vec::new());
    }

    let ema_fast = ema(prices, fast_period);
    let ema_slow = ema(prices, slow_period);
    let macd: Vec<f64> = ema_fast
        .iter()
        .zip(ema_slow.iter())
        .map(|(fast, slow)| fast - slow)
        .collect();
    let signal = ema(&macd, signal_period);

    let mut trends = vec![None];
    trends.extend(prices.iter().tuple_windows().map(|(prev, curr)| {
        Some(if curr > prev {
            Trend::Up
        } else if curr < prev {
            Trend::Down
        } else {
            Trend::Flat
        })
    }));

    Ok((0..prices.len())
        .map(|i| MomentumSample {
            ema_fast: ema_fast[i],
            ema_slow: ema_slow[i],
            macd: macd[i],
            signal: signal[i],
            histogram: macd[i] - signal[i],
            trend: trends[i],
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn rejects_zero_periods() {
        assert!(compute_momentum(&[1.0], 0, 3, 2).is_err());
        assert!(compute_momentum(&[1.0], 2, 0, 2).is_err());
        assert!(compute_momentum(&[1.0], 2, 3, 0).is_err());
    }

    #[test]
    fn rejects_fast_not_shorter_than_slow() {
        assert!(compute_momentum(&[1.0, 2.0], 3, 3, 2).is_err());
        assert!(compute_momentum(&[1.0, 2.0], 5, 3, 2).is_err());
    }

    #[test]
    fn empty_series_yields_empty_result() {
        assert!(compute_momentum(&[], 2, 3, 2).unwrap().is_empty());
    }

    #[test]
    fn output_length_matches_input_length() {
        for len in [1usize, 2, 7, 50] {
            let prices: Vec<f64> = (0..len).map(|i| 100.0 + i as f64).collect();
            let samples = compute_momentum(&prices, 12, 26, 9).unwrap();
            assert_eq!(samples.len(), len);
        }
    }

    #[test]
    fn first_macd_sample_is_zero() {
        // Both EMAs seed to prices[0], so the difference vanishes at index 0.
        let samples = compute_momentum(&[42.0, 43.0, 41.0], 2, 3, 2).unwrap();
        assert_eq!(samples[0].macd, 0.0);
        assert_eq!(samples[0].signal, 0.0);
        assert_eq!(samples[0].histogram, 0.0);
        assert_eq!(samples[0].ema_fast, 42.0);
        assert_eq!(samples[0].ema_slow, 42.0);
    }

    #[test]
    fn trend_follows_raw_price_delta() {
        let samples = compute_momentum(&[1.0, 2.0, 3.0, 4.0, 5.0], 2, 3, 2).unwrap();
        let trends: Vec<Option<Trend>> = samples.iter().map(|s| s.trend).collect();
        assert_eq!(
            trends,
            vec![
                None,
                Some(Trend::Up),
                Some(Trend::Up),
                Some(Trend::Up),
                Some(Trend::Up)
            ]
        );

        let samples = compute_momentum(&[5.0, 5.0, 3.0], 2, 3, 2).unwrap();
        assert_eq!(samples[1].trend, Some(Trend::Flat));
        assert_eq!(samples[2].trend, Some(Trend::Down));
    }

    #[test]
    fn matches_hand_rolled_recurrence() {
        let prices = [1.0, 2.0, 3.0, 4.0, 5.0];
        let samples = compute_momentum(&prices, 2, 3, 2).unwrap();

        let alpha_fast = 2.0 / 3.0;
        let alpha_slow = 2.0 / 4.0;
        let alpha_sig = 2.0 / 3.0;
        let (mut fast, mut slow, mut sig) = (prices[0], prices[0], 0.0);
        for (i, &price) in prices.iter().enumerate() {
            if i > 0 {
                fast = alpha_fast * price + (1.0 - alpha_fast) * fast;
                slow = alpha_slow * price + (1.0 - alpha_slow) * slow;
                sig = alpha_sig * (fast - slow) + (1.0 - alpha_sig) * sig;
            }
            assert!((samples[i].ema_fast - fast).abs() < EPS);
            assert!((samples[i].ema_slow - slow).abs() < EPS);
            assert!((samples[i].macd - (fast - slow)).abs() < EPS);
            assert!((samples[i].signal - sig).abs() < EPS);
            assert!((samples[i].histogram - (fast - slow - sig)).abs() < EPS);
        }
    }

    #[test]
    fn single_price_is_fully_populated() {
        let samples = compute_momentum(&[7.5], 2, 3, 2).unwrap();
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].ema_fast, 7.5);
        assert_eq!(samples[0].macd, 0.0);
        assert_eq!(samples[0].trend, None);
    }

    #[test]
    fn idempotent_for_identical_input() {
        let prices = [9.0, 8.5, 8.7, 9.2];
        let a = compute_momentum(&prices, 2, 4, 3).unwrap();
        let b = compute_momentum(&prices, 2, 4, 3).unwrap();
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.macd, y.macd);
            assert_eq!(x.signal, y.signal);
            assert_eq!(x.trend, y.trend);
        }
    }

    #[test]
    fn nan_input_propagates() {
        let samples = compute_momentum(&[1.0, f64::NAN, 2.0], 2, 3, 2).unwrap();
        assert_eq!(samples.len(), 3);
        assert!(samples[1].macd.is_nan());
        assert!(samples[2].ema_fast.is_nan());
    }
}
