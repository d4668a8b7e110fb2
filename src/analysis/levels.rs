use std::collections::HashMap;

use crate::analysis::AnalysisError;

/// Detect the most frequently visited price bands in a series.
///
/// Each price is snapped to the nearest multiple of `precision` using
/// `f64::round` (half-away-from-zero), and the `n` most common bin values are
/// returned in descending-count order. Bins with equal counts keep the order
/// in which they were first seen in the series, so the result is fully
/// deterministic for a given input order.
///
/// Returns at most `n` values and never a duplicate. An empty series yields
/// an empty result.
pub fn detect_levels(prices: &[f64], n: usize, precision: f64) -> Result<Vec<f64>, AnalysisError> {
    if n < 1 {
        return Err(AnalysisError::InvalidParameter("n must be at least 1"));
    }
    if !(precision > 0.0) {
        return Err(AnalysisError::InvalidParameter("precision must be positive"));
    }
    if prices.is_empty() {
        return Ok(Vec::new());
    }

    // Tally in first-seen order; a bare HashMap iteration would make the
    // equal-count tie-break depend on hasher state.
    let mut order: Vec<(f64, usize)> = Vec::new();
    let mut index: HashMap<u64, usize> = HashMap::new();
    for &price in prices {
        let bin = (price / precision).round() * precision;
        match index.get(&bin.to_bits()) {
            Some(&slot) => order[slot].1 += 1,
            None => {
                index.insert(bin.to_bits(), order.len());
                order.push((bin, 1));
            }
        }
    }

    // Stable sort: equal counts preserve first-seen order.
    order.sort_by(|a, b| b.1.cmp(&a.1));
    order.truncate(n);
    Ok(order.into_iter().map(|(bin, _)| bin).collect())
}
