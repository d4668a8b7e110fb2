use crate::analysis::AnalysisError;
use crate::data::{ClassifiedLevel, LevelLabel};

/// Label each detected level as support, resistance, or neutral from local
/// neighbor behavior.
///
/// A price is "near" a level when `|price - level| / level <= tolerance`. For
/// every near interior point, both neighbors strictly above the level count
/// as a support touch (the level held as a floor), both strictly below as a
/// resistance touch (it held as a ceiling), and anything else as a neutral
/// touch (the level was crossed). The label with a strict majority wins; any
/// tie, including the no-touches case, is `Neutral`.
///
/// This is a noise-tolerant heuristic over historical reversals, not a
/// prediction of future behavior.
///
/// Non-positive levels are rejected: the relative-tolerance formula divides
/// by the level and is undefined at zero.
pub fn classify_levels(
    prices: &[f64],
    levels: &[f64],
    tolerance: f64,
) -> Result<Vec<ClassifiedLevel>, AnalysisError> {
    if !(tolerance > 0.0) {
        return Err(AnalysisError::InvalidParameter("tolerance must be positive"));
    }
    if let Some(&bad) = levels.iter().find(|&&level| !(level > 0.0)) {
        return Err(AnalysisError::DegenerateLevel(bad));
    }

    let mut classified = Vec::with_capacity(levels.len());
    for &level in levels {
        let mut support = 0usize;
        let mut resistance = 0usize;
        let mut neutral = 0usize;

        // Interior points only: classification needs both neighbors.
        for i in 1..prices.len().saturating_sub(1) {
            if (prices[i] - level).abs() / level > tolerance {
                continue;
            }
            let prev = prices[i - 1];
            let next = prices[i + 1];
            if prev > level && next > level {
                support += 1;
            } else if prev < level && next < level {
                resistance += 1;
            } else {
                neutral += 1;
            }
        }

        let label = if support > resistance && support > neutral {
            LevelLabel::Support
        } else if resistance > support && resistance > neutral {
            LevelLabel::Resistance
        } else {
            LevelLabel::Neutral
        };

        classified.push(ClassifiedLevel {
            price: level,
            label,
            support_touches: support,
            resistance_touches: resistance,
            neutral_touches: neutral,
        });
    }

    Ok(classified)
}
