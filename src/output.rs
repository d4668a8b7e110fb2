use tabled::{settings::Style, Table, Tabled};

use crate::data::{ClassifiedLevel, LevelLabel, MomentumSample, PricePoint, Trend};

#[derive(Tabled)]
struct LevelRow {
    #[tabled(rename = "Level")]
    price: String,
    #[tabled(rename = "Label")]
    label: &'static str,
    #[tabled(rename = "Touches")]
    touches: String,
    #[tabled(rename = "Support")]
    support: String,
    #[tabled(rename = "Resistance")]
    resistance: String,
    #[tabled(rename = "Crossed")]
    crossed: String,
}

pub fn print_report(
    points: &[PricePoint],
    levels: &[ClassifiedLevel],
    momentum: &[MomentumSample],
) {
    println!("\n=== Trend Recon ===\n");
    if let Some(last) = points.last() {
        println!(
            "Latest Price: {:.2} at {}",
            last.price,
            last.timestamp.format("%Y-%m-%d %H:%M"),
        );
    }

    if let Some(sample) = momentum.last() {
        let status = match sample.trend {
            Some(Trend::Up) => "rising",
            Some(Trend::Down) => "falling",
            Some(Trend::Flat) => "flat",
            None => "n/a (single sample)",
        };
        println!(
            "MACD: {:.4} | Signal: {:.4} | Histogram: {:.4}",
            sample.macd, sample.signal, sample.histogram
        );
        println!("Last price move: {status}");
    }

    if levels.is_empty() {
        println!("\nNo price levels detected.");
        return;
    }

    let rows: Vec<LevelRow> = levels
        .iter()
        .map(|level| {
            let touches = level.touches();
            let count = |value: usize| {
                if touches > 0 {
                    value.to_string()
                } else {
                    "-".to_string()
                }
            };
            LevelRow {
                price: format!("{:.2}", level.price),
                label: match level.label {
                    LevelLabel::Support => "Support",
                    LevelLabel::Resistance => "Resistance",
                    LevelLabel::Neutral => "Neutral",
                },
                touches: count(touches),
                support: count(level.support_touches),
                resistance: count(level.resistance_touches),
                crossed: count(level.neutral_touches),
            }
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("\n{table}\n");
}
