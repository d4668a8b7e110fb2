use clap::Parser;

/// Command-line configuration for the trend reconnaissance tool.
///
/// Defaults mirror the classic dashboard settings: five detected levels at a
/// rounding precision of 10 price units, MACD 12/26/9, and a 3% relative
/// tolerance for level classification.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct AppConfig {
    /// Input price-series file (JSON price history or time,price CSV).
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input_path: String,

    /// Number of high-frequency price levels to detect.
    #[arg(long = "levels", default_value_t = 5)]
    pub num_levels: usize,

    /// Rounding precision used to bin prices into levels (price units).
    #[arg(long, default_value_t = 10.0)]
    pub precision: f64,

    /// Fast EMA period for the MACD line.
    #[arg(long, default_value_t = 12)]
    pub fast_period: usize,

    /// Slow EMA period for the MACD line.
    #[arg(long, default_value_t = 26)]
    pub slow_period: usize,

    /// EMA period for the MACD signal line.
    #[arg(long, default_value_t = 9)]
    pub signal_period: usize,

    /// Relative tolerance for counting a price as a touch of a level.
    #[arg(long, default_value_t = 0.03)]
    pub tolerance: f64,
}
