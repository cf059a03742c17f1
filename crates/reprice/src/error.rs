use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepriceError {
    /// TOML parse / deserialization error.
    #[error("config parse error: {0}")]
    ConfigParse(String),
    /// Policy value outside its valid range (multiplier, round-up cents, etc.).
    #[error("config validation error: {0}")]
    ConfigValidation(String),
    /// Missing required column in a catalog file.
    #[error("catalog '{catalog}': missing column '{column}'")]
    MissingColumn { catalog: String, column: String },
    /// Price field is not a non-negative decimal.
    #[error("catalog '{catalog}', row {row}: cannot parse price '{value}'")]
    PriceParse { catalog: String, row: usize, value: String },
    /// Weight field is not a non-negative decimal.
    #[error("catalog '{catalog}', row {row}: cannot parse weight '{value}'")]
    WeightParse { catalog: String, row: usize, value: String },
    /// Inventory row has no name to derive a product key from.
    #[error("catalog '{catalog}', row {row}: empty product name")]
    EmptyName { catalog: String, row: usize },
    /// Malformed CSV.
    #[error("catalog '{catalog}': {message}")]
    Csv { catalog: String, message: String },
    /// Adjustment produced NaN or infinity.
    #[error("product '{key}': price adjustment produced a non-finite amount")]
    NonFiniteAmount { key: String },
    /// Adjusted price does not fit in whole cents.
    #[error("product '{key}': adjusted price is out of range")]
    AmountOutOfRange { key: String },
}
