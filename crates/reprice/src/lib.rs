//! `shelfprice-reprice` — catalog reconciliation and retail repricing engine.
//!
//! Pure engine crate: receives pre-loaded catalogs, returns partitioned,
//! repriced records. The `load` module parses catalog CSV text; reading
//! files and writing reports is left to the caller.

pub mod adjust;
pub mod categorize;
pub mod config;
pub mod discount;
pub mod engine;
pub mod error;
pub mod load;
pub mod matcher;
pub mod model;
pub mod summary;

pub use config::{BaseSource, PricingPolicy, RepriceConfig};
pub use engine::run;
pub use error::RepriceError;
pub use model::{CatalogSet, PackKind, ProductRecord, RepriceResult, RepriceSummary};
