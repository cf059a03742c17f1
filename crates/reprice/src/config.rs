use serde::Deserialize;

use crate::error::RepriceError;
use crate::model::PackKind;

/// Exclusive bounds of a policy multiplier.
pub const MULTIPLIER_MIN: f64 = 0.49;
pub const MULTIPLIER_MAX: f64 = 2.01;

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct RepriceConfig {
    pub name: String,
    /// Cents value every adjusted price ends in.
    pub round_up_cents: u8,
    pub single_pack: PricingPolicy,
    pub multi_pack: PricingPolicy,
    #[serde(default)]
    pub keywords: KeywordConfig,
    #[serde(default)]
    pub catalogs: Option<CatalogsConfig>,
    #[serde(default)]
    pub output: OutputConfig,
}

// ---------------------------------------------------------------------------
// Pricing policy
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PricingPolicy {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    pub base_source: BaseSource,
    pub multiplier: f64,
    /// Currency added per unit of weight.
    #[serde(default)]
    pub weight_surcharge: f64,
}

fn default_enabled() -> bool {
    true
}

/// Which catalog's price an adjustment starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseSource {
    InventoryPrice,
    WholesalePrice,
}

impl std::fmt::Display for BaseSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InventoryPrice => write!(f, "inventory_price"),
            Self::WholesalePrice => write!(f, "wholesale_price"),
        }
    }
}

// ---------------------------------------------------------------------------
// Keywords
// ---------------------------------------------------------------------------

/// Name tokens that drive categorization. Matching is exact against the
/// lower-cased token, punctuation included.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct KeywordConfig {
    pub multi_pack: String,
    pub exclude: Vec<String>,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            multi_pack: "pack.".into(),
            exclude: vec![
                "carburetor.".into(),
                "starter.".into(),
                "rim.".into(),
                "radiator.".into(),
            ],
        }
    }
}

impl KeywordConfig {
    /// Lower-case every keyword in place.
    pub fn normalize(&mut self) {
        self.multi_pack = self.multi_pack.to_lowercase();
        for kw in &mut self.exclude {
            *kw = kw.to_lowercase();
        }
    }
}

// ---------------------------------------------------------------------------
// Catalog sources
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogsConfig {
    pub wholesale: WholesaleCatalogConfig,
    #[serde(default)]
    pub discounts: Option<WholesaleCatalogConfig>,
    pub inventory: InventoryCatalogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WholesaleCatalogConfig {
    pub file: String,
    #[serde(default)]
    pub columns: WholesaleColumns,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WholesaleColumns {
    pub key: String,
    pub price: String,
}

impl Default for WholesaleColumns {
    fn default() -> Self {
        Self {
            key: "product_number".into(),
            price: "price".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct InventoryCatalogConfig {
    pub file: String,
    /// Stable-sort inventory by display name after loading.
    #[serde(default)]
    pub sort_by_name: bool,
    #[serde(default)]
    pub columns: InventoryColumns,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InventoryColumns {
    pub sku: String,
    pub name: String,
    pub price: String,
    pub weight: String,
    /// Product-number column. When absent the key is the last word of the name.
    pub key: Option<String>,
}

impl Default for InventoryColumns {
    fn default() -> Self {
        Self {
            sku: "sku".into(),
            name: "name".into(),
            price: "price".into(),
            weight: "weight".into(),
            key: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub dir: Option<String>,
}

// ---------------------------------------------------------------------------
// Parse + Validate
// ---------------------------------------------------------------------------

impl RepriceConfig {
    pub fn from_toml(input: &str) -> Result<Self, RepriceError> {
        let mut config: RepriceConfig =
            toml::from_str(input).map_err(|e| RepriceError::ConfigParse(e.to_string()))?;
        config.validate()?;
        config.keywords.normalize();
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), RepriceError> {
        if self.round_up_cents > 99 {
            return Err(RepriceError::ConfigValidation(format!(
                "round_up_cents must be 0-99, got {}",
                self.round_up_cents
            )));
        }

        validate_policy("single_pack", &self.single_pack)?;
        validate_policy("multi_pack", &self.multi_pack)?;

        let kw = &self.keywords;
        for word in std::iter::once(&kw.multi_pack).chain(kw.exclude.iter()) {
            if word.is_empty() || word.chars().any(char::is_whitespace) {
                return Err(RepriceError::ConfigValidation(format!(
                    "keyword '{word}' must be a single non-empty token"
                )));
            }
        }

        Ok(())
    }

    /// Policy governing records of `kind`. Unclassified records are priced
    /// as single-pack, matching the categorizer's default.
    pub fn policy(&self, kind: PackKind) -> &PricingPolicy {
        match kind {
            PackKind::MultiPack => &self.multi_pack,
            PackKind::SinglePack | PackKind::Unclassified => &self.single_pack,
        }
    }
}

fn validate_policy(label: &str, policy: &PricingPolicy) -> Result<(), RepriceError> {
    // NaN fails both comparisons
    if !(policy.multiplier > MULTIPLIER_MIN && policy.multiplier < MULTIPLIER_MAX) {
        return Err(RepriceError::ConfigValidation(format!(
            "{label}.multiplier must be between {MULTIPLIER_MIN} and {MULTIPLIER_MAX} (exclusive), got {}",
            policy.multiplier
        )));
    }
    if !policy.weight_surcharge.is_finite() || policy.weight_surcharge < 0.0 {
        return Err(RepriceError::ConfigValidation(format!(
            "{label}.weight_surcharge must be a non-negative number, got {}",
            policy.weight_surcharge
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
