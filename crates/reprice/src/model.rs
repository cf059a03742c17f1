use serde::Serialize;

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// Sale-unit classification derived from the product name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PackKind {
    Unclassified,
    SinglePack,
    MultiPack,
}

impl std::fmt::Display for PackKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unclassified => write!(f, "unclassified"),
            Self::SinglePack => write!(f, "single_pack"),
            Self::MultiPack => write!(f, "multi_pack"),
        }
    }
}

/// One line item from either catalog.
///
/// Wholesale records carry only `key` and `price_cents`; `sku`, `display_name`
/// and `weight` are populated for inventory records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRecord {
    pub key: String,
    pub display_name: String,
    pub sku: String,
    pub price_cents: i64,
    pub weight: f64,
    pub pack_kind: PackKind,
    pub excluded: bool,
}

impl ProductRecord {
    pub fn wholesale(key: impl Into<String>, price_cents: i64) -> Self {
        Self {
            key: key.into(),
            display_name: String::new(),
            sku: String::new(),
            price_cents,
            weight: 0.0,
            pack_kind: PackKind::Unclassified,
            excluded: false,
        }
    }

    pub fn inventory(
        sku: impl Into<String>,
        display_name: impl Into<String>,
        key: impl Into<String>,
        price_cents: i64,
        weight: f64,
    ) -> Self {
        Self {
            key: key.into(),
            display_name: display_name.into(),
            sku: sku.into(),
            price_cents,
            weight,
            pack_kind: PackKind::Unclassified,
            excluded: false,
        }
    }

    /// Price as `"<dollars>.<cc>"`.
    pub fn price_display(&self) -> String {
        format_cents(self.price_cents)
    }
}

/// Format integer cents as `"<dollars>.<cc>"`.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}

// ---------------------------------------------------------------------------
// Catalog set
// ---------------------------------------------------------------------------

/// All record lists of one run: the three inputs and the three terminal
/// partitions. Stages borrow it mutably; nothing else holds catalog state.
#[derive(Debug, Clone, Default)]
pub struct CatalogSet {
    pub wholesale: Vec<ProductRecord>,
    pub discounts: Vec<ProductRecord>,
    pub inventory: Vec<ProductRecord>,
    pub updated: Vec<ProductRecord>,
    pub missing: Vec<ProductRecord>,
    pub excluded: Vec<ProductRecord>,
}

impl CatalogSet {
    pub fn new(
        wholesale: Vec<ProductRecord>,
        discounts: Vec<ProductRecord>,
        inventory: Vec<ProductRecord>,
    ) -> Self {
        Self {
            wholesale,
            discounts,
            inventory,
            ..Self::default()
        }
    }

    /// Records placed in any terminal partition.
    pub fn partitioned_len(&self) -> usize {
        self.updated.len() + self.missing.len() + self.excluded.len()
    }
}

// ---------------------------------------------------------------------------
// Stage outputs
// ---------------------------------------------------------------------------

/// Inventory records that survived categorization, split by pack kind.
#[derive(Debug, Default)]
pub struct WorkingSets {
    pub single_pack: Vec<ProductRecord>,
    pub multi_pack: Vec<ProductRecord>,
}

#[derive(Debug, Default)]
pub struct MatchOutput {
    pub matched: Vec<ProductRecord>,
    pub missing: Vec<ProductRecord>,
}

// ---------------------------------------------------------------------------
// Summary + Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RepriceSummary {
    pub inventory_total: usize,
    pub updated: usize,
    pub missing: usize,
    pub excluded: usize,
    pub excluded_by_keyword: usize,
    pub excluded_by_policy: usize,
    pub single_pack: usize,
    pub multi_pack: usize,
    pub discounts_applied: usize,
    pub discounts_unmatched: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RepriceResult {
    pub meta: RepriceMeta,
    pub summary: RepriceSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct RepriceMeta {
    pub config_name: String,
    pub engine_version: String,
    pub run_at: String,
}
