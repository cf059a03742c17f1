use crate::config::{InventoryCatalogConfig, WholesaleCatalogConfig};
use crate::error::RepriceError;
use crate::model::ProductRecord;

/// Largest accepted catalog price, in cents (one trillion dollars).
pub const MAX_PRICE_CENTS: i64 = 100_000_000_000_000;

/// Parse a price such as `"1,234.50"` or `" 12.5"` into cents.
///
/// Thousands separators and surrounding whitespace are dropped. Negative,
/// empty, non-numeric and above-[`MAX_PRICE_CENTS`] values yield `None`.
pub fn parse_price_cents(raw: &str) -> Option<i64> {
    let cents = (parse_amount(raw)? * 100.0).round();
    if cents > MAX_PRICE_CENTS as f64 {
        return None;
    }
    Some(cents as i64)
}

/// Parse a weight with the same coercion as prices. Blank weights are `0`.
pub fn parse_weight(raw: &str) -> Option<f64> {
    if raw.trim().is_empty() {
        return Some(0.0);
    }
    parse_amount(raw)
}

fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    let value: f64 = cleaned.parse().ok()?;
    if value.is_finite() && value >= 0.0 {
        Some(value)
    } else {
        None
    }
}

/// Product number embedded as the last word of an inventory name.
pub fn key_from_name(name: &str) -> Option<&str> {
    name.split_whitespace().last()
}

fn reader(csv_data: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(csv_data.as_bytes())
}

fn headers(reader: &mut csv::Reader<&[u8]>, catalog: &str) -> Result<Vec<String>, RepriceError> {
    Ok(reader
        .headers()
        .map_err(|e| RepriceError::Csv {
            catalog: catalog.into(),
            message: e.to_string(),
        })?
        .iter()
        .map(|h| h.to_string())
        .collect())
}

fn column_index(headers: &[String], catalog: &str, name: &str) -> Result<usize, RepriceError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| RepriceError::MissingColumn {
            catalog: catalog.into(),
            column: name.into(),
        })
}

/// Load a wholesale-shaped catalog (full price feed or discount overlay).
pub fn load_wholesale_csv(
    catalog: &str,
    csv_data: &str,
    config: &WholesaleCatalogConfig,
) -> Result<Vec<ProductRecord>, RepriceError> {
    let mut reader = reader(csv_data);
    let headers = headers(&mut reader, catalog)?;
    let key_idx = column_index(&headers, catalog, &config.columns.key)?;
    let price_idx = column_index(&headers, catalog, &config.columns.price)?;

    let mut records = Vec::new();
    for (i, row) in reader.records().enumerate() {
        let row_no = i + 1;
        let row = row.map_err(|e| RepriceError::Csv {
            catalog: catalog.into(),
            message: e.to_string(),
        })?;

        let key = row.get(key_idx).unwrap_or("");
        let price_str = row.get(price_idx).unwrap_or("");
        let price_cents = parse_price_cents(price_str).ok_or_else(|| RepriceError::PriceParse {
            catalog: catalog.into(),
            row: row_no,
            value: price_str.into(),
        })?;

        records.push(ProductRecord::wholesale(key, price_cents));
    }

    log::info!("loaded {} {catalog} records", records.len());
    Ok(records)
}

/// Load the retailer's inventory catalog.
pub fn load_inventory_csv(
    csv_data: &str,
    config: &InventoryCatalogConfig,
) -> Result<Vec<ProductRecord>, RepriceError> {
    const CATALOG: &str = "inventory";

    let mut reader = reader(csv_data);
    let headers = headers(&mut reader, CATALOG)?;
    let col = &config.columns;
    let sku_idx = column_index(&headers, CATALOG, &col.sku)?;
    let name_idx = column_index(&headers, CATALOG, &col.name)?;
    let price_idx = column_index(&headers, CATALOG, &col.price)?;
    let weight_idx = column_index(&headers, CATALOG, &col.weight)?;
    let key_idx = match col.key {
        Some(ref key) => Some(column_index(&headers, CATALOG, key)?),
        None => None,
    };

    let mut records = Vec::new();
    for (i, row) in reader.records().enumerate() {
        let row_no = i + 1;
        let row = row.map_err(|e| RepriceError::Csv {
            catalog: CATALOG.into(),
            message: e.to_string(),
        })?;

        let sku = row.get(sku_idx).unwrap_or("");
        let name = row.get(name_idx).unwrap_or("");

        let key = match key_idx {
            Some(ki) => row.get(ki).unwrap_or(""),
            None => key_from_name(name).ok_or_else(|| RepriceError::EmptyName {
                catalog: CATALOG.into(),
                row: row_no,
            })?,
        };

        let price_str = row.get(price_idx).unwrap_or("");
        let price_cents = parse_price_cents(price_str).ok_or_else(|| RepriceError::PriceParse {
            catalog: CATALOG.into(),
            row: row_no,
            value: price_str.into(),
        })?;

        let weight_str = row.get(weight_idx).unwrap_or("");
        let weight = parse_weight(weight_str).ok_or_else(|| RepriceError::WeightParse {
            catalog: CATALOG.into(),
            row: row_no,
            value: weight_str.into(),
        })?;

        records.push(ProductRecord::inventory(sku, name, key, price_cents, weight));
    }

    if config.sort_by_name {
        records.sort_by(|a, b| a.display_name.cmp(&b.display_name));
    }

    log::info!("loaded {} inventory records", records.len());
    Ok(records)
}
