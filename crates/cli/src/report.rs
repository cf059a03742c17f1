//! Fixed-width product listings and the three upload files.

use std::fmt::Write as _;
use std::path::Path;

use shelfprice_reprice::ProductRecord;

const COLUMN_WIDTH: usize = 20;

/// Upload file names, one line per updated product, in run order.
pub const SKUS_FILE: &str = "skus.txt";
pub const NAMES_FILE: &str = "names.txt";
pub const PRICES_FILE: &str = "prices.txt";

/// Pad `s` to `width`, always leaving at least one trailing space.
fn cell(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        format!("{s} ")
    } else {
        format!("{s}{}", " ".repeat(width - len))
    }
}

/// Render products as a fixed-width table: product number, SKU, price,
/// weight, name. The SKU column is the longest SKU (at least `SKU`) plus
/// one separating space.
pub fn product_table(products: &[ProductRecord]) -> String {
    let mut out = String::new();
    if products.is_empty() {
        out.push_str("List is empty!\n\n\n");
    }

    let sku_width = products
        .iter()
        .map(|p| p.sku.chars().count())
        .max()
        .unwrap_or(0)
        .max("SKU".len())
        + 1;

    let _ = writeln!(
        out,
        "{}{}{}{}NAME",
        cell("PRODUCT NUMBER", COLUMN_WIDTH),
        cell("SKU", sku_width),
        cell("PRICE", COLUMN_WIDTH),
        cell("WEIGHT", COLUMN_WIDTH),
    );

    for p in products {
        let _ = writeln!(
            out,
            "{}{}{}{}{}",
            cell(&p.key, COLUMN_WIDTH),
            cell(&p.sku, sku_width),
            cell(&p.price_display(), COLUMN_WIDTH),
            cell(&format!("{:.2}", p.weight), COLUMN_WIDTH),
            p.display_name,
        );
    }

    out
}

fn lines<'a>(values: impl Iterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for v in values {
        out.push_str(v);
        out.push('\n');
    }
    out
}

/// Write `skus.txt`, `names.txt` and `prices.txt` for the updated products.
pub fn write_upload_files(dir: &Path, updated: &[ProductRecord]) -> std::io::Result<()> {
    std::fs::write(dir.join(SKUS_FILE), lines(updated.iter().map(|p| p.sku.as_str())))?;
    std::fs::write(
        dir.join(NAMES_FILE),
        lines(updated.iter().map(|p| p.display_name.as_str())),
    )?;
    let prices: Vec<String> = updated.iter().map(|p| p.price_display()).collect();
    std::fs::write(dir.join(PRICES_FILE), lines(prices.iter().map(String::as_str)))?;
    Ok(())
}

pub fn write_table(path: &Path, products: &[ProductRecord]) -> std::io::Result<()> {
    std::fs::write(path, product_table(products))
}
