//! Retail price computation.
//!
//! A record's new price is its base price scaled by the pack-kind multiplier,
//! plus a per-weight surcharge, cut down to whole dollars and then nudged off
//! merchandising-unfriendly values:
//!
//! - whole-dollar amounts ending in `0` gain a dollar (`20` → `21`)
//! - amounts strictly between 98 and 104 collapse to `100`
//!
//! The configured round-up cents are appended last, so every price in a run
//! ends in the same cents. The `$` price token in the display name is
//! rewritten to the new price.

use crate::config::PricingPolicy;
use crate::error::RepriceError;
use crate::model::ProductRecord;

/// Exclusive bounds of the band snapped to [`BAND_TARGET`].
pub const BAND_LOW: i64 = 98;
pub const BAND_HIGH: i64 = 104;
pub const BAND_TARGET: i64 = 100;

/// Slack added before flooring so binary floating-point error cannot push an
/// exact amount (`20.00 * 1.45` is `28.999999999999996`) down a dollar.
/// Far below a cent, so genuine fractional cents still truncate.
const FLOAT_SLACK_CENTS: f64 = 1e-6;

/// Whole dollars after multiplier, surcharge and flooring.
///
/// Fractional cents are truncated, never rounded: `19.9955` is `19`.
/// Returns `None` if the arithmetic is not finite.
pub fn base_dollars(price_cents: i64, weight: f64, policy: &PricingPolicy) -> Option<i64> {
    let cents = price_cents as f64 * policy.multiplier + weight * policy.weight_surcharge * 100.0;
    if !cents.is_finite() {
        return None;
    }
    let cents = (cents + FLOAT_SLACK_CENTS).floor().max(0.0) as i64;
    Some(cents / 100)
}

/// Add a dollar to amounts whose last digit is `0`.
pub fn avoid_round_ten(dollars: i64) -> i64 {
    if dollars % 10 == 0 {
        dollars + 1
    } else {
        dollars
    }
}

/// Collapse amounts in the open interval (98, 104) to 100.
pub fn snap_near_hundred(dollars: i64) -> i64 {
    if dollars > BAND_LOW && dollars < BAND_HIGH {
        BAND_TARGET
    } else {
        dollars
    }
}

/// Final whole-dollar amount: floor, anti-round-ten, near-100 band.
pub fn final_dollars(price_cents: i64, weight: f64, policy: &PricingPolicy) -> Option<i64> {
    base_dollars(price_cents, weight, policy).map(|d| snap_near_hundred(avoid_round_ten(d)))
}

/// `"<dollars>.<cc>"` with cents always two digits.
pub fn price_string(dollars: i64, cents: u8) -> String {
    format!("{dollars}.{cents:02}")
}

/// Replace every whitespace token starting with `$` by `$<price>.` and
/// rejoin with single spaces. Names without a `$` token come back as-is.
pub fn rewrite_display_name(name: &str, price: &str) -> String {
    if !name.split_whitespace().any(|w| w.starts_with('$')) {
        return name.to_string();
    }

    name.split_whitespace()
        .map(|word| {
            if word.starts_with('$') {
                format!("${price}.")
            } else {
                word.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Reprice one record in place.
pub fn adjust_price(
    record: &mut ProductRecord,
    policy: &PricingPolicy,
    round_up_cents: u8,
) -> Result<(), RepriceError> {
    let dollars = final_dollars(record.price_cents, record.weight, policy).ok_or_else(|| {
        RepriceError::NonFiniteAmount {
            key: record.key.clone(),
        }
    })?;

    let price_cents = dollars
        .checked_mul(100)
        .and_then(|c| c.checked_add(i64::from(round_up_cents)))
        .ok_or_else(|| RepriceError::AmountOutOfRange {
            key: record.key.clone(),
        })?;

    record.price_cents = price_cents;
    record.display_name =
        rewrite_display_name(&record.display_name, &price_string(dollars, round_up_cents));
    Ok(())
}

/// Reprice every record of a matched working set and append it to `updated`.
///
/// Stops at the first record that cannot be adjusted; that record is not
/// appended.
pub fn adjust_all(
    records: Vec<ProductRecord>,
    policy: &PricingPolicy,
    round_up_cents: u8,
    updated: &mut Vec<ProductRecord>,
) -> Result<(), RepriceError> {
    for mut record in records {
        adjust_price(&mut record, policy, round_up_cents)?;
        updated.push(record);
    }
    Ok(())
}
