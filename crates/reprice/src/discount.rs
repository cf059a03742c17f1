use crate::model::ProductRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiscountStats {
    /// Overlay records that hit at least one wholesale record.
    pub applied: usize,
    /// Overlay records with no wholesale counterpart.
    pub unmatched: usize,
}

/// Overwrite wholesale prices with discounted prices from `overlay`.
///
/// Every wholesale record sharing an overlay key takes the overlay price.
/// When the overlay repeats a key, the later overlay record wins.
/// Overlay keys absent from the wholesale catalog are skipped.
pub fn merge_discounts(wholesale: &mut [ProductRecord], overlay: &[ProductRecord]) -> DiscountStats {
    let mut stats = DiscountStats::default();

    for discount in overlay {
        let mut hit = false;
        for product in wholesale.iter_mut().filter(|p| p.key == discount.key) {
            product.price_cents = discount.price_cents;
            hit = true;
        }

        if hit {
            stats.applied += 1;
        } else {
            log::debug!("discount for '{}' has no wholesale match", discount.key);
            stats.unmatched += 1;
        }
    }

    stats
}
