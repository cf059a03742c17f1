use crate::config::{BaseSource, PricingPolicy};
use crate::model::{MatchOutput, ProductRecord};

pub(crate) const PROGRESS_EVERY: usize = 1000;

/// Where one record lands after the wholesale lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    Matched(ProductRecord),
    Missing(ProductRecord),
}

/// Look one record up in the wholesale catalog.
///
/// With [`BaseSource::WholesalePrice`] the record takes the price of the
/// first wholesale record with an equal key (catalog order breaks ties), or
/// is `Missing` when there is none. With [`BaseSource::InventoryPrice`] no
/// lookup happens and the record is `Matched` unchanged.
pub fn match_record(
    mut record: ProductRecord,
    wholesale: &[ProductRecord],
    policy: &PricingPolicy,
) -> MatchOutcome {
    if policy.base_source == BaseSource::InventoryPrice {
        return MatchOutcome::Matched(record);
    }

    match wholesale.iter().find(|w| w.key == record.key) {
        Some(hit) => {
            record.price_cents = hit.price_cents;
            MatchOutcome::Matched(record)
        }
        None => {
            log::debug!("no wholesale match for '{}' ({})", record.key, record.sku);
            MatchOutcome::Missing(record)
        }
    }
}

/// Join a whole working set against the wholesale catalog by exact key,
/// keeping working-set order in both outputs. See [`match_record`].
pub fn match_wholesale(
    working: Vec<ProductRecord>,
    wholesale: &[ProductRecord],
    policy: &PricingPolicy,
) -> MatchOutput {
    let total = working.len();
    let mut out = MatchOutput::default();

    for (i, record) in working.into_iter().enumerate() {
        match match_record(record, wholesale, policy) {
            MatchOutcome::Matched(r) => out.matched.push(r),
            MatchOutcome::Missing(r) => out.missing.push(r),
        }

        if (i + 1) % PROGRESS_EVERY == 0 {
            log::debug!("{} of {} products compared", i + 1, total);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inv(key: &str, cents: i64) -> ProductRecord {
        ProductRecord::inventory(format!("sku-{key}"), format!("Part {key}"), key, cents, 1.0)
    }

    fn policy(base_source: BaseSource) -> PricingPolicy {
        PricingPolicy {
            enabled: true,
            base_source,
            multiplier: 1.45,
            weight_surcharge: 0.0,
        }
    }

    #[test]
    fn wholesale_price_replaces_inventory_price() {
        let working = vec![inv("A100", 999), inv("Z999", 500)];
        let wholesale = vec![
            ProductRecord::wholesale("B200", 300),
            ProductRecord::wholesale("A100", 1250),
        ];
        let out = match_wholesale(working, &wholesale, &policy(BaseSource::WholesalePrice));

        assert_eq!(out.matched.len(), 1);
        assert_eq!(out.matched[0].key, "A100");
        assert_eq!(out.matched[0].price_cents, 1250);
        assert_eq!(out.missing.len(), 1);
        assert_eq!(out.missing[0].key, "Z999");
        assert_eq!(out.missing[0].price_cents, 500);
    }

    #[test]
    fn first_duplicate_key_wins() {
        let wholesale = vec![
            ProductRecord::wholesale("A100", 1250),
            ProductRecord::wholesale("A100", 9999),
        ];
        let out = match_wholesale(vec![inv("A100", 1)], &wholesale, &policy(BaseSource::WholesalePrice));
        assert_eq!(out.matched[0].price_cents, 1250);
    }

    #[test]
    fn inventory_price_skips_lookup() {
        let working = vec![inv("A100", 999), inv("Z999", 500)];
        let wholesale = vec![ProductRecord::wholesale("A100", 1250)];
        let out = match_wholesale(working, &wholesale, &policy(BaseSource::InventoryPrice));

        assert_eq!(out.matched.len(), 2);
        assert_eq!(out.matched[0].price_cents, 999);
        assert!(out.missing.is_empty());
    }

    #[test]
    fn single_record_lookup() {
        let wholesale = vec![ProductRecord::wholesale("A100", 1250)];
        let p = policy(BaseSource::WholesalePrice);

        match match_record(inv("A100", 999), &wholesale, &p) {
            MatchOutcome::Matched(r) => assert_eq!(r.price_cents, 1250),
            other => panic!("expected a match, got {other:?}"),
        }
        assert_eq!(
            match_record(inv("Z999", 500), &wholesale, &p),
            MatchOutcome::Missing(inv("Z999", 500))
        );
    }

    #[test]
    fn order_preserved_in_both_outputs() {
        let working = vec![inv("A", 1), inv("X", 2), inv("B", 3), inv("Y", 4)];
        let wholesale = vec![ProductRecord::wholesale("B", 30), ProductRecord::wholesale("A", 10)];
        let out = match_wholesale(working, &wholesale, &policy(BaseSource::WholesalePrice));
        let matched: Vec<_> = out.matched.iter().map(|r| r.key.as_str()).collect();
        let missing: Vec<_> = out.missing.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(matched, ["A", "B"]);
        assert_eq!(missing, ["X", "Y"]);
    }
}
