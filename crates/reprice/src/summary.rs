use crate::categorize::PartitionCounts;
use crate::discount::DiscountStats;
use crate::model::{CatalogSet, RepriceSummary};

/// Summary statistics of a finished run.
pub fn compute_summary(
    catalogs: &CatalogSet,
    counts: PartitionCounts,
    discounts: DiscountStats,
) -> RepriceSummary {
    RepriceSummary {
        inventory_total: catalogs.inventory.len(),
        updated: catalogs.updated.len(),
        missing: catalogs.missing.len(),
        excluded: catalogs.excluded.len(),
        excluded_by_keyword: counts.by_keyword,
        excluded_by_policy: counts.by_policy,
        single_pack: counts.single_pack,
        multi_pack: counts.multi_pack,
        discounts_applied: discounts.applied,
        discounts_unmatched: discounts.unmatched,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductRecord;

    fn rec(key: &str) -> ProductRecord {
        ProductRecord::inventory("S", key, key, 100, 0.0)
    }

    #[test]
    fn summary_counts() {
        let mut catalogs = CatalogSet::new(vec![], vec![], vec![rec("a"), rec("b"), rec("c"), rec("d")]);
        catalogs.updated = vec![rec("a"), rec("b")];
        catalogs.missing = vec![rec("c")];
        catalogs.excluded = vec![rec("d")];

        let counts = PartitionCounts {
            by_keyword: 1,
            by_policy: 0,
            single_pack: 2,
            multi_pack: 1,
        };
        let summary = compute_summary(&catalogs, counts, DiscountStats { applied: 3, unmatched: 1 });
        assert_eq!(summary.inventory_total, 4);
        assert_eq!(summary.updated, 2);
        assert_eq!(summary.missing, 1);
        assert_eq!(summary.excluded, 1);
        assert_eq!(summary.excluded_by_keyword, 1);
        assert_eq!(summary.excluded_by_policy, 0);
        assert_eq!(summary.single_pack, 2);
        assert_eq!(summary.multi_pack, 1);
        assert_eq!(summary.discounts_applied, 3);
        assert_eq!(summary.discounts_unmatched, 1);
    }
}
