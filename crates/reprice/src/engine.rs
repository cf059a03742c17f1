use crate::adjust::adjust_price;
use crate::categorize::{classify, partition};
use crate::config::RepriceConfig;
use crate::discount::merge_discounts;
use crate::error::RepriceError;
use crate::matcher::{match_record, MatchOutcome, PROGRESS_EVERY};
use crate::model::{CatalogSet, PackKind, RepriceMeta, RepriceResult};
use crate::summary::compute_summary;

/// Run the repricing pipeline over `catalogs`.
///
/// Stages, in order: discount overlay onto the wholesale catalog, keyword
/// classification and partitioning of the inventory, then wholesale matching
/// and price adjustment record by record under each record's pack-kind
/// policy. On return every inventory record sits in exactly one of
/// `updated`, `missing` or `excluded`, each in inventory order. Partitions
/// left over from a previous run are cleared first.
pub fn run(config: &RepriceConfig, catalogs: &mut CatalogSet) -> Result<RepriceResult, RepriceError> {
    config.validate()?;

    catalogs.updated.clear();
    catalogs.missing.clear();
    catalogs.excluded.clear();

    let discounts = merge_discounts(&mut catalogs.wholesale, &catalogs.discounts);
    log::info!(
        "applied {} discounts ({} without a wholesale match)",
        discounts.applied,
        discounts.unmatched
    );

    for kind in [PackKind::SinglePack, PackKind::MultiPack] {
        if !config.policy(kind).enabled {
            log::warn!("{kind} updates disabled, products moved to excluded");
        }
    }

    classify(&mut catalogs.inventory, &config.keywords);
    let split = partition(&catalogs.inventory, config);
    let counts = split.counts();
    log::info!(
        "categorized {} products: {} single-pack, {} multi-pack, {} excluded",
        catalogs.inventory.len(),
        counts.single_pack,
        counts.multi_pack,
        split.excluded.len()
    );
    catalogs.excluded.extend(split.excluded);

    let mut single_pack = split.working.single_pack.into_iter();
    let mut multi_pack = split.working.multi_pack.into_iter();
    let total = split.order.len();

    for (i, kind) in split.order.into_iter().enumerate() {
        let next = match kind {
            PackKind::MultiPack => multi_pack.next(),
            PackKind::SinglePack | PackKind::Unclassified => single_pack.next(),
        };
        let Some(record) = next else {
            break;
        };

        let policy = config.policy(kind);
        match match_record(record, &catalogs.wholesale, policy) {
            MatchOutcome::Matched(mut record) => {
                adjust_price(&mut record, policy, config.round_up_cents)?;
                catalogs.updated.push(record);
            }
            MatchOutcome::Missing(record) => catalogs.missing.push(record),
        }

        if (i + 1) % PROGRESS_EVERY == 0 {
            log::debug!("{} of {} products repriced", i + 1, total);
        }
    }
    log::info!(
        "{} updated, {} missing from wholesale",
        catalogs.updated.len(),
        catalogs.missing.len()
    );

    let summary = compute_summary(catalogs, counts, discounts);
    debug_assert_eq!(catalogs.partitioned_len(), catalogs.inventory.len());

    Ok(RepriceResult {
        meta: RepriceMeta {
            config_name: config.name.clone(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
        },
        summary,
    })
}
