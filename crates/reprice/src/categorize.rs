use crate::config::{KeywordConfig, RepriceConfig};
use crate::model::{PackKind, ProductRecord, WorkingSets};

/// Inventory split produced by [`partition`].
#[derive(Debug, Default)]
pub struct Partition {
    pub working: WorkingSets,
    pub excluded: Vec<ProductRecord>,
    /// Excluded because a name token hit the exclusion list.
    pub by_keyword: usize,
    /// Excluded because the pack kind's policy is disabled.
    pub by_policy: usize,
    /// Pack kind of each working record, in inventory order. Replaying it
    /// against the two working sets restores the inventory interleaving.
    pub order: Vec<PackKind>,
}

/// Sizes of a [`Partition`], kept after the working sets are consumed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartitionCounts {
    pub by_keyword: usize,
    pub by_policy: usize,
    pub single_pack: usize,
    pub multi_pack: usize,
}

impl Partition {
    pub fn counts(&self) -> PartitionCounts {
        PartitionCounts {
            by_keyword: self.by_keyword,
            by_policy: self.by_policy,
            single_pack: self.working.single_pack.len(),
            multi_pack: self.working.multi_pack.len(),
        }
    }
}

/// Keyword equality against an already lower-cased token. The keyword is
/// lower-cased on the fly so hand-built configs need not be normalized.
fn keyword_matches(token: &str, keyword: &str) -> bool {
    keyword.chars().flat_map(char::to_lowercase).eq(token.chars())
}

/// Classify one record from the tokens of its display name.
///
/// Tokens and keywords are compared lower-cased and otherwise verbatim, so
/// `"Pack."` matches `"pack."` but `"pack"` and `"Pack,"` do not. The first
/// exclusion keyword ends the scan.
pub fn classify_record(record: &mut ProductRecord, keywords: &KeywordConfig) {
    let mut multi_pack = false;

    for token in record.display_name.split_whitespace() {
        let token = token.to_lowercase();
        if keyword_matches(&token, &keywords.multi_pack) {
            multi_pack = true;
        } else if keywords.exclude.iter().any(|kw| keyword_matches(&token, kw)) {
            record.excluded = true;
            break;
        }
    }

    record.pack_kind = if multi_pack {
        PackKind::MultiPack
    } else {
        PackKind::SinglePack
    };
}

pub fn classify(records: &mut [ProductRecord], keywords: &KeywordConfig) {
    for record in records.iter_mut() {
        classify_record(record, keywords);
    }
}

/// Split classified records into the excluded list and per-kind working
/// sets, preserving inventory order within each destination.
pub fn partition(records: &[ProductRecord], config: &RepriceConfig) -> Partition {
    let mut out = Partition::default();

    for record in records {
        if record.excluded {
            out.by_keyword += 1;
            out.excluded.push(record.clone());
            continue;
        }
        if !config.policy(record.pack_kind).enabled {
            out.by_policy += 1;
            out.excluded.push(record.clone());
            continue;
        }
        match record.pack_kind {
            PackKind::MultiPack => {
                out.working.multi_pack.push(record.clone());
                out.order.push(PackKind::MultiPack);
            }
            PackKind::SinglePack | PackKind::Unclassified => {
                out.working.single_pack.push(record.clone());
                out.order.push(PackKind::SinglePack);
            }
        }
    }

    out
}
