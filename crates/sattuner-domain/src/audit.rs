use crate::checks;
use crate::model::ConfigTree;
use sattuner_types::AuditData;
use std::collections::BTreeMap;

/// Evaluate the rule catalog against a configuration tree.
///
/// Deterministic and read-only. The score starts at 100, loses each
/// failing or warning rule's weight, and is clamped to [0, 100] so adding
/// rules can never push it negative.
pub fn audit(tree: &ConfigTree) -> AuditData {
    let mut report = BTreeMap::new();
    let penalty = checks::run_all(tree, &mut report);
    let score = 100u32.saturating_sub(penalty).min(100) as u8;
    AuditData { report, score }
}
