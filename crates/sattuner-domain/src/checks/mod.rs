use crate::model::ConfigTree;
use sattuner_types::AuditFinding;
use std::collections::BTreeMap;

mod block_private;
mod reject_leases;
mod tunables;

/// Run every audit check in fixed order, inserting one finding per rule and
/// returning the total score penalty.
pub fn run_all(tree: &ConfigTree, out: &mut BTreeMap<String, AuditFinding>) -> u32 {
    let mut penalty = 0;
    penalty += block_private::run(tree, out);
    penalty += reject_leases::run(tree, out);
    penalty += tunables::run(tree, out);
    penalty
}
