use super::priority::get_group_priority;
use std::cmp::Ordering;

/// Labels of `group` from the top-level domain inward.
///
/// `gateway.networking.k8s.io` yields `io`, `k8s`, `networking`, `gateway`.
/// The core group has no labels, so it is a prefix of every other path.
fn labels(group: &str) -> impl Iterator<Item = &str> {
    (!group.is_empty()).then(|| group.rsplit('.')).into_iter().flatten()
}

/// Orders two groups by priority bucket first, then by domain hierarchy.
///
/// Within a bucket label paths are compared from the top-level domain
/// inward. The first differing label decides alphabetically; when one path
/// is a prefix of the other the ancestor comes first. Subdomains therefore
/// sort right after their parent: `k8s.io`, `apps.k8s.io`, `batch.k8s.io`,
/// `x-k8s.io`.
pub fn compare_groups_hierarchically<P: AsRef<str>>(group1: &str, group2: &str, patterns: &[P]) -> Ordering {
    if !patterns.is_empty() {
        let priority = get_group_priority(group1, patterns).cmp(&get_group_priority(group2, patterns));
        if priority != Ordering::Equal {
            return priority;
        }
    }
    if group1 == group2 {
        return Ordering::Equal;
    }
    labels(group1).cmp(labels(group2))
}
