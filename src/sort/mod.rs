mod group_version;
mod hierarchy;
mod priority;

pub use group_version::{GroupVersion, ParseGroupVersionError};
pub use hierarchy::compare_groups_hierarchically;
pub use priority::{get_group_priority, pattern_matches, WILDCARD};

use std::cmp::Ordering;

/// Builds the comparator used to order group versions.
///
/// Groups are ordered by [`compare_groups_hierarchically`]; versions of the
/// same group fall back to plain string order, so `v1` precedes `v1beta1`
/// and `v10` precedes `v2`. Use it with a stable sort such as
/// [`slice::sort_by`].
pub fn compare_group_versions_fn<'p, P: AsRef<str>>(
    patterns: &'p [P],
) -> impl Fn(&GroupVersion, &GroupVersion) -> Ordering + 'p {
    move |a, b| {
        compare_groups_hierarchically(&a.group, &b.group, patterns).then_with(|| a.version.cmp(&b.version))
    }
}

pub fn sort_group_versions<P: AsRef<str>>(group_versions: &mut [GroupVersion], patterns: &[P]) {
    tracing::debug!(
        count = group_versions.len(),
        patterns = patterns.len(),
        "sorting group versions"
    );
    group_versions.sort_by(compare_group_versions_fn(patterns));
}
