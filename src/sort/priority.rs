pub const WILDCARD: &str = "*";

/// Whether `pattern` selects `group`.
///
/// `"*"` matches anything and `""` matches only the core group. Any other
/// pattern matches itself and its subdomains, never its ancestors:
/// `k8s.io` matches `apps.k8s.io`, but `apps.k8s.io` does not match `k8s.io`.
pub fn pattern_matches(pattern: &str, group: &str) -> bool {
    if pattern == WILDCARD {
        return true;
    }
    if pattern.is_empty() {
        return group.is_empty();
    }
    group == pattern
        || group
            .strip_suffix(pattern)
            .map_or(false, |rest| rest.ends_with('.'))
}

/// Index of the first pattern matching `group`, or `patterns.len()` when
/// none does.
pub fn get_group_priority<P: AsRef<str>>(group: &str, patterns: &[P]) -> usize {
    patterns
        .iter()
        .position(|pattern| pattern_matches(pattern.as_ref(), group))
        .unwrap_or(patterns.len())
}
