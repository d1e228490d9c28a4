//! Stable precedence sorting
//!
//! Versions of equal precedence (differing only in build metadata, or
//! duplicates) keep their relative input order. Nothing is deduplicated.

use super::{Version, compare};

/// Sort in place from lowest to highest precedence
pub fn sort_ascending(versions: &mut [Version]) {
    tracing::trace!(len = versions.len(), "sorting versions ascending");
    versions.sort_by(compare);
}

/// Sort in place from highest to lowest precedence
pub fn sort_descending(versions: &mut [Version]) {
    tracing::trace!(len = versions.len(), "sorting versions descending");
    versions.sort_by(|a, b| compare(b, a));
}

/// Owned variant of [`sort_ascending`]
pub fn sorted_ascending(mut versions: Vec<Version>) -> Vec<Version> {
    sort_ascending(&mut versions);
    versions
}

/// Owned variant of [`sort_descending`]
pub fn sorted_descending(mut versions: Vec<Version>) -> Vec<Version> {
    sort_descending(&mut versions);
    versions
}

/// Parallel [`sort_ascending`]. Still stable.
#[cfg(feature = "parallel")]
pub fn par_sort_ascending(versions: &mut [Version]) {
    use rayon::slice::ParallelSliceMut;

    tracing::trace!(len = versions.len(), "parallel sorting versions ascending");
    versions.par_sort_by(compare);
}

/// Parallel [`sort_descending`]. Still stable.
#[cfg(feature = "parallel")]
pub fn par_sort_descending(versions: &mut [Version]) {
    use rayon::slice::ParallelSliceMut;

    tracing::trace!(len = versions.len(), "parallel sorting versions descending");
    versions.par_sort_by(|a, b| compare(b, a));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_all;

    fn texts(versions: &[Version]) -> Vec<String> {
        versions.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_pre_release_sorts_before_release() {
        let versions = sorted_ascending(parse_all(["0.0.2+meta", "0.0.2-prerelease"]).unwrap());
        assert_eq!(texts(&versions), ["0.0.2-prerelease", "0.0.2+meta"]);
    }

    #[test]
    fn test_equal_precedence_keeps_input_order() {
        let mut versions = parse_all(["1.0.0+b", "1.0.0+a", "1.0.0+c", "0.9.0"]).unwrap();
        sort_ascending(&mut versions);
        assert_eq!(texts(&versions), ["0.9.0", "1.0.0+b", "1.0.0+a", "1.0.0+c"]);

        sort_descending(&mut versions);
        assert_eq!(texts(&versions), ["1.0.0+b", "1.0.0+a", "1.0.0+c", "0.9.0"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let versions = sorted_descending(parse_all(["1.0.0", "2.0.0", "1.0.0"]).unwrap());
        assert_eq!(texts(&versions), ["2.0.0", "1.0.0", "1.0.0"]);
    }

    #[test]
    fn test_empty_and_single() {
        assert!(sorted_ascending(Vec::new()).is_empty());
        let one = sorted_descending(parse_all(["1.2.3"]).unwrap());
        assert_eq!(texts(&one), ["1.2.3"]);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let inputs = [
            "0.1.0",
            "1.0.0",
            "0.0.2-prerelease+meta",
            "0.0.1",
            "0.0.2-prerelease",
            "0.0.2+meta",
        ];
        let mut sequential = parse_all(inputs).unwrap();
        let mut parallel = sequential.clone();
        sort_ascending(&mut sequential);
        par_sort_ascending(&mut parallel);
        assert_eq!(texts(&sequential), texts(&parallel));

        sort_descending(&mut sequential);
        par_sort_descending(&mut parallel);
        assert_eq!(texts(&sequential), texts(&parallel));
    }
}
