//! Property Tests - laws that hold for every valid version
//!
//! Versions are generated from the grammar itself, so every generated
//! string is accepted by the parser.

use std::cmp::Ordering;

use proptest::collection::vec;
use proptest::prelude::*;
use semver::{Number, Version, compare, parse, sorted_ascending};

fn numeric() -> impl Strategy<Value = String> {
    "0|[1-9][0-9]{0,30}"
}

fn alphanumeric() -> impl Strategy<Value = String> {
    "[0-9A-Za-z-]{0,4}[A-Za-z-][0-9A-Za-z-]{0,4}"
}

fn pre_release() -> impl Strategy<Value = Vec<String>> {
    vec(prop_oneof![numeric(), alphanumeric()], 0..4)
}

fn build() -> impl Strategy<Value = Vec<String>> {
    vec("[0-9A-Za-z-]{1,8}", 0..3)
}

fn version_string() -> impl Strategy<Value = String> {
    (numeric(), numeric(), numeric(), pre_release(), build()).prop_map(
        |(major, minor, patch, pre_release, build)| {
            let mut text = format!("{}.{}.{}", major, minor, patch);
            if !pre_release.is_empty() {
                text.push('-');
                text.push_str(&pre_release.join("."));
            }
            if !build.is_empty() {
                text.push('+');
                text.push_str(&build.join("."));
            }
            text
        },
    )
}

fn version() -> impl Strategy<Value = Version> {
    version_string().prop_map(|text| parse(&text).unwrap())
}

proptest! {
    #[test]
    fn prop_round_trip(text in version_string()) {
        let v = parse(&text).unwrap();
        prop_assert_eq!(v.to_string(), text);
        prop_assert!(parse(&v.to_string()).unwrap().identical(&v));
    }

    #[test]
    fn prop_compare_reflexive(v in version()) {
        prop_assert_eq!(compare(&v, &v), Ordering::Equal);
    }

    #[test]
    fn prop_compare_antisymmetric(a in version(), b in version()) {
        prop_assert_eq!(compare(&a, &b), compare(&b, &a).reverse());
    }

    #[test]
    fn prop_build_is_irrelevant(a in version(), b in version(), other in build()) {
        let rebuilt = a.clone().with_build(other);
        prop_assert_eq!(compare(&rebuilt, &b), compare(&a, &b));
        prop_assert_eq!(compare(&b, &rebuilt), compare(&b, &a));
    }

    #[test]
    fn prop_release_outranks_its_pre_releases(v in version()) {
        let mut release = v.clone();
        release.strip(semver::Strip::PreRelease);
        if v.is_release() {
            prop_assert_eq!(compare(&release, &v), Ordering::Equal);
        } else {
            prop_assert_eq!(compare(&release, &v), Ordering::Greater);
        }
    }

    #[test]
    fn prop_sorted_is_monotonic(versions in vec(version(), 0..20)) {
        let sorted = sorted_ascending(versions);
        for pair in sorted.windows(2) {
            prop_assert_ne!(compare(&pair[0], &pair[1]), Ordering::Greater);
        }
    }

    #[test]
    fn prop_leading_zero_core_rejected(digits in "0[0-9]{1,10}", rest in version_string()) {
        let text = format!("{}{}", digits, &rest[rest.find('.').unwrap()..]);
        prop_assert!(parse(&text).is_err());
    }

    #[test]
    fn prop_number_matches_u64(a in any::<u64>(), b in any::<u64>()) {
        prop_assert_eq!(Number::from(a).cmp(&Number::from(b)), a.cmp(&b));
    }

    #[test]
    fn prop_increment_matches_u64(n in 0..u64::MAX) {
        let mut number = Number::from(n);
        number.increment();
        prop_assert_eq!(number, Number::from(n + 1));
    }
}
