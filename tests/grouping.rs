// tests/grouping.rs
mod common;

use common::CallCounter;
use ordered_collect::{CollectError, collect_partitioned, prelude::*};

#[derive(Debug, Clone, PartialEq)]
struct Apk {
    abi: &'static str,
    sdk: u32,
    name: &'static str,
}

fn apks() -> Vec<Apk> {
    vec![
        Apk { abi: "x86", sdk: 21, name: "base-x86" },
        Apk { abi: "arm64", sdk: 23, name: "base-arm64" },
        Apk { abi: "x86", sdk: 23, name: "feature-x86" },
        Apk { abi: "armv7", sdk: 21, name: "base-armv7" },
        Apk { abi: "arm64", sdk: 21, name: "feature-arm64" },
    ]
}

#[test]
fn groups_documented_example() {
    let input = vec![(2, "b"), (1, "a"), (1, "c")];
    let grouped = grouping_by_sorted_key_with(|pair: &(i32, &'static str)| pair.0, |pair: (i32, &'static str)| pair.1)
        .collect_from(input)
        .unwrap();

    let json = serde_json::to_value(&grouped).unwrap();
    assert_eq!(json, serde_json::json!({ "1": ["a", "c"], "2": ["b"] }));
}

#[test]
fn groups_structs_by_string_key() {
    let grouped = grouping_by_sorted_key(|apk: &Apk| apk.abi).collect_from(apks()).unwrap();

    assert_eq!(grouped.keys().copied().collect::<Vec<_>>(), vec!["arm64", "armv7", "x86"]);
    let x86: Vec<_> = grouped.get(&"x86").unwrap().iter().map(|apk| apk.name).collect();
    assert_eq!(x86, vec!["base-x86", "feature-x86"]);
}

#[test]
fn value_function_projects_each_element() {
    let grouped = grouping_by_sorted_key_with(|apk: &Apk| apk.sdk, |apk: Apk| apk.name)
        .collect_from(apks())
        .unwrap();

    assert_eq!(grouped.get(&21).unwrap(), ["base-x86", "base-armv7", "feature-arm64"]);
    assert_eq!(grouped.get(&23).unwrap(), ["base-arm64", "feature-x86"]);
    assert_eq!(grouped.total_values(), 5);
}

#[test]
fn key_function_failure_stops_accumulation() {
    let calls = CallCounter::default();
    let counted = calls.clone();
    let collector = try_grouping_by_sorted_key(move |apk: &Apk| {
        counted.hit();
        if apk.abi == "armv7" { Err(format!("unsupported abi {}", apk.abi)) } else { Ok(apk.sdk) }
    });

    let err = collector.collect_from(apks()).unwrap_err();

    assert!(matches!(err, CollectError::KeyFunction { .. }));
    assert_eq!(calls.count(), 4, "elements after the failing one must not be keyed");
}

#[test]
fn every_driver_agrees() {
    let collector = grouping_by_sorted_key_with(|apk: &Apk| apk.abi, |apk: Apk| apk.name);
    let sequential = collect_sequential(apks(), &collector).unwrap();

    for chunk_len in 1..=6 {
        assert_eq!(collect_partitioned(apks(), &collector, chunk_len).unwrap(), sequential);
    }

    #[cfg(feature = "parallel")]
    {
        let config = ExecutionConfig { jobs: 3, min_parallel_len: 2 };
        assert_eq!(collect_parallel(apks(), &collector, &config).unwrap(), sequential);
    }
}

#[test]
fn collecting_twice_gives_identical_results() {
    let collector = grouping_by_sorted_key(|apk: &Apk| apk.sdk);
    assert_eq!(collector.collect_from(apks()).unwrap(), collector.collect_from(apks()).unwrap());
}
