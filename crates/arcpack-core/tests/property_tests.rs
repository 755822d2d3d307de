//! Property-based tests for the inspect/build codec.
//!
//! These tests use proptest to generate arbitrary inputs and verify
//! round-trip, totals and corruption properties across many cases.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use arcpack_core::ArchiveError;
use arcpack_core::CodecConfig;
use arcpack_core::FileRecord;
use arcpack_core::build_archive;
use arcpack_core::inspect_archive;
use arcpack_core::normalize_entry_path;
use arcpack_core::test_utils::ZipTestBuilder;
use proptest::prelude::*;
use std::collections::BTreeMap;

const EXTENSIONS: &[&str] = &["pdf", "png", "jpg", "xml", "docx", "txt", "csv"];

/// Unique names with known extensions, paired with non-empty content.
fn record_set() -> impl Strategy<Value = Vec<(String, Vec<u8>)>> {
    prop::collection::btree_map(
        ("([a-z0-9_-]{1,8}/){0,3}[a-z0-9_-]{1,12}", 0..EXTENSIONS.len()),
        prop::collection::vec(any::<u8>(), 1..512),
        1..12,
    )
    .prop_map(|map: BTreeMap<(String, usize), Vec<u8>>| {
        let mut seen = std::collections::HashSet::new();
        map.into_iter()
            .map(|((stem, ext), content)| (format!("{stem}.{}", EXTENSIONS[ext]), content))
            .filter(|(name, _)| seen.insert(name.clone()))
            .collect()
    })
}

proptest! {
    /// Build then inspect yields one descriptor per record, same order,
    /// same path and size.
    #[test]
    fn prop_round_trip(files in record_set()) {
        let config = CodecConfig::default();
        let mut records: Vec<FileRecord> = files
            .iter()
            .map(|(name, content)| FileRecord::new(name.clone(), content.clone()))
            .collect();

        let bytes = build_archive(&mut records, &config).expect("build failed");
        let inventory = inspect_archive(&bytes, "prop.zip", &config).expect("inspect failed");

        prop_assert_eq!(inventory.entries().len(), records.len());
        for (entry, record) in inventory.entries().iter().zip(&records) {
            prop_assert_eq!(&entry.path, &normalize_entry_path(record.name()));
            prop_assert_eq!(entry.size, record.size());
        }
    }

    /// Totals always equal the sum and count of the reported entries.
    #[test]
    fn prop_totals_match_entries(
        files in prop::collection::vec(
            ("[a-z]{1,6}(/[a-z]{1,6}){0,2}", prop::collection::vec(any::<u8>(), 0..256)),
            1..10
        ),
        dirs in prop::collection::vec("[a-z]{1,6}/", 0..4)
    ) {
        let mut builder = ZipTestBuilder::new();
        let mut used = std::collections::HashSet::new();
        for dir in &dirs {
            if used.insert(dir.clone()) {
                builder = builder.add_directory(dir);
            }
        }
        for (i, (name, content)) in files.iter().enumerate() {
            let unique = format!("{name}-{i}");
            if used.insert(unique.clone()) {
                builder = builder.add_file(&unique, content);
            }
        }
        let data = builder.build();

        let inventory = inspect_archive(&data, "totals.zip", &CodecConfig::default())
            .expect("inspect failed");

        let sum: u64 = inventory.entries().iter().map(|e| e.size).sum();
        prop_assert_eq!(inventory.total_size(), sum);
        prop_assert_eq!(inventory.total_files(), inventory.entries().len());
        prop_assert_eq!(inventory.total_files(), files.len());
        prop_assert_eq!(inventory.archive_size(), data.len() as u64);
    }

    /// Bytes without an end-of-central-directory signature never parse.
    #[test]
    fn prop_random_bytes_rejected(data in prop::collection::vec(any::<u8>(), 1..2048)) {
        prop_assume!(!data.windows(4).any(|w| w == b"PK\x05\x06"));

        let result = inspect_archive(&data, "random.bin", &CodecConfig::default());

        prop_assert!(matches!(result, Err(ArchiveError::CorruptContainer(_))));
    }

    /// Normalization is idempotent and never produces traversal segments.
    #[test]
    fn prop_normalization_idempotent(raw in "[a-z./\\\\]{0,40}") {
        let once = normalize_entry_path(&raw);
        prop_assert_eq!(normalize_entry_path(&once), once.clone());
        prop_assert!(!once.split('/').any(|s| s == ".." || s == "." || s.is_empty()) || once.is_empty());
        prop_assert!(!once.starts_with('/'));
    }

    /// Empty input is rejected whatever the file name.
    #[test]
    fn prop_empty_input_rejected(name in ".*") {
        let result = inspect_archive(&[], &name, &CodecConfig::default());
        prop_assert!(matches!(result, Err(ArchiveError::EmptyInput)));
    }
}
