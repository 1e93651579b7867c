//! Property tests for filter engine invariants.
//!
//! Uses proptest to verify:
//! 1. Identity — an empty (or whitespace-only) query returns the catalog unchanged
//! 2. Soundness — every returned record actually contains the normalized query
//! 3. Order preservation — the result is a subsequence of the catalog
//! 4. Case insensitivity — query casing never changes the result

use proptest::prelude::*;
use tickerlab_core::catalog::{Catalog, TickerRecord};
use tickerlab_core::filter::filter;

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_field() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        2 => "[A-Za-z][A-Za-z0-9 .&'-]{0,15}".prop_map(Some),
        1 => Just(None),
    ]
}

fn arb_record() -> impl Strategy<Value = TickerRecord> {
    (arb_field(), arb_field()).prop_map(|(symbol, name)| TickerRecord { symbol, name })
}

fn arb_catalog() -> impl Strategy<Value = Catalog> {
    prop::collection::vec(arb_record(), 0..32).prop_map(Catalog::new)
}

fn arb_query() -> impl Strategy<Value = String> {
    "[ ]{0,2}[A-Za-z0-9]{0,6}[ ]{0,2}"
}

// ── Properties ───────────────────────────────────────────────────────

proptest! {
    /// filter(C, "") == C, including whitespace-only queries.
    #[test]
    fn empty_query_is_identity(catalog in arb_catalog(), pad in "[ \t]{0,4}") {
        let result = filter(&catalog, &pad);
        prop_assert_eq!(result.len(), catalog.len());
        for (got, want) in result.iter().zip(catalog.records()) {
            prop_assert_eq!(*got, want);
        }
    }

    /// Every returned record contains the trimmed, lowercased query in
    /// its lowercased symbol or name.
    #[test]
    fn every_match_contains_query(catalog in arb_catalog(), query in arb_query()) {
        let needle = query.trim().to_lowercase();
        prop_assume!(!needle.is_empty());

        for record in filter(&catalog, &query) {
            let symbol = record.symbol.as_deref().unwrap_or("").to_lowercase();
            let name = record.name.as_deref().unwrap_or("").to_lowercase();
            prop_assert!(
                symbol.contains(&needle) || name.contains(&needle),
                "record {:?} does not contain {:?}",
                record,
                needle
            );
        }
    }

    /// The result is a subsequence of the catalog: matching records keep
    /// their relative order.
    #[test]
    fn result_is_subsequence_of_catalog(catalog in arb_catalog(), query in arb_query()) {
        let result = filter(&catalog, &query);
        let mut records = catalog.records().iter();
        for matched in result {
            // Advance through the catalog until this match is found; if the
            // iterator runs dry, order (or membership) was broken.
            prop_assert!(
                records.any(|r| std::ptr::eq(r, matched)),
                "result not in catalog order"
            );
        }
    }

    /// Uppercasing the query never changes the result.
    #[test]
    fn query_case_is_irrelevant(catalog in arb_catalog(), query in arb_query()) {
        let lower = filter(&catalog, &query.to_lowercase());
        let upper = filter(&catalog, &query.to_uppercase());
        prop_assert_eq!(lower, upper);
    }

    /// Records with neither field never match a non-empty query.
    #[test]
    fn fieldless_records_never_match(query in "[A-Za-z0-9]{1,6}") {
        let catalog = Catalog::new(vec![TickerRecord::default(); 4]);
        prop_assert!(filter(&catalog, &query).is_empty());
    }
}
