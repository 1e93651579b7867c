//! Filter engine — case-insensitive substring search over the catalog.
//!
//! A pure function of its inputs, re-invoked on every keystroke. There is
//! no caching layer; for a few hundred records a linear scan is cheaper
//! than maintaining one.

use crate::catalog::{Catalog, TickerRecord};

/// Return the records whose symbol or name contains `query` as a
/// case-insensitive substring, in catalog order.
///
/// The query is trimmed before matching; a query that is empty after
/// trimming returns the full catalog unchanged. Absent fields are treated
/// as empty strings, so a record missing both symbol and name never
/// matches a non-empty query.
pub fn filter<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a TickerRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return catalog.records().iter().collect();
    }

    catalog
        .records()
        .iter()
        .filter(|record| {
            let symbol = record.symbol.as_deref().unwrap_or("").to_lowercase();
            let name = record.name.as_deref().unwrap_or("").to_lowercase();
            symbol.contains(&needle) || name.contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TickerRecord;

    fn two_entry_catalog() -> Catalog {
        Catalog::new(vec![
            TickerRecord::new("AAPL", "Apple Inc."),
            TickerRecord::new("MSFT", "Microsoft Corp."),
        ])
    }

    #[test]
    fn empty_query_is_identity() {
        let catalog = two_entry_catalog();
        let result = filter(&catalog, "");
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].symbol.as_deref(), Some("AAPL"));
        assert_eq!(result[1].symbol.as_deref(), Some("MSFT"));
    }

    #[test]
    fn whitespace_only_query_is_identity() {
        let catalog = two_entry_catalog();
        assert_eq!(filter(&catalog, "  ").len(), 2);
    }

    #[test]
    fn matches_name_substring() {
        let catalog = two_entry_catalog();
        let result = filter(&catalog, "app");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].symbol.as_deref(), Some("AAPL"));
    }

    #[test]
    fn matches_symbol_substring() {
        let catalog = two_entry_catalog();
        let result = filter(&catalog, "msf");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].symbol.as_deref(), Some("MSFT"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let catalog = two_entry_catalog();
        let upper: Vec<_> = filter(&catalog, "AAPL");
        let lower: Vec<_> = filter(&catalog, "aapl");
        assert_eq!(upper, lower);
        assert_eq!(upper.len(), 1);
    }

    #[test]
    fn query_is_trimmed_before_matching() {
        let catalog = two_entry_catalog();
        assert_eq!(filter(&catalog, "  apple  ").len(), 1);
    }

    #[test]
    fn missing_name_matches_on_symbol_only() {
        let catalog = Catalog::new(vec![TickerRecord {
            symbol: Some("TSLA".into()),
            name: None,
        }]);
        assert_eq!(filter(&catalog, "tsla").len(), 1);
        assert_eq!(filter(&catalog, "tesla").len(), 0);
    }

    #[test]
    fn missing_symbol_matches_on_name_only() {
        let catalog = Catalog::new(vec![TickerRecord {
            symbol: None,
            name: Some("Tesla, Inc.".into()),
        }]);
        assert_eq!(filter(&catalog, "tesla").len(), 1);
        assert_eq!(filter(&catalog, "tsla").len(), 0);
    }

    #[test]
    fn record_missing_both_fields_never_matches() {
        let catalog = Catalog::new(vec![TickerRecord::default()]);
        assert_eq!(filter(&catalog, "a").len(), 0);
        // ...but it is still part of the identity result.
        assert_eq!(filter(&catalog, "").len(), 1);
    }

    #[test]
    fn empty_catalog_returns_empty() {
        let catalog = Catalog::new(Vec::new());
        assert!(filter(&catalog, "aapl").is_empty());
        assert!(filter(&catalog, "").is_empty());
    }

    #[test]
    fn result_preserves_catalog_order() {
        let catalog = Catalog::new(vec![
            TickerRecord::new("MA", "Mastercard Incorporated"),
            TickerRecord::new("V", "Visa Inc."),
            TickerRecord::new("MCD", "McDonald's Corporation"),
        ]);
        // "m" matches MA and MCD but not Visa; order must follow the catalog.
        let result = filter(&catalog, "m");
        let symbols: Vec<_> = result.iter().map(|r| r.display_symbol()).collect();
        assert_eq!(symbols, vec!["MA", "MCD"]);
    }
}
