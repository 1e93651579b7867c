//! Static ticker catalog — the ordered, read-only list the dashboard searches.
//!
//! The catalog is loaded once at process start, either from the bundled
//! US list or from a user-supplied JSON array, and is immutable afterwards.
//! Entries tolerate missing fields: a record with no symbol or no name is
//! still displayable (placeholder text) and simply contributes less to
//! search matching.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// One entry in the catalog. Both fields are optional because real
/// catalog files contain malformed rows and loading must not fail on them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerRecord {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl TickerRecord {
    pub fn new(symbol: &str, name: &str) -> Self {
        Self {
            symbol: Some(symbol.to_string()),
            name: Some(name.to_string()),
        }
    }

    /// Symbol for display. Absent or blank fields fall back to placeholder text.
    pub fn display_symbol(&self) -> &str {
        match self.symbol.as_deref() {
            Some(s) if !s.trim().is_empty() => s,
            _ => "Unknown Symbol",
        }
    }

    /// Company name for display, with the same fallback rule.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(n) if !n.trim().is_empty() => n,
            _ => "Unknown Name",
        }
    }
}

/// Errors loading a catalog from disk.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("read catalog file: {0}")]
    Io(String),

    #[error("parse catalog JSON: {0}")]
    Parse(String),
}

/// The complete catalog: an ordered sequence of records, never mutated
/// after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<TickerRecord>,
}

impl Catalog {
    pub fn new(records: Vec<TickerRecord>) -> Self {
        Self { records }
    }

    /// Parse a catalog from a JSON array of `{symbol, name}` objects.
    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        let records: Vec<TickerRecord> =
            serde_json::from_str(content).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Ok(Self { records })
    }

    /// Load a catalog from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| CatalogError::Io(e.to_string()))?;
        Self::from_json(&content)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[TickerRecord] {
        &self.records
    }

    pub fn get(&self, idx: usize) -> Option<&TickerRecord> {
        self.records.get(idx)
    }

    /// Bundled default catalog of large-cap US equities and ETFs.
    pub fn default_us() -> Self {
        const ENTRIES: &[(&str, &str)] = &[
            ("AAPL", "Apple Inc."),
            ("MSFT", "Microsoft Corporation"),
            ("GOOGL", "Alphabet Inc."),
            ("AMZN", "Amazon.com, Inc."),
            ("NVDA", "NVIDIA Corporation"),
            ("META", "Meta Platforms, Inc."),
            ("TSLA", "Tesla, Inc."),
            ("AVGO", "Broadcom Inc."),
            ("ORCL", "Oracle Corporation"),
            ("CRM", "Salesforce, Inc."),
            ("ADBE", "Adobe Inc."),
            ("AMD", "Advanced Micro Devices, Inc."),
            ("INTC", "Intel Corporation"),
            ("IBM", "International Business Machines"),
            ("JNJ", "Johnson & Johnson"),
            ("UNH", "UnitedHealth Group Incorporated"),
            ("PFE", "Pfizer Inc."),
            ("ABBV", "AbbVie Inc."),
            ("MRK", "Merck & Co., Inc."),
            ("LLY", "Eli Lilly and Company"),
            ("TMO", "Thermo Fisher Scientific Inc."),
            ("ABT", "Abbott Laboratories"),
            ("JPM", "JPMorgan Chase & Co."),
            ("BAC", "Bank of America Corporation"),
            ("WFC", "Wells Fargo & Company"),
            ("GS", "The Goldman Sachs Group, Inc."),
            ("MS", "Morgan Stanley"),
            ("BLK", "BlackRock, Inc."),
            ("SCHW", "The Charles Schwab Corporation"),
            ("AXP", "American Express Company"),
            ("V", "Visa Inc."),
            ("MA", "Mastercard Incorporated"),
            ("XOM", "Exxon Mobil Corporation"),
            ("CVX", "Chevron Corporation"),
            ("COP", "ConocoPhillips"),
            ("SLB", "Schlumberger Limited"),
            ("EOG", "EOG Resources, Inc."),
            ("WMT", "Walmart Inc."),
            ("PG", "The Procter & Gamble Company"),
            ("KO", "The Coca-Cola Company"),
            ("PEP", "PepsiCo, Inc."),
            ("COST", "Costco Wholesale Corporation"),
            ("HD", "The Home Depot, Inc."),
            ("MCD", "McDonald's Corporation"),
            ("NKE", "NIKE, Inc."),
            ("SBUX", "Starbucks Corporation"),
            ("TGT", "Target Corporation"),
            ("DIS", "The Walt Disney Company"),
            ("NFLX", "Netflix, Inc."),
            ("BA", "The Boeing Company"),
            ("CAT", "Caterpillar Inc."),
            ("GE", "General Electric Company"),
            ("SPY", "SPDR S&P 500 ETF Trust"),
            ("QQQ", "Invesco QQQ Trust"),
            ("IWM", "iShares Russell 2000 ETF"),
            ("DIA", "SPDR Dow Jones Industrial Average ETF"),
        ];

        Self {
            records: ENTRIES
                .iter()
                .map(|(symbol, name)| TickerRecord::new(symbol, name))
                .collect(),
        }
    }
}
