//! Core data models for symbol directory listings
//!
//! [`ListingRecord`] holds one row of `nasdaqlisted.txt` or `otherlisted.txt`.
//! The two files share most columns but not all of them; a column missing from
//! a file simply leaves the corresponding field empty.

use serde::{Deserialize, Serialize};

use crate::app::services::listing_parser::schema::{FieldSpec, FieldValue, Record};

/// One security from a symbol directory listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingRecord {
    /// One to five character NASDAQ-listed identifier
    pub symbol: String,

    /// Identifier used in NASDAQ connectivity protocols and market data feeds
    pub nasdaq_symbol: String,

    /// Listing exchange (`A` NYSE MKT, `N` NYSE, `P` NYSE ARCA, `Z` BATS, `V` IEXG)
    pub exchange: String,

    /// Identifier used on the SIAC CQS and CTS feeds
    pub cqs_symbol: String,

    /// Identifier used in the ACT and CTCI connectivity protocols
    pub act_symbol: String,

    /// Security name including type or class information
    pub security_name: String,

    /// NASDAQ market tier (`Q` Global Select, `G` Global, `S` Capital)
    pub market_category: String,

    /// `Y` when the security is a test issue
    pub test_issue: String,

    /// Deficient / delinquent / bankrupt indicator (`N` is normal)
    pub financial_status: String,

    /// Shares per round lot
    pub round_lot_size: String,

    /// `Y` when the security is an exchange traded fund
    pub etf: String,

    /// `Y` when the security is a NextShares exchange traded managed fund
    pub next_shares: String,

    /// Identifier-safe form of the canonical symbol, set during normalization
    pub normalized_symbol: String,
}

/// Schema-addressable fields of [`ListingRecord`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListingField {
    Symbol,
    NasdaqSymbol,
    Exchange,
    CqsSymbol,
    ActSymbol,
    SecurityName,
    MarketCategory,
    TestIssue,
    FinancialStatus,
    RoundLotSize,
    Etf,
    NextShares,
}

/// Column mapping shared by both listing files
pub static LISTING_SCHEMA: &[FieldSpec<ListingField>] = &[
    FieldSpec::text(ListingField::Symbol, "Symbol"),
    FieldSpec::text(ListingField::NasdaqSymbol, "NASDAQ Symbol"),
    FieldSpec::text(ListingField::Exchange, "Exchange"),
    FieldSpec::text(ListingField::CqsSymbol, "CQS Symbol"),
    FieldSpec::text(ListingField::ActSymbol, "ACT Symbol"),
    FieldSpec::text(ListingField::SecurityName, "Security Name"),
    FieldSpec::text(ListingField::MarketCategory, "Market Category"),
    FieldSpec::text(ListingField::TestIssue, "Test Issue"),
    FieldSpec::text(ListingField::FinancialStatus, "Financial Status"),
    FieldSpec::text(ListingField::RoundLotSize, "Round Lot Size"),
    FieldSpec::text(ListingField::Etf, "ETF"),
    FieldSpec::text(ListingField::NextShares, "NextShares"),
];

impl Record for ListingRecord {
    type Field = ListingField;

    fn schema() -> &'static [FieldSpec<ListingField>] {
        LISTING_SCHEMA
    }

    fn set_field(&mut self, field: ListingField, value: FieldValue) {
        let target = match field {
            ListingField::Symbol => &mut self.symbol,
            ListingField::NasdaqSymbol => &mut self.nasdaq_symbol,
            ListingField::Exchange => &mut self.exchange,
            ListingField::CqsSymbol => &mut self.cqs_symbol,
            ListingField::ActSymbol => &mut self.act_symbol,
            ListingField::SecurityName => &mut self.security_name,
            ListingField::MarketCategory => &mut self.market_category,
            ListingField::TestIssue => &mut self.test_issue,
            ListingField::FinancialStatus => &mut self.financial_status,
            ListingField::RoundLotSize => &mut self.round_lot_size,
            ListingField::Etf => &mut self.etf,
            ListingField::NextShares => &mut self.next_shares,
        };
        *target = value.into_text();
    }
}

impl ListingRecord {
    /// Whether the listing is flagged as a test issue
    pub fn is_test_issue(&self) -> bool {
        self.test_issue == "Y"
    }

    /// Whether the listing is an exchange traded fund
    pub fn is_etf(&self) -> bool {
        self.etf == "Y"
    }
}
