//! Parsing statistics and result structures for listing files

use super::field_parsers::CoercionIssue;

/// Parsed records together with parsing statistics
#[derive(Debug, Clone)]
pub struct ParseResult<T> {
    /// Successfully decoded records, in file order
    pub records: Vec<T>,

    /// Parsing statistics
    pub stats: ParseStats,
}

/// Parsing statistics for one listing file
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Number of data rows encountered (header excluded)
    pub total_rows: usize,

    /// Number of records successfully decoded
    pub records_parsed: usize,

    /// Number of rows that could not be read
    pub rows_failed: usize,

    /// Rows with fewer cells than the header's last resolved column
    pub short_rows: usize,

    /// Schema columns missing from the header
    pub absent_columns: Vec<String>,

    /// Cells stored as zero values after failing to decode
    pub coercion_issues: Vec<CoercionIssue>,

    /// Row read errors, for reporting
    pub errors: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            (self.records_parsed as f64 / self.total_rows as f64) * 100.0
        }
    }

    /// True when every row was read
    pub fn is_clean(&self) -> bool {
        self.rows_failed == 0
    }

    /// Number of cells that fell back to zero values
    pub fn coercion_failures(&self) -> usize {
        self.coercion_issues.len()
    }
}
