//! Header resolution for delimited listing files
//!
//! This module resolves a record schema against a file's header row, binding
//! every schema field to the index of the column carrying its name. Columns
//! the schema does not know are ignored; schema fields the header lacks are
//! left unresolved.

use csv::StringRecord;

use super::schema::{DecodeKind, FieldSpec, Record};

/// A schema field bound to its position in the header
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedField<F> {
    pub field: F,
    pub column: &'static str,
    pub kind: DecodeKind,
    /// Zero-based column index, `None` when the header lacks the column
    pub index: Option<usize>,
}

/// Schema fields resolved against one header row
#[derive(Debug, Clone)]
pub struct ColumnMapping<F> {
    fields: Vec<ResolvedField<F>>,
    header_width: usize,
}

impl<F: Copy + PartialEq + 'static> ColumnMapping<F> {
    /// Resolve every schema entry against the header cells
    ///
    /// Header cells are compared after trimming whitespace, and a UTF-8 byte
    /// order mark on the first cell is ignored. When a column name appears
    /// twice the first occurrence wins.
    pub fn resolve(schema: &[FieldSpec<F>], headers: &StringRecord) -> Self {
        let names: Vec<&str> = headers
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let name = if i == 0 {
                    name.trim_start_matches('\u{feff}')
                } else {
                    name
                };
                name.trim()
            })
            .collect();

        let fields = schema
            .iter()
            .map(|spec| ResolvedField {
                field: spec.field,
                column: spec.column,
                kind: spec.kind,
                index: names.iter().position(|name| *name == spec.column),
            })
            .collect();

        Self {
            fields,
            header_width: names.len(),
        }
    }

    /// Resolve the schema of a record type
    pub fn for_record<R>(headers: &StringRecord) -> Self
    where
        R: Record<Field = F>,
    {
        Self::resolve(R::schema(), headers)
    }

    /// All schema fields in declaration order
    pub fn fields(&self) -> &[ResolvedField<F>] {
        &self.fields
    }

    /// Fields present in the header
    pub fn present(&self) -> impl Iterator<Item = &ResolvedField<F>> {
        self.fields.iter().filter(|f| f.index.is_some())
    }

    /// Column names declared by the schema but missing from the header
    pub fn absent_columns(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .filter(|f| f.index.is_none())
            .map(|f| f.column)
            .collect()
    }

    /// Column index of a field
    pub fn index_of(&self, field: F) -> Option<usize> {
        self.fields
            .iter()
            .find(|f| f.field == field)
            .and_then(|f| f.index)
    }

    /// Largest resolved column index
    pub fn max_index(&self) -> Option<usize> {
        self.fields.iter().filter_map(|f| f.index).max()
    }

    /// Number of cells in the header row
    pub fn header_width(&self) -> usize {
        self.header_width
    }

    /// Whether a row of `cells` cells ends before the last resolved column
    pub fn is_short_row(&self, cells: usize) -> bool {
        self.max_index().is_some_and(|max| cells <= max)
    }

    /// (schema fields, resolved, absent)
    pub fn stats(&self) -> (usize, usize, usize) {
        let resolved = self.present().count();
        (self.fields.len(), resolved, self.fields.len() - resolved)
    }
}
