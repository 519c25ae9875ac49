//! Data structures describing the content of a single mock document.
//!
//! The types in this module are plain values that know nothing about `genpdf`. The catalog
//! produces them and the renderer consumes them, which keeps layout testable against
//! synthetic documents.

use log::debug;
use rust_decimal::Decimal;

use crate::money::{format_money, parse_amount, ParsedAmount};

/// Width in millimetres applied to table columns without an explicit width.
pub const DEFAULT_COLUMN_WIDTH_MM: f64 = 50.0;

/// Index of the column summed into the total row.
const AMOUNT_COLUMN: usize = 1;

/// Broad grouping of the catalog documents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DocumentCategory {
    /// Licenses, formation and agreements.
    Business,
    /// Balance sheet, P&L and cash flow statements.
    Financial,
    /// Tax returns and the debt schedule.
    TaxAndDebt,
    /// Personal financial statement and identity records.
    Personal,
    /// SBA loan forms and the application.
    Loan,
    /// Credit elsewhere, collateral, purchase and equity records.
    CreditAndCollateral,
}

impl DocumentCategory {
    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Business => "Business",
            Self::Financial => "Financial",
            Self::TaxAndDebt => "Tax & Debt",
            Self::Personal => "Personal",
            Self::Loan => "Loan",
            Self::CreditAndCollateral => "Credit & Collateral",
        }
    }
}

/// A bordered table with an optional computed total row.
///
/// The first row is the header. It is rendered like the data rows and also takes part in the
/// total, where its text amount parses as nothing and contributes zero.
#[derive(Clone, Debug, PartialEq)]
pub struct TableSpec {
    rows: Vec<Vec<String>>,
    column_widths: Vec<f64>,
    show_total: bool,
}

impl TableSpec {
    /// Creates a table from its rows without column widths or a total.
    pub fn new<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
            column_widths: Vec::new(),
            show_total: false,
        }
    }

    /// Sets the column widths in millimetres and returns the updated table.
    pub fn with_column_widths(mut self, widths: impl Into<Vec<f64>>) -> Self {
        self.column_widths = widths.into();
        self
    }

    /// Enables or disables the total row and returns the updated table.
    pub fn with_total(mut self, show_total: bool) -> Self {
        self.show_total = show_total;
        self
    }

    /// Returns the rows in render order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Returns the explicitly configured column widths.
    pub fn column_widths(&self) -> &[f64] {
        &self.column_widths
    }

    /// Returns whether a total row is appended.
    pub fn show_total(&self) -> bool {
        self.show_total
    }

    /// Number of columns, taken from the widest row.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Width of column `index`, falling back to [`DEFAULT_COLUMN_WIDTH_MM`].
    pub fn column_width(&self, index: usize) -> f64 {
        self.column_widths
            .get(index)
            .copied()
            .unwrap_or(DEFAULT_COLUMN_WIDTH_MM)
    }

    /// Total width of the table in millimetres. A table without cells is one default column wide.
    pub fn width(&self) -> f64 {
        (0..self.column_count().max(1))
            .map(|index| self.column_width(index))
            .sum()
    }

    /// Sums the amount column, truncated toward zero to whole dollars.
    ///
    /// Cells that do not parse, rows without an amount column, and amounts that would overflow
    /// the running sum all count as zero.
    pub fn total(&self) -> Decimal {
        let mut total = Decimal::ZERO;
        for row in &self.rows {
            let parsed = row
                .get(AMOUNT_COLUMN)
                .map_or(ParsedAmount::Unparsable, |cell| parse_amount(cell));
            match parsed.value().and_then(|value| total.checked_add(value)) {
                Some(sum) => total = sum,
                None => debug!("treating amount cell of row {:?} as zero", row),
            }
        }
        total.trunc()
    }

    /// Text of the total row, or `None` when the table has no total.
    pub fn total_label(&self) -> Option<String> {
        self.show_total
            .then(|| format!("Total: {}", format_money(self.total())))
    }
}

/// Description of one output document.
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentSpec {
    filename: String,
    title: String,
    category: Option<DocumentCategory>,
    body_lines: Vec<String>,
    tables: Option<Vec<TableSpec>>,
    signature_labels: Option<Vec<String>>,
}

impl DocumentSpec {
    /// Creates an empty document with the given output file name and title.
    pub fn new(filename: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            title: title.into(),
            category: None,
            body_lines: Vec::new(),
            tables: None,
            signature_labels: None,
        }
    }

    /// Returns the file name written inside the output directory.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Returns the title repeated at the top of every page.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the catalog category, if assigned.
    pub fn category(&self) -> Option<DocumentCategory> {
        self.category
    }

    /// Returns the body paragraphs.
    pub fn body_lines(&self) -> &[String] {
        &self.body_lines
    }

    /// Returns the tables, if any.
    pub fn tables(&self) -> Option<&[TableSpec]> {
        self.tables.as_deref()
    }

    /// Returns the signature labels, if any.
    pub fn signature_labels(&self) -> Option<&[String]> {
        self.signature_labels.as_deref()
    }

    /// Assigns a category and returns the updated document.
    pub fn with_category(mut self, category: DocumentCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Appends a body line and returns the updated document.
    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.body_lines.push(line.into());
        self
    }

    /// Appends a table and returns the updated document.
    pub fn with_table(mut self, table: TableSpec) -> Self {
        self.tables.get_or_insert_with(Vec::new).push(table);
        self
    }

    /// Appends a signature label and returns the updated document.
    pub fn with_signature(mut self, label: impl Into<String>) -> Self {
        self.signature_labels
            .get_or_insert_with(Vec::new)
            .push(label.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amounts(rows: &[[&str; 2]]) -> TableSpec {
        TableSpec::new(rows.iter().map(|row| row.to_vec()))
            .with_column_widths(vec![100.0, 60.0])
            .with_total(true)
    }

    #[test]
    fn total_row_sums_second_column() {
        let table = amounts(&[["A", "$10.00"], ["B", "$20.00"]]);
        assert_eq!(table.total_label().as_deref(), Some("Total: $30.00"));
    }

    #[test]
    fn unparsable_amounts_count_as_zero() {
        let table = amounts(&[["Item", "Amount"], ["A", "N/A"], ["B", "$1,500.00"]]);
        assert_eq!(table.total(), Decimal::from(1500));
    }

    #[test]
    fn rows_without_amount_column_count_as_zero() {
        let table = TableSpec::new(vec![vec!["lonely"], vec!["A", "$5.00"]]).with_total(true);
        assert_eq!(table.total_label().as_deref(), Some("Total: $5.00"));
    }

    #[test]
    fn total_truncates_cents() {
        let table = amounts(&[["A", "$10.50"], ["B", "$10.60"]]);
        assert_eq!(table.total_label().as_deref(), Some("Total: $21.00"));
    }

    #[test]
    fn overflowing_amounts_count_as_zero() {
        let max = "$79,228,162,514,264,337,593,543,950,335.00";
        let table = amounts(&[["A", max], ["B", max], ["C", "$1.00"]]);

        assert_eq!(table.total(), Decimal::MAX);
        assert!(table
            .total_label()
            .is_some_and(|label| label.starts_with("Total: $79,228,162,514,264,")));
    }

    #[test]
    fn no_total_label_without_flag() {
        let table = TableSpec::new(vec![vec!["A", "$1.00"]]);
        assert_eq!(table.total_label(), None);
    }

    #[test]
    fn missing_widths_use_default() {
        let table = TableSpec::new(vec![vec!["a", "b", "c"]]).with_column_widths(vec![80.0]);
        assert_eq!(table.column_width(0), 80.0);
        assert_eq!(table.column_width(2), DEFAULT_COLUMN_WIDTH_MM);
        assert_eq!(table.width(), 80.0 + 2.0 * DEFAULT_COLUMN_WIDTH_MM);

        let empty = TableSpec::new(Vec::<Vec<String>>::new());
        assert_eq!(empty.width(), DEFAULT_COLUMN_WIDTH_MM);
    }

    #[test]
    fn optional_sections_stay_none_until_used() {
        let spec = DocumentSpec::new("x.pdf", "X");
        assert!(spec.tables().is_none());
        assert!(spec.signature_labels().is_none());

        let spec = spec.with_signature("John Doe");
        assert_eq!(spec.signature_labels(), Some(&["John Doe".to_string()][..]));
    }
}
