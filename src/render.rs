//! Lays out a [`DocumentSpec`] as a single-column PDF.

use std::path::{Path, PathBuf};

use genpdf::elements::{Break, FrameCellDecorator, LinearLayout, Paragraph, TableLayout};
use genpdf::fonts::{FontData, FontFamily};
use genpdf::style::Style;
use genpdf::{Alignment, Element as _, PaperSize};
use log::info;

use crate::builder::DocumentBuilder;
use crate::elements::{mm_from_f64, FixedWidth, Spacer};
use crate::error::{Error, Result};
use crate::fonts;
use crate::model::{DocumentSpec, TableSpec};

const PAGE_MARGIN_MM: f64 = 10.0;
const BODY_FONT_SIZE: u8 = 12;
const TITLE_FONT_SIZE: u8 = 14;
const LINE_SPACING: f64 = 1.5;
const SECTION_GAP_MM: f64 = 5.0;
const SIGNATURE_GAP_MM: f64 = 10.0;
const CELL_PADDING_MM: f64 = 1.0;

/// Blank rule printed after every signature label.
pub const SIGNATURE_RULE: &str = "______________________________";

/// Text of the line printed for a signature label.
pub fn signature_line(label: &str) -> String {
    format!("{}: {}", label, SIGNATURE_RULE)
}

/// One printed line of a body entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BodySegment<'a> {
    Text(&'a str),
    /// An empty segment, printed as a blank line of body height.
    Blank,
}

/// Splits a body entry on embedded newlines, as in a multi-line cell.
fn body_segments(line: &str) -> impl Iterator<Item = BodySegment<'_>> {
    line.split('\n').map(|segment| {
        if segment.is_empty() {
            BodySegment::Blank
        } else {
            BodySegment::Text(segment)
        }
    })
}

/// Relative column weight for a width in millimetres; tenths keep fractional widths apart.
fn column_weight(width_mm: f64) -> usize {
    (width_mm * 10.0).round().max(1.0) as usize
}

fn bordered(columns: Vec<usize>) -> TableLayout {
    let mut table = TableLayout::new(columns);
    table.set_cell_decorator(FrameCellDecorator::new(true, true, false));
    table
}

fn table_element(table: &TableSpec) -> std::result::Result<LinearLayout, genpdf::error::Error> {
    let mut layout = LinearLayout::vertical();
    let columns = table.column_count();

    if columns > 0 {
        let weights = (0..columns)
            .map(|index| column_weight(table.column_width(index)))
            .collect();
        let mut grid = bordered(weights);
        for row in table.rows() {
            let mut cells = grid.row();
            for index in 0..columns {
                let text = row.get(index).map(String::as_str).unwrap_or_default();
                cells = cells.element(Paragraph::new(text).padded(mm_from_f64(CELL_PADDING_MM)));
            }
            cells.push()?;
        }
        layout.push(FixedWidth::new(grid, table.width()));
    }

    if let Some(label) = table.total_label() {
        let mut total = bordered(vec![1]);
        total
            .row()
            .element(
                Paragraph::new(label)
                    .styled(Style::new().bold())
                    .padded(mm_from_f64(CELL_PADDING_MM)),
            )
            .push()?;
        layout.push(FixedWidth::new(total, table.width()));
    }

    Ok(layout)
}

fn title_header(title: String) -> impl Fn(usize) -> LinearLayout {
    move |_page| {
        let mut heading = Paragraph::new(title.clone());
        heading.set_alignment(Alignment::Center);

        let mut layout = LinearLayout::vertical();
        layout.push(heading.styled(Style::new().bold().with_font_size(TITLE_FONT_SIZE)));
        layout.push(Spacer::new(SECTION_GAP_MM));
        layout
    }
}

/// Renders document specs with a shared font family.
pub struct Renderer {
    font_family: FontFamily<FontData>,
}

impl Renderer {
    /// Creates a renderer that lays out text with `font_family`.
    pub fn new(font_family: FontFamily<FontData>) -> Self {
        Self { font_family }
    }

    /// Creates a renderer using [`fonts::default_font_family`].
    pub fn with_default_fonts() -> Result<Self> {
        let family = fonts::default_font_family().map_err(Error::FontLoad)?;
        Ok(Self::new(family))
    }

    /// Builds the genpdf document for `spec` without writing it.
    fn layout(
        &self,
        spec: &DocumentSpec,
    ) -> std::result::Result<genpdf::Document, genpdf::error::Error> {
        let mut document = DocumentBuilder::new()
            .with_title(spec.title())
            .with_paper_size(PaperSize::A4)
            .with_margins(mm_from_f64(PAGE_MARGIN_MM))
            .with_font_size(BODY_FONT_SIZE)
            .with_line_spacing(LINE_SPACING)
            .with_header(title_header(spec.title().to_owned()))
            .build(self.font_family.clone());

        for line in spec.body_lines() {
            for segment in body_segments(line) {
                match segment {
                    BodySegment::Text(text) => document.push(Paragraph::new(text)),
                    BodySegment::Blank => document.push(Break::new(1)),
                }
            }
        }
        document.push(Spacer::new(SECTION_GAP_MM));

        for table in spec.tables().unwrap_or_default() {
            document.push(table_element(table)?);
            document.push(Spacer::new(SECTION_GAP_MM));
        }

        for label in spec.signature_labels().unwrap_or_default() {
            document.push(Spacer::new(SIGNATURE_GAP_MM));
            document.push(Paragraph::new(signature_line(label)));
        }

        Ok(document)
    }

    /// Renders `spec` into memory and returns the PDF bytes.
    pub fn render_to_bytes(&self, spec: &DocumentSpec) -> Result<Vec<u8>> {
        let render_error = |source: genpdf::error::Error| Error::Render {
            path: PathBuf::from(spec.filename()),
            source,
        };

        let document = self.layout(spec).map_err(render_error)?;
        let mut bytes = Vec::new();
        document.render(&mut bytes).map_err(render_error)?;
        Ok(bytes)
    }

    /// Renders `spec` to `output_dir/filename`, replacing any existing file, and returns the path.
    pub fn render_to_file(&self, spec: &DocumentSpec, output_dir: &Path) -> Result<PathBuf> {
        let path = output_dir.join(spec.filename());
        let document = self.layout(spec).map_err(|source| Error::Render {
            path: path.clone(),
            source,
        })?;
        document
            .render_to_file(&path)
            .map_err(|source| Error::Render {
                path: path.clone(),
                source,
            })?;

        info!("Generated {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_line_has_fixed_rule() {
        assert_eq!(
            signature_line("John Doe"),
            "John Doe: ______________________________"
        );
        assert_eq!(SIGNATURE_RULE.len(), 30);
    }

    #[test]
    fn embedded_newlines_split_body_lines() {
        use BodySegment::{Blank, Text};

        assert_eq!(body_segments("a").collect::<Vec<_>>(), vec![Text("a")]);
        assert_eq!(
            body_segments("a\n\nb").collect::<Vec<_>>(),
            vec![Text("a"), Blank, Text("b")]
        );
        assert_eq!(body_segments("").collect::<Vec<_>>(), vec![Blank]);
    }

    #[test]
    fn column_weights_follow_widths() {
        assert_eq!(column_weight(100.0), 1000);
        assert_eq!(column_weight(60.0), 600);
        assert_eq!(column_weight(0.0), 1);
    }

    #[test]
    fn ragged_rows_lay_out() {
        let table = TableSpec::new(vec![vec!["Header", "Amount"], vec!["Only one"]])
            .with_column_widths(vec![100.0, 60.0])
            .with_total(true);
        assert!(table_element(&table).is_ok());
    }
}
