//! Construction of pre-configured `genpdf` documents.

use genpdf::error::Error;
use genpdf::fonts::{FontData, FontFamily};
use genpdf::style;
use genpdf::{self, Element, Margins, PageDecorator, Position, Size};

/// Builder for `genpdf::Document` instances sharing a page setup.
#[derive(Default)]
pub struct DocumentBuilder {
    title: Option<String>,
    paper_size: Option<Size>,
    margins: Option<Margins>,
    font_size: Option<u8>,
    line_spacing: Option<f64>,
    header: Option<Box<HeaderFactory>>,
}

type HeaderFactory = dyn Fn(usize) -> Box<dyn Element>;

impl DocumentBuilder {
    /// Creates a new builder instance with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the document title stored in the PDF metadata.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the paper size used for newly created documents.
    pub fn with_paper_size(mut self, paper_size: impl Into<Size>) -> Self {
        self.paper_size = Some(paper_size.into());
        self
    }

    /// Sets the margins applied through the page decorator.
    pub fn with_margins(mut self, margins: impl Into<Margins>) -> Self {
        self.margins = Some(margins.into());
        self
    }

    /// Sets the default font size in points.
    pub fn with_font_size(mut self, font_size: u8) -> Self {
        self.font_size = Some(font_size);
        self
    }

    /// Sets the line spacing factor.
    pub fn with_line_spacing(mut self, line_spacing: f64) -> Self {
        self.line_spacing = Some(line_spacing);
        self
    }

    /// Configures a header callback that is invoked for every page.
    pub fn with_header<F, E>(mut self, header: F) -> Self
    where
        F: Fn(usize) -> E + 'static,
        E: Element + 'static,
    {
        self.header = Some(Box::new(move |page| {
            Box::new(header(page)) as Box<dyn Element>
        }));
        self
    }

    /// Builds a `genpdf::Document` that lays out text with `font_family`.
    pub fn build(self, font_family: FontFamily<FontData>) -> genpdf::Document {
        let mut document = genpdf::Document::new(font_family);

        if let Some(title) = self.title {
            document.set_title(title);
        }
        if let Some(paper_size) = self.paper_size {
            document.set_paper_size(paper_size);
        }
        if let Some(font_size) = self.font_size {
            document.set_font_size(font_size);
        }
        if let Some(line_spacing) = self.line_spacing {
            document.set_line_spacing(line_spacing);
        }

        document.set_page_decorator(HeaderPageDecorator::new(self.margins, self.header));
        document
    }
}

struct HeaderPageDecorator {
    page: usize,
    margins: Option<Margins>,
    header: Option<Box<HeaderFactory>>,
}

impl HeaderPageDecorator {
    fn new(margins: Option<Margins>, header: Option<Box<HeaderFactory>>) -> Self {
        Self {
            page: 0,
            margins,
            header,
        }
    }
}

impl PageDecorator for HeaderPageDecorator {
    fn decorate_page<'a>(
        &mut self,
        context: &genpdf::Context,
        mut area: genpdf::render::Area<'a>,
        style: style::Style,
    ) -> Result<genpdf::render::Area<'a>, Error> {
        self.page += 1;

        if let Some(margins) = self.margins {
            area.add_margins(margins);
        }

        if let Some(header_cb) = &self.header {
            let mut element = header_cb(self.page);
            let result = element.render(context, area.clone(), style)?;
            area.add_offset(Position::new(0, result.size.height));
        }

        Ok(area)
    }
}
