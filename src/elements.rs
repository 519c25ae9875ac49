//! Layout elements that `genpdf` does not ship with.
//!
//! Spacing in the document layout is specified in millimetres, and tables have absolute column
//! widths, while the upstream elements think in line heights and relative column weights.

use genpdf::error::Error;
use genpdf::style::Style;
use genpdf::{render, Element, Mm, RenderResult, Size};

/// Converts a millimetre value into the `genpdf` unit type.
pub fn mm_from_f64(value: f64) -> Mm {
    Mm::from(printpdf::Mm(value))
}

/// Blank vertical space with a fixed height.
///
/// Near the bottom of a page the space shrinks to whatever is left instead of forcing a page
/// break on its own.
#[derive(Clone, Copy, Debug)]
pub struct Spacer {
    height: Mm,
}

impl Spacer {
    /// Creates a spacer `height_mm` millimetres tall.
    pub fn new(height_mm: f64) -> Self {
        Self {
            height: mm_from_f64(height_mm),
        }
    }
}

impl Element for Spacer {
    fn render(
        &mut self,
        _context: &genpdf::Context,
        area: render::Area<'_>,
        _style: Style,
    ) -> Result<RenderResult, Error> {
        let available = area.size().height;
        let height = if self.height > available {
            available
        } else {
            self.height
        };

        let mut result = RenderResult::default();
        result.size = Size::new(0, height);
        Ok(result)
    }
}

/// Renders the wrapped element into a left-aligned area of at most `width`.
///
/// Used to give tables an absolute width so relative column weights turn into millimetres.
pub struct FixedWidth<E: Element> {
    inner: E,
    width: Mm,
}

impl<E: Element> FixedWidth<E> {
    /// Wraps `inner`, limiting it to `width_mm` millimetres.
    pub fn new(inner: E, width_mm: f64) -> Self {
        Self {
            inner,
            width: mm_from_f64(width_mm),
        }
    }
}

impl<E: Element> Element for FixedWidth<E> {
    fn render(
        &mut self,
        context: &genpdf::Context,
        mut area: render::Area<'_>,
        style: Style,
    ) -> Result<RenderResult, Error> {
        if self.width < area.size().width {
            area.set_width(self.width);
        }
        self.inner.render(context, area, style)
    }
}
