use super::canvas::{Align, Canvas, FontStyle, Paint, Rgb, Stroke, TextStyle};
use super::layout::render_document;
use crate::config::Config;
use crate::error::ExportError;
use crate::model::QuoteSnapshot;
use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Rect,
};

const A4_WIDTH: f64 = 210.0;
const A4_HEIGHT: f64 = 297.0;
const PT_PER_MM: f64 = 72.0 / 25.4;

struct Fonts {
    normal: IndirectFontRef,
    bold: IndirectFontRef,
    italic: IndirectFontRef,
}

/// A4 PDF surface using the built-in Helvetica family.
pub struct PdfCanvas {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    fonts: Fonts,
    pages: usize,
}

impl PdfCanvas {
    pub fn new(title: &str) -> Result<Self, ExportError> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(A4_WIDTH as f32), Mm(A4_HEIGHT as f32), "Page 1");
        let layer = doc.get_page(page).get_layer(layer);

        let fonts = Fonts {
            normal: add_font(&doc, BuiltinFont::Helvetica)?,
            bold: add_font(&doc, BuiltinFont::HelveticaBold)?,
            italic: add_font(&doc, BuiltinFont::HelveticaOblique)?,
        };

        Ok(Self {
            doc,
            layer,
            fonts,
            pages: 1,
        })
    }

    fn font(&self, style: FontStyle) -> &IndirectFontRef {
        match style {
            FontStyle::Normal => &self.fonts.normal,
            FontStyle::Bold => &self.fonts.bold,
            FontStyle::Italic => &self.fonts.italic,
        }
    }

    fn set_stroke(&self, stroke: Stroke) {
        self.layer.set_outline_color(color(stroke.color));
        self.layer.set_outline_thickness((stroke.width * PT_PER_MM) as f32);
    }
}

fn add_font(doc: &PdfDocumentReference, font: BuiltinFont) -> Result<IndirectFontRef, ExportError> {
    doc.add_builtin_font(font).map_err(|e| ExportError::Render {
        message: format!("failed to load font: {e}"),
    })
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb(printpdf::Rgb::new(
        f32::from(rgb.0) / 255.0,
        f32::from(rgb.1) / 255.0,
        f32::from(rgb.2) / 255.0,
        None,
    ))
}

fn point(x: f64, y_from_top: f64) -> Point {
    Point::new(Mm(x as f32), Mm((A4_HEIGHT - y_from_top) as f32))
}

/// Characters WinAnsiEncoding places in 0x80..=0x9F.
const WIN_ANSI_EXTRAS: &str = "€‚ƒ„…†‡ˆ‰Š‹ŒŽ‘’“”•–—˜™š›œžŸ";

/// Built-in fonts are WinAnsi encoded; anything outside it prints as `?`.
fn pdf_text(text: &str) -> String {
    text.chars()
        .map(|c| match u32::from(c) {
            0x20..=0x7E | 0xA0..=0xFF => c,
            _ if WIN_ANSI_EXTRAS.contains(c) => c,
            _ => '?',
        })
        .collect()
}

/// Approximate Helvetica advance width in millimetres.
fn text_width(text: &str, size: f32, font: FontStyle) -> f64 {
    let em: f64 = text
        .chars()
        .map(|c| match c {
            ' ' | 'i' | 'j' | 'l' | '.' | ',' | ':' | ';' | '\'' | '|' | '!' => 0.28,
            'f' | 't' | 'r' | '(' | ')' | '-' | '"' | '•' => 0.35,
            'm' | 'w' | 'M' | 'W' => 0.85,
            'A'..='Z' => 0.68,
            '0'..='9' => 0.556,
            _ => 0.52,
        })
        .sum();
    let weight = if font == FontStyle::Bold { 1.06 } else { 1.0 };
    em * weight * f64::from(size) / PT_PER_MM
}

impl Canvas for PdfCanvas {
    fn page_size(&self) -> (f64, f64) {
        (A4_WIDTH, A4_HEIGHT)
    }

    fn text(&mut self, text: &str, x: f64, y: f64, style: TextStyle) {
        let text = pdf_text(text);
        let x = match style.align {
            Align::Left => x,
            Align::Center => x - text_width(&text, style.size, style.font) / 2.0,
        };

        self.layer.set_fill_color(color(style.color));
        self.layer.use_text(
            text,
            style.size,
            Mm(x as f32),
            Mm((A4_HEIGHT - y) as f32),
            self.font(style.font),
        );
    }

    fn line(&mut self, from: (f64, f64), to: (f64, f64), stroke: Stroke) {
        self.set_stroke(stroke);
        self.layer.add_line(Line {
            points: vec![(point(from.0, from.1), false), (point(to.0, to.1), false)],
            is_closed: false,
        });
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, paint: Paint) {
        let rect = Rect::new(
            Mm(x as f32),
            Mm((A4_HEIGHT - y - height) as f32),
            Mm((x + width) as f32),
            Mm((A4_HEIGHT - y) as f32),
        );

        let rect = match paint {
            Paint::Stroke(stroke) => {
                self.set_stroke(stroke);
                rect.with_mode(PaintMode::Stroke)
            }
            Paint::Fill(fill) => {
                self.layer.set_fill_color(color(fill));
                rect.with_mode(PaintMode::Fill)
            }
        };
        self.layer.add_rect(rect);
    }

    fn add_page(&mut self) {
        self.pages += 1;
        let (page, layer) = self.doc.add_page(
            Mm(A4_WIDTH as f32),
            Mm(A4_HEIGHT as f32),
            format!("Page {}", self.pages),
        );
        self.layer = self.doc.get_page(page).get_layer(layer);
    }

    fn finish(self) -> Result<Vec<u8>, ExportError> {
        self.doc.save_to_bytes().map_err(|e| ExportError::Render {
            message: e.to_string(),
        })
    }
}

/// Render the quotation document to PDF bytes.
pub fn render_pdf(snapshot: &QuoteSnapshot, config: &Config) -> Result<Vec<u8>, ExportError> {
    let mut canvas = PdfCanvas::new(&config.document.title)?;
    render_document(snapshot, config, &mut canvas);
    canvas.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Quotation;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    #[test]
    fn pdf_text_keeps_win_ansi_characters() {
        assert_eq!(pdf_text("  • Bed"), "  • Bed");
        assert_eq!(pdf_text("Café – “Suite” €"), "Café – “Suite” €");
        assert_eq!(pdf_text("₹ 100"), "? 100");
        assert_eq!(pdf_text("a\u{0085}b\u{0009}c"), "a?b?c");
    }

    #[test]
    fn wider_text_measures_wider() {
        let narrow = text_width("Rs. 100", 20.0, FontStyle::Bold);
        let wide = text_width("Rs. 1,00,00,000", 20.0, FontStyle::Bold);
        assert!(wide > narrow);
        assert!(text_width("", 12.0, FontStyle::Normal).abs() < f64::EPSILON);
    }

    #[test]
    fn renders_pdf_bytes() {
        let snapshot = Quotation::new().snapshot(NaiveDate::from_ymd_opt(2026, 1, 2).unwrap());
        let bytes = render_pdf(&snapshot, &Config::default()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
