//! Quotation document layout.
//!
//! Draws a [`QuoteSnapshot`] top-down onto any [`Canvas`], adding pages when
//! content would run into the footer.

use super::canvas::{Align, Canvas, FontStyle, Paint, Rgb, Stroke, TextStyle};
use super::details::{work_details, WorkSection};
use super::format::{format_date, format_total};
use crate::config::Config;
use crate::model::QuoteSnapshot;

const SOFT_BEIGE: Rgb = Rgb(245, 240, 230);
const SOFT_GREEN: Rgb = Rgb(128, 156, 128);
const ELEGANT_BROWN: Rgb = Rgb(139, 115, 85);
const DARK_TEXT: Rgb = Rgb(60, 60, 60);
const LIGHT_GRAY: Rgb = Rgb(200, 200, 200);

const MARGIN_X: f64 = 25.0;
const TOP_Y: f64 = 25.0;
/// Height reserved at the bottom of each page for the footer.
const FOOTER_ZONE: f64 = 30.0;

/// Height of one band of the page background.
const BAND: f64 = 5.0;

const CLIENT_PLACEHOLDER: &str = "___________";

/// Keeps the vertical cursor and the open "Work Details" frame across pages.
struct PageWriter<'a, C: Canvas> {
    canvas: &'a mut C,
    footer: &'a str,
    width: f64,
    height: f64,
    y: f64,
    frame_top: Option<f64>,
}

impl<'a, C: Canvas> PageWriter<'a, C> {
    fn new(canvas: &'a mut C, footer: &'a str) -> Self {
        let (width, height) = canvas.page_size();
        Self {
            canvas,
            footer,
            width,
            height,
            y: TOP_Y,
            frame_top: None,
        }
    }

    fn content_bottom(&self) -> f64 {
        self.height - FOOTER_ZONE
    }

    fn frame_width(&self) -> f64 {
        self.width - 2.0 * MARGIN_X
    }

    /// Break the page if `needed` millimetres do not fit above the footer.
    fn reserve(&mut self, needed: f64) {
        if self.y + needed <= self.content_bottom() {
            return;
        }

        if let Some(top) = self.frame_top {
            self.close_frame_at(top, self.y);
        }
        self.draw_footer();
        self.canvas.add_page();
        self.draw_background();
        self.y = TOP_Y;
        if self.frame_top.is_some() {
            self.frame_top = Some(self.y);
            self.y += 5.0;
        }
    }

    /// Beige bands fading towards white down the page.
    fn draw_background(&mut self) {
        let mut top = 0.0;
        while top < self.height {
            let fade = top / self.height * 0.3;
            let shade = |c: u8| {
                let c = f64::from(c);
                (c + (255.0 - c) * fade).round() as u8
            };
            let color = Rgb(
                shade(SOFT_BEIGE.0),
                shade(SOFT_BEIGE.1),
                shade(SOFT_BEIGE.2),
            );
            self.canvas.rect(0.0, top, self.width, BAND, Paint::Fill(color));
            top += BAND;
        }
    }

    fn text(&mut self, text: &str, x: f64, style: TextStyle) {
        self.canvas.text(text, x, self.y, style);
    }

    fn centered(&mut self, text: &str, style: TextStyle) {
        let x = self.width / 2.0;
        self.canvas.text(text, x, self.y, style.centered());
    }

    fn rule(&mut self, inset: f64, stroke: Stroke) {
        let (left, right) = (inset, self.width - inset);
        self.canvas.line((left, self.y), (right, self.y), stroke);
    }

    fn open_frame(&mut self) {
        self.frame_top = Some(self.y);
        self.y += 5.0;
    }

    fn close_frame(&mut self) {
        if let Some(top) = self.frame_top.take() {
            self.close_frame_at(top, self.y);
        }
    }

    fn close_frame_at(&mut self, top: f64, bottom: f64) {
        let width = self.frame_width();
        self.canvas.rect(
            MARGIN_X,
            top,
            width,
            bottom - top,
            Paint::Stroke(Stroke {
                color: LIGHT_GRAY,
                width: 0.3,
            }),
        );
    }

    fn draw_footer(&mut self) {
        let footer_y = self.height - 20.0;
        self.canvas.line(
            (40.0, footer_y - 5.0),
            (self.width - 40.0, footer_y - 5.0),
            Stroke {
                color: LIGHT_GRAY,
                width: 0.3,
            },
        );
        let x = self.width / 2.0;
        self.canvas.text(
            self.footer,
            x,
            footer_y,
            TextStyle::new(10.0, FontStyle::Italic, SOFT_GREEN).centered(),
        );
    }
}

/// Lay out the full quotation document onto `canvas`.
pub fn render_document<C: Canvas>(snapshot: &QuoteSnapshot, config: &Config, canvas: &mut C) {
    let mut page = PageWriter::new(canvas, &config.company.footer);
    page.draw_background();

    draw_header(&mut page, config);
    draw_client_line(&mut page, snapshot);
    draw_work_details(&mut page, &work_details(&snapshot.quotation));

    let total = format_total(
        snapshot.total_cost,
        &config.document.currency_prefix,
        config.document.grouping,
    );
    draw_total(&mut page, &total);
    draw_terms(&mut page, &config.document.terms);

    page.draw_footer();
}

fn draw_header<C: Canvas>(page: &mut PageWriter<'_, C>, config: &Config) {
    page.centered(
        &config.company.name,
        TextStyle::new(28.0, FontStyle::Bold, ELEGANT_BROWN),
    );
    page.y += 8.0;

    page.centered(
        &config.company.tagline,
        TextStyle::new(11.0, FontStyle::Italic, SOFT_GREEN),
    );
    page.y += 15.0;

    page.centered(
        &config.document.title,
        TextStyle::new(20.0, FontStyle::Bold, DARK_TEXT),
    );
    page.y += 3.0;
    page.rule(
        60.0,
        Stroke {
            color: ELEGANT_BROWN,
            width: 0.8,
        },
    );
    page.y += 12.0;
}

fn draw_client_line<C: Canvas>(page: &mut PageWriter<'_, C>, snapshot: &QuoteSnapshot) {
    let bold = TextStyle::new(11.0, FontStyle::Bold, DARK_TEXT);
    let normal = TextStyle::new(11.0, FontStyle::Normal, DARK_TEXT);

    let name = snapshot.quotation.client.client_name.trim();
    let name = if name.is_empty() {
        CLIENT_PLACEHOLDER
    } else {
        name
    };

    page.text("Client Name:", MARGIN_X, bold);
    page.text(name, 55.0, normal);

    let date_label_x = page.width - 65.0;
    let date_x = page.width - 45.0;
    page.text("Date:", date_label_x, bold);
    page.text(&format_date(snapshot.date), date_x, normal);

    page.y += 12.0;
}

fn draw_work_details<C: Canvas>(page: &mut PageWriter<'_, C>, sections: &[WorkSection]) {
    page.reserve(20.0);
    page.text(
        "WORK DETAILS",
        MARGIN_X,
        TextStyle::new(12.0, FontStyle::Bold, ELEGANT_BROWN),
    );
    page.y += 8.0;
    page.open_frame();

    let heading = TextStyle::new(10.0, FontStyle::Bold, ELEGANT_BROWN);
    let item_style = TextStyle::new(10.0, FontStyle::Normal, DARK_TEXT);
    let divider = Stroke {
        color: LIGHT_GRAY,
        width: 0.2,
    };

    for (index, section) in sections.iter().enumerate() {
        // Keep a heading together with its first item
        page.reserve(9.0);
        page.text(&section.name, MARGIN_X + 5.0, heading);
        page.y += 5.0;

        for item in &section.items {
            page.reserve(4.0);
            page.text(&format!("  • {item}"), MARGIN_X + 8.0, item_style);
            page.y += 4.0;
        }
        page.y += 2.0;

        if index + 1 < sections.len() {
            let (left, right) = (MARGIN_X + 5.0, MARGIN_X + page.frame_width() - 5.0);
            page.canvas.line((left, page.y), (right, page.y), divider);
            page.y += 3.0;
        }
    }

    page.y += 3.0;
    page.close_frame();
    page.y += 12.0;
}

fn draw_total<C: Canvas>(page: &mut PageWriter<'_, C>, total: &str) {
    page.reserve(34.0);
    page.centered(
        "TOTAL PROJECT COST",
        TextStyle::new(14.0, FontStyle::Bold, ELEGANT_BROWN),
    );
    page.y += 10.0;

    let box_width = page.width - 110.0;
    page.canvas.rect(
        55.0,
        page.y - 8.0,
        box_width,
        18.0,
        Paint::Stroke(Stroke {
            color: ELEGANT_BROWN,
            width: 0.8,
        }),
    );
    let x = page.width / 2.0;
    page.canvas.text(
        total,
        x,
        page.y + 3.0,
        TextStyle {
            size: 20.0,
            font: FontStyle::Bold,
            color: DARK_TEXT,
            align: Align::Center,
        },
    );
    page.y += 20.0;
}

fn draw_terms<C: Canvas>(page: &mut PageWriter<'_, C>, terms: &[String]) {
    page.reserve(11.0);
    page.text(
        "Terms & Conditions",
        MARGIN_X,
        TextStyle::new(11.0, FontStyle::Bold, ELEGANT_BROWN),
    );
    page.y += 6.0;

    let style = TextStyle::new(9.0, FontStyle::Normal, DARK_TEXT);
    for term in terms {
        page.reserve(5.0);
        page.text(&format!("• {term}"), MARGIN_X, style);
        page.y += 5.0;
    }
}
