//! Drawing primitives the document layout is written against.
//!
//! Coordinates are millimetres from the top-left corner of the page.

use crate::error::ExportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Normal,
    Bold,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Points.
    pub size: f32,
    pub font: FontStyle,
    pub color: Rgb,
    pub align: Align,
}

impl TextStyle {
    #[must_use]
    pub const fn new(size: f32, font: FontStyle, color: Rgb) -> Self {
        Self {
            size,
            font,
            color,
            align: Align::Left,
        }
    }

    #[must_use]
    pub const fn centered(mut self) -> Self {
        self.align = Align::Center;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgb,
    /// Millimetres.
    pub width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Stroke(Stroke),
    Fill(Rgb),
}

/// A paginated drawing surface.
pub trait Canvas {
    /// Width and height of a page in millimetres.
    fn page_size(&self) -> (f64, f64);

    /// Draw `text` with its anchor at `(x, y)`; `y` is the baseline.
    fn text(&mut self, text: &str, x: f64, y: f64, style: TextStyle);

    fn line(&mut self, from: (f64, f64), to: (f64, f64), stroke: Stroke);

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, paint: Paint);

    /// Start a new page; subsequent drawing goes there.
    fn add_page(&mut self);

    /// Serialize the finished document.
    fn finish(self) -> Result<Vec<u8>, ExportError>
    where
        Self: Sized;
}

#[cfg(test)]
pub(crate) mod recording {
    use super::{Canvas, Paint, Stroke, TextStyle};
    use crate::error::ExportError;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Op {
        Text {
            page: usize,
            text: String,
            x: f64,
            y: f64,
            style: TextStyle,
        },
        Line {
            page: usize,
            from: (f64, f64),
            to: (f64, f64),
            stroke: Stroke,
        },
        Rect {
            page: usize,
            x: f64,
            y: f64,
            width: f64,
            height: f64,
            paint: Paint,
        },
    }

    impl Op {
        pub fn page(&self) -> usize {
            match self {
                Op::Text { page, .. } | Op::Line { page, .. } | Op::Rect { page, .. } => *page,
            }
        }
    }

    /// Canvas that remembers what was drawn.
    #[derive(Debug)]
    pub struct RecordingCanvas {
        pub size: (f64, f64),
        pub page: usize,
        pub ops: Vec<Op>,
    }

    impl RecordingCanvas {
        pub fn a4() -> Self {
            Self::with_size(210.0, 297.0)
        }

        pub fn with_size(width: f64, height: f64) -> Self {
            Self {
                size: (width, height),
                page: 0,
                ops: Vec::new(),
            }
        }

        pub fn texts(&self) -> Vec<&str> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Text { text, .. } => Some(text.as_str()),
                    _ => None,
                })
                .collect()
        }

        pub fn pages(&self) -> usize {
            self.page + 1
        }
    }

    impl Canvas for RecordingCanvas {
        fn page_size(&self) -> (f64, f64) {
            self.size
        }

        fn text(&mut self, text: &str, x: f64, y: f64, style: TextStyle) {
            self.ops.push(Op::Text {
                page: self.page,
                text: text.to_string(),
                x,
                y,
                style,
            });
        }

        fn line(&mut self, from: (f64, f64), to: (f64, f64), stroke: Stroke) {
            self.ops.push(Op::Line {
                page: self.page,
                from,
                to,
                stroke,
            });
        }

        fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, paint: Paint) {
            self.ops.push(Op::Rect {
                page: self.page,
                x,
                y,
                width,
                height,
                paint,
            });
        }

        fn add_page(&mut self) {
            self.page += 1;
        }

        fn finish(self) -> Result<Vec<u8>, ExportError> {
            Ok(self.texts().join("\n").into_bytes())
        }
    }
}
