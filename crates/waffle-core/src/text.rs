// File: crates/waffle-core/src/text.rs
// Summary: Skia textlayout shaper for plain labels and multi-colored rich text.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

/// A run of text; `None` color means the paragraph's base color.
#[derive(Clone, Debug, PartialEq)]
pub struct Span {
    pub text: String,
    pub color: Option<skia::Color>,
}

/// Sequence of spans laid out as one paragraph. `\n` inside a span breaks the line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RichText {
    pub spans: Vec<Span>,
}

impl RichText {
    pub fn new() -> Self { Self::default() }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.spans.push(Span { text: text.into(), color: None });
        self
    }

    pub fn colored(mut self, text: impl Into<String>, color: skia::Color) -> Self {
        self.spans.push(Span { text: text.into(), color: Some(color) });
        self
    }

    pub fn line_break(self) -> Self { self.text("\n") }

    /// Concatenated text without styling.
    pub fn plain(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Open Sans", "Segoe UI", "Arial", "Helvetica", "DejaVu Sans", "sans-serif"]);
        ts
    }

    pub fn layout_rich(&self, text: &RichText, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, self.fonts.clone());
        let base = Self::make_style(size, color);
        builder.push_style(&base);
        for span in &text.spans {
            match span.color {
                Some(c) => {
                    let mut style = base.clone();
                    style.set_color(c);
                    builder.push_style(&style);
                    builder.add_text(&span.text);
                    builder.pop();
                }
                None => {
                    builder.add_text(&span.text);
                }
            }
        }
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        self.layout_rich(&RichText::new().text(text), size, color)
    }

    /// Draw with the paragraph's bottom-left corner at (`x`, `bottom`).
    pub fn draw_bottom_left(&self, canvas: &skia::Canvas, text: &RichText, x: f32, bottom: f32, size: f32, color: skia::Color) {
        let mut p = self.layout_rich(text, size, color);
        let h = p.height();
        p.paint(canvas, (x, bottom - h));
    }

    /// Draw a single label centered on (`cx`, `cy`).
    pub fn draw_centered(&self, canvas: &skia::Canvas, text: &str, cx: f32, cy: f32, size: f32, color: skia::Color) {
        let mut p = self.layout(text, size, color);
        let (w, h) = (p.longest_line(), p.height());
        p.paint(canvas, (cx - w * 0.5, cy - h * 0.5));
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}
