// File: crates/xyplot-render-skia/src/text.rs
// Summary: Text shaper/renderer for tic labels and styled titles using Skia textlayout.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};
use xyplot_core::text::BODY_SIZE;
use xyplot_core::{StyledText, TextRun};

use crate::paint::to_color;

const SANS: &[&str] = &["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"];
const MONO: &[&str] = &["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"];

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, mono_numeric: bool) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(if mono_numeric { MONO } else { SANS });
        ts
    }

    fn run_style(run: &TextRun, scale: f32, color: skia::Color) -> TextStyle {
        let color = run.color.map(to_color).unwrap_or(color);
        let mut ts = Self::make_style(run.size.unwrap_or(BODY_SIZE) * scale, color, false);
        ts.set_font_style(match (run.bold, run.italic) {
            (true, true) => skia::FontStyle::bold_italic(),
            (true, false) => skia::FontStyle::bold(),
            (false, true) => skia::FontStyle::italic(),
            (false, false) => skia::FontStyle::normal(),
        });
        ts
    }

    fn build(&self, align: TextAlign, fill: impl FnOnce(&mut ParagraphBuilder)) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(align);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        fill(&mut builder);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, mono_numeric: bool) -> Paragraph {
        self.build(TextAlign::Left, |builder| {
            builder.push_style(&Self::make_style(size, color, mono_numeric));
            builder.add_text(text);
        })
    }

    /// One paragraph with a text style per run. Runs without a size use the
    /// body size; `scale` multiplies every size.
    pub fn layout_styled(&self, text: &StyledText, scale: f32, color: skia::Color) -> Paragraph {
        self.build(TextAlign::Left, |builder| {
            for run in &text.runs {
                builder.push_style(&Self::run_style(run, scale, color));
                builder.add_text(&run.text);
                builder.pop();
            }
        })
    }

    pub fn measure_width(&self, text: &str, size: f32, mono_numeric: bool) -> f32 {
        let p = self.layout(text, size, skia::Color::from_argb(0, 0, 0, 0), mono_numeric);
        // width of the longest line
        p.longest_line()
    }

    pub fn draw_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color, mono_numeric: bool) {
        let p = self.layout(text, size, color, mono_numeric);
        // Paragraph draws from top-left; adjust baseline by glyph height approximation
        p.paint(canvas, (x, y - size * 0.8));
    }

    /// Draw `paragraph` centered on `(cx, cy)`, turned by `degrees` (clockwise).
    pub fn draw_centered(&self, canvas: &skia::Canvas, paragraph: &Paragraph, cx: f32, cy: f32, degrees: f32) {
        let w = paragraph.longest_line();
        let h = paragraph.height();
        canvas.save();
        canvas.translate((cx, cy));
        if degrees != 0.0 {
            canvas.rotate(degrees, None);
        }
        paragraph.paint(canvas, (-w * 0.5, -h * 0.5));
        canvas.restore();
    }
}
