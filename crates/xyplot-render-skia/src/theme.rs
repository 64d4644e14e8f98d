// File: crates/xyplot-render-skia/src/theme.rs
// Summary: Light/Dark theming for plot rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    /// Surface behind labels and titles.
    pub background: skia::Color,
    /// Fill of the plot area inside the frame.
    pub plot_background: skia::Color,
    /// Frame and tic marks.
    pub frame: skia::Color,
    pub tic_label: skia::Color,
    /// Default color of title runs that carry none.
    pub title: skia::Color,
    pub legend_background: skia::Color,
    pub legend_border: skia::Color,
    pub selection: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            plot_background: skia::Color::from_argb(255, 255, 255, 255),
            frame: skia::Color::from_argb(255, 60, 60, 70),
            tic_label: skia::Color::from_argb(255, 20, 20, 30),
            title: skia::Color::from_argb(255, 0, 0, 0),
            legend_background: skia::Color::from_argb(230, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 180, 180, 190),
            selection: skia::Color::from_argb(255, 30, 120, 240),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            plot_background: skia::Color::from_argb(255, 28, 28, 32),
            frame: skia::Color::from_argb(255, 180, 180, 190),
            tic_label: skia::Color::from_argb(255, 235, 235, 245),
            title: skia::Color::from_argb(255, 245, 245, 250),
            legend_background: skia::Color::from_argb(220, 40, 40, 45),
            legend_border: skia::Color::from_argb(255, 90, 90, 100),
            selection: skia::Color::from_argb(255, 255, 230, 70),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
