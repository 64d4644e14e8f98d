// File: crates/xyplot-demo/src/main.rs
// Summary: Demo builds the sample gaussian/sine plot (optionally with CSV points), stores it and renders a PNG.

use anyhow::{Context, Result};
use std::f64::consts::PI;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use xyplot_core::{
    Argb, AxisKey, AxisParameters, FileStore, LineStyle, PlotData, PlotLine, PlotPoint, PlotSettings, PointShape,
    StyledText, Symbol,
};
use xyplot_render_skia::{PlotRenderer, RenderOptions};

const PLOT_NAME: &str = "Graph 1";

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Usage: xyplot-demo [csv-path] [out-dir]
    let csv_path = std::env::args().nth(1).filter(|a| !a.is_empty());
    let out_dir = PathBuf::from(std::env::args().nth(2).unwrap_or_else(|| "target/out".to_string()));

    let mut data = sample_plot().with_name(PLOT_NAME);
    if let Some(raw) = csv_path {
        let path = Path::new(&raw);
        let points = load_xy_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
        info!("loaded {} points from {}", points.len(), path.display());
        if points.is_empty() {
            anyhow::bail!("no points loaded; expected two numeric columns x,y");
        }
        data.add_line(PlotLine::from_points(points).with_color(Argb::GREEN).with_legend(stem(path)));
    }
    data.axes_scale();

    let mut store = FileStore::new(&out_dir);
    if !data.save_to(&mut store) {
        warn!("plot was not saved to {}", out_dir.display());
    }
    let reloaded = data.load_from(&store, PLOT_NAME);
    if reloaded != data {
        warn!("reloaded plot differs from the one saved");
    }

    let out_png = out_dir.join("xyplot_demo.png");
    PlotRenderer::new()
        .render_to_png(&reloaded, &RenderOptions::default(), &out_png)
        .with_context(|| format!("rendering {}", out_png.display()))?;
    info!("wrote {}", out_png.display());
    Ok(())
}

/// Gaussian bump on the primary axis and a dashed sine on the secondary axis.
fn sample_plot() -> PlotData {
    let mut gauss = PlotLine::new()
        .with_color(Argb::RED)
        .with_marker(
            PointShape::new(Symbol::Polygon { sides: 4, open: true, corner_start: false })
                .with_angle_degrees(45.0)
                .with_color(Argb::RED),
        )
        .with_legend("gaussian");
    let mut sine = PlotLine::new()
        .with_color(Argb::BLUE)
        .with_style(LineStyle::dashed(2.0, vec![15.0, 5.0]))
        .on_secondary(true)
        .with_legend("sine");

    for i in 0..=100 {
        let x = i as f64 * 0.03;
        gauss.append((x, 2.9 * (-(x - 1.0) * (x - 1.0) * 16.0).exp()));
        sine.append((x, 0.3 * ((x * PI).sin() + 1.0)));
    }

    let settings = PlotSettings::new()
        .with_title(StyledText::from_markdown("# **Also a very very long plot title**"))
        .with_axis(AxisKey::X, AxisParameters::default().with_title(StyledText::from_markdown("## Much Longer Horizontal Axis Title")))
        .with_axis(AxisKey::Y, AxisParameters::default().with_title(StyledText::from_markdown("## Incredibly Long Vertical Axis Title")))
        .with_axis(
            AxisKey::Secondary,
            AxisParameters::default().with_title(StyledText::from_markdown("### Smaller Font Secondary Axis Title")),
        )
        .with_secondary(true, false);

    PlotData::new(vec![gauss, sine], settings)
}

/// Load `x,y` rows; a header row and unparsable rows are skipped.
fn load_xy_csv(path: &Path) -> Result<Vec<PlotPoint>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let parse = |i: usize| rec.get(i).and_then(|s| s.trim().parse::<f64>().ok());
        if let (Some(x), Some(y)) = (parse(0), parse(1)) {
            out.push(PlotPoint::new(x, y));
        }
    }
    Ok(out)
}

fn stem(path: &Path) -> String {
    path.file_stem().and_then(|s| s.to_str()).unwrap_or("csv").to_string()
}
