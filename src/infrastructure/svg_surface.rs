// SVG rendering surface - materializes draw commands as one file per gauge
use crate::application::render_surface::RenderSurface;
use crate::domain::render::{DrawCommand, FontWeight, RingGeometry};
use anyhow::Context;
use std::collections::HashSet;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

/// Writes each gauge face as `<out_dir>/<id>.svg`. The set of known target
/// ids is fixed at construction; drawing to any other id is rejected, the
/// same way a missing canvas element would be.
pub struct SvgSurface {
    out_dir: PathBuf,
    geometry: RingGeometry,
    targets: HashSet<String>,
}

impl SvgSurface {
    pub fn new<I, S>(out_dir: impl Into<PathBuf>, geometry: RingGeometry, targets: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let out_dir = out_dir.into();
        fs::create_dir_all(&out_dir)
            .with_context(|| format!("failed to create output directory {}", out_dir.display()))?;
        Ok(Self {
            out_dir,
            geometry,
            targets: targets.into_iter().map(Into::into).collect(),
        })
    }

    fn render_document(&self, commands: &[DrawCommand]) -> String {
        let width = self.geometry.width;
        let height = self.geometry.height;

        let mut svg = String::new();
        let _ = writeln!(
            svg,
            "<svg xmlns='http://www.w3.org/2000/svg' width='{width:.0}' height='{height:.0}' viewBox='0 0 {width:.0} {height:.0}' role='img'>"
        );
        for command in commands {
            match command {
                DrawCommand::ArcSlice {
                    center_x,
                    center_y,
                    outer_radius,
                    inner_radius,
                    start_deg,
                    sweep_deg,
                    color,
                } => {
                    let _ = writeln!(
                        svg,
                        "  <path d='{}' fill='{color}'/>",
                        slice_path(
                            *center_x,
                            *center_y,
                            *outer_radius,
                            *inner_radius,
                            *start_deg,
                            *sweep_deg
                        )
                    );
                }
                DrawCommand::Text {
                    x,
                    y,
                    size_px,
                    weight,
                    color,
                    content,
                } => {
                    let weight = match weight {
                        FontWeight::Bold => "bold",
                        FontWeight::Normal => "normal",
                    };
                    let _ = writeln!(
                        svg,
                        "  <text x='{x:.2}' y='{y:.2}' fill='{color}' font-family='Arial' font-size='{size_px:.0}' font-weight='{weight}' text-anchor='middle' dominant-baseline='middle'>{}</text>",
                        escape_text(content)
                    );
                }
            }
        }
        svg.push_str("</svg>\n");
        svg
    }
}

impl RenderSurface for SvgSurface {
    fn has_target(&self, id: &str) -> bool {
        self.targets.contains(id)
    }

    fn draw(&self, id: &str, commands: &[DrawCommand]) -> anyhow::Result<()> {
        if !self.has_target(id) {
            anyhow::bail!("unknown gauge target '{id}'");
        }
        let path = self.out_dir.join(format!("{id}.svg"));
        fs::write(&path, self.render_document(commands))
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}

/// A point on the circle at `deg` degrees clockwise from 12 o'clock.
fn point_at(cx: f64, cy: f64, radius: f64, deg: f64) -> (f64, f64) {
    let rad = deg.to_radians();
    (cx + radius * rad.sin(), cy - radius * rad.cos())
}

fn slice_path(cx: f64, cy: f64, outer: f64, inner: f64, start_deg: f64, sweep_deg: f64) -> String {
    let end_deg = start_deg + sweep_deg;
    let large = i32::from(sweep_deg > 180.0);

    let (ox0, oy0) = point_at(cx, cy, outer, start_deg);
    let (ox1, oy1) = point_at(cx, cy, outer, end_deg);
    let (ix1, iy1) = point_at(cx, cy, inner, end_deg);
    let (ix0, iy0) = point_at(cx, cy, inner, start_deg);

    format!(
        "M {ox0:.2} {oy0:.2} A {outer:.2} {outer:.2} 0 {large} 1 {ox1:.2} {oy1:.2} \
         L {ix1:.2} {iy1:.2} A {inner:.2} {inner:.2} 0 {large} 0 {ix0:.2} {iy0:.2} Z"
    )
}

fn escape_text(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
