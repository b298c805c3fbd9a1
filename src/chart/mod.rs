//! The 2x2 lunch statistics figure
//!
//! Charts are drawn into an in-memory SVG document. Raster output is made by
//! rasterizing that document, so nothing touches the filesystem until the
//! whole figure is complete.

pub mod bars;
pub mod palette;
pub mod pies;
pub mod raster;
pub mod timeline;

use crate::analysis::LunchStatistics;
use crate::error::Result;
use crate::table::write_output;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

/// Logical figure size in pixels
pub const FIGURE_SIZE: (u32, u32) = (1400, 1400);

pub(crate) const FONT: &str = "sans-serif";

pub type Area<'a> = DrawingArea<SVGBackend<'a>, Shift>;

/// Render the figure as an SVG document
pub fn render_svg(stats: &LunchStatistics) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, FIGURE_SIZE).into_drawing_area();
        root.fill(&WHITE)?;

        let cells = root.split_evenly((2, 2));
        bars::draw_place_distribution(&cells[0], stats)?;
        timeline::draw_occurrences(&cells[1], stats)?;
        pies::draw_weekday_pies(&cells[2], stats)?;
        pies::draw_month_pies(&cells[3], stats)?;

        root.present()?;
    }
    Ok(svg)
}

/// Render the figure and write it to `path`
///
/// `.svg` paths get the SVG document; anything else is written as PNG
/// at `scale` times the logical size.
pub fn save_figure(stats: &LunchStatistics, path: &Path, scale: f32) -> Result<()> {
    let svg = render_svg(stats)?;

    let bytes = if is_svg_path(path) {
        svg.into_bytes()
    } else {
        if !is_png_path(path) {
            log::warn!("{} does not end in .png, writing PNG data anyway", path.display());
        }
        raster::svg_to_png(&svg, scale)?
    };

    write_output(path, &bytes)
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case(ext))
        .unwrap_or(false)
}

pub fn is_svg_path(path: &Path) -> bool {
    has_extension(path, "svg")
}

fn is_png_path(path: &Path) -> bool {
    has_extension(path, "png")
}

/// Vertical position of the row for a ranked place; rank 0 is the top row
pub fn row_position(rank: usize, rows: usize) -> f64 {
    rows.saturating_sub(rank + 1) as f64
}

/// Pixel width reserved for row labels of the given names
pub(crate) fn label_area_width<'a, I>(names: I) -> u32
where
    I: IntoIterator<Item = &'a str>,
{
    let longest = names.into_iter().map(|n| n.chars().count()).max().unwrap_or(0);
    (longest as u32 * 7 + 16).clamp(40, 260)
}

/// Draw right-aligned row labels ending at the given backend coordinates
pub(crate) fn draw_row_labels(area: &Area, anchors: &[(i32, i32)], names: &[&str]) -> Result<()> {
    let (base_x, base_y) = area.get_base_pixel();
    let style = TextStyle::from((FONT, 13).into_font())
        .color(&BLACK)
        .pos(Pos::new(HPos::Right, VPos::Center));

    for ((x, y), name) in anchors.iter().zip(names) {
        area.draw(&Text::new(
            name.to_string(),
            (x - base_x - 6, y - base_y),
            style.clone(),
        ))?;
    }
    Ok(())
}
