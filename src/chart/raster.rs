use crate::error::{Result, StatsError};
use resvg::usvg::fontdb;
use resvg::{tiny_skia, usvg};

/// Families tried, in order, for the generic "sans-serif" font
const SANS_SERIF_CANDIDATES: &[&str] = &[
    "DejaVu Sans",
    "Liberation Sans",
    "Arial",
    "Helvetica",
    "Noto Sans",
];

fn render_error<E: std::fmt::Display>(err: E) -> StatsError {
    StatsError::Render(err.to_string())
}

/// Point the generic sans-serif family at a font that is installed
fn choose_sans_serif(db: &mut fontdb::Database) {
    let installed: Vec<String> = db
        .faces()
        .flat_map(|face| face.families.iter().map(|(name, _)| name.clone()))
        .collect();

    let family = SANS_SERIF_CANDIDATES
        .iter()
        .map(|name| name.to_string())
        .find(|name| installed.contains(name))
        .or_else(|| installed.first().cloned());

    match family {
        Some(family) => {
            log::debug!("Using font family {} for chart text", family);
            db.set_sans_serif_family(family);
        }
        None => log::warn!("No system fonts found, chart text will be missing"),
    }
}

/// Rasterize an SVG document to PNG bytes
pub fn svg_to_png(svg: &str, scale: f32) -> Result<Vec<u8>> {
    if !(scale.is_finite() && scale > 0.0) {
        return Err(StatsError::Render(format!("Invalid scale factor: {}", scale)));
    }

    let mut options = usvg::Options::default();
    let db = options.fontdb_mut();
    db.load_system_fonts();
    choose_sans_serif(db);

    let tree = usvg::Tree::from_str(svg, &options).map_err(render_error)?;
    let size = tree.size();
    let width = (size.width() * scale).round() as u32;
    let height = (size.height() * scale).round() as u32;

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| StatsError::Render(format!("Cannot allocate {}x{} image", width, height)))?;
    pixmap.fill(tiny_skia::Color::WHITE);
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    pixmap.encode_png().map_err(render_error)
}
