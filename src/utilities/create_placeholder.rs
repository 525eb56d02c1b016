use std::path::Path;

use anyhow::{Context, Result};

use crate::extractors::QueryDescriptor;

const PLACEHOLDER_CAPTION: &str = "Product Image";

/// Renders the placeholder SVG for the given size.
pub fn placeholder_svg(width: i64, height: i64) -> String {
    let inner_width = (width - 20).max(0);
    let inner_height = (height - 20).max(0);

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">
  <rect width="100%" height="100%" fill="#f3f4f6"/>
  <rect x="10" y="10" width="{inner_width}" height="{inner_height}" fill="#e5e7eb" stroke="#d1d5db" stroke-width="2"/>
  <text x="50%" y="45%" text-anchor="middle" font-family="Arial, sans-serif" font-size="14" fill="#6b7280">{PLACEHOLDER_CAPTION}</text>
  <text x="50%" y="60%" text-anchor="middle" font-family="Arial, sans-serif" font-size="12" fill="#9ca3af">{width}x{height}</text>
</svg>"##
    )
}

/// Name of the placeholder written in place of a raster `filename`.
pub fn placeholder_filename(filename: &str) -> String {
    filename.replace(".jpg", ".svg")
}

/// Writes an SVG placeholder for `filename` into `images_dir` and returns the
/// placeholder's filename.
pub async fn create_placeholder(
    images_dir: &Path,
    filename: &str,
    descriptor: &QueryDescriptor,
) -> Result<String> {
    let (width, height) = descriptor.dimensions()?;
    let svg_filename = placeholder_filename(filename);
    let file_path = images_dir.join(&svg_filename);

    tokio::fs::write(&file_path, placeholder_svg(width, height))
        .await
        .with_context(|| format!("Failed to write placeholder {}", file_path.display()))?;

    Ok(svg_filename)
}
