use std::path::{Path, PathBuf};
use tracing::debug;

/// Sidecar extension for an image: `tfw` for TIFF, `<first letter>w` otherwise, `wld` without extension
fn world_extension(image: &Path) -> String {
    let ext = image
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    match ext.as_str() {
        "tif" | "tiff" => "tfw".to_string(),
        "jpg" | "jpeg" => "jgw".to_string(),
        "png" => "pgw".to_string(),
        "" => "wld".to_string(),
        other => other.chars().take(1).chain(std::iter::once('w')).collect(),
    }
}

/// World file lines (A, D, B, E, C, F) for a GDAL geotransform.
/// C and F refer to the centre of the upper-left pixel.
fn world_file_contents(gt: &[f64; 6]) -> String {
    let (a, b, d, e) = (gt[1], gt[2], gt[4], gt[5]);
    let c = gt[0] + 0.5 * a + 0.5 * b;
    let f = gt[3] + 0.5 * d + 0.5 * e;
    [a, d, b, e, c, f]
        .iter()
        .map(|v| format!("{:.12}\n", v))
        .collect()
}

/// Write a world file next to `image`; returns the sidecar path
pub fn write_world_file(image: &Path, geotransform: &[f64; 6]) -> std::io::Result<PathBuf> {
    let path = image.with_extension(world_extension(image));
    std::fs::write(&path, world_file_contents(geotransform))?;
    debug!("Wrote world file {:?}", path);
    Ok(path)
}

/// Write a `.prj` file holding `projection` (WKT) next to `image`; returns the sidecar path
pub fn write_prj_file(image: &Path, projection: &str) -> std::io::Result<PathBuf> {
    let path = image.with_extension("prj");
    std::fs::write(&path, projection.as_bytes())?;
    debug!("Wrote projection file {:?}", path);
    Ok(path)
}
