//! Output writers: the one-band GeoTIFF writer and world file / `.prj` sidecars.
pub mod geotiff;
pub mod worldfile;

pub use geotiff::{RasterStatistics, band_statistics, make_raster, make_raster_with_params};
