//! I/O layer over GDAL: the `gdal` reader for reference and input rasters,
//! and `writers` for the one-band GeoTIFF output and its sidecars.
pub mod gdal;
pub use self::gdal::{GdalError, GdalMetadata, GdalReader};

pub mod writers;
