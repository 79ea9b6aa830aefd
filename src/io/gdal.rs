use gdal::raster::GdalType;
use gdal::{Dataset, Metadata, errors::GdalError as GdalCrateError};
use ndarray::Array2;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::io::writers::geotiff::{RasterStatistics, band_statistics};

/// Errors encountered when reading or writing through GDAL
#[derive(Debug, Error)]
pub enum GdalError {
    #[error("GDAL error: {0}")]
    Gdal(#[from] GdalCrateError),
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("Dimension mismatch: expected {0}x{1}, got {2}x{3}")]
    DimensionMismatch(usize, usize, usize, usize),
    #[error("Band index {index} out of range (dataset has {bands} band(s))")]
    BandOutOfRange { index: usize, bands: usize },
    #[error("No statistics available for band {0} (no valid pixels)")]
    NoStatistics(usize),
}

/// Spatial reference and layout of a GDAL-supported dataset
#[derive(Debug, Clone)]
pub struct GdalMetadata {
    /// Width (pixels) of the raster
    pub size_x: usize,
    /// Height (lines) of the raster
    pub size_y: usize,
    /// Number of raster bands
    pub bands: usize,
    /// Affine geotransform coefficients ([origin_x, pixel_width, rot_x, origin_y, rot_y, pixel_height])
    pub geotransform: Option<[f64; 6]>,
    /// Projection in WKT format, verbatim from the dataset
    pub projection: String,
    /// Dataset metadata key-value pairs (default domain)
    pub metadata: HashMap<String, String>,
}

impl GdalMetadata {
    /// Collect size, georeferencing and default-domain metadata from an open dataset
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let (size_x, size_y) = dataset.raster_size();
        let mut metadata = HashMap::new();
        if let Some(entries) = dataset.metadata_domain("") {
            for entry in entries {
                if let Some((key, val)) = entry.split_once('=') {
                    metadata.insert(key.to_string(), val.to_string());
                }
            }
        }
        GdalMetadata {
            size_x,
            size_y,
            bands: dataset.raster_count() as usize,
            geotransform: dataset.geo_transform().ok(),
            projection: dataset.projection(),
            metadata,
        }
    }

    /// EPSG code from the WKT authority tag, e.g. `EPSG:32633`
    pub fn epsg(&self) -> Option<String> {
        parse_epsg(&self.projection)
    }
}

// Helper to extract EPSG code from the outermost WKT authority tag
fn parse_epsg(wkt: &str) -> Option<String> {
    if let Some(code) = wkt.strip_prefix("EPSG:") {
        return Some(format!("EPSG:{}", code));
    }
    const KEYS: [&str; 2] = ["AUTHORITY[\"EPSG\",\"", "ID[\"EPSG\","];
    KEYS.iter()
        .filter_map(|key| wkt.rfind(key).map(|idx| idx + key.len()))
        .max()
        .and_then(|start| {
            let code: String = wkt[start..]
                .chars()
                .take_while(|c| c.is_ascii_digit())
                .collect();
            (!code.is_empty()).then(|| format!("EPSG:{}", code))
        })
}

/// Reader for any GDAL-supported raster (GeoTIFF, NetCDF, HDF5, ENVI, ...)
pub struct GdalReader {
    pub dataset: Dataset,
    pub metadata: GdalMetadata,
}

impl GdalReader {
    /// Open a dataset that has at least one raster band
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, GdalError> {
        let dataset = Dataset::open(path.as_ref())?;
        let metadata = GdalMetadata::from_dataset(&dataset);
        if metadata.bands == 0 {
            return Err(GdalError::UnsupportedFormat("No raster bands found".into()));
        }
        Ok(GdalReader { dataset, metadata })
    }

    fn check_band(&self, index: usize) -> Result<(), GdalError> {
        if index == 0 || index > self.metadata.bands {
            return Err(GdalError::BandOutOfRange {
                index,
                bands: self.metadata.bands,
            });
        }
        Ok(())
    }

    /// Read a single band (1-based index) as an ndarray of shape (height, width).
    /// GDAL converts the stored pixel type to `T`.
    pub fn read_band_as<T: GdalType + Copy>(&self, index: usize) -> Result<Array2<T>, GdalError> {
        self.check_band(index)?;
        let band = self.dataset.rasterband(index)?;
        let window = (self.metadata.size_x, self.metadata.size_y);
        let buf = band.read_as::<T>((0, 0), window, window, None)?;
        let data_vec = buf.data().to_vec();
        let got = data_vec.len();
        Array2::from_shape_vec((self.metadata.size_y, self.metadata.size_x), data_vec).map_err(
            |_| {
                GdalError::UnsupportedFormat(format!(
                    "band {} returned {} pixels for a {}x{} raster",
                    index, got, self.metadata.size_x, self.metadata.size_y
                ))
            },
        )
    }

    /// Read a single band (1-based index) as f64
    pub fn read_band(&self, index: usize) -> Result<Array2<f64>, GdalError> {
        self.read_band_as::<f64>(index)
    }

    /// No-data value declared on a band, if any
    pub fn no_data_value(&self, index: usize) -> Result<Option<f64>, GdalError> {
        self.check_band(index)?;
        Ok(self.dataset.rasterband(index)?.no_data_value())
    }

    /// Statistics stored with the band; `None` if they were never computed
    pub fn band_statistics(&self, index: usize) -> Result<Option<RasterStatistics>, GdalError> {
        self.check_band(index)?;
        band_statistics(&self.dataset, index, false, true)
    }
}
