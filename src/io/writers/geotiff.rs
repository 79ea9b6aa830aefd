use gdal::cpl::CslStringList;
use gdal::raster::{RasterBand, StatisticsAll};
use gdal::{Dataset, Driver, Metadata};
use ndarray::{ArrayBase, Data, Ix2};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

use crate::core::params::WriteParams;
use crate::io::gdal::GdalError;
use crate::types::PixelType;

/// Geotransform GDAL reports for datasets without georeferencing
const DEFAULT_GEOTRANSFORM: [f64; 6] = [0.0, 1.0, 0.0, 0.0, 0.0, 1.0];

/// Band statistics as stored by GDAL (`STATISTICS_*` metadata items)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RasterStatistics {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std_dev: f64,
}

impl From<StatisticsAll> for RasterStatistics {
    fn from(s: StatisticsAll) -> Self {
        Self {
            min: s.min,
            max: s.max,
            mean: s.mean,
            std_dev: s.std_dev,
        }
    }
}

/// Create a one-band raster shaped and georeferenced like `reference` and fill it with `data`.
///
/// The band type is `T`. When `nodata` is given it is declared on the band before writing,
/// so the exact statistics computed at the end exclude it. The returned dataset is still
/// open; dropping it closes the file.
pub fn make_raster<T, S, P>(
    driver: &Driver,
    reference: &Dataset,
    path: P,
    data: &ArrayBase<S, Ix2>,
    nodata: Option<f64>,
) -> Result<Dataset, GdalError>
where
    T: PixelType,
    S: Data<Elem = T>,
    P: AsRef<Path>,
{
    let params = WriteParams {
        nodata,
        provenance: false,
        ..Default::default()
    };
    make_raster_with_params(driver, reference, path, data, &params)
}

/// Like [`make_raster`], additionally honouring creation options, approximate statistics
/// and provenance metadata from `params`. `params.data_type` is ignored, `T` decides the band
/// type and the creation options that depend on it.
pub fn make_raster_with_params<T, S, P>(
    driver: &Driver,
    reference: &Dataset,
    path: P,
    data: &ArrayBase<S, Ix2>,
    params: &WriteParams,
) -> Result<Dataset, GdalError>
where
    T: PixelType,
    S: Data<Elem = T>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let (cols, rows) = reference.raster_size();
    let (data_rows, data_cols) = data.dim();
    if (data_rows, data_cols) != (rows, cols) {
        return Err(GdalError::DimensionMismatch(cols, rows, data_cols, data_rows));
    }

    let creation_options = params.creation_options(T::DATA_TYPE);
    let mut options = CslStringList::new();
    for opt in &creation_options {
        options.add_string(opt)?;
    }
    debug!(
        "make_raster: creating {:?} ({}x{}, {}) with options {:?}",
        path,
        cols,
        rows,
        T::DATA_TYPE,
        creation_options
    );
    let mut ds = driver.create_with_band_type_with_options::<T, _>(path, cols, rows, 1, &options)?;

    ds.set_projection(&reference.projection())?;
    let gt = reference.geo_transform().unwrap_or(DEFAULT_GEOTRANSFORM);
    ds.set_geo_transform(&gt)?;

    if params.provenance {
        embed_provenance(&mut ds)?;
    }

    {
        let mut band = ds.rasterband(1)?;
        if let Some(nd) = params.nodata {
            band.set_no_data_value(Some(nd))?;
        }
        let mut buf = gdal::raster::Buffer::new((cols, rows), data.iter().copied().collect());
        band.write((0, 0), (cols, rows), &mut buf)?;
    }
    ds.flush_cache()?;

    if !has_valid_pixel(data, params.nodata) {
        return Err(GdalError::NoStatistics(1));
    }
    let stats = compute_statistics(&ds.rasterband(1)?, 1, params.approx_statistics)?;
    debug!("make_raster: band 1 statistics {:?}", stats);

    info!("make_raster: wrote {}x{} raster to {:?}", cols, rows, path);
    Ok(ds)
}

/// GDAL skips NaN and the no-data value when computing statistics
fn has_valid_pixel<T, S>(data: &ArrayBase<S, Ix2>, nodata: Option<f64>) -> bool
where
    T: PixelType,
    S: Data<Elem = T>,
{
    data.iter().any(|v| {
        let v = v.to_f64();
        !v.is_nan() && nodata.map_or(true, |nd| v != nd)
    })
}

/// Compute statistics and store them as band metadata
fn compute_statistics(
    band: &RasterBand,
    index: usize,
    approx_ok: bool,
) -> Result<RasterStatistics, GdalError> {
    band.get_statistics(true, approx_ok)?
        .map(RasterStatistics::from)
        .ok_or(GdalError::NoStatistics(index))
}

/// Query statistics of a band (1-based index). With `force` unset only statistics
/// already stored with the band are returned.
pub fn band_statistics(
    dataset: &Dataset,
    band_index: usize,
    force: bool,
    approx_ok: bool,
) -> Result<Option<RasterStatistics>, GdalError> {
    let band = dataset.rasterband(band_index)?;
    Ok(band
        .get_statistics(force, approx_ok)?
        .map(RasterStatistics::from))
}

fn embed_provenance(ds: &mut Dataset) -> Result<(), GdalError> {
    ds.set_metadata_item("CONVERSION_TOOL", env!("CARGO_PKG_NAME"), "")?;
    ds.set_metadata_item("CONVERSION_VERSION", env!("CARGO_PKG_VERSION"), "")?;
    ds.set_metadata_item(
        "CONVERSION_TIMESTAMP",
        &chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        "",
    )?;
    Ok(())
}
