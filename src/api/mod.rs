//! High-level, ergonomic library API: write an array (or a band of another raster)
//! as a one-band GeoTIFF georeferenced like a reference dataset. Prefer these
//! entrypoints over the low-level writers when the output is a file on disk.
use std::path::{Path, PathBuf};

use gdal::DriverManager;
use ndarray::{ArrayBase, Data, Ix2};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::params::WriteParams;
use crate::error::Result;
use crate::io::gdal::{GdalMetadata, GdalReader};
use crate::io::writers::geotiff::{RasterStatistics, band_statistics, make_raster_with_params};
use crate::io::writers::worldfile::{write_prj_file, write_world_file};
use crate::types::{DataType, PixelType};

/// Summary of a written raster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WriteReport {
    pub output: PathBuf,
    pub width: usize,
    pub height: usize,
    pub data_type: DataType,
    pub nodata: Option<f64>,
    pub statistics: Option<RasterStatistics>,
    /// Sidecar files written next to the output
    pub sidecars: Vec<PathBuf>,
}

/// Write `data` to `output` as a one-band GeoTIFF with the size, projection and
/// geotransform of the raster at `reference`. The band type follows the element
/// type `T`, overriding `params.data_type`.
pub fn write_array_like<T, S>(
    reference: &Path,
    output: &Path,
    data: &ArrayBase<S, Ix2>,
    params: &WriteParams,
) -> Result<WriteReport>
where
    T: PixelType,
    S: Data<Elem = T>,
{
    let params = WriteParams {
        data_type: T::DATA_TYPE,
        ..params.clone()
    };
    params.validate()?;
    let reference = GdalReader::open(reference)?;
    write_with_reference(&reference, output, data, &params)
}

/// Read band `band` (1-based) of `input` as `params.data_type` and write it to `output`
/// georeferenced like `reference`.
pub fn convert_band_like(
    input: &Path,
    band: usize,
    reference: &Path,
    output: &Path,
    params: &WriteParams,
) -> Result<WriteReport> {
    params.validate()?;
    let source = GdalReader::open(input)?;
    let reference = GdalReader::open(reference)?;
    info!(
        "Converting band {} of {:?} to {} using reference {}x{} ({})",
        band,
        input,
        params.data_type,
        reference.metadata.size_x,
        reference.metadata.size_y,
        reference.metadata.epsg().as_deref().unwrap_or("no EPSG code"),
    );
    if params.nodata.is_none() {
        if let Some(nd) = source.no_data_value(band)? {
            warn!(
                "Input band {} declares no-data {} but none was requested for the output",
                band, nd
            );
        }
    }

    match params.data_type {
        DataType::U8 => convert_as::<u8>(&source, band, &reference, output, params),
        DataType::U16 => convert_as::<u16>(&source, band, &reference, output, params),
        DataType::I16 => convert_as::<i16>(&source, band, &reference, output, params),
        DataType::U32 => convert_as::<u32>(&source, band, &reference, output, params),
        DataType::I32 => convert_as::<i32>(&source, band, &reference, output, params),
        DataType::F32 => convert_as::<f32>(&source, band, &reference, output, params),
        DataType::F64 => convert_as::<f64>(&source, band, &reference, output, params),
    }
}

fn convert_as<T: PixelType>(
    source: &GdalReader,
    band: usize,
    reference: &GdalReader,
    output: &Path,
    params: &WriteParams,
) -> Result<WriteReport> {
    let data = source.read_band_as::<T>(band)?;
    write_with_reference(reference, output, &data, params)
}

fn write_with_reference<T, S>(
    reference: &GdalReader,
    output: &Path,
    data: &ArrayBase<S, Ix2>,
    params: &WriteParams,
) -> Result<WriteReport>
where
    T: PixelType,
    S: Data<Elem = T>,
{
    let driver = DriverManager::get_driver_by_name("GTiff")?;
    let ds = make_raster_with_params(&driver, &reference.dataset, output, data, params)?;
    let statistics = band_statistics(&ds, 1, false, true)?;
    let nodata = ds.rasterband(1)?.no_data_value();
    let written = GdalMetadata::from_dataset(&ds);
    // closes the file
    drop(ds);

    let mut sidecars = Vec::new();
    if params.world_file {
        if let Some(gt) = written.geotransform {
            sidecars.push(write_world_file(output, &gt)?);
        } else {
            warn!("Reference has no geotransform, skipping world file for {:?}", output);
        }
        if !written.projection.is_empty() {
            sidecars.push(write_prj_file(output, &written.projection)?);
        }
    }

    Ok(WriteReport {
        output: output.to_path_buf(),
        width: written.size_x,
        height: written.size_y,
        data_type: T::DATA_TYPE,
        nodata,
        statistics,
        sidecars,
    })
}
