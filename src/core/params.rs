use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::{Compression, DataType};

/// Write parameters suitable for config files and CLI presets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriteParams {
    pub data_type: DataType,
    /// No-data sentinel recorded on the output band
    pub nodata: Option<f64>,
    pub compression: Compression,
    /// Write a tiled GeoTIFF instead of strips
    pub tiled: bool,
    /// Allow GDAL to compute statistics from overviews or a subsample
    pub approx_statistics: bool,
    /// Also write `.tfw`/`.prj` sidecars next to the output
    pub world_file: bool,
    /// Stamp conversion tool, version and timestamp into dataset metadata
    pub provenance: bool,
}

impl Default for WriteParams {
    fn default() -> Self {
        Self {
            data_type: DataType::F32,
            nodata: None,
            compression: Compression::None,
            tiled: false,
            approx_statistics: false,
            world_file: false,
            provenance: true,
        }
    }
}

impl WriteParams {
    /// Load parameters from a JSON file; missing fields take their defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Reject a no-data value the output band type cannot hold exactly
    pub fn validate(&self) -> Result<()> {
        let Some(nodata) = self.nodata else {
            return Ok(());
        };
        let fits = match self.data_type {
            DataType::F64 => true,
            DataType::F32 => !nodata.is_finite() || nodata.abs() <= f32::MAX as f64,
            DataType::U8 => fits_integer(nodata, u8::MIN as f64, u8::MAX as f64),
            DataType::U16 => fits_integer(nodata, u16::MIN as f64, u16::MAX as f64),
            DataType::I16 => fits_integer(nodata, i16::MIN as f64, i16::MAX as f64),
            DataType::U32 => fits_integer(nodata, u32::MIN as f64, u32::MAX as f64),
            DataType::I32 => fits_integer(nodata, i32::MIN as f64, i32::MAX as f64),
        };
        if fits {
            Ok(())
        } else {
            Err(Error::InvalidArgument {
                arg: "nodata",
                value: format!("{} (output type {})", nodata, self.data_type),
            })
        }
    }

    /// GTiff creation options in `KEY=VALUE` form for a band of type `band_type`
    pub fn creation_options(&self, band_type: DataType) -> Vec<String> {
        let mut options = Vec::new();
        if let Some(codec) = self.compression.creation_value() {
            options.push(format!("COMPRESS={}", codec));
            if matches!(self.compression, Compression::Lzw | Compression::Deflate | Compression::Zstd) {
                // PREDICTOR=3 is only valid for floating point bands
                let predictor = if band_type.is_float() { 3 } else { 2 };
                options.push(format!("PREDICTOR={}", predictor));
            }
        }
        if self.tiled {
            options.push("TILED=YES".to_string());
        }
        options
    }
}

fn fits_integer(value: f64, lo: f64, hi: f64) -> bool {
    value.is_finite() && value.fract() == 0.0 && (lo..=hi).contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_produce_no_creation_options() {
        assert!(WriteParams::default().creation_options(DataType::F32).is_empty());
    }

    #[test]
    fn predictor_follows_band_type_not_configured_type() {
        let params = WriteParams {
            compression: Compression::Deflate,
            data_type: DataType::F32,
            tiled: true,
            ..Default::default()
        };
        assert_eq!(
            params.creation_options(DataType::I16),
            vec!["COMPRESS=DEFLATE", "PREDICTOR=2", "TILED=YES"]
        );

        let params = WriteParams {
            compression: Compression::Lzw,
            data_type: DataType::U16,
            ..Default::default()
        };
        assert_eq!(
            params.creation_options(DataType::F64),
            vec!["COMPRESS=LZW", "PREDICTOR=3"]
        );
        assert_eq!(
            params.creation_options(DataType::U16),
            vec!["COMPRESS=LZW", "PREDICTOR=2"]
        );

        let params = WriteParams {
            compression: Compression::PackBits,
            ..Default::default()
        };
        assert_eq!(params.creation_options(DataType::U8), vec!["COMPRESS=PACKBITS"]);
    }

    #[test]
    fn nodata_must_fit_the_band_type() {
        let check = |data_type, nodata| {
            WriteParams {
                data_type,
                nodata: Some(nodata),
                ..Default::default()
            }
            .validate()
        };
        assert!(check(DataType::U8, 255.0).is_ok());
        assert!(check(DataType::U8, -1.0).is_err());
        assert!(check(DataType::I16, -9999.0).is_ok());
        assert!(check(DataType::U16, 0.5).is_err());
        assert!(check(DataType::I32, f64::NAN).is_err());
        assert!(check(DataType::F32, f64::NAN).is_ok());
        assert!(check(DataType::F32, -9999.0).is_ok());
        assert!(check(DataType::F32, 1e300).is_err());
        assert!(check(DataType::F64, 1e300).is_ok());
        assert!(WriteParams::default().validate().is_ok());
    }

    #[test]
    fn partial_json_config_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"data_type": "u16", "nodata": 0}}"#).unwrap();

        let params = WriteParams::from_json_file(file.path()).unwrap();
        assert_eq!(params.data_type, DataType::U16);
        assert_eq!(params.nodata, Some(0.0));
        assert_eq!(params.compression, Compression::None);
        assert!(params.provenance);
    }

    #[test]
    fn malformed_json_config_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert!(matches!(
            WriteParams::from_json_file(file.path()),
            Err(crate::Error::Json(_))
        ));
    }
}
