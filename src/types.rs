//! Shared enums used across georaster.
//! `DataType` selects the output band type (`PixelType` ties it to a Rust element
//! type), `Compression` the GTiff codec.
use clap::ValueEnum;
use gdal::raster::GdalType;
use serde::{Deserialize, Serialize};

/// Output band data type
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    U8,
    U16,
    I16,
    U32,
    I32,
    F32,
    F64,
}

impl DataType {
    /// GDAL's name for the type, as reported by `gdalinfo`
    pub fn gdal_name(&self) -> &'static str {
        match self {
            DataType::U8 => "Byte",
            DataType::U16 => "UInt16",
            DataType::I16 => "Int16",
            DataType::U32 => "UInt32",
            DataType::I32 => "Int32",
            DataType::F32 => "Float32",
            DataType::F64 => "Float64",
        }
    }

    pub fn is_float(&self) -> bool {
        matches!(self, DataType::F32 | DataType::F64)
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.gdal_name())
    }
}

/// Rust element types that can back an output band
pub trait PixelType: GdalType + Copy {
    const DATA_TYPE: DataType;

    fn to_f64(self) -> f64;
}

macro_rules! pixel_type {
    ($($t:ty => $dt:ident),* $(,)?) => {
        $(impl PixelType for $t {
            const DATA_TYPE: DataType = DataType::$dt;

            fn to_f64(self) -> f64 {
                self as f64
            }
        })*
    };
}

pixel_type!(u8 => U8, u16 => U16, i16 => I16, u32 => U32, i32 => I32, f32 => F32, f64 => F64);

/// GTiff compression codec
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    None,
    Lzw,
    Deflate,
    Zstd,
    #[value(name = "packbits")]
    PackBits,
}

impl Compression {
    /// Value for the `COMPRESS` creation option, `None` when uncompressed
    pub fn creation_value(&self) -> Option<&'static str> {
        match self {
            Compression::None => None,
            Compression::Lzw => Some("LZW"),
            Compression::Deflate => Some("DEFLATE"),
            Compression::Zstd => Some("ZSTD"),
            Compression::PackBits => Some("PACKBITS"),
        }
    }
}

impl std::fmt::Display for Compression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.creation_value() {
            Some(v) => write!(f, "{}", v),
            None => write!(f, "NONE"),
        }
    }
}
