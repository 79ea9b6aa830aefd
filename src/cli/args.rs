use clap::Parser;
use std::path::PathBuf;

use georaster::{Compression, DataType};

#[derive(Parser, Debug)]
#[command(name = "georaster", version, about = "Write a raster band as a one-band GeoTIFF georeferenced like a reference dataset")]
pub struct CliArgs {
    /// Input raster holding the pixel values
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Band of the input raster to write (1-based)
    #[arg(short, long, default_value_t = 1)]
    pub band: usize,

    /// Reference dataset to copy size, projection and geotransform from (defaults to the input)
    #[arg(short, long)]
    pub reference: Option<PathBuf>,

    /// Output GeoTIFF filename
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// JSON file with write parameters; flags below override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output band data type
    #[arg(short = 't', long, value_enum)]
    pub data_type: Option<DataType>,

    /// No-data value to declare on the output band
    #[arg(long, allow_hyphen_values = true)]
    pub nodata: Option<f64>,

    /// Compression codec
    #[arg(long, value_enum)]
    pub compress: Option<Compression>,

    /// Write a tiled GeoTIFF
    #[arg(long, default_value_t = false)]
    pub tiled: bool,

    /// Accept approximate statistics
    #[arg(long, default_value_t = false)]
    pub approx_stats: bool,

    /// Also write .tfw and .prj sidecar files
    #[arg(long, default_value_t = false)]
    pub world_file: bool,

    /// Do not stamp conversion tool, version and timestamp into the output metadata
    #[arg(long, default_value_t = false)]
    pub no_provenance: bool,

    /// Write a JSON report (size, type, no-data, statistics) to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
