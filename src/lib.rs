#![doc = r#"
georaster — write in-memory arrays to one-band GeoTIFFs georeferenced like an existing dataset.

The core operation takes a reference dataset, an `ndarray` 2-D array and an optional
no-data value, and produces a GeoTIFF with the reference's size, projection and
geotransform, the array as its single band, and band statistics computed and embedded.
It powers the `georaster` CLI and can be embedded in your own Rust applications.

Requirements
------------
- GDAL development headers and runtime available on your system.
- Rust 2024 edition toolchain.

Low-level: the literal operation
--------------------------------
```rust,no_run
use gdal::{Dataset, DriverManager};
use ndarray::Array2;
use georaster::make_raster;

fn main() -> georaster::Result<()> {
    let reference = Dataset::open("/data/dem.tif")?;
    let (cols, rows) = reference.raster_size();
    let slope = Array2::<f32>::zeros((rows, cols));

    let driver = DriverManager::get_driver_by_name("GTiff")?;
    let ds = make_raster(&driver, &reference, "/out/slope.tif", &slope, Some(-9999.0))?;
    drop(ds); // closes the file
    Ok(())
}
```

High-level: paths in, report out
--------------------------------
```rust,no_run
use std::path::Path;
use ndarray::Array2;
use georaster::{write_array_like, Compression, WriteParams};

fn main() -> georaster::Result<()> {
    let data = Array2::<u16>::zeros((512, 512));
    let params = WriteParams {
        nodata: Some(0.0),
        compression: Compression::Deflate,
        ..Default::default()
    };
    let report = write_array_like(Path::new("/data/ref.tif"), Path::new("/out/a.tif"), &data, &params)?;
    println!("{:?}", report.statistics);
    Ok(())
}
```

Error handling
--------------
All high-level functions return `georaster::Result<T>`; match on `georaster::Error`
to handle specific cases. The low-level writers return `io::GdalError`.

Useful modules
--------------
- [`api`] — high-level, path-based entry points.
- [`io`] — the GDAL reader and the GeoTIFF / world file writers.
- [`core`] — `WriteParams` configuration.
- [`types`] — `DataType`, `PixelType`, `Compression`.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::params::WriteParams;
pub use error::{Error, Result};
pub use types::{Compression, DataType, PixelType};

pub use io::gdal::{GdalError, GdalMetadata, GdalReader};
pub use io::writers::geotiff::{
    RasterStatistics, band_statistics, make_raster, make_raster_with_params,
};
pub use io::writers::worldfile::{write_prj_file, write_world_file};

pub use api::{WriteReport, convert_band_like, write_array_like};
