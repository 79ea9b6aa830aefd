use tracing::info;
use tracing_subscriber::EnvFilter;

use georaster::{WriteParams, convert_band_like};

use super::args::CliArgs;
use super::errors::AppError;

/// Merge the optional config file with command line overrides
fn resolve_params(args: &CliArgs) -> Result<WriteParams, AppError> {
    let mut params = match &args.config {
        Some(path) => {
            info!("Loading write parameters from {:?}", path);
            WriteParams::from_json_file(path)?
        }
        None => WriteParams::default(),
    };
    if let Some(data_type) = args.data_type {
        params.data_type = data_type;
    }
    if args.nodata.is_some() {
        params.nodata = args.nodata;
    }
    if let Some(compression) = args.compress {
        params.compression = compression;
    }
    params.tiled |= args.tiled;
    params.approx_statistics |= args.approx_stats;
    params.world_file |= args.world_file;
    if args.no_provenance {
        params.provenance = false;
    }
    Ok(params)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .init();
    }

    let input = args.input.clone().ok_or(AppError::MissingArgument {
        arg: "--input".to_string(),
    })?;
    let output = args.output.clone().ok_or(AppError::MissingArgument {
        arg: "--output".to_string(),
    })?;
    if args.band == 0 {
        return Err(AppError::ZeroBand { band: args.band }.into());
    }
    let reference = args.reference.clone().unwrap_or_else(|| input.clone());
    let params = resolve_params(&args)?;

    let report = convert_band_like(&input, args.band, &reference, &output, &params)
        .map_err(AppError::from)?;

    match &report.statistics {
        Some(s) => info!(
            "Statistics: min={} max={} mean={} std_dev={}",
            s.min, s.max, s.mean, s.std_dev
        ),
        None => info!("No statistics stored for {:?}", output),
    }
    if let Some(path) = &args.report {
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(path, json).map_err(AppError::from)?;
        info!("Wrote report {:?}", path);
    }
    info!("Successfully processed: {:?} -> {:?}", input, output);
    Ok(())
}
