//! Core building blocks shared by the library API and the CLI.
//! Currently the write parameters consumed by the `api` module.
pub mod params;
