//! Writes the production display case scene to `<program name>.scad`.

use std::process::ExitCode;

use lcd_case::export::{output_path, write_scene};
use lcd_case::{CaseResult, Dimensions, Scene};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Failed to export display case");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CaseResult<()> {
    let scene = Scene::production(&Dimensions::default())?;
    write_scene(&scene, &output_path(env!("CARGO_BIN_NAME")))
}
