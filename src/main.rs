use std::process::ExitCode;

use recursive_spheres_lib::{batch, config::GeneratorConfig};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match batch::run_batch(&GeneratorConfig::default()) {
        Ok(report) => {
            tracing::info!(
                files = report.outputs.len(),
                bytes = report.total_bytes(),
                "scene batch complete"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
