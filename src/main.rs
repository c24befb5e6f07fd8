use std::process::ExitCode;

use clap::Parser;
use tower::Service;
use tracing::{error, info};

use gmaps_etl::cli::Cli;
use gmaps_etl::{logging, EtlService, PipelineConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // ガードは終了まで保持する
    let (log_path, _guard) = match logging::init_logging(cli.log_level.as_filter(), &cli.log_dir) {
        Ok(initialized) => initialized,
        Err(e) => {
            eprintln!("Failed to initialize logging in {:?}: {}", cli.log_dir, e);
            return ExitCode::FAILURE;
        }
    };
    info!("Logging to {:?}", log_path);

    let config = PipelineConfig::from(&cli);
    let mut service = EtlService::new();

    match service.call(config).await {
        Ok(report) => {
            info!(
                "Saved {} listings to {:?} and {:?}",
                report.loaded, report.files.csv_path, report.files.json_path
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("ETL pipeline failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
