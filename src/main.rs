use clap::Parser;
use tracing::info;

use nardi_portal::app;
use nardi_portal::cli::Args;
use nardi_portal::error::AppError;
use nardi_portal::logging;
use nardi_portal::ui;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Keep the guard alive until exit so buffered logs are flushed
    let (log_file_path, _guard) = logging::setup_logging(&args).await?;
    info!("Logging to {log_file_path}");

    if let Err(e) = app::run(args).await {
        let mut buffer = String::new();
        ui::push_error_line(&mut buffer, &e.to_string());
        ui::print_page(&buffer)?;
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }

    Ok(())
}
