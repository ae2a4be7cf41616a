use hilo::{
    AppConfig, AppError, AssetCatalog, HiLoApp, InMemoryPlayerRepository, PlayerRepository,
    SqlitePlayerRepository, TracingAudioSink,
};
use std::process::ExitCode;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Logs go to stderr so they do not interleave with the game on stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hilo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Hi-Lo exited with an error");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), AppError> {
    let config = AppConfig::from_env();
    info!(?config, "Starting Hi-Lo");

    let repository: Arc<dyn PlayerRepository> = if config.in_memory {
        Arc::new(InMemoryPlayerRepository::new())
    } else {
        Arc::new(SqlitePlayerRepository::open(&config.database_path).await?)
    };

    let assets = AssetCatalog::load(&config.assets_dir);
    let mut app = HiLoApp::new(repository, Arc::new(TracingAudioSink::new()), assets);
    app.start();

    hilo::ui::run(
        &mut app,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await
}
