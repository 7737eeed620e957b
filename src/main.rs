use std::path::PathBuf;

use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use summenbaum::config;
use summenbaum::fs::FsNode;
use summenbaum::sizer::Sizer;

/// Summiert Dateigrößen eines Verzeichnisbaums.
#[derive(Debug, Parser)]
#[command(name = "summenbaum", version, about)]
struct Cli {
    /// Root directory to size (defaults to the current directory)
    path: Option<PathBuf>,

    /// Worker budget override (defaults to sizer.max_workers from config)
    #[arg(long)]
    workers: Option<usize>,

    /// Emit the summary as JSON instead of plain text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (stdout_nb, stdout_guard) = tracing_appender::non_blocking(std::io::stdout());
    let env_filter =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(stdout_nb))
        .init();
    // Guard am Leben halten, damit der Non-Blocking Writer korrekt flusht
    let _log_guard = stdout_guard;

    // Load configuration (embedded defaults -> summenbaum.toml -> env/.env)
    let app_cfg = config::load()?;
    let cli = Cli::parse();

    let root = cli.path.unwrap_or_else(|| PathBuf::from("."));
    if !root.is_dir() {
        return Err(anyhow::anyhow!("not a directory: {}", root.display()));
    }
    let workers = cli.workers.unwrap_or(app_cfg.sizer.max_workers);

    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Cancellation signal received. Stopping traversal...");
                cancel.cancel();
            }
        });
    }

    let sizer = Sizer::with_max_workers(workers);
    info!(root = %root.display(), workers = sizer.max_workers(), "sizing directory tree");

    let started = std::time::Instant::now();
    let summary = sizer.size(cancel.clone(), FsNode::root(&root)).await?;

    if cancel.is_cancelled() {
        warn!("traversal was cancelled; reported totals are partial");
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "{}: {} files, {} bytes ({:.2?})",
            root.display(),
            summary.count,
            summary.size,
            started.elapsed()
        );
    }

    Ok(())
}
