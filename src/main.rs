use anyhow::Context;
use staticd::config::{Cli, ServerConfig};
use staticd::daemon;
use staticd::http::connection::ServeContext;
use staticd::http::mime::MimeTable;
use staticd::server::{Listener, Shutdown};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cli = Cli::from_env();
    let cfg = ServerConfig::load(&cli)?.prepare()?;
    let mime = MimeTable::load(&cfg.mime_table)?;

    if cli.daemon && !daemon::is_detached() {
        let log_file = cli.log_file();
        let pid = daemon::spawn_detached(&log_file)?;
        println!(
            "staticd running in background (pid {}), logging to {}",
            pid,
            log_file.display()
        );
        return Ok(());
    }

    tracing::info!(
        root = %cfg.document_root.display(),
        mime_table = %cfg.mime_table.display(),
        mime_records = mime.len(),
        "Starting staticd"
    );

    let (shutdown, signal) = Shutdown::new();
    shutdown
        .install_signal_handlers()
        .context("failed to install signal handlers")?;

    let listener = Listener::bind(ServeContext::new(cfg, mime))?;

    listener.run(signal).await?;

    tracing::info!("Shut down");
    Ok(())
}
