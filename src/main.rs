use anyhow::Context;
use clap::Parser;
use counterpp::cli::Cli;
use counterpp::logging::init_tracing;
use counterpp::shutdown::{install_signal_handler, ShutdownCoordinator};

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.resolve_config()?;
    init_tracing(&config.logging).context("failed to open log file")?;
    tracing::info!(
        interval_ms = config.counter.interval_ms,
        auto = cli.auto,
        "Starting counterpp"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("counterpp-worker")
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let shutdown = ShutdownCoordinator::new();
    install_signal_handler(runtime.handle(), shutdown.handle());

    counterpp::ui::run(&config, cli.auto, runtime.handle(), &shutdown)
        .context("terminal UI failed")?;

    runtime.shutdown_timeout(std::time::Duration::from_millis(100));
    tracing::info!("Exited cleanly");
    Ok(())
}
