//! flightcast client binary entry point.

use std::time::Duration;

use clap::Parser;
use tracing::{error, info};

use flightcast_client::{Cli, HttpGameSource, Poller, PredictorHandle};
use flightcast_core::Result;

fn main() {
    let cli = Cli::parse();

    let log_format = cli.log_format.into();
    if let Err(e) = flightcast_core::init_logging(cli.verbose, cli.log_file.as_deref(), log_format)
    {
        eprintln!("Failed to initialize logging: {e}");
        std::process::exit(1);
    }

    info!(version = env!("CARGO_PKG_VERSION"), "flightcast starting");

    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    if let Err(e) = rt.block_on(run(&cli)) {
        error!(error = %e, "flightcast failed");
        eprintln!("flightcast: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let config = cli.predictor_config()?;
    info!(api_base = %config.api_base, poll_period = ?config.poll_period, "polling configured");

    let source = HttpGameSource::new(&config)?;
    let (mut poller, handle) = Poller::new(Box::new(source), &config, cli.seed);

    if cli.once {
        poller.run_cycle().await;
        print!("{}", flightcast_client::display::render(&handle));
        return Ok(());
    }

    let poller_handle = poller.spawn();
    watch(&handle).await?;
    poller_handle.shutdown().await;
    info!("flightcast stopped");
    Ok(())
}

/// Redraw the status block every second until Ctrl-C.
async fn watch(handle: &PredictorHandle) -> Result<()> {
    let mut refresh = tokio::time::interval(Duration::from_secs(1));
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("interrupt received");
                return Ok(());
            }
            _ = refresh.tick() => {
                // Clear screen and repaint from the top.
                print!("\x1b[2J\x1b[H{}", flightcast_client::display::render(handle));
                let _ = std::io::Write::flush(&mut std::io::stdout());
            }
        }
    }
}
