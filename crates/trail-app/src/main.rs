//! Checkpoint Trail console host entry point.

use std::io::Write as _;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use trail_app::config::AppConfig;
use trail_app::console::{ConsoleCommand, parse_line};
use trail_app::error::AppError;
use trail_app::host::{Outcome, TimelineHost};
use trail_content::TimelineDocument;
use trail_core::clock::SystemClock;
use trail_core::scheduler::IntervalScheduler;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber. Stdout carries scenes, logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    tracing::info!("Starting checkpoint trail host");

    // Read configuration from environment.
    let config = AppConfig::from_env()?;
    let document = TimelineDocument::load(&config.document)?;
    let period = config.tick_ms.map_or_else(
        || document.settings.tick_interval(),
        Duration::from_millis,
    );
    info!(tick = ?period, version = %config.version, "configuration loaded");

    let (mut host, service) = TimelineHost::start(
        document,
        &config.version,
        config.cutoff_year,
        Arc::new(IntervalScheduler::new(period)),
        Arc::new(SystemClock),
    )?;

    let mut snapshots = host.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = std::io::stdout();

    let initial = snapshots.borrow_and_update().clone();
    writeln!(stdout, "{}", host.scene_line(&initial)?)?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                let outcome = match parse_line(&line) {
                    Ok(None) => continue,
                    Ok(Some(ConsoleCommand::Quit)) => break,
                    Ok(Some(ConsoleCommand::Ui(event))) => {
                        host.handle_event(event).map(|_| Outcome::Continue)
                    }
                    Ok(Some(ConsoleCommand::Version(version))) => host.switch_version(&version),
                    Ok(Some(ConsoleCommand::Cutoff(year))) => host.set_cutoff(year),
                    Err(err) => Err(err),
                };
                match outcome {
                    Ok(Outcome::Redraw) => {
                        let current = snapshots.borrow().clone();
                        writeln!(stdout, "{}", host.scene_line(&current)?)?;
                    }
                    Ok(Outcome::Continue) => {}
                    Err(err @ AppError::Domain(trail_core::error::DomainError::Infrastructure(_))) => {
                        return Err(err);
                    }
                    Err(err) => warn!(%err, "ignoring input line"),
                }
            }
            changed = snapshots.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = snapshots.borrow_and_update().clone();
                writeln!(stdout, "{}", host.scene_line(&snapshot)?)?;
            }
        }
    }

    drop(host);
    drop(snapshots);
    if let Err(err) = service.await {
        warn!(%err, "navigation service ended abnormally");
    }
    info!("checkpoint trail host stopped");

    Ok(())
}
