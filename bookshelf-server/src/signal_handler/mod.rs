//! Graceful shutdown on SIGTERM, SIGHUP, SIGINT and Ctrl-C

use tokio::signal::unix::{signal, Signal, SignalKind};
use tokio::sync::watch::{Receiver, Sender};

/// Is the entire app currently trying to shut down?
///
/// This will be synced via a global [`tokio::sync::watch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InShutdown {
    Yes,
    No,
}

fn install(kind: SignalKind, name: &str, shutdown_tx: &Sender<InShutdown>) -> Result<Signal, std::io::Error> {
    signal(kind).map_err(|e| {
        tracing::error!("Failed to install {name} listener: {e} Aborting.");
        shutdown_tx.send_replace(InShutdown::Yes);
        e
    })
}

/// Wait for a shutdown signal and announce it on `shutdown_tx`.
///
/// Returns early (without announcing anything) if someone else announces a shutdown first.
pub async fn signal_handler(
    mut watcher: Receiver<InShutdown>,
    shutdown_tx: Sender<InShutdown>,
) -> Result<(), std::io::Error> {
    let mut sigterm = install(SignalKind::terminate(), "SIGTERM", &shutdown_tx)?;
    let mut sighup = install(SignalKind::hangup(), "SIGHUP", &shutdown_tx)?;
    let mut sigint = install(SignalKind::interrupt(), "SIGINT", &shutdown_tx)?;

    let received = tokio::select! {
        // shutdown the signal handler when some other task signals a shutdown
        _ = watcher.changed() => None,
        _ = sigterm.recv() => Some("SIGTERM"),
        _ = sighup.recv() => Some("SIGHUP"),
        _ = sigint.recv() => Some("SIGINT"),
        x = tokio::signal::ctrl_c() => match x {
            Ok(()) => Some("Ctrl-c"),
            Err(err) => {
                tracing::error!("Unable to listen for shutdown signal: {}", err);
                // we also shut down in case of error
                Some("an error in the ctrl-c listener")
            }
        },
    };
    if let Some(name) = received {
        tracing::info!("Got {name}. Shutting down.");
        shutdown_tx.send_replace(InShutdown::Yes);
    }
    Ok(())
}

/// Resolves once a shutdown has been announced (or the sender is gone).
///
/// Meant for `axum::serve(..).with_graceful_shutdown(..)`.
pub async fn shutdown_requested(mut watcher: Receiver<InShutdown>) {
    loop {
        if *watcher.borrow_and_update() == InShutdown::Yes {
            return;
        }
        if watcher.changed().await.is_err() {
            return;
        }
    }
}
