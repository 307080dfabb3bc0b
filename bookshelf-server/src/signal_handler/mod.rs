/// Is the server currently trying to shut down?
///
/// This will be synced via a global [`tokio::sync::watch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InShutdown {
    Yes,
    No,
}

/// Wait until the server should stop serving
///
/// Resolves once `watcher` sees [`InShutdown::Yes`] or its sender is gone. Meant to be passed to
/// `axum::serve(..).with_graceful_shutdown`.
pub async fn shutdown_requested(mut watcher: tokio::sync::watch::Receiver<InShutdown>) {
    if watcher.wait_for(|x| *x == InShutdown::Yes).await.is_err() {
        tracing::warn!("Shutdown channel closed. Shutting down.");
    }
}

/// Listen for SIGTERM, SIGHUP, SIGINT and ctrl-c and announce a shutdown on `shutdown_tx`
pub async fn signal_handler(
    mut watcher: tokio::sync::watch::Receiver<InShutdown>,
    shutdown_tx: tokio::sync::watch::Sender<InShutdown>,
) -> Result<(), std::io::Error> {
    let mut sigterm = match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
    {
        Ok(x) => x,
        Err(e) => {
            tracing::error!("Failed to install SIGTERM listener: {e} Aborting.");
            shutdown_tx.send_replace(InShutdown::Yes);
            return Err(e);
        }
    };
    let mut sighup = match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::hangup()) {
        Ok(x) => x,
        Err(e) => {
            tracing::error!("Failed to install SIGHUP listener: {e} Aborting.");
            shutdown_tx.send_replace(InShutdown::Yes);
            return Err(e);
        }
    };
    // wait for a shutdown signal
    tokio::select! {
        // stop listening when someone else already announced the shutdown
        _ = watcher.changed() => {}
        _ = sigterm.recv() => {
            tracing::info!("Got SIGTERM. Shutting down.");
            shutdown_tx.send_replace(InShutdown::Yes);
        }
        _ = sighup.recv() => {
            tracing::info!("Got SIGHUP. Shutting down.");
            shutdown_tx.send_replace(InShutdown::Yes);
        }
        x = tokio::signal::ctrl_c() =>  {
            match x {
                Ok(()) => {
                    tracing::info!("Received SIGINT. Shutting down.");
                    shutdown_tx.send_replace(InShutdown::Yes);
                }
                Err(err) => {
                    tracing::error!("Unable to listen for shutdown signal: {}", err);
                    // we also shut down in case of error
                    shutdown_tx.send_replace(InShutdown::Yes);
                }
            }
        }
    };

    Ok(())
}
