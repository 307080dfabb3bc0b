//! Bookshelf: search the library catalog and schedule book pickups

#![recursion_limit = "256"]

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use std::sync::Arc;

    use axum::Router;
    use bookshelf::app::*;
    use bookshelf_server::{
        config::Config,
        logging::init_tracing,
        signal_handler::{shutdown_requested, signal_handler, InShutdown},
    };
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tracing::{debug, error, info};

    let config = match Config::try_create() {
        Ok(x) => x,
        Err(e) => {
            panic!("Error reading config: {e}.");
        }
    };
    let config_arc = Arc::new(config);

    // flushes the log file when dropped at the end of main
    let _log_guard = init_tracing(&config_arc);
    debug!("Tracing enabled.");
    info!(
        "Browsers will talk to the library backend at {}",
        config_arc.client_settings.api_origin
    );

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    let config_capsule = config_arc.clone();
    let app = Router::new()
        .leptos_routes_with_context(
            &config_arc.leptos_options,
            routes,
            move || {
                provide_context::<Arc<Config>>(config_capsule.clone());
            },
            {
                let leptos_options = config_arc.leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(config_arc.leptos_options.clone());

    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(InShutdown::No);
    let signal_handle = tokio::spawn(signal_handler(shutdown_rx.clone(), shutdown_tx));

    info!(
        "listening on http://{}",
        &config_arc.leptos_options.site_addr
    );
    let listener = match tokio::net::TcpListener::bind(&config_arc.leptos_options.site_addr).await
    {
        Ok(x) => x,
        Err(e) => {
            panic!(
                "Unable to bind to {}: {e}",
                config_arc.leptos_options.site_addr
            );
        }
    };
    if let Err(e) = axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_requested(shutdown_rx))
        .await
    {
        error!("Server stopped with an error: {e}");
    }

    match signal_handle.await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => error!("Signal handler failed: {e}"),
        Err(e) => error!("Signal handler task did not finish: {e}"),
    }
    info!("Shutdown complete.");
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
