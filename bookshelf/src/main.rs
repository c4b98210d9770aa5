//! Web frontend for a book catalog backed by a REST API

#![recursion_limit = "256"]

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use std::sync::Arc;

    use axum::Router;
    use bookshelf::app::*;
    use bookshelf_server::signal_handler::{shutdown_requested, signal_handler, InShutdown};
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tracing::{debug, info};
    use tracing_subscriber::{fmt::format::FmtSpan, prelude::*, EnvFilter};

    let config = match bookshelf_server::config::Config::try_create() {
        Ok(x) => x,
        Err(e) => {
            panic!("Error reading config: {e}.");
        }
    };
    let config_arc = Arc::new(config);

    let my_crate_filter = EnvFilter::new("bookshelf");
    let subscriber = tracing_subscriber::registry().with(my_crate_filter).with(
        tracing_subscriber::fmt::layer()
            .compact()
            .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
            .with_line_number(true)
            .with_filter(config_arc.log_level),
    );
    tracing::subscriber::set_global_default(subscriber).expect("static tracing config");
    debug!("Tracing enabled.");

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    let config_capsule = config_arc.clone();
    let app = Router::new()
        .leptos_routes_with_context(
            &config_arc.leptos_options,
            routes,
            move || {
                provide_context::<Arc<bookshelf_server::config::Config>>(config_capsule.clone());
            },
            {
                let leptos_options = config_arc.leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(config_arc.leptos_options.clone());

    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(InShutdown::No);
    let signal_task = tokio::spawn(signal_handler(shutdown_rx.clone(), shutdown_tx));

    info!(
        "listening on http://{}",
        &config_arc.leptos_options.site_addr
    );
    let listener = match tokio::net::TcpListener::bind(&config_arc.leptos_options.site_addr).await
    {
        Ok(x) => x,
        Err(e) => {
            panic!(
                "Unable to bind to {}: {e}.",
                config_arc.leptos_options.site_addr
            );
        }
    };
    if let Err(e) = axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_requested(shutdown_rx))
        .await
    {
        tracing::error!("Server stopped with an error: {e}");
    }
    // the server can also stop on its own, without any signal
    if !signal_task.is_finished() {
        signal_task.abort();
        return;
    }
    match signal_task.await {
        Ok(Ok(())) => info!("Shutdown complete."),
        Ok(Err(e)) => tracing::error!("Signal handler failed: {e}"),
        Err(e) => tracing::error!("Signal handler panicked: {e}"),
    }
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
