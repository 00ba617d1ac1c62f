#![recursion_limit = "4096"]

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use std::sync::Arc;

    use axum::Router;
    use chatflow_landing::app::*;
    use chatflow_landing::core::config::Config;
    use chatflow_landing::core::email::{
        SendGridSender, WelcomeEmailState, welcome_email_router,
    };
    use chatflow_landing::core::leads::{LeadsApiState, PostgrestStore, leads_api_router};
    use leptos::logging::log;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use tower_http::compression::{CompressionLayer, CompressionLevel};
    use tower_http::services::ServeDir;

    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load application config from environment variables
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Log config (keys redacted by Debug)
    tracing::info!("Config loaded: {:?}", config);

    let store = match PostgrestStore::from_config(&config) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Failed to build lead store client: {}", e);
            std::process::exit(1);
        }
    };
    let sender = match SendGridSender::from_config(&config) {
        Ok(sender) => sender,
        Err(e) => {
            tracing::error!("Failed to build email client: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!("Leads go to {}", store.endpoint());

    // Load configuration from Cargo.toml [package.metadata.leptos]
    // Can be overridden via LEPTOS_SITE_ADDR env var for Docker/K8s
    let conf = match get_configuration(None) {
        Ok(conf) => conf,
        Err(e) => {
            tracing::error!("Failed to load Leptos configuration: {}", e);
            std::process::exit(1);
        }
    };
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    // Serve pre-compressed static assets (.br, .gz) from /pkg
    let pkg_service = ServeDir::new(format!("{}/pkg", leptos_options.site_root))
        .precompressed_br()
        .precompressed_gzip();

    let leptos_router = Router::new()
        .nest_service("/pkg", pkg_service)
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    let app = Router::new()
        // POST /api/leads
        .merge(leads_api_router(LeadsApiState { store }))
        // POST /api/send-email (and /api/sendEmail)
        .merge(welcome_email_router(WelcomeEmailState {
            sender: Arc::new(sender),
            from: config.email_from.clone(),
        }))
        // Leptos routes (merged last so the API paths win)
        .merge(leptos_router)
        .layer(
            CompressionLayer::new()
                .br(true)
                .gzip(true)
                .quality(CompressionLevel::Best),
        );

    log!("listening on http://{}", &addr);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };
    if let Err(e) = axum::serve(listener, app.into_make_service()).await {
        tracing::error!("Server error: {}", e);
    }
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
