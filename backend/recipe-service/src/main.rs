use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use recipe_service::config::{Config, DatabaseConfig};
use recipe_service::db::{DocumentStore, MongoStore};
use recipe_service::handlers;
use recipe_service::middleware::MetricsMiddleware;
use recipe_service::openapi::ApiDoc;
use recipe_service::AppState;
use std::io;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut terminate = match signal(SignalKind::terminate()) {
            Ok(stream) => stream,
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                let _ = tokio::signal::ctrl_c().await;
                return;
            }
        };

        tokio::select! {
            _ = tokio::signal::ctrl_c() => {},
            _ = terminate.recv() => {},
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,actix_web=info,mongodb=warn".into());
    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn connect_store(database: &DatabaseConfig) -> anyhow::Result<Arc<dyn DocumentStore>> {
    let store = MongoStore::connect(&database.url, &database.name)
        .await
        .with_context(|| format!("connecting to database `{}`", database.name))?;
    Ok(Arc::new(store))
}

fn build_cors(allowed_origins: &str) -> Cors {
    let mut cors = Cors::default();
    for origin in allowed_origins.split(',') {
        let origin = origin.trim();
        if origin == "*" {
            cors = cors.allow_any_origin();
        } else if !origin.is_empty() {
            cors = cors.allowed_origin(origin);
        }
    }
    cors.allow_any_method().allow_any_header().max_age(3600)
}

/// Recipe Service
///
/// HTTP API for the recipe blog.
///
/// # Routes
///
/// - `/api/recipes/*` - Create, search and fetch recipes; recipe comments
/// - `/api/categories` - Create and list categories
/// - `/api/ai/suggest` - Rule-based cooking tips
/// - `/sitemap.xml` - Recipe sitemap
/// - `/`, `/test`, `/health`, `/metrics` - Liveness, diagnostics, metrics
///
/// The service starts without a store when `DATABASE_URL` or `DATABASE_NAME`
/// is missing; data endpoints then answer 500 "Database not configured".
#[actix_web::main]
async fn main() -> io::Result<()> {
    // Support container healthchecks via CLI subcommand
    {
        let mut args = std::env::args();
        let _bin = args.next();
        if let Some(cmd) = args.next() {
            if cmd == "healthcheck" || cmd == "healthcheck-http" {
                let port = std::env::var("PORT").unwrap_or_else(|_| "8000".to_string());
                let url = format!("http://127.0.0.1:{}/health", port);
                match reqwest::Client::new().get(&url).send().await {
                    Ok(resp) if resp.status().is_success() => return Ok(()),
                    Ok(resp) => {
                        eprintln!("healthcheck HTTP status: {}", resp.status());
                        return Err(io::Error::new(io::ErrorKind::Other, "healthcheck failed"));
                    }
                    Err(e) => {
                        eprintln!("healthcheck HTTP error: {}", e);
                        return Err(io::Error::new(io::ErrorKind::Other, "healthcheck error"));
                    }
                }
            }
        }
    }

    dotenvy::dotenv().ok();
    init_tracing();

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {}", e);
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting recipe-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    let store = match &config.database {
        Some(database) => match connect_store(database).await {
            Ok(store) => {
                tracing::info!(database = %database.name, "Document store configured");
                Some(store)
            }
            Err(e) => {
                tracing::error!("Document store unavailable: {:#}", e);
                None
            }
        },
        None => {
            tracing::warn!("DATABASE_URL or DATABASE_NAME not set; running without a store");
            None
        }
    };

    let state = web::Data::new(AppState::new(store, &config));
    let bind_address = config.bind_address();
    let allowed_origins = config.cors.allowed_origins.clone();

    tracing::info!("Starting HTTP server at {}", bind_address);
    tracing::info!("OpenAPI document at {}", ApiDoc::openapi_json_path());

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(build_cors(&allowed_origins))
            .wrap(MetricsMiddleware)
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            .configure(handlers::configure)
    })
    .bind(&bind_address)?
    .workers(config.app.workers)
    .run();

    let server_handle = server.handle();
    let server_task = tokio::spawn(server);

    tokio::select! {
        result = server_task => {
            match result {
                Ok(Ok(())) => tracing::info!("HTTP server stopped"),
                Ok(Err(e)) => {
                    tracing::error!("HTTP server error: {}", e);
                    return Err(e);
                }
                Err(e) => {
                    tracing::error!("HTTP server task join error: {}", e);
                    return Err(io::Error::new(io::ErrorKind::Other, e.to_string()));
                }
            }
        }
        _ = shutdown_signal() => {
            tracing::info!("Shutdown signal received");
            server_handle.stop(true).await;
        }
    }

    tracing::info!("recipe-service shutting down");
    Ok(())
}
