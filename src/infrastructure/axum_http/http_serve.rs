use std::{net::SocketAddr, sync::Arc, time::Duration};

use anyhow::Result;
use axum::{Router, http::Method, routing::get};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};
use url::Url;

use crate::{
    config::config_model::DotEnvyConfig,
    domain::notification::ReviewEventSink,
    infrastructure::{
        axum_http::{default_routers, routers},
        notification::{
            notifier::{NoopReviewSink, ReviewNotifier},
            webhook::ReviewWebhookProvider,
        },
        postgres::postgres_connection::PgPoolSquad,
    },
};

fn build_review_sink(config: &DotEnvyConfig) -> Arc<dyn ReviewEventSink> {
    match config
        .notification
        .review_webhook_url
        .as_deref()
        .map(Url::parse)
    {
        Some(Ok(webhook_url)) => {
            info!("Review webhook notifications enabled");
            Arc::new(ReviewNotifier::new(vec![Arc::new(
                ReviewWebhookProvider::new(webhook_url),
            )]))
        }
        Some(Err(error)) => {
            warn!(error = %error, "REVIEW_WEBHOOK_URL is invalid; notifications disabled");
            Arc::new(NoopReviewSink)
        }
        None => Arc::new(NoopReviewSink),
    }
}

pub async fn start(config: Arc<DotEnvyConfig>, db_pool: Arc<PgPoolSquad>) -> Result<()> {
    let review_event_sink = build_review_sink(&config);

    let app = Router::new()
        .fallback(default_routers::not_found)
        .nest("/api/v1/users", routers::users::routes(Arc::clone(&db_pool)))
        .nest(
            "/api/v1/campaigns",
            routers::campaigns::routes(Arc::clone(&db_pool)),
        )
        .nest(
            "/api/v1/donations",
            routers::donations::routes(Arc::clone(&db_pool)),
        )
        .nest(
            "/api/v1/payments",
            routers::payments::routes(Arc::clone(&db_pool)),
        )
        .nest(
            "/api/v1/follows",
            routers::follows::routes(Arc::clone(&db_pool)),
        )
        .nest(
            "/api/v1/comments",
            routers::comments::routes(Arc::clone(&db_pool)),
        )
        .nest(
            "/api/v1/admin-reviews",
            routers::admin_reviews::routes(Arc::clone(&db_pool), review_event_sink),
        )
        .nest(
            "/api/v1/stats",
            routers::reporting::routes(Arc::clone(&db_pool)),
        )
        .route("/api/v1/health-check", get(default_routers::health_check))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.timeout,
        )))
        .layer(RequestBodyLimitLayer::new(
            (config.server.body_limit * 1024 * 1024).try_into()?,
        ))
        .layer(
            CorsLayer::new()
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PATCH,
                    Method::PUT,
                    Method::DELETE,
                ])
                .allow_origin(Any),
        )
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = TcpListener::bind(addr).await?;

    info!("Server is running on port {}", config.server.port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");
    };

    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received ctrl+C signal"),
        _ = terminate => info!("Received terminate signal"),
    }
}
