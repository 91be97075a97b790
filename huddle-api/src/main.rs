/*
 * Copyright 2025 Huddle Contributors
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Actions backend entry point.
//!
//! A small Axum service exposing the actions the browser cannot perform
//! itself: signing call access tokens and querying the identity directory.
//! Secrets are validated at first use, not here — a misconfigured instance
//! starts and reports `CONFIGURATION_ERROR` per action.

use huddle_api::config;
use huddle_api::routes;
use huddle_api::state::AppState;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes::router().layer(cors).with_state(AppState::new());

    let listen_addr = config::listen_addr();
    let listener = tokio::net::TcpListener::bind(&listen_addr)
        .await
        .expect("failed to bind listener");

    tracing::info!("Huddle actions backend listening on {listen_addr}");

    axum::serve(listener, app).await.expect("server error");
}
