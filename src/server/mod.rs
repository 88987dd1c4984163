mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{extract::Extension, routing::get, Router};
use tower_http::cors::CorsLayer;

use crate::api::API;
use crate::server::handlers::destinations;

type DynAPI = Arc<dyn API + Send + Sync>;

pub fn app<T: API + Sync + Send + 'static>(api: T) -> Router {
    let api = Arc::new(api) as DynAPI;

    Router::new()
        .route(
            "/api/destinations",
            get(destinations::list).post(destinations::create),
        )
        .layer(Extension(api))
        .layer(CorsLayer::permissive())
}

pub async fn serve<T: API + Sync + Send + 'static>(api: T, port: u16) {
    let app = app(api);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
