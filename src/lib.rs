pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod forms;
pub mod routes;
pub mod store;
pub mod templates;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::store::MovieStore;

#[derive(Clone)]
pub struct AppState {
    pub movies: MovieStore,
}

pub fn app(state: Arc<AppState>) -> Router {
    routes::router(state).layer(TraceLayer::new_for_http())
}
