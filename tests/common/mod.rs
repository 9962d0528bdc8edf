use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, Response, header},
};
use moviebase::{AppState, db, store::MovieStore};
use tower::ServiceExt;

/// Fresh in-memory database with migrations applied.
pub async fn test_store() -> MovieStore {
    let db = db::connect_and_migrate("sqlite::memory:", 1).await.unwrap();
    MovieStore::new(db)
}

pub fn build_test_app(store: MovieStore) -> Router {
    moviebase::app(Arc::new(AppState { movies: store }))
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_form(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn location(response: &Response<Body>) -> &str {
    response.headers()[header::LOCATION].to_str().unwrap()
}

pub const DUNE: &str = "title=Dune&actor1_name=A&actor2_name=B&director_name=Villeneuve&genre=SciFi&release_year=2021";
pub const ARRIVAL: &str = "title=Arrival&actor1_name=Amy+Adams&actor2_name=Jeremy+Renner&director_name=Villeneuve&genre=SciFi&release_year=2016";
