//! HTTP surface: axum routes and handlers around the draw engine.

pub mod handler;
pub mod routes;

pub use handler::AppState;
pub use routes::router;
