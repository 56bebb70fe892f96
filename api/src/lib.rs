// Library exports for testing and external use

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::{configure, create_app, AppState, MySqlServices, ServiceTypes};
