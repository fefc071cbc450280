//! # HTTP Layer
//!
//! axum routes over the domain stores. The router is built once at
//! startup with the database client passed in explicitly; handlers are
//! thin adapters from extractors to store operations.

pub mod config;
pub mod errors;
pub mod games_routes;
pub mod health_routes;
pub mod orders_routes;
pub mod response;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use response::{CreatedResponse, ListResponse, MutationResponse, SingleResponse};
pub use server::HttpServer;
