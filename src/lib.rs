//! gamestore - a small game-store REST service over SQLite
//!
//! Modules follow the request path: `http_server` routes call the
//! domain stores in `store`, which run parameter-bound SQL through the
//! `db` client and shape the returned rows with `projection`.

pub mod cli;
pub mod db;
pub mod http_server;
pub mod observability;
pub mod projection;
pub mod store;
