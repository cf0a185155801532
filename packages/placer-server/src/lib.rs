pub mod config;
pub mod handler;
pub mod page;
pub mod routes;
pub mod server;

pub use config::{Config, ConfigError, REQUEST_TIMEOUT};
pub use routes::RouteTable;
pub use server::{AppState, app, run, serve};
