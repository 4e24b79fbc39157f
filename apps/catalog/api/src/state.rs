//! Shared application state handed to the route builders.

/// Cloned per router; the connection pool is reference-counted internally.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub db: database::postgres::DatabaseConnection,
}
