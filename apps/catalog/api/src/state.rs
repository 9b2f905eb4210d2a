//! Application state management.
//!
//! The state is handed to the API builders once at startup and to the
//! `/ready` handler on every request.

/// Shared application state.
///
/// Cloning is cheap: the database handle is a pooled connection.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// PostgreSQL connection pool; `None` when products live in memory
    pub db: Option<database::postgres::DatabaseConnection>,
}
