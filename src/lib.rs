pub mod analytics;
pub mod api;
pub mod error;
pub mod gui;

// Re-export the main error types for convenience
pub use api::FetchError;
pub use error::{DashboardError, DashboardResult};

// Re-export the backend client and record types
pub use api::{
    ApiClient, Category, CategoryHistoryPoint, DashboardSnapshot, DataSource, MetricsSource,
    Statistics, Stream, StreamHistoryPoint,
};

// Re-export the state store
pub use gui::models::{TimeRange, ViewMode};
pub use gui::state_management::DashboardState;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_structure() {
        // Test that the main modules are accessible
        assert!(std::any::type_name::<api::ApiClient>().contains("ApiClient"));
        assert!(std::any::type_name::<DashboardState>().contains("DashboardState"));
    }

    #[test]
    fn test_error_types_re_exported() {
        // Test that error types are available from the crate root
        let _fetch_error = FetchError::Timeout {
            url: "http://localhost:8000/api/categories".to_string(),
            timeout_ms: 5000,
        };
        let _dashboard_error = DashboardError::configuration("test");
    }
}
