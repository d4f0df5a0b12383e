// Dioxus GUI Components Module

pub mod category_panel;
pub mod chart_svg;
pub mod header;
pub mod latest_updates;
pub mod main_window;
pub mod stat_cards;
pub mod status;
pub mod streamer_panel;
pub mod time_series_panel;

// Re-exports for convenience
pub use category_panel::CategoryPanel;
pub use header::DashboardHeader;
pub use latest_updates::LatestUpdates;
pub use main_window::MainWindow;
pub use stat_cards::StatCards;
pub use status::{DashboardFooter, ErrorAlert, LoadingSpinner};
pub use streamer_panel::StreamerPanel;
pub use time_series_panel::TimeSeriesPanel;
