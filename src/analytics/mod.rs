//! 履歴データの加工とモックデータ生成

pub mod history;
pub mod mock_data;

pub use history::{
    category_series, history_timestamp, subject_summary, top_streams, CategorySeries,
    SeriesOrigin, SeriesPoint, SubjectSummary,
};
pub use mock_data::{
    generate_category_history, generate_stream_history, mock_categories, mock_snapshot,
    mock_streams,
};
