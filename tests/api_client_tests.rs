//! APIクライアントの統合テスト
//!
//! warp で立てたローカルのモックAPIに対して、並列取得・タイムアウト・
//! エラー変換を確認する。

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{Local, TimeZone};
use rand::rngs::StdRng;
use rand::SeedableRng;
use warp::http::StatusCode;
use warp::Filter;

use streamscope::analytics::mock_snapshot;
use streamscope::api::{ApiClient, DashboardSnapshot, DataSource, FetchError, MetricsSource};

fn fixture() -> DashboardSnapshot {
    let now = Local.with_ymd_and_hms(2025, 6, 10, 15, 30, 0).unwrap();
    mock_snapshot(now, &mut StdRng::seed_from_u64(7))
}

/// 5つのエンドポイントを返すルート。`hours` の値を記録する
fn backend_routes(
    snapshot: DashboardSnapshot,
    requested_hours: Arc<Mutex<Vec<u32>>>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone + Send + Sync + 'static {
    #[derive(serde::Deserialize)]
    struct HoursQuery {
        hours: u32,
    }

    let categories = snapshot.categories.clone();
    let streams = snapshot.streams.clone();
    let category_history = snapshot.category_history.clone();
    let stream_history = snapshot.stream_history.clone();
    let statistics = snapshot.statistics.clone();

    let categories_route = warp::path!("api" / "categories")
        .and(warp::get())
        .map(move || warp::reply::json(&categories));
    let streams_route = warp::path!("api" / "streams")
        .and(warp::get())
        .map(move || warp::reply::json(&streams));

    let hours_log = Arc::clone(&requested_hours);
    let category_history_route = warp::path!("api" / "categories" / "history")
        .and(warp::query::<HoursQuery>())
        .map(move |query: HoursQuery| {
            hours_log.lock().unwrap().push(query.hours);
            warp::reply::json(&category_history)
        });
    let hours_log = Arc::clone(&requested_hours);
    let stream_history_route = warp::path!("api" / "streams" / "history")
        .and(warp::query::<HoursQuery>())
        .map(move |query: HoursQuery| {
            hours_log.lock().unwrap().push(query.hours);
            warp::reply::json(&stream_history)
        });
    let statistics_route = warp::path!("api" / "statistics").map(move || warp::reply::json(&statistics));

    categories_route
        .or(streams_route)
        .unify()
        .or(category_history_route)
        .unify()
        .or(stream_history_route)
        .unify()
        .or(statistics_route)
        .unify()
}

async fn spawn_server<F>(routes: F) -> SocketAddr
where
    F: Filter<Error = warp::Rejection> + Clone + Send + Sync + 'static,
    F::Extract: warp::Reply,
{
    let (addr, server) = warp::serve(routes).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);
    addr
}

fn client_for(addr: SocketAddr) -> ApiClient {
    ApiClient::with_base_url(format!("http://{}/api", addr))
}

#[cfg(test)]
mod snapshot_tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_snapshot_success() {
        let expected = fixture();
        let hours = Arc::new(Mutex::new(Vec::new()));
        let addr = spawn_server(backend_routes(expected.clone(), Arc::clone(&hours))).await;

        let snapshot = tokio_test::assert_ok!(client_for(addr).fetch_snapshot(168).await);

        assert_eq!(snapshot.source, DataSource::Api);
        assert_eq!(snapshot.categories, expected.categories);
        assert_eq!(snapshot.streams, expected.streams);
        assert_eq!(snapshot.category_history, expected.category_history);
        assert_eq!(snapshot.stream_history, expected.stream_history);
        assert_eq!(snapshot.statistics, expected.statistics);

        // 履歴の2エンドポイントに期間が渡される
        assert_eq!(*hours.lock().unwrap(), vec![168, 168]);
    }

    #[tokio::test]
    async fn test_single_endpoints() {
        let expected = fixture();
        let hours = Arc::new(Mutex::new(Vec::new()));
        let addr = spawn_server(backend_routes(expected.clone(), hours)).await;
        let client = client_for(addr);

        let categories = tokio_test::assert_ok!(client.fetch_categories().await);
        assert_eq!(categories.len(), expected.categories.len());

        let statistics = tokio_test::assert_ok!(client.fetch_statistics().await);
        assert_eq!(statistics.total_viewers, expected.statistics.total_viewers);
    }
}

#[cfg(test)]
mod failure_tests {
    use super::*;

    #[tokio::test]
    async fn test_http_error_fails_whole_snapshot() {
        let snapshot = fixture();
        let hours = Arc::new(Mutex::new(Vec::new()));
        let failing_statistics = warp::path!("api" / "statistics")
            .map(|| warp::reply::with_status("internal error", StatusCode::INTERNAL_SERVER_ERROR));
        // 先に評価される statistics ルートが 500 を返す
        let routes = failing_statistics.or(backend_routes(snapshot, hours));
        let addr = spawn_server(routes).await;

        let error = tokio_test::assert_err!(client_for(addr).fetch_snapshot(24).await);
        match error {
            FetchError::Status { status, url } => {
                assert_eq!(status.as_u16(), 500);
                assert!(url.ends_with("/api/statistics"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_slow_endpoint_times_out() {
        let snapshot = fixture();
        let hours = Arc::new(Mutex::new(Vec::new()));
        let slow_categories = warp::path!("api" / "categories").and_then(|| async {
            tokio::time::sleep(Duration::from_millis(500)).await;
            Ok::<_, warp::Rejection>(warp::reply::json(&Vec::<String>::new()))
        });
        let routes = slow_categories.or(backend_routes(snapshot, hours));
        let addr = spawn_server(routes).await;

        let client = client_for(addr).with_timeout(Duration::from_millis(100));
        let error = tokio_test::assert_err!(client.fetch_snapshot(24).await);

        assert!(error.is_timeout());
        assert!(error.to_string().starts_with("Request timeout after 100ms"));
    }

    #[tokio::test]
    async fn test_invalid_json_is_decode_error() {
        let snapshot = fixture();
        let hours = Arc::new(Mutex::new(Vec::new()));
        let broken_streams = warp::path!("api" / "streams").map(|| "{not json");
        let routes = broken_streams.or(backend_routes(snapshot, hours));
        let addr = spawn_server(routes).await;

        let error = tokio_test::assert_err!(client_for(addr).fetch_snapshot(24).await);
        assert!(matches!(error, FetchError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_base_url_without_host_fails_snapshot() {
        let client = ApiClient::with_base_url("http://");
        let error = tokio_test::assert_err!(client.fetch_snapshot(24).await);
        assert!(matches!(error, FetchError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_request_error() {
        // 一度バインドして解放したポートには誰も待ち受けていない
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let error = tokio_test::assert_err!(client_for(addr).fetch_categories().await);
        assert!(matches!(error, FetchError::Request(_)));
    }
}
