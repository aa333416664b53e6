use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir};

use super::views::{ChannelView, CommentView, VideoCard, VideoDetail};
use crate::config;
use crate::youtube::YouTubeClient;

/// HTTPサーバー用の共有状態
#[derive(Clone)]
pub struct HttpState {
    pub youtube: Arc<YouTubeClient>,
    pub default_channel: Arc<String>,
}

/// ルーターを構築（テストからも使う）
pub fn build_router(state: HttpState, static_dir: PathBuf) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/channel", get(get_default_channel))
        .route("/api/channels/{channel}", get(get_channel))
        .route("/api/channels/{channel}/videos", get(list_channel_videos))
        .route("/api/videos/{id}", get(get_video))
        .route("/api/videos/{id}/comments", get(list_comments))
        .route("/api/videos/{id}/related", get(list_related_videos))
        .route("/api/search", get(search_videos))
        .fallback_service(ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// HTTPサーバーを起動
pub async fn start_http_server(
    state: HttpState,
    addr: &str,
    static_dir: PathBuf,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(state, static_dir);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("HTTP server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// ヘルスチェックエンドポイント
async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "server": "tubeview",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// 一覧系エンドポイントのクエリパラメータ
#[derive(Debug, Deserialize)]
struct ListParams {
    #[serde(rename = "maxResults")]
    max_results: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    q: Option<String>,
    #[serde(rename = "maxResults")]
    max_results: Option<u32>,
}

/// デフォルトチャンネルの詳細（トップページ用）
async fn get_default_channel(State(state): State<HttpState>) -> impl IntoResponse {
    channel_response(&state, &state.default_channel).await
}

/// チャンネル詳細（IDまたは@ハンドル）
async fn get_channel(
    State(state): State<HttpState>,
    Path(channel): Path<String>,
) -> impl IntoResponse {
    channel_response(&state, &channel).await
}

async fn channel_response(state: &HttpState, channel: &str) -> axum::response::Response {
    match state.youtube.get_channel(channel).await {
        Ok(Some(channel)) => Json(ChannelView::from_channel(&channel)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Channel not found" })),
        )
            .into_response(),
        Err(e) => {
            log::warn!("Channel fetch failed for {}: {}", channel, e);
            upstream_unavailable()
        }
    }
}

/// チャンネルの動画一覧
async fn list_channel_videos(
    State(state): State<HttpState>,
    Path(channel): Path<String>,
    Query(params): Query<ListParams>,
) -> impl IntoResponse {
    let max = params
        .max_results
        .unwrap_or(config::DEFAULT_CHANNEL_VIDEO_COUNT);
    let now = Utc::now();

    // 上流の失敗は空一覧に落とす（ページ全体は壊さない）
    match state.youtube.list_channel_videos(&channel, max).await {
        Ok(videos) => {
            let cards: Vec<VideoCard> = videos
                .iter()
                .map(|v| VideoCard::from_video(v, now))
                .collect();
            Json(cards).into_response()
        }
        Err(e) => {
            log::warn!("Channel videos fetch failed for {}: {}", channel, e);
            Json(Vec::<VideoCard>::new()).into_response()
        }
    }
}

/// 動画詳細
async fn get_video(
    State(state): State<HttpState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.youtube.get_video(&id).await {
        Ok(Some(video)) => Json(VideoDetail::from_video(&video, Utc::now())).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Video not found" })),
        )
            .into_response(),
        Err(e) => {
            log::warn!("Video fetch failed for {}: {}", id, e);
            upstream_unavailable()
        }
    }
}

/// 動画のコメント一覧
async fn list_comments(
    State(state): State<HttpState>,
    Path(id): Path<String>,
    Query(params): Query<ListParams>,
) -> impl IntoResponse {
    let max = params.max_results.unwrap_or(config::DEFAULT_COMMENT_COUNT);
    let now = Utc::now();

    match state.youtube.list_comments(&id, max).await {
        Ok(threads) => {
            let comments: Vec<CommentView> = threads
                .iter()
                .map(|t| CommentView::from_thread(t, now))
                .collect();
            Json(comments).into_response()
        }
        Err(e) => {
            // コメント無効化などもここに落ちる
            log::warn!("Comments fetch failed for {}: {}", id, e);
            Json(Vec::<CommentView>::new()).into_response()
        }
    }
}

/// 関連動画一覧
async fn list_related_videos(
    State(state): State<HttpState>,
    Path(id): Path<String>,
    Query(params): Query<ListParams>,
) -> impl IntoResponse {
    let max = params.max_results.unwrap_or(config::DEFAULT_RELATED_COUNT);
    let now = Utc::now();

    match state.youtube.list_related_videos(&id, max).await {
        Ok(videos) => {
            let cards: Vec<VideoCard> = videos
                .iter()
                .map(|v| VideoCard::from_video(v, now))
                .collect();
            Json(cards).into_response()
        }
        Err(e) => {
            log::warn!("Related videos fetch failed for {}: {}", id, e);
            Json(Vec::<VideoCard>::new()).into_response()
        }
    }
}

/// フリーワード検索
async fn search_videos(
    State(state): State<HttpState>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let query = params.q.unwrap_or_default();
    if query.trim().is_empty() {
        return Json(Vec::<VideoCard>::new()).into_response();
    }

    let max = params.max_results.unwrap_or(config::DEFAULT_SEARCH_COUNT);
    let now = Utc::now();

    match state.youtube.search_videos(&query, max).await {
        Ok(videos) => {
            let cards: Vec<VideoCard> = videos
                .iter()
                .map(|v| VideoCard::from_video(v, now))
                .collect();
            Json(cards).into_response()
        }
        Err(e) => {
            log::warn!("Search failed for {:?}: {}", query, e);
            Json(Vec::<VideoCard>::new()).into_response()
        }
    }
}

/// 上流障害時の共通レスポンス
///
/// 障害の種別はユーザーには出さない（ログにのみ残す）。
fn upstream_unavailable() -> axum::response::Response {
    (
        StatusCode::BAD_GATEWAY,
        Json(json!({ "error": "Upstream not available, try again later" })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn test_state(server: &mockito::Server) -> HttpState {
        HttpState {
            youtube: Arc::new(YouTubeClient::with_base_url(
                "test_key".to_string(),
                server.url(),
            )),
            default_channel: Arc::new("UC123".to_string()),
        }
    }

    fn test_router(server: &mockito::Server) -> Router {
        build_router(test_state(server), PathBuf::from("static"))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let server = mockito::Server::new_async().await;
        let app = test_router(&server);

        let response = app
            .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["server"], "tubeview");
    }

    #[tokio::test]
    async fn test_video_not_found_is_404() {
        let mut server = mockito::Server::new_async().await;
        let _videos = server
            .mock("GET", "/videos")
            .match_query(mockito::Matcher::Any)
            .with_body(r#"{"items": []}"#)
            .create_async()
            .await;

        let app = test_router(&server);
        let response = app
            .oneshot(Request::get("/api/videos/missing").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Video not found");
    }

    #[tokio::test]
    async fn test_upstream_failure_degrades_to_empty_list() {
        let mut server = mockito::Server::new_async().await;
        let _channels = server
            .mock("GET", "/channels")
            .match_query(mockito::Matcher::Any)
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let app = test_router(&server);
        let response = app
            .oneshot(
                Request::get("/api/channels/UC123/videos")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        // 一覧系は失敗しても200で空配列を返す
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_upstream_failure_on_detail_is_502() {
        let mut server = mockito::Server::new_async().await;
        let _videos = server
            .mock("GET", "/videos")
            .match_query(mockito::Matcher::Any)
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let app = test_router(&server);
        let response = app
            .oneshot(Request::get("/api/videos/v1").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_empty_search_query_returns_empty() {
        let server = mockito::Server::new_async().await;
        let app = test_router(&server);

        let response = app
            .oneshot(Request::get("/api/search?q=").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!([]));
    }
}
