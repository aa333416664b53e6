use reqwest::Client;
use serde::de::DeserializeOwned;

use super::{errors::YouTubeError, types::*};
use crate::config;

const API_BASE: &str = "https://www.googleapis.com/youtube/v3";

pub struct YouTubeClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl YouTubeClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, API_BASE.to_string())
    }

    /// ベースURLを差し替えてクライアントを作成（テスト用）
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        // タイムアウトなしのクライアントにフォールバックすると
        // 外部APIがハングした場合にページ表示が止まり続けるため、
        // 構築失敗時はpanicさせる（起動時のみ発生し得る）
        let client = Client::builder()
            .timeout(config::http_timeout())
            .build()
            .expect("Failed to build HTTP client with timeout - this should never fail");

        Self {
            client,
            api_key,
            base_url,
        }
    }

    /// チャンネルの最新動画一覧を取得
    ///
    /// channels.listでアップロードプレイリストIDを解決し、
    /// playlistItems.listで最新N件を取り出したあと、
    /// videos.listで再生時間・統計をまとめて取得してIDで突き合わせる。
    /// チャンネルが見つからない場合は空のVecを返す。
    pub async fn list_channel_videos(
        &self,
        channel: &str,
        max_results: u32,
    ) -> Result<Vec<Video>, YouTubeError> {
        log::info!(
            "Fetching channel videos for {} (quota cost: ~3 units)",
            channel
        );

        let uploads_playlist_id = match self.uploads_playlist_id(channel).await? {
            Some(id) => id,
            None => {
                log::warn!("No channel found for: {}", channel);
                return Ok(Vec::new());
            }
        };

        let max = clamp_max_results(max_results).to_string();
        let playlist: PlaylistItemsResponse = self
            .get_json(
                "playlistItems",
                &[
                    ("part", "snippet"),
                    ("maxResults", &max),
                    ("playlistId", &uploads_playlist_id),
                ],
            )
            .await?;

        let stubs: Vec<Video> = playlist
            .items
            .into_iter()
            .map(|item| {
                let s = item.snippet;
                Video {
                    id: s.resource_id.video_id,
                    snippet: VideoSnippet {
                        title: s.title,
                        description: s.description,
                        published_at: s.published_at,
                        thumbnails: s.thumbnails,
                        channel_title: s.channel_title,
                        channel_id: s.channel_id,
                    },
                    content_details: None,
                    statistics: None,
                }
            })
            .collect();

        self.enrich_with_details(stubs).await
    }

    /// 動画1件の詳細を取得
    ///
    /// 該当なしはエラーではなくNoneで返す。
    pub async fn get_video(&self, video_id: &str) -> Result<Option<Video>, YouTubeError> {
        log::info!("Fetching video detail: {} (quota cost: 1 unit)", video_id);

        let response: VideoListResponse = self
            .get_json(
                "videos",
                &[
                    ("part", "snippet,contentDetails,statistics"),
                    ("id", video_id),
                ],
            )
            .await?;

        let video = response.items.into_iter().next().and_then(|item| {
            let snippet = item.snippet?;
            Some(Video {
                id: item.id,
                snippet,
                content_details: item.content_details,
                statistics: item.statistics,
            })
        });

        Ok(video)
    }

    /// チャンネル詳細を取得（IDまたは@ハンドル）
    ///
    /// 該当なしはエラーではなくNoneで返す。
    pub async fn get_channel(
        &self,
        channel: &str,
    ) -> Result<Option<Channel>, YouTubeError> {
        log::info!("Fetching channel detail: {} (quota cost: 1 unit)", channel);

        let (filter_key, filter_value) = channel_filter(channel);
        let response: ChannelListResponse = self
            .get_json(
                "channels",
                &[
                    ("part", "snippet,statistics"),
                    (filter_key, filter_value),
                ],
            )
            .await?;

        let channel = response.items.into_iter().next().map(|item| {
            let snippet = item.snippet.unwrap_or_default();
            let statistics = item.statistics.unwrap_or_default();
            Channel {
                id: item.id,
                title: snippet.title,
                description: snippet.description,
                thumbnails: snippet.thumbnails,
                subscriber_count: statistics.subscriber_count,
                video_count: statistics.video_count,
                view_count: statistics.view_count,
            }
        });

        Ok(channel)
    }

    /// 動画のコメントスレッド一覧を取得（上限つき）
    pub async fn list_comments(
        &self,
        video_id: &str,
        max_results: u32,
    ) -> Result<Vec<CommentThread>, YouTubeError> {
        log::info!("Fetching comments for video: {} (quota cost: 1 unit)", video_id);

        let max = clamp_max_results(max_results).to_string();
        let response: CommentThreadListResponse = self
            .get_json(
                "commentThreads",
                &[
                    ("part", "snippet"),
                    ("videoId", video_id),
                    ("maxResults", &max),
                ],
            )
            .await?;

        Ok(response.items)
    }

    /// 関連動画一覧を取得
    ///
    /// search.listで候補を集めたあと、videos.listで
    /// 再生時間・統計を取得してIDで突き合わせる。
    pub async fn list_related_videos(
        &self,
        video_id: &str,
        max_results: u32,
    ) -> Result<Vec<Video>, YouTubeError> {
        log::info!(
            "Fetching related videos for: {} (quota cost: ~101 units)",
            video_id
        );

        let max = clamp_max_results(max_results).to_string();
        let response: SearchListResponse = self
            .get_json(
                "search",
                &[
                    ("part", "snippet"),
                    ("relatedToVideoId", video_id),
                    ("type", "video"),
                    ("maxResults", &max),
                ],
            )
            .await?;

        let stubs = search_results_to_videos(response);
        self.enrich_with_details(stubs).await
    }

    /// フリーワード検索
    ///
    /// 軽量な結果のみ返す（再生時間・統計の追加取得は行わない）。
    pub async fn search_videos(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<Video>, YouTubeError> {
        log::info!("Searching videos: {:?} (quota cost: 100 units)", query);

        let max = clamp_max_results(max_results).to_string();
        let response: SearchListResponse = self
            .get_json(
                "search",
                &[
                    ("part", "snippet"),
                    ("q", query),
                    ("type", "video"),
                    ("maxResults", &max),
                ],
            )
            .await?;

        Ok(search_results_to_videos(response))
    }

    /// チャンネルのアップロードプレイリストIDを解決
    async fn uploads_playlist_id(
        &self,
        channel: &str,
    ) -> Result<Option<String>, YouTubeError> {
        let (filter_key, filter_value) = channel_filter(channel);
        let response: ChannelListResponse = self
            .get_json(
                "channels",
                &[("part", "contentDetails"), (filter_key, filter_value)],
            )
            .await?;

        Ok(response
            .items
            .into_iter()
            .next()
            .and_then(|item| item.content_details)
            .and_then(|details| details.related_playlists.uploads))
    }

    /// videos.listで再生時間・統計を取得してスタブに合流させる
    async fn enrich_with_details(
        &self,
        stubs: Vec<Video>,
    ) -> Result<Vec<Video>, YouTubeError> {
        if stubs.is_empty() {
            return Ok(stubs);
        }

        let ids: Vec<&str> = stubs.iter().map(|v| v.id.as_str()).collect();
        let ids = ids.join(",");
        let details: VideoListResponse = self
            .get_json(
                "videos",
                &[("part", "contentDetails,statistics"), ("id", &ids)],
            )
            .await?;

        Ok(merge_video_details(stubs, &details.items))
    }

    /// GETリクエストを発行してJSONをデコードする共通処理
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, YouTubeError> {
        let url = format!("{}/{}", self.base_url, path);

        let mut query: Vec<(&str, &str)> = params.to_vec();
        query.push(("key", self.api_key.as_str()));

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    log::warn!(
                        "YouTube API request timed out after {}s: {}",
                        config::HTTP_TIMEOUT_SECS,
                        path
                    );
                    YouTubeError::Timeout
                } else {
                    YouTubeError::HttpError(e)
                }
            })?;

        match response.status() {
            reqwest::StatusCode::OK => {}
            reqwest::StatusCode::UNAUTHORIZED => {
                log::error!("Unauthorized - API key invalid");
                return Err(YouTubeError::InvalidApiKey);
            }
            reqwest::StatusCode::FORBIDDEN => {
                let error_text = response.text().await.unwrap_or_default();
                log::error!("YouTube API forbidden error: {}", error_text);

                if error_text.contains("quotaExceeded") {
                    return Err(YouTubeError::QuotaExceeded);
                }
                return Err(YouTubeError::InvalidApiKey);
            }
            status => {
                let message = response.text().await.unwrap_or_default();
                log::error!(
                    "YouTube API error - status: {}, body: {}",
                    status,
                    message
                );
                return Err(YouTubeError::ApiError {
                    status: status.as_u16(),
                    message,
                });
            }
        }

        response
            .json()
            .await
            .map_err(|e| YouTubeError::ParseError(e.to_string()))
    }
}

/// チャンネル指定が@ハンドルかIDかでクエリパラメータを切り替える
fn channel_filter(channel: &str) -> (&'static str, &str) {
    if channel.starts_with('@') {
        ("forHandle", channel)
    } else {
        ("id", channel)
    }
}

/// maxResultsをAPI上限に収める
fn clamp_max_results(requested: u32) -> u32 {
    requested.min(config::MAX_RESULTS_CAP)
}

/// 検索結果を動画スタブの列に変換（videoIdを持たない結果は除外）
fn search_results_to_videos(response: SearchListResponse) -> Vec<Video> {
    response
        .items
        .into_iter()
        .filter_map(|result| {
            let id = result.id.video_id?;
            Some(Video {
                id,
                snippet: result.snippet,
                content_details: None,
                statistics: None,
            })
        })
        .collect()
}

/// videos.listの結果をIDで突き合わせてスタブに合流させる
///
/// 左外部結合に相当し、突き合わせ先のない動画はスタブのまま残す。
/// 同じ入力で再実行しても結果は変わらない（冪等）。
pub fn merge_video_details(items: Vec<Video>, details: &[VideoListItem]) -> Vec<Video> {
    items
        .into_iter()
        .map(|mut video| {
            if let Some(detail) = details.iter().find(|d| d.id == video.id) {
                video.content_details = detail.content_details.clone();
                video.statistics = detail.statistics.clone();
            }
            video
        })
        .collect()
}
