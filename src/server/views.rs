use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::format;
use crate::youtube::types::{Channel, CommentThread, Video};

// フロントエンドに返すビューモデル
//
// 表示用ラベル（再生時間・件数・相対時間）はここで組み立てる。
// 相対時間の基準時刻はハンドラから渡されたものを使う。

/// 統計が取れていない場合の表示
const COUNT_UNAVAILABLE: &str = "N/A";

/// 一覧表示用の動画カード
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoCard {
    pub id: String,
    pub title: String,
    pub channel_id: String,
    pub channel_title: String,
    pub thumbnail_url: Option<String>,
    /// 再生時間の時計表記。詳細未取得の検索結果などではnull
    pub duration_label: Option<String>,
    pub view_count_label: String,
    pub published_label: String,
}

impl VideoCard {
    pub fn from_video(video: &Video, now: DateTime<Utc>) -> Self {
        Self {
            id: video.id.clone(),
            title: video.snippet.title.clone(),
            channel_id: video.snippet.channel_id.clone(),
            channel_title: video.snippet.channel_title.clone(),
            thumbnail_url: video.snippet.thumbnails.best().map(|t| t.url.clone()),
            duration_label: video
                .content_details
                .as_ref()
                .map(|d| format::format_duration(&d.duration)),
            view_count_label: view_count_label(video),
            published_label: format::format_relative_time(video.snippet.published_at, now),
        }
    }
}

/// 動画ページ用の詳細ビュー
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDetail {
    pub id: String,
    pub title: String,
    pub description: String,
    pub channel_id: String,
    pub channel_title: String,
    /// 埋め込みプレイヤーのURL（再生は埋め込みに委譲する）
    pub embed_url: String,
    pub duration_label: Option<String>,
    pub view_count_label: String,
    pub like_count_label: String,
    pub comment_count_label: String,
    pub published_label: String,
}

impl VideoDetail {
    pub fn from_video(video: &Video, now: DateTime<Utc>) -> Self {
        let stats = video.statistics.as_ref();
        Self {
            id: video.id.clone(),
            title: video.snippet.title.clone(),
            description: video.snippet.description.clone(),
            channel_id: video.snippet.channel_id.clone(),
            channel_title: video.snippet.channel_title.clone(),
            embed_url: format!("https://www.youtube.com/embed/{}", video.id),
            duration_label: video
                .content_details
                .as_ref()
                .map(|d| format::format_duration(&d.duration)),
            view_count_label: view_count_label(video),
            like_count_label: count_label(stats.and_then(|s| s.like_count.as_deref())),
            comment_count_label: count_label(stats.and_then(|s| s.comment_count.as_deref())),
            published_label: format::format_relative_time(video.snippet.published_at, now),
        }
    }
}

/// チャンネルヘッダー用ビュー
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail_url: Option<String>,
    pub subscriber_count_label: String,
    pub video_count_label: String,
    pub view_count_label: String,
}

impl ChannelView {
    pub fn from_channel(channel: &Channel) -> Self {
        Self {
            id: channel.id.clone(),
            title: channel.title.clone(),
            description: channel.description.clone(),
            thumbnail_url: channel.thumbnails.best().map(|t| t.url.clone()),
            subscriber_count_label: count_label(Some(&channel.subscriber_count)),
            video_count_label: count_label(Some(&channel.video_count)),
            view_count_label: count_label(Some(&channel.view_count)),
        }
    }
}

/// コメント1件分のビュー
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentView {
    pub id: String,
    pub author_name: String,
    pub author_image_url: String,
    /// APIが返すHTML込みの本文をそのまま渡す
    pub text: String,
    pub like_count: u64,
    pub published_label: String,
}

impl CommentView {
    pub fn from_thread(thread: &CommentThread, now: DateTime<Utc>) -> Self {
        let comment = &thread.snippet.top_level_comment.snippet;
        Self {
            id: thread.id.clone(),
            author_name: comment.author_display_name.clone(),
            author_image_url: comment.author_profile_image_url.clone(),
            text: comment.text_display.clone(),
            like_count: comment.like_count,
            published_label: format::format_relative_time(comment.published_at, now),
        }
    }
}

fn view_count_label(video: &Video) -> String {
    count_label(
        video
            .statistics
            .as_ref()
            .and_then(|s| s.view_count.as_deref()),
    )
}

/// 件数文字列を省略表記に変換（欠けている場合は"N/A"）
fn count_label(raw: Option<&str>) -> String {
    match raw {
        Some(value) if !value.is_empty() => format::format_count(value),
        _ => COUNT_UNAVAILABLE.to_string(),
    }
}
