use chrono::{DateTime, Utc};
use serde::Deserialize;

// YouTube API レスポンス型
//
// partパラメータに応じて返らないセクションがあるため、
// snippet/contentDetails/statistics はOptionにしている。
// 公開直後でまだ処理中の動画はstatisticsを持たないことがある。

/// サムネイル1枚分
#[derive(Debug, Clone, Deserialize)]
pub struct Thumbnail {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// サムネイルのバリエーション一式
///
/// 解像度バリエーションは動画によって欠けることがあるので
/// すべてOptionで受ける。表示側は`best`/`preview`で
/// 優先順位つきフォールバック選択を行う。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Thumbnails {
    pub default: Option<Thumbnail>,
    pub medium: Option<Thumbnail>,
    pub high: Option<Thumbnail>,
    pub standard: Option<Thumbnail>,
    pub maxres: Option<Thumbnail>,
}

impl Thumbnails {
    /// 最高解像度のサムネイルを選択（maxres → standard → high → medium → default）
    pub fn best(&self) -> Option<&Thumbnail> {
        self.maxres
            .as_ref()
            .or(self.standard.as_ref())
            .or(self.high.as_ref())
            .or(self.medium.as_ref())
            .or(self.default.as_ref())
    }

    /// 一覧表示向けの中解像度サムネイルを選択（medium → high → default）
    pub fn preview(&self) -> Option<&Thumbnail> {
        self.medium
            .as_ref()
            .or(self.high.as_ref())
            .or(self.default.as_ref())
    }
}

/// channels.list のレスポンス
#[derive(Debug, Deserialize)]
pub struct ChannelListResponse {
    #[serde(default)]
    pub items: Vec<ChannelItem>,
}

#[derive(Debug, Deserialize)]
pub struct ChannelItem {
    pub id: String,
    pub snippet: Option<ChannelSnippet>,
    pub statistics: Option<ChannelStatistics>,
    #[serde(rename = "contentDetails")]
    pub content_details: Option<ChannelContentDetails>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChannelSnippet {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnails: Thumbnails,
}

/// チャンネル統計（件数はAPI仕様により文字列で返る）
#[derive(Debug, Default, Deserialize)]
pub struct ChannelStatistics {
    #[serde(rename = "subscriberCount", default)]
    pub subscriber_count: String,
    #[serde(rename = "videoCount", default)]
    pub video_count: String,
    #[serde(rename = "viewCount", default)]
    pub view_count: String,
}

#[derive(Debug, Deserialize)]
pub struct ChannelContentDetails {
    #[serde(rename = "relatedPlaylists")]
    pub related_playlists: RelatedPlaylists,
}

#[derive(Debug, Deserialize)]
pub struct RelatedPlaylists {
    /// アップロード動画の全件プレイリストID
    pub uploads: Option<String>,
}

/// playlistItems.list のレスポンス
#[derive(Debug, Deserialize)]
pub struct PlaylistItemsResponse {
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistItem {
    pub snippet: PlaylistItemSnippet,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistItemSnippet {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "publishedAt")]
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub thumbnails: Thumbnails,
    #[serde(rename = "channelTitle", default)]
    pub channel_title: String,
    #[serde(rename = "channelId", default)]
    pub channel_id: String,
    #[serde(rename = "resourceId")]
    pub resource_id: ResourceId,
}

#[derive(Debug, Deserialize)]
pub struct ResourceId {
    #[serde(rename = "videoId")]
    pub video_id: String,
}

/// search.list のレスポンス
#[derive(Debug, Deserialize)]
pub struct SearchListResponse {
    #[serde(default)]
    pub items: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
pub struct SearchResult {
    pub id: SearchResultId,
    pub snippet: VideoSnippet,
}

/// type=videoで検索しても形式上はvideoId以外もあり得るのでOption
#[derive(Debug, Deserialize)]
pub struct SearchResultId {
    #[serde(rename = "videoId")]
    pub video_id: Option<String>,
}

/// videos.list のレスポンス
#[derive(Debug, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoListItem>,
}

#[derive(Debug, Deserialize)]
pub struct VideoListItem {
    pub id: String,
    pub snippet: Option<VideoSnippet>,
    #[serde(rename = "contentDetails")]
    pub content_details: Option<VideoContentDetails>,
    pub statistics: Option<VideoStatistics>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoSnippet {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "publishedAt")]
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub thumbnails: Thumbnails,
    #[serde(rename = "channelTitle", default)]
    pub channel_title: String,
    #[serde(rename = "channelId", default)]
    pub channel_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoContentDetails {
    /// ISO-8601形式の再生時間（例: PT1H2M3S）
    pub duration: String,
}

/// 動画統計（処理中の動画では一部または全部が欠ける）
#[derive(Debug, Clone, Deserialize)]
pub struct VideoStatistics {
    #[serde(rename = "viewCount")]
    pub view_count: Option<String>,
    #[serde(rename = "likeCount")]
    pub like_count: Option<String>,
    #[serde(rename = "commentCount")]
    pub comment_count: Option<String>,
}

/// commentThreads.list のレスポンス
#[derive(Debug, Deserialize)]
pub struct CommentThreadListResponse {
    #[serde(default)]
    pub items: Vec<CommentThread>,
}

#[derive(Debug, Deserialize)]
pub struct CommentThread {
    pub id: String,
    pub snippet: CommentThreadSnippet,
}

#[derive(Debug, Deserialize)]
pub struct CommentThreadSnippet {
    #[serde(rename = "topLevelComment")]
    pub top_level_comment: TopLevelComment,
}

#[derive(Debug, Deserialize)]
pub struct TopLevelComment {
    pub snippet: CommentSnippet,
}

#[derive(Debug, Deserialize)]
pub struct CommentSnippet {
    #[serde(rename = "authorDisplayName")]
    pub author_display_name: String,
    #[serde(rename = "authorProfileImageUrl", default)]
    pub author_profile_image_url: String,
    #[serde(rename = "textDisplay")]
    pub text_display: String,
    #[serde(rename = "publishedAt")]
    pub published_at: DateTime<Utc>,
    #[serde(rename = "likeCount", default)]
    pub like_count: u64,
}

/// 一覧・詳細の両方で使う動画1件分のまとめ
///
/// playlistItems/searchのsnippetにvideos.listの
/// contentDetails/statisticsをIDで突き合わせたもの。
/// 突き合わせ先が見つからなかった場合はOptionのままにする。
#[derive(Debug, Clone)]
pub struct Video {
    pub id: String,
    pub snippet: VideoSnippet,
    pub content_details: Option<VideoContentDetails>,
    pub statistics: Option<VideoStatistics>,
}

/// チャンネル詳細
#[derive(Debug)]
pub struct Channel {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnails: Thumbnails,
    pub subscriber_count: String,
    pub video_count: String,
    pub view_count: String,
}
