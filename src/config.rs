// =============================================================================
// 共通設定・定数モジュール
// =============================================================================
// アプリケーション全体で使用する設定値・定数を定義
// 環境変数からの設定読み込みもここで行う
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// HTTPリクエストのデフォルトタイムアウト（秒）
///
/// YouTube APIへのリクエストで使用。
/// ネットワーク状況が悪い場合でも適切にタイムアウトし、
/// ページ表示を長時間ブロックしないようにする。
pub const HTTP_TIMEOUT_SECS: u64 = 10;

/// HTTPリクエストのデフォルトタイムアウト（Duration）
pub fn http_timeout() -> Duration {
    Duration::from_secs(HTTP_TIMEOUT_SECS)
}

/// チャンネルページに表示する動画数のデフォルト
pub const DEFAULT_CHANNEL_VIDEO_COUNT: u32 = 12;

/// 動画ページに表示するコメント数のデフォルト
pub const DEFAULT_COMMENT_COUNT: u32 = 10;

/// 関連動画数のデフォルト
pub const DEFAULT_RELATED_COUNT: u32 = 5;

/// 検索結果数のデフォルト
pub const DEFAULT_SEARCH_COUNT: u32 = 10;

/// maxResultsパラメータの上限（YouTube API側の上限に合わせる）
pub const MAX_RESULTS_CAP: u32 = 50;

/// サーバーのデフォルト待ち受けアドレス
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:19800";

/// デフォルトで表示するチャンネルID
const DEFAULT_CHANNEL_ID: &str = "UCcHQy37BNOHoXx6QhhWKK0A";

/// 設定エラー
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("YOUTUBE_API_KEY is not set")]
    MissingApiKey,
}

/// アプリケーション設定
///
/// 環境変数から読み込む。APIキーのみ必須で、
/// それ以外はデフォルト値を持つ。
#[derive(Debug, Clone)]
pub struct Config {
    /// YouTube Data API v3 のAPIキー
    pub api_key: String,
    /// HTTPサーバーの待ち受けアドレス
    pub bind_addr: String,
    /// トップページに表示するチャンネル（IDまたは@ハンドル）
    pub default_channel: String,
    /// 静的ファイル（HTMLページ）のディレクトリ
    pub static_dir: PathBuf,
}

impl Config {
    /// 環境変数から設定を読み込む
    ///
    /// - `YOUTUBE_API_KEY`: 必須
    /// - `TUBEVIEW_ADDR`: 省略時は127.0.0.1:19800
    /// - `TUBEVIEW_DEFAULT_CHANNEL`: 省略時は既定のチャンネルID
    /// - `TUBEVIEW_STATIC_DIR`: 省略時はカレントディレクトリのstatic/
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("YOUTUBE_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let bind_addr = std::env::var("TUBEVIEW_ADDR")
            .ok()
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let default_channel = std::env::var("TUBEVIEW_DEFAULT_CHANNEL")
            .ok()
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_CHANNEL_ID.to_string());

        let static_dir = std::env::var("TUBEVIEW_STATIC_DIR")
            .ok()
            .filter(|d| !d.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("static"));

        Ok(Self {
            api_key,
            bind_addr,
            default_channel,
            static_dir,
        })
    }
}
