// =============================================================================
// YouTube Data API v3 連携モジュール
// =============================================================================
// チャンネル・動画・コメント・検索の各エンドポイントを叩く薄いクライアント
//
// 機能:
// - チャンネルのアップロードフィード取得（ID/@ハンドル両対応）
// - 動画詳細・コメントスレッド・関連動画・フリーワード検索
// - 一覧系はvideos.listで再生時間・統計を追加取得してIDで突き合わせる
//
// 使用API: YouTube Data API v3
// https://developers.google.com/youtube/v3/docs
// =============================================================================

mod client;
mod errors;
pub mod types;

pub use client::{merge_video_details, YouTubeClient};
pub use errors::YouTubeError;
