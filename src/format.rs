// =============================================================================
// 表示フォーマットモジュール
// =============================================================================
// YouTube APIのレスポンスを画面表示用の文字列に変換する純粋関数群
//
// 機能:
// - ISO-8601形式の動画時間（PT1H2M3S）を時計表記（1:02:03）に変換
// - 再生数などの大きな数値を省略表記（1.2M / 3.4K）に変換
// - 投稿日時を相対時間表記（"2 weeks ago"）に変換
//
// いずれも副作用なし。相対時間は基準時刻を引数で受け取るため
// テストで決定的に検証できる。
// =============================================================================

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

/// ISO-8601動画時間のパターン
///
/// YouTube APIが返すのは PT[nH][nM][nS] の範囲のみ。
/// 符号付きや日・月・年コンポーネントはマッチさせず、
/// フォールバック表記に落とす。
static DURATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?$").unwrap());

/// パースできない動画時間のフォールバック表記
const DURATION_FALLBACK: &str = "0:00";

/// ISO-8601形式の動画時間を時計表記に変換
///
/// - `PT1H2M3S` → `1:02:03`（時間は0埋めなし、分秒は2桁0埋め）
/// - `PT4M5S` → `4:05`（1時間未満は分:秒のみ、分は0埋めなし）
/// - `PT45S` → `0:45`
/// - パース不能な入力 → `0:00`（エラーにはしない）
pub fn format_duration(duration: &str) -> String {
    let caps = match DURATION_RE.captures(duration) {
        Some(caps) => caps,
        None => return DURATION_FALLBACK.to_string(),
    };

    // 桁あふれするような値はAPIから返らない想定だが、
    // 念のためパース失敗はフォールバック扱いにする
    let component = |i: usize| -> Option<u64> {
        match caps.get(i) {
            Some(m) => m.as_str().parse().ok(),
            None => Some(0),
        }
    };

    let (hours, minutes, seconds) = match (component(1), component(2), component(3)) {
        (Some(h), Some(m), Some(s)) => (h, m, s),
        _ => return DURATION_FALLBACK.to_string(),
    };

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

/// 再生数・登録者数などを省略表記に変換
///
/// - 1,000,000以上 → `1.2M`（小数1桁、四捨五入）
/// - 1,000以上 → `3.4K`
/// - それ未満 → 元の文字列をそのまま返す
///
/// 数値としてパースできない入力もそのまま返す。
pub fn format_count(count: &str) -> String {
    let num: u64 = match count.trim().parse() {
        Ok(n) => n,
        Err(_) => return count.to_string(),
    };

    if num >= 1_000_000 {
        format!("{:.1}M", round_to_tenth(num as f64 / 1_000_000.0))
    } else if num >= 1_000 {
        format!("{:.1}K", round_to_tenth(num as f64 / 1_000.0))
    } else {
        count.to_string()
    }
}

/// 小数第1位で四捨五入（0.5はゼロから遠い方へ丸める）
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// 投稿日時を相対時間表記に変換
///
/// 基準時刻`now`からの経過時間で最大の単位を選ぶ:
/// 分（1時間未満）→ 時間（24時間未満）→ 日（7日未満）→
/// 週（30日未満）→ 月（365日未満）→ 年。
/// 各単位への換算は切り捨て。単数（ちょうど1）のときだけ"s"を付けない。
///
/// 未来の日時は経過0として扱う（"0 minutes ago"）。
pub fn format_relative_time(published: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed_secs = (now - published).num_seconds().max(0);

    let minutes = elapsed_secs / 60;
    let hours = elapsed_secs / 3600;
    let days = elapsed_secs / 86_400;

    if days < 1 {
        if hours < 1 {
            return pluralize(minutes, "minute");
        }
        return pluralize(hours, "hour");
    }

    if days < 7 {
        return pluralize(days, "day");
    }

    if days < 30 {
        return pluralize(days / 7, "week");
    }

    if days < 365 {
        return pluralize(days / 30, "month");
    }

    pluralize(days / 365, "year")
}

/// "<n> <unit>(s) ago" 形式の文字列を組み立てる
fn pluralize(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_format_duration_with_hours() {
        assert_eq!(format_duration("PT1H2M3S"), "1:02:03");
        assert_eq!(format_duration("PT10H0M0S"), "10:00:00");
        // 時間のみ（分秒は省略されている）
        assert_eq!(format_duration("PT2H"), "2:00:00");
        assert_eq!(format_duration("PT1H5S"), "1:00:05");
    }

    #[test]
    fn test_format_duration_without_hours() {
        assert_eq!(format_duration("PT45S"), "0:45");
        assert_eq!(format_duration("PT2M"), "2:00");
        assert_eq!(format_duration("PT4M5S"), "4:05");
        assert_eq!(format_duration("PT59M59S"), "59:59");
    }

    #[test]
    fn test_format_duration_fallback() {
        // 不正な入力はすべて0:00
        assert_eq!(format_duration(""), "0:00");
        assert_eq!(format_duration("garbage"), "0:00");
        assert_eq!(format_duration("1:02:03"), "0:00");
        // 日付コンポーネントはサポート外
        assert_eq!(format_duration("P1DT2H"), "0:00");
        // 負の値もサポート外
        assert_eq!(format_duration("-PT1M"), "0:00");
    }

    #[test]
    fn test_format_count_abbreviation() {
        assert_eq!(format_count("999"), "999");
        assert_eq!(format_count("1000"), "1.0K");
        assert_eq!(format_count("1500"), "1.5K");
        assert_eq!(format_count("999999"), "1000.0K");
        assert_eq!(format_count("1000000"), "1.0M");
        assert_eq!(format_count("2500000"), "2.5M");
    }

    #[test]
    fn test_format_count_rounding() {
        // 小数第1位で四捨五入（0.5はゼロから遠い方へ）
        assert_eq!(format_count("1250"), "1.3K");
        assert_eq!(format_count("1249"), "1.2K");
        assert_eq!(format_count("1950000"), "2.0M");
    }

    #[test]
    fn test_format_count_passthrough() {
        // パースできない入力はそのまま
        assert_eq!(format_count("0"), "0");
        assert_eq!(format_count("N/A"), "N/A");
    }

    #[test]
    fn test_relative_time_minutes_and_hours() {
        let now = Utc::now();
        assert_eq!(
            format_relative_time(now - Duration::seconds(30), now),
            "0 minutes ago"
        );
        assert_eq!(
            format_relative_time(now - Duration::seconds(90), now),
            "1 minute ago"
        );
        assert_eq!(
            format_relative_time(now - Duration::minutes(59), now),
            "59 minutes ago"
        );
        assert_eq!(
            format_relative_time(now - Duration::minutes(60), now),
            "1 hour ago"
        );
        assert_eq!(
            format_relative_time(now - Duration::hours(23), now),
            "23 hours ago"
        );
    }

    #[test]
    fn test_relative_time_days_and_above() {
        let now = Utc::now();
        // ちょうど25時間前は"1 day ago"
        assert_eq!(
            format_relative_time(now - Duration::hours(25), now),
            "1 day ago"
        );
        assert_eq!(
            format_relative_time(now - Duration::days(6), now),
            "6 days ago"
        );
        // 10日前は1週間
        assert_eq!(
            format_relative_time(now - Duration::days(10), now),
            "1 week ago"
        );
        assert_eq!(
            format_relative_time(now - Duration::days(29), now),
            "4 weeks ago"
        );
        assert_eq!(
            format_relative_time(now - Duration::days(30), now),
            "1 month ago"
        );
        assert_eq!(
            format_relative_time(now - Duration::days(364), now),
            "12 months ago"
        );
        assert_eq!(
            format_relative_time(now - Duration::days(365), now),
            "1 year ago"
        );
        assert_eq!(
            format_relative_time(now - Duration::days(800), now),
            "2 years ago"
        );
    }

    #[test]
    fn test_relative_time_future_clamps_to_zero() {
        let now = Utc::now();
        assert_eq!(
            format_relative_time(now + Duration::minutes(5), now),
            "0 minutes ago"
        );
    }
}
