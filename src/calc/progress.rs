//! 文字数の進捗率

use std::fmt;

/// 文字数制限が未記入の場合に使う上限
pub const DEFAULT_WORD_LIMIT: i64 = 100_000;

/// 範囲指定の区切り文字 (30000～100000 など)
const RANGE_DELIMITERS: &[char] = &['～', '〜', '~', '-'];

/// 進捗率 (0〜100)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Progress(u8);

impl Progress {
    pub fn percent(self) -> u8 {
        self.0
    }

    /// プログレスバー用の割合 (0.0〜1.0)
    pub fn fraction(self) -> f32 {
        f32::from(self.0) / 100.0
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// 文字数制限の上限値を取得
///
/// 範囲指定は最後の区切り以降を上限とみなす。空欄は `DEFAULT_WORD_LIMIT`。
/// 空欄でなく数値として読めない場合 (`規定なし`, `30000～` など) は
/// `DEFAULT_WORD_LIMIT` を使わず `None` を返す。
pub fn parse_word_limit(text: &str) -> Option<i64> {
    let text = text.trim();
    if text.is_empty() {
        return Some(DEFAULT_WORD_LIMIT);
    }

    let upper = text.rsplit(RANGE_DELIMITERS).next()?;
    parse_count(upper)
}

/// 現在の文字数と制限から進捗率を計算
///
/// 数値として読めない入力や0以下の上限はすべて0%になる。
pub fn calculate_progress(current: &str, limit: &str) -> Progress {
    let Some(current) = parse_count(current) else {
        return Progress::default();
    };
    let Some(limit) = parse_word_limit(limit) else {
        return Progress::default();
    };
    if limit <= 0 {
        return Progress::default();
    }

    let percent = (current as f64 / limit as f64 * 100.0).round();
    Progress(percent.clamp(0.0, 100.0) as u8)
}

/// 全角数字・符号は半角とみなし、桁区切りのカンマは無視する
fn parse_count(text: &str) -> Option<i64> {
    let normalized: String = text
        .trim()
        .chars()
        .filter(|c| !matches!(c, ',' | '，'))
        .map(|c| match c {
            '０'..='９' => char::from(b'0' + (c as u32 - '０' as u32) as u8),
            '－' => '-',
            '＋' => '+',
            _ => c,
        })
        .collect();
    normalized.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_word_limit_range() {
        assert_eq!(parse_word_limit("30000～100000"), Some(100_000));
        assert_eq!(parse_word_limit("30000〜80000"), Some(80_000));
        assert_eq!(parse_word_limit("30000-100000"), Some(100_000));
        assert_eq!(parse_word_limit("～50000"), Some(50_000));
        assert_eq!(parse_word_limit("120,000"), Some(120_000));
    }

    #[test]
    fn test_parse_word_limit_fallbacks() {
        assert_eq!(parse_word_limit(""), Some(DEFAULT_WORD_LIMIT));
        assert_eq!(parse_word_limit("   "), Some(DEFAULT_WORD_LIMIT));
        assert_eq!(parse_word_limit("規定なし"), None);
        assert_eq!(parse_word_limit("30000～"), None);
    }

    #[test]
    fn test_progress_uses_upper_bound() {
        let progress = calculate_progress("50000", "30000～100000");
        assert_eq!(progress.percent(), 50);
        assert_eq!(progress.to_string(), "50%");
    }

    #[test]
    fn test_progress_full_width_digits() {
        assert_eq!(calculate_progress("５００００", "３００００～１０００００").percent(), 50);
        assert_eq!(parse_word_limit("３００００～１０００００"), Some(100_000));
        assert_eq!(parse_word_limit("１２０，０００"), Some(120_000));
        assert_eq!(calculate_progress("－５００", "1000").percent(), 0);
        assert_eq!(calculate_progress("＋５００", "1000").percent(), 50);
    }

    #[test]
    fn test_progress_rounds() {
        assert_eq!(calculate_progress("1", "3").percent(), 33);
        assert_eq!(calculate_progress("2", "3").percent(), 67);
    }

    #[test]
    fn test_progress_clamped() {
        assert_eq!(calculate_progress("150000", "30000～100000").percent(), 100);
        assert_eq!(calculate_progress("-500", "1000").percent(), 0);
        assert_eq!(calculate_progress("0", "1000").percent(), 0);
    }

    #[test]
    fn test_progress_blank_limit_uses_default() {
        assert_eq!(calculate_progress("25000", "").percent(), 25);
    }

    #[test]
    fn test_progress_non_numeric_is_zero() {
        assert_eq!(calculate_progress("abc", "100000").percent(), 0);
        assert_eq!(calculate_progress("", "100000").percent(), 0);
        assert_eq!(calculate_progress("500", "規定なし").percent(), 0);
        assert_eq!(calculate_progress("500", "0").percent(), 0);
    }

    #[test]
    fn test_progress_fraction() {
        assert_eq!(calculate_progress("100", "100").fraction(), 1.0);
        assert_eq!(Progress::default().fraction(), 0.0);
    }
}
