//! 賞データモデル

use serde::{Deserialize, Serialize};

/// 1レコードあたりの項目数
pub const FIELD_COUNT: usize = 5;

/// 項目名（詳細表示・入力ダイアログで使用）
pub const FIELD_LABELS: [&str; FIELD_COUNT] = [
    "賞名",
    "応募開始日",
    "締め切り日",
    "文字数制限",
    "現在の文字数",
];

/// 応募を管理する小説賞1件
///
/// CSVの1行に対応し、列の並びはフィールドの宣言順と同じ。
/// 一覧上の位置以外に識別子は持たない。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardRecord {
    /// 賞名
    pub name: String,
    /// 応募開始日
    pub start_date: String,
    /// 締め切り日 (YYYY-MM-DD)
    pub end_date: String,
    /// 文字数制限 (例: 30000～100000)
    pub word_limit: String,
    /// 現在の文字数
    pub current_words: String,
}

impl AwardRecord {
    pub fn new(
        name: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
        word_limit: impl Into<String>,
        current_words: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
            word_limit: word_limit.into(),
            current_words: current_words.into(),
        }
    }

    /// 列順の項目一覧
    pub fn fields(&self) -> [&str; FIELD_COUNT] {
        [
            &self.name,
            &self.start_date,
            &self.end_date,
            &self.word_limit,
            &self.current_words,
        ]
    }

    /// 列順の値から組み立てる
    pub fn from_fields(fields: [String; FIELD_COUNT]) -> Self {
        let [name, start_date, end_date, word_limit, current_words] = fields;
        Self {
            name,
            start_date,
            end_date,
            word_limit,
            current_words,
        }
    }

    /// 詳細ポップアップ用テキスト
    pub fn detail_text(&self) -> String {
        FIELD_LABELS
            .iter()
            .zip(self.fields())
            .map(|(label, value)| format!("{}: {}", label, value))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
